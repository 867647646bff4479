/// Load state of a result panel.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    /// Banner line, already prefixed with the panel's subject.
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// A result container with its loading indicator and error banner.
///
/// Each call replaces the whole panel, so content, loading and error are
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<T> {
    state: FetchState<T>,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            state: FetchState::NotStarted,
        }
    }
}

impl<T> Panel<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// A panel that was never triggered stays hidden.
    pub fn is_visible(&self) -> bool {
        !matches!(self.state, FetchState::NotStarted)
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error_banner(&self) -> Option<&str> {
        self.state.error().map(String::as_str)
    }

    pub fn content(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn content_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn show_loading(&mut self) {
        self.state = FetchState::Loading;
    }

    pub fn show_error(&mut self, banner: String) {
        self.state = FetchState::Error(banner);
    }

    pub fn render(&mut self, content: T) {
        self.state = FetchState::Success(content);
    }
}
