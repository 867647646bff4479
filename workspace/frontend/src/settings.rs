use common::StaleResponsePolicy;
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prediction service host (e.g., "127.0.0.1" or "forecast.example.com")
    pub api_host: String,

    /// Prediction service port (e.g., 8000)
    pub api_port: u16,

    /// Path prefix in front of `/predict` and `/model-metrics`
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// How overlapping requests for the same panel are settled
    pub stale_response_policy: StaleResponsePolicy,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            stale_response_policy: StaleResponsePolicy::default(),
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location.
    /// Overrides are read from localStorage; nothing is ever written back.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        let Ok(Some(storage)) = window.local_storage() else {
            return settings;
        };

        if let Ok(Some(api_host)) = storage.get_item("weather_api_host") {
            settings.api_host = api_host;
        }

        if let Ok(Some(api_port)) = storage.get_item("weather_api_port") {
            if let Ok(port_val) = api_port.parse::<u16>() {
                settings.api_port = port_val;
            }
        }

        if let Ok(Some(api_path)) = storage.get_item("weather_api_path") {
            settings.api_path = api_path;
        }

        if let Ok(Some(use_https)) = storage.get_item("weather_api_use_https") {
            settings.api_use_https = use_https.to_lowercase() == "true";
        }

        if let Ok(Some(log_level)) = storage.get_item("weather_log_level") {
            settings.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => settings.log_level,
            };
        }

        if let Ok(Some(policy)) = storage.get_item("weather_stale_policy") {
            match policy.parse::<StaleResponsePolicy>() {
                Ok(policy) => settings.stale_response_policy = policy,
                Err(e) => log::warn!("Ignoring weather_stale_policy: {}", e),
            }
        }

        settings
    }

    /// Get the base API URL (protocol + host + port + path prefix)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
