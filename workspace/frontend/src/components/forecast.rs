mod form;
mod table;
mod view;

pub use form::ForecastForm;
pub use view::ForecastPanel;
