mod table;
mod view;

pub use view::MetricsPanel;
