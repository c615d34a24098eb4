mod board_config;
mod logging_config;
mod main_config;
mod window_config;

pub use board_config::BoardConfig;
pub use logging_config::LoggingConfig;
pub use main_config::{Config, get_config_manager};
pub use window_config::WindowConfig;
