mod config;

pub use config::GlobalConfig;
pub use config::CONFIG;
