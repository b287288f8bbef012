use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATA_FILE: &str = "DATA_FILE";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 10000;
    pub const DATA_FILE: &str = "db.json";
}

/// Port the HTTP server binds to
pub fn port() -> u16 {
    env::var(env_vars::PORT)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults::PORT)
}

/// Path of the JSON data file backing the record store
pub fn data_file() -> PathBuf {
    env::var(env_vars::DATA_FILE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::DATA_FILE))
}
