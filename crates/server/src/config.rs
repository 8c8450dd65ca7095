//! Server configuration: defaults, overridable from the environment.

use std::env;

pub const BIND_ENV: &str = "ZONING_BIND";
pub const SERVE_DIR_ENV: &str = "ZONING_SERVE_DIR";

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Address and port of the HTTP listener.
    pub bind: String,

    /// Directory of static files served for unmatched routes (optional).
    pub serve_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            serve_dir: None,
        }
    }
}

impl ServerConfig {
    /// Defaults with any `ZONING_*` variables applied on top.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(bind) = lookup(BIND_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.bind = bind;
        }
        cfg.serve_dir = lookup(SERVE_DIR_ENV).filter(|v| !v.trim().is_empty());
        cfg
    }
}
