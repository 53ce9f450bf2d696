//! Default values and functions for configuration

// Default constants
pub(crate) const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub(crate) const ENV_PREFIX: &str = "BACKUP_ORGANIZER";

pub(crate) fn default_server_host() -> String {
    DEFAULT_SERVER_HOST.to_string()
}

pub(crate) fn default_server_port() -> u16 {
    5000
}

pub(crate) fn default_allowed_origins() -> Vec<String> {
    Vec::new() // Empty by default = CORS disabled
}
