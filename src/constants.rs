//! Application-wide constants
//!
//! Magic strings and default values used across the application.

/// Config file location constants
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "transformer-db";

    /// Config file name
    pub const FILENAME: &str = "config.toml";
}

/// REST collaborator defaults
pub mod server {
    /// Base URL of the remote resource host
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    /// Collection path segment (`GET /transformers`, `PUT /transformers/{id}`)
    pub const DEFAULT_RESOURCE: &str = "transformers";
}

/// Draft text conventions
pub mod draft {
    /// Separator used when splitting submitted weapons text
    pub const WEAPON_SEPARATOR: char = ',';

    /// Joiner used when rendering weapons for editing and display
    pub const WEAPON_JOINER: &str = ", ";
}
