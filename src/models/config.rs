//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    /// Cookie domain shared with the external auth service.
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Directory where attached reading images are stored.
    pub upload_dir: String,
    /// Secret shared with the auth service, used to verify session tokens.
    pub secret: String,
    pub auth_service_url: String,
}
