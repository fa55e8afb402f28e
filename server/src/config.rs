use std::net::SocketAddr;
use std::path::PathBuf;

static HTTP_PORT: &str = "HTTP_PORT";
static HTTPS_PORT: &str = "HTTPS_PORT";
static TLS_CERT_PATH: &str = "TLS_CERT_PATH";
static TLS_KEY_PATH: &str = "TLS_KEY_PATH";
static STATIC_DIR: &str = "STATIC_DIR";

static DEFAULT_HTTP_PORT: u16 = 5000;
static DEFAULT_HTTPS_PORT: u16 = 8443;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Plain HTTP listener address.
    pub http_addr: SocketAddr,
    /// TLS listener address, used only when `tls` is present.
    pub https_addr: SocketAddr,
    /// Enabled when both `TLS_CERT_PATH` and `TLS_KEY_PATH` are set.
    pub tls: Option<TlsConfig>,
    /// Directory holding the pre-built frontend bundle, when one is served.
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let tls = match (dotenvy::var(TLS_CERT_PATH), dotenvy::var(TLS_KEY_PATH)) {
            (Ok(cert), Ok(key)) => Some(TlsConfig {
                cert_path: cert.into(),
                key_path: key.into(),
            }),
            _ => None,
        };

        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], port(HTTP_PORT, DEFAULT_HTTP_PORT))),
            https_addr: SocketAddr::from(([0, 0, 0, 0], port(HTTPS_PORT, DEFAULT_HTTPS_PORT))),
            tls,
            static_dir: dotenvy::var(STATIC_DIR).ok().map(PathBuf::from),
        }
    }
}

fn port(key: &str, default: u16) -> u16 {
    dotenvy::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
