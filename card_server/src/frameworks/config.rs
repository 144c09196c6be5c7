use serde::Deserialize;
use std::env;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

// Runtime/server settings. Environment wins over the config file, which wins over defaults.

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SOURCE_FILE: &str = "filtered_cards.json";
pub const DEFAULT_CONFIG_FILE: &str = "card_server.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    // Development mode: verbose logs and per-request traces.
    pub debug: bool,
    pub host: IpAddr,
    pub port: u16,
    // Always absolute once resolved against the deployment root.
    pub source_path: PathBuf,
}

// Optional settings read from the TOML config file.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub debug: Option<bool>,
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub source_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load() -> io::Result<Self> {
        Self::load_from(&deployment_root(), |key| env::var(key).ok())
    }

    // Reads the config file named by `CARD_SERVER_CONFIG` (relative to `root`), then applies env.
    pub fn load_from(root: &Path, env_var: impl Fn(&str) -> Option<String>) -> io::Result<Self> {
        let config_file = env_var("CARD_SERVER_CONFIG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let file = load_file_config(&resolve_against(root, Path::new(&config_file)))?;

        Ok(Self::from_sources(file, env_var, root))
    }

    pub fn from_sources(
        file: FileConfig,
        env_var: impl Fn(&str) -> Option<String>,
        root: &Path,
    ) -> Self {
        let debug = env_var("CARD_SERVER_DEBUG")
            .and_then(|value| parse_flag(&value))
            .or(file.debug)
            .unwrap_or(false);
        let host = env_var("CARD_SERVER_HOST")
            .and_then(|value| value.trim().parse().ok())
            .or(file.host)
            .unwrap_or(DEFAULT_HOST);
        let port = env_var("CARD_SERVER_PORT")
            .and_then(|value| value.trim().parse().ok())
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);
        let source_path = env_var("CARD_SOURCE_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or(file.source_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_FILE));

        Self {
            debug,
            host,
            port,
            source_path: resolve_against(root, &source_path),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// Directory holding the running executable; falls back to the working directory.
pub fn deployment_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

// A missing file yields defaults; anything else wrong with it is a startup error.
pub fn load_file_config(path: &Path) -> io::Result<FileConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(err) => {
            return Err(io::Error::new(
                err.kind(),
                format!("failed to read config file {}: {err}", path.display()),
            ));
        }
    };

    toml::from_str(&text).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config file {}: {err}", path.display()),
        )
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
