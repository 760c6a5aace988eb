//! Server configuration

use anyhow::Result;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind")]
    pub bind: IpAddr,
}

fn default_port() -> u16 {
    8080
}

fn default_bind() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Name of the optional config file inside the config dir (extension picked
/// by the `config` crate, e.g. `portfolio.toml`)
const CONFIG_FILE_STEM: &str = "portfolio";

/// Get config directory (PORTFOLIO_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/portfolio-site");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("portfolio-site");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/portfolio-site");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("portfolio-site");
        }
    }

    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("bind", default_bind().to_string())?
        .add_source(
            ::config::File::with_name(&config_dir.join(CONFIG_FILE_STEM).to_string_lossy())
                .required(false),
        )
        // PORTFOLIO_PORT, PORTFOLIO_BIND
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

    // Hosting platforms hand out the port as plain PORT; PORTFOLIO_PORT wins
    if std::env::var("PORTFOLIO_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
