// Process configuration, read from the environment.
//
// CATS_HOST         bind address, default 0.0.0.0
// CATS_PORT         bind port, default 8080
// CATS_ID_STRATEGY  random | sequential, default random

use anyhow::Context;
use std::net::{IpAddr, SocketAddr};

use crate::modules::cats::core::identity::IdStrategy;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub id_strategy: IdStrategy,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("CATS_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .context("CATS_HOST must be an IP address")?;
        let port = match lookup("CATS_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("CATS_PORT must be a port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };
        let id_strategy = match lookup("CATS_ID_STRATEGY") {
            Some(raw) => raw.parse::<IdStrategy>()?,
            None => IdStrategy::default(),
        };
        Ok(Self {
            host,
            port,
            id_strategy,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
