use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 5001;
const DEFAULT_LOG_FILTER: &str = "info";

const HOST_VAR: &str = "TRANSCRIPT_SERVICE_HOST";
const PORT_VAR: &str = "TRANSCRIPT_SERVICE_PORT";
const LOG_VAR: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Values that do not
    /// parse are ignored and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            match host.trim().parse() {
                Ok(host) => config.host = host,
                // Logger is not up yet when this runs from main.
                Err(_) => eprintln!("Ignoring invalid {}: {:?}", HOST_VAR, host),
            }
        }

        if let Some(port) = lookup(PORT_VAR) {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => eprintln!("Ignoring invalid {}: {:?}", PORT_VAR, port),
            }
        }

        if let Some(filter) = lookup(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:5001");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TRANSCRIPT_SERVICE_HOST", "0.0.0.0"),
            ("TRANSCRIPT_SERVICE_PORT", "8080"),
            ("RUST_LOG", "transcript_service=debug"),
        ]));
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.log_filter, "transcript_service=debug");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TRANSCRIPT_SERVICE_HOST", "not-an-ip"),
            ("TRANSCRIPT_SERVICE_PORT", "99999"),
            ("RUST_LOG", "  "),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
