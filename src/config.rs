use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: parse_port(&optional("SERVER_PORT", "3000"))?,
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("SERVER_PORT must be a valid port number, got: {raw:?}"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_port_accepts_valid_number() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn parse_port_rejects_out_of_range() {
        let err = parse_port("70000").unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn parse_port_rejects_garbage() {
        let err = parse_port("http").unwrap_err();
        assert!(err.to_string().contains("valid port number"));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = Config {
            server_host: "127.0.0.1".to_owned(),
            server_port: 3000,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
