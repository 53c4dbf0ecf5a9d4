//! Command-line configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// In-memory customer profile HTTP service.
#[derive(Debug, Clone, Parser)]
#[command(name = "customer-profile", version, about)]
pub struct Config {
    /// Port to listen on.
    #[arg(value_name = "PORT", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_is_an_optional_positional() {
        let config = Config::try_parse_from(["customer-profile", "9001"]).unwrap();
        assert_eq!(config.port, 9001);
    }

    #[test]
    fn host_flag_overrides_bind_address() {
        let config = Config::try_parse_from(["customer-profile", "--host", "127.0.0.1", "8080"]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Config::try_parse_from(["customer-profile", "70000"]).is_err());
    }
}
