use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Runtime configuration of the wallet service.
///
/// Every flag can also be supplied through its environment variable.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "In-memory wallet and transfer service", long_about = None)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "TRANSFER_MANAGER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "TRANSFER_MANAGER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log filter directives, e.g. `info` or `transfer_manager=debug,tower_http=info`
    #[arg(long, env = "TRANSFER_MANAGER_LOG", default_value = "info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
