use tokio::net::TcpListener;

use crate::config::Config;

/// Binds `HOST:PORT`. `HOST` may be a hostname (`localhost`) or any IPv4/IPv6 literal.
pub async fn bind_listener(config: &Config) -> std::io::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port)).await
}
