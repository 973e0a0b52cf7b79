use ferrous_mockdns_domain::config::ServerConfig;
use ferrous_mockdns_infrastructure::dns::{
    DnsServerHandler, ListenerError, TcpListener, UdpListener,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{error, info};

/// Bind every enabled listener, then run them until one of them stops.
///
/// All binds happen before anything is served, so a port conflict on the
/// second transport fails startup instead of leaving a half-running server.
pub async fn start_dns_server(
    config: &ServerConfig,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<()> {
    let socket_addr = config.socket_addr().map_err(anyhow::Error::msg)?;

    let udp = if config.udp {
        Some(UdpListener::bind(socket_addr)?)
    } else {
        None
    };

    let tcp = if config.tcp {
        let idle_timeout = Duration::from_secs(config.tcp_idle_timeout_secs);
        Some(TcpListener::bind(socket_addr)?.with_idle_timeout(idle_timeout))
    } else {
        None
    };

    let mut join_set: JoinSet<Result<(), ListenerError>> = JoinSet::new();

    if let Some(listener) = udp {
        info!(address = %listener.local_addr(), "Serving DNS over UDP");
        join_set.spawn(listener.serve(handler.clone()));
    }

    if let Some(listener) = tcp {
        info!(address = %listener.local_addr(), "Serving DNS over TCP");
        join_set.spawn(listener.serve(handler.clone()));
    }

    info!(listeners = join_set.len(), "DNS server ready");

    while let Some(result) = join_set.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!(error = %e, "DNS listener stopped");
                return Err(e.into());
            }
            Err(e) => {
                error!(error = %e, "DNS listener task failed");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
