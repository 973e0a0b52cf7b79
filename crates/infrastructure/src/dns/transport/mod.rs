pub mod tcp;
pub mod udp;

use ferrous_mockdns_domain::Transport;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use thiserror::Error;

pub use tcp::TcpListener;
pub use udp::UdpListener;

#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("Failed to bind {transport} listener on {addr}: {reason}")]
    Bind {
        transport: Transport,
        addr: SocketAddr,
        reason: String,
    },

    #[error("{transport} listener failed: {source}")]
    Io {
        transport: Transport,
        #[source]
        source: std::io::Error,
    },
}

impl ListenerError {
    pub(crate) fn bind(transport: Transport, addr: SocketAddr, error: std::io::Error) -> Self {
        ListenerError::Bind {
            transport,
            addr,
            reason: error.to_string(),
        }
    }
}

/// Non-blocking socket bound to `addr`; IPv6 sockets also accept IPv4.
/// Reuse-address is set on stream sockets only; on UDP it permits
/// duplicate binds of the same port.
fn bound_socket(addr: SocketAddr, ty: Type, protocol: Protocol) -> std::io::Result<Socket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, ty, Some(protocol))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    if ty == Type::STREAM {
        socket.set_reuse_address(true)?;
    }
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    Ok(socket)
}
