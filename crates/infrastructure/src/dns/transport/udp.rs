use super::{bound_socket, ListenerError};
use crate::dns::server::DnsServerHandler;
use ferrous_mockdns_domain::Transport;
use socket2::{Protocol, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info};

const RECV_BUFFER_SIZE: usize = 4096;

pub struct UdpListener {
    socket: Arc<UdpSocket>,
    local_addr: SocketAddr,
}

impl UdpListener {
    /// Must be called from within a tokio runtime.
    pub fn bind(addr: SocketAddr) -> Result<Self, ListenerError> {
        let fail = |e| ListenerError::bind(Transport::Udp, addr, e);

        let socket = bound_socket(addr, Type::DGRAM, Protocol::UDP).map_err(fail)?;
        let std_socket: std::net::UdpSocket = socket.into();
        let socket = UdpSocket::from_std(std_socket).map_err(fail)?;
        let local_addr = socket.local_addr().map_err(fail)?;

        Ok(Self {
            socket: Arc::new(socket),
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Receive loop. Every datagram is answered from its own task so a
    /// delayed reply never holds up the next one.
    pub async fn serve(self, handler: Arc<DnsServerHandler>) -> Result<(), ListenerError> {
        info!(address = %self.local_addr, "UDP listener started");

        let mut recv_buf = vec![0u8; RECV_BUFFER_SIZE];

        loop {
            let (len, peer) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(e) if is_transient(&e) => {
                    debug!(error = %e, "Transient UDP receive error");
                    continue;
                }
                Err(e) => {
                    return Err(ListenerError::Io {
                        transport: Transport::Udp,
                        source: e,
                    })
                }
            };

            let packet = recv_buf[..len].to_vec();
            let socket = Arc::clone(&self.socket);
            let handler = Arc::clone(&handler);

            tokio::spawn(async move {
                if let Some(reply) = handler.handle(&packet, Transport::Udp).await {
                    if let Err(e) = socket.send_to(&reply, peer).await {
                        debug!(client = %peer, error = %e, "Failed to send UDP reply");
                    }
                }
            });
        }
    }
}

fn is_transient(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionRefused
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
    )
}
