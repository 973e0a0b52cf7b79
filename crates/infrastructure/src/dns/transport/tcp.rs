use super::{bound_socket, ListenerError};
use crate::dns::server::DnsServerHandler;
use ferrous_mockdns_domain::Transport;
use socket2::{Protocol, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

const LISTEN_BACKLOG: i32 = 1024;
const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TcpListener {
    listener: tokio::net::TcpListener,
    local_addr: SocketAddr,
    idle_timeout: Duration,
}

impl TcpListener {
    /// Must be called from within a tokio runtime.
    pub fn bind(addr: SocketAddr) -> Result<Self, ListenerError> {
        let fail = |e| ListenerError::bind(Transport::Tcp, addr, e);

        let socket = bound_socket(addr, Type::STREAM, Protocol::TCP).map_err(fail)?;
        socket.listen(LISTEN_BACKLOG).map_err(fail)?;
        let std_listener: std::net::TcpListener = socket.into();
        let listener = tokio::net::TcpListener::from_std(std_listener).map_err(fail)?;
        let local_addr = listener.local_addr().map_err(fail)?;

        Ok(Self {
            listener,
            local_addr,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        })
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Accept loop; each connection is served from its own task.
    pub async fn serve(self, handler: Arc<DnsServerHandler>) -> Result<(), ListenerError> {
        info!(address = %self.local_addr, idle_timeout_secs = self.idle_timeout.as_secs(), "TCP listener started");

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) if is_transient(&e) => {
                    debug!(error = %e, "Transient TCP accept error");
                    continue;
                }
                Err(e) => {
                    return Err(ListenerError::Io {
                        transport: Transport::Tcp,
                        source: e,
                    })
                }
            };

            let handler = Arc::clone(&handler);
            let idle_timeout = self.idle_timeout;

            tokio::spawn(async move {
                serve_connection(stream, peer, handler, idle_timeout).await;
            });
        }
    }
}

/// Messages on one connection are answered strictly in order.
async fn serve_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) {
    debug!(client = %peer, "TCP connection accepted");

    loop {
        let message =
            match tokio::time::timeout(idle_timeout, read_with_length_prefix(&mut stream)).await {
                Err(_) => {
                    debug!(client = %peer, "Closing idle TCP connection");
                    break;
                }
                Ok(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Ok(Err(e)) => {
                    debug!(client = %peer, error = %e, "Failed to read TCP query");
                    break;
                }
                Ok(Ok(message)) => message,
            };

        let Some(reply) = handler.handle(&message, Transport::Tcp).await else {
            continue;
        };

        if let Err(e) = send_with_length_prefix(&mut stream, &reply).await {
            warn!(client = %peer, error = %e, "Failed to send TCP reply");
            break;
        }
    }
}

fn is_transient(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
    )
}

pub async fn send_with_length_prefix<S>(stream: &mut S, message_bytes: &[u8]) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("DNS message too large: {} bytes", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await?;

    Ok(())
}

pub async fn read_with_length_prefix<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await?;

    Ok(message)
}
