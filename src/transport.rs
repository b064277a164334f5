use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use log::{debug, warn};

use crate::client::ConnectionConfig;
use crate::error::SpdError;

/// Byte-stream connection to the instrument.
///
/// The client is generic over this trait so the protocol layer can be
/// exercised against an in-memory transport (see [`crate::mock`]). The real
/// implementation is [`TcpTransport`].
pub trait Transport {
    /// Write the whole buffer to the connection.
    fn send_all(&mut self, buf: &[u8]) -> Result<(), SpdError>;

    /// Read one chunk of response bytes, returning how many were read.
    ///
    /// Blocks up to the configured read timeout and surfaces expiry as
    /// [`SpdError::Timeout`].
    fn recv_chunk(&mut self, buf: &mut [u8]) -> Result<usize, SpdError>;

    /// Release the connection. Must be idempotent.
    fn shutdown(&mut self) -> Result<(), SpdError>;
}

/// Blocking TCP connection with connect/read/write timeouts applied.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connect to `addr`, failing hard if the instrument is unreachable.
    pub fn connect(addr: SocketAddr, config: &ConnectionConfig) -> Result<Self, SpdError> {
        debug!("connecting to {addr}");

        let stream = TcpStream::connect_timeout(&addr, config.connect_timeout).map_err(|e| {
            warn!("failed to connect to {addr}: {e}");
            if e.kind() == ErrorKind::TimedOut {
                SpdError::Timeout
            } else {
                SpdError::Io {
                    source: e,
                    context: format!("failed to connect to {addr}"),
                }
            }
        })?;

        stream
            .set_read_timeout(Some(config.read_timeout))
            .and_then(|()| stream.set_write_timeout(Some(config.write_timeout)))
            .map_err(|e| SpdError::Io {
                source: e,
                context: "failed to apply socket timeouts".to_string(),
            })?;

        debug!("connected to {addr}");
        Ok(Self { stream })
    }
}

impl Transport for TcpTransport {
    fn send_all(&mut self, buf: &[u8]) -> Result<(), SpdError> {
        self.stream.write_all(buf).map_err(|e| SpdError::Io {
            source: e,
            context: "writing command".to_string(),
        })
    }

    fn recv_chunk(&mut self, buf: &mut [u8]) -> Result<usize, SpdError> {
        match self.stream.read(buf) {
            Ok(n) => Ok(n),
            // Read timeouts show up as WouldBlock on Unix and TimedOut on
            // Windows.
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                Err(SpdError::Timeout)
            }
            Err(e) => Err(SpdError::Io {
                source: e,
                context: "reading response".to_string(),
            }),
        }
    }

    fn shutdown(&mut self) -> Result<(), SpdError> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // Already shut down, nothing to release.
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(SpdError::Io {
                source: e,
                context: "closing connection".to_string(),
            }),
        }
    }
}
