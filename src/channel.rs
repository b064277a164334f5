use log::debug;

use crate::error::SpdError;
use crate::transport::Transport;

/// Line terminator appended to every outgoing command.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Upper bound on a single response read.
///
/// The SPD3303X answers every query with one short ASCII line, so a single
/// bounded read is sufficient and no reassembly is attempted. A response
/// longer than this bound would be truncated; none of the instrument's
/// responses come anywhere near it.
pub const RECV_BUFFER_SIZE: usize = 2048;

/// Line framing over a [`Transport`]: terminator on send, UTF-8 decode on
/// receive.
pub struct CommandChannel<T: Transport> {
    transport: T,
}

impl<T: Transport> CommandChannel<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Send one command line, appending the terminator.
    pub fn send(&mut self, command: &str) -> Result<(), SpdError> {
        debug!("-> {command}");
        let mut line = Vec::with_capacity(command.len() + 1);
        line.extend_from_slice(command.as_bytes());
        line.push(LINE_TERMINATOR);
        self.transport.send_all(&line)
    }

    /// Read one response chunk and decode it as UTF-8.
    pub fn recv(&mut self) -> Result<String, SpdError> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];
        let n = self.transport.recv_chunk(&mut buf)?;
        let response = std::str::from_utf8(&buf[..n])
            .map_err(|_| SpdError::Protocol("response is not valid UTF-8".to_string()))?;
        debug!("<- {}", response.trim_end());
        Ok(response.to_string())
    }

    /// Send a query and read its response.
    pub fn request(&mut self, command: &str) -> Result<String, SpdError> {
        self.send(command)?;
        self.recv()
    }

    pub fn shutdown(&mut self) -> Result<(), SpdError> {
        self.transport.shutdown()
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[test]
    fn send_appends_line_terminator() {
        let mut channel = CommandChannel::new(MockTransport::new());
        channel.send("*IDN?").unwrap();
        assert_eq!(channel.transport().written(), b"*IDN?\n");
    }

    #[test]
    fn recv_decodes_scripted_response() {
        let mut channel = CommandChannel::new(MockTransport::with_responses(&["5.000\n"]));
        assert_eq!(channel.recv().unwrap(), "5.000\n");
    }

    #[test]
    fn recv_without_response_times_out() {
        let mut channel = CommandChannel::new(MockTransport::new());
        assert!(matches!(channel.recv(), Err(SpdError::Timeout)));
    }

    #[test]
    fn recv_rejects_invalid_utf8() {
        let mut transport = MockTransport::new();
        transport.push_raw_response(&[0xff, 0xfe]);
        let mut channel = CommandChannel::new(transport);
        assert!(matches!(channel.recv(), Err(SpdError::Protocol(_))));
    }

    #[test]
    fn request_is_send_then_recv() {
        let mut channel = CommandChannel::new(MockTransport::with_responses(&["CH1\n"]));
        let response = channel.request("INSTrument?").unwrap();
        assert_eq!(response, "CH1\n");
        assert_eq!(channel.transport().written(), b"INSTrument?\n");
    }
}
