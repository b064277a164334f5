//! In-memory [`Transport`] used by the unit tests to emulate the
//! instrument: it records every byte written and serves scripted responses
//! in order.

use std::collections::VecDeque;

use crate::error::SpdError;
use crate::transport::Transport;

#[derive(Default)]
pub struct MockTransport {
    written: Vec<u8>,
    responses: VecDeque<Vec<u8>>,
    fail_writes: bool,
    shutdown_count: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport preloaded with responses, served one per `recv_chunk`.
    pub fn with_responses(responses: &[&str]) -> Self {
        let mut transport = Self::new();
        for response in responses {
            transport.push_response(response);
        }
        transport
    }

    pub fn push_response(&mut self, response: &str) {
        self.responses.push_back(response.as_bytes().to_vec());
    }

    pub fn push_raw_response(&mut self, response: &[u8]) {
        self.responses.push_back(response.to_vec());
    }

    /// Make every subsequent write fail with a broken-pipe error.
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    /// Everything written so far, across all commands.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// The written stream split into terminated lines.
    pub fn written_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.written)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn shutdown_count(&self) -> usize {
        self.shutdown_count
    }
}

impl Transport for MockTransport {
    fn send_all(&mut self, buf: &[u8]) -> Result<(), SpdError> {
        if self.fail_writes {
            return Err(SpdError::Io {
                source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "mock write failure"),
                context: "writing command".to_string(),
            });
        }
        self.written.extend_from_slice(buf);
        Ok(())
    }

    fn recv_chunk(&mut self, buf: &mut [u8]) -> Result<usize, SpdError> {
        // No scripted response behaves like a silent instrument.
        let response = self.responses.pop_front().ok_or(SpdError::Timeout)?;
        let n = response.len().min(buf.len());
        buf[..n].copy_from_slice(&response[..n]);
        Ok(n)
    }

    fn shutdown(&mut self) -> Result<(), SpdError> {
        self.shutdown_count += 1;
        Ok(())
    }
}
