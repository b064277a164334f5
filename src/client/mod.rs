use std::net::SocketAddr;
use std::time::Duration;

use log::{debug, warn};

use crate::channel::CommandChannel;
use crate::error::SpdError;
use crate::protocol;
use crate::transport::{TcpTransport, Transport};
use crate::types::{
    CHANNEL_COUNT, CODE_CHANNEL, CODE_SLOT, ErrorReport, InstrumentIdentity, SAVE_SLOT_COUNT,
};

pub mod memory;
pub mod network;
pub mod output;
pub mod source;
pub mod system;
pub mod timer;

/// SCPI port the SPD3303X listens on.
pub const DEFAULT_PORT: u16 = 5025;

/// Connection configuration for the instrument's TCP socket.
///
/// All timeouts have sensible defaults but can be customized through
/// [`SpdClientBuilder`] for slow networks.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Timeout for establishing the initial TCP connection
    pub connect_timeout: Duration,
    /// Timeout for reading a response from the instrument
    pub read_timeout: Duration,
    /// Timeout for writing a command to the instrument
    pub write_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(5),
        }
    }
}

/// Builder for [`SpdClient`] instances.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use spd3303::SpdClient;
///
/// let client = SpdClient::builder()
///     .address("192.168.1.20")
///     .read_timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct SpdClientBuilder {
    address: Option<String>,
    port: Option<u16>,
    config: ConnectionConfig,
}

impl SpdClientBuilder {
    pub fn address(mut self, addr: &str) -> Self {
        self.address = Some(addr.to_string());
        self
    }

    /// Override the SCPI port (defaults to [`DEFAULT_PORT`]).
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the full connection configuration
    pub fn config(mut self, config: ConnectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    /// Set write timeout
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.config.write_timeout = timeout;
        self
    }

    /// Connect and run the identity handshake.
    ///
    /// Fails hard if the instrument is unreachable or the handshake fails;
    /// a half-open client is never returned.
    pub fn build(self) -> Result<SpdClient, SpdError> {
        let address = self
            .address
            .ok_or_else(|| SpdError::InvalidAddress("address must be specified".to_string()))?;
        let port = self.port.unwrap_or(DEFAULT_PORT);

        let socket_addr: SocketAddr = format!("{address}:{port}")
            .parse()
            .map_err(|_| SpdError::InvalidAddress(address.clone()))?;

        let transport = TcpTransport::connect(socket_addr, &self.config)?;
        SpdClient::over(transport)
    }
}

/// Client for a Siglent SPD3303X dual-channel programmable power supply.
///
/// Operations are synchronous request/response pairs over one TCP
/// connection; `&mut self` receivers enforce one command cycle at a time.
/// SCPI instruments do not multiplex requests, so sharing a client between
/// threads requires wrapping it in a `Mutex` with one full command/response
/// cycle as the critical section.
///
/// Every channel- or slot-scoped operation validates its index before any
/// bytes are sent. Mutating commands the instrument can reject (set
/// voltage/current, network assignment, waveform display on) are verified
/// with an immediate `SYSTem:ERRor?` round trip; a fault surfaces as
/// [`SpdError::Device`].
///
/// # Examples
///
/// ```no_run
/// use spd3303::SpdClient;
///
/// let mut psu = SpdClient::connect("192.168.1.20")?;
/// println!("connected to {}", psu.identity());
///
/// psu.set_voltage(1, 3.3)?;
/// psu.set_current(1, 0.5)?;
/// let volts = psu.measure_voltage(1)?;
/// println!("CH1 at {volts} V");
///
/// psu.close()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SpdClient<T: Transport = TcpTransport> {
    channel: CommandChannel<T>,
    identity: InstrumentIdentity,
}

impl SpdClient<TcpTransport> {
    /// Connect on the default SCPI port with default timeouts.
    pub fn connect(addr: &str) -> Result<Self, SpdError> {
        Self::builder().address(addr).build()
    }

    /// Connect to an explicit port with default timeouts.
    pub fn new(addr: &str, port: u16) -> Result<Self, SpdError> {
        Self::builder().address(addr).port(port).build()
    }

    /// Create a builder for flexible configuration.
    pub fn builder() -> SpdClientBuilder {
        SpdClientBuilder::default()
    }
}

impl<T: Transport> SpdClient<T> {
    /// Run the identity handshake over an already-open transport.
    ///
    /// Queries `*IDN?` and parses the five identity fields; a short or
    /// unreadable response fails construction.
    pub fn over(transport: T) -> Result<Self, SpdError> {
        let mut channel = CommandChannel::new(transport);
        let response = channel.request("*IDN?")?;
        let identity = protocol::parse_identity(&response)?;
        debug!("connected to {identity}");
        Ok(Self { channel, identity })
    }

    /// Identity reported by the instrument at connect time.
    pub fn identity(&self) -> &InstrumentIdentity {
        &self.identity
    }

    /// Close the connection.
    ///
    /// Consumes the client, so no operation can be issued after close.
    pub fn close(mut self) -> Result<(), SpdError> {
        debug!("closing connection to {}", self.identity.series_number);
        self.channel.shutdown()
    }

    /// Send a query and return its raw response line.
    pub(crate) fn query(&mut self, command: &str) -> Result<String, SpdError> {
        self.channel.request(command)
    }

    /// Send a command with no response and no verification.
    pub(crate) fn command(&mut self, command: &str) -> Result<(), SpdError> {
        self.channel.send(command)
    }

    /// Send a command, then verify it with an error-check round trip.
    ///
    /// The wire protocol has no synchronous ack, so this is the only way a
    /// device-side rejection becomes visible to the caller.
    pub(crate) fn checked_command(&mut self, command: &str) -> Result<(), SpdError> {
        self.channel.send(command)?;
        let report = self.read_error_report()?;
        if report.is_ok() {
            Ok(())
        } else {
            warn!(
                "instrument rejected {command:?}: {} {}",
                report.code, report.message
            );
            Err(SpdError::Device {
                code: report.code,
                message: report.message,
            })
        }
    }

    pub(crate) fn read_error_report(&mut self) -> Result<ErrorReport, SpdError> {
        let response = self.channel.request("SYSTem:ERRor?")?;
        protocol::parse_error_report(&response)
    }

    pub(crate) fn validate_channel(channel: u8) -> Result<(), SpdError> {
        if (1..=CHANNEL_COUNT).contains(&channel) {
            Ok(())
        } else {
            Err(SpdError::Validation {
                code: CODE_CHANNEL,
                message: format!("channel must be an integer 1 - {CHANNEL_COUNT}, got {channel}"),
            })
        }
    }

    pub(crate) fn validate_slot(slot: u8) -> Result<(), SpdError> {
        if (1..=SAVE_SLOT_COUNT).contains(&slot) {
            Ok(())
        } else {
            Err(SpdError::Validation {
                code: CODE_SLOT,
                message: format!("save slot must be an integer 1 - {SAVE_SLOT_COUNT}, got {slot}"),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SpdClient;
    use crate::mock::MockTransport;

    pub const TEST_IDENTITY: &str =
        "Siglent Technologies,SPD3303X,SPD3XHBQ5R0001,1.01.01.02.05,V3.0\n";

    /// A client over a mock transport, with the connect handshake already
    /// scripted and `responses` queued behind it.
    pub fn client_with(responses: &[&str]) -> SpdClient<MockTransport> {
        let mut transport = MockTransport::new();
        transport.push_response(TEST_IDENTITY);
        for response in responses {
            transport.push_response(response);
        }
        SpdClient::over(transport).expect("handshake against scripted identity")
    }

    /// Command lines written after the connect handshake.
    pub fn commands_after_connect(client: &SpdClient<MockTransport>) -> Vec<String> {
        let lines = client.channel.transport().written_lines();
        lines[1..].to_vec()
    }
}
