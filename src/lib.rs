//! Client for the Siglent SPD3303X dual-channel programmable power supply,
//! speaking its line-oriented SCPI protocol over TCP (port 5025).
//!
//! The interesting layer is the protocol logic: building command strings,
//! validating parameters before any I/O, parsing responses into typed
//! values, and the error-check round trip that makes device-side rejections
//! of mutating commands visible despite the protocol having no synchronous
//! ack. Everything is synchronous and single-connection, which is how SCPI
//! instruments expect to be driven.

pub mod channel;
pub mod client;
pub mod error;
pub mod mock;
pub mod protocol;
pub mod transport;
pub mod types;

pub use channel::CommandChannel;
pub use client::{ConnectionConfig, DEFAULT_PORT, SpdClient, SpdClientBuilder};
pub use error::SpdError;
pub use transport::{TcpTransport, Transport};
pub use types::{
    CHANNEL_COUNT, ErrorReport, InstrumentIdentity, OperationMode, OutputState, SAVE_SLOT_COUNT,
    TimingParameters,
};
