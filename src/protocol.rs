//! Parsers for the SPD3303X's plain-text responses.
//!
//! Every response is a single short ASCII line. The instrument has no
//! framing beyond the line terminator, so all structure lives in field
//! delimiters: commas for identity and timing records, a double space for
//! error reports.

use crate::error::SpdError;
use crate::types::{ErrorReport, InstrumentIdentity, TimingParameters};

/// Field delimiter in `SYSTem:ERRor?` responses.
pub const ERROR_FIELD_DELIMITER: &str = "  ";

/// Number of comma-separated fields in an `*IDN?` response.
pub const IDENTITY_FIELD_COUNT: usize = 5;

/// Decode a `SYSTem:ERRor?` response into an [`ErrorReport`].
///
/// Code `"0"` is the no-error sentinel and is accepted with or without a
/// message field. For a real fault the trailing line terminator is stripped
/// from the message; a non-zero code without any message field is malformed.
pub fn parse_error_report(response: &str) -> Result<ErrorReport, SpdError> {
    let mut fields = response.splitn(2, ERROR_FIELD_DELIMITER);
    let code = fields
        .next()
        .unwrap_or_default()
        .trim_end_matches(['\r', '\n'])
        .to_string();
    let message = fields.next();

    if code == "0" {
        return Ok(ErrorReport {
            code,
            message: String::new(),
        });
    }

    match message {
        Some(message) => Ok(ErrorReport {
            code,
            message: message.trim_end_matches(['\r', '\n']).to_string(),
        }),
        None => Err(SpdError::Protocol(format!(
            "malformed error report: {response:?}"
        ))),
    }
}

/// Parse the comma-delimited 5-field `*IDN?` response.
pub fn parse_identity(response: &str) -> Result<InstrumentIdentity, SpdError> {
    let fields: Vec<&str> = response.trim_end().split(',').map(str::trim).collect();
    if fields.len() < IDENTITY_FIELD_COUNT {
        return Err(SpdError::Protocol(format!(
            "identity response has {} fields, expected {IDENTITY_FIELD_COUNT}: {response:?}",
            fields.len()
        )));
    }
    Ok(InstrumentIdentity {
        manufacturer: fields[0].to_string(),
        product_type: fields[1].to_string(),
        series_number: fields[2].to_string(),
        software_version: fields[3].to_string(),
        hardware_version: fields[4].to_string(),
    })
}

/// Parse the 3-field `TIMEr:SET?` response into group/voltage/current.
pub fn parse_timing(response: &str) -> Result<TimingParameters, SpdError> {
    let fields: Vec<&str> = response.trim_end().split(',').collect();
    if fields.len() < 3 {
        return Err(SpdError::Protocol(format!(
            "timing response has {} fields, expected 3: {response:?}",
            fields.len()
        )));
    }
    Ok(TimingParameters {
        group: fields[0].to_string(),
        voltage: fields[1].to_string(),
        current: fields[2].to_string(),
    })
}

/// Parse a numeric measurement or set-point response.
pub fn parse_measurement(response: &str) -> Result<f64, SpdError> {
    response
        .trim()
        .parse::<f64>()
        .map_err(|_| SpdError::Protocol(format!("expected a numeric response, got {response:?}")))
}
