use std::fmt;

use crate::error::SpdError;

/// Number of independently controllable output channels on the SPD3303X.
pub const CHANNEL_COUNT: u8 = 2;

/// Number of non-volatile save slots for full instrument snapshots.
pub const SAVE_SLOT_COUNT: u8 = 5;

// Stable parameter error codes, matching the instrument documentation.
pub(crate) const CODE_SLOT: &str = "20";
pub(crate) const CODE_CHANNEL: &str = "21";
pub(crate) const CODE_MODE: &str = "22";

/// Identity fields reported by the instrument in response to `*IDN?`.
///
/// Populated once during [`connect`](crate::SpdClient::connect) and immutable
/// for the lifetime of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentIdentity {
    pub manufacturer: String,
    pub product_type: String,
    pub series_number: String,
    pub software_version: String,
    pub hardware_version: String,
}

impl fmt::Display for InstrumentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (serial {}, sw {}, hw {})",
            self.manufacturer,
            self.product_type,
            self.series_number,
            self.software_version,
            self.hardware_version
        )
    }
}

/// Instrument-wide channel coupling mode, set with `OUTPut:TRACK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Both channels operate independently.
    Independent = 0,
    /// Channels are wired in series; CH1 controls both.
    Series = 1,
    /// Channels are wired in parallel; CH1 controls both.
    Parallel = 2,
}

impl From<OperationMode> for u8 {
    fn from(mode: OperationMode) -> Self {
        mode as u8
    }
}

impl TryFrom<u8> for OperationMode {
    type Error = SpdError;

    fn try_from(value: u8) -> Result<Self, SpdError> {
        match value {
            0 => Ok(OperationMode::Independent),
            1 => Ok(OperationMode::Series),
            2 => Ok(OperationMode::Parallel),
            _ => Err(SpdError::Validation {
                code: CODE_MODE,
                message: format!("invalid operation mode {value}, must be 0, 1 or 2"),
            }),
        }
    }
}

/// On/off state for outputs, the waveform display, timers and DHCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    On,
    Off,
}

impl From<bool> for OutputState {
    fn from(on: bool) -> Self {
        if on { OutputState::On } else { OutputState::Off }
    }
}

impl fmt::Display for OutputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputState::On => write!(f, "ON"),
            OutputState::Off => write!(f, "OFF"),
        }
    }
}

/// One entry of a channel's programmed timer sequence, as reported by
/// `TIMEr:SET?`: the group identity plus its voltage/current pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingParameters {
    pub group: String,
    pub voltage: String,
    pub current: String,
}

impl TimingParameters {
    /// The historical response shape: group in position 0, the
    /// (voltage, current) pair nested in position 1.
    pub fn into_nested(self) -> (String, (String, String)) {
        (self.group, (self.voltage, self.current))
    }
}

/// Decoded `SYSTem:ERRor?` report. Code `"0"` means no error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
}

impl ErrorReport {
    pub fn is_ok(&self) -> bool {
        self.code == "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_mode_round_trips_through_u8() {
        for mode in [
            OperationMode::Independent,
            OperationMode::Series,
            OperationMode::Parallel,
        ] {
            let raw: u8 = mode.into();
            assert_eq!(OperationMode::try_from(raw).unwrap(), mode);
        }
    }

    #[test]
    fn operation_mode_rejects_out_of_range() {
        for raw in [3u8, 7, 255] {
            let err = OperationMode::try_from(raw).unwrap_err();
            assert!(matches!(err, SpdError::Validation { code: "22", .. }));
        }
    }

    #[test]
    fn output_state_renders_scpi_keywords() {
        assert_eq!(OutputState::On.to_string(), "ON");
        assert_eq!(OutputState::Off.to_string(), "OFF");
        assert_eq!(OutputState::from(true), OutputState::On);
        assert_eq!(OutputState::from(false), OutputState::Off);
    }

    #[test]
    fn error_report_zero_code_is_ok() {
        let report = ErrorReport {
            code: "0".to_string(),
            message: String::new(),
        };
        assert!(report.is_ok());

        let fault = ErrorReport {
            code: "21".to_string(),
            message: "Invalid Parameter".to_string(),
        };
        assert!(!fault.is_ok());
    }
}
