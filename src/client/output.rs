use super::SpdClient;
use crate::error::SpdError;
use crate::transport::Transport;
use crate::types::{OperationMode, OutputState};

impl<T: Transport> SpdClient<T> {
    /// Select the channel subsequent front-panel operations act on.
    pub fn select_channel(&mut self, channel: u8) -> Result<(), SpdError> {
        Self::validate_channel(channel)?;
        self.command(&format!("INSTrument CH{channel}"))
    }

    /// Query which channel is currently selected. Returns the raw response
    /// (e.g. `"CH1"`).
    pub fn active_channel(&mut self) -> Result<String, SpdError> {
        self.query("INSTrument?")
    }

    /// Switch a channel's output on or off.
    ///
    /// Fire and forget: the instrument acks nothing and no error check is
    /// issued.
    ///
    /// # Examples
    /// ```no_run
    /// use spd3303::{OutputState, SpdClient};
    ///
    /// let mut psu = SpdClient::connect("192.168.1.20")?;
    /// psu.set_output(1, OutputState::On)?;
    /// psu.set_output(1, OutputState::Off)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_output(&mut self, channel: u8, state: OutputState) -> Result<(), SpdError> {
        Self::validate_channel(channel)?;
        self.command(&format!("OUTPut CH{channel},{state}"))
    }

    /// Set the instrument-wide channel coupling mode. Fire and forget.
    pub fn set_operation_mode(&mut self, mode: OperationMode) -> Result<(), SpdError> {
        self.command(&format!("OUTPut:TRACK {}", u8::from(mode)))
    }

    /// Switch a channel's waveform display on or off.
    ///
    /// Switching on is verified with an error-check round trip; switching
    /// off is fire and forget. The asymmetry matches the instrument's
    /// behavior of only rejecting the enable.
    pub fn set_waveform_display(
        &mut self,
        channel: u8,
        state: OutputState,
    ) -> Result<(), SpdError> {
        Self::validate_channel(channel)?;
        let command = format!("OUTPut:WAVE CH{channel},{state}");
        match state {
            OutputState::On => self.checked_command(&command),
            OutputState::Off => self.command(&command),
        }
    }
}
