use super::SpdClient;
use crate::error::SpdError;
use crate::protocol;
use crate::transport::Transport;

impl<T: Transport> SpdClient<T> {
    /// Set the voltage set-point of a channel.
    ///
    /// This is a verified command: the instrument has no synchronous ack,
    /// so the client follows up with `SYSTem:ERRor?` and surfaces a
    /// rejection (e.g. a value beyond the instrument's range) as
    /// [`SpdError::Device`].
    ///
    /// # Arguments
    /// * `channel` - Channel number (1 or 2)
    /// * `volts` - Voltage set-point in volts
    ///
    /// # Examples
    /// ```no_run
    /// use spd3303::SpdClient;
    ///
    /// let mut psu = SpdClient::connect("192.168.1.20")?;
    /// psu.set_voltage(1, 3.3)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_voltage(&mut self, channel: u8, volts: f64) -> Result<(), SpdError> {
        Self::validate_channel(channel)?;
        self.checked_command(&format!("CH{channel}:VOLTage {volts}"))
    }

    /// Set the current limit of a channel. Verified like [`set_voltage`].
    ///
    /// [`set_voltage`]: SpdClient::set_voltage
    pub fn set_current(&mut self, channel: u8, amps: f64) -> Result<(), SpdError> {
        Self::validate_channel(channel)?;
        self.checked_command(&format!("CH{channel}:CURRent {amps}"))
    }

    /// Query the programmed voltage set-point of a channel, in volts.
    pub fn set_point_voltage(&mut self, channel: u8) -> Result<f64, SpdError> {
        Self::validate_channel(channel)?;
        let response = self.query(&format!("CH{channel}:VOLTage?"))?;
        protocol::parse_measurement(&response)
    }

    /// Query the programmed current limit of a channel, in amps.
    pub fn set_point_current(&mut self, channel: u8) -> Result<f64, SpdError> {
        Self::validate_channel(channel)?;
        let response = self.query(&format!("CH{channel}:CURRent?"))?;
        protocol::parse_measurement(&response)
    }

    /// Measure the actual output voltage of a channel, in volts.
    ///
    /// # Arguments
    /// * `channel` - Channel number (1 or 2)
    ///
    /// # Examples
    /// ```no_run
    /// use spd3303::SpdClient;
    ///
    /// let mut psu = SpdClient::connect("192.168.1.20")?;
    /// let volts = psu.measure_voltage(1)?;
    /// println!("CH1: {volts:.3} V");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn measure_voltage(&mut self, channel: u8) -> Result<f64, SpdError> {
        Self::validate_channel(channel)?;
        let response = self.query(&format!("MEASure:VOLTage? CH{channel}"))?;
        protocol::parse_measurement(&response)
    }

    /// Measure the actual output current of a channel, in amps.
    pub fn measure_current(&mut self, channel: u8) -> Result<f64, SpdError> {
        Self::validate_channel(channel)?;
        let response = self.query(&format!("MEASure:CURRent? CH{channel}"))?;
        protocol::parse_measurement(&response)
    }

    /// Measure the output power of a channel, in watts.
    pub fn measure_power(&mut self, channel: u8) -> Result<f64, SpdError> {
        Self::validate_channel(channel)?;
        let response = self.query(&format!("MEASure:POWEr? CH{channel}"))?;
        protocol::parse_measurement(&response)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{client_with, commands_after_connect};
    use crate::error::SpdError;

    #[test]
    fn set_voltage_is_verified() {
        let mut client = client_with(&["0  "]);
        client.set_voltage(1, 3.3).unwrap();
        assert_eq!(
            commands_after_connect(&client),
            vec!["CH1:VOLTage 3.3", "SYSTem:ERRor?"]
        );
    }

    #[test]
    fn rejected_set_voltage_becomes_device_error() {
        let mut client = client_with(&["21  Invalid Parameter\n"]);
        let err = client.set_voltage(1, 3.3).unwrap_err();
        assert!(matches!(err, SpdError::Device { .. }));
    }

    #[test]
    fn set_current_is_verified() {
        let mut client = client_with(&["0  "]);
        client.set_current(2, 0.5).unwrap();
        assert_eq!(
            commands_after_connect(&client),
            vec!["CH2:CURRent 0.5", "SYSTem:ERRor?"]
        );
    }

    #[test]
    fn measurements_parse_numeric_responses() {
        let mut client = client_with(&["3.291\n", "0.498\n", "1.639\n"]);
        assert_eq!(client.measure_voltage(1).unwrap(), 3.291);
        assert_eq!(client.measure_current(1).unwrap(), 0.498);
        assert_eq!(client.measure_power(1).unwrap(), 1.639);
        assert_eq!(
            commands_after_connect(&client),
            vec![
                "MEASure:VOLTage? CH1",
                "MEASure:CURRent? CH1",
                "MEASure:POWEr? CH1"
            ]
        );
    }

    #[test]
    fn set_points_are_plain_queries() {
        let mut client = client_with(&["3.300\n", "0.500\n"]);
        assert_eq!(client.set_point_voltage(2).unwrap(), 3.3);
        assert_eq!(client.set_point_current(2).unwrap(), 0.5);
        assert_eq!(
            commands_after_connect(&client),
            vec!["CH2:VOLTage?", "CH2:CURRent?"]
        );
    }

    #[test]
    fn channel_out_of_range_sends_nothing() {
        for channel in [0u8, 3, 200] {
            let mut client = client_with(&[]);
            let channel_fault =
                |err: SpdError| matches!(err, SpdError::Validation { code: "21", .. });
            assert!(channel_fault(client.set_voltage(channel, 1.0).unwrap_err()));
            assert!(channel_fault(client.set_current(channel, 1.0).unwrap_err()));
            assert!(channel_fault(client.measure_voltage(channel).unwrap_err()));
            assert!(channel_fault(client.measure_current(channel).unwrap_err()));
            assert!(channel_fault(client.measure_power(channel).unwrap_err()));
            assert!(channel_fault(client.set_point_voltage(channel).unwrap_err()));
            assert!(channel_fault(client.set_point_current(channel).unwrap_err()));
            assert_eq!(commands_after_connect(&client), Vec::<String>::new());
        }
    }

    #[test]
    fn non_numeric_measurement_is_a_protocol_error() {
        let mut client = client_with(&["garbage\n"]);
        assert!(matches!(
            client.measure_voltage(1),
            Err(SpdError::Protocol(_))
        ));
    }
}
