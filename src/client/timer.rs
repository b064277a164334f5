use super::SpdClient;
use crate::error::SpdError;
use crate::protocol;
use crate::transport::Transport;
use crate::types::OutputState;

impl<T: Transport> SpdClient<T> {
    /// Program one group of a channel's timer sequence.
    ///
    /// The instrument numbers groups 1 - 5; each group holds the voltage,
    /// current limit and duration applied while that step runs.
    ///
    /// # Arguments
    /// * `channel` - Channel number (1 or 2)
    /// * `group` - Timer group identifier
    /// * `volts` - Voltage applied during the step
    /// * `amps` - Current limit during the step
    /// * `seconds` - How long the step runs
    pub fn set_timing_parameters(
        &mut self,
        channel: u8,
        group: &str,
        volts: f64,
        amps: f64,
        seconds: f64,
    ) -> Result<(), SpdError> {
        Self::validate_channel(channel)?;
        self.command(&format!(
            "TIMEr:SET CH{channel},{group},{volts},{amps},{seconds}"
        ))
    }

    /// Query one group of a channel's timer sequence.
    ///
    /// Returns the historical nested shape `(group, (voltage, current))`:
    /// the instrument reports the group identity in the first field and the
    /// voltage/current pair in the remaining two.
    ///
    /// # Examples
    /// ```no_run
    /// use spd3303::SpdClient;
    ///
    /// let mut psu = SpdClient::connect("192.168.1.20")?;
    /// let (group, (volts, amps)) = psu.query_timing_parameters(1, "1")?;
    /// println!("group {group}: {volts} V, {amps} A");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn query_timing_parameters(
        &mut self,
        channel: u8,
        group: &str,
    ) -> Result<(String, (String, String)), SpdError> {
        Self::validate_channel(channel)?;
        let response = self.query(&format!("TIMEr:SET? CH{channel},{group}"))?;
        Ok(protocol::parse_timing(&response)?.into_nested())
    }

    /// Start or stop a channel's timer function. Fire and forget.
    pub fn set_timer(&mut self, channel: u8, state: OutputState) -> Result<(), SpdError> {
        Self::validate_channel(channel)?;
        self.command(&format!("TIMEr CH{channel},{state}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{client_with, commands_after_connect};
    use crate::error::SpdError;
    use crate::types::OutputState;

    #[test]
    fn timing_parameters_encode_positionally() {
        let mut client = client_with(&[]);
        client
            .set_timing_parameters(1, "2", 5.0, 1.0, 2.5)
            .unwrap();
        assert_eq!(
            commands_after_connect(&client),
            vec!["TIMEr:SET CH1,2,5,1,2.5"]
        );
    }

    #[test]
    fn timing_query_returns_nested_pair() {
        let mut client = client_with(&["A,1.0,0.5"]);
        let result = client.query_timing_parameters(1, "A").unwrap();
        assert_eq!(
            result,
            ("A".to_string(), ("1.0".to_string(), "0.5".to_string()))
        );
        assert_eq!(
            commands_after_connect(&client),
            vec!["TIMEr:SET? CH1,A"]
        );
    }

    #[test]
    fn malformed_timing_response_is_a_protocol_error() {
        let mut client = client_with(&["1,3.3\n"]);
        assert!(matches!(
            client.query_timing_parameters(1, "1"),
            Err(SpdError::Protocol(_))
        ));
    }

    #[test]
    fn timer_toggling_is_fire_and_forget() {
        let mut client = client_with(&[]);
        client.set_timer(2, OutputState::On).unwrap();
        client.set_timer(2, OutputState::Off).unwrap();
        assert_eq!(
            commands_after_connect(&client),
            vec!["TIMEr CH2,ON", "TIMEr CH2,OFF"]
        );
    }

    #[test]
    fn timer_operations_validate_the_channel() {
        let mut client = client_with(&[]);
        assert!(matches!(
            client.set_timing_parameters(0, "1", 1.0, 1.0, 1.0),
            Err(SpdError::Validation { code: "21", .. })
        ));
        assert!(matches!(
            client.query_timing_parameters(3, "1"),
            Err(SpdError::Validation { code: "21", .. })
        ));
        assert!(matches!(
            client.set_timer(3, OutputState::On),
            Err(SpdError::Validation { code: "21", .. })
        ));
        assert_eq!(commands_after_connect(&client), Vec::<String>::new());
    }
}
