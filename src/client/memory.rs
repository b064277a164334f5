use super::SpdClient;
use crate::error::SpdError;
use crate::transport::Transport;

impl<T: Transport> SpdClient<T> {
    /// Save the full instrument state into a non-volatile slot (1 - 5).
    /// Fire and forget.
    pub fn save(&mut self, slot: u8) -> Result<(), SpdError> {
        Self::validate_slot(slot)?;
        self.command(&format!("*SAV {slot}"))
    }

    /// Recall a previously saved instrument state from a slot (1 - 5).
    /// Fire and forget.
    pub fn recall(&mut self, slot: u8) -> Result<(), SpdError> {
        Self::validate_slot(slot)?;
        self.command(&format!("*RCL {slot}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{client_with, commands_after_connect};
    use crate::error::SpdError;

    #[test]
    fn save_and_recall_encode_the_slot() {
        let mut client = client_with(&[]);
        client.save(3).unwrap();
        client.recall(5).unwrap();
        assert_eq!(commands_after_connect(&client), vec!["*SAV 3", "*RCL 5"]);
    }

    #[test]
    fn slot_out_of_range_sends_nothing() {
        for slot in [0u8, 6, 100] {
            let mut client = client_with(&[]);
            assert!(matches!(
                client.save(slot),
                Err(SpdError::Validation { code: "20", .. })
            ));
            assert!(matches!(
                client.recall(slot),
                Err(SpdError::Validation { code: "20", .. })
            ));
            assert_eq!(commands_after_connect(&client), Vec::<String>::new());
        }
    }
}
