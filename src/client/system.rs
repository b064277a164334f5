use super::SpdClient;
use crate::error::SpdError;
use crate::transport::Transport;
use crate::types::ErrorReport;

impl<T: Transport> SpdClient<T> {
    /// Query the instrument's error queue.
    ///
    /// Returns the decoded report rather than failing, so callers can use
    /// it as a health check. Verified commands run this round trip
    /// internally and turn a fault into [`SpdError::Device`].
    pub fn check_error(&mut self) -> Result<ErrorReport, SpdError> {
        self.read_error_report()
    }

    /// Query the instrument's software version string.
    pub fn version(&mut self) -> Result<String, SpdError> {
        self.query("SYSTem:VERSion?")
    }

    /// Query the instrument's functional status word.
    pub fn status(&mut self) -> Result<String, SpdError> {
        self.query("SYSTem:STATus?")
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{client_with, commands_after_connect};

    #[test]
    fn check_error_returns_the_report() {
        let mut client = client_with(&["0  "]);
        let report = client.check_error().unwrap();
        assert!(report.is_ok());
        assert_eq!(commands_after_connect(&client), vec!["SYSTem:ERRor?"]);
    }

    #[test]
    fn check_error_reports_faults_without_failing() {
        let mut client = client_with(&["5  Bad Param\n"]);
        let report = client.check_error().unwrap();
        assert!(!report.is_ok());
        assert_eq!(report.code, "5");
        assert_eq!(report.message, "Bad Param");
    }

    #[test]
    fn version_and_status_are_plain_queries() {
        let mut client = client_with(&["1.01.01.02.05\n", "0x0224\n"]);
        assert_eq!(client.version().unwrap(), "1.01.01.02.05\n");
        assert_eq!(client.status().unwrap(), "0x0224\n");
        assert_eq!(
            commands_after_connect(&client),
            vec!["SYSTem:VERSion?", "SYSTem:STATus?"]
        );
    }
}
