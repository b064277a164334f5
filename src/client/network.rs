use super::SpdClient;
use crate::error::SpdError;
use crate::transport::Transport;
use crate::types::OutputState;

impl<T: Transport> SpdClient<T> {
    /// Assign a static IP address. Verified.
    ///
    /// The instrument rejects this while DHCP is enabled; that precondition
    /// is device-side and not checked here, the rejection comes back as
    /// [`SpdError::Device`].
    pub fn assign_ip_address(&mut self, ip: &str) -> Result<(), SpdError> {
        self.checked_command(&format!("IPaddr {ip}"))
    }

    /// Query the configured IP address.
    pub fn query_ip_address(&mut self) -> Result<String, SpdError> {
        self.query("IPaddr?")
    }

    /// Assign the subnet mask. Verified; rejected while DHCP is enabled.
    pub fn assign_subnet_mask(&mut self, mask: &str) -> Result<(), SpdError> {
        self.checked_command(&format!("MASKaddr {mask}"))
    }

    /// Query the configured subnet mask.
    pub fn query_subnet_mask(&mut self) -> Result<String, SpdError> {
        self.query("MASKaddr?")
    }

    /// Assign the gateway address. Verified; rejected while DHCP is enabled.
    pub fn assign_gateway_address(&mut self, gateway: &str) -> Result<(), SpdError> {
        self.checked_command(&format!("GATEaddr {gateway}"))
    }

    /// Query the configured gateway address.
    pub fn query_gateway_address(&mut self) -> Result<String, SpdError> {
        self.query("GATEaddr?")
    }

    /// Switch DHCP on or off. Fire and forget.
    pub fn set_dhcp(&mut self, state: OutputState) -> Result<(), SpdError> {
        self.command(&format!("DHCP {state}"))
    }

    /// Query the DHCP state.
    pub fn query_dhcp(&mut self) -> Result<String, SpdError> {
        self.query("DHCP?")
    }
}
