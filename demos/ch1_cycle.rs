//! Program CH1 for 3.3 V / 0.5 A, switch the output on, read back the
//! measurements and shut everything down again.
//!
//! Run with `cargo run --example ch1-cycle -- 192.168.1.20`.

use std::thread;
use std::time::Duration;

use env_logger::Env;
use spd3303::{OutputState, SpdClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "192.168.1.20".to_string());

    let mut psu = SpdClient::connect(&addr)?;
    println!("connected to {}", psu.identity());
    println!("firmware: {}", psu.version()?.trim_end());

    psu.set_current(1, 0.5)?;
    psu.set_voltage(1, 3.3)?;
    psu.set_waveform_display(1, OutputState::On)?;
    psu.set_output(1, OutputState::On)?;

    thread::sleep(Duration::from_secs(2));

    let volts = psu.measure_voltage(1)?;
    let amps = psu.measure_current(1)?;
    let watts = psu.measure_power(1)?;
    println!("CH1: {volts:.3} V, {amps:.3} A, {watts:.3} W");

    psu.set_output(1, OutputState::Off)?;
    psu.set_waveform_display(1, OutputState::Off)?;
    psu.close()?;
    Ok(())
}
