//! Program a three-step timer sequence on CH1 (3.3 V, 5 V, 9 V at 1 A for
//! two seconds each), read the groups back and start the timer.
//!
//! Run with `cargo run --example timer-sequence -- 192.168.1.20`.

use env_logger::Env;
use spd3303::{OutputState, SpdClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "192.168.1.20".to_string());

    let mut psu = SpdClient::connect(&addr)?;
    println!("connected to {}", psu.identity());

    let steps = [("1", 3.3), ("2", 5.0), ("3", 9.0)];
    for (group, volts) in steps {
        psu.set_timing_parameters(1, group, volts, 1.0, 2.0)?;
    }

    println!("CH1 timer groups programmed:");
    for (group, _) in steps {
        let (group, (volts, amps)) = psu.query_timing_parameters(1, group)?;
        println!("  group {group}: {volts} V / {amps} A");
    }

    psu.set_timer(1, OutputState::On)?;
    println!("CH1 timer running");

    psu.close()?;
    Ok(())
}
