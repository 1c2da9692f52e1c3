use clap::Parser;
use dialoguer::Select;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// List available MIDI input devices
    #[arg(long)]
    pub device_list: bool,

    /// Bind to a specific MIDI input device
    #[arg(long)]
    pub bind_to_device: Option<String>,

    /// Milliseconds between report deliveries
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Settings file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,

    /// Hide the status spinner
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn handle_device_list() -> Vec<String> {
    // Re-export from the crate root
    crate::handle_device_list()
}

pub fn validate_device(device_name: &str, devices: &[String]) -> Result<(), String> {
    if !devices.iter().any(|d| d.contains(device_name)) {
        let mut error_msg = format!(
            "Error: Device '{}' not found in available devices:\n",
            device_name
        );
        for device in devices {
            error_msg.push_str(&format!("  - {}\n", device));
        }
        return Err(error_msg);
    }
    Ok(())
}

/// Picks an input when none was given: prompt on a terminal, else the first.
pub fn choose_device(devices: &[String]) -> Option<String> {
    match devices {
        [] => None,
        [only] => Some(only.clone()),
        _ if std::io::stdin().is_terminal() => Select::new()
            .with_prompt("Select MIDI input")
            .items(devices)
            .default(0)
            .interact_opt()
            .ok()
            .flatten()
            .map(|i| devices[i].clone()),
        [first, ..] => Some(first.clone()),
    }
}
