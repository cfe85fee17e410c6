//! ramp-signal: continuous playback test for audio output devices.
//!
//! Without `--device` the available devices are listed; with it, the
//! selected signal is synthesized, optionally plotted, and played.

use ramp_signal::audio::CpalDeviceService;
use ramp_signal::cli::Cli;
use ramp_signal::config::RampConfig;
use ramp_signal::error::{ErrorCode, RampError, Result};
use ramp_signal::playback::{format_device_list, resolve_device, AudioDeviceService};
use ramp_signal::plot::TerminalPlotter;
use ramp_signal::runner::run_test;

fn main() {
    let cli = Cli::parse_args();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = RampConfig::from(cli);
    log::debug!(
        "Configuration: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    if let Some(reason) = config.validate() {
        return Err(RampError::invalid_parameter(reason));
    }

    let service = CpalDeviceService::new();

    if cli.is_list_mode() {
        return print_devices(&service, cli.json);
    }

    let device = match resolve_device(&service, config.device.as_deref()) {
        Ok(device) => device,
        Err(e) if matches!(e.code, ErrorCode::NoDeviceSelected | ErrorCode::DeviceNotFound) => {
            print_devices(&service, cli.json)?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let report = run_test(&service, &TerminalPlotter::new(), &device, &config)?;
    log::debug!(
        "Report: {}",
        serde_json::to_string(&report).unwrap_or_default()
    );
    log::info!(
        "Timing drift: {:+.3} seconds",
        report.drift_seconds()
    );

    Ok(())
}

/// Prints the device table (or JSON) to stdout.
fn print_devices<S: AudioDeviceService>(service: &S, json: bool) -> Result<()> {
    let devices = service.devices()?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&devices).unwrap_or_default()
        );
    } else {
        print!("{}", format_device_list(&devices));
    }
    Ok(())
}
