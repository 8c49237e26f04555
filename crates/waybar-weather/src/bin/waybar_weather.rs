//! waybar-weather - print the weather payload for a waybar custom module
//!
//! Usage:
//!   waybar-weather                     # Print the built-in reading
//!   waybar-weather -c overrides.yaml   # Print a reading loaded from YAML
//!   waybar-weather -V                  # Show version

use anyhow::{Context, Result};
use argh::FromArgs;
use waybar_weather::{emit_stdout, Config, StatusPayload};

/// Print a static weather reading as a single JSON line
#[derive(FromArgs)]
struct Args {
    /// show version information
    #[argh(switch, short = 'V')]
    version: bool,

    /// path to a YAML file overriding text, tooltip or class
    #[argh(option, short = 'c')]
    config: Option<String>,
}

fn run(args: Args) -> Result<()> {
    let payload = match &args.config {
        Some(path) => Config::from_file(path)
            .and_then(Config::into_payload)
            .with_context(|| format!("Failed to load config from '{}'", path))?,
        None => StatusPayload::fixed(),
    };

    emit_stdout(&payload).context("Failed to write payload to stdout")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Args = argh::from_env();

    if args.version {
        println!("waybar-weather {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(e) = run(args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
