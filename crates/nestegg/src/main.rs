use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use nestegg::client::{EngineClient, submit};
use nestegg::{logging, profile, report};
use nestegg_core::ops::ParamUpdate;

#[derive(Parser, Debug)]
#[command(name = "nestegg")]
#[command(about = "Compose a retirement profile and run it against a Monte Carlo projection engine")]
struct Args {
    /// Base URL of the projection engine
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    engine_url: String,

    /// Seconds to wait for the engine before giving up
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter profile document
    Init {
        #[arg(long, default_value = "plan.yaml")]
        out: PathBuf,
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
    /// Print what a profile document will send to the engine
    Show {
        #[arg(long)]
        profile: PathBuf,
    },
    /// Submit a profile to the engine and report the outcome
    Run {
        #[arg(long)]
        profile: PathBuf,
        /// Parameter overrides as `key=value` (e.g. numberOfSimulations=5000)
        #[arg(long = "param")]
        params: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(&args.log_level);

    match args.command {
        Command::Init { out, force } => {
            profile::save(&out, &profile::starter_profile(), force)?;
            println!("Wrote starter profile to {}", out.display());
        }
        Command::Show { profile: path } => {
            let store = profile::load(&path)?;
            report::render_profile(store.input());
        }
        Command::Run {
            profile: path,
            params,
        } => {
            let mut store = profile::load(&path)?;
            for pair in &params {
                store.set_param(parse_override(pair)?);
            }

            let engine = EngineClient::new(
                &args.engine_url,
                Duration::from_secs(args.timeout_secs),
            )?;
            let store = Mutex::new(store);
            let summary = submit(&store, &engine).await?;
            report::render_summary(&summary);
        }
    }

    Ok(())
}

/// Split a `key=value` override and parse it into a typed command.
fn parse_override(pair: &str) -> Result<ParamUpdate> {
    let (key, raw) = pair
        .split_once('=')
        .ok_or_else(|| eyre!("expected key=value, got {pair:?}"))?;
    Ok(ParamUpdate::parse(key.trim(), raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_parse_into_typed_commands() {
        assert_eq!(
            parse_override("numberOfSimulations=5000").unwrap(),
            ParamUpdate::Iterations(5000)
        );
        assert!(parse_override("numberOfSimulations").is_err());
        assert!(parse_override("currentAge=thirty").is_err());
    }
}
