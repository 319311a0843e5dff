//! VolcAsr - engine configuration inspector
//!
//! Prints the parameter batch a client would apply for a given model.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use volc_asr::{build_config, resolve, AuthConfig, Config, ModelSelector, ParamValue};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model: standard, big-model, seed-asr
    #[arg(short, long)]
    model: Option<ModelSelector>,

    /// Disable inverse text normalization
    #[arg(long)]
    no_itn: bool,

    /// Disable punctuation
    #[arg(long)]
    no_punc: bool,

    /// Enable disfluency removal
    #[arg(long)]
    ddc: bool,

    /// Enable server-side auto-stop, with the given tail silence in ms
    #[arg(long, value_name = "MS")]
    auto_stop: Option<u32>,

    /// Extra engine parameter, as key=value (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_extra)]
    extras: Vec<(String, ParamValue)>,
}

fn parse_extra(raw: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    if key.is_empty() {
        return Err("empty key".to_string());
    }
    Ok((key.to_string(), ParamValue::parse_literal(value)))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging; RUST_LOG takes precedence over --verbose
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let model = args.model.unwrap_or(config.model);
    let mut params = config.parameter_set();
    if args.no_itn {
        params.enable_itn = false;
    }
    if args.no_punc {
        params.enable_punc = false;
    }
    if args.ddc {
        params.enable_ddc = true;
    }
    if let Some(ms) = args.auto_stop {
        params.auto_stop = true;
        params.vad_tail_silence_ms = ms;
    }
    for (key, value) in args.extras {
        params = params.with_extra(key, value);
    }
    debug!("Parameters: {:?}", params);

    // Credentials are optional here; the output is for inspection only
    let auth = match config.auth() {
        Ok(auth) => auth,
        Err(e) => {
            warn!("⚠️ {}; printing with incomplete credentials", e);
            AuthConfig::new(&config.app_id, &config.token, &config.uid)
        }
    };

    let profile = resolve(model);
    info!("🐧 {} via {:?}", model, profile.protocol_family);

    let assignment = build_config(&profile, &auth, &params, config.engine_log_level);
    print!("{}", assignment);

    Ok(())
}
