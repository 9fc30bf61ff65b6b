use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use navfix_nmea::doctor as nmea_doctor;
use navfix_nmea::framer::Framer;
use navfix_nmea::sentence::Decode;
use navfix_nmea::source::FixSource;

const DEFAULT_BAUD: u32 = 9600;

#[derive(Debug, Parser)]
#[command(name = "navfix", version, about = "navfix - NMEA-0183 position fix extraction")]
struct Cli {
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sanity-check the config before going live.
    Doctor,
    /// Read the configured source and log decoded fixes.
    Run,
    /// Frame and decode a single sentence given on the command line.
    Decode { sentence: String },
}

#[derive(Debug, serde::Deserialize)]
struct Config {
    gnss: GnssCfg,
}

#[derive(Debug, serde::Deserialize)]
struct GnssCfg {
    source: String,
    nmea_device: Option<String>,
    nmea_file: Option<String>,
    baud: Option<u32>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.as_ref().context("--config required for this command")?;
    let s = std::fs::read_to_string(path).context("read config")?;
    Ok(toml::from_str(&s).context("parse config toml")?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match &cli.cmd {
        Command::Doctor => doctor(&load_config(&cli)?),
        Command::Run => run(&load_config(&cli)?).await,
        Command::Decode { sentence } => decode_one(sentence),
    }
}

fn doctor(cfg: &Config) -> Result<()> {
    info!("doctor: starting");
    nmea_doctor::check_source(
        &cfg.gnss.source,
        cfg.gnss.nmea_device.as_deref(),
        cfg.gnss.nmea_file.as_deref(),
    )?;
    nmea_doctor::check_baud(cfg.gnss.baud.unwrap_or(DEFAULT_BAUD))?;
    info!("doctor: OK");
    Ok(())
}

async fn run(cfg: &Config) -> Result<()> {
    info!("run: starting");

    let mut src = match cfg.gnss.source.as_str() {
        "nmea-serial" => FixSource::serial(
            cfg.gnss.nmea_device.as_ref().context("gnss.nmea_device missing")?,
            cfg.gnss.baud.unwrap_or(DEFAULT_BAUD),
        )?,
        "nmea-file" => {
            FixSource::file(cfg.gnss.nmea_file.as_ref().context("gnss.nmea_file missing")?)?
        }
        other => anyhow::bail!("unknown gnss.source: {}", other),
    };

    loop {
        let fix = src.next_fix().await?;
        let stats = src.stats();
        info!(
            "fix: ts={} lat={:.5} lon={:.5} (sentences={} rejects={})",
            fix.ts, fix.lat, fix.lon, stats.sentences, stats.rejects
        );
    }
}

fn decode_one(sentence: &str) -> Result<()> {
    let mut framer = Framer::new();
    let mut line = sentence.as_bytes().to_vec();
    line.extend_from_slice(b"\r\n");

    let outcomes = framer.feed(&line);
    if outcomes.is_empty() {
        println!("no sentence found");
        return Ok(());
    }
    for outcome in outcomes {
        match outcome {
            Ok(Decode::Fix(fix)) => println!("fix: lat={:.5} lon={:.5}", fix.lat, fix.lon),
            Ok(Decode::NoFix) => println!("no fix reported"),
            Err(reject) => println!("rejected: {}", reject),
        }
    }
    Ok(())
}
