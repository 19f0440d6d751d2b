use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use solar_still::{materials, App, SimConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON config file (defaults to ./solar_still.ron if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Still temperature in Celsius, overrides the config file
    #[arg(long)]
    temperature: Option<f64>,

    /// Run in the terminal without opening a window
    #[arg(long)]
    headless: bool,

    /// In headless mode, wait one tick interval between steps
    #[arg(long, requires = "headless")]
    realtime: bool,

    /// Print the effective configuration as RON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = SimConfig::load(args.config.as_deref())?;
    if let Some(temperature) = args.temperature {
        config.simulation.temperature_c = temperature;
        config.validate().context("Invalid --temperature")?;
    }

    if args.dump_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    if args.headless {
        let stdout = std::io::stdout();
        solar_still::headless::run_headless(&config, args.realtime, &mut stdout.lock())?;
        return Ok(());
    }

    println!("Filtration Materials Data:\n{}", materials::format_table());

    log::info!("Starting Solar Still");
    pollster::block_on(run(config))
}

async fn run(config: SimConfig) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config).await?;
    App::run(event_loop, app)
}
