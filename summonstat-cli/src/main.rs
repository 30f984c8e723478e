mod config;
mod display;
mod interactive;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use summonstat_core::models::{SummonParams, KNOWN_CARD_COUNT};
use summonstat_core::probability_distribution;

use crate::config::ChartConfig;
use crate::display::{display_chart, display_json, display_table, warn_hero_count};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Chart,
    Table,
    Json,
}

#[derive(Parser)]
#[command(
    name = "summonstat",
    about = "Finds the probability distribution of unique heroes from repeated hero summons"
)]
struct Cli {
    /// The number of heroes in the game
    #[arg(short = 'n', long)]
    heroes: u32,

    /// The number of times you summon a hero
    #[arg(short, long)]
    summons: u32,

    /// Use a log scale for the probability axis
    #[arg(short, long)]
    log: bool,

    /// Output format
    #[arg(short, long, default_value = "chart")]
    format: OutputFormat,

    /// Inspect individual bars after rendering
    #[arg(short, long)]
    interactive: bool,

    /// Chart configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hero count above which a warning is printed
    #[arg(long, default_value_t = KNOWN_CARD_COUNT)]
    hero_limit: u32,
}

impl Cli {
    fn validate(&self) -> Result<()> {
        // the inspection prompt shares stdout with the report
        if self.interactive && matches!(self.format, OutputFormat::Json) {
            bail!("--interactive cannot be combined with --format json");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    cli.validate()?;

    let mut config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    if cli.log {
        config.log_scale = true;
    }

    let params = SummonParams::new(cli.summons, cli.heroes)?;
    if params.exceeds_card_count(cli.hero_limit) {
        warn_hero_count(params.heroes, cli.hero_limit);
    }

    let dist = probability_distribution(params.summons, params.heroes).with_context(|| {
        format!(
            "Cannot compute the distribution for {} summons over {} heroes",
            params.summons, params.heroes
        )
    })?;
    log::info!(
        "{} summons over {} heroes: {} possible unique counts",
        dist.summons(),
        dist.heroes(),
        dist.len()
    );

    match cli.format {
        OutputFormat::Chart => display_chart(&dist, &config),
        OutputFormat::Table => display_table(&dist, &config),
        OutputFormat::Json => display_json(&dist)?,
    }

    if cli.interactive {
        interactive::run_interactive(&dist, &config)?;
    }

    Ok(())
}
