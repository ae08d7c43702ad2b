use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use playoffs::config::Config;
use playoffs::data;
use playoffs::data::ReadJsonFile;
use playoffs::print::{tabulate_probabilities, tabulate_progress, SortBy};
use playoffs::season::{forecast, Mode};

const DEFAULT_SPLIT_DEPTH: usize = 6;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// directory to source the season data from
    dir: Option<PathBuf>,

    /// tournament format file (JSON)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// number of participants
    #[clap(short = 'n', long)]
    teams: Option<usize>,

    /// number of playoff places
    #[clap(short = 'k', long)]
    cutoff: Option<usize>,

    /// enumeration mode: stored, streaming, parallel or parallel:<split depth>
    #[clap(short = 'm', long, value_parser = parse_mode)]
    mode: Option<Mode>,

    /// row order: team, estimated or worst
    #[clap(short = 's', long, default_value_t = SortBy::Team)]
    sort: SortBy,

    /// also print the points progression from progress.json
    #[clap(short = 'p', long)]
    progress: bool,

    /// write the probabilities to a JSON file
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            None => Config::default(),
            Some(path) => Config::read_json_file(path)?,
        };
        if let Some(teams) = self.teams {
            config.teams = teams;
        }
        if let Some(cutoff) = self.cutoff {
            config.cutoff = cutoff;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_mode(s: &str) -> anyhow::Result<Mode> {
    let lowercase = s.to_lowercase();
    match lowercase.split_once(':') {
        None => match lowercase.as_str() {
            "stored" => Ok(Mode::Stored),
            "streaming" => Ok(Mode::Streaming),
            "parallel" => Ok(Mode::Parallel {
                split_depth: DEFAULT_SPLIT_DEPTH,
            }),
            _ => Err(anyhow!("unsupported mode {s}")),
        },
        Some(("parallel", split_depth)) => Ok(Mode::Parallel {
            split_depth: split_depth.parse()?,
        }),
        Some(_) => Err(anyhow!("unsupported mode {s}")),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");
    let dir = args
        .dir
        .as_deref()
        .ok_or(anyhow!("season directory must be specified"))?;

    let config = args.config()?;
    debug!("config: {config:?}");
    let season = data::read_season(dir, &config)?;

    let mut records = forecast(&season, &config, args.mode.unwrap_or_default())?;
    if let Some(out) = &args.out {
        data::write_json(out, &records)?;
        info!("wrote probabilities to {}", out.display());
    }

    args.sort.sort(&mut records);
    let table = tabulate_probabilities(&records, &season.roster);
    info!(
        "playoff probabilities (top {}):\n{}",
        config.cutoff,
        Console::default().render(&table)
    );

    if args.progress {
        let progress = data::read_progress(dir)?;
        let table = tabulate_progress(&progress);
        info!("points progression:\n{}", Console::default().render(&table));
    }

    Ok(())
}
