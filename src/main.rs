use clap::Parser;
use colored::Colorize;
use roulette::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Betting system to simulate
    #[arg(short, long, default_value = "Martingale")]
    strategy: Strategy,
    /// JSON file of session and table parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Sessions to run
    #[arg(long)]
    samples: Option<usize>,
    /// Starting stake per session
    #[arg(long)]
    stake: Option<Chips>,
    /// Round budget per session
    #[arg(long)]
    duration: Option<usize>,
    /// Table minimum bet
    #[arg(long)]
    minimum: Option<Chips>,
    /// Table limit on the sum of one round's bets
    #[arg(long)]
    limit: Option<Chips>,
    /// Seed for a replayable run
    #[arg(long)]
    seed: Option<u64>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// List strategy names and exit
    #[arg(long)]
    list: bool,
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(stake) = self.stake {
            config.stake = stake;
        }
        if let Some(duration) = self.duration {
            config.duration = duration;
        }
        if let Some(minimum) = self.minimum {
            config.minimum = minimum;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config.check()?)
    }
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roulette::log(args.level());
    if args.list {
        for strategy in Strategy::ALL {
            println!("{}", strategy);
        }
        return Ok(());
    }
    let config = args.config()?;
    let mut simulator = Simulator::build(args.strategy, config)?;
    simulator.gather()?;
    let summary = simulator.summary();
    if args.json {
        println!("{}", summary.json()?);
    } else {
        println!("{}", summary.strategy.bold());
        println!("{:<10} {:>10} {:>10}", "", "mean".dimmed(), "stdev".dimmed());
        println!("{:<10} {}", "duration", summary.durations.to_string().green());
        println!("{:<10} {}", "maximum", summary.maxima.to_string().yellow());
        println!("{}", format!("{} sessions", summary.samples).dimmed());
    }
    Ok(())
}
