use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pagesim::report::write_comparison;
use pagesim::{compare, Page, PolicyKind, Result, SimConfig, Simulator, TextReporter};

#[derive(Parser)]
#[command(author, version, about = "pagesim - page replacement policy simulator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace one policy step by step
    Run {
        /// fifo, lru, clock, optimal (or 1=FIFO 2=LRU 3=Optimal 4=Clock)
        policy: String,

        /// Number of physical frames
        #[arg(allow_negative_numbers = true)]
        frames: i64,

        /// Page references, one symbol each
        pages: Vec<String>,

        /// Print only the total fault count
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run all four policies and print a summary table
    Compare {
        /// Number of physical frames
        #[arg(allow_negative_numbers = true)]
        frames: i64,

        /// Page references, one symbol each
        pages: Vec<String>,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn parse_pages(tokens: &[String]) -> Result<Vec<Page>> {
    tokens.iter().map(|t| t.parse()).collect()
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            policy,
            frames,
            pages,
            quiet,
        } => {
            // Validate everything before the first line of output.
            let policy: PolicyKind = policy.parse()?;
            let config = SimConfig::new(policy, frames)?;
            let refs = parse_pages(&pages)?;

            let out = open_output(cli.output.as_ref())?;
            let mut reporter = if quiet {
                TextReporter::summary_only(out)
            } else {
                TextReporter::new(out)
            };
            Simulator::new(config).run_with(&refs, &mut reporter)?;
        }
        Commands::Compare { frames, pages } => {
            let refs = parse_pages(&pages)?;
            let results = compare(frames, &refs)?;

            let mut out = open_output(cli.output.as_ref())?;
            write_comparison(&mut out, &results)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("aborted: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
