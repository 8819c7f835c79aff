//! Debate schedule CLI
//!
//! Read team names, pair them, and print or export the schedule.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use debate_core::{Mode, RoundLimit};
use debate_tool::{
    generate_json, generate_report, write_csv, ToolConfig, TournamentRequest, DEFAULT_CONFIG_FILE,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "debate_tool",
    about = "Round-robin pairing schedules for debate tournaments",
    version
)]
struct Cli {
    /// Config file (default: ./debate.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a schedule and print it
    Schedule(ScheduleArgs),
    /// Validate a request without printing a schedule
    Check(RequestArgs),
}

#[derive(Args)]
struct RequestArgs {
    /// File with one team per line ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    teams: String,
    /// Number of rounds
    #[arg(short, long)]
    rounds: usize,
    /// Pairing layout: schedule (half-split) or schedule2 (rotation)
    #[arg(short, long)]
    mode: Option<Mode>,
    /// What to do when rounds exceed the repeat-free limit
    #[arg(long, value_enum)]
    round_limit: Option<LimitArg>,
}

#[derive(Args)]
struct ScheduleArgs {
    #[command(flatten)]
    request: RequestArgs,
    /// Organiser name
    #[arg(long, default_value = "")]
    owner: String,
    /// Tournament name
    #[arg(long, default_value = "")]
    tournament: String,
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
    /// Also write <owner>_<tournament>.csv into this directory
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Fixed shuffle seed
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LimitArg {
    Allow,
    Clamp,
    Reject,
}

impl From<LimitArg> for RoundLimit {
    fn from(arg: LimitArg) -> Self {
        match arg {
            LimitArg::Allow => RoundLimit::Allow,
            LimitArg::Clamp => RoundLimit::Clamp,
            LimitArg::Reject => RoundLimit::Reject,
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ToolConfig> {
    match path {
        Some(path) => ToolConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => ToolConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .context("failed to load debate.toml"),
    }
}

fn read_teams(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read teams from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
    }
}

/// Build the request, letting command-line flags override the config file.
fn build_request(args: &RequestArgs, config: &mut ToolConfig) -> anyhow::Result<TournamentRequest> {
    if let Some(mode) = args.mode {
        config.schedule.mode = mode;
    }
    if let Some(limit) = args.round_limit {
        config.schedule.round_limit = limit.into();
    }

    let text = read_teams(&args.teams)?;
    Ok(TournamentRequest::new(&text, args.rounds).options(config.schedule.options()))
}

fn run_schedule(args: ScheduleArgs, mut config: ToolConfig) -> anyhow::Result<()> {
    if args.seed.is_some() {
        config.schedule.seed = args.seed;
    }
    if args.out.is_some() {
        config.export.directory = args.out.clone();
    }

    let request = build_request(&args.request, &mut config)?
        .owner(args.owner)
        .tournament(args.tournament);
    let sheet = request.run(&config)?;

    match args.format {
        Format::Text => print!("{}", generate_report(&sheet)),
        Format::Csv => print!("{}", sheet.csv),
        Format::Json => println!("{}", generate_json(&sheet)?),
    }

    if let Some(dir) = &config.export.directory {
        let path = write_csv(dir, &sheet.file_stem, &sheet.csv)?;
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}

fn run_check(args: RequestArgs, mut config: ToolConfig) -> anyhow::Result<()> {
    let request = build_request(&args, &mut config)?;
    request.validate()?;

    let options = request.options;
    let rounds = options
        .round_limit
        .apply(request.rounds, request.teams.len(), options.mode)?;
    let limit = options.mode.max_distinct_rounds(request.teams.len());

    info!(mode = %options.mode, rounds, limit, "request ok");
    println!(
        "OK: {} entrants{}, {} rounds ({} without repeats in {} mode)",
        request.teams.entrants(),
        if request.teams.has_bye() { " + bye" } else { "" },
        rounds,
        limit,
        options.mode
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Schedule(args) => run_schedule(args, config),
        Commands::Check(args) => run_check(args, config),
    }
}
