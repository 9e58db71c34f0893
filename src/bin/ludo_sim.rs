//! Command-line driver: configure a game, run it, print the move table.

use clap::{Parser, ValueEnum};
use rust_ludo::{parse_seed, Game, GameConfig, MoveTable, Strategy};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Aligned text table
    Table,
    /// Comma-separated values with a header line
    Csv,
    /// Full move records as JSON
    Json,
}

#[derive(Parser)]
#[command(about = "Simulate a two-player race game and print every move")]
struct Args {
    /// Tokens per player
    #[arg(short, long, default_value_t = rust_ludo::core::DEFAULT_TOKENS)]
    tokens: usize,

    /// Home square
    #[arg(short, long, default_value_t = rust_ludo::core::DEFAULT_FINAL_POS)]
    final_position: u32,

    /// Capture-immune squares
    #[arg(long, value_delimiter = ',', default_values_t = rust_ludo::core::DEFAULT_SAFE_SQUARES)]
    safe_squares: Vec<u32>,

    /// Number of turns to play
    #[arg(short = 'n', long, default_value_t = rust_ludo::core::DEFAULT_ROUNDS)]
    rounds: u32,

    /// RNG seed (any integer); random if omitted
    #[arg(long)]
    seed: Option<String>,

    /// Strategy for player 1: PREDICTABLE, AGGRESSIVE or RESPONSIBLE
    #[arg(long, default_value = "PREDICTABLE")]
    player1_strategy: String,

    /// Strategy for player 2: PREDICTABLE, AGGRESSIVE or RESPONSIBLE
    #[arg(long, default_value = "PREDICTABLE")]
    player2_strategy: String,

    /// How to print the history
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let strategies = [
        args.player1_strategy.parse::<Strategy>()?,
        args.player2_strategy.parse::<Strategy>()?,
    ];

    let mut config = GameConfig::new()
        .with_tokens(args.tokens)
        .with_final_position(args.final_position)
        .with_safe_squares(args.safe_squares)
        .with_rounds(args.rounds)
        .with_strategies(strategies);
    if let Some(seed) = args.seed.as_deref() {
        config = config.with_seed(parse_seed(seed)?);
    }

    let mut game = Game::new(config)?;
    info!(seed = game.seed(), "starting game");
    let history = game.run()?;

    match args.output {
        OutputFormat::Table => print!("{}", MoveTable::from_log(&history).to_text()),
        OutputFormat::Csv => print!("{}", MoveTable::from_log(&history).to_csv()),
        OutputFormat::Json => {
            let records: Vec<_> = history.iter().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    for player in game.finished_players() {
        eprintln!("{player} brought every token home");
    }
    if let Some(seed) = game.seed() {
        eprintln!("seed: {seed}");
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
