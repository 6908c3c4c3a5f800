use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use utsu_cli::commands::{config_ops, match_ops, play_ops};
use utsu_cli::trace_init::init_tracing;
use utsu_session::Difficulty;

#[derive(Parser)]
#[command(name = "utsu", about = "Romaji typing battle tools")]
struct Cli {
    /// Custom romaji table (TOML) replacing the built-in one
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom settings (TOML) replacing the built-in ones
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON traces to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the display romaji for a kana reading
    Romaji {
        /// Kana reading
        reading: String,
    },

    /// Show how a reading is split into chunks and their accepted spellings
    Chunks {
        /// Kana reading
        reading: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay a key sequence against a reading (exit 1 if it does not complete)
    Check {
        /// Kana reading
        reading: String,
        /// Keys typed, in order
        keys: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play a battle on the terminal, one line of keys at a time
    Play {
        /// easy, normal or hard
        #[arg(short, long, default_value = "normal")]
        difficulty: Difficulty,
        /// RNG seed for word selection
        #[arg(long)]
        seed: Option<u64>,
        /// Custom word bank (TOML)
        #[arg(long)]
        words: Option<String>,
    },

    /// Export or validate configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in romaji table
    ExportRomaji,
    /// Check a romaji table file
    ValidateRomaji { file: String },
    /// Print the built-in settings
    ExportSettings,
    /// Check a settings file
    ValidateSettings { file: String },
    /// Print the built-in word bank
    ExportWords,
    /// Check a word bank file
    ValidateWords { file: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _trace = cli.trace_dir.as_deref().map(|dir| init_tracing(Path::new(dir)));
    config_ops::install_custom(cli.romaji.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Romaji { reading } => match_ops::romaji(&reading),
        Command::Chunks { reading, json } => match_ops::chunks(&reading, json),
        Command::Check {
            reading,
            keys,
            json,
        } => {
            if !match_ops::check(&reading, &keys, json) {
                return ExitCode::FAILURE;
            }
        }
        Command::Play {
            difficulty,
            seed,
            words,
        } => play_ops::play(difficulty, seed, words.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::ExportRomaji => config_ops::romaji_export(),
            ConfigAction::ValidateRomaji { file } => config_ops::romaji_validate(&file),
            ConfigAction::ExportSettings => config_ops::settings_export(),
            ConfigAction::ValidateSettings { file } => config_ops::settings_validate(&file),
            ConfigAction::ExportWords => config_ops::words_export(),
            ConfigAction::ValidateWords { file } => config_ops::words_validate(&file),
        },
    }
    ExitCode::SUCCESS
}
