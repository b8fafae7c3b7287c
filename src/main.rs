//  ____  ____           ____
// |  _ \|  _ \__      __/ ___| ___ _ __
// | |_) | |_) \ \ /\ / / |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /| |_| |  __/ | | |
// |_| \_\_|     \_/\_/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// A random password generator written in Rust.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rpwgen::charset::{CharacterClass, GenerationOptions};
use rpwgen::commands::{config, password_gen, testpass};
use rpwgen::configtool::{self, MAX_LENGTH};

#[derive(Debug, Parser)]
#[command(name = "rpwgen")]
#[command(about = "Generate random passwords and estimate their strength", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new random password
    Gen(GenArgs),

    /// Test password strength and properties
    Testpass(TestpassArgs),

    /// Show the effective generator defaults
    Config {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct TestpassArgs {
    /// Password to test
    password: String,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=MAX_LENGTH as i64))]
    length: Option<u16>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Exclude visually similar characters (i, l, 1, L, o, 0, O)
    #[arg(short = 'c', long, default_value_t = false)]
    exclude_similar: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    count: u16,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Seed a reproducible pseudo-random stream instead of the OS source
    #[arg(long)]
    seed: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GenArgs {
    /// Command-line flags layered over the configured defaults.
    fn options(&self) -> Result<GenerationOptions> {
        let defaults = configtool::load_config(self.config.as_deref())
            .context("Failed to load configuration")?;
        let mut options = GenerationOptions::from(&defaults);

        if let Some(length) = self.length {
            options.length = length as usize;
        }
        let disabled = [
            (CharacterClass::Uppercase, self.no_uppercase),
            (CharacterClass::Lowercase, self.no_lowercase),
            (CharacterClass::Digit, self.no_numbers),
            (CharacterClass::Symbol, self.no_special),
        ];
        for (class, off) in disabled {
            if off {
                options = options.without_class(class);
            }
        }
        if self.exclude_similar {
            options = options.exclude_similar(true);
        }
        Ok(options)
    }
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Gen(args) => {
            let options = args.options()?;
            password_gen::generate_random(&options, args.count as usize, args.json, args.seed, &mut out)
        }
        Command::Testpass(args) => testpass::test_password(&args.password, args.check_confusion, &mut out),
        Command::Config { config: path } => config::show_config(path.as_deref(), &mut out),
    }
}
