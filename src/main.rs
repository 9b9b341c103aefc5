//! Tengen: a Go rule engine.
//!
//! ## Usage
//!
//! - `tengen` - Show a demo
//! - `tengen gtp` - Start GTP server for GUI integration
//! - `tengen demo` - Run the demo

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use tengen::board::Color;
use tengen::config::EngineConfig;
use tengen::constants::{KOMI, N, SUGGEST_TIMEOUT};
use tengen::game::Game;
use tengen::gtp::{format_vertex, GtpEngine};
use tengen::rules::KoRule;
use tengen::suggest::RandomSuggester;

/// Tengen: a Go rule engine
#[derive(Parser)]
#[command(name = "tengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp(GtpArgs),
    /// Play a short scripted game and print the board
    Demo,
}

#[derive(Args)]
struct GtpArgs {
    /// Board size
    #[arg(long, default_value_t = N)]
    size: usize,
    /// Compensation points for White
    #[arg(long, default_value_t = KOMI)]
    komi: f32,
    /// Forbid any repeated board, not just immediate ko recapture
    #[arg(long)]
    superko: bool,
    /// Milliseconds to wait for a generated move before passing
    #[arg(long, default_value_t = SUGGEST_TIMEOUT.as_millis() as u64)]
    timeout_ms: u64,
    /// Seed for the random move generator
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

impl GtpArgs {
    fn config(&self) -> anyhow::Result<EngineConfig> {
        let config = EngineConfig {
            size: self.size,
            komi: self.komi,
            ko_rule: if self.superko {
                KoRule::PositionalSuperko
            } else {
                KoRule::Simple
            },
            suggest_timeout: Duration::from_millis(self.timeout_ms),
        };
        config.validate().context("invalid engine configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp(args)) => {
            let config = args.config()?;
            let suggester = Arc::new(Mutex::new(RandomSuggester::new(args.seed)));
            let mut engine = GtpEngine::new(config, suggester);
            engine.run().context("GTP session failed")?;
        }
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

fn run_demo() {
    println!("Tengen: Go rule engine\n");

    let mut game = Game::new(&EngineConfig::default());
    let size = game.board().size();

    for (x, y) in [(3, 3), (3, 3), (3, 4)] {
        let color = game.to_move();
        let vertex = format_vertex(x, y, size);
        match game.play(x as i32, y as i32) {
            Ok(captured) => println!("{color} {vertex}: ok, captured {captured}"),
            Err(e) => println!("{color} {vertex}: {e}"),
        }
    }

    println!("\n{}", game.board());
    println!(
        "Prisoners: black {}, white {}",
        game.position().prisoners(Color::Black),
        game.position().prisoners(Color::White)
    );
}
