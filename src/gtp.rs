//! Go Text Protocol (GTP) front-end.
//!
//! Implements the subset of GTP version 2 needed to drive a game from a
//! graphical client such as Sabaki or GoGui.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - any size from 2 to 25
//! - `clear_board`
//! - `komi <value>`
//! - `play <color> <vertex>` - vertex may be `pass`
//! - `genmove <color>` - ask the move suggester and play its answer
//! - `showboard`
//! - `captures <color>` - prisoners taken by that color
//! - `final_score`
//!
//! Responses go to the output stream; diagnostics go to stderr.

use std::io::{self, BufRead, Write};

use crate::board::Color;
use crate::config::EngineConfig;
use crate::error::CoordError;
use crate::game::{Game, Move};
use crate::scoring::{Scorer, UndeterminedScorer};
use crate::suggest::{request_move, SharedSuggester};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "final_score",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Column letters; `I` is skipped by convention.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Parse a vertex such as `D4` or `pass` on a board of `size`.
///
/// Rows count from the bottom, so `A1` is `(0, size - 1)`.
pub fn parse_vertex(s: &str, size: usize) -> Result<Move, CoordError> {
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }
    let malformed = || CoordError::Malformed(s.to_string());

    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
    let col = COLUMNS
        .iter()
        .position(|&c| c as char == col_char)
        .ok_or_else(malformed)?;
    let row_text = chars.as_str();
    if row_text.is_empty() || !row_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let row: usize = row_text.parse().map_err(|_| malformed())?;

    if col >= size || row == 0 || row > size {
        return Err(CoordError::OffBoard(s.to_string(), size));
    }
    Ok(Move::Play {
        x: col as i32,
        y: (size - row) as i32,
    })
}

/// Format `(x, y)` as a vertex such as `D4`.
pub fn format_vertex(x: usize, y: usize, size: usize) -> String {
    format!("{}{}", COLUMNS[x] as char, size - y)
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// GTP engine state.
pub struct GtpEngine {
    config: EngineConfig,
    game: Game,
    suggester: SharedSuggester,
    scorer: Box<dyn Scorer>,
}

impl GtpEngine {
    pub fn new(config: EngineConfig, suggester: SharedSuggester) -> Self {
        let game = Game::new(&config);
        Self {
            config,
            game,
            suggester,
            scorer: Box::new(UndeterminedScorer),
        }
    }

    /// Replace the scorer used by `final_score`.
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !success {
                eprintln!("gtp: {command} failed: {message}");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                let config = EngineConfig {
                    size,
                    komi: self.game.komi(),
                    ..self.config.clone()
                };
                match config.validate() {
                    Ok(()) => {
                        self.config = config;
                        self.game = Game::new(&self.config);
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "komi" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<f32>() {
                    Ok(komi) if komi.is_finite() => {
                        self.game.set_komi(komi);
                        (true, String::new())
                    }
                    _ => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                let size = self.game.board().size();
                let mv = match parse_vertex(args[1], size) {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                let previous = self.game.to_move();
                self.game.set_to_move(color);
                match self.game.apply(mv) {
                    Ok(_) => (true, String::new()),
                    Err(e) => {
                        self.game.set_to_move(previous);
                        (false, e.to_string())
                    }
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|a| parse_color(a)) else {
                    return (false, "invalid color".to_string());
                };
                if self.game.is_over() {
                    return (false, "game is over".to_string());
                }
                self.game.set_to_move(color);
                let suggested =
                    request_move(&self.suggester, &self.game, self.config.suggest_timeout);
                if let Some(reason) = &suggested.fallback {
                    eprintln!("genmove: {reason}; passing");
                }
                let size = self.game.board().size();
                let reply = match suggested.mv {
                    Move::Play { x, y } => format_vertex(x as usize, y as usize, size),
                    Move::Pass => "pass".to_string(),
                    Move::Resign => "resign".to_string(),
                };
                match self.game.apply(suggested.mv) {
                    Ok(_) => (true, reply),
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "captures" => {
                let Some(color) = args.first().and_then(|a| parse_color(a)) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.game.position().prisoners(color).to_string())
            }

            "final_score" => match self.game.score_with(self.scorer.as_ref()) {
                Some(result) => (true, result.to_string()),
                None => (false, "cannot score".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::board::Board;
    use crate::suggest::{MoveSuggester, RandomSuggester};

    fn engine(size: usize) -> GtpEngine {
        let config = EngineConfig {
            size,
            ..EngineConfig::default()
        };
        GtpEngine::new(config, Arc::new(Mutex::new(RandomSuggester::new(3))))
    }

    struct AlwaysResign;

    impl MoveSuggester for AlwaysResign {
        fn suggest_move(&mut self, _: &Board, _: Color, _: Option<Move>) -> anyhow::Result<Move> {
            Ok(Move::Resign)
        }
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_vertex() {
        assert_eq!(parse_vertex("A1", 19), Ok(Move::Play { x: 0, y: 18 }));
        assert_eq!(parse_vertex("j10", 19), Ok(Move::Play { x: 8, y: 9 }));
        assert_eq!(parse_vertex("T19", 19), Ok(Move::Play { x: 18, y: 0 }));
        assert_eq!(parse_vertex("PASS", 19), Ok(Move::Pass));
        assert!(matches!(parse_vertex("I5", 19), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("Z", 19), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("A+1", 19), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("C-3", 19), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("K10", 9), Err(CoordError::OffBoard(..))));
        assert!(matches!(parse_vertex("A0", 9), Err(CoordError::OffBoard(..))));
    }

    #[test]
    fn test_format_vertex() {
        assert_eq!(format_vertex(0, 18, 19), "A1");
        assert_eq!(format_vertex(8, 0, 9), "J9");
        assert_eq!(format_vertex(3, 15, 19), "D4");
    }

    #[test]
    fn test_name_command() {
        let mut engine = engine(9);
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "tengen");
    }

    #[test]
    fn test_known_command() {
        let mut engine = engine(9);
        assert_eq!(engine.execute("known_command", &["play"]), (true, "true".to_string()));
        assert_eq!(engine.execute("known_command", &["undo"]), (true, "false".to_string()));
    }

    #[test]
    fn test_boardsize() {
        let mut engine = engine(9);
        let (success, _) = engine.execute("boardsize", &["13"]);
        assert!(success);
        assert_eq!(engine.game().board().size(), 13);

        let (success, _) = engine.execute("boardsize", &["30"]);
        assert!(!success);
        assert_eq!(engine.game().board().size(), 13);
    }

    #[test]
    fn test_play_and_reject() {
        let mut engine = engine(9);
        assert!(engine.execute("play", &["black", "D4"]).0);
        let (success, message) = engine.execute("play", &["white", "D4"]);
        assert!(!success);
        assert_eq!(message, "illegal move: point not empty");
        assert!(engine.execute("play", &["white", "E4"]).0);
        assert_eq!(engine.game().board().count(Color::Black), 1);
        assert_eq!(engine.game().board().count(Color::White), 1);
    }

    #[test]
    fn test_captures_command() {
        let mut engine = engine(9);
        for (color, vertex) in [("b", "B1"), ("w", "A1"), ("b", "A2")] {
            assert!(engine.execute("play", &[color, vertex]).0);
        }
        assert_eq!(engine.execute("captures", &["black"]), (true, "1".to_string()));
        assert_eq!(engine.execute("captures", &["white"]), (true, "0".to_string()));
    }

    #[test]
    fn test_genmove_plays_legal_move() {
        let mut engine = engine(9);
        let (success, reply) = engine.execute("genmove", &["b"]);
        assert!(success);
        assert!(matches!(parse_vertex(&reply, 9), Ok(Move::Play { .. })));
        assert_eq!(engine.game().board().count(Color::Black), 1);
    }

    #[test]
    fn test_genmove_resign_ends_game() {
        let mut engine = GtpEngine::new(
            EngineConfig { size: 9, ..EngineConfig::default() },
            Arc::new(Mutex::new(AlwaysResign)),
        );
        assert_eq!(engine.execute("genmove", &["w"]), (true, "resign".to_string()));
        assert_eq!(engine.execute("final_score", &[]), (true, "B+R".to_string()));
        assert!(!engine.execute("genmove", &["b"]).0);
    }

    #[test]
    fn test_final_score_undetermined_after_passes() {
        let mut engine = engine(9);
        assert!(engine.execute("play", &["b", "pass"]).0);
        assert!(engine.execute("play", &["w", "pass"]).0);
        assert!(engine.game().is_over());
        assert_eq!(engine.execute("final_score", &[]), (false, "cannot score".to_string()));
    }

    #[test]
    fn test_final_score_uses_plugged_scorer() {
        struct Even;

        impl Scorer for Even {
            fn score(&self, _: &crate::game::Position, _: f32) -> Option<crate::scoring::GameResult> {
                Some(crate::scoring::GameResult::Jigo)
            }
        }

        let mut engine = engine(9).with_scorer(Box::new(Even));
        assert_eq!(engine.execute("final_score", &[]), (false, "cannot score".to_string()));
        assert!(engine.execute("play", &["b", "pass"]).0);
        assert!(engine.execute("play", &["w", "pass"]).0);
        assert_eq!(engine.execute("final_score", &[]), (true, "0".to_string()));
    }

    #[test]
    fn test_run_with_ids() {
        let mut engine = engine(9);
        let input = b"1 name\n# comment\n\n2 play b C3\n3 foo\nquit\nname\n";
        let mut output = Vec::new();
        engine.run_with(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "=1 tengen\n\n=2 \n\n?3 unknown command: foo\n\n= \n\n"
        );
    }
}
