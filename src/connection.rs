//! Connection Handler
//!
//! Owns one GTP session: the line loop, tokenization, arity checking,
//! dispatch, and every command handler.
//!
//! ## Session model
//!
//! Single-threaded, strictly request-response: one line is read, fully
//! processed (including any board-copy work in capture detection), and
//! answered before the next line is read. The session holds no board state
//! of its own; every command queries or mutates the board collaborator
//! atomically.
//!
//! ## Failure model
//!
//! Malformed arity, unknown commands, unparseable coordinates and illegal
//! moves are protocol-level responses and the loop continues. An `Err`
//! escaping a handler is a contract violation between this layer and its
//! collaborators: it is logged to the diagnostic channel (debug mode only)
//! and then propagated, terminating the session. That fail-fast behavior is
//! part of the contract; regression harnesses rely on it.

use std::io::{BufRead, Write};

use crate::board::{Color, GoBoard, Point};
use crate::engine::GtpEngine;
use crate::error::{GtpError, Result};
use crate::protocol::codec::{self, Coord};
use crate::protocol::{self, illegal_move, CommandKind, IllegalReason, COMMANDS};

/// GTP protocol version reported by `protocol_version`. Always 2.
const PROTOCOL_VERSION: &str = "2";

/// Game id reported by `gogui-rules_game_id`.
const GAME_ID: &str = "NoGo";

/// Handles a single GTP session over a line-based channel.
pub struct GtpConnection<B, E, W> {
    /// Board collaborator; the only mutable state shared across commands
    board: B,

    /// Move-generation engine collaborator
    engine: E,

    /// Response channel (stdout equivalent); one frame per command
    writer: W,

    /// Gates the diagnostic stream (the original's stderr debug messages)
    debug_mode: bool,

    /// Set by `quit`; ends the line loop after the current response
    quit: bool,
}

impl<B, E, W> GtpConnection<B, E, W>
where
    B: GoBoard,
    E: GtpEngine,
    W: Write,
{
    /// Create a session over the given collaborators and response channel.
    pub fn new(engine: E, board: B, writer: W, debug_mode: bool) -> Self {
        Self {
            board,
            engine,
            writer,
            debug_mode,
            quit: false,
        }
    }

    /// The board collaborator.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// The engine collaborator.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The response channel.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Run the session: read lines until end-of-input or `quit`.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.process_line(&line)?;
            if self.quit {
                break;
            }
        }
        Ok(())
    }

    /// Parse one command line and execute it.
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        let mut command = line.trim();
        if command.is_empty() {
            return Ok(());
        }
        if command.starts_with('#') {
            return Ok(());
        }
        // Strip leading sequence ids from regression tests; never echoed
        if command.starts_with(|c: char| c.is_ascii_digit()) {
            command = command
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .trim_start();
        }

        let tokens: Vec<&str> = command.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(());
        };

        let Some(kind) = CommandKind::from_name(name) else {
            self.debug_msg(&format!("Unknown command: {}\n", name));
            return self.error_response("Unknown command");
        };

        if let Some((required, usage)) = kind.arity() {
            if args.len() != required {
                return self.error_response(usage);
            }
        }

        if let Err(e) = self.dispatch(kind, args) {
            self.debug_msg(&format!("Error executing command {}\n", e));
            return Err(e);
        }
        Ok(())
    }

    fn dispatch(&mut self, kind: CommandKind, args: &[&str]) -> Result<()> {
        match kind {
            CommandKind::ProtocolVersion => self.protocol_version_cmd(),
            CommandKind::Quit => self.quit_cmd(),
            CommandKind::Name => self.name_cmd(),
            CommandKind::Boardsize => self.boardsize_cmd(args),
            CommandKind::Showboard => self.showboard_cmd(),
            CommandKind::ClearBoard => self.clear_board_cmd(),
            CommandKind::Komi => self.komi_cmd(args),
            CommandKind::Version => self.version_cmd(),
            CommandKind::KnownCommand => self.known_command_cmd(args),
            CommandKind::Genmove => self.genmove_cmd(args),
            CommandKind::ListCommands => self.list_commands_cmd(),
            CommandKind::Play => self.play_cmd(args),
            CommandKind::RulesLegalMoves => self.gogui_rules_legal_moves_cmd(),
            CommandKind::RulesFinalResult => self.gogui_rules_final_result_cmd(),
            CommandKind::RulesSideToMove => self.gogui_rules_side_to_move_cmd(),
            CommandKind::RulesGameId => self.gogui_rules_game_id_cmd(),
            CommandKind::RulesBoard => self.gogui_rules_board_cmd(),
            CommandKind::AnalyzeCommands => self.gogui_analyze_cmd(),
            CommandKind::RulesBoardSize => self.gogui_rules_board_size_cmd(),
        }
    }

    // =========================================================================
    // Framing
    // =========================================================================

    /// Send a success frame.
    fn respond(&mut self, payload: &str) -> Result<()> {
        self.writer.write_all(protocol::success(payload).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Send an error frame.
    fn error_response(&mut self, message: &str) -> Result<()> {
        self.writer.write_all(protocol::error(message).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write to the diagnostic stream, debug mode only. Never reaches the
    /// protocol channel.
    fn debug_msg(&self, msg: &str) {
        if self.debug_mode {
            tracing::debug!("{}", msg);
        }
    }

    // =========================================================================
    // Query / administrative handlers
    // =========================================================================

    fn protocol_version_cmd(&mut self) -> Result<()> {
        self.respond(PROTOCOL_VERSION)
    }

    fn quit_cmd(&mut self) -> Result<()> {
        self.quit = true;
        self.respond("")
    }

    fn name_cmd(&mut self) -> Result<()> {
        let name = self.engine.name().to_string();
        self.respond(&name)
    }

    fn version_cmd(&mut self) -> Result<()> {
        let version = self.engine.version().to_string();
        self.respond(&version)
    }

    fn boardsize_cmd(&mut self, args: &[&str]) -> Result<()> {
        let size: usize = match args[0].parse() {
            Ok(size) => size,
            Err(_) => {
                return self.error_response(&format!("invalid board size: {}", args[0]));
            }
        };
        if let Err(e) = self.board.reset(size) {
            return self.error_response(&e.to_string());
        }
        self.respond("")
    }

    fn clear_board_cmd(&mut self) -> Result<()> {
        let size = self.board.size();
        if let Err(e) = self.board.reset(size) {
            return self.error_response(&e.to_string());
        }
        self.respond("")
    }

    fn showboard_cmd(&mut self) -> Result<()> {
        let rendered = self.board.render_2d();
        self.respond(&format!("\n{}", rendered))
    }

    fn komi_cmd(&mut self, args: &[&str]) -> Result<()> {
        let komi: f32 = match args[0].parse() {
            Ok(komi) => komi,
            Err(_) => {
                return self.error_response(&format!("invalid komi: {}", args[0]));
            }
        };
        self.engine.set_komi(komi);
        self.respond("")
    }

    fn known_command_cmd(&mut self, args: &[&str]) -> Result<()> {
        if CommandKind::from_name(args[0]).is_some() {
            self.respond("true")
        } else {
            self.respond("false")
        }
    }

    fn list_commands_cmd(&mut self) -> Result<()> {
        let names: Vec<&str> = COMMANDS.iter().map(|c| c.name()).collect();
        self.respond(&names.join(" "))
    }

    fn gogui_rules_game_id_cmd(&mut self) -> Result<()> {
        self.respond(GAME_ID)
    }

    fn gogui_rules_board_size_cmd(&mut self) -> Result<()> {
        let size = self.board.size().to_string();
        self.respond(&size)
    }

    fn gogui_rules_side_to_move_cmd(&mut self) -> Result<()> {
        let color = if self.board.current_player() == Color::Black {
            "black"
        } else {
            "white"
        };
        self.respond(color)
    }

    fn gogui_rules_board_cmd(&mut self) -> Result<()> {
        let size = self.board.size();
        let mut grid = String::new();
        for row in (1..=size).rev() {
            for col in 1..=size {
                let point = codec::coord_to_point(row, col, size);
                grid.push(match self.board.get_color(point) {
                    Color::Black => 'X',
                    Color::White => 'O',
                    Color::Empty => '.',
                    Color::Border => {
                        // Unreachable on a consistent board
                        return Err(GtpError::Board(format!(
                            "border cell inside playable area at ({}, {})",
                            row, col
                        )));
                    }
                });
            }
            grid.push('\n');
        }
        self.respond(&grid)
    }

    fn gogui_analyze_cmd(&mut self) -> Result<()> {
        self.respond(
            "pstring/Legal Moves For ToPlay/gogui-rules_legal_moves\n\
             pstring/Side to Play/gogui-rules_side_to_move\n\
             pstring/Final Result/gogui-rules_final_result\n\
             pstring/Board Size/gogui-rules_board_size\n\
             pstring/Rules GameID/gogui-rules_game_id\n\
             pstring/Show Board/gogui-rules_board\n",
        )
    }

    // =========================================================================
    // Legality and capture detection
    // =========================================================================

    /// Whether playing `color` at `point` would remove any opposing stones.
    ///
    /// Works on a clone of the live board: snapshot the empty points, apply
    /// the hypothetical move on the clone, snapshot again. The played point
    /// is dropped from the before-set (it is occupied by construction); any
    /// remaining discrepancy means a previously occupied point became
    /// empty, i.e. a capture. Reuses the board's own move application and
    /// empty-point enumeration instead of re-deriving liberty logic, at the
    /// cost of one board copy per check.
    fn capture_detection(&self, point: Point, color: Color) -> bool {
        let mut monitor = self.board.clone();
        let mut before = self.board.get_empty_points();
        monitor.play_move(point, color);
        let after = monitor.get_empty_points();

        before.retain(|&p| p != point);
        before != after
    }

    /// All moves the side to move may play: empty, legal for the board's
    /// own rules, and capture-free (capturing is prohibited in this rule
    /// variant). Order follows the board's empty-point enumeration.
    fn legal_move_helper(&self) -> Vec<Point> {
        let color = self.board.current_player();
        self.board
            .get_empty_points()
            .into_iter()
            .filter(|&p| self.board.is_legal(p, color) && !self.capture_detection(p, color))
            .collect()
    }

    fn gogui_rules_legal_moves_cmd(&mut self) -> Result<()> {
        let size = self.board.size();
        let mut moves = Vec::new();
        for point in self.legal_move_helper() {
            moves.push(codec::format_point(codec::point_to_coord(point, size))?);
        }
        // Sorted by column letter only; same-letter ties keep enumeration
        // order. Matches the deployed controllers, so left as is.
        moves.sort_by_key(|m| m.as_bytes()[0]);
        self.respond(&moves.join(" "))
    }

    fn gogui_rules_final_result_cmd(&mut self) -> Result<()> {
        if self.legal_move_helper().is_empty() {
            // The side that is not blocked wins
            if self.board.current_player() == Color::Black {
                self.respond("white")
            } else {
                self.respond("black")
            }
        } else {
            self.respond("unknown")
        }
    }

    // =========================================================================
    // Move commands
    // =========================================================================

    /// Play a move for the given color.
    ///
    /// Six validation stages, each short-circuiting with its verbatim
    /// illegal-move reason: wrong color, wrong coordinate (syntax), wrong
    /// coordinate (decode), occupied, suicide, capture. Only then is the
    /// move applied.
    fn play_cmd(&mut self, args: &[&str]) -> Result<()> {
        let color_token = args[0];
        let move_token = args[1];

        let Some(color) = Color::from_token(&color_token.to_lowercase()) else {
            return self.respond(&format!("Error: unknown color '{}'", color_token));
        };

        if color != self.board.current_player() {
            return self.respond(&illegal_move(
                color_token,
                move_token,
                IllegalReason::WrongColor,
            ));
        }

        // Syntactic letter+digit check; also rules out "pass", which this
        // variant does not allow
        let digit_ok = move_token
            .chars()
            .nth(1)
            .map_or(false, |c| c.is_ascii_digit());
        if !digit_ok {
            return self.respond(&illegal_move(
                color_token,
                move_token,
                IllegalReason::WrongCoordinate,
            ));
        }

        let point = match codec::move_to_coord(move_token, self.board.size()) {
            Some(Coord::Pos { row, col }) => codec::coord_to_point(row, col, self.board.size()),
            _ => {
                return self.respond(&illegal_move(
                    color_token,
                    move_token,
                    IllegalReason::WrongCoordinate,
                ));
            }
        };

        if self.board.get_color(point) != Color::Empty {
            return self.respond(&illegal_move(
                color_token,
                move_token,
                IllegalReason::Occupied,
            ));
        }

        if self.board.check_suicide(point, color) {
            return self.respond(&illegal_move(
                color_token,
                move_token,
                IllegalReason::Suicide,
            ));
        }

        if self.capture_detection(point, self.board.current_player()) {
            return self.respond(&illegal_move(
                color_token,
                move_token,
                IllegalReason::Capture,
            ));
        }

        if !self.board.play_move(point, color) {
            let rendered = self.board.render_2d();
            self.debug_msg(&format!("Move: {}\nBoard:\n{}\n", move_token, rendered));
        }
        self.respond("")
    }

    /// Generate and play a move for the given color.
    ///
    /// The engine's proposal is validated like any other move. A proposal
    /// that would capture is answered with "resign": under this rule
    /// variant capturing loses, so the engine declines rather than plays.
    fn genmove_cmd(&mut self, args: &[&str]) -> Result<()> {
        let color = Color::from_token(&args[0].to_lowercase()).ok_or_else(|| {
            GtpError::Engine(format!("genmove: unknown color '{}'", args[0]))
        })?;

        let point = self.engine.get_move(&self.board, color);
        let move_string = codec::format_point(codec::point_to_coord(point, self.board.size()))?;

        if color != self.board.current_player() {
            return self.respond(&format!("illegal move: \"{}\" wrong color", args[0]));
        }

        if self.board.is_legal(point, color) {
            if !self.capture_detection(point, color) {
                self.board.play_move(point, color);
                self.respond(&move_string)
            } else {
                self.respond("resign")
            }
        } else {
            self.respond(&format!("Illegal move: {}", move_string))
        }
    }
}
