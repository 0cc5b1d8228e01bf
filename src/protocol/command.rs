//! Command definitions
//!
//! The command table and the argument-arity table.
//!
//! Dispatch is a static mapping from an enumerated command tag to a session
//! handler, resolved by name lookup once per line; there is no runtime
//! registration. Table order is significant: `list_commands` reports names
//! in exactly this order.

/// Command tags, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ProtocolVersion,
    Quit,
    Name,
    Boardsize,
    Showboard,
    ClearBoard,
    Komi,
    Version,
    KnownCommand,
    Genmove,
    ListCommands,
    Play,
    RulesLegalMoves,
    RulesFinalResult,
    RulesSideToMove,
    RulesGameId,
    RulesBoard,
    AnalyzeCommands,
    RulesBoardSize,
}

/// Every supported command, in the order `list_commands` reports them.
pub const COMMANDS: [CommandKind; 19] = [
    CommandKind::ProtocolVersion,
    CommandKind::Quit,
    CommandKind::Name,
    CommandKind::Boardsize,
    CommandKind::Showboard,
    CommandKind::ClearBoard,
    CommandKind::Komi,
    CommandKind::Version,
    CommandKind::KnownCommand,
    CommandKind::Genmove,
    CommandKind::ListCommands,
    CommandKind::Play,
    CommandKind::RulesLegalMoves,
    CommandKind::RulesFinalResult,
    CommandKind::RulesSideToMove,
    CommandKind::RulesGameId,
    CommandKind::RulesBoard,
    CommandKind::AnalyzeCommands,
    CommandKind::RulesBoardSize,
];

impl CommandKind {
    /// The command's wire name.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::ProtocolVersion => "protocol_version",
            CommandKind::Quit => "quit",
            CommandKind::Name => "name",
            CommandKind::Boardsize => "boardsize",
            CommandKind::Showboard => "showboard",
            CommandKind::ClearBoard => "clear_board",
            CommandKind::Komi => "komi",
            CommandKind::Version => "version",
            CommandKind::KnownCommand => "known_command",
            CommandKind::Genmove => "genmove",
            CommandKind::ListCommands => "list_commands",
            CommandKind::Play => "play",
            CommandKind::RulesLegalMoves => "gogui-rules_legal_moves",
            CommandKind::RulesFinalResult => "gogui-rules_final_result",
            CommandKind::RulesSideToMove => "gogui-rules_side_to_move",
            CommandKind::RulesGameId => "gogui-rules_game_id",
            CommandKind::RulesBoard => "gogui-rules_board",
            CommandKind::AnalyzeCommands => "gogui-analyze_commands",
            CommandKind::RulesBoardSize => "gogui-rules_board_size",
        }
    }

    /// Look a command up by wire name.
    pub fn from_name(name: &str) -> Option<CommandKind> {
        COMMANDS.iter().copied().find(|c| c.name() == name)
    }

    /// Required argument count and usage message, for commands with a
    /// fixed, non-zero arity. `None` means no arity check.
    pub fn arity(self) -> Option<(usize, &'static str)> {
        match self {
            CommandKind::Boardsize => Some((1, "Usage: boardsize INT")),
            CommandKind::Komi => Some((1, "Usage: komi FLOAT")),
            CommandKind::KnownCommand => Some((1, "Usage: known_command CMD_NAME")),
            CommandKind::Genmove => Some((1, "Usage: genmove {w,b}")),
            CommandKind::Play => Some((2, "Usage: play {b,w} MOVE")),
            _ => None,
        }
    }
}
