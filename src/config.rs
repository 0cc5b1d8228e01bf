//! Configuration for nogo-gtp
//!
//! Centralized configuration with sensible defaults.

/// Session configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Board Configuration
    // -------------------------------------------------------------------------
    /// Initial board size (side length)
    pub board_size: usize,

    // -------------------------------------------------------------------------
    // Diagnostics Configuration
    // -------------------------------------------------------------------------
    /// Enable the diagnostic stream (handler failure dumps, unknown-command
    /// notes). Diagnostics never reach the protocol channel.
    pub debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: 7,
            debug_mode: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial board size
    pub fn board_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    /// Enable or disable the diagnostic stream
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.config.debug_mode = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
