//! Per-session parser configuration.

use javelin_grammar::SourceLevel;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Rules introduced after this level are reported as compliance errors.
    pub source_level: SourceLevel,
    /// Skip method, constructor and initializer bodies while parsing a unit.
    pub diet: bool,
    /// Parse the statements of recovered bodies instead of skipping them.
    pub statement_recovery: bool,
    /// Give up after this many recovery restarts.
    pub max_recovery_restarts: Option<u32>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            source_level: SourceLevel::default(),
            diet: false,
            statement_recovery: true,
            max_recovery_restarts: None,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn with_source_level(mut self, level: SourceLevel) -> Self {
        self.source_level = level;
        self
    }

    #[must_use]
    pub fn with_diet(mut self, diet: bool) -> Self {
        self.diet = diet;
        self
    }

    #[must_use]
    pub fn with_statement_recovery(mut self, enabled: bool) -> Self {
        self.statement_recovery = enabled;
        self
    }

    #[must_use]
    pub fn with_max_recovery_restarts(mut self, max: Option<u32>) -> Self {
        self.max_recovery_restarts = max;
        self
    }
}
