//! Game configuration.
//!
//! A front end fixes, before a game starts, which side the human plays, how
//! the computer picks its moves and the seed that drives every random
//! decision. Configs load from and save to JSON.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::Side;

/// How the computer chooses its moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Nim-sum forced move when one exists, random legal move otherwise.
    #[default]
    Optimal,
    /// Always a uniformly random legal move.
    Random,
}

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side played by the human. Green moves first, so `Green` means the
    /// human opens the game.
    pub human_side: Side,

    /// Computer move policy.
    pub strategy: Strategy,

    /// Seed for the game RNG (random setup and random moves).
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_side: Side::Green,
            strategy: Strategy::Optimal,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the human's side.
    #[must_use]
    pub fn with_human_side(mut self, side: Side) -> Self {
        self.human_side = side;
        self
    }

    /// Set the computer strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Side played by the computer.
    #[must_use]
    pub fn computer_side(&self) -> Side {
        self.human_side.opponent()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.human_side, Side::Green);
        assert_eq!(config.computer_side(), Side::Red);
        assert_eq!(config.strategy, Strategy::Optimal);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_human_side(Side::Red)
            .with_strategy(Strategy::Random)
            .with_seed(123);

        assert_eq!(config.human_side, Side::Red);
        assert_eq!(config.computer_side(), Side::Green);
        assert_eq!(config.strategy, Strategy::Random);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default().with_seed(9);
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "human_side": "red" }"#).unwrap();
        assert_eq!(config.human_side, Side::Red);
        assert_eq!(config.strategy, Strategy::Optimal);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_invalid_json() {
        let err = GameConfig::from_json(r#"{ "strategy": "clever" }"#).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
