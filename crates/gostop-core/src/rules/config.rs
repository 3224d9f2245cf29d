use crate::game::error::GameError;
use serde::{Deserialize, Serialize};

/// Scoring bonus tables. The classic values are defaults, never
/// hardcoded at use sites; a host may swap in a house variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTable {
    /// Three brights, none of them the rain bright.
    pub bright_three: u32,
    /// Three brights including the rain bright.
    pub bright_three_with_rain: u32,
    pub bright_four: u32,
    pub bright_five: u32,
    /// All three bird animals (February, April, August).
    pub godori: u32,
    /// Each complete ribbon set (poem, blue, plain).
    pub ribbon_set: u32,
    /// Animal count from which each animal is worth a point.
    pub animal_count_threshold: u32,
    /// Ribbon count from which each ribbon is worth a point.
    pub ribbon_count_threshold: u32,
    /// Effective junk count (doubles count two) from which each is worth a point.
    pub junk_count_threshold: u32,
    /// Added once per sweep before the go multiplier applies.
    pub sweep_bonus: u32,
    /// Count the September sake cup as two junk instead of an animal.
    pub sake_cup_as_junk: bool,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            bright_three: 3,
            bright_three_with_rain: 2,
            bright_four: 4,
            bright_five: 15,
            godori: 5,
            ribbon_set: 3,
            animal_count_threshold: 5,
            ribbon_count_threshold: 5,
            junk_count_threshold: 10,
            sweep_bonus: 1,
            sake_cup_as_junk: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Captured-card score at which the round offers go or stop.
    pub stop_threshold: u32,
    pub hand_size: usize,
    pub floor_size: usize,
    /// A sweep ends the round outright in the sweeper's favor.
    pub bomb_ends_round_immediately: bool,
    /// Indexed by go count, clamped to the last entry.
    pub go_multiplier_table: Vec<u32>,
    pub rounds_per_game: u32,
    pub scoring: ScoringTable,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            stop_threshold: 7,
            hand_size: 10,
            floor_size: 6,
            bomb_ends_round_immediately: false,
            go_multiplier_table: vec![1, 1, 2, 4, 8],
            rounds_per_game: 1,
            scoring: ScoringTable::default(),
        }
    }
}

impl RuleConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.stop_threshold == 0 {
            return Err(GameError::InvalidRuleConfig(
                "stop threshold must be at least 1".into(),
            ));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidRuleConfig(
                "hand size must be at least 1".into(),
            ));
        }
        let dealt = 2 * self.hand_size + self.floor_size;
        if dealt > 48 {
            return Err(GameError::InvalidRuleConfig(format!(
                "deal of {dealt} cards does not fit the 48-card deck"
            )));
        }
        if self.go_multiplier_table.is_empty() {
            return Err(GameError::InvalidRuleConfig(
                "go multiplier table must not be empty".into(),
            ));
        }
        if self.go_multiplier_table.contains(&0) {
            return Err(GameError::InvalidRuleConfig(
                "go multiplier table must not contain zero".into(),
            ));
        }
        if self.rounds_per_game == 0 {
            return Err(GameError::InvalidRuleConfig(
                "a game needs at least one round".into(),
            ));
        }
        Ok(())
    }

    /// Multiplier for a given number of declared gos.
    pub fn go_multiplier(&self, go_count: u32) -> u32 {
        let index = (go_count as usize).min(self.go_multiplier_table.len() - 1);
        self.go_multiplier_table[index]
    }
}

#[cfg(test)]
mod tests {
    use super::RuleConfig;
    use crate::game::error::GameError;

    #[test]
    fn default_config_validates() {
        assert_eq!(RuleConfig::default().validate(), Ok(()));
    }

    #[test]
    fn oversized_deal_is_rejected() {
        let config = RuleConfig {
            hand_size: 21,
            floor_size: 8,
            ..RuleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidRuleConfig(_))
        ));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let config = RuleConfig {
            hand_size: 0,
            ..RuleConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RuleConfig {
            stop_threshold: 0,
            ..RuleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn degenerate_go_table_is_rejected() {
        let config = RuleConfig {
            go_multiplier_table: vec![],
            ..RuleConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RuleConfig {
            go_multiplier_table: vec![1, 0],
            ..RuleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn go_multiplier_clamps_to_the_last_entry() {
        let config = RuleConfig::default();
        assert_eq!(config.go_multiplier(0), 1);
        assert_eq!(config.go_multiplier(1), 1);
        assert_eq!(config.go_multiplier(2), 2);
        assert_eq!(config.go_multiplier(4), 8);
        assert_eq!(config.go_multiplier(40), 8);
    }
}
