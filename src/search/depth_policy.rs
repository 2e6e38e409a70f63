//! Search configuration and per-move depth selection.

use crate::errors::{OthelloError, OthelloResult};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth of the shallow root-ordering search; 0 disables ordering.
    pub presearch_depth: u8,
    /// Fixed depth for opening and midgame positions.
    pub normal_depth: u8,
    /// Remaining placements at or below which the search runs to game end.
    pub wld_depth: u8,
    /// Remaining placements at or below which the endgame is searched for
    /// the exact margin rather than the outcome class.
    pub perfect_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            presearch_depth: 3,
            normal_depth: 5,
            wld_depth: 15,
            perfect_depth: 13,
        }
    }
}

impl SearchConfig {
    /// Set one field by its option name (case-insensitive). The config is
    /// left unchanged on error.
    pub fn set_option(&mut self, name: &str, value: &str) -> OthelloResult<()> {
        let slot = if name.eq_ignore_ascii_case("PresearchDepth") {
            &mut self.presearch_depth
        } else if name.eq_ignore_ascii_case("NormalDepth") {
            &mut self.normal_depth
        } else if name.eq_ignore_ascii_case("WldDepth") {
            &mut self.wld_depth
        } else if name.eq_ignore_ascii_case("PerfectDepth") {
            &mut self.perfect_depth
        } else {
            return Err(OthelloError::UnknownOption(name.to_owned()));
        };

        *slot = value
            .trim()
            .parse::<u8>()
            .map_err(|_| OthelloError::InvalidOptionValue {
                name: name.to_owned(),
                value: value.to_owned(),
            })?;
        Ok(())
    }

    /// Pick the policy for the position about to be searched.
    pub fn select_policy(&self, game_state: &GameState) -> DepthPolicy {
        let remaining = game_state.remaining_turns();
        if remaining <= self.perfect_depth {
            DepthPolicy::Perfect { depth: remaining }
        } else if remaining <= self.wld_depth {
            DepthPolicy::WinLossDraw { depth: remaining }
        } else {
            DepthPolicy::Normal {
                depth: self.normal_depth,
            }
        }
    }
}

/// How deep the root search goes and what the result means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthPolicy {
    /// Fixed-depth heuristic search.
    Normal { depth: u8 },
    /// Search to the end of the game for the win/loss/draw class.
    WinLossDraw { depth: u8 },
    /// Search to the end of the game for the exact disc margin.
    Perfect { depth: u8 },
}

impl DepthPolicy {
    #[inline]
    pub const fn depth(self) -> u8 {
        match self {
            DepthPolicy::Normal { depth }
            | DepthPolicy::WinLossDraw { depth }
            | DepthPolicy::Perfect { depth } => depth,
        }
    }

    #[inline]
    pub const fn is_endgame(self) -> bool {
        !matches!(self, DepthPolicy::Normal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::othello_types::{Color, Position};

    /// Fill the first `discs` squares in row-major order, alternating colors.
    fn state_with_discs(discs: usize) -> GameState {
        let placed: Vec<_> = Position::all()
            .take(discs)
            .enumerate()
            .map(|(i, p)| (p, if i % 2 == 0 { Color::Black } else { Color::White }))
            .collect();
        GameState::from_discs(&placed, Color::Black).expect("valid setup")
    }

    #[test]
    fn defaults_match_the_documented_configuration() {
        let config = SearchConfig::default();
        assert_eq!(
            config,
            SearchConfig {
                presearch_depth: 3,
                normal_depth: 5,
                wld_depth: 15,
                perfect_depth: 13,
            }
        );
    }

    #[test]
    fn opening_uses_normal_depth() {
        let config = SearchConfig::default();
        let policy = config.select_policy(&GameState::new_game());
        assert_eq!(policy, DepthPolicy::Normal { depth: 5 });
        assert!(!policy.is_endgame());
    }

    #[test]
    fn endgame_thresholds_switch_policy() {
        let config = SearchConfig::default();

        // remaining 16
        assert_eq!(
            config.select_policy(&state_with_discs(64 - 16)),
            DepthPolicy::Normal { depth: 5 }
        );
        // remaining 15 and 14 -> win/loss/draw
        assert_eq!(
            config.select_policy(&state_with_discs(64 - 15)),
            DepthPolicy::WinLossDraw { depth: 15 }
        );
        assert_eq!(
            config.select_policy(&state_with_discs(64 - 14)),
            DepthPolicy::WinLossDraw { depth: 14 }
        );
        // remaining 13 -> perfect
        assert_eq!(
            config.select_policy(&state_with_discs(64 - 13)),
            DepthPolicy::Perfect { depth: 13 }
        );
    }

    #[test]
    fn set_option_updates_named_field() {
        let mut config = SearchConfig::default();
        config.set_option("normaldepth", " 7 ").expect("valid option");
        config.set_option("PresearchDepth", "0").expect("valid option");
        assert_eq!(config.normal_depth, 7);
        assert_eq!(config.presearch_depth, 0);
    }

    #[test]
    fn set_option_rejects_bad_input_without_change() {
        let mut config = SearchConfig::default();
        assert_eq!(
            config.set_option("Hash", "64"),
            Err(OthelloError::UnknownOption("Hash".to_owned()))
        );
        assert!(matches!(
            config.set_option("WldDepth", "-1"),
            Err(OthelloError::InvalidOptionValue { .. })
        ));
        assert_eq!(config, SearchConfig::default());
    }
}
