use serde::{Deserialize, Serialize};

/// XP granted per counted message, inclusive bounds.
pub const XP_GAIN_MIN: i64 = 5;
pub const XP_GAIN_MAX: i64 = 14;

/// XP required to leave a level is `level * LEVEL_XP_STEP`.
pub const LEVEL_XP_STEP: i64 = 100;

/// Diamantes granted by a successful daily claim.
pub const DAILY_REWARD: i64 = 200;

/// Minimum gap between two daily claims, in milliseconds.
pub const DAILY_COOLDOWN_MS: i64 = 86_400_000;

/// Leveling/economy profile for one Discord user.
///
/// Invariant: `xp < level * LEVEL_XP_STEP` after every mutation. A level-up
/// resets `xp` to 0 instead of carrying the overflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: u64,
    pub diamantes: i64,
    pub level: i64,
    pub xp: i64,
    /// Unix-millisecond timestamp of the last successful daily claim.
    pub last_daily: Option<i64>,
}

impl UserProfile {
    /// Profile with schema defaults, as stored on first insert.
    pub fn with_defaults(user_id: u64) -> Self {
        Self {
            user_id,
            diamantes: 0,
            level: 1,
            xp: 0,
            last_daily: None,
        }
    }

    /// XP required to reach the next level from the current one.
    pub fn xp_to_next_level(&self) -> i64 {
        self.level * LEVEL_XP_STEP
    }

    /// Add `gain` XP and apply at most one level-up.
    ///
    /// Returns `true` when the gain crossed the level threshold. A single
    /// grant never advances more than one level; the overflow is consumed by
    /// resetting `xp` to 0.
    pub fn grant_xp(&mut self, gain: i64) -> bool {
        self.xp += gain;
        if self.xp >= self.xp_to_next_level() {
            self.level += 1;
            self.xp = 0;
            return true;
        }
        false
    }

    /// Apply a daily claim at `now_ms` if the 24-hour gate allows it.
    ///
    /// Returns `false` without mutating anything when the previous claim is
    /// still within [`DAILY_COOLDOWN_MS`].
    pub fn try_claim_daily(&mut self, now_ms: i64) -> bool {
        if let Some(last) = self.last_daily {
            if now_ms - last < DAILY_COOLDOWN_MS {
                return false;
            }
        }

        self.diamantes += DAILY_REWARD;
        self.last_daily = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{DAILY_COOLDOWN_MS, DAILY_REWARD, LEVEL_XP_STEP, UserProfile};

    #[test]
    fn defaults_match_schema() {
        let profile = UserProfile::with_defaults(42);
        assert_eq!(profile.user_id, 42);
        assert_eq!(profile.diamantes, 0);
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 0);
        assert_eq!(profile.last_daily, None);
    }

    #[test]
    fn xp_below_threshold_accumulates() {
        let mut profile = UserProfile::with_defaults(1);
        assert!(!profile.grant_xp(14));
        assert!(!profile.grant_xp(5));
        assert_eq!(profile.level, 1);
        assert_eq!(profile.xp, 19);
    }

    #[test]
    fn reaching_threshold_levels_up_and_resets_xp() {
        let mut profile = UserProfile::with_defaults(1);
        profile.xp = 95;
        assert!(profile.grant_xp(5));
        assert_eq!(profile.level, 2);
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn threshold_scales_with_level() {
        let mut profile = UserProfile::with_defaults(1);
        profile.level = 3;
        profile.xp = 295;
        assert!(!profile.grant_xp(4));
        assert_eq!(profile.level, 3);
        assert!(profile.grant_xp(1));
        assert_eq!(profile.level, 4);
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn oversized_gain_advances_a_single_level() {
        let mut profile = UserProfile::with_defaults(1);
        assert!(profile.grant_xp(LEVEL_XP_STEP * 5));
        assert_eq!(profile.level, 2);
        assert_eq!(profile.xp, 0);
    }

    #[test]
    fn xp_invariant_holds_after_mutations() {
        let mut profile = UserProfile::with_defaults(1);
        for gain in [14, 99, 250, 5, 100] {
            profile.grant_xp(gain);
            assert!(profile.xp < profile.xp_to_next_level());
        }
    }

    #[test]
    fn first_daily_claim_succeeds() {
        let mut profile = UserProfile::with_defaults(1);
        assert!(profile.try_claim_daily(1_000));
        assert_eq!(profile.diamantes, DAILY_REWARD);
        assert_eq!(profile.last_daily, Some(1_000));
    }

    #[test]
    fn second_claim_within_window_mutates_nothing() {
        let mut profile = UserProfile::with_defaults(1);
        assert!(profile.try_claim_daily(1_000));
        assert!(!profile.try_claim_daily(1_000 + DAILY_COOLDOWN_MS - 1));
        assert_eq!(profile.diamantes, DAILY_REWARD);
        assert_eq!(profile.last_daily, Some(1_000));
    }

    #[test]
    fn claim_after_window_elapsed_succeeds() {
        let mut profile = UserProfile::with_defaults(1);
        assert!(profile.try_claim_daily(1_000));
        let later = 1_000 + DAILY_COOLDOWN_MS;
        assert!(profile.try_claim_daily(later));
        assert_eq!(profile.diamantes, DAILY_REWARD * 2);
        assert_eq!(profile.last_daily, Some(later));
    }
}
