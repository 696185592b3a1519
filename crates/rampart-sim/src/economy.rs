//! Economy and progression counters owned by the engine.
//!
//! Lives beside the ECS world, not inside it: one owned struct the
//! engine passes explicitly to the systems that need it.

use serde::{Deserialize, Serialize};

use rampart_core::constants::{
    KILL_REWARD, LEAK_DAMAGE, LEVEL_CLEAR_BONUS, STARTING_CURRENCY, STARTING_HEALTH,
};

/// Currency, player health, and the wave counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyState {
    /// Spendable balance. Only deducted behind an affordability check,
    /// so it never goes negative.
    pub currency: u32,
    /// Player health. Game over at zero or below.
    pub health: i32,
    /// Next wave to spawn, 1-based within the current level.
    pub wave_number: u32,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            currency: STARTING_CURRENCY,
            health: STARTING_HEALTH,
            wave_number: 1,
        }
    }
}

impl EconomyState {
    pub fn can_afford(&self, cost: u32) -> bool {
        self.currency >= cost
    }

    /// Deduct `cost` if affordable. Returns false and leaves the balance
    /// untouched otherwise.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        if self.currency >= cost {
            self.currency -= cost;
            true
        } else {
            false
        }
    }

    /// Credit the kill reward.
    pub fn award_kill(&mut self) {
        self.currency += KILL_REWARD;
    }

    /// An enemy reached the path end.
    pub fn apply_leak(&mut self) {
        self.health -= LEAK_DAMAGE;
    }

    /// All waves of the level cleared: reset the wave counter and credit
    /// the completion bonus.
    pub fn complete_level(&mut self) {
        self.wave_number = 1;
        self.currency += LEVEL_CLEAR_BONUS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_standard_resources() {
        let economy = EconomyState::default();
        assert_eq!(economy.currency, 100);
        assert_eq!(economy.health, 10);
        assert_eq!(economy.wave_number, 1);
    }

    #[test]
    fn try_spend_rejects_unaffordable() {
        let mut economy = EconomyState::default();
        assert!(economy.try_spend(100));
        assert_eq!(economy.currency, 0);
        assert!(!economy.try_spend(1));
        assert_eq!(economy.currency, 0);
    }

    #[test]
    fn kill_and_leak_transitions() {
        let mut economy = EconomyState::default();
        economy.award_kill();
        assert_eq!(economy.currency, 110);
        economy.apply_leak();
        assert_eq!(economy.health, 9);
    }

    #[test]
    fn level_completion_resets_wave_and_pays_bonus() {
        let mut economy = EconomyState::default();
        economy.wave_number = 6;
        economy.complete_level();
        assert_eq!(economy.wave_number, 1);
        assert_eq!(economy.currency, 200);
    }
}
