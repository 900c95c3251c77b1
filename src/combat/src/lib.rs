// src/combat/src/lib.rs

pub mod battle;
pub mod rng;

pub use crate::battle::{Battle, BattleError, Outcome};
pub use crate::rng::BattleRng;

/// Combat configuration constants (matching the arena tuning)
pub mod constants {
    use std::time::Duration;

    pub const ENEMY_NAME: &str = "Goblin Warrior";
    pub const ENEMY_MAX_HP: u32 = 150; // Enemy starting health
    pub const ENEMY_ATTACK: u32 = 20; // Enemy base attack
    pub const PLAYER_ROLL_BOUND: u32 = 10; // Player damage roll in [0,10)
    pub const ENEMY_ROLL_BOUND: u32 = 5; // Enemy damage roll in [0,5)
    pub const COUNTER_DELAY: Duration = Duration::from_secs(1); // Enemy turn delay
}
