// src/combat/src/battle.rs
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use items::ItemId;
use progression::{Consumed, ProgressionError, ProgressionStore};

use crate::constants::{
    COUNTER_DELAY, ENEMY_ATTACK, ENEMY_MAX_HP, ENEMY_NAME, ENEMY_ROLL_BOUND, PLAYER_ROLL_BOUND,
};
use crate::BattleRng;

/// Battle state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    /// Player actions are only valid while the battle is in progress
    #[error("the battle has already ended")]
    BattleOver,
    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

/// An enemy turn scheduled to fire after the counter-attack delay.
///
/// Each counter is keyed to the session that scheduled it, and `poll`
/// drops it as stale if the session has moved on or the battle has
/// already concluded.
#[derive(Debug, Clone, Copy)]
struct PendingCounter {
    session: u64,
    due_at: Instant,
}

/// One battle against the arena enemy.
///
/// Player health lives in the [`ProgressionStore`] (it is the store's
/// `current_health`); the battle owns the enemy, the log, and the pending
/// enemy turn. All mutation happens synchronously on the caller's thread;
/// the only deferred step is the enemy counter-attack, driven by `poll`.
#[derive(Debug, Clone)]
pub struct Battle {
    session: u64,
    outcome: Outcome,
    enemy_hp: u32,
    enemy_max_hp: u32,
    enemy_attack: u32,
    pending: Vec<PendingCounter>,
    log: Vec<String>,
    rng: BattleRng,
}

impl Battle {
    /// Enter the arena: player health refills to the derived maximum,
    /// enemy starts at its fixed stats.
    pub fn start(store: &mut ProgressionStore, rng: BattleRng) -> Self {
        store.heal_to_full();
        Self {
            session: 1,
            outcome: Outcome::InProgress,
            enemy_hp: ENEMY_MAX_HP,
            enemy_max_hp: ENEMY_MAX_HP,
            enemy_attack: ENEMY_ATTACK,
            pending: Vec::new(),
            log: Vec::new(),
            rng,
        }
    }

    /// Player attack: derived attack plus a roll in [0,10).
    ///
    /// On a kill the victory reward is applied immediately; otherwise an
    /// enemy turn is scheduled. Every player action earns the enemy a
    /// turn, so acting faster than the delay queues counters rather than
    /// replacing them.
    pub fn attack(&mut self, store: &mut ProgressionStore, now: Instant) -> Result<(), BattleError> {
        self.ensure_in_progress()?;

        let damage = store.derived_stats().attack + self.rng.roll(PLAYER_ROLL_BOUND);
        self.enemy_hp = self.enemy_hp.saturating_sub(damage);
        self.push_log(format!("You dealt {damage} damage to the enemy!"));

        if self.enemy_hp == 0 {
            self.outcome = Outcome::Won;
            let reward = store.grant_battle_victory();
            self.push_log(format!(
                "VICTORY! You defeated the {}! +{} XP, +{} gold",
                ENEMY_NAME, reward.xp, reward.currency
            ));
            if let Some(level) = reward.new_level {
                self.push_log(format!("Leveled up to Level {level}!"));
            }
        } else {
            self.schedule_counter(now);
        }
        Ok(())
    }

    /// Use a consumable from the inventory; the enemy still gets its turn.
    pub fn use_item(
        &mut self,
        store: &mut ProgressionStore,
        id: ItemId,
        now: Instant,
    ) -> Result<Consumed, BattleError> {
        self.ensure_in_progress()?;

        let used = store.use_consumable(id)?;
        if used.restored > 0 {
            self.push_log(format!(
                "Used {}! Restored {} HP.",
                used.item.name, used.restored
            ));
        } else {
            self.push_log(format!(
                "Used {}! No discernable effect in battle.",
                used.item.name
            ));
        }
        self.schedule_counter(now);
        Ok(used)
    }

    /// Drive the deferred enemy turns. Returns true if at least one
    /// counter-attack landed.
    ///
    /// A pending turn fires only once its delay has elapsed, and only if
    /// it belongs to the current session and the battle is still in
    /// progress; a timer surviving a reset or a finished battle is a
    /// no-op. Due turns resolve in the order they were scheduled.
    pub fn poll(&mut self, store: &mut ProgressionStore, now: Instant) -> bool {
        let mut landed = false;
        let mut index = 0;
        while index < self.pending.len() {
            if now < self.pending[index].due_at {
                index += 1;
                continue;
            }
            let counter = self.pending.remove(index);
            if counter.session != self.session || self.outcome != Outcome::InProgress {
                // stale timer from an earlier session or a concluded battle
                continue;
            }

            let damage = self.enemy_attack + self.rng.roll(ENEMY_ROLL_BOUND);
            store.take_damage(damage);
            self.push_log(format!("Enemy dealt {damage} damage to you!"));

            if store.stats().current_health == 0 {
                self.outcome = Outcome::Lost;
                self.push_log("DEFEAT! You were defeated...".to_string());
            }
            landed = true;
        }
        landed
    }

    /// Reset from any state: new session id (invalidating any timer still
    /// in flight), pending turns discarded, enemy back to full, log
    /// cleared, player refilled.
    pub fn reset(&mut self, store: &mut ProgressionStore) {
        self.session += 1;
        self.pending.clear();
        self.outcome = Outcome::InProgress;
        self.enemy_hp = self.enemy_max_hp;
        self.log.clear();
        store.heal_to_full();
    }

    /* ================== read access ================== */

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn enemy_name(&self) -> &'static str {
        ENEMY_NAME
    }

    pub fn enemy_hp(&self) -> u32 {
        self.enemy_hp
    }

    pub fn enemy_max_hp(&self) -> u32 {
        self.enemy_max_hp
    }

    /// Battle log, newest entry first (the order the arena screen renders)
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Whether any enemy turn is waiting on its delay
    pub fn has_pending_counter(&self) -> bool {
        !self.pending.is_empty()
    }

    /* ================== internal ================== */

    fn ensure_in_progress(&self) -> Result<(), BattleError> {
        match self.outcome {
            Outcome::InProgress => Ok(()),
            _ => Err(BattleError::BattleOver),
        }
    }

    fn schedule_counter(&mut self, now: Instant) {
        self.pending.push(PendingCounter {
            session: self.session,
            due_at: now + COUNTER_DELAY,
        });
    }

    fn push_log(&mut self, message: String) {
        self.log.insert(0, message);
    }
}
