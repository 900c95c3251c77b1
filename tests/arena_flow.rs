// tests/arena_flow.rs
// End-to-end arena flows through the Game facade.

use std::time::Instant;

use pretty_assertions::assert_eq;

use combat::{constants::COUNTER_DELAY, BattleRng, Outcome};
use hunter_arena::{Game, GameError, Role, StaticAuthenticator};
use items::catalog;

fn signed_in_game() -> Game {
    let auth = StaticAuthenticator::default();
    let game = Game::sign_in(&auth, "guest", "guest").unwrap();
    assert_eq!(game.role(), Role::Player);
    game
}

/// Geared-up player with pinned max rolls clears the enemy and banks the
/// reward in the store, not in the battle.
#[test]
fn test_victory_flow_banks_reward() {
    let mut game = signed_in_game();
    let now = Instant::now();

    game.purchase(catalog::steel_sword().id, 1).unwrap();
    let sword = game.inventory().entries()[0].item().id;
    game.equip(sword).unwrap();
    assert_eq!(game.derived_stats().attack, 35);

    game.enter_battle(BattleRng::pinned(9));
    // 35 + 9 = 44 per hit, 4 hits clear 150 HP
    for _ in 0..3 {
        assert_eq!(game.attack(now).unwrap(), Outcome::InProgress);
        assert!(game.poll_battle(now + COUNTER_DELAY));
    }
    assert_eq!(game.attack(now).unwrap(), Outcome::Won);

    // stats survive leaving the arena
    game.leave_battle();
    assert_eq!(game.stats().level, 2);
    assert_eq!(game.stats().xp, 0);
    assert_eq!(game.stats().currency, 1000 - 500 + 50);
}

/// Without polling, the enemy never acts; the player cannot lose between
/// their own actions.
#[test]
fn test_loss_requires_the_deferred_enemy_turn() {
    let mut game = signed_in_game();
    let now = Instant::now();
    game.enter_battle(BattleRng::pinned(0));

    // counter damage pinned at 20: 5 enemy turns end a 100 HP player
    for turn in 0..5 {
        game.attack(now).unwrap();
        assert_eq!(
            game.battle().unwrap().outcome(),
            Outcome::InProgress,
            "no loss before enemy turn {turn}"
        );
        assert!(game.poll_battle(now + COUNTER_DELAY));
    }
    assert_eq!(game.battle().unwrap().outcome(), Outcome::Lost);
    assert_eq!(game.stats().current_health, 0);
    assert_eq!(game.attack(now), Err(GameError::Battle(combat::BattleError::BattleOver)));
}

/// Reset invalidates the enemy turn scheduled in the previous session.
#[test]
fn test_reset_invalidates_scheduled_counter() {
    let mut game = signed_in_game();
    let now = Instant::now();
    game.enter_battle(BattleRng::pinned(0));

    game.attack(now).unwrap();
    game.reset_battle().unwrap();

    assert!(!game.poll_battle(now + COUNTER_DELAY));
    let battle = game.battle().unwrap();
    assert_eq!(battle.outcome(), Outcome::InProgress);
    assert_eq!(battle.enemy_hp(), battle.enemy_max_hp());
    assert_eq!(game.stats().current_health, 100);
}

/// Reset after a loss starts a clean round with the player refilled.
#[test]
fn test_reset_recovers_from_defeat() {
    let mut game = signed_in_game();
    let now = Instant::now();
    game.enter_battle(BattleRng::pinned(0));

    for _ in 0..5 {
        game.attack(now).unwrap();
        game.poll_battle(now + COUNTER_DELAY);
    }
    assert_eq!(game.battle().unwrap().outcome(), Outcome::Lost);

    game.reset_battle().unwrap();
    assert_eq!(game.battle().unwrap().outcome(), Outcome::InProgress);
    assert_eq!(game.stats().current_health, 100);
    assert!(game.battle().unwrap().log().is_empty());
}

/// A seeded battle always reaches a terminal state under alternating
/// attack/poll, and the terminal bookkeeping is consistent.
#[test]
fn test_seeded_battle_reaches_consistent_terminal_state() {
    let mut game = signed_in_game();
    let now = Instant::now();
    let currency_before = game.stats().currency;
    game.enter_battle(BattleRng::new(0xA11CE));

    let mut turns = 0;
    while game.battle().unwrap().outcome() == Outcome::InProgress {
        game.attack(now).unwrap();
        game.poll_battle(now + COUNTER_DELAY);
        turns += 1;
        assert!(turns <= 30, "battle must terminate");
    }

    let battle = game.battle().unwrap();
    match battle.outcome() {
        Outcome::Won => {
            assert_eq!(battle.enemy_hp(), 0);
            assert_eq!(game.stats().currency, currency_before + 50);
        }
        Outcome::Lost => {
            assert_eq!(game.stats().current_health, 0);
            assert_eq!(game.stats().currency, currency_before);
        }
        Outcome::InProgress => unreachable!(),
    }
}

/// Healing mid-battle consumes inventory stock and still yields the turn.
#[test]
fn test_potion_mid_battle() {
    let mut game = signed_in_game();
    let now = Instant::now();
    game.purchase(catalog::health_potion().id, 1).unwrap();
    game.enter_battle(BattleRng::pinned(0));

    game.attack(now).unwrap();
    game.poll_battle(now + COUNTER_DELAY);
    assert_eq!(game.stats().current_health, 80);

    let used = game
        .battle_use_item(catalog::health_potion().id, now)
        .unwrap();
    assert_eq!(used.restored, 20);
    assert_eq!(used.remaining, 0);
    assert!(game.battle().unwrap().has_pending_counter());
    assert!(!game.inventory().contains(catalog::health_potion().id));
}
