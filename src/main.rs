// src/main.rs
use std::{
    process, thread,
    time::{Instant, SystemTime},
};

use anyhow::{Context, Result};

use combat::{constants::COUNTER_DELAY, BattleRng, Outcome};
use hunter_arena::{Game, StaticAuthenticator};
use items::catalog;

fn main() -> Result<()> {
    let seed = {
        let time = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)?
            .as_nanos();
        let pid = process::id();
        (time ^ (pid as u128)) as u64
    };

    let auth = StaticAuthenticator::default();
    let mut game =
        Game::sign_in(&auth, "guest", "guest").context("Failed to sign in")?;
    println!("Signed in as {:?} (battle seed: {seed})", game.role());

    let now_ms = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)?
        .as_millis() as u64;
    match game.claim_daily_bonus(now_ms) {
        Ok(reward) => println!("Daily bonus: +{} XP, +{} gold", reward.xp, reward.currency),
        Err(e) => println!("Daily bonus unavailable: {e}"),
    }

    // 开场采购：一把剑、一瓶药水，然后装上剑
    game.purchase(catalog::steel_sword().id, 1)
        .context("Failed to buy a weapon")?;
    game.purchase(catalog::health_potion().id, 2)
        .context("Failed to buy potions")?;
    let sword_id = game
        .inventory()
        .entries()
        .iter()
        .map(|entry| entry.item())
        .find(|item| item.name == catalog::steel_sword().name)
        .map(|item| item.id)
        .context("Weapon missing from inventory")?;
    game.equip(sword_id).context("Failed to equip the weapon")?;

    let derived = game.refresh();
    println!(
        "Ready: ATK {} / DEF {} / HP {}, {} gold left",
        derived.attack,
        derived.defense,
        derived.max_health,
        game.stats().currency
    );

    game.enter_battle(BattleRng::new(seed));
    println!("A {} appears!", game.battle().map(|b| b.enemy_name()).unwrap_or("foe"));

    while matches!(game.battle().map(|b| b.outcome()), Some(Outcome::InProgress)) {
        game.attack(Instant::now())?;
        if matches!(game.battle().map(|b| b.outcome()), Some(Outcome::InProgress)) {
            thread::sleep(COUNTER_DELAY);
            game.poll_battle(Instant::now());
        }
        // 生命告急就喝药
        if matches!(game.battle().map(|b| b.outcome()), Some(Outcome::InProgress))
            && game.stats().current_health < 40
            && game
                .battle_use_item(catalog::health_potion().id, Instant::now())
                .is_ok()
        {
            thread::sleep(COUNTER_DELAY);
            game.poll_battle(Instant::now());
        }
    }

    if let Some(battle) = game.battle() {
        println!("--- battle log (newest first) ---");
        for line in battle.log() {
            println!("{line}");
        }
        println!("Result: {:?}", battle.outcome());
    }
    game.leave_battle();

    let stats = game.stats();
    println!(
        "Level {} | {} XP | {} gold | {}/{} HP",
        stats.level,
        stats.xp,
        stats.currency,
        stats.current_health,
        game.derived_stats().max_health
    );

    Ok(())
}
