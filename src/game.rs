// src/game.rs
use std::time::Instant;

use thiserror::Error;

use combat::{Battle, BattleError, BattleRng, Outcome};
use items::ItemId;
use progression::{
    Consumed, DerivedStats, Equipment, Inventory, PlayerStats, ProgressionError,
    ProgressionStore, Reward, Shop,
};

use crate::auth::{Authenticator, Role};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("登录凭证无效")]
    InvalidCredentials,
    #[error("当前没有进行中的战斗")]
    NoActiveBattle,
    #[error(transparent)]
    Battle(#[from] BattleError),
    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

/// 游戏门面：各屏幕访问进度与战斗状态的唯一入口。
///
/// 持有进度存储与（至多一个）进行中的战斗；所有写操作都走这里，
/// 排除层（界面）只读取返回值与战斗日志。
#[derive(Debug)]
pub struct Game {
    store: ProgressionStore,
    battle: Option<Battle>,
    role: Role,
}

impl Game {
    /// 通过登录门进入游戏
    pub fn sign_in(
        auth: &dyn Authenticator,
        username: &str,
        password: &str,
    ) -> Result<Self, GameError> {
        let role = auth
            .validate(username, password)
            .ok_or(GameError::InvalidCredentials)?;
        Ok(Self {
            store: ProgressionStore::new(),
            battle: None,
            role,
        })
    }

    /* ================== 读取 ================== */

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn stats(&self) -> &PlayerStats {
        self.store.stats()
    }

    pub fn derived_stats(&self) -> DerivedStats {
        self.store.derived_stats()
    }

    pub fn inventory(&self) -> &Inventory {
        self.store.inventory()
    }

    pub fn equipment(&self) -> &Equipment {
        self.store.equipment()
    }

    pub fn shop(&self) -> &Shop {
        self.store.shop()
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    /* ================== 进度操作 ================== */

    /// 屏幕获得焦点时调用：重算衍生属性并收紧当前生命值
    pub fn refresh(&mut self) -> DerivedStats {
        self.store.refresh()
    }

    pub fn equip(&mut self, id: ItemId) -> Result<(), GameError> {
        self.store.equip(id)?;
        Ok(())
    }

    pub fn unequip(&mut self, id: ItemId) -> Result<(), GameError> {
        self.store.unequip(id)?;
        Ok(())
    }

    pub fn use_consumable(&mut self, id: ItemId) -> Result<Consumed, GameError> {
        Ok(self.store.use_consumable(id)?)
    }

    pub fn purchase(&mut self, id: ItemId, quantity: u32) -> Result<(), GameError> {
        self.store.purchase(id, quantity)?;
        Ok(())
    }

    pub fn claim_daily_bonus(&mut self, now_ms: u64) -> Result<Reward, GameError> {
        Ok(self.store.claim_daily_bonus(now_ms)?)
    }

    /* ================== 战斗操作 ================== */

    /// 进入竞技场：开启一场新战斗（玩家生命回满）
    pub fn enter_battle(&mut self, rng: BattleRng) -> &Battle {
        let battle = Battle::start(&mut self.store, rng);
        self.battle.insert(battle)
    }

    /// 离开竞技场：丢弃战斗状态（进度已在结算时落入存储）
    pub fn leave_battle(&mut self) {
        self.battle = None;
    }

    pub fn attack(&mut self, now: Instant) -> Result<Outcome, GameError> {
        let battle = self.battle.as_mut().ok_or(GameError::NoActiveBattle)?;
        battle.attack(&mut self.store, now)?;
        Ok(battle.outcome())
    }

    pub fn battle_use_item(&mut self, id: ItemId, now: Instant) -> Result<Consumed, GameError> {
        let battle = self.battle.as_mut().ok_or(GameError::NoActiveBattle)?;
        Ok(battle.use_item(&mut self.store, id, now)?)
    }

    /// 推进延迟的敌方回合；返回是否结算了至少一次反击
    pub fn poll_battle(&mut self, now: Instant) -> bool {
        match self.battle.as_mut() {
            Some(battle) => battle.poll(&mut self.store, now),
            None => false,
        }
    }

    pub fn reset_battle(&mut self) -> Result<(), GameError> {
        let battle = self.battle.as_mut().ok_or(GameError::NoActiveBattle)?;
        battle.reset(&mut self.store);
        Ok(())
    }
}
