// src/progression/src/store.rs
use serde::{Deserialize, Serialize};

use items::{Item, ItemId};

use crate::{
    DerivedStats, Equipment, Inventory, PlayerStats, ProgressionError, Shop, DAILY_COOLDOWN_MS,
};

/// 战斗胜利奖励
const VICTORY_XP: u32 = 100;
const VICTORY_CURRENCY: u32 = 50;
/// 每日奖励
const DAILY_XP: u32 = 50;
const DAILY_CURRENCY: u32 = 200;

/// 装备实例编号的起始值（目录编号之后留足余量）
const FIRST_INSTANCE_ID: u32 = 1000;

/// 一次奖励发放的结果（供界面提示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub xp: u32,
    pub currency: u32,
    /// 本次发放触发升级后的新等级（未升级为 None）
    pub new_level: Option<u32>,
}

/// 一次消耗品使用的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumed {
    pub item: Item,
    /// 实际恢复的生命值（钳制到派生上限后；纯法力药水为0）
    pub restored: u32,
    /// 该堆叠的剩余存量
    pub remaining: u32,
}

/// 进度存储：玩家属性、背包、装备、商店的唯一权威来源
///
/// 所有变更操作都在单一逻辑线程上同步完成；任何派生属性读取
/// 都反映最新的装备状态。失败的操作保证不留下部分变更。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionStore {
    stats: PlayerStats,
    inventory: Inventory,
    equipment: Equipment,
    shop: Shop,
    /// 上次领取每日奖励的时刻（Unix 毫秒），从未领取为 None
    last_daily_claim: Option<u64>,
    next_instance_id: u32,
}

impl Default for ProgressionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionStore {
    /// 进程启动时创建一次：固定初始属性，背包为空，商店满架
    pub fn new() -> Self {
        Self {
            stats: PlayerStats::default(),
            inventory: Inventory::new(),
            equipment: Equipment::new(),
            shop: Shop::new(),
            last_daily_claim: None,
            next_instance_id: FIRST_INSTANCE_ID,
        }
    }

    /* ================== 读取接口 ================== */

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// 派生属性：基础属性 + 三个装备槽加成，无副作用
    pub fn derived_stats(&self) -> DerivedStats {
        let bonus = self.equipment.bonus_total();
        DerivedStats {
            attack: self.stats.attack + bonus.attack,
            defense: self.stats.defense + bonus.defense,
            max_health: self.stats.max_health + bonus.health,
        }
    }

    /// 屏幕获得焦点时的显式刷新：重新钳制当前生命并返回最新派生属性
    pub fn refresh(&mut self) -> DerivedStats {
        self.clamp_health();
        self.derived_stats()
    }

    /* ================== 装备系统 ================== */

    /// 装备背包中的物品；目标槽位已占用时旧装备放回背包
    ///
    /// 返回被替换下来的旧装备。装备变更后当前生命只向下钳制到
    /// 新的派生上限，绝不自动回升。
    pub fn equip(&mut self, id: ItemId) -> Result<Option<Item>, ProgressionError> {
        let entry = self
            .inventory
            .find(id)
            .ok_or(ProgressionError::ItemNotFound)?;
        if !entry.item().is_equippable() {
            return Err(ProgressionError::InvalidSlot);
        }

        let item = self.inventory.take_gear(id)?;
        let old = self.equipment.equip(item)?;
        if let Some(ref replaced) = old {
            self.inventory.push_gear(replaced.clone());
        }
        self.clamp_health();
        Ok(old)
    }

    /// 卸下装备，放回背包末尾
    pub fn unequip(&mut self, id: ItemId) -> Result<(), ProgressionError> {
        let item = self.equipment.unequip(id)?;
        self.inventory.push_gear(item);
        self.clamp_health();
        Ok(())
    }

    /* ================== 消耗品 ================== */

    /// 使用一件消耗品
    ///
    /// 带生命加成的消耗品恢复当前生命，钳制到派生上限；
    /// 纯法力药水是已接受的空操作分支。存量减一，归零移除。
    pub fn use_consumable(&mut self, id: ItemId) -> Result<Consumed, ProgressionError> {
        match self.inventory.find(id) {
            Some(entry) if !entry.item().is_consumable() => {
                return Err(ProgressionError::NotConsumable);
            }
            Some(_) => {}
            None => return Err(ProgressionError::OutOfStock),
        }

        let (item, remaining) = self.inventory.take_one(id)?;
        let restored = if item.bonus.health > 0 {
            let max = self.derived_stats().max_health;
            let restored = item
                .bonus
                .health
                .min(max.saturating_sub(self.stats.current_health));
            self.stats.current_health += restored;
            restored
        } else {
            // 法力恢复等效果没有对应机制，吞掉即可
            0
        };

        Ok(Consumed {
            item,
            restored,
            remaining,
        })
    }

    /* ================== 商店 ================== */

    /// 购买商品
    ///
    /// 先验库存再验余额，失败时货币、背包、货架全部保持不变。
    /// 消耗品按目录 id 并入已有堆叠；装备总是追加独立实例，
    /// 由存储分配新的实例编号保持背包按 id 去重。
    pub fn purchase(&mut self, id: ItemId, quantity: u32) -> Result<(), ProgressionError> {
        let entry = self.shop.find(id).ok_or(ProgressionError::OutOfStock)?;
        if entry.stock < quantity {
            return Err(ProgressionError::OutOfStock);
        }
        let cost = entry.item.price * quantity;
        if self.stats.currency < cost {
            return Err(ProgressionError::InsufficientFunds);
        }

        let item = self.shop.take_stock(id, quantity)?;
        self.stats.currency -= cost;

        if item.is_consumable() {
            self.inventory.merge_stack(item, quantity);
        } else {
            for _ in 0..quantity {
                let mut instance = item.clone();
                instance.id = self.alloc_instance_id();
                self.inventory.push_gear(instance);
            }
        }
        Ok(())
    }

    /* ================== 奖励发放 ================== */

    /// 战斗胜利奖励：+100经验 +50金币，至多触发一次升级
    pub fn grant_battle_victory(&mut self) -> Reward {
        self.grant(VICTORY_XP, VICTORY_CURRENCY)
    }

    /// 领取每日奖励（24小时冷却）
    ///
    /// 冷却未到是常见情况而非异常：错误携带剩余毫秒数供界面倒计时。
    pub fn claim_daily_bonus(&mut self, now_ms: u64) -> Result<Reward, ProgressionError> {
        if let Some(last) = self.last_daily_claim {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed < DAILY_COOLDOWN_MS {
                return Err(ProgressionError::CooldownActive {
                    remaining_ms: DAILY_COOLDOWN_MS - elapsed,
                });
            }
        }
        self.last_daily_claim = Some(now_ms);
        Ok(self.grant(DAILY_XP, DAILY_CURRENCY))
    }

    fn grant(&mut self, xp: u32, currency: u32) -> Reward {
        self.stats.currency += currency;
        let new_level = self.stats.gain_xp(xp);
        Reward {
            xp,
            currency,
            new_level,
        }
    }

    /* ================== 战斗侧生命操作 ================== */

    /// 把当前生命补满到派生上限（进入战斗/重置战斗时）
    pub fn heal_to_full(&mut self) {
        self.stats.current_health = self.derived_stats().max_health;
    }

    /// 承受伤害（战斗反击结算）
    pub fn take_damage(&mut self, amount: u32) {
        self.stats.current_health = self.stats.current_health.saturating_sub(amount);
    }

    /* ================== 内部 ================== */

    /// 装备变更后当前生命只向下钳制，见 DESIGN.md 的开放问题决策
    fn clamp_health(&mut self) {
        let max = self.derived_stats().max_health;
        if self.stats.current_health > max {
            self.stats.current_health = max;
        }
    }

    fn alloc_instance_id(&mut self) -> ItemId {
        let id = ItemId(self.next_instance_id);
        self.next_instance_id += 1;
        id
    }
}
