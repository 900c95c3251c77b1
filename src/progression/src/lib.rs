// src/progression/src/lib.rs

// 核心模块
mod equipment;
mod inventory;
mod shop;
mod stats;
mod store;

use thiserror::Error;

// 重新导出主要类型
pub use self::{
    equipment::{Equipment, Slot},
    inventory::{Inventory, InventoryEntry},
    shop::{Shop, ShopEntry},
    stats::{DerivedStats, PlayerStats},
    store::{Consumed, ProgressionStore, Reward},
};

/// 每日奖励冷却时长（24小时，毫秒）
pub const DAILY_COOLDOWN_MS: u64 = 24 * 60 * 60 * 1000;

/// 进度系统错误类型
///
/// 全部是可恢复的用户可见错误：调用方提示后保持原状态不变，等待下一次操作。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("该物品无法装备到任何槽位")]
    InvalidSlot,
    #[error("该物品没有装备在对应槽位")]
    NotEquipped,
    #[error("该物品不是消耗品")]
    NotConsumable,
    #[error("库存不足")]
    OutOfStock,
    #[error("金币不足")]
    InsufficientFunds,
    #[error("每日奖励冷却中（剩余 {remaining_ms} 毫秒）")]
    CooldownActive {
        /// 距离下次可领取的剩余时间，供界面倒计时显示
        remaining_ms: u64,
    },
    #[error("背包中没有该物品")]
    ItemNotFound,
}
