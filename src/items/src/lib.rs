//src/items/src/lib.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;
use strum_macros::EnumIter;

pub mod catalog;

/// 物品标识（一局游戏内唯一）
///
/// 商店目录使用固定的小编号；装备在购买时由进度存储分配新的实例编号，
/// 保证背包内按 id 去重时两把同名武器不会互相覆盖。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 物品分类（与商店/背包界面完全一致）
#[derive(
    Debug, Display, Clone, Copy, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum ItemCategory {
    #[strum(serialize = "weapon")]
    Weapon, // 武器
    #[strum(serialize = "armor")]
    Armor, // 护甲
    #[strum(serialize = "accessory")]
    Accessory, // 饰品
    #[strum(serialize = "consumable")]
    Consumable, // 消耗品
}

impl ItemCategory {
    /// 是否可以装备到槽位（消耗品只能使用，不能装备）
    pub fn is_equippable(&self) -> bool {
        !matches!(self, ItemCategory::Consumable)
    }
}

/// 物品属性加成（缺省字段视为0）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonus {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub health: u32,
    /// 法力恢复目前没有任何机制效果，保留字段只为目录完整
    #[serde(default)]
    pub mana: u32,
}

impl StatBonus {
    /// 叠加两份加成（用于汇总全部装备槽）
    pub fn combine(self, other: StatBonus) -> StatBonus {
        StatBonus {
            attack: self.attack + other.attack,
            defense: self.defense + other.defense,
            health: self.health + other.health,
            mana: self.mana + other.mana,
        }
    }
}

/// 基础物品结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub bonus: StatBonus,
    pub price: u32,
}

impl Item {
    pub fn new(
        id: u32,
        name: &str,
        description: &str,
        category: ItemCategory,
        bonus: StatBonus,
        price: u32,
    ) -> Self {
        Self {
            id: ItemId(id),
            name: name.to_string(),
            description: description.to_string(),
            category,
            bonus,
            price,
        }
    }

    /// 是否可装备
    pub fn is_equippable(&self) -> bool {
        self.category.is_equippable()
    }

    /// 是否为消耗品
    pub fn is_consumable(&self) -> bool {
        self.category == ItemCategory::Consumable
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equippable_categories() {
        assert!(ItemCategory::Weapon.is_equippable());
        assert!(ItemCategory::Armor.is_equippable());
        assert!(ItemCategory::Accessory.is_equippable());
        assert!(!ItemCategory::Consumable.is_equippable());
    }

    #[test]
    fn test_bonus_combine() {
        let a = StatBonus {
            attack: 25,
            ..StatBonus::default()
        };
        let b = StatBonus {
            defense: 50,
            health: 100,
            ..StatBonus::default()
        };
        let total = a.combine(b);
        assert_eq!(total.attack, 25);
        assert_eq!(total.defense, 50);
        assert_eq!(total.health, 100);
        assert_eq!(total.mana, 0);
    }

    #[test]
    fn test_category_display_matches_ui_labels() {
        assert_eq!(ItemCategory::Weapon.to_string(), "weapon");
        assert_eq!(ItemCategory::Consumable.to_string(), "consumable");
    }
}
