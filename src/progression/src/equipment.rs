// src/progression/src/equipment.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use items::{Item, ItemCategory, ItemId, StatBonus};

use crate::ProgressionError;

/// 装备槽枚举（支持完整迭代）
#[derive(Debug, Display, Clone, Copy, EnumIter, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    #[strum(serialize = "weapon")]
    Weapon,
    #[strum(serialize = "armor")]
    Armor,
    #[strum(serialize = "accessory")]
    Accessory,
}

impl Slot {
    /// 物品分类对应的槽位；消耗品没有槽位
    pub fn for_category(category: ItemCategory) -> Option<Slot> {
        match category {
            ItemCategory::Weapon => Some(Slot::Weapon),
            ItemCategory::Armor => Some(Slot::Armor),
            ItemCategory::Accessory => Some(Slot::Accessory),
            ItemCategory::Consumable => None,
        }
    }
}

/// 装备栏：三个槽位，各至多一件，分类必须与槽位一致
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    weapon: Option<Item>,
    armor: Option<Item>,
    accessory: Option<Item>,
}

impl Equipment {
    /// 创建空装备栏
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Item> {
        match slot {
            Slot::Weapon => &mut self.weapon,
            Slot::Armor => &mut self.armor,
            Slot::Accessory => &mut self.accessory,
        }
    }

    /// 指定槽位当前装备
    pub fn get(&self, slot: Slot) -> Option<&Item> {
        match slot {
            Slot::Weapon => self.weapon.as_ref(),
            Slot::Armor => self.armor.as_ref(),
            Slot::Accessory => self.accessory.as_ref(),
        }
    }

    /// 装备物品到其分类对应的槽位，返回被替换下来的旧装备
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, ProgressionError> {
        let slot = Slot::for_category(item.category).ok_or(ProgressionError::InvalidSlot)?;
        let target = self.slot_mut(slot);
        let old = target.take();
        *target = Some(item);
        Ok(old)
    }

    /// 卸下指定 id 的装备（必须正占据其对应槽位）
    pub fn unequip(&mut self, id: ItemId) -> Result<Item, ProgressionError> {
        let slot = self.slot_of(id).ok_or(ProgressionError::NotEquipped)?;
        self.slot_mut(slot)
            .take()
            .ok_or(ProgressionError::NotEquipped)
    }

    /// 查找某物品占据的槽位
    pub fn slot_of(&self, id: ItemId) -> Option<Slot> {
        [Slot::Weapon, Slot::Armor, Slot::Accessory]
            .into_iter()
            .find(|&slot| self.get(slot).is_some_and(|item| item.id == id))
    }

    /// 三个槽位加成总和
    pub fn bonus_total(&self) -> StatBonus {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .flatten()
            .fold(StatBonus::default(), |acc, item| acc.combine(item.bonus))
    }

    /// 已装备件数
    pub fn count(&self) -> u32 {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .flatten()
            .count() as u32
    }

    /// 全部槽位（供界面渲染）
    pub fn slots(&self) -> [(Slot, Option<&Item>); 3] {
        [
            (Slot::Weapon, self.weapon.as_ref()),
            (Slot::Armor, self.armor.as_ref()),
            (Slot::Accessory, self.accessory.as_ref()),
        ]
    }
}
