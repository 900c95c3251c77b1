// src/progression/src/inventory.rs
use serde::{Deserialize, Serialize};

use items::{Item, ItemId};

use crate::ProgressionError;

/// 背包条目（装备单件存放，消耗品按 id 堆叠）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEntry {
    /// 装备：单件实例，不堆叠
    Gear(Item),
    /// 消耗品：物品 + 存量（存量始终 >= 1，归零即移除整个条目）
    Stack(Item, u32),
}

impl InventoryEntry {
    pub fn item(&self) -> &Item {
        match self {
            InventoryEntry::Gear(item) | InventoryEntry::Stack(item, _) => item,
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            InventoryEntry::Gear(_) => 1,
            InventoryEntry::Stack(_, count) => *count,
        }
    }
}

/// 背包（有序集合，按物品 id 去重）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 id 查找条目
    pub fn find(&self, id: ItemId) -> Option<&InventoryEntry> {
        self.entries.iter().find(|e| e.item().id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    /// 追加一件装备（调用方保证 id 唯一）
    pub fn push_gear(&mut self, item: Item) {
        debug_assert!(!self.contains(item.id));
        self.entries.push(InventoryEntry::Gear(item));
    }

    /// 合并消耗品：同 id 已有堆叠则增加存量，否则新建条目
    pub fn merge_stack(&mut self, item: Item, quantity: u32) {
        for entry in &mut self.entries {
            if let InventoryEntry::Stack(existing, count) = entry {
                if existing.id == item.id {
                    *count += quantity;
                    return;
                }
            }
        }
        self.entries.push(InventoryEntry::Stack(item, quantity));
    }

    /// 取出一件装备（用于装备到槽位）
    pub fn take_gear(&mut self, id: ItemId) -> Result<Item, ProgressionError> {
        let index = self
            .entries
            .iter()
            .position(|e| matches!(e, InventoryEntry::Gear(item) if item.id == id))
            .ok_or(ProgressionError::ItemNotFound)?;
        match self.entries.remove(index) {
            InventoryEntry::Gear(item) => Ok(item),
            InventoryEntry::Stack(..) => unreachable!(), // position 只匹配 Gear
        }
    }

    /// 消耗一件堆叠物品：存量减一，归零时移除条目
    ///
    /// 返回消耗的物品和剩余存量。
    pub fn take_one(&mut self, id: ItemId) -> Result<(Item, u32), ProgressionError> {
        let index = self
            .entries
            .iter()
            .position(|e| matches!(e, InventoryEntry::Stack(item, _) if item.id == id))
            .ok_or(ProgressionError::OutOfStock)?;

        match &mut self.entries[index] {
            InventoryEntry::Stack(item, count) => {
                let used = item.clone();
                *count -= 1;
                let remaining = *count;
                if remaining == 0 {
                    self.entries.remove(index);
                }
                Ok((used, remaining))
            }
            InventoryEntry::Gear(_) => unreachable!(),
        }
    }

    /// 全部条目（供界面渲染）
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// 条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 物品总件数（堆叠按存量计）
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|e| e.count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::catalog;

    #[test]
    fn test_merge_stack_by_id() {
        let mut inv = Inventory::new();
        inv.merge_stack(catalog::health_potion(), 2);
        inv.merge_stack(catalog::health_potion(), 3);
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.total_count(), 5);
    }

    #[test]
    fn test_take_one_removes_at_zero() {
        let mut inv = Inventory::new();
        inv.merge_stack(catalog::health_potion(), 2);
        let id = catalog::health_potion().id;

        let (_, remaining) = inv.take_one(id).unwrap();
        assert_eq!(remaining, 1);
        assert!(inv.contains(id));

        let (_, remaining) = inv.take_one(id).unwrap();
        assert_eq!(remaining, 0);
        assert!(!inv.contains(id));
        assert_eq!(inv.take_one(id), Err(ProgressionError::OutOfStock));
    }

    #[test]
    fn test_take_gear_not_found() {
        let mut inv = Inventory::new();
        inv.merge_stack(catalog::health_potion(), 1);
        // 堆叠条目不能按装备取出
        assert_eq!(
            inv.take_gear(catalog::health_potion().id),
            Err(ProgressionError::ItemNotFound)
        );
    }

    #[test]
    fn test_gear_entries_stay_distinct() {
        let mut inv = Inventory::new();
        let mut sword_a = catalog::steel_sword();
        sword_a.id = items::ItemId(1000);
        let mut sword_b = catalog::steel_sword();
        sword_b.id = items::ItemId(1001);
        inv.push_gear(sword_a);
        inv.push_gear(sword_b);
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.total_count(), 2);
    }
}
