// src/progression/src/shop.rs
use serde::{Deserialize, Serialize};

use items::{catalog, Item, ItemId};

use crate::ProgressionError;

/// 商店货架条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopEntry {
    pub item: Item,
    pub stock: u32,
}

/// 商店（固定目录 + 有限库存）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    entries: Vec<ShopEntry>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    /// 初始货架：药水多件，装备各一件
    pub fn new() -> Self {
        let stock = [10, 8, 1, 1, 1, 1];
        let entries = catalog::all()
            .into_iter()
            .zip(stock)
            .map(|(item, stock)| ShopEntry { item, stock })
            .collect();
        Self { entries }
    }

    pub fn find(&self, id: ItemId) -> Option<&ShopEntry> {
        self.entries.iter().find(|e| e.item.id == id)
    }

    /// 扣减库存并返回商品（库存不足时货架保持不变）
    pub fn take_stock(&mut self, id: ItemId, quantity: u32) -> Result<Item, ProgressionError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.item.id == id)
            .ok_or(ProgressionError::OutOfStock)?;
        if entry.stock < quantity {
            return Err(ProgressionError::OutOfStock);
        }
        entry.stock -= quantity;
        Ok(entry.item.clone())
    }

    /// 全部货架条目（供界面渲染）
    pub fn entries(&self) -> &[ShopEntry] {
        &self.entries
    }
}
