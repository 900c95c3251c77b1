//src/items/src/catalog.rs
//! 商店目录（固定6件商品）
//!
//! 价格、描述与属性均为固定数值；商店库存由 progression 侧维护，
//! 这里只提供物品本体的构造函数。

use crate::{Item, ItemCategory, StatBonus};

/// 治疗药水：恢复50点生命
pub fn health_potion() -> Item {
    Item::new(
        1,
        "Health Potion",
        "Restores 50 HP",
        ItemCategory::Consumable,
        StatBonus {
            health: 50,
            ..StatBonus::default()
        },
        100,
    )
}

/// 法力药水：恢复50点法力（法力系统未启用，使用时无机制效果）
pub fn mana_potion() -> Item {
    Item::new(
        2,
        "Mana Potion",
        "Restores 50 MP",
        ItemCategory::Consumable,
        StatBonus {
            mana: 50,
            ..StatBonus::default()
        },
        150,
    )
}

/// 钢剑：+25攻击
pub fn steel_sword() -> Item {
    Item::new(
        3,
        "Steel Sword",
        "+25 Attack Power",
        ItemCategory::Weapon,
        StatBonus {
            attack: 25,
            ..StatBonus::default()
        },
        500,
    )
}

/// 魔法书：+30攻击
pub fn magic_tome() -> Item {
    Item::new(
        4,
        "Magic Tome",
        "+30 Magic Power",
        ItemCategory::Weapon,
        StatBonus {
            attack: 30,
            ..StatBonus::default()
        },
        800,
    )
}

/// 神话护甲：+50防御
pub fn mythical_armor() -> Item {
    Item::new(
        5,
        "Mythical Armor",
        "+50 Defense",
        ItemCategory::Armor,
        StatBonus {
            defense: 50,
            ..StatBonus::default()
        },
        1500,
    )
}

/// 活力护符：+100生命上限
pub fn amulet_of_vitality() -> Item {
    Item::new(
        6,
        "Amulet of Vitality",
        "+100 Health",
        ItemCategory::Accessory,
        StatBonus {
            health: 100,
            ..StatBonus::default()
        },
        600,
    )
}

/// 完整目录（商店初始上架顺序）
pub fn all() -> Vec<Item> {
    vec![
        health_potion(),
        mana_potion(),
        steel_sword(),
        magic_tome(),
        mythical_armor(),
        amulet_of_vitality(),
    ]
}
