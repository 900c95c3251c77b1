// src/progression/src/stats.rs
use serde::{Deserialize, Serialize};

/// 升级属性成长
const LEVEL_UP_ATTACK: u32 = 5;
const LEVEL_UP_DEFENSE: u32 = 2;
const LEVEL_UP_HEALTH: u32 = 10;

/// 玩家基础属性（不含装备加成）
///
/// 不变量：`level` 只增不减；`current_health` 不超过派生生命上限
/// （由 [`crate::ProgressionStore`] 在每次变更后钳制）；货币永不为负。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
    pub xp: u32,
    pub attack: u32,
    pub defense: u32,
    /// 基础生命上限（不含装备）
    pub max_health: u32,
    /// 当前生命值
    pub current_health: u32,
    pub currency: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            attack: 10,
            defense: 5,
            max_health: 100,
            current_health: 100,
            currency: 1000,
        }
    }
}

impl PlayerStats {
    /// 当前等级的升级阈值
    pub fn xp_threshold(&self) -> u32 {
        self.level * 100
    }

    /// 升级：等级+1，攻击+5，防御+2，基础生命上限+10，经验清零
    ///
    /// 当前生命值保持不变（上限只会变大，无需钳制）。
    pub fn level_up(&mut self) {
        self.level += 1;
        self.attack += LEVEL_UP_ATTACK;
        self.defense += LEVEL_UP_DEFENSE;
        self.max_health += LEVEL_UP_HEALTH;
        self.xp = 0;
    }

    /// 发放经验并按阈值升级，每次发放最多触发一次升级
    ///
    /// 即使经验溢出足够跨越两个阈值，也只升一级——与每日奖励、
    /// 战斗胜利共用同一条规则。返回升级后的新等级（未升级为 None）。
    pub fn gain_xp(&mut self, xp: u32) -> Option<u32> {
        self.xp += xp;
        if self.xp >= self.xp_threshold() {
            self.level_up();
            Some(self.level)
        } else {
            None
        }
    }
}

/// 派生属性：基础属性 + 三个装备槽的加成
///
/// 每次装备变更后重新计算，绝不跨变更缓存。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_up_growth() {
        let mut stats = PlayerStats::default();
        stats.level_up();
        assert_eq!(stats.level, 2);
        assert_eq!(stats.attack, 15);
        assert_eq!(stats.defense, 7);
        assert_eq!(stats.max_health, 110);
        assert_eq!(stats.xp, 0);
        // 当前生命不随升级变动
        assert_eq!(stats.current_health, 100);
    }

    #[test]
    fn test_single_level_up_per_reward() {
        let mut stats = PlayerStats::default();
        // 一次性发放远超两级阈值的经验，也只升一级
        assert_eq!(stats.gain_xp(350), Some(2));
        assert_eq!(stats.level, 2);
        assert_eq!(stats.xp, 0);
    }

    #[test]
    fn test_xp_below_threshold_accumulates() {
        let mut stats = PlayerStats::default();
        assert_eq!(stats.gain_xp(50), None);
        assert_eq!(stats.xp, 50);
        assert_eq!(stats.gain_xp(50), Some(2));
    }
}
