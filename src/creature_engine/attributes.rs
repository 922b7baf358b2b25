/*
 * Hatchery - Attribute Roller
 * 开发心理过程:
 * 1. 四项属性 力量/敏捷/智力/魔力 相互独立,各自在稀有度区间内均匀取值
 * 2. 区间为闭区间,完全由稀有度决定
 * 3. 外部读回的未知稀有度标签按普通区间处理
 */

use rand::Rng;
use serde::{Serialize, Deserialize};

use super::RarityTier;
use crate::core::{HatchError, Result};

/// 配置中单项属性允许的上限
pub const MAX_STAT_VALUE: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// 区间内可取值的个数, 倒置区间为 0
    pub fn width(&self) -> u64 {
        if self.min > self.max {
            return 0;
        }
        u64::from(self.max) - u64::from(self.min) + 1
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRanges {
    pub common: StatRange,
    pub rare: StatRange,
    pub epic: StatRange,
    pub legendary: StatRange,
    pub mythical: StatRange,
}

impl Default for AttributeRanges {
    fn default() -> Self {
        Self {
            common: StatRange::new(10, 30),
            rare: StatRange::new(25, 50),
            epic: StatRange::new(40, 70),
            legendary: StatRange::new(60, 85),
            mythical: StatRange::new(75, 100),
        }
    }
}

impl AttributeRanges {
    pub fn for_tier(&self, tier: RarityTier) -> StatRange {
        match tier {
            RarityTier::Common => self.common,
            RarityTier::Rare => self.rare,
            RarityTier::Epic => self.epic,
            RarityTier::Legendary => self.legendary,
            RarityTier::Mythical => self.mythical,
        }
    }

    pub fn for_label(&self, label: &str) -> StatRange {
        self.for_tier(RarityTier::from_label_lossy(label))
    }

    pub fn validate(&self) -> Result<()> {
        for tier in RarityTier::ALL {
            let range = self.for_tier(tier);
            if range.min > range.max {
                return Err(HatchError::ConfigError(format!(
                    "attribute range for {} is inverted: {}..={}",
                    tier, range.min, range.max
                )));
            }
            if range.max > MAX_STAT_VALUE {
                return Err(HatchError::ConfigError(format!(
                    "attribute range for {} exceeds {}: {}..={}",
                    tier, MAX_STAT_VALUE, range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSet {
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub magic: u32,
}

impl AttributeSet {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, range: StatRange) -> Self {
        Self {
            strength: range.sample(rng),
            agility: range.sample(rng),
            intelligence: range.sample(rng),
            magic: range.sample(rng),
        }
    }

    pub fn values(&self) -> [(&'static str, u32); 4] {
        [
            ("strength", self.strength),
            ("agility", self.agility),
            ("intelligence", self.intelligence),
            ("magic", self.magic),
        ]
    }

    /// 四项属性之和 (交易卡片上展示)
    pub fn total(&self) -> u64 {
        self.values().iter().map(|(_, value)| u64::from(*value)).sum()
    }

    pub fn within(&self, range: StatRange) -> bool {
        self.values().iter().all(|(_, value)| range.contains(*value))
    }
}

/// 按稀有度掷出属性
pub fn roll_attributes<R: Rng + ?Sized>(
    rng: &mut R,
    ranges: &AttributeRanges,
    rarity: RarityTier,
) -> AttributeSet {
    AttributeSet::roll(rng, ranges.for_tier(rarity))
}
