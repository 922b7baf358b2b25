/*
 * Hatchery - Rarity System
 * 开发心理过程:
 * 1. 稀有度完全由 锁定天数 × 代币数量 决定,不含随机成分
 * 2. 阈值为下界包含: 恰好 50/200/500/1000 分即进入更高一档
 * 3. 阈值可配置,默认值沿用线上平衡参数
 * 4. 提供稀有度指南条目,供前端展示每档所需分数
 */

use std::fmt;
use serde::{Serialize, Deserialize};

use super::presentation::{badge_class, BadgePalette};
use crate::core::{HatchError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl RarityTier {
    /// 按强度升序排列
    pub const ALL: [RarityTier; 5] = [
        RarityTier::Common,
        RarityTier::Rare,
        RarityTier::Epic,
        RarityTier::Legendary,
        RarityTier::Mythical,
    ];

    /// 存储用的小写标签
    pub fn label(&self) -> &'static str {
        match self {
            RarityTier::Common => "common",
            RarityTier::Rare => "rare",
            RarityTier::Epic => "epic",
            RarityTier::Legendary => "legendary",
            RarityTier::Mythical => "mythical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Rare => "Rare",
            RarityTier::Epic => "Epic",
            RarityTier::Legendary => "Legendary",
            RarityTier::Mythical => "Mythical",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.label().eq_ignore_ascii_case(label))
    }

    /// 未知标签按普通处理 (外部存储里可能存在旧数据)
    pub fn from_label_lossy(label: &str) -> Self {
        Self::from_label(label).unwrap_or(RarityTier::Common)
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            RarityTier::Common => Some(RarityTier::Rare),
            RarityTier::Rare => Some(RarityTier::Epic),
            RarityTier::Epic => Some(RarityTier::Legendary),
            RarityTier::Legendary => Some(RarityTier::Mythical),
            RarityTier::Mythical => None,
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 孵化分数 = 锁定天数 × 代币数量
pub fn hatch_score(lock_duration_days: u32, token_amount: f64) -> f64 {
    lock_duration_days as f64 * token_amount
}

/// 使用默认阈值计算稀有度。调用方需保证输入为正数。
pub fn calculate_rarity(lock_duration_days: u32, token_amount: f64) -> RarityTier {
    RarityThresholds::default().classify(hatch_score(lock_duration_days, token_amount))
}

/// 各档位的分数下界 (包含)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityThresholds {
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
    pub mythical: f64,
}

impl Default for RarityThresholds {
    fn default() -> Self {
        Self {
            rare: 50.0,
            epic: 200.0,
            legendary: 500.0,
            mythical: 1000.0,
        }
    }
}

impl RarityThresholds {
    pub fn classify(&self, score: f64) -> RarityTier {
        if score >= self.mythical {
            RarityTier::Mythical
        } else if score >= self.legendary {
            RarityTier::Legendary
        } else if score >= self.epic {
            RarityTier::Epic
        } else if score >= self.rare {
            RarityTier::Rare
        } else {
            RarityTier::Common
        }
    }

    pub fn lower_bound(&self, tier: RarityTier) -> f64 {
        match tier {
            RarityTier::Common => 0.0,
            RarityTier::Rare => self.rare,
            RarityTier::Epic => self.epic,
            RarityTier::Legendary => self.legendary,
            RarityTier::Mythical => self.mythical,
        }
    }

    /// 指南中的分数说明,例如 "50-199 points"
    pub fn requirement(&self, tier: RarityTier) -> String {
        match tier {
            RarityTier::Common => format!("< {} points", self.rare),
            RarityTier::Mythical => format!("{}+ points", self.mythical),
            _ => {
                let upper = tier
                    .next()
                    .map(|next| self.lower_bound(next) - 1.0)
                    .unwrap_or(f64::INFINITY);
                format!("{}-{} points", self.lower_bound(tier), upper)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let bounds = [self.rare, self.epic, self.legendary, self.mythical];
        if bounds.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(HatchError::ConfigError(
                "rarity thresholds must be positive and finite".to_string(),
            ));
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(HatchError::ConfigError(format!(
                "rarity thresholds must be strictly ascending: {:?}",
                bounds
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityGuideEntry {
    pub rarity: RarityTier,
    pub title: String,
    pub color: String,
    pub requirement: String,
}

/// 稀有度指南: 每档一条,按升序
pub fn rarity_guide(thresholds: &RarityThresholds) -> Vec<RarityGuideEntry> {
    RarityTier::ALL
        .iter()
        .map(|&tier| RarityGuideEntry {
            rarity: tier,
            title: tier.display_name().to_string(),
            color: badge_class(tier, BadgePalette::Guide).to_string(),
            requirement: thresholds.requirement(tier),
        })
        .collect()
}
