/*
 * Hatchery - Hatch Outcome Generator
 * 开发心理过程:
 * 1. 请求在构造时校验: 代币数量为正的有限数, 锁定天数至少1天
 * 2. 稀有度确定性计算, 其余 (物种/名字/属性/立绘) 从注入的随机源抽取
 * 3. 抽取顺序固定: 物种 → 名字 → 属性 → 立绘, 保证同种子结果一致
 * 4. 产出的记录可直接交给外部存储持久化
 */

use log::debug;
use rand::Rng;
use serde::{Serialize, Deserialize};

use super::attributes::{roll_attributes, AttributeSet};
use super::naming::generate_creature_name;
use super::presentation::{egg_video, pick_portrait};
use super::rarity_system::{hatch_score, RarityTier};
use super::species::{sample_species_mix, SpeciesMix};
use crate::core::{HatchConfig, HatchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HatchRequest {
    token_amount: f64,
    lock_duration_days: u32,
}

impl HatchRequest {
    pub fn new(token_amount: f64, lock_duration_days: u32) -> Result<Self> {
        if !token_amount.is_finite() || token_amount <= 0.0 {
            return Err(HatchError::InvalidAmount(format!(
                "token amount must be a positive number, got {}",
                token_amount
            )));
        }
        if lock_duration_days == 0 {
            return Err(HatchError::InvalidDuration(
                "lock duration must be at least 1 day".to_string(),
            ));
        }
        Ok(Self { token_amount, lock_duration_days })
    }

    /// 解析表单输入, 非数字同样视为无效
    pub fn parse(token_amount: &str, lock_duration_days: &str) -> Result<Self> {
        let amount = token_amount.trim();
        let days = lock_duration_days.trim();
        if amount.is_empty() || days.is_empty() {
            return Err(HatchError::InvalidAmount(
                "token amount and lock duration are required".to_string(),
            ));
        }
        let amount: f64 = amount
            .parse()
            .map_err(|_| HatchError::InvalidAmount(format!("not a number: {:?}", amount)))?;
        let days: u32 = days
            .parse()
            .map_err(|_| HatchError::InvalidDuration(format!("not a whole number of days: {:?}", days)))?;
        Self::new(amount, days)
    }

    pub fn token_amount(&self) -> f64 {
        self.token_amount
    }

    pub fn lock_duration_days(&self) -> u32 {
        self.lock_duration_days
    }

    pub fn score(&self) -> f64 {
        hatch_score(self.lock_duration_days, self.token_amount)
    }
}

/// 外部存储中的生物记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub name: String,
    pub species_mix: SpeciesMix,
    pub rarity: RarityTier,
    pub attributes: AttributeSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HatchOutcome {
    pub record: CreatureRecord,
    pub rarity: RarityTier,
    pub score: f64,
    pub portrait: String,
    pub egg_video: String,
}

pub fn generate_outcome<R: Rng + ?Sized>(
    config: &HatchConfig,
    request: &HatchRequest,
    rng: &mut R,
) -> HatchOutcome {
    let score = request.score();
    let rarity = config.rarity_thresholds.classify(score);

    let species_mix = sample_species_mix(rng, &config.species_catalog, config.triple_mix_chance);
    let name = generate_creature_name(rng, &config.name_prefixes, &species_mix);
    let attributes = roll_attributes(rng, &config.attribute_ranges, rarity);
    let portrait = pick_portrait(rng, &config.portraits);
    let egg = egg_video(&species_mix).to_string();

    debug!(
        "孵化结果: {} [{}] 分数 {} 属性总和 {}",
        name,
        rarity,
        score,
        attributes.total()
    );

    HatchOutcome {
        record: CreatureRecord { name, species_mix, rarity, attributes },
        rarity,
        score,
        portrait,
        egg_video: egg,
    }
}
