/*
 * Hatchery - Creature Engine Module
 * 开发心理过程:
 * 1. 孵化引擎: 给定代币数量与锁定天数, 产出稀有度、物种组合、名字与属性
 * 2. 稀有度确定性计算, 其余部分由调用方注入的随机源决定
 * 3. 引擎只持有配置, 不持有随机数状态, 可被多个调用方共享
 * 4. 提供记录校验与导入导出, 对接外部存储
 */

use rand::Rng;

pub mod attributes;
pub mod generator;
pub mod naming;
pub mod presentation;
pub mod rarity_system;
pub mod species;
pub mod validator;

pub use attributes::*;
pub use generator::*;
pub use naming::*;
pub use presentation::*;
pub use rarity_system::*;
pub use species::*;
pub use validator::*;

use crate::core::{HatchConfig, Result};

#[derive(Debug, Clone)]
pub struct HatchEngine {
    config: HatchConfig,
    validator: CreatureValidator,
}

impl HatchEngine {
    pub fn new(config: HatchConfig) -> Result<Self> {
        config.validate()?;
        let validator = CreatureValidator::new(&config);
        Ok(Self { config, validator })
    }

    pub fn config(&self) -> &HatchConfig {
        &self.config
    }

    /// 预测稀有度 (表单输入时展示)
    pub fn predict_rarity(&self, request: &HatchRequest) -> RarityTier {
        self.config.rarity_thresholds.classify(request.score())
    }

    pub fn hatch<R: Rng + ?Sized>(&self, request: &HatchRequest, rng: &mut R) -> HatchOutcome {
        generate_outcome(&self.config, request, rng)
    }

    pub fn rarity_guide(&self) -> Vec<RarityGuideEntry> {
        rarity_guide(&self.config.rarity_thresholds)
    }

    pub fn validate_creature(&self, record: &CreatureRecord) -> ValidationReport {
        self.validator.validate_creature(record)
    }

    pub fn export_creature_data(&self, record: &CreatureRecord) -> Result<String> {
        self.validator.export_creature_data(record)
    }

    pub fn import_creature_data(&self, data: &str) -> Result<CreatureRecord> {
        self.validator.import_creature_data(data)
    }
}

impl Default for HatchEngine {
    fn default() -> Self {
        let config = HatchConfig::default();
        Self {
            validator: CreatureValidator::new(&config),
            config,
        }
    }
}
