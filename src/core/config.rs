/*
* 开发心理过程：
* 1. 孵化平衡参数集中在一个配置结构中,默认值即线上参数
* 2. 支持 TOML 文件加载与保存,文件缺失时写出默认配置
* 3. 加载后统一校验: 阈值升序、区间有效、概率合法、目录非空
*/

use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::Path,
};
use log::{debug, info};

use crate::core::error::{HatchError, Result};
use crate::creature_engine::{
    default_catalog, default_portraits, default_prefixes, AttributeRanges, RarityThresholds,
    DEFAULT_TRIPLE_MIX_CHANCE,
};

/// 三物种混合至少需要3个不同物种
const MIN_CATALOG_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatchConfig {
    pub triple_mix_chance: f64,
    pub species_catalog: Vec<String>,
    pub name_prefixes: Vec<String>,
    pub portraits: Vec<String>,
    pub rarity_thresholds: RarityThresholds,
    pub attribute_ranges: AttributeRanges,
}

impl Default for HatchConfig {
    fn default() -> Self {
        Self {
            triple_mix_chance: DEFAULT_TRIPLE_MIX_CHANCE,
            species_catalog: default_catalog(),
            name_prefixes: default_prefixes(),
            portraits: default_portraits(),
            rarity_thresholds: RarityThresholds::default(),
            attribute_ranges: AttributeRanges::default(),
        }
    }
}

impl HatchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HatchConfig = toml::from_str(content)
            .map_err(|e| HatchError::ConfigError(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("配置文件不存在，创建默认配置: {:?}", path);
            let default_config = HatchConfig::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("成功加载配置文件: {:?}", path);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        debug!("配置已保存到: {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.rarity_thresholds.validate()?;
        self.attribute_ranges.validate()?;

        if !(0.0..=1.0).contains(&self.triple_mix_chance) {
            crate::hatch_bail!(
                ConfigError,
                "triple_mix_chance must be within [0, 1], got {}",
                self.triple_mix_chance
            );
        }

        let distinct: HashSet<&String> = self.species_catalog.iter().collect();
        if distinct.len() != self.species_catalog.len() {
            crate::hatch_bail!(ConfigError, "species catalog contains duplicates");
        }
        if distinct.len() < MIN_CATALOG_SIZE {
            crate::hatch_bail!(
                ConfigError,
                "species catalog needs at least {} species, got {}",
                MIN_CATALOG_SIZE,
                distinct.len()
            );
        }
        // 名字用 '-' 连接物种, 用空格分隔前缀
        if self.species_catalog.iter().any(|s| s.is_empty() || s.contains('-') || s.contains(' ')) {
            crate::hatch_bail!(ConfigError, "species names must be non-empty and contain no '-' or spaces");
        }
        if self.name_prefixes.is_empty() || self.name_prefixes.iter().any(|p| p.is_empty() || p.contains(' ')) {
            crate::hatch_bail!(ConfigError, "name prefixes must be non-empty single words");
        }
        if self.portraits.is_empty() {
            crate::hatch_bail!(ConfigError, "portrait list is empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = HatchConfig::default();
        assert_eq!(config.species_catalog.len(), 8);
        assert_eq!(config.name_prefixes.len(), 8);
        assert_eq!(config.portraits.len(), 6);
        assert_eq!(config.triple_mix_chance, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = HatchConfig::default();
        let serialized = config.to_toml_string().unwrap();
        let deserialized = HatchConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = HatchConfig::from_toml_str("triple_mix_chance = 0.5\n").unwrap();
        assert_eq!(config.triple_mix_chance, 0.5);
        assert_eq!(config.rarity_thresholds, RarityThresholds::default());
    }

    #[test]
    fn test_attribute_range_bounds() {
        let mut config = HatchConfig::default();
        config.attribute_ranges.mythical = crate::creature_engine::StatRange::new(2_000_000_000, 2_000_000_000);
        assert!(matches!(config.validate(), Err(HatchError::ConfigError(_))));

        let toml = HatchConfig::default()
            .to_toml_string()
            .unwrap()
            .replace("max = 100", "max = 4294967295");
        assert!(HatchConfig::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = HatchConfig::default();
        config.triple_mix_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = HatchConfig::default();
        config.species_catalog = vec!["Aquafin".into(), "Dragonet".into()];
        assert!(config.validate().is_err());

        let mut config = HatchConfig::default();
        config.species_catalog.push("Aquafin".into());
        assert!(config.validate().is_err());

        let mut config = HatchConfig::default();
        config.name_prefixes.clear();
        assert!(config.validate().is_err());

        let mut config = HatchConfig::default();
        config.species_catalog[0] = "Half-Dragon".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("hatchery.toml");

        // 文件不存在时写出默认配置
        let created = HatchConfig::load_from_file(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(created, HatchConfig::default());

        let mut config = HatchConfig::default();
        config.triple_mix_chance = 0.1;
        config.save_to_file(&config_path).unwrap();

        let loaded = HatchConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.triple_mix_chance, 0.1);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "triple_mix_chance = \"lots\"").unwrap();
        assert!(matches!(
            HatchConfig::load_from_file(&config_path),
            Err(HatchError::ConfigError(_))
        ));
    }
}
