/*
 * Hatchery - Creature Validator
 * 开发心理过程:
 * 1. 校验生物记录是否满足生成器的全部不变量
 * 2. 物种数量 2~3 且不重复, 物种均在目录中
 * 3. 属性落在稀有度对应区间, 名字符合 "前缀 物种-物种" 格式
 * 4. 导出前校验, 导入后校验, 外部存储中的篡改数据会被拒绝
 */

use std::collections::HashSet;
use std::fmt;
use serde::{Serialize, Deserialize};

use super::generator::CreatureRecord;
use super::naming::{hybrid_name, split_creature_name};
use crate::core::{HatchConfig, HatchError, Result};

const MIN_MIX: usize = 2;
const MAX_MIX: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    MixLength(usize),
    DuplicateSpecies(String),
    UnknownSpecies(String),
    AttributeOutOfRange { stat: String, value: u32, min: u32, max: u32 },
    MalformedName(String),
    UnknownPrefix(String),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MixLength(len) => {
                write!(f, "species mix must have {}-{} entries, got {}", MIN_MIX, MAX_MIX, len)
            }
            ValidationIssue::DuplicateSpecies(s) => write!(f, "duplicate species {}", s),
            ValidationIssue::UnknownSpecies(s) => write!(f, "unknown species {}", s),
            ValidationIssue::AttributeOutOfRange { stat, value, min, max } => {
                write!(f, "{} = {} outside {}..={}", stat, value, min, max)
            }
            ValidationIssue::MalformedName(name) => write!(f, "malformed name {:?}", name),
            ValidationIssue::UnknownPrefix(p) => write!(f, "unknown name prefix {}", p),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let joined = self
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(HatchError::ValidationError(joined))
    }
}

#[derive(Debug, Clone)]
pub struct CreatureValidator {
    config: HatchConfig,
}

impl CreatureValidator {
    pub fn new(config: &HatchConfig) -> Self {
        Self { config: config.clone() }
    }

    pub fn validate_creature(&self, record: &CreatureRecord) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mix = &record.species_mix;

        if !(MIN_MIX..=MAX_MIX).contains(&mix.len()) {
            report.issues.push(ValidationIssue::MixLength(mix.len()));
        }

        let mut seen = HashSet::new();
        for species in mix {
            if !seen.insert(species) {
                report.issues.push(ValidationIssue::DuplicateSpecies(species.clone()));
            }
            if !self.config.species_catalog.contains(species) {
                report.issues.push(ValidationIssue::UnknownSpecies(species.clone()));
            }
        }

        let range = self.config.attribute_ranges.for_tier(record.rarity);
        for (stat, value) in record.attributes.values() {
            if !range.contains(value) {
                report.issues.push(ValidationIssue::AttributeOutOfRange {
                    stat: stat.to_string(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        match split_creature_name(&record.name) {
            Some((prefix, _)) => {
                if !self.config.name_prefixes.iter().any(|p| p == prefix) {
                    report.issues.push(ValidationIssue::UnknownPrefix(prefix.to_string()));
                }
                if record.name != format!("{} {}", prefix, hybrid_name(mix)) {
                    report.issues.push(ValidationIssue::MalformedName(record.name.clone()));
                }
            }
            None => report.issues.push(ValidationIssue::MalformedName(record.name.clone())),
        }

        report
    }

    pub fn export_creature_data(&self, record: &CreatureRecord) -> Result<String> {
        self.validate_creature(record).into_result()?;
        Ok(serde_json::to_string_pretty(record)?)
    }

    pub fn import_creature_data(&self, data: &str) -> Result<CreatureRecord> {
        let record: CreatureRecord = serde_json::from_str(data)?;
        self.validate_creature(&record).into_result()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature_engine::{AttributeSet, RarityTier};

    fn record() -> CreatureRecord {
        CreatureRecord {
            name: "Storm Aquafin-Moonbeam".to_string(),
            species_mix: vec!["Aquafin".to_string(), "Moonbeam".to_string()],
            rarity: RarityTier::Rare,
            attributes: AttributeSet { strength: 25, agility: 50, intelligence: 33, magic: 41 },
        }
    }

    fn validator() -> CreatureValidator {
        CreatureValidator::new(&HatchConfig::default())
    }

    #[test]
    fn test_valid_record() {
        assert!(validator().validate_creature(&record()).is_valid());
    }

    #[test]
    fn test_detects_out_of_range_attribute() {
        let mut creature = record();
        creature.attributes.magic = 51;
        let report = validator().validate_creature(&creature);
        assert_eq!(report.issues.len(), 1);
        assert!(matches!(
            &report.issues[0],
            ValidationIssue::AttributeOutOfRange { stat, value: 51, .. } if stat == "magic"
        ));
    }

    #[test]
    fn test_detects_mix_problems() {
        let mut creature = record();
        creature.species_mix = vec!["Aquafin".to_string(), "Aquafin".to_string()];
        creature.name = "Storm Aquafin-Aquafin".to_string();
        let report = validator().validate_creature(&creature);
        assert_eq!(report.issues, vec![ValidationIssue::DuplicateSpecies("Aquafin".to_string())]);

        let mut creature = record();
        creature.species_mix = vec!["Aquafin".to_string()];
        creature.name = "Storm Aquafin".to_string();
        let report = validator().validate_creature(&creature);
        assert_eq!(report.issues, vec![ValidationIssue::MixLength(1)]);

        let mut creature = record();
        creature.species_mix[1] = "Gryphon".to_string();
        creature.name = "Storm Aquafin-Gryphon".to_string();
        let report = validator().validate_creature(&creature);
        assert_eq!(report.issues, vec![ValidationIssue::UnknownSpecies("Gryphon".to_string())]);
    }

    #[test]
    fn test_detects_name_problems() {
        let mut creature = record();
        creature.name = "Cosmic Aquafin-Moonbeam".to_string();
        assert_eq!(
            validator().validate_creature(&creature).issues,
            vec![ValidationIssue::UnknownPrefix("Cosmic".to_string())]
        );

        creature.name = "Storm Moonbeam-Aquafin".to_string();
        assert_eq!(
            validator().validate_creature(&creature).issues,
            vec![ValidationIssue::MalformedName("Storm Moonbeam-Aquafin".to_string())]
        );
    }

    #[test]
    fn test_export_import() {
        let validator = validator();
        let json = validator.export_creature_data(&record()).unwrap();
        assert!(json.contains("\"rarity\": \"rare\""));
        assert_eq!(validator.import_creature_data(&json).unwrap(), record());
    }

    #[test]
    fn test_tampered_import_rejected() {
        let validator = validator();
        let json = validator
            .export_creature_data(&record())
            .unwrap()
            .replace("\"rarity\": \"rare\"", "\"rarity\": \"mythical\"");
        assert!(matches!(
            validator.import_creature_data(&json),
            Err(HatchError::ValidationError(_))
        ));
        assert!(matches!(
            validator.import_creature_data("{not json"),
            Err(HatchError::SerializationError(_))
        ));
    }
}
