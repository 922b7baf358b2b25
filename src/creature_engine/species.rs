/*
 * Hatchery - Species Mix Sampler
 * 开发心理过程:
 * 1. 固定8种基础物种,每次孵化混合2种,30%概率混合3种
 * 2. 无放回抽样: 每次从尚未选中的物种中均匀抽取
 * 3. 抽取顺序有意义,名字和媒体选择都依赖它
 */

use rand::Rng;

pub const SPECIES_CATALOG: [&str; 8] = [
    "Fluffling",
    "Sparkwing",
    "Aquafin",
    "Dragonet",
    "Furrball",
    "Sandpaw",
    "Crystalhorn",
    "Moonbeam",
];

pub const DEFAULT_TRIPLE_MIX_CHANCE: f64 = 0.3;

pub type SpeciesMix = Vec<String>;

/// 抽取物种组合。
///
/// 概率被限制在 [0, 1] (NaN 视为 0), 目录中的重复名字只算一次;
/// 不同物种不足时返回的组合会短于预期, 配置校验会提前拒绝这类目录。
pub fn sample_species_mix<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &[String],
    triple_mix_chance: f64,
) -> SpeciesMix {
    let chance = if triple_mix_chance.is_nan() { 0.0 } else { triple_mix_chance.clamp(0.0, 1.0) };
    let count = if rng.gen_bool(chance) { 3 } else { 2 };
    let mut selected: SpeciesMix = Vec::with_capacity(count);

    for _ in 0..count {
        let mut remaining: Vec<&String> = Vec::with_capacity(catalog.len());
        for species in catalog {
            if !selected.contains(species) && !remaining.contains(&species) {
                remaining.push(species);
            }
        }
        if remaining.is_empty() {
            break;
        }
        let pick = remaining[rng.gen_range(0..remaining.len())];
        selected.push(pick.clone());
    }

    selected
}

pub fn default_catalog() -> Vec<String> {
    SPECIES_CATALOG.iter().map(|s| s.to_string()).collect()
}
