// 生物命名: "{前缀} {物种1}-{物种2}[-{物种3}]"

use rand::seq::SliceRandom;
use rand::Rng;

pub const NAME_PREFIXES: [&str; 8] = [
    "Shadow", "Fire", "Storm", "Crystal", "Ancient", "Mystic", "Golden", "Silver",
];

pub fn default_prefixes() -> Vec<String> {
    NAME_PREFIXES.iter().map(|s| s.to_string()).collect()
}

pub fn hybrid_name(species_mix: &[String]) -> String {
    species_mix.join("-")
}

/// `prefixes` 不能为空 (配置校验保证)
pub fn generate_creature_name<R: Rng + ?Sized>(
    rng: &mut R,
    prefixes: &[String],
    species_mix: &[String],
) -> String {
    let prefix = prefixes.choose(rng).map(String::as_str).unwrap_or(NAME_PREFIXES[0]);
    format!("{} {}", prefix, hybrid_name(species_mix))
}

/// 拆分名字为 (前缀, 物种列表); 格式不符时返回 None
pub fn split_creature_name(name: &str) -> Option<(&str, Vec<&str>)> {
    let (prefix, hybrid) = name.split_once(' ')?;
    if prefix.is_empty() || hybrid.is_empty() {
        return None;
    }
    Some((prefix, hybrid.split('-').collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn mix(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_name_pattern() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let prefixes = default_prefixes();
        let species = mix(&["Aquafin", "Dragonet", "Moonbeam"]);

        for _ in 0..200 {
            let name = generate_creature_name(&mut rng, &prefixes, &species);
            let (prefix, parts) = split_creature_name(&name).unwrap();
            assert!(NAME_PREFIXES.contains(&prefix));
            assert_eq!(parts, vec!["Aquafin", "Dragonet", "Moonbeam"]);
        }
    }

    #[test]
    fn test_two_species_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let name = generate_creature_name(&mut rng, &mix(&["Golden"]), &mix(&["Sandpaw", "Furrball"]));
        assert_eq!(name, "Golden Sandpaw-Furrball");
    }

    #[test]
    fn test_split_rejects_malformed() {
        assert!(split_creature_name("NoSpace").is_none());
        assert!(split_creature_name(" Leading").is_none());
        assert!(split_creature_name("Trailing ").is_none());
    }
}
