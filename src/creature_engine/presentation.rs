/*
 * Hatchery - Presentation Lookups
 * 开发心理过程:
 * 1. 蛋动画按物种数量奇偶选择,属于确定性查表
 * 2. 立绘从固定列表中随机挑选
 * 3. 稀有度徽章颜色有两套: 孵化页暖色调, 交易/指南页标准色
 * 4. 锁定时长预设及其提示文字
 */

use rand::seq::SliceRandom;
use rand::Rng;

use super::RarityTier;

pub const EGG_VIDEO_EVEN: &str = "/images/20251125_2322_video.mp4";
pub const EGG_VIDEO_ODD: &str = "/images/20251125_2323_video.mp4";

pub const CREATURE_PORTRAITS: [&str; 6] = [
    "./images/20251120_0015_image.png",
    "./images/20251120_0725_image.png",
    "./images/20251120_0026_image.png",
    "./images/20251120_0023_image.png",
    "./images/20251120_0039_image.png",
    "./images/20251120_0040_image.png",
];

/// (天数, 提示的稀有度)
pub const LOCK_DURATION_PRESETS: [(u32, RarityTier); 5] = [
    (1, RarityTier::Common),
    (3, RarityTier::Rare),
    (7, RarityTier::Epic),
    (14, RarityTier::Legendary),
    (30, RarityTier::Mythical),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePalette {
    /// 孵化页
    Hatching,
    /// 交易市场与稀有度指南
    Guide,
}

pub fn egg_video(species_mix: &[String]) -> &'static str {
    if species_mix.len() % 2 == 0 {
        EGG_VIDEO_EVEN
    } else {
        EGG_VIDEO_ODD
    }
}

pub fn default_portraits() -> Vec<String> {
    CREATURE_PORTRAITS.iter().map(|s| s.to_string()).collect()
}

pub fn pick_portrait<R: Rng + ?Sized>(rng: &mut R, portraits: &[String]) -> String {
    portraits
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| CREATURE_PORTRAITS[0].to_string())
}

pub fn badge_class(tier: RarityTier, palette: BadgePalette) -> &'static str {
    match palette {
        BadgePalette::Hatching => match tier {
            RarityTier::Common => "bg-gray-500",
            RarityTier::Rare => "bg-[#E64A26]",
            RarityTier::Epic => "bg-[#EB3A1C]",
            RarityTier::Legendary => "bg-[#FF8A2F]",
            RarityTier::Mythical => "bg-[#EB3A1C]",
        },
        BadgePalette::Guide => match tier {
            RarityTier::Common => "bg-gray-500",
            RarityTier::Rare => "bg-blue-500",
            RarityTier::Epic => "bg-purple-500",
            RarityTier::Legendary => "bg-orange-500",
            RarityTier::Mythical => "bg-red-500",
        },
    }
}

pub fn badge_class_for_label(label: &str, palette: BadgePalette) -> &'static str {
    badge_class(RarityTier::from_label_lossy(label), palette)
}

pub fn lock_preset_label(days: u32, hint: RarityTier) -> String {
    let unit = if days == 1 { "Day" } else { "Days" };
    format!("{} {} ({} chance)", days, unit, hint.display_name())
}

pub fn lock_presets() -> Vec<(u32, String)> {
    LOCK_DURATION_PRESETS
        .iter()
        .map(|&(days, hint)| (days, lock_preset_label(days, hint)))
        .collect()
}
