// 孵化器命令行入口
// 开发心理：演示如何调用生成库：校验输入、注入随机源、输出记录与倒计时
// 持久化与账号体系由外部服务负责，这里只打印结果

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{error, info, warn};

use hatchery::creature_engine::{lock_presets, HatchEngine, HatchRequest};
use hatchery::{profile, HatchConfig, HatchError, LockSchedule, RandomGenerator};

const CONFIG_ENV: &str = "HATCHERY_CONFIG";

#[derive(Debug, Parser)]
#[command(name = "hatchery", version, about = "Lock tokens, hatch a creature")]
struct Cli {
    /// TOML balance config (falls back to $HATCHERY_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Hatch one creature
    Hatch {
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long)]
        days: String,
        /// Fixed seed for a reproducible outcome
        #[arg(long)]
        seed: Option<u64>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show rarity tiers and lock presets
    Guide,
    /// Hatch many creatures and summarise the results
    Simulate {
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long)]
        days: String,
        #[arg(long, default_value_t = 10_000)]
        count: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check a creature record exported as JSON
    Validate { file: PathBuf },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        error!("孵化失败: {:#}", e);
        // 输入错误与系统错误使用不同退出码
        let input_error = e
            .downcast_ref::<HatchError>()
            .map_or(false, HatchError::is_input_error);
        std::process::exit(if input_error { 2 } else { 1 });
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    hatchery::init()?;
    let config = load_config(cli.config.as_deref())?;
    let engine = HatchEngine::new(config)?;

    match cli.command {
        Command::Hatch { amount, days, seed, json } => hatch(&engine, &amount, &days, seed, json),
        Command::Guide => {
            guide(&engine);
            Ok(())
        }
        Command::Simulate { amount, days, count, seed } => {
            simulate(&engine, &amount, &days, count, seed)
        }
        Command::Validate { file } => validate(&engine, &file),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<HatchConfig> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    match path {
        Some(path) => HatchConfig::load_from_file(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(HatchConfig::default()),
    }
}

fn make_rng(seed: Option<u64>) -> RandomGenerator {
    match seed {
        Some(seed) => RandomGenerator::with_seed(seed),
        None => RandomGenerator::new(),
    }
}

fn hatch(
    engine: &HatchEngine,
    amount: &str,
    days: &str,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let request = HatchRequest::parse(amount, days)?;
    let mut rng = make_rng(seed);
    let outcome = engine.hatch(&request, &mut rng);
    info!("种子 {} 孵化 {}", rng.get_seed(), outcome.record.name);

    if json {
        println!("{}", engine.export_creature_data(&outcome.record)?);
        return Ok(());
    }

    let now = chrono::Utc::now();
    let record = &outcome.record;

    println!("{} ({})", record.name, outcome.rarity.display_name());
    println!("  species:   {}", record.species_mix.join(" × "));
    println!("  score:     {}", outcome.score);
    println!(
        "  STR {}  AGI {}  INT {}  MAG {}  (total {})",
        record.attributes.strength,
        record.attributes.agility,
        record.attributes.intelligence,
        record.attributes.magic,
        record.attributes.total()
    );
    println!("  portrait:  {}", outcome.portrait);
    println!("  egg:       {}", outcome.egg_video);
    match LockSchedule::start(now, request.lock_duration_days()) {
        Ok(schedule) => {
            println!("  unlocks:   {} ({})", schedule.unlock_at.to_rfc3339(), schedule.remaining(now));
        }
        // 结果仍然有效, 只是解锁日期无法表示
        Err(e) => {
            warn!("无法计算解锁时间: {}", e);
            println!("  unlocks:   beyond the supported calendar range");
        }
    }
    println!(
        "Your {} creature will hatch in {} days.",
        outcome.rarity,
        request.lock_duration_days()
    );
    Ok(())
}

fn guide(engine: &HatchEngine) {
    println!("Rarity guide (points = lock days × token amount):");
    for entry in engine.rarity_guide() {
        println!("  {:<10} {:<16} {}", entry.title, entry.requirement, entry.color);
    }
    println!("Lock presets:");
    for (_, label) in lock_presets() {
        println!("  {}", label);
    }
}

fn simulate(
    engine: &HatchEngine,
    amount: &str,
    days: &str,
    count: u32,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    anyhow::ensure!(count > 0, "count must be positive");
    let request = HatchRequest::parse(amount, days)?;
    let mut rng = make_rng(seed);

    let (triples, total_attributes) = profile!("simulate", {
        let mut triples = 0u32;
        let mut total_attributes = 0u64;
        for _ in 0..count {
            let outcome = engine.hatch(&request, &mut rng);
            if outcome.record.species_mix.len() == 3 {
                triples += 1;
            }
            total_attributes += outcome.record.attributes.total();
        }
        (triples, total_attributes)
    });

    println!("rarity:            {}", engine.predict_rarity(&request));
    println!("hatches:           {}", count);
    println!("3-species mixes:   {:.3}", triples as f64 / count as f64);
    println!("avg attribute sum: {:.2}", total_attributes as f64 / count as f64);
    println!("random draws:      {}", rng.get_stats().total_draws);
    Ok(())
}

fn validate(engine: &HatchEngine, file: &Path) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let record = engine.import_creature_data(&data)?;
    println!("{} is valid ({})", record.name, record.rarity);
    Ok(())
}
