// 孵化结果生成器库入口
// 开发心理：锁定代币孵化生物的纯逻辑，随机源由调用方注入
// 架构：core 基础设施 + creature_engine 生成逻辑 + utils 通用工具

pub mod core;
pub mod creature_engine;
pub mod utils;

// 重新导出核心类型
pub use crate::core::{HatchConfig, HatchError, LockSchedule, LockStatus, Result};
pub use crate::creature_engine::{
    AttributeSet, CreatureRecord, HatchEngine, HatchOutcome, HatchRequest, RarityTier,
};
pub use crate::utils::{RandomGenerator, RandomManager};

pub const VERSION: &str = "0.1.0";
pub const NAME: &str = "hatchery";

// 便利函数
pub fn init() -> Result<()> {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("hatchery=info"),
    )
    .try_init();

    log::info!("孵化器初始化完成 v{}", VERSION);
    Ok(())
}

// 性能分析工具
pub struct PerformanceProfiler {
    start_time: std::time::Instant,
    name: String,
}

impl PerformanceProfiler {
    pub fn new(name: &str) -> Self {
        Self {
            start_time: std::time::Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

impl Drop for PerformanceProfiler {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        if elapsed.as_millis() > 1 {
            log::debug!("性能: {} 耗时 {:.2}ms", self.name, elapsed.as_secs_f64() * 1000.0);
        }
    }
}

// 便利宏
#[macro_export]
macro_rules! profile {
    ($name:expr, $code:block) => {
        {
            let _profiler = $crate::PerformanceProfiler::new($name);
            $code
        }
    };
}

// 错误处理便利宏
#[macro_export]
macro_rules! hatch_bail {
    ($variant:ident, $msg:literal $(,)?) => {
        return Err($crate::core::HatchError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::core::HatchError::$variant(format!($fmt, $($arg)*)))
    };
}
