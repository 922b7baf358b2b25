// 核心模块 - 孵化器基础设施
// 开发心理：错误类型、平衡配置、锁定计时，供生成器与命令行共用

pub mod error;
pub mod config;
pub mod time;

// 重新导出核心类型
pub use error::{HatchError, Result};
pub use config::HatchConfig;
pub use time::{LockSchedule, LockStatus};
