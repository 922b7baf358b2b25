// 锁定计时模块 - 孵化倒计时
// 开发心理：解锁时间 = 锁定时间 + 锁定天数，剩余时间与进度都以调用方传入的"当前时间"计算
// 不读取系统时钟，便于测试

use std::fmt;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{HatchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSchedule {
    pub locked_at: DateTime<Utc>,
    pub unlock_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    Ready,
    Remaining { days: i64, hours: i64 },
}

impl fmt::Display for LockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockStatus::Ready => write!(f, "Ready to hatch!"),
            LockStatus::Remaining { days, hours } => write!(f, "{}d {}h remaining", days, hours),
        }
    }
}

impl LockSchedule {
    /// 解锁时间超出 chrono 可表示范围时返回 InvalidDuration
    pub fn start(locked_at: DateTime<Utc>, lock_duration_days: u32) -> Result<Self> {
        let unlock_at = Duration::try_days(i64::from(lock_duration_days))
            .and_then(|lock| locked_at.checked_add_signed(lock))
            .ok_or_else(|| {
                HatchError::InvalidDuration(format!(
                    "unlock date for a {} day lock is out of range",
                    lock_duration_days
                ))
            })?;
        Ok(Self { locked_at, unlock_at })
    }

    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        now >= self.unlock_at
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> LockStatus {
        let left = self.unlock_at - now;
        if left <= Duration::zero() {
            return LockStatus::Ready;
        }
        LockStatus::Remaining {
            days: left.num_days(),
            hours: left.num_hours() % 24,
        }
    }

    /// 已经过的百分比, 限制在 [0, 100]
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        let total = (self.unlock_at - self.locked_at).num_milliseconds();
        if total <= 0 {
            return 100.0;
        }
        let elapsed = (now - self.locked_at).num_milliseconds();
        (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }
}
