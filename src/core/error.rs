// 错误处理系统
// 开发心理：孵化流程只有三处可能失败：请求校验、配置加载、记录校验
// 生成过程本身对合法输入是全函数，不产生错误

use std::io;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HatchError {
    #[error("Invalid token amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid lock duration: {0}")]
    InvalidDuration(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, HatchError>;

impl HatchError {
    /// 调用方输入有误（应提示用户修正），而非系统故障
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HatchError::InvalidAmount(_) | HatchError::InvalidDuration(_)
        )
    }
}

// 错误转换实现
impl From<io::Error> for HatchError {
    fn from(error: io::Error) -> Self {
        HatchError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for HatchError {
    fn from(error: serde_json::Error) -> Self {
        HatchError::SerializationError(error.to_string())
    }
}

impl From<toml::de::Error> for HatchError {
    fn from(error: toml::de::Error) -> Self {
        HatchError::ConfigError(error.to_string())
    }
}

impl From<toml::ser::Error> for HatchError {
    fn from(error: toml::ser::Error) -> Self {
        HatchError::SerializationError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        assert!(HatchError::InvalidAmount("-1".into()).is_input_error());
        assert!(HatchError::InvalidDuration("0".into()).is_input_error());
        assert!(!HatchError::ConfigError("bad".into()).is_input_error());
    }

    #[test]
    fn test_error_display() {
        let err = HatchError::InvalidDuration("0 days".to_string());
        assert_eq!(err.to_string(), "Invalid lock duration: 0 days");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: HatchError = io_err.into();
        assert!(matches!(err, HatchError::IoError(_)));
    }
}
