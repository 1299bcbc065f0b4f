//! 组件层统一错误定义
//!
//! 聚焦序列化、标识解析、版本前置条件、存储、作业提交与生命周期钩子等最小必要集合，
//! 便于在各实现层统一转换为 `ComponentError`。
//! 生命周期钩子的错误原样向调用方传播，由调用方决定重试或中止。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ComponentError {
    // --- 序列化/解析 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },

    // --- 标识与状态 ---
    #[error("version not yet set for component uniqueness: type_id={type_id}, identifier={identifier}")]
    VersionNotSet { type_id: String, identifier: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 存储/协调者 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("component store error: {reason}")]
    Store { reason: String },
    #[error("job submission failed: job_id={job_id}, reason={reason}")]
    JobSubmission { job_id: String, reason: String },
}

impl ComponentError {
    /// 是否为“版本尚未设置”的前置条件错误
    pub fn is_version_not_set(&self) -> bool {
        matches!(self, ComponentError::VersionNotSet { .. })
    }
}

/// 统一 Result 类型别名
pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<uuid::Error> for ComponentError {
    fn from(err: uuid::Error) -> Self {
        ComponentError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::num::ParseIntError> for ComponentError {
    fn from(err: std::num::ParseIntError) -> Self {
        ComponentError::Parse {
            reason: err.to_string(),
        }
    }
}
