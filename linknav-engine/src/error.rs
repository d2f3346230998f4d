//! 全局错误类型定义
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    // 主题相关错误
    #[error("主题配置无效：{0}")]
    ThemeConfigError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
}

// 全局Result类型
pub type EngineResult<T> = Result<T, EngineError>;
