//! 全局错误类型定义
use linknav_engine::EngineError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinknavError {
    // 内容源相关错误
    #[error("内容源加载失败：{0}")]
    SourceLoadError(String),
    #[error("快照缓存失败：{0}")]
    SnapshotCacheError(String),

    // 网络相关错误
    #[error("网络相关错误：{0}")]
    NetworkError(String),

    // 核心引擎错误
    #[error("引擎错误：{0}")]
    EngineError(#[from] EngineError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type LnResult<T> = Result<T, LinknavError>;
