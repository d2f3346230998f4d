//! 配置模块：内容源配置与站点配置
pub mod site;
pub mod source;

// 统一导出核心公共接口
pub use site::SiteConfig;
pub use source::{
    RemoteOptions, RetryPolicy, SourceConfig, SourceOptions, SourceOrigin,
    DEFAULT_REFRESH_INTERVAL,
};
