//! 内容源配置管理

use std::{path::PathBuf, time::Duration};

/// 内容快照重新拉取周期：12小时（内容源为半日级更新，不按请求拉取）
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(43_200);

/// 内容源
#[derive(Debug, Clone)]
pub enum SourceOrigin {
    LocalFile(PathBuf),   // 本地快照文件（运行时）
    RemoteCustom(String), // 自定义远程快照 URL
}

/// 网络拉取相关选项
#[derive(Debug, Clone)]
pub struct RemoteOptions {
    pub url: String,        // 快照 URL
    pub timeout: Duration,  // HTTP 超时
    pub retry: RetryPolicy, // 重试策略
}

/// 重试策略
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    Never,     // 不重试
    Times(u8), // 固定次数重试（不含第一次）
}

impl RetryPolicy {
    /// 换算为最大重试次数
    pub fn max_retries(&self) -> usize {
        match self {
            RetryPolicy::Never => 0,
            RetryPolicy::Times(n) => *n as usize,
        }
    }
}

/// 核心内容源选项
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// 仅对远程源有效：是否在启动时检查更新
    pub check_update: bool,
    /// 快照缓存目录
    pub cache_dir: PathBuf,
    /// 快照视为过期的时间间隔
    pub refresh_interval: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            check_update: true,
            cache_dir: PathBuf::from(".cache/linknav"),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

/// 完整内容源配置
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub origin: SourceOrigin,
    pub options: SourceOptions,
    pub remote_options: Option<RemoteOptions>,
}

impl SourceConfig {
    /// 本地快照文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: SourceOrigin::LocalFile(path.into()),
            options: SourceOptions::default(),
            remote_options: None,
        }
    }

    /// 自定义远程快照源
    pub fn remote_custom(url: impl Into<String>, timeout: Duration, retry: RetryPolicy) -> Self {
        let url = url.into();
        Self {
            origin: SourceOrigin::RemoteCustom(url.clone()),
            options: SourceOptions::default(),
            remote_options: Some(RemoteOptions {
                url,
                timeout,
                retry,
            }),
        }
    }

    /// 覆盖缓存目录
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.cache_dir = dir.into();
        self
    }

    /// 覆盖快照过期周期
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.options.refresh_interval = interval;
        self
    }
}
