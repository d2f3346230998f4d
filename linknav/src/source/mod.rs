//! 内容源模块：快照模型、拉取契约、本地快照与缓存管理
pub mod cache;
pub mod loader;
pub mod local;
#[cfg(feature = "remote-source")]
pub mod remote;

use linknav_engine::{CategoryRecord, LinkRecord};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::LnResult;

/// 内容快照：一次拉取得到的全部记录
/// 注意：相邻两次快照之间分类/链接ID不保证稳定，
/// 下游每次全量重建，不做跨快照的身份假设
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub config: SiteConfig,
}

/// 内容源契约（外部内容存储的抽象）
/// 实现约定：fetch_categories 仅返回启用的分类
pub trait ContentSource {
    /// 拉取链接记录（保持内容源顺序）
    fn fetch_links(&self) -> LnResult<Vec<LinkRecord>>;

    /// 拉取启用的分类记录（顺序即渲染顺序）
    fn fetch_categories(&self) -> LnResult<Vec<CategoryRecord>>;

    /// 拉取站点配置（透传数据）
    fn fetch_site_config(&self) -> LnResult<SiteConfig>;

    /// 一次性拉取完整快照（默认按三个子接口组合）
    fn fetch_snapshot(&self) -> LnResult<ContentSnapshot> {
        Ok(ContentSnapshot {
            links: self.fetch_links()?,
            categories: self.fetch_categories()?,
            config: self.fetch_site_config()?,
        })
    }
}

// 统一导出核心公共接口
pub use cache::{CachedSnapshot, SnapshotCacheManager};
pub use loader::{decide_cache_use, etag_unchanged, CacheDecision, SnapshotLoader};
pub use local::LocalFileSource;
#[cfg(feature = "remote-source")]
pub use remote::RemoteSnapshotFetcher;
