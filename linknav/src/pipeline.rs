//! Page aggregation pipeline
//! 页面聚合流水线
//! 核心职责：
//! 1. 快照 → 归一化链接 → 分类层级 的一站式组装
//! 2. 页面统计（分类数/书签数/二级分组数）
//! 3. 可随新快照随时重建，不持有跨快照状态
//!
//! 设计说明：快照内分类/链接ID不保证跨拉取稳定，
//! 每次构建均为全量重建，输出只读 PageModel

use std::time::{SystemTime, UNIX_EPOCH};

use linknav_engine::{build_hierarchy, normalize_links, CategoryHierarchy};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{SiteConfig, SourceConfig};
use crate::error::LnResult;
use crate::source::{ContentSnapshot, ContentSource, SnapshotLoader};

/// 页面统计（展示层仪表卡片数据）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageStats {
    pub categories: usize,
    pub bookmarks: usize,
    pub sub_categories: usize,
}

/// 页面模型：一次聚合的完整只读输出
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PageModel {
    pub hierarchy: CategoryHierarchy,
    pub stats: PageStats,
    pub site: SiteConfig,
    /// 构建时间（Unix秒）
    pub generated_at: u64,
}

/// 页面构建器（无状态工具类）
pub struct PageBuilder;

impl PageBuilder {
    /// 从内容快照构建页面模型
    /// 流程：启用分类集合 → 归一化+过滤 → 层级构建 → 统计
    pub fn build(snapshot: &ContentSnapshot) -> PageModel {
        let enabled: FxHashSet<String> = snapshot
            .categories
            .iter()
            .map(|c| c.name.clone())
            .collect();

        let links = normalize_links(&snapshot.links, &enabled);
        Self::audit_link_urls(&links);

        let hierarchy = build_hierarchy(&links, &snapshot.categories);
        let stats = PageStats {
            categories: hierarchy.category_count(),
            bookmarks: hierarchy.link_count(),
            sub_categories: hierarchy.sub_category_count(),
        };

        PageModel {
            hierarchy,
            stats,
            site: snapshot.config.clone(),
            generated_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// 从内容源拉取并构建
    pub fn from_source(source: &impl ContentSource) -> LnResult<PageModel> {
        let snapshot = source.fetch_snapshot()?;
        Ok(Self::build(&snapshot))
    }

    /// 按内容源配置加载（本地/缓存/远程调度）并构建
    pub async fn from_config(config: &SourceConfig) -> LnResult<PageModel> {
        let snapshot = SnapshotLoader::new().load(config).await?;
        Ok(Self::build(&snapshot))
    }

    /// 链接URL合法性巡检：仅debug日志，畸形URL不剔除（数据质量提示）
    fn audit_link_urls(links: &[linknav_engine::LinkRecord]) {
        for link in links {
            if Url::parse(&link.url).is_err() {
                log::debug!("Link [{}] URL [{}] is not a valid absolute URL", link.id, link.url);
            }
        }
    }
}
