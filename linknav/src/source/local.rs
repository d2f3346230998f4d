//! Local snapshot source
//! 本地快照内容源
//! 核心特性：
//! 1. 单JSON文件承载完整快照（links + categories + config）
//! 2. 字段残缺兼容：缺失段落回落默认值，不报错
//! 3. 适用场景：静态部署、离线调试、测试夹具

use std::fs;
use std::path::{Path, PathBuf};

use linknav_engine::{CategoryRecord, LinkRecord};

use super::{ContentSnapshot, ContentSource};
use crate::config::SiteConfig;
use crate::error::{LinknavError, LnResult};

/// 本地快照文件内容源
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取并反序列化快照文件
    fn load_snapshot(&self) -> LnResult<ContentSnapshot> {
        let data = fs::read(&self.path).map_err(|e| {
            LinknavError::SourceLoadError(format!(
                "本地快照[{}]读取失败：{}",
                self.path.display(),
                e
            ))
        })?;
        let snapshot: ContentSnapshot = serde_json::from_slice(&data)?;
        log::debug!(
            "Loaded snapshot from [{}]: {} links, {} categories",
            self.path.display(),
            snapshot.links.len(),
            snapshot.categories.len()
        );
        Ok(snapshot)
    }
}

impl ContentSource for LocalFileSource {
    fn fetch_links(&self) -> LnResult<Vec<LinkRecord>> {
        Ok(self.load_snapshot()?.links)
    }

    fn fetch_categories(&self) -> LnResult<Vec<CategoryRecord>> {
        Ok(self.load_snapshot()?.categories)
    }

    fn fetch_site_config(&self) -> LnResult<SiteConfig> {
        Ok(self.load_snapshot()?.config)
    }

    fn fetch_snapshot(&self) -> LnResult<ContentSnapshot> {
        // 覆写默认实现：单文件源一次读取即可，避免三次IO
        self.load_snapshot()
    }
}
