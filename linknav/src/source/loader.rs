//! Snapshot loader
//! 快照加载器：按配置统一调度本地读取/缓存/远程拉取
//! 加载策略：
//! 1. 本地源：直接读取快照文件
//! 2. 远程源：缓存有效期内直接使用缓存；过期后先比对ETag，
//!    未变化仅续期缓存，变化才全量下载并回写缓存
//! 3. remote-source 特性未启用时远程源返回错误

use super::cache::CachedSnapshot;
use super::{ContentSnapshot, ContentSource, LocalFileSource};
use crate::config::{SourceConfig, SourceOptions, SourceOrigin};
use crate::error::{LinknavError, LnResult};
#[cfg(feature = "remote-source")]
use super::{RemoteSnapshotFetcher, SnapshotCacheManager};

/// 缓存使用裁决
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDecision {
    /// 直接使用缓存（有效期内，或已关闭更新检查）
    UseCache,
    /// 缓存过期但携带ETag：先比对远程ETag再决定是否下载
    Revalidate,
    /// 全量拉取（无缓存，或过期缓存无ETag可比对）
    FetchFull,
}

/// 缓存使用裁决（纯函数，网络无关）
/// 规则：
/// 1. 有效期内 → UseCache
/// 2. 过期 + check_update关闭 → UseCache（陈旧缓存也继续用）
/// 3. 过期 + 有ETag → Revalidate
/// 4. 其余（无缓存 / 过期无ETag）→ FetchFull
pub fn decide_cache_use(entry: Option<&CachedSnapshot>, options: &SourceOptions) -> CacheDecision {
    match entry {
        Some(cached) if cached.is_fresh(options.refresh_interval) => CacheDecision::UseCache,
        Some(_) if !options.check_update => CacheDecision::UseCache,
        Some(cached) if cached.etag.is_some() => CacheDecision::Revalidate,
        _ => CacheDecision::FetchFull,
    }
}

/// 远程ETag是否与缓存一致（远程拿不到ETag视为已变化，退化为全量拉取）
pub fn etag_unchanged(cached_etag: &str, remote_etag: Option<&str>) -> bool {
    remote_etag == Some(cached_etag)
}

#[derive(Default)]
pub struct SnapshotLoader {
    #[cfg(feature = "remote-source")]
    remote_fetcher: RemoteSnapshotFetcher,
}

impl SnapshotLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, config: &SourceConfig) -> LnResult<ContentSnapshot> {
        match &config.origin {
            SourceOrigin::LocalFile(path) => LocalFileSource::new(path).fetch_snapshot(),
            SourceOrigin::RemoteCustom(_) => self.load_remote(config).await,
        }
    }

    #[cfg(feature = "remote-source")]
    async fn load_remote(&self, config: &SourceConfig) -> LnResult<ContentSnapshot> {
        let remote_opts = config
            .remote_options
            .as_ref()
            .ok_or_else(|| LinknavError::SourceLoadError("缺少远程配置".into()))?;

        let cached_entry = SnapshotCacheManager::load_entry(config)?;
        let decision = decide_cache_use(cached_entry.as_ref(), &config.options);

        if let Some(entry) = &cached_entry {
            match decision {
                CacheDecision::UseCache => {
                    log::debug!("Using cached snapshot, remote fetch skipped");
                    return Ok(entry.snapshot.clone());
                }
                CacheDecision::Revalidate => {
                    let client = RemoteSnapshotFetcher::build_client(remote_opts)?;
                    let remote_etag = self
                        .remote_fetcher
                        .get_remote_etag(&client, &remote_opts.url, &remote_opts.retry)
                        .await?;
                    if let Some(cached_etag) = &entry.etag {
                        if etag_unchanged(cached_etag, remote_etag.as_deref()) {
                            log::info!("Remote snapshot unchanged (ETag match), cache renewed");
                            SnapshotCacheManager::touch(config)?;
                            return Ok(entry.snapshot.clone());
                        }
                    }
                }
                CacheDecision::FetchFull => {}
            }
        }

        // 全量拉取并回写缓存
        let client = RemoteSnapshotFetcher::build_client(remote_opts)?;
        let snapshot = self
            .remote_fetcher
            .fetch_snapshot(&client, remote_opts)
            .await?;
        let etag = self
            .remote_fetcher
            .get_remote_etag(&client, &remote_opts.url, &remote_opts.retry)
            .await?;
        SnapshotCacheManager::save_to_cache(config, &snapshot, etag)?;
        log::info!(
            "Remote snapshot fetched: {} links, {} categories",
            snapshot.links.len(),
            snapshot.categories.len()
        );
        Ok(snapshot)
    }

    #[cfg(not(feature = "remote-source"))]
    async fn load_remote(&self, _config: &SourceConfig) -> LnResult<ContentSnapshot> {
        Err(LinknavError::SourceLoadError(
            "remote-source feature 未启用".into(),
        ))
    }
}
