use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::ContentSnapshot;
use crate::config::SourceConfig;
use crate::error::{LinknavError, LnResult};

/// 缓存文件名（cache_dir 下固定位置）
const SNAPSHOT_CACHE_FILE: &str = "content_snapshot.json";

/// 带拉取元信息的缓存快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSnapshot {
    /// 拉取时间（Unix秒）
    pub fetched_at: u64,
    /// 拉取时远程返回的ETag（本地源为None）
    #[serde(default)]
    pub etag: Option<String>,
    pub snapshot: ContentSnapshot,
}

impl CachedSnapshot {
    /// 是否仍在有效期内
    pub fn is_fresh(&self, refresh_interval: Duration) -> bool {
        let age = now_secs().saturating_sub(self.fetched_at);
        age <= refresh_interval.as_secs()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 快照缓存管理器
pub struct SnapshotCacheManager;

impl SnapshotCacheManager {
    fn cache_path(config: &SourceConfig) -> PathBuf {
        config.options.cache_dir.join(SNAPSHOT_CACHE_FILE)
    }

    // 同步加载缓存条目（不判过期，过期判定交调用方）
    pub fn load_entry(config: &SourceConfig) -> LnResult<Option<CachedSnapshot>> {
        let path = Self::cache_path(config);
        if !path.exists() {
            return Ok(None);
        }
        let cache_data: Vec<u8> = fs::read(&path)?;
        Ok(Some(serde_json::from_slice(&cache_data)?))
    }

    // 同步保存缓存
    pub fn save_to_cache(
        config: &SourceConfig,
        snapshot: &ContentSnapshot,
        etag: Option<String>,
    ) -> LnResult<()> {
        let dir = &config.options.cache_dir;
        fs::create_dir_all(dir).map_err(|e| {
            LinknavError::SnapshotCacheError(format!(
                "缓存目录[{}]创建失败：{}",
                dir.display(),
                e
            ))
        })?;

        let cached = CachedSnapshot {
            fetched_at: now_secs(),
            etag,
            snapshot: snapshot.clone(),
        };
        fs::write(Self::cache_path(config), serde_json::to_vec(&cached)?)?;
        Ok(())
    }

    /// 远程ETag未变时仅续期缓存，不重新下载
    pub fn touch(config: &SourceConfig) -> LnResult<()> {
        let Some(mut entry) = Self::load_entry(config)? else {
            return Err(LinknavError::SnapshotCacheError(
                "无缓存可续期".to_string(),
            ));
        };
        entry.fetched_at = now_secs();
        fs::write(Self::cache_path(config), serde_json::to_vec(&entry)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linknav_engine::LinkRecord;
    use std::env;

    fn temp_config(name: &str) -> SourceConfig {
        let dir = env::temp_dir().join(format!("linknav-cache-{}-{}", name, std::process::id()));
        SourceConfig::local_file("unused.json").with_cache_dir(dir)
    }

    fn snapshot() -> ContentSnapshot {
        ContentSnapshot {
            links: vec![LinkRecord {
                id: "l1".into(),
                name: "Rust".into(),
                url: "https://www.rust-lang.org".into(),
                category1: "开发".into(),
                category2: "语言".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let config = temp_config("roundtrip");
        let original = snapshot();

        SnapshotCacheManager::save_to_cache(&config, &original, Some("etag-1".into()))
            .expect("save");
        let entry = SnapshotCacheManager::load_entry(&config)
            .expect("entry")
            .expect("present");
        assert_eq!(entry.snapshot, original);
        assert_eq!(entry.etag.as_deref(), Some("etag-1"));
        assert!(entry.is_fresh(config.options.refresh_interval));

        let _ = fs::remove_dir_all(&config.options.cache_dir);
    }

    #[test]
    fn test_missing_cache_is_none() {
        let config = temp_config("missing");
        let loaded = SnapshotCacheManager::load_entry(&config).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_expired_entry_is_stale_but_still_readable() {
        let config = temp_config("expired");
        SnapshotCacheManager::save_to_cache(&config, &snapshot(), None).expect("save");

        // 人为回拨拉取时间，触发过期判定
        let path = SnapshotCacheManager::cache_path(&config);
        let data = fs::read(&path).expect("read cache");
        let mut cached: CachedSnapshot = serde_json::from_slice(&data).expect("parse cache");
        cached.fetched_at = cached.fetched_at.saturating_sub(86_400 * 2);
        fs::write(&path, serde_json::to_vec(&cached).expect("serialize")).expect("rewrite");

        // 过期条目仍可读取（ETag续期路径依赖它）
        let entry = SnapshotCacheManager::load_entry(&config)
            .expect("entry")
            .expect("present");
        assert!(!entry.is_fresh(config.options.refresh_interval));

        let _ = fs::remove_dir_all(&config.options.cache_dir);
    }

    #[test]
    fn test_touch_renews_expired_entry() {
        let config = temp_config("touch");
        SnapshotCacheManager::save_to_cache(&config, &snapshot(), Some("e".into())).expect("save");

        let path = SnapshotCacheManager::cache_path(&config);
        let data = fs::read(&path).expect("read cache");
        let mut cached: CachedSnapshot = serde_json::from_slice(&data).expect("parse cache");
        cached.fetched_at = cached.fetched_at.saturating_sub(86_400 * 2);
        fs::write(&path, serde_json::to_vec(&cached).expect("serialize")).expect("rewrite");

        SnapshotCacheManager::touch(&config).expect("touch");
        let entry = SnapshotCacheManager::load_entry(&config)
            .expect("entry")
            .expect("present");
        assert!(entry.is_fresh(config.options.refresh_interval));

        let _ = fs::remove_dir_all(&config.options.cache_dir);
    }

    #[test]
    fn test_touch_without_cache_is_error() {
        let config = temp_config("touch-missing");
        assert!(matches!(
            SnapshotCacheManager::touch(&config),
            Err(LinknavError::SnapshotCacheError(_))
        ));
    }
}
