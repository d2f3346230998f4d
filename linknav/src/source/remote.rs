//! Remote snapshot fetcher module
//! 远程快照拉取工具
//! 核心特性：
//! 1. 纯异步设计（无block_on，基于tokio异步运行时）
//! 2. 可配置重试策略（Never/Times(n)）
//! 3. ETag缓存控制（支持弱ETag解析，W/前缀和引号处理）
//! 4. 特性条件编译（remote-source特性控制功能开关）

use reqwest::Client;

use super::ContentSnapshot;
use crate::config::{RemoteOptions, RetryPolicy};
use crate::error::{LinknavError, LnResult};

/// 标准化ETag：移除弱校验前缀 W/ 与两侧引号
pub fn normalize_etag(raw: &str) -> String {
    raw.trim()
        .trim_start_matches("W/")
        .trim_matches('"')
        .to_string()
}

/// 远程快照拉取器
/// 设计：无状态工具类，专注于快照拉取、ETag获取和重试逻辑
#[derive(Default)]
pub struct RemoteSnapshotFetcher;

impl RemoteSnapshotFetcher {
    /// 通用异步重试逻辑（纯异步，无阻塞）
    /// 参数：
    /// - max_retries: 最大重试次数（0表示不重试）
    /// - func: 异步闭包，返回LnResult<T>
    /// 返回：执行结果 | 最后一次错误
    async fn simple_retry<F, Fut, T>(&self, max_retries: usize, mut func: F) -> LnResult<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = LnResult<T>> + Send + 'static,
    {
        let mut last_err: Option<LinknavError> = None;

        for attempt in 0..=max_retries {
            match func().await {
                Ok(res) => return Ok(res),
                Err(e) => {
                    last_err = Some(e);
                    if attempt < max_retries {
                        log::warn!(
                            "Request failed, retrying (attempt {}/{})",
                            attempt + 1,
                            max_retries
                        );
                        tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            LinknavError::SourceLoadError("All retry attempts exhausted".to_string())
        }))
    }

    /// 获取远程快照的ETag（HEAD请求，轻量）
    /// 失败时返回Ok(None)而非报错：拿不到ETag只是退化为全量拉取
    pub async fn get_remote_etag(
        &self,
        client: &Client,
        url: &str,
        retry_policy: &RetryPolicy,
    ) -> LnResult<Option<String>> {
        let result = self
            .simple_retry(retry_policy.max_retries(), || {
                let client = client.clone();
                let url = url.to_string();
                async move {
                    let resp = client
                        .head(&url)
                        .send()
                        .await
                        .map_err(|e| LinknavError::NetworkError(format!("HEAD {} 失败：{}", url, e)))?;
                    Ok(resp
                        .headers()
                        .get(reqwest::header::ETAG)
                        .and_then(|v| v.to_str().ok())
                        .map(normalize_etag))
                }
            })
            .await;

        match result {
            Ok(etag) => Ok(etag),
            Err(e) => {
                log::warn!("Failed to fetch remote ETag for [{}]: {}", url, e);
                Ok(None)
            }
        }
    }

    /// 拉取远程快照（GET + JSON解析 + 重试）
    /// 参数：
    /// - client: reqwest异步客户端
    /// - opts: 远程源选项（URL/超时/重试）
    /// 返回：内容快照 | 错误
    pub async fn fetch_snapshot(
        &self,
        client: &Client,
        opts: &RemoteOptions,
    ) -> LnResult<ContentSnapshot> {
        let url = opts.url.clone();
        self.simple_retry(opts.retry.max_retries(), move || {
            let client = client.clone();
            let url = url.clone();
            async move {
                let resp = client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| LinknavError::NetworkError(format!("GET {} 失败：{}", url, e)))?;

                if !resp.status().is_success() {
                    return Err(LinknavError::SourceLoadError(format!(
                        "远程快照[{}]返回非成功状态：{}",
                        url,
                        resp.status()
                    )));
                }

                resp.json::<ContentSnapshot>().await.map_err(|e| {
                    LinknavError::SourceLoadError(format!("远程快照[{}]解析失败：{}", url, e))
                })
            }
        })
        .await
    }

    /// 构建带超时的reqwest客户端
    pub fn build_client(opts: &RemoteOptions) -> LnResult<Client> {
        Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(|e| LinknavError::NetworkError(format!("HTTP客户端构建失败：{}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_etag_strips_weak_prefix_and_quotes() {
        assert_eq!(normalize_etag("W/\"abc123\""), "abc123");
        assert_eq!(normalize_etag("\"abc123\""), "abc123");
        assert_eq!(normalize_etag("abc123"), "abc123");
        assert_eq!(normalize_etag("  W/\"x\"  "), "x");
    }

    #[tokio::test]
    async fn test_simple_retry_returns_first_success() {
        let fetcher = RemoteSnapshotFetcher;
        let result: LnResult<u32> = fetcher.simple_retry(2, || async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_simple_retry_keeps_last_error() {
        let fetcher = RemoteSnapshotFetcher;
        let result: LnResult<u32> = fetcher
            .simple_retry(1, || async {
                Err(LinknavError::NetworkError("boom".into()))
            })
            .await;
        assert!(matches!(result, Err(LinknavError::NetworkError(_))));
    }
}
