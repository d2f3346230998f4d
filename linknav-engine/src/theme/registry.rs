//! Style registry
//! 样式注册表：主题样式节点的唯一属主
//! 核心职责：
//! 1. 按稳定ID维护每个模式的样式节点（查重复用，不重复创建）
//! 2. 幂等挂载：重复调用全量覆盖节点内容，节点数不变
//! 3. 环境守卫：无样式宿主（非浏览器环境）时整体no-op
//!
//! 设计说明：节点的字符串ID查找集中在本注册表内部，
//! 调用方一律通过 mount 接口，不允许散落的按ID查找

use super::css::render_mode_block;
use super::tokens::{ThemeMode, ThemeTokenMap};
use rustc_hash::FxHashMap;

/// 样式宿主（文档环境接口）
/// 浏览器环境对应 document.head 下的 style 元素集合；
/// 测试与服务端渲染使用内存实现
pub trait StyleHost {
    /// 按稳定ID创建或更新样式节点，内容全量覆盖
    fn upsert_style(&mut self, node_id: &str, css: &str);
}

/// 内存样式宿主：ID → 内容映射 + 插入顺序
/// 用途：测试断言、服务端渲染时输出 `<style>` 标签
#[derive(Debug, Default, Clone)]
pub struct MemoryStyleHost {
    order: Vec<String>,
    nodes: FxHashMap<String, String>,
}

impl MemoryStyleHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn content(&self, node_id: &str) -> Option<&str> {
        self.nodes.get(node_id).map(|s| s.as_str())
    }

    /// 按挂载顺序遍历 (节点ID, CSS内容)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|id| (id.as_str(), self.nodes[id].as_str()))
    }
}

impl StyleHost for MemoryStyleHost {
    fn upsert_style(&mut self, node_id: &str, css: &str) {
        if !self.nodes.contains_key(node_id) {
            self.order.push(node_id.to_string());
        }
        self.nodes.insert(node_id.to_string(), css.to_string());
    }
}

/// 样式注册表：持有主题令牌表，负责向宿主挂载派生样式节点
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    theme: ThemeTokenMap,
}

impl StyleRegistry {
    pub fn new(theme: ThemeTokenMap) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &ThemeTokenMap {
        &self.theme
    }

    /// 样式节点稳定ID：`theme-{主题名}-{模式}`
    pub fn style_node_id(&self, mode: ThemeMode) -> String {
        format!("theme-{}-{}", self.theme.name, mode.suffix())
    }

    /// 挂载指定模式集合的样式节点
    /// 特性：
    /// 1. 幂等：每模式恰好一个节点，重复调用覆盖内容而非新建
    /// 2. 未声明令牌的模式跳过（debug日志）
    /// 3. host 为 None（非浏览器环境）时整体no-op
    pub fn mount(&self, host: Option<&mut dyn StyleHost>, modes: &[ThemeMode]) {
        let Some(host) = host else {
            // 环境守卫：无文档可挂载
            log::debug!(
                "No style host available, skipping theme [{}] mount",
                self.theme.name
            );
            return;
        };

        for &mode in modes {
            let Some(tokens) = self.theme.tokens_for(mode) else {
                log::debug!(
                    "Theme [{}] declares no tokens for mode [{}], skipped",
                    self.theme.name,
                    mode.suffix()
                );
                continue;
            };

            let css = render_mode_block(mode, tokens);
            host.upsert_style(&self.style_node_id(mode), &css);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> ThemeTokenMap {
        ThemeTokenMap::new("simple", "简约")
            .with_token(ThemeMode::Light, "background", "hsl(0, 0%, 100%)")
            .with_token(ThemeMode::Light, "radius", "0.5rem")
            .with_token(ThemeMode::Dark, "background", "hsl(222, 47%, 11%)")
    }

    #[test]
    fn test_mount_creates_one_node_per_mode() {
        let registry = StyleRegistry::new(theme());
        let mut host = MemoryStyleHost::new();

        registry.mount(Some(&mut host), &[ThemeMode::Light, ThemeMode::Dark]);

        assert_eq!(host.node_count(), 2);
        assert!(host.content("theme-simple-light").is_some());
        assert!(host.content("theme-simple-dark").is_some());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let registry = StyleRegistry::new(theme());
        let mut host = MemoryStyleHost::new();

        registry.mount(Some(&mut host), &[ThemeMode::Light]);
        let first = host.content("theme-simple-light").unwrap().to_string();

        registry.mount(Some(&mut host), &[ThemeMode::Light]);

        // 节点不重复创建，内容等于单次全新挂载
        assert_eq!(host.node_count(), 1);
        assert_eq!(host.content("theme-simple-light").unwrap(), first);
    }

    #[test]
    fn test_mount_overwrites_stale_content() {
        let registry = StyleRegistry::new(theme());
        let mut host = MemoryStyleHost::new();
        host.upsert_style("theme-simple-light", "/* stale */");

        registry.mount(Some(&mut host), &[ThemeMode::Light]);

        assert_eq!(host.node_count(), 1);
        assert!(!host.content("theme-simple-light").unwrap().contains("stale"));
    }

    #[test]
    fn test_mount_without_host_is_noop() {
        let registry = StyleRegistry::new(theme());
        // 非浏览器环境：无宿主，不得panic
        registry.mount(None, &[ThemeMode::Light, ThemeMode::Dark]);
    }

    #[test]
    fn test_undeclared_mode_is_skipped() {
        let light_only = ThemeTokenMap::new("mono", "单色")
            .with_token(ThemeMode::Light, "background", "#fff");
        let registry = StyleRegistry::new(light_only);
        let mut host = MemoryStyleHost::new();

        registry.mount(Some(&mut host), &[ThemeMode::Light, ThemeMode::Dark]);

        assert_eq!(host.node_count(), 1);
        assert!(host.content("theme-mono-dark").is_none());
    }
}
