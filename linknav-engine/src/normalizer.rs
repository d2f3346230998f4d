//! Link record normalizer
//! 链接记录归一化
//! 核心职责：
//! 1. 回填缺失的一级/二级分类占位值（未分类/默认）
//! 2. 按启用分类集合做稳定过滤（保持输入顺序）
//! 3. 纯函数设计：不修改输入，返回新序列

use rustc_hash::FxHashSet;

use crate::core::LinkRecord;

/// 归一化 + 过滤链接记录
/// 特性：
/// 1. 全函数：任意输入均可处理，缺失字段由占位值吸收
/// 2. 稳定过滤：输出顺序 = 输入顺序
/// 3. 被丢弃记录仅记录debug日志，不报错不上抛
/// 参数：
/// - raw_links: 原始链接记录序列
/// - enabled_categories: 启用的一级分类名称集合
/// 返回：归一化且仅含启用分类的新记录序列
pub fn normalize_links(
    raw_links: &[LinkRecord],
    enabled_categories: &FxHashSet<String>,
) -> Vec<LinkRecord> {
    let mut normalized = Vec::with_capacity(raw_links.len());

    for raw in raw_links {
        let link = raw.with_default_categories();
        if enabled_categories.contains(&link.category1) {
            normalized.push(link);
        } else {
            // 引用性缺陷：链接指向未启用分类，静默丢弃
            log::debug!(
                "Dropping link [{}]: category [{}] not in enabled set",
                link.id,
                link.category1
            );
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_SUB_CATEGORY, UNCATEGORIZED};

    fn link(id: &str, category1: &str, category2: &str) -> LinkRecord {
        LinkRecord {
            id: id.to_string(),
            name: format!("link-{}", id),
            url: format!("https://example.com/{}", id),
            category1: category1.to_string(),
            category2: category2.to_string(),
            ..Default::default()
        }
    }

    fn enabled(names: &[&str]) -> FxHashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_missing_categories_get_sentinels() {
        let raw = vec![link("1", "", ""), link("2", "  ", "")];
        let result = normalize_links(&raw, &enabled(&[UNCATEGORIZED]));

        assert_eq!(result.len(), 2);
        for r in &result {
            assert_eq!(r.category1, UNCATEGORIZED);
            assert_eq!(r.category2, DEFAULT_SUB_CATEGORY);
        }
    }

    #[test]
    fn test_filter_keeps_only_enabled_categories() {
        let raw = vec![
            link("1", "工具", "开发"),
            link("2", "娱乐", "游戏"),
            link("3", "工具", "设计"),
        ];
        let result = normalize_links(&raw, &enabled(&["工具"]));

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.category1 == "工具"));
    }

    #[test]
    fn test_filter_is_stable() {
        let raw = vec![
            link("c", "工具", "Z"),
            link("a", "娱乐", "X"),
            link("b", "工具", "A"),
        ];
        let result = normalize_links(&raw, &enabled(&["工具"]));

        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let raw = vec![link("1", "", "")];
        let _ = normalize_links(&raw, &enabled(&[UNCATEGORIZED]));
        assert_eq!(raw[0].category1, "");
        assert_eq!(raw[0].category2, "");
    }

    #[test]
    fn test_defaulted_record_dropped_when_sentinel_not_enabled() {
        let raw = vec![link("1", "", "")];
        let result = normalize_links(&raw, &enabled(&["工具"]));
        assert!(result.is_empty());
    }
}
