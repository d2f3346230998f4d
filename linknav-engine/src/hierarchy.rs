//! Category hierarchy builder
//! 分类层级构建
//! 核心职责：
//! 1. 单遍分组：category1 → category2 → 链接列表
//! 2. 二级分组顺序 = 链接首次出现顺序，分类顺序 = 输入分类顺序
//! 3. 零链接分类静默丢弃（不是错误）

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::core::{CategoryGroup, CategoryHierarchy, CategoryRecord, LinkRecord, SubCategoryGroup};

/// 空白折叠正则（与原始数据源的slug约定一致）
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("静态正则必定合法"));

/// 显示名称 → slug：小写化 + 空白折叠为连字符
/// 注意：不同名称可能slug冲突，此处按约定不检测（上游数据质量问题）
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(name.trim().to_lowercase().as_str(), "-")
        .into_owned()
}

/// 按一级/二级分类分组的中间结构（保持插入顺序）
#[derive(Debug, Default)]
struct OrderedGroups {
    /// 二级名称首次出现顺序
    order: Vec<String>,
    /// 二级名称 → 链接索引列表
    members: FxHashMap<String, Vec<usize>>,
}

impl OrderedGroups {
    fn push(&mut self, sub_name: &str, link_index: usize) {
        match self.members.get_mut(sub_name) {
            Some(indices) => indices.push(link_index),
            None => {
                self.order.push(sub_name.to_string());
                self.members.insert(sub_name.to_string(), vec![link_index]);
            }
        }
    }
}

/// 构建分类层级结构
/// 特性：
/// 1. 全函数：归一化阶段已吸收畸形字段，本阶段无失败路径
/// 2. 仅保留有链接的分类与二级分组（完整性/最小性不变式）
/// 参数：
/// - links: 归一化且过滤后的链接序列
/// - categories: 启用分类记录序列（顺序即渲染顺序）
/// 返回：只读层级结构
pub fn build_hierarchy(links: &[LinkRecord], categories: &[CategoryRecord]) -> CategoryHierarchy {
    // 单遍分组：category1 → OrderedGroups
    let mut by_category: FxHashMap<&str, OrderedGroups> = FxHashMap::default();
    for (index, link) in links.iter().enumerate() {
        by_category
            .entry(link.category1.as_str())
            .or_default()
            .push(link.category2.as_str(), index);
    }

    // 按输入分类顺序组装，零链接分类直接跳过
    let mut groups = Vec::with_capacity(categories.len());
    for category in categories {
        let Some(grouped) = by_category.get(category.name.as_str()) else {
            log::debug!(
                "Category [{}] has no links after filtering, dropped from hierarchy",
                category.name
            );
            continue;
        };

        let sub_categories = grouped
            .order
            .iter()
            .map(|sub_name| SubCategoryGroup {
                id: slugify(sub_name),
                name: sub_name.clone(),
                links: grouped.members[sub_name]
                    .iter()
                    .map(|&i| links[i].clone())
                    .collect(),
            })
            .collect();

        groups.push(CategoryGroup {
            category: category.clone(),
            sub_categories,
        });
    }

    CategoryHierarchy { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn category(id: &str, name: &str) -> CategoryRecord {
        CategoryRecord {
            id: id.to_string(),
            name: name.to_string(),
            icon_name: None,
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Dev Tools"), "dev-tools");
        assert_eq!(slugify("  Front   End  "), "front-end");
        assert_eq!(slugify("默认"), "默认");
        assert_eq!(slugify("AI"), "ai");
    }

    #[test]
    fn test_empty_category_dropped() {
        let categories = vec![category("c1", "Tools"), category("c2", "Empty")];
        let links = vec![link("1", "Tools", "Dev")];

        let hierarchy = build_hierarchy(&links, &categories);

        assert_eq!(hierarchy.category_count(), 1);
        assert_eq!(hierarchy.groups[0].category.name, "Tools");
        assert_eq!(hierarchy.groups[0].sub_categories.len(), 1);
        assert_eq!(hierarchy.groups[0].sub_categories[0].name, "Dev");
        assert_eq!(hierarchy.groups[0].sub_categories[0].id, "dev");
    }

    #[test]
    fn test_sub_category_first_occurrence_order() {
        let categories = vec![category("c1", "Tools")];
        let links = vec![
            link("a", "Tools", "Z"),
            link("b", "Tools", "A"),
            link("c", "Tools", "Z"),
        ];

        let hierarchy = build_hierarchy(&links, &categories);

        let names: Vec<&str> = hierarchy.groups[0]
            .sub_categories
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        // 首次出现顺序，而非字典序
        assert_eq!(names, vec!["Z", "A"]);
        assert_eq!(hierarchy.groups[0].sub_categories[0].links.len(), 2);
    }

    #[test]
    fn test_category_order_follows_input_categories() {
        let categories = vec![category("c2", "B"), category("c1", "A")];
        let links = vec![link("1", "A", "x"), link("2", "B", "y")];

        let hierarchy = build_hierarchy(&links, &categories);

        let names: Vec<&str> = hierarchy
            .groups
            .iter()
            .map(|g| g.category.name.as_str())
            .collect();
        // 分类顺序跟随输入 CategoryRecord 顺序，而非链接发现顺序
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_link_order_preserved_within_sub_category() {
        let categories = vec![category("c1", "Tools")];
        let links = vec![
            link("3", "Tools", "Dev"),
            link("1", "Tools", "Dev"),
            link("2", "Tools", "Dev"),
        ];

        let hierarchy = build_hierarchy(&links, &categories);

        let ids: Vec<&str> = hierarchy.groups[0].sub_categories[0]
            .links
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_counts() {
        let categories = vec![category("c1", "Tools"), category("c2", "Media")];
        let links = vec![
            link("1", "Tools", "Dev"),
            link("2", "Tools", "Design"),
            link("3", "Media", "Video"),
        ];

        let hierarchy = build_hierarchy(&links, &categories);

        assert_eq!(hierarchy.category_count(), 2);
        assert_eq!(hierarchy.sub_category_count(), 3);
        assert_eq!(hierarchy.link_count(), 3);
    }

    #[test]
    fn test_no_links_yields_empty_hierarchy() {
        let categories = vec![category("c1", "Tools")];
        let hierarchy = build_hierarchy(&[], &categories);
        assert!(hierarchy.is_empty());
    }
}
