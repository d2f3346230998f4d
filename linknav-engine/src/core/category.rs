use serde::{Deserialize, Serialize};

use super::link::LinkRecord;

/// 分类记录（仅内容源标记为启用的分类会下发）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoryRecord {
    pub id: String,
    /// 分类显示名称，与 LinkRecord.category1 对应
    pub name: String,
    #[serde(default)]
    pub icon_name: Option<String>,
}

/// 二级分类分组：slug ID + 显示名称 + 该组下全部链接
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SubCategoryGroup {
    /// 锚点ID（显示名称的slug，小写、空白折叠为连字符）
    pub id: String,
    pub name: String,
    /// 链接列表，保持过滤后输入顺序
    pub links: Vec<LinkRecord>,
}

impl SubCategoryGroup {
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// 一级分类分组：分类记录 + 其下二级分组（首次出现顺序）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoryGroup {
    pub category: CategoryRecord,
    pub sub_categories: Vec<SubCategoryGroup>,
}

impl CategoryGroup {
    /// 分类下链接总数（跨全部二级分组）
    pub fn link_count(&self) -> usize {
        self.sub_categories.iter().map(|s| s.links.len()).sum()
    }
}

/// 分类层级结构，渲染与导航的只读数据源
/// 不变式：
/// 1. 分类出现当且仅当其启用且过滤后链接数 ≥ 1
/// 2. 二级分组出现当且仅当其链接数 ≥ 1
/// 3. 分类顺序 = 输入 CategoryRecord 顺序，二级顺序 = 链接首次出现顺序
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CategoryHierarchy {
    pub groups: Vec<CategoryGroup>,
}

impl CategoryHierarchy {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    pub fn sub_category_count(&self) -> usize {
        self.groups.iter().map(|g| g.sub_categories.len()).sum()
    }

    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.link_count()).sum()
    }
}
