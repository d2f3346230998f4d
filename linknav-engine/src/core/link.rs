use serde::{Deserialize, Serialize};

/// 未分类一级分类的占位名称（上游缺失 category1 时回填）
pub const UNCATEGORIZED: &str = "未分类";
/// 默认二级分类的占位名称（上游缺失 category2 时回填）
pub const DEFAULT_SUB_CATEGORY: &str = "默认";

/// 链接记录，内容源返回的原始数据统一结构
/// 设计说明：
/// - category1/category2 允许上游为空，归一化阶段回填占位值
/// - 可选字段统一 `#[serde(default)]`，兼容字段残缺的上游数据
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LinkRecord {
    /// 记录唯一ID（内容源分配）
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// 标签列表，保持上游顺序
    #[serde(default)]
    pub tags: Vec<String>,
    /// 一级分类名称（可为空，归一化后保证非空）
    #[serde(default)]
    pub category1: String,
    /// 二级分类名称（可为空，归一化后保证非空）
    #[serde(default)]
    pub category2: String,
    #[serde(default)]
    pub icon_link: Option<String>,
    #[serde(default)]
    pub icon_file: Option<String>,
}

impl LinkRecord {
    /// 返回回填占位分类后的新记录（原记录不被修改）
    pub fn with_default_categories(&self) -> Self {
        let mut normalized = self.clone();
        if normalized.category1.trim().is_empty() {
            normalized.category1 = UNCATEGORIZED.to_string();
        }
        if normalized.category2.trim().is_empty() {
            normalized.category2 = DEFAULT_SUB_CATEGORY.to_string();
        }
        normalized
    }
}
