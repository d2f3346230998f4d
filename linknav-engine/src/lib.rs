// 核心公共结构体+枚举
pub mod core;
// 链接记录归一化（占位回填+启用分类过滤）
pub mod normalizer;
// 分类层级构建（两级分组+slug锚点）
pub mod hierarchy;
// 导航状态机（展开/激活+滚动同步）
pub mod nav;
// 主题令牌+CSS生成+样式注册表
pub mod theme;
// 图标键映射（封闭枚举+兜底）
pub mod icon;
// 全局错误类型
pub mod error;

// 顶层导出常用类型
pub use crate::core::{
    CategoryGroup, CategoryHierarchy, CategoryRecord, LinkRecord, SubCategoryGroup,
    DEFAULT_SUB_CATEGORY, UNCATEGORIZED,
};
pub use crate::error::{EngineError, EngineResult};
pub use crate::hierarchy::{build_hierarchy, slugify};
pub use crate::icon::IconKey;
pub use crate::nav::{composite_anchor_id, NavState, ScrollSurface, HEADER_CLEARANCE};
pub use crate::normalizer::normalize_links;
pub use crate::theme::{
    MemoryStyleHost, StyleHost, StyleRegistry, ThemeMode, ThemeToken, ThemeTokenMap,
};
