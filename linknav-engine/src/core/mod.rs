// 核心公共数据结构
pub mod category;
pub mod link;

// 统一导出核心结构体
pub use category::{CategoryGroup, CategoryHierarchy, CategoryRecord, SubCategoryGroup};
pub use link::{LinkRecord, DEFAULT_SUB_CATEGORY, UNCATEGORIZED};
