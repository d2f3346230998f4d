//! linknav - 书签导航内容引擎
//! 核心职责：
//! 1. 内容源契约与加载（本地快照/远程拉取/缓存）
//! 2. 聚合流水线：快照 → 归一化 → 分类层级 → 页面模型
//! 3. 主题目录与运行时CSS注入（经 linknav-engine 注册表）
//!
//! 展示层（卡片/布局组件、字体、统计脚本）不属于本库

pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod theme;

// 导出全局错误类型
pub use self::error::{LinknavError, LnResult};

// 导出配置模块核心结构体
pub use crate::config::{
    RetryPolicy, SiteConfig, SourceConfig, SourceOptions, SourceOrigin,
    DEFAULT_REFRESH_INTERVAL,
};

// 导出内容源模块核心接口与数据结构
pub use crate::source::{
    ContentSnapshot, ContentSource, LocalFileSource, SnapshotCacheManager, SnapshotLoader,
};
#[cfg(feature = "remote-source")]
pub use crate::source::RemoteSnapshotFetcher;

// 导出聚合流水线
pub use crate::pipeline::{PageBuilder, PageModel, PageStats};

// 导出主题目录接口
#[cfg(feature = "embedded-theme")]
pub use crate::theme::default_theme;
pub use crate::theme::{all_themes, get_theme, load_theme_file, theme_display_name};

// 复导出引擎核心类型，调用方无需直接依赖 linknav-engine
pub use linknav_engine::{
    build_hierarchy, composite_anchor_id, normalize_links, slugify, CategoryGroup,
    CategoryHierarchy, CategoryRecord, IconKey, LinkRecord, MemoryStyleHost, NavState,
    ScrollSurface, StyleHost, StyleRegistry, SubCategoryGroup, ThemeMode, ThemeToken,
    ThemeTokenMap, DEFAULT_SUB_CATEGORY, HEADER_CLEARANCE, UNCATEGORIZED,
};
