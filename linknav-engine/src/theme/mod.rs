//! 主题模块：令牌模型、CSS生成与样式注册表
pub mod css;
pub mod registry;
pub mod tokens;

// 统一导出核心公共接口
pub use css::{hsl_params, render_mode_block};
pub use registry::{MemoryStyleHost, StyleHost, StyleRegistry};
pub use tokens::{ThemeMode, ThemeToken, ThemeTokenMap};
