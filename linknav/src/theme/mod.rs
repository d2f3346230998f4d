//! 主题目录：内置主题注册、按名称查找与外部主题文件加载
//! 查找未命中返回None，显示名称回落到主题名本身

#[cfg(feature = "embedded-theme")]
pub mod simple;

use std::fs;
use std::path::Path;

use linknav_engine::ThemeTokenMap;

use crate::error::LnResult;

#[cfg(feature = "embedded-theme")]
use self::simple::SIMPLE_THEME;

/// 默认主题（embedded-theme特性开启时可用）
#[cfg(feature = "embedded-theme")]
pub fn default_theme() -> &'static ThemeTokenMap {
    &SIMPLE_THEME
}

/// 按名称获取主题配置
pub fn get_theme(name: &str) -> Option<&'static ThemeTokenMap> {
    all_themes().into_iter().find(|t| t.name == name)
}

/// 全部可用主题（声明顺序）
pub fn all_themes() -> Vec<&'static ThemeTokenMap> {
    #[cfg(feature = "embedded-theme")]
    {
        vec![&*SIMPLE_THEME]
    }
    #[cfg(not(feature = "embedded-theme"))]
    {
        Vec::new()
    }
}

/// 主题显示名称；未知主题回落到传入名称
pub fn theme_display_name(name: &str) -> String {
    get_theme(name)
        .map(|t| t.display_name.clone())
        .unwrap_or_else(|| name.to_string())
}

/// 从JSON文件加载外部主题配置（内置主题之外的自定义主题入口）
pub fn load_theme_file(path: impl AsRef<Path>) -> LnResult<ThemeTokenMap> {
    let json = fs::read_to_string(path.as_ref())?;
    let theme = ThemeTokenMap::from_json_str(&json)?;
    log::debug!("Theme loaded from file: {}", theme.name);
    Ok(theme)
}
