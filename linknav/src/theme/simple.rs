//! 内置 simple 主题 - 仅在开启embedded-theme特性时编译
//! 令牌以三参数 hsl() 形式声明，注入时自动派生 `--*-hsl` 裸参数变量

use linknav_engine::{ThemeMode, ThemeTokenMap};
use once_cell::sync::Lazy;

/// 全局懒加载的内置主题单例 - 运行期首次访问初始化，内存中仅一份实例，线程安全
pub static SIMPLE_THEME: Lazy<ThemeTokenMap> = Lazy::new(|| {
    ThemeTokenMap::new("simple", "简约")
        // 亮色模式
        .with_token(ThemeMode::Light, "background", "hsl(0, 0%, 100%)")
        .with_token(ThemeMode::Light, "foreground", "hsl(222, 47%, 11%)")
        .with_token(ThemeMode::Light, "card", "hsl(0, 0%, 100%)")
        .with_token(ThemeMode::Light, "card-foreground", "hsl(222, 47%, 11%)")
        .with_token(ThemeMode::Light, "primary", "hsl(221, 83%, 53%)")
        .with_token(ThemeMode::Light, "primary-foreground", "hsl(210, 40%, 98%)")
        .with_token(ThemeMode::Light, "secondary", "hsl(210, 40%, 96%)")
        .with_token(ThemeMode::Light, "secondary-foreground", "hsl(222, 47%, 11%)")
        .with_token(ThemeMode::Light, "muted", "hsl(210, 40%, 96%)")
        .with_token(ThemeMode::Light, "muted-foreground", "hsl(215, 16%, 47%)")
        .with_token(ThemeMode::Light, "accent", "hsl(210, 40%, 96%)")
        .with_token(ThemeMode::Light, "accent-foreground", "hsl(222, 47%, 11%)")
        .with_token(ThemeMode::Light, "border", "hsl(214, 32%, 91%)")
        .with_token(ThemeMode::Light, "ring", "hsl(221, 83%, 53%)")
        .with_token(ThemeMode::Light, "radius", "0.5rem")
        // 暗色模式
        .with_token(ThemeMode::Dark, "background", "hsl(222, 47%, 11%)")
        .with_token(ThemeMode::Dark, "foreground", "hsl(210, 40%, 98%)")
        .with_token(ThemeMode::Dark, "card", "hsl(222, 47%, 13%)")
        .with_token(ThemeMode::Dark, "card-foreground", "hsl(210, 40%, 98%)")
        .with_token(ThemeMode::Dark, "primary", "hsl(217, 91%, 60%)")
        .with_token(ThemeMode::Dark, "primary-foreground", "hsl(222, 47%, 11%)")
        .with_token(ThemeMode::Dark, "secondary", "hsl(217, 33%, 17%)")
        .with_token(ThemeMode::Dark, "secondary-foreground", "hsl(210, 40%, 98%)")
        .with_token(ThemeMode::Dark, "muted", "hsl(217, 33%, 17%)")
        .with_token(ThemeMode::Dark, "muted-foreground", "hsl(215, 20%, 65%)")
        .with_token(ThemeMode::Dark, "accent", "hsl(217, 33%, 17%)")
        .with_token(ThemeMode::Dark, "accent-foreground", "hsl(210, 40%, 98%)")
        .with_token(ThemeMode::Dark, "border", "hsl(217, 33%, 17%)")
        .with_token(ThemeMode::Dark, "ring", "hsl(217, 91%, 60%)")
        .with_token(ThemeMode::Dark, "radius", "0.5rem")
});
