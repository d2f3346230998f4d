//! Theme token → CSS custom property generation
//! 主题令牌 → CSS自定义属性生成
//! 核心特性：
//! 1. 每个令牌生成一条 `--{name}: {value};`
//! 2. 三参数 hsl() 函数形式的颜色值额外生成 `--{name}-hsl: <裸参数>;`，
//!    供下游拼接半透明变体（Tailwind兼容格式）
//! 3. 输出附带 color-scheme 声明，与模式联动

use super::tokens::{ThemeMode, ThemeToken};

/// 提取三参数 hsl() 函数值的裸参数串；非该形式返回None
pub fn hsl_params(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let inner = trimmed.strip_prefix("hsl(")?.strip_suffix(')')?;
    // 仅匹配三参数形式：h s l（逗号或空白分隔），排除 hsla/带alpha写法
    let count = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .count();
    if count == 3 {
        Some(inner)
    } else {
        None
    }
}

/// 渲染单个模式的完整CSS块：`selector { 变量…; color-scheme: …; }`
pub fn render_mode_block(mode: ThemeMode, tokens: &[ThemeToken]) -> String {
    let mut vars = String::new();
    for token in tokens {
        vars.push_str(&format!("  --{}: {};\n", token.name, token.value));
        if let Some(params) = hsl_params(&token.value) {
            vars.push_str(&format!("  --{}-hsl: {};\n", token.name, params));
        }
    }

    format!(
        "{} {{\n{}  color-scheme: {};\n}}\n",
        mode.selector(),
        vars,
        mode.color_scheme()
    )
}
