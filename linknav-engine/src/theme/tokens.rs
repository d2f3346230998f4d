use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// 主题模式（默认亮色 + 可选暗色）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// 模式作用域选择器：默认模式挂 :root，非默认模式挂属性选择器
    pub fn selector(&self) -> &'static str {
        match self {
            ThemeMode::Light => ":root",
            ThemeMode::Dark => "[data-theme=\"dark\"]",
        }
    }

    /// CSS color-scheme 取值
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// 样式节点ID后缀
    pub fn suffix(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// 单个主题令牌：CSS变量名（不含--前缀）+ 值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeToken {
    pub name: String,
    pub value: String,
}

impl ThemeToken {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 声明式主题令牌表：模式 → 有序令牌列表
/// 所有权说明：构建期静态声明，注入器只读；派生的样式节点归注入器所有
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeTokenMap {
    /// 主题标识名（样式节点ID的组成部分）
    pub name: String,
    /// 主题显示名称
    pub display_name: String,
    modes: Vec<(ThemeMode, Vec<ThemeToken>)>,
}

impl ThemeTokenMap {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            modes: Vec::new(),
        }
    }

    /// 追加单个令牌（模式不存在则创建，令牌顺序 = 声明顺序）
    pub fn with_token(
        mut self,
        mode: ThemeMode,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let token = ThemeToken::new(name, value);
        match self.modes.iter_mut().find(|(m, _)| *m == mode) {
            Some((_, tokens)) => tokens.push(token),
            None => self.modes.push((mode, vec![token])),
        }
        self
    }

    /// 指定模式的令牌列表；模式未声明返回None
    pub fn tokens_for(&self, mode: ThemeMode) -> Option<&[ThemeToken]> {
        self.modes
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, tokens)| tokens.as_slice())
    }

    /// 已声明的模式集合（声明顺序）
    pub fn declared_modes(&self) -> Vec<ThemeMode> {
        self.modes.iter().map(|(m, _)| *m).collect()
    }

    /// 从JSON反序列化主题配置并做基础校验
    /// 校验项：主题名非空、至少声明一个模式
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let theme: ThemeTokenMap = serde_json::from_str(json)?;
        if theme.name.trim().is_empty() {
            return Err(EngineError::ThemeConfigError("主题名不能为空".to_string()));
        }
        if theme.modes.is_empty() {
            return Err(EngineError::ThemeConfigError(format!(
                "主题[{}]未声明任何模式",
                theme.name
            )));
        }
        Ok(theme)
    }
}
