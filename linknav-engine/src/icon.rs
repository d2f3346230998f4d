//! Icon key mapping
//! 图标键映射
//! 设计说明：分类图标按封闭枚举建模（编译期固定集合 + 兜底键），
//! 取代对开放图标库的运行时字符串查找；未识别名称一律落到 Globe

use serde::{Deserialize, Serialize};

/// 分类图标键（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IconKey {
    /// 兜底图标
    #[default]
    Globe,
    Rocket,
    Bookmark,
    ChevronDown,
    Moon,
    Sun,
    Code,
    Terminal,
    Database,
    Palette,
    BookOpen,
    Wrench,
    Cloud,
    Gamepad,
}

impl IconKey {
    /// 从上游图标名称解析；未识别名称返回兜底键
    pub fn from_name(name: &str) -> Self {
        match name {
            "Globe" => IconKey::Globe,
            "Rocket" => IconKey::Rocket,
            "Bookmark" => IconKey::Bookmark,
            "ChevronDown" => IconKey::ChevronDown,
            "Moon" => IconKey::Moon,
            "Sun" => IconKey::Sun,
            "Code" => IconKey::Code,
            "Terminal" => IconKey::Terminal,
            "Database" => IconKey::Database,
            "Palette" => IconKey::Palette,
            "BookOpen" => IconKey::BookOpen,
            "Wrench" => IconKey::Wrench,
            "Cloud" => IconKey::Cloud,
            "Gamepad" => IconKey::Gamepad,
            other => {
                log::debug!("Unknown icon name [{}], falling back to Globe", other);
                IconKey::Globe
            }
        }
    }

    /// 渲染层使用的稳定名称
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Globe => "Globe",
            IconKey::Rocket => "Rocket",
            IconKey::Bookmark => "Bookmark",
            IconKey::ChevronDown => "ChevronDown",
            IconKey::Moon => "Moon",
            IconKey::Sun => "Sun",
            IconKey::Code => "Code",
            IconKey::Terminal => "Terminal",
            IconKey::Database => "Database",
            IconKey::Palette => "Palette",
            IconKey::BookOpen => "BookOpen",
            IconKey::Wrench => "Wrench",
            IconKey::Cloud => "Cloud",
            IconKey::Gamepad => "Gamepad",
        }
    }

    /// 分类记录的图标解析：名称缺失或未识别均回落 Globe
    pub fn from_optional_name(name: Option<&str>) -> Self {
        name.map(IconKey::from_name).unwrap_or_default()
    }
}
