use serde::{Deserialize, Serialize};

/// 站点配置（内容源下发，核心不处理、原样透传给展示层）
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub site_title: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub site_keywords: String,

    // 社交链接
    #[serde(default)]
    pub social_github: String,
    #[serde(default)]
    pub social_blog: String,
    #[serde(default)]
    pub social_x: String,
    #[serde(default)]
    pub social_jike: String,
    #[serde(default)]
    pub social_weibo: String,

    // 统计分析ID（仅透传，不执行）
    #[serde(default)]
    pub analytics_google_id: String,
    #[serde(default)]
    pub analytics_baidu_id: String,
}
