//! linknav 本地快照演示
//! 核心流程：
//! 1. 写入演示快照（实际部署中由外部内容源半日级下发）
//! 2. 流水线构建页面模型并输出统计
//! 3. 导航状态机模拟点击 + 主题CSS挂载
//!
//! 运行命令:
//! cargo run --example local_page_demo

use linknav::{
    composite_anchor_id, LocalFileSource, MemoryStyleHost, NavState, PageBuilder, ScrollSurface,
    StyleRegistry, ThemeMode,
};
use rustc_hash::FxHashMap;

/// 演示用滚动面：锚点布局表 + 最近一次滚动位置
#[derive(Debug, Default)]
struct DemoSurface {
    anchors: FxHashMap<String, f64>,
    last_scroll: Option<f64>,
}

impl ScrollSurface for DemoSurface {
    fn anchor_top(&self, anchor_id: &str) -> Option<f64> {
        self.anchors.get(anchor_id).copied()
    }

    fn scroll_to(&mut self, top: f64) {
        self.last_scroll = Some(top);
    }
}

const DEMO_SNAPSHOT: &str = r#"{
    "links": [
        {"id": "l1", "name": "Rust", "url": "https://www.rust-lang.org", "category1": "开发", "category2": "语言"},
        {"id": "l2", "name": "crates.io", "url": "https://crates.io", "category1": "开发", "category2": "语言"},
        {"id": "l3", "name": "Figma", "url": "https://figma.com", "category1": "设计", "category2": "工具"},
        {"id": "l4", "name": "无分类链接", "url": "https://example.com"}
    ],
    "categories": [
        {"id": "c1", "name": "开发", "icon_name": "Code"},
        {"id": "c2", "name": "设计", "icon_name": "Palette"}
    ],
    "config": {"site_title": "演示导航站"}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ========== 1. 准备演示快照 ==========
    let snapshot_path = std::env::temp_dir().join("linknav_demo_snapshot.json");
    std::fs::write(&snapshot_path, DEMO_SNAPSHOT)?;

    // ========== 2. 构建页面模型 ==========
    let source = LocalFileSource::new(&snapshot_path);
    let page = PageBuilder::from_source(&source)?;
    println!("✅ 站点: {}", page.site.site_title);
    println!(
        "📋 统计: {} 个分类 | {} 个书签 | {} 个二级分组",
        page.stats.categories, page.stats.bookmarks, page.stats.sub_categories
    );
    for group in &page.hierarchy.groups {
        println!("  - {} ({} 条)", group.category.name, group.link_count());
        for sub in &group.sub_categories {
            println!("      · {} [{}]", sub.name, sub.id);
        }
    }

    // ========== 3. 导航状态机演示 ==========
    let mut surface = DemoSurface::default();
    for (i, group) in page.hierarchy.groups.iter().enumerate() {
        let base = 400.0 * i as f64;
        surface.anchors.insert(group.category.id.clone(), base);
        for (j, sub) in group.sub_categories.iter().enumerate() {
            surface.anchors.insert(
                composite_anchor_id(&group.category.id, &sub.id),
                base + 120.0 * (j + 1) as f64,
            );
        }
    }

    let mut nav = NavState::new();
    nav.toggle_category("c1");
    nav.navigate("c1", Some("语言"), &mut surface);
    println!(
        "🧭 导航: activeId = {:?}, 滚动位置 = {:?}",
        nav.active_id(),
        surface.last_scroll
    );

    // ========== 4. 主题样式挂载 ==========
    let registry = StyleRegistry::new(linknav::default_theme().clone());
    let mut host = MemoryStyleHost::new();
    registry.mount(Some(&mut host), &[ThemeMode::Light, ThemeMode::Dark]);
    for (id, css) in host.iter() {
        println!("🎨 样式节点 [{}]: {} 字节", id, css.len());
    }

    std::fs::remove_file(&snapshot_path)?;
    Ok(())
}
