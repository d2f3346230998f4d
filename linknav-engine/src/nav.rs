//! Navigation state machine
//! 导航状态机
//! 核心职责：
//! 1. 维护会话内导航状态（当前激活项 + 分类展开集合）
//! 2. 处理点击转移（toggle 展开 / navigate 激活并滚动）
//! 3. 通过 ScrollSurface 抽象隔离渲染环境（浏览器/测试/服务端）
//!
//! 设计说明：
//! - 单线程事件驱动，转移仅在UI事件回调内同步发生，无并发转移
//! - 无终止态，状态随页面会话销毁

use rustc_hash::FxHashSet;

/// 固定头部避让距离：滚动目标上移该距离，避免锚点被固定头遮挡
pub const HEADER_CLEARANCE: f64 = 100.0;

/// 组合锚点ID：`"{categoryId}-{subCategoryId}"`
/// 同时用作DOM锚点与导航激活态键
pub fn composite_anchor_id(category_id: &str, sub_category_id: &str) -> String {
    format!("{}-{}", category_id, sub_category_id)
}

/// 滚动面（渲染环境接口）
/// 设计：状态机只读布局、只发滚动指令，不持有任何渲染层对象；
/// 非浏览器环境可用空实现（查不到锚点即不滚动）
pub trait ScrollSurface {
    /// 查询锚点元素顶边在文档中的绝对位置；锚点不存在返回None
    fn anchor_top(&self, anchor_id: &str) -> Option<f64>;

    /// 平滑滚动到目标位置；后发起的滚动自然打断先前动画（浏览器原生语义）
    fn scroll_to(&mut self, top: f64);
}

/// 导航状态机（页面会话内唯一、进程本地）
#[derive(Debug, Clone, Default)]
pub struct NavState {
    /// 当前激活项：分类ID或组合锚点ID，初始为空
    active_id: Option<String>,
    /// 展开的分类ID集合（多个分类可同时展开，非手风琴）
    expanded: FxHashSet<String>,
}

impl NavState {
    /// 初始状态：无激活项，全部折叠
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded.contains(category_id)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// 翻转单个分类的折叠/展开状态，其余分类不受影响
    pub fn toggle_category(&mut self, category_id: &str) {
        if !self.expanded.remove(category_id) {
            self.expanded.insert(category_id.to_string());
        }
    }

    /// 导航到分类或二级分组
    /// 转移语义：
    /// 1. activeId 无条件更新为目标键（锚点缺失时照常更新，良性不一致）
    /// 2. 锚点存在则平滑滚动到 `锚点位置 - HEADER_CLEARANCE`
    /// 3. 锚点缺失（如数据刷新后的过期ID）滚动为no-op，仅debug日志
    pub fn navigate(
        &mut self,
        category_id: &str,
        sub_category_id: Option<&str>,
        surface: &mut dyn ScrollSurface,
    ) {
        let target_id = match sub_category_id {
            Some(sub) => composite_anchor_id(category_id, sub),
            None => category_id.to_string(),
        };

        match surface.anchor_top(&target_id) {
            Some(top) => surface.scroll_to(top - HEADER_CLEARANCE),
            None => {
                // 过期锚点容忍：不滚动、不报错
                log::debug!("Navigation anchor [{}] not found, scroll skipped", target_id);
            }
        }

        self.active_id = Some(target_id);
    }
}
