//! 网页渲染面的抽象
//!
//! 宿主适配层（WKWebView、wry 等）实现 [`WebSurface`]；求值回调由
//! 宿主引擎在持有线程上调用。不同在途求值的完成顺序本层不作保证，
//! 通常的 FIFO 行为来自底层引擎。

use serde_json::Value;

/// 导航决策：事件 scheme 一律取消，其余放行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    Allow,
    Cancel,
}

/// 渲染面背景色（RGBA，0-255）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const CLEAR: Self = Self([0, 0, 0, 0]);

    /// 透明背景要求宿主关闭渲染面的不透明绘制
    pub fn is_transparent(self) -> bool {
        self.0[3] == 0
    }
}

/// 求值完成回调；`None` 表示引擎没有给出可用结果
pub type EvalCompletion = Box<dyn FnOnce(Option<Value>)>;

/// 宿主网页渲染面
pub trait WebSurface {
    /// 加载 HTML 文档，`base_url` 对应嵌入参数里的 `origin`
    fn load_html(&self, html: &str, base_url: Option<&str>);

    /// 应用观察者给出的背景色
    fn set_background(&self, color: Rgba);

    /// 即发即忘地求值一条 JS 语句
    fn eval(&self, script: &str);

    /// 求值并异步取回结果
    fn eval_with_result(&self, script: &str, completion: EvalCompletion);
}
