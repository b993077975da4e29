//! 宿主观察者契约
//!
//! 所有方法都带安全的空默认实现，宿主只需覆盖关心的事件。

use ytframe_protocol::{PlaybackQuality, PlayerError, PlayerState};

use crate::Rgba;

/// 就绪前覆盖在渲染面上的过渡加载视图句柄
///
/// iframe 加载完成后由桥接层调用 [`dismiss`](Self::dismiss) 移除；
/// 文档加载失败或 API 脚本加载失败时同样移除。
pub trait LoadingPlaceholder {
    fn dismiss(&self);
}

/// 播放器视图观察者
pub trait PlayerViewObserver {
    /// 播放器就绪，可以接收 API 调用
    fn on_ready(&self) {}

    /// 播放状态变更
    fn on_state_change(&self, _state: PlayerState) {}

    /// 播放画质变更
    fn on_quality_change(&self, _quality: PlaybackQuality) {}

    /// 播放器错误
    fn on_error(&self, _error: PlayerError) {}

    /// 播放中每 500ms 上报一次当前时间（秒）
    fn on_play_time(&self, _seconds: f32) {}

    /// 渲染面背景色，装载文档前查询一次
    fn preferred_background_color(&self) -> Rgba {
        Rgba::WHITE
    }

    /// 可选的过渡加载视图，就绪前一直显示
    fn preferred_loading_view(&self) -> Option<Box<dyn LoadingPlaceholder>> {
        None
    }
}
