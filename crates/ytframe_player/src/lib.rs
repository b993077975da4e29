//! ytframe_player - YouTube iframe 播放器桥接
//!
//! 持有宿主提供的网页渲染面（[`WebSurface`]），加载生成的播放器文档，
//! 把类型化命令翻译成 JS 求值，并拦截 `ytplayer://` 导航把播放器事件
//! 转发给观察者。所有操作都在持有线程（UI 主线程）上进行。

mod loader;
mod observer;
mod surface;
mod view;

pub use loader::*;
pub use observer::*;
pub use surface::*;
pub use view::*;

pub use ytframe_protocol::{
    PlaybackQuality, PlayerError, PlayerState, PlayerVars, VarValue,
};
