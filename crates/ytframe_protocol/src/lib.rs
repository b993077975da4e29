//! ytframe_protocol - YouTube iframe 播放器桥接协议层
//!
//! 纯字符串/枚举层：状态码映射、`ytplayer://` 事件 URL 解析、
//! 嵌入 URL 构造、HTML 文档生成以及出站命令序列化。不做任何 I/O。

mod command;
mod embed;
mod event;
mod html;
mod state;

pub use command::*;
pub use embed::*;
pub use event::*;
pub use html::*;
pub use state::*;
