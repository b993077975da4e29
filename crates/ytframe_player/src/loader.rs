//! 跨线程装载通道
//!
//! 渲染面只允许在持有线程上被修改。其他线程通过 [`PlayerLoader`]
//! 投递装载请求，视图在持有线程上 `pump` 时统一执行。通道里传的是
//! 纯数据而非闭包，句柄因此保持 `Send`。

use crossbeam_channel::Sender;
use ytframe_protocol::{origin, playlist_embed_url, video_embed_url, wants_autoplay, PlayerVars};

/// 一次装载请求
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub embed_url: String,
    pub base_url: Option<String>,
    pub autoplay: bool,
}

impl LoadRequest {
    /// 单视频装载
    pub fn video(video_id: &str, vars: &PlayerVars) -> Self {
        Self {
            embed_url: video_embed_url(video_id, vars),
            base_url: origin(vars).map(str::to_owned),
            autoplay: wants_autoplay(vars),
        }
    }

    /// 播放列表装载
    pub fn playlist(playlist_id: &str, vars: &PlayerVars) -> Self {
        Self {
            embed_url: playlist_embed_url(playlist_id, vars),
            base_url: origin(vars).map(str::to_owned),
            autoplay: wants_autoplay(vars),
        }
    }
}

/// 装载错误
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("player view is gone")]
    Detached,
}

/// 可跨线程克隆的装载句柄
#[derive(Debug, Clone)]
pub struct PlayerLoader {
    tx: Sender<LoadRequest>,
}

impl PlayerLoader {
    pub(crate) fn new(tx: Sender<LoadRequest>) -> Self {
        Self { tx }
    }

    pub fn load_video(&self, video_id: &str, vars: &PlayerVars) -> Result<(), LoadError> {
        self.send(LoadRequest::video(video_id, vars))
    }

    pub fn load_playlist(&self, playlist_id: &str, vars: &PlayerVars) -> Result<(), LoadError> {
        self.send(LoadRequest::playlist(playlist_id, vars))
    }

    fn send(&self, request: LoadRequest) -> Result<(), LoadError> {
        self.tx.send(request).map_err(|_| LoadError::Detached)
    }
}
