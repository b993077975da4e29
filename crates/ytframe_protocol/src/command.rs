//! 出站命令与查询的 JavaScript 序列化
//!
//! 远端 `player` 全局对象被视作无版本的外部对象，本模块只负责把
//! 类型化调用翻译成单条 JS 语句：字符串加单引号，数字和布尔字面
//! 拼接，可选的尾参缺省时整个省略而不是传 null。

use crate::PlaybackQuality;

/// 出站命令（即发即忘）
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Stop,
    Seek {
        seconds: f64,
        allow_seek_ahead: bool,
    },
    LoadVideoById {
        video_id: String,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    },
    CueVideoById {
        video_id: String,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    },
    LoadVideoByUrl {
        video_url: String,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    },
    CueVideoByUrl {
        video_url: String,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    },
    CuePlaylistById {
        playlist_id: String,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    },
    CuePlaylistByVideos {
        video_ids: Vec<String>,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    },
    LoadPlaylistById {
        playlist_id: String,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    },
    LoadPlaylistByVideos {
        video_ids: Vec<String>,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    },
    SetPlaybackRate(f64),
    SetLoop(bool),
    SetShuffle(bool),
    SetPlaybackQuality(PlaybackQuality),
    NextVideo,
    PreviousVideo,
    PlayVideoAt(u32),
}

// 视频 id 数组按原约定渲染成单引号包裹的 JSON 数组字面量
fn id_list_literal(ids: &[String]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_owned())
}

// 显式结束时间走对象字面量重载
fn video_call(method: &str, video_id: &str, start: f64, end: Option<f64>, quality: PlaybackQuality) -> String {
    match end {
        Some(end) => format!(
            "player.{method}({{'videoId': '{video_id}', 'startSeconds': {start}, 'endSeconds': {end}, 'suggestedQuality': '{}'}});",
            quality.code()
        ),
        None => format!("player.{method}('{video_id}', {start}, '{}');", quality.code()),
    }
}

fn url_call(method: &str, url: &str, start: f64, end: Option<f64>, quality: PlaybackQuality) -> String {
    match end {
        Some(end) => format!("player.{method}('{url}', {start}, {end}, '{}');", quality.code()),
        None => format!("player.{method}('{url}', {start}, '{}');", quality.code()),
    }
}

fn playlist_call(method: &str, list_literal: &str, index: u32, start: f64, quality: PlaybackQuality) -> String {
    format!("player.{method}({list_literal}, {index}, {start}, '{}');", quality.code())
}

impl PlayerCommand {
    /// 渲染成单条 `player.<method>(...)` 语句
    pub fn to_js(&self) -> String {
        match self {
            Self::Play => "player.playVideo();".to_owned(),
            Self::Pause => "player.pauseVideo();".to_owned(),
            Self::Stop => "player.stopVideo();".to_owned(),
            Self::Seek {
                seconds,
                allow_seek_ahead,
            } => format!("player.seekTo({seconds}, {allow_seek_ahead});"),
            Self::LoadVideoById {
                video_id,
                start_seconds,
                end_seconds,
                quality,
            } => video_call("loadVideoById", video_id, *start_seconds, *end_seconds, *quality),
            Self::CueVideoById {
                video_id,
                start_seconds,
                end_seconds,
                quality,
            } => video_call("cueVideoById", video_id, *start_seconds, *end_seconds, *quality),
            Self::LoadVideoByUrl {
                video_url,
                start_seconds,
                end_seconds,
                quality,
            } => url_call("loadVideoByUrl", video_url, *start_seconds, *end_seconds, *quality),
            Self::CueVideoByUrl {
                video_url,
                start_seconds,
                end_seconds,
                quality,
            } => url_call("cueVideoByUrl", video_url, *start_seconds, *end_seconds, *quality),
            Self::CuePlaylistById {
                playlist_id,
                index,
                start_seconds,
                quality,
            } => playlist_call("cuePlaylist", &format!("'{playlist_id}'"), *index, *start_seconds, *quality),
            Self::CuePlaylistByVideos {
                video_ids,
                index,
                start_seconds,
                quality,
            } => playlist_call(
                "cuePlaylist",
                &format!("'{}'", id_list_literal(video_ids)),
                *index,
                *start_seconds,
                *quality,
            ),
            Self::LoadPlaylistById {
                playlist_id,
                index,
                start_seconds,
                quality,
            } => playlist_call("loadPlaylist", &format!("'{playlist_id}'"), *index, *start_seconds, *quality),
            Self::LoadPlaylistByVideos {
                video_ids,
                index,
                start_seconds,
                quality,
            } => playlist_call(
                "loadPlaylist",
                &format!("'{}'", id_list_literal(video_ids)),
                *index,
                *start_seconds,
                *quality,
            ),
            Self::SetPlaybackRate(rate) => format!("player.setPlaybackRate({rate});"),
            Self::SetLoop(looping) => format!("player.setLoop({looping});"),
            Self::SetShuffle(shuffle) => format!("player.setShuffle({shuffle});"),
            Self::SetPlaybackQuality(quality) => {
                format!("player.setPlaybackQuality('{}');", quality.code())
            }
            Self::NextVideo => "player.nextVideo();".to_owned(),
            Self::PreviousVideo => "player.previousVideo();".to_owned(),
            Self::PlayVideoAt(index) => format!("player.playVideoAt({index});"),
        }
    }
}

/// 带结果的查询
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerQuery {
    PlaybackRate,
    AvailablePlaybackRates,
    VideoLoadedFraction,
    PlayerState,
    CurrentTime,
    PlaybackQuality,
    AvailableQualityLevels,
    Duration,
    VideoUrl,
    VideoEmbedCode,
    Playlist,
    PlaylistIndex,
}

impl PlayerQuery {
    /// 对应的 `player.get...()` 表达式
    ///
    /// 状态和画质列表带 `.toString()`，结果以字符串码回来再映射枚举。
    pub fn to_js(self) -> &'static str {
        match self {
            Self::PlaybackRate => "player.getPlaybackRate();",
            Self::AvailablePlaybackRates => "player.getAvailablePlaybackRates();",
            Self::VideoLoadedFraction => "player.getVideoLoadedFraction();",
            Self::PlayerState => "player.getPlayerState().toString();",
            Self::CurrentTime => "player.getCurrentTime();",
            Self::PlaybackQuality => "player.getPlaybackQuality();",
            Self::AvailableQualityLevels => "player.getAvailableQualityLevels().toString();",
            Self::Duration => "player.getDuration();",
            Self::VideoUrl => "player.getVideoUrl();",
            Self::VideoEmbedCode => "player.getVideoEmbedCode();",
            Self::Playlist => "player.getPlaylist();",
            Self::PlaylistIndex => "player.getPlaylistIndex();",
        }
    }
}
