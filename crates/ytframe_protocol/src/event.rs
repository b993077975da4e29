//! `ytplayer://` 事件 URL 的定义与解析
//!
//! 生成的页面脚本通过整页跳转到 `ytplayer://<事件名>?data=<值>` 来上报
//! 播放器事件。本模块是该约定的唯一出入口：桥接层其余部分只见
//! [`PlayerEvent`]，不接触 URL 语法，便于未来替换为 postMessage 通道。

/// 事件 URL 使用的自定义 scheme
pub const EVENT_SCHEME: &str = "ytplayer";

/// 页面脚本可上报的回调事件集合（封闭集）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCallback {
    Ready,
    StateChange,
    QualityChange,
    Error,
    PlayTime,
    ApiLoadFailed,
}

impl PlayerCallback {
    /// 事件名 -> 枚举，未识别的名字返回 `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "onReady" => Some(Self::Ready),
            "onStateChange" => Some(Self::StateChange),
            "onPlaybackQualityChange" => Some(Self::QualityChange),
            "onError" => Some(Self::Error),
            "onPlayTime" => Some(Self::PlayTime),
            "onYouTubeIframeAPIFailedToLoad" => Some(Self::ApiLoadFailed),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "onReady",
            Self::StateChange => "onStateChange",
            Self::QualityChange => "onPlaybackQualityChange",
            Self::Error => "onError",
            Self::PlayTime => "onPlayTime",
            Self::ApiLoadFailed => "onYouTubeIframeAPIFailedToLoad",
        }
    }
}

/// 一次入站事件：回调种类加可选的单个字符串负载
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEvent {
    pub callback: PlayerCallback,
    pub data: Option<String>,
}

/// 判断导航目标是否属于事件 scheme（命中者必须被拦截取消）
pub fn is_event_url(url: &str) -> bool {
    url.strip_prefix(EVENT_SCHEME)
        .is_some_and(|rest| rest.starts_with("://"))
}

/// 解析事件 URL
///
/// host 段为事件名，负载取查询串最后一个 `=` 之后的部分。
/// scheme 不匹配或事件名未识别时返回 `None`。
pub fn parse_event_url(url: &str) -> Option<PlayerEvent> {
    let rest = url.strip_prefix(EVENT_SCHEME)?.strip_prefix("://")?;

    let (host, query) = match rest.split_once('?') {
        Some((host, query)) => (host, Some(query)),
        None => (rest, None),
    };

    let callback = PlayerCallback::from_name(host)?;
    let data = query
        .and_then(|q| q.rsplit('=').next())
        .filter(|v| !v.is_empty())
        .map(str::to_owned);

    Some(PlayerEvent { callback, data })
}
