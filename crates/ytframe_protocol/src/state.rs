//! 播放器状态、画质与错误枚举及其线上编码

/// 播放状态（iframe API 的数字状态码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Queued,
    #[default]
    Unknown,
}

impl PlayerState {
    /// 状态码字符串 -> 枚举，未识别的码一律映射为 `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "-1" => Self::Unstarted,
            "0" => Self::Ended,
            "1" => Self::Playing,
            "2" => Self::Paused,
            "3" => Self::Buffering,
            "5" => Self::Queued,
            _ => Self::Unknown,
        }
    }

    /// 枚举 -> 状态码字符串
    pub fn code(self) -> &'static str {
        match self {
            Self::Unstarted => "-1",
            Self::Ended => "0",
            Self::Playing => "1",
            Self::Paused => "2",
            Self::Buffering => "3",
            Self::Queued => "5",
            Self::Unknown => "unknown",
        }
    }
}

/// 播放画质（iframe API 的小写画质码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackQuality {
    Small,
    Medium,
    Large,
    Hd720,
    Hd1080,
    Highres,
    /// YouTube 直播专用
    Auto,
    Default,
    #[default]
    Unknown,
}

impl PlaybackQuality {
    pub fn from_code(code: &str) -> Self {
        match code {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "hd720" => Self::Hd720,
            "hd1080" => Self::Hd1080,
            "highres" => Self::Highres,
            "auto" => Self::Auto,
            "default" => Self::Default,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Hd720 => "hd720",
            Self::Hd1080 => "hd1080",
            Self::Highres => "highres",
            Self::Auto => "auto",
            Self::Default => "default",
            Self::Unknown => "unknown",
        }
    }
}

/// 播放器错误
///
/// 上游的 100/105 与 101/150 两对等价错误码各自合并为单一错误种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    InvalidParam,
    Html5Error,
    VideoNotFound,
    NotEmbeddable,
    Unknown,
}

impl PlayerError {
    pub fn from_code(code: &str) -> Self {
        match code {
            "2" => Self::InvalidParam,
            "5" => Self::Html5Error,
            "100" | "105" => Self::VideoNotFound,
            "101" | "150" => Self::NotEmbeddable,
            _ => Self::Unknown,
        }
    }
}
