//! 嵌入 URL 构造
//!
//! 单视频：`https://www.youtube.com/embed/<videoId>?<playerVars>&enablejsapi=1`
//! 播放列表：`https://www.youtube.com/embed?listType=playlist&list=<id>&...`

use std::collections::BTreeMap;
use std::fmt;

/// 播放器变量的取值（开放的原始类型集合）
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for VarValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for VarValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for VarValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for VarValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for VarValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// 播放器变量表，键为 iframe API 的参数名
///
/// 完整参数列表见
/// <https://developers.google.com/youtube/player_parameters>。
pub type PlayerVars = BTreeMap<String, VarValue>;

// 字符串值做百分号编码，数字和布尔原样拼接
fn query_pairs(vars: &PlayerVars) -> String {
    let mut out = String::new();
    for (key, value) in vars {
        match value {
            VarValue::Str(s) => {
                out.push_str(key);
                out.push('=');
                out.push_str(&urlencoding::encode(s));
            }
            other => {
                out.push_str(key);
                out.push('=');
                out.push_str(&other.to_string());
            }
        }
        out.push('&');
    }
    out
}

/// 构造单视频的嵌入 URL
pub fn video_embed_url(video_id: &str, vars: &PlayerVars) -> String {
    format!(
        "https://www.youtube.com/embed/{video_id}?{}enablejsapi=1",
        query_pairs(vars)
    )
}

/// 构造播放列表的嵌入 URL
pub fn playlist_embed_url(playlist_id: &str, vars: &PlayerVars) -> String {
    format!(
        "https://www.youtube.com/embed?listType=playlist&list={playlist_id}&{}enablejsapi=1",
        query_pairs(vars)
    )
}

/// 加载时是否请求了自动播放（`autoplay` 取整数 1 才算）
pub fn wants_autoplay(vars: &PlayerVars) -> bool {
    matches!(vars.get("autoplay"), Some(VarValue::Int(1)))
}

/// `origin` 变量，兼作文档的 base URL
pub fn origin(vars: &PlayerVars) -> Option<&str> {
    match vars.get("origin") {
        Some(VarValue::Str(s)) => Some(s),
        _ => None,
    }
}
