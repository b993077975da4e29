//! 播放器视图：命令分发与事件桥接
//!
//! 出站：每个包装方法序列化一条 JS 语句在渲染面上求值；查询结果经
//! 异步回调送回，取不到可用值时以 `None`/`Unknown` 收场，从不报错。
//! 入站：宿主把每次导航交给 [`decide_navigation`]，事件 scheme 的
//! 导航一律取消并解析分发，其余放行。
//!
//! [`decide_navigation`]: YoutubePlayerView::decide_navigation

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, info, warn};
use serde_json::Value;
use ytframe_protocol::{
    is_event_url, parse_event_url, player_html, PlaybackQuality, PlayerCallback, PlayerCommand,
    PlayerError, PlayerEvent, PlayerQuery, PlayerState, PlayerVars,
};

use crate::{
    LoadRequest, LoadingPlaceholder, NavigationPolicy, PlayerLoader, PlayerViewObserver,
    WebSurface,
};

/// 嵌入 YouTube 播放器的视图桥
///
/// 持有渲染面和就绪前的过渡加载视图，二者与视图同生共灭。
/// 视图不是 `Send`，构造它的线程就是唯一的持有线程。
pub struct YoutubePlayerView<S: WebSurface> {
    surface: S,
    observer: RefCell<Option<Rc<dyn PlayerViewObserver>>>,
    loading_view: RefCell<Option<Box<dyn LoadingPlaceholder>>>,
    autoplay: Cell<bool>,
    load_tx: Sender<LoadRequest>,
    load_rx: Receiver<LoadRequest>,
}

impl<S: WebSurface> YoutubePlayerView<S> {
    pub fn new(surface: S) -> Self {
        let (load_tx, load_rx) = bounded(32);
        Self {
            surface,
            observer: RefCell::new(None),
            loading_view: RefCell::new(None),
            autoplay: Cell::new(false),
            load_tx,
            load_rx,
        }
    }

    pub fn set_observer(&self, observer: Rc<dyn PlayerViewObserver>) {
        *self.observer.borrow_mut() = Some(observer);
    }

    /// 跨线程装载句柄；投递的请求在下一次 [`pump`](Self::pump) 执行
    pub fn loader(&self) -> PlayerLoader {
        PlayerLoader::new(self.load_tx.clone())
    }

    /// 在持有线程上排空装载队列
    pub fn pump(&self) {
        while let Ok(request) = self.load_rx.try_recv() {
            self.perform_load(request);
        }
    }

    /// 装载单视频，整页重建文档
    ///
    /// 只换视频不重载文档时应改用 `cue_video_by_id` 系列方法。
    pub fn load_video(&self, video_id: &str, vars: &PlayerVars) {
        self.perform_load(LoadRequest::video(video_id, vars));
    }

    /// 装载播放列表，整页重建文档
    pub fn load_playlist(&self, playlist_id: &str, vars: &PlayerVars) {
        self.perform_load(LoadRequest::playlist(playlist_id, vars));
    }

    fn perform_load(&self, request: LoadRequest) {
        info!("loading player document: {}", request.embed_url);
        self.autoplay.set(request.autoplay);

        if let Some(observer) = self.observer() {
            self.surface
                .set_background(observer.preferred_background_color());
        }

        let html = player_html(&request.embed_url);
        self.surface.load_html(&html, request.base_url.as_deref());

        if let Some(observer) = self.observer() {
            if let Some(placeholder) = observer.preferred_loading_view() {
                *self.loading_view.borrow_mut() = Some(placeholder);
            }
        }
    }

    // 借用在调用观察者前释放，事件处理里可以安全地重入视图方法
    fn observer(&self) -> Option<Rc<dyn PlayerViewObserver>> {
        self.observer.borrow().clone()
    }

    fn dismiss_loading_view(&self) {
        if let Some(placeholder) = self.loading_view.borrow_mut().take() {
            placeholder.dismiss();
        }
    }
}

// ============================================================================
// 出站命令
// ============================================================================

impl<S: WebSurface> YoutubePlayerView<S> {
    fn command(&self, command: PlayerCommand) {
        let script = command.to_js();
        debug!("eval: {script}");
        self.surface.eval(&script);
    }

    pub fn play(&self) {
        self.command(PlayerCommand::Play);
    }

    /// 暂停播放
    ///
    /// 先本地合成一次 paused 状态通知再求值 JS 命令，观察者不必等
    /// 远端回报就能同步看到暂停。
    pub fn pause(&self) {
        self.handle_event(PlayerEvent {
            callback: PlayerCallback::StateChange,
            data: Some(PlayerState::Paused.code().to_owned()),
        });
        self.command(PlayerCommand::Pause);
    }

    pub fn stop(&self) {
        self.command(PlayerCommand::Stop);
    }

    pub fn seek(&self, seconds: f64, allow_seek_ahead: bool) {
        self.command(PlayerCommand::Seek {
            seconds,
            allow_seek_ahead,
        });
    }

    pub fn load_video_by_id(
        &self,
        video_id: &str,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::LoadVideoById {
            video_id: video_id.to_owned(),
            start_seconds,
            end_seconds,
            quality,
        });
    }

    pub fn cue_video_by_id(
        &self,
        video_id: &str,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::CueVideoById {
            video_id: video_id.to_owned(),
            start_seconds,
            end_seconds,
            quality,
        });
    }

    pub fn load_video_by_url(
        &self,
        video_url: &str,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::LoadVideoByUrl {
            video_url: video_url.to_owned(),
            start_seconds,
            end_seconds,
            quality,
        });
    }

    pub fn cue_video_by_url(
        &self,
        video_url: &str,
        start_seconds: f64,
        end_seconds: Option<f64>,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::CueVideoByUrl {
            video_url: video_url.to_owned(),
            start_seconds,
            end_seconds,
            quality,
        });
    }

    pub fn cue_playlist_by_id(
        &self,
        playlist_id: &str,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::CuePlaylistById {
            playlist_id: playlist_id.to_owned(),
            index,
            start_seconds,
            quality,
        });
    }

    pub fn cue_playlist_by_videos(
        &self,
        video_ids: &[String],
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::CuePlaylistByVideos {
            video_ids: video_ids.to_vec(),
            index,
            start_seconds,
            quality,
        });
    }

    pub fn load_playlist_by_id(
        &self,
        playlist_id: &str,
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::LoadPlaylistById {
            playlist_id: playlist_id.to_owned(),
            index,
            start_seconds,
            quality,
        });
    }

    pub fn load_playlist_by_videos(
        &self,
        video_ids: &[String],
        index: u32,
        start_seconds: f64,
        quality: PlaybackQuality,
    ) {
        self.command(PlayerCommand::LoadPlaylistByVideos {
            video_ids: video_ids.to_vec(),
            index,
            start_seconds,
            quality,
        });
    }

    pub fn set_playback_rate(&self, rate: f64) {
        self.command(PlayerCommand::SetPlaybackRate(rate));
    }

    pub fn set_loop(&self, looping: bool) {
        self.command(PlayerCommand::SetLoop(looping));
    }

    pub fn set_shuffle(&self, shuffle: bool) {
        self.command(PlayerCommand::SetShuffle(shuffle));
    }

    pub fn set_playback_quality(&self, quality: PlaybackQuality) {
        self.command(PlayerCommand::SetPlaybackQuality(quality));
    }

    pub fn next_video(&self) {
        self.command(PlayerCommand::NextVideo);
    }

    pub fn previous_video(&self) {
        self.command(PlayerCommand::PreviousVideo);
    }

    pub fn play_video_at(&self, index: u32) {
        self.command(PlayerCommand::PlayVideoAt(index));
    }
}

// ============================================================================
// 查询
// ============================================================================

// JSON 数组结果既可能以数组本体也可能以 JSON 文本字符串回来
fn json_array<T: serde::de::DeserializeOwned>(value: Option<Value>) -> Option<Vec<T>> {
    match value {
        Some(Value::Array(items)) => serde_json::from_value(Value::Array(items)).ok(),
        Some(Value::String(text)) => serde_json::from_str(&text).ok(),
        _ => None,
    }
}

impl<S: WebSurface> YoutubePlayerView<S> {
    fn query(&self, query: PlayerQuery, completion: Box<dyn FnOnce(Option<Value>)>) {
        debug!("eval: {}", query.to_js());
        self.surface.eval_with_result(query.to_js(), completion);
    }

    pub fn fetch_playback_rate(&self, handler: impl FnOnce(Option<f64>) + 'static) {
        self.query(
            PlayerQuery::PlaybackRate,
            Box::new(move |value| handler(value.and_then(|v| v.as_f64()))),
        );
    }

    pub fn fetch_available_playback_rates(
        &self,
        handler: impl FnOnce(Option<Vec<f64>>) + 'static,
    ) {
        self.query(
            PlayerQuery::AvailablePlaybackRates,
            Box::new(move |value| handler(json_array(value))),
        );
    }

    /// 已缓冲比例，0..1
    pub fn fetch_video_loaded_fraction(&self, handler: impl FnOnce(Option<f64>) + 'static) {
        self.query(
            PlayerQuery::VideoLoadedFraction,
            Box::new(move |value| handler(value.and_then(|v| v.as_f64()))),
        );
    }

    pub fn fetch_player_state(&self, handler: impl FnOnce(PlayerState) + 'static) {
        self.query(
            PlayerQuery::PlayerState,
            Box::new(move |value| {
                let state = match value {
                    Some(Value::String(code)) => PlayerState::from_code(&code),
                    _ => PlayerState::Unknown,
                };
                handler(state);
            }),
        );
    }

    pub fn fetch_current_time(&self, handler: impl FnOnce(Option<f64>) + 'static) {
        self.query(
            PlayerQuery::CurrentTime,
            Box::new(move |value| handler(value.and_then(|v| v.as_f64()))),
        );
    }

    pub fn fetch_playback_quality(&self, handler: impl FnOnce(PlaybackQuality) + 'static) {
        self.query(
            PlayerQuery::PlaybackQuality,
            Box::new(move |value| {
                let quality = match value {
                    Some(Value::String(code)) => PlaybackQuality::from_code(&code),
                    _ => PlaybackQuality::Unknown,
                };
                handler(quality);
            }),
        );
    }

    /// 可用画质列表；逗号分隔的码串，未识别的值直接丢弃
    pub fn fetch_available_qualities(
        &self,
        handler: impl FnOnce(Option<Vec<PlaybackQuality>>) + 'static,
    ) {
        self.query(
            PlayerQuery::AvailableQualityLevels,
            Box::new(move |value| {
                let qualities = match value {
                    Some(Value::String(codes)) => Some(
                        codes
                            .split(',')
                            .map(PlaybackQuality::from_code)
                            .filter(|q| *q != PlaybackQuality::Unknown)
                            .collect(),
                    ),
                    _ => None,
                };
                handler(qualities);
            }),
        );
    }

    pub fn fetch_duration(&self, handler: impl FnOnce(Option<f64>) + 'static) {
        self.query(
            PlayerQuery::Duration,
            Box::new(move |value| handler(value.and_then(|v| v.as_f64()))),
        );
    }

    pub fn fetch_video_url(&self, handler: impl FnOnce(Option<String>) + 'static) {
        self.query(
            PlayerQuery::VideoUrl,
            Box::new(move |value| {
                handler(value.and_then(|v| v.as_str().map(str::to_owned)));
            }),
        );
    }

    pub fn fetch_video_embed_code(&self, handler: impl FnOnce(Option<String>) + 'static) {
        self.query(
            PlayerQuery::VideoEmbedCode,
            Box::new(move |value| {
                handler(value.and_then(|v| v.as_str().map(str::to_owned)));
            }),
        );
    }

    pub fn fetch_playlist(&self, handler: impl FnOnce(Option<Vec<String>>) + 'static) {
        self.query(
            PlayerQuery::Playlist,
            Box::new(move |value| handler(json_array(value))),
        );
    }

    pub fn fetch_playlist_index(&self, handler: impl FnOnce(Option<i64>) + 'static) {
        self.query(
            PlayerQuery::PlaylistIndex,
            Box::new(move |value| {
                let index = value.and_then(|v| {
                    v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))
                });
                handler(index);
            }),
        );
    }
}

// ============================================================================
// 入站事件
// ============================================================================

impl<S: WebSurface> YoutubePlayerView<S> {
    /// 导航拦截：事件 scheme 一律取消（无论能否解析），其余放行
    pub fn decide_navigation(&self, url: &str) -> NavigationPolicy {
        if !is_event_url(url) {
            return NavigationPolicy::Allow;
        }

        match parse_event_url(url) {
            Some(event) => self.handle_event(event),
            None => warn!("dropping unrecognized bridge event: {url}"),
        }
        NavigationPolicy::Cancel
    }

    /// 文档传输层加载失败：只撤加载视图，不产生错误通知
    pub fn did_fail_load(&self) {
        warn!("player document failed to load");
        self.dismiss_loading_view();
    }

    fn handle_event(&self, event: PlayerEvent) {
        match event.callback {
            PlayerCallback::Ready => {
                self.dismiss_loading_view();
                // 隐式 play 必须先于就绪通知
                if self.autoplay.get() {
                    self.play();
                }
                if let Some(observer) = self.observer() {
                    observer.on_ready();
                }
            }
            PlayerCallback::StateChange => {
                if let Some(code) = event.data {
                    if let Some(observer) = self.observer() {
                        observer.on_state_change(PlayerState::from_code(&code));
                    }
                }
            }
            PlayerCallback::QualityChange => {
                if let Some(code) = event.data {
                    if let Some(observer) = self.observer() {
                        observer.on_quality_change(PlaybackQuality::from_code(&code));
                    }
                }
            }
            PlayerCallback::Error => {
                let error = event
                    .data
                    .as_deref()
                    .map_or(PlayerError::Unknown, PlayerError::from_code);
                if let Some(observer) = self.observer() {
                    observer.on_error(error);
                }
            }
            PlayerCallback::PlayTime => {
                match event.data.as_deref().and_then(|d| d.parse::<f32>().ok()) {
                    Some(seconds) => {
                        if let Some(observer) = self.observer() {
                            observer.on_play_time(seconds);
                        }
                    }
                    None => warn!("dropping unparsable play time payload"),
                }
            }
            PlayerCallback::ApiLoadFailed => {
                warn!("YouTube iframe API failed to load");
                self.dismiss_loading_view();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use ytframe_protocol::VarValue;

    type Journal = Rc<RefCell<Vec<String>>>;

    fn journal() -> Journal {
        Rc::new(RefCell::new(Vec::new()))
    }

    struct FakeSurface {
        journal: Journal,
        loaded: Rc<RefCell<Option<(String, Option<String>)>>>,
        background: Rc<Cell<Rgba>>,
        // 下一次带结果求值的桩返回值
        result: Rc<RefCell<Option<Value>>>,
    }

    use crate::Rgba;

    impl WebSurface for FakeSurface {
        fn load_html(&self, html: &str, base_url: Option<&str>) {
            self.journal.borrow_mut().push("load".to_owned());
            *self.loaded.borrow_mut() = Some((html.to_owned(), base_url.map(str::to_owned)));
        }

        fn set_background(&self, color: Rgba) {
            self.background.set(color);
        }

        fn eval(&self, script: &str) {
            self.journal.borrow_mut().push(format!("eval:{script}"));
        }

        fn eval_with_result(&self, script: &str, completion: crate::EvalCompletion) {
            self.journal.borrow_mut().push(format!("eval:{script}"));
            completion(self.result.borrow_mut().take());
        }
    }

    struct Harness {
        view: YoutubePlayerView<FakeSurface>,
        journal: Journal,
        loaded: Rc<RefCell<Option<(String, Option<String>)>>>,
        background: Rc<Cell<Rgba>>,
        result: Rc<RefCell<Option<Value>>>,
    }

    fn harness() -> Harness {
        let journal = journal();
        let loaded = Rc::new(RefCell::new(None));
        let background = Rc::new(Cell::new(Rgba::WHITE));
        let result = Rc::new(RefCell::new(None));
        let surface = FakeSurface {
            journal: journal.clone(),
            loaded: loaded.clone(),
            background: background.clone(),
            result: result.clone(),
        };
        Harness {
            view: YoutubePlayerView::new(surface),
            journal,
            loaded,
            background,
            result,
        }
    }

    struct Recorder {
        journal: Journal,
        with_placeholder: bool,
        color: Rgba,
    }

    impl Recorder {
        fn install(h: &Harness) -> Rc<Recorder> {
            Self::install_with(h, false, Rgba::WHITE)
        }

        fn install_with(h: &Harness, with_placeholder: bool, color: Rgba) -> Rc<Recorder> {
            let recorder = Rc::new(Recorder {
                journal: h.journal.clone(),
                with_placeholder,
                color,
            });
            h.view.set_observer(recorder.clone());
            recorder
        }
    }

    struct Placeholder {
        journal: Journal,
    }

    impl LoadingPlaceholder for Placeholder {
        fn dismiss(&self) {
            self.journal.borrow_mut().push("placeholder-dismissed".to_owned());
        }
    }

    impl PlayerViewObserver for Recorder {
        fn on_ready(&self) {
            self.journal.borrow_mut().push("ready".to_owned());
        }

        fn on_state_change(&self, state: PlayerState) {
            self.journal.borrow_mut().push(format!("state:{state:?}"));
        }

        fn on_quality_change(&self, quality: PlaybackQuality) {
            self.journal.borrow_mut().push(format!("quality:{quality:?}"));
        }

        fn on_error(&self, error: PlayerError) {
            self.journal.borrow_mut().push(format!("error:{error:?}"));
        }

        fn on_play_time(&self, seconds: f32) {
            self.journal.borrow_mut().push(format!("time:{seconds}"));
        }

        fn preferred_background_color(&self) -> Rgba {
            self.color
        }

        fn preferred_loading_view(&self) -> Option<Box<dyn LoadingPlaceholder>> {
            self.with_placeholder.then(|| {
                Box::new(Placeholder {
                    journal: self.journal.clone(),
                }) as Box<dyn LoadingPlaceholder>
            })
        }
    }

    fn autoplay_vars() -> PlayerVars {
        let mut vars = PlayerVars::new();
        vars.insert("autoplay".into(), VarValue::Int(1));
        vars
    }

    #[test]
    fn test_event_navigation_cancelled_and_notified_once() {
        let h = harness();
        Recorder::install(&h);

        let policy = h.view.decide_navigation("ytplayer://onStateChange?data=1");
        assert_eq!(policy, NavigationPolicy::Cancel);
        assert_eq!(*h.journal.borrow(), vec!["state:Playing".to_owned()]);
    }

    #[test]
    fn test_foreign_navigation_allowed_without_notification() {
        let h = harness();
        Recorder::install(&h);

        let policy = h.view.decide_navigation("https://youtube.com/anything");
        assert_eq!(policy, NavigationPolicy::Allow);
        assert!(h.journal.borrow().is_empty());
    }

    #[test]
    fn test_unrecognized_event_cancelled_and_dropped() {
        let h = harness();
        Recorder::install(&h);

        let policy = h.view.decide_navigation("ytplayer://onBogus?data=1");
        assert_eq!(policy, NavigationPolicy::Cancel);
        assert!(h.journal.borrow().is_empty());
    }

    #[test]
    fn test_pause_synthesizes_paused_before_js() {
        let h = harness();
        Recorder::install(&h);

        h.view.pause();
        assert_eq!(
            *h.journal.borrow(),
            vec!["state:Paused".to_owned(), "eval:player.pauseVideo();".to_owned()]
        );
    }

    #[test]
    fn test_ready_with_autoplay_plays_before_notifying() {
        let h = harness();
        Recorder::install(&h);
        h.view.load_video("abc123", &autoplay_vars());

        h.view.decide_navigation("ytplayer://onReady?data=null");
        assert_eq!(
            *h.journal.borrow(),
            vec![
                "load".to_owned(),
                "eval:player.playVideo();".to_owned(),
                "ready".to_owned(),
            ]
        );
    }

    #[test]
    fn test_ready_without_autoplay_does_not_play() {
        let h = harness();
        Recorder::install(&h);
        h.view.load_video("abc123", &PlayerVars::new());

        h.view.decide_navigation("ytplayer://onReady?data=null");
        assert_eq!(
            *h.journal.borrow(),
            vec!["load".to_owned(), "ready".to_owned()]
        );
    }

    #[test]
    fn test_load_applies_background_and_document() {
        let h = harness();
        Recorder::install_with(&h, false, Rgba([1, 2, 3, 4]));

        let mut vars = PlayerVars::new();
        vars.insert("origin".into(), VarValue::Str("https://example.com".into()));
        h.view.load_video("abc123", &vars);

        assert_eq!(h.background.get(), Rgba([1, 2, 3, 4]));
        let loaded = h.loaded.borrow();
        let (html, base_url) = loaded.as_ref().unwrap();
        assert!(html.contains("https://www.youtube.com/embed/abc123?"));
        assert!(html.contains("enablejsapi=1"));
        assert_eq!(base_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_placeholder_dismissed_on_ready() {
        let h = harness();
        Recorder::install_with(&h, true, Rgba::WHITE);
        h.view.load_video("abc123", &PlayerVars::new());

        h.view.decide_navigation("ytplayer://onReady?data=null");
        assert_eq!(
            *h.journal.borrow(),
            vec![
                "load".to_owned(),
                "placeholder-dismissed".to_owned(),
                "ready".to_owned(),
            ]
        );

        // 再次 ready 不会二次撤除
        h.view.decide_navigation("ytplayer://onReady?data=null");
        assert_eq!(
            h.journal
                .borrow()
                .iter()
                .filter(|e| *e == "placeholder-dismissed")
                .count(),
            1
        );
    }

    #[test]
    fn test_placeholder_dismissed_on_transport_failure() {
        let h = harness();
        Recorder::install_with(&h, true, Rgba::WHITE);
        h.view.load_video("abc123", &PlayerVars::new());

        h.view.did_fail_load();
        assert!(h.journal.borrow().contains(&"placeholder-dismissed".to_owned()));
        // 传输层失败不是播放器错误，不产生错误通知
        assert!(!h.journal.borrow().iter().any(|e| e.starts_with("error:")));
    }

    #[test]
    fn test_placeholder_dismissed_on_api_load_failure() {
        let h = harness();
        Recorder::install_with(&h, true, Rgba::WHITE);
        h.view.load_video("abc123", &PlayerVars::new());

        h.view
            .decide_navigation("ytplayer://onYouTubeIframeAPIFailedToLoad");
        assert!(h.journal.borrow().contains(&"placeholder-dismissed".to_owned()));
        assert!(!h.journal.borrow().iter().any(|e| e.starts_with("error:")));
    }

    #[test]
    fn test_error_codes_mapped_with_unknown_fallback() {
        let h = harness();
        Recorder::install(&h);

        h.view.decide_navigation("ytplayer://onError?data=100");
        h.view.decide_navigation("ytplayer://onError?data=150");
        h.view.decide_navigation("ytplayer://onError?data=77");
        h.view.decide_navigation("ytplayer://onError");
        assert_eq!(
            *h.journal.borrow(),
            vec![
                "error:VideoNotFound".to_owned(),
                "error:NotEmbeddable".to_owned(),
                "error:Unknown".to_owned(),
                "error:Unknown".to_owned(),
            ]
        );
    }

    #[test]
    fn test_quality_change_notified() {
        let h = harness();
        Recorder::install(&h);

        h.view
            .decide_navigation("ytplayer://onPlaybackQualityChange?data=hd720");
        assert_eq!(*h.journal.borrow(), vec!["quality:Hd720".to_owned()]);
    }

    #[test]
    fn test_play_time_parsed_and_malformed_dropped() {
        let h = harness();
        Recorder::install(&h);

        h.view.decide_navigation("ytplayer://onPlayTime?data=12.5");
        assert_eq!(*h.journal.borrow(), vec!["time:12.5".to_owned()]);

        let policy = h.view.decide_navigation("ytplayer://onPlayTime?data=abc");
        assert_eq!(policy, NavigationPolicy::Cancel);
        assert_eq!(h.journal.borrow().len(), 1);
    }

    #[test]
    fn test_fetch_player_state_maps_code() {
        let h = harness();
        *h.result.borrow_mut() = Some(json!("2"));

        let seen = Rc::new(Cell::new(PlayerState::Unknown));
        let out = seen.clone();
        h.view.fetch_player_state(move |state| out.set(state));
        assert_eq!(seen.get(), PlayerState::Paused);
        assert_eq!(
            *h.journal.borrow(),
            vec!["eval:player.getPlayerState().toString();".to_owned()]
        );
    }

    #[test]
    fn test_fetch_player_state_type_mismatch_is_unknown() {
        let h = harness();
        *h.result.borrow_mut() = Some(json!(42));

        let seen = Rc::new(Cell::new(PlayerState::Playing));
        let out = seen.clone();
        h.view.fetch_player_state(move |state| out.set(state));
        assert_eq!(seen.get(), PlayerState::Unknown);
    }

    #[test]
    fn test_fetch_available_qualities_drops_unrecognized() {
        let h = harness();
        *h.result.borrow_mut() = Some(json!("hd720,bogus,small"));

        let seen = Rc::new(RefCell::new(None));
        let out = seen.clone();
        h.view.fetch_available_qualities(move |q| *out.borrow_mut() = q);
        assert_eq!(
            *seen.borrow(),
            Some(vec![PlaybackQuality::Hd720, PlaybackQuality::Small])
        );
    }

    #[test]
    fn test_fetch_available_rates_json_array() {
        let h = harness();
        *h.result.borrow_mut() = Some(json!([0.25, 1.0, 2.0]));

        let seen = Rc::new(RefCell::new(None));
        let out = seen.clone();
        h.view
            .fetch_available_playback_rates(move |r| *out.borrow_mut() = r);
        assert_eq!(*seen.borrow(), Some(vec![0.25, 1.0, 2.0]));
    }

    #[test]
    fn test_fetch_playlist_json_text_form() {
        let h = harness();
        *h.result.borrow_mut() = Some(json!("[\"a\",\"b\"]"));

        let seen = Rc::new(RefCell::new(None));
        let out = seen.clone();
        h.view.fetch_playlist(move |p| *out.borrow_mut() = p);
        assert_eq!(*seen.borrow(), Some(vec!["a".to_owned(), "b".to_owned()]));
    }

    #[test]
    fn test_fetch_with_no_result_resolves_none() {
        let h = harness();

        let seen = Rc::new(Cell::new(Some(1.0)));
        let out = seen.clone();
        h.view.fetch_current_time(move |t| out.set(t));
        assert_eq!(seen.get(), None);
    }

    #[test]
    fn test_fetch_playlist_index_accepts_float() {
        let h = harness();
        *h.result.borrow_mut() = Some(json!(2.0));

        let seen = Rc::new(Cell::new(None));
        let out = seen.clone();
        h.view.fetch_playlist_index(move |i| out.set(i));
        assert_eq!(seen.get(), Some(2));
    }

    #[test]
    fn test_loader_marshals_from_other_thread() {
        let h = harness();
        let loader = h.view.loader();

        std::thread::spawn(move || {
            loader.load_video("abc123", &PlayerVars::new()).unwrap();
        })
        .join()
        .unwrap();

        assert!(h.loaded.borrow().is_none());
        h.view.pump();
        let loaded = h.loaded.borrow();
        assert!(loaded.as_ref().unwrap().0.contains("/embed/abc123?"));
    }

    #[test]
    fn test_loader_detached_after_view_dropped() {
        let h = harness();
        let loader = h.view.loader();
        drop(h);

        let err = loader.load_video("abc123", &PlayerVars::new());
        assert!(matches!(err, Err(crate::LoadError::Detached)));
    }

    #[test]
    fn test_command_surface_strings() {
        let h = harness();

        h.view.play();
        h.view.stop();
        h.view.seek(30.0, true);
        h.view.set_playback_rate(1.5);
        h.view.set_loop(true);
        h.view.next_video();
        h.view.play_video_at(2);
        h.view
            .load_video_by_id("v1", 0.0, None, PlaybackQuality::Default);

        assert_eq!(
            *h.journal.borrow(),
            vec![
                "eval:player.playVideo();".to_owned(),
                "eval:player.stopVideo();".to_owned(),
                "eval:player.seekTo(30, true);".to_owned(),
                "eval:player.setPlaybackRate(1.5);".to_owned(),
                "eval:player.setLoop(true);".to_owned(),
                "eval:player.nextVideo();".to_owned(),
                "eval:player.playVideoAt(2);".to_owned(),
                "eval:player.loadVideoById('v1', 0, 'default');".to_owned(),
            ]
        );
    }
}
