//! 页面文档生成
//!
//! 输出固定的 HTML 文档：桥接脚本 + 铺满视口的 iframe。脚本异步加载
//! YouTube iframe API，注册事件处理函数，并把每个播放器事件转成
//! `ytplayer://` 整页跳转交由宿主侧拦截。本模块只产出文本。

/// iframe 元素 id，标记与脚本必须一致
const FRAME_ID: &str = "player-frame";

// 桥接脚本要点：
// - API 脚本加载失败时上报 onYouTubeIframeAPIFailedToLoad；
// - 每 500ms 轮询一次，仅在 PLAYING 状态下上报 onPlayTime；
// - 错误码 100（视频不存在）后播放器会立即补发一个多余的状态变更，
//   用一次性 error 标志吞掉它。
const BRIDGE_SCRIPT: &str = r#"<script type="text/javascript">
    var tag = document.createElement('script');
    tag.src = 'https://www.youtube.com/iframe_api';
    tag.onerror = "window.location.href='ytplayer://onYouTubeIframeAPIFailedToLoad'";
    var firstScriptTag = document.getElementsByTagName('script')[0];
    firstScriptTag.parentNode.insertBefore(tag, firstScriptTag);

    var player;
    var error = false;

    function onYouTubeIframeAPIReady() {
        player = new YT.Player('player-frame', {
            events: {
                'onReady': onReady,
                'onStateChange': onStateChange,
                'onPlaybackQualityChange': onPlaybackQualityChange,
                'onError': onPlayerError
            }
        });

        function reportPlayTime() {
            if (player.getPlayerState() == YT.PlayerState.PLAYING) {
                window.location.href = 'ytplayer://onPlayTime?data=' + player.getCurrentTime();
            }
        }
        window.setInterval(reportPlayTime, 500);
    }

    function onReady(event) {
        window.location.href = 'ytplayer://onReady?data=' + event.data;
    }

    function onStateChange(event) {
        if (!error) {
            window.location.href = 'ytplayer://onStateChange?data=' + event.data;
        } else {
            error = false;
        }
    }

    function onPlaybackQualityChange(event) {
        window.location.href = 'ytplayer://onPlaybackQualityChange?data=' + event.data;
    }

    function onPlayerError(event) {
        if (event.data == 100) {
            error = true;
        }
        window.location.href = 'ytplayer://onError?data=' + event.data;
    }

    window.onresize = function() {
        player.setSize(window.innerWidth, window.innerHeight);
    }
</script>"#;

/// 生成完整的播放器页面，`embed_url` 原样写入 iframe 的 `src`
pub fn player_html(embed_url: &str) -> String {
    format!(
        "<head>{BRIDGE_SCRIPT}\
         <meta name=viewport content='width=device-width, initial-scale=1'>\
         <style type='text/css'> body {{ margin: 0;}} </style></head>\
         <iframe id='{FRAME_ID}' width='100%' height='100%' src='{embed_url}' \
         frameborder='0' allowfullscreen></iframe>"
    )
}
