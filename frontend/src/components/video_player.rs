use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlMediaElement};
use yew::prelude::*;

/// Frame shape a clip was cut for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AspectRatio {
    /// 16:9
    Landscape,
    /// 9:16, reels and shorts
    Portrait,
}

impl AspectRatio {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "16:9" => Some(Self::Landscape),
            "9:16" => Some(Self::Portrait),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
        }
    }

    fn frame_class(self) -> &'static str {
        match self {
            Self::Landscape => "aspect-video",
            Self::Portrait => "aspect-portrait",
        }
    }
}

/// Playback position as a percentage; 0 while the duration is still unknown.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}

/// Where a click on the progress bar lands, as a fraction of the bar.
pub fn scrub_fraction(click_x: f64, bar_left: f64, bar_width: f64) -> Option<f64> {
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return None;
    }
    Some(((click_x - bar_left) / bar_width).clamp(0.0, 1.0))
}

/// Touch devices block unmuted autoplay; once that happened and the clip is
/// running muted, offer an explicit way to turn sound on.
pub fn sound_prompt_visible(coarse_pointer: bool, sound_blocked: bool, muted: bool, playing: bool) -> bool {
    coarse_pointer && sound_blocked && muted && playing
}

fn is_coarse_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

async fn play(video: &HtmlMediaElement) -> Result<(), JsValue> {
    JsFuture::from(video.play()?).await.map(|_| ())
}

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub src: AttrValue,
    pub title: AttrValue,
    pub client: AttrValue,
    pub impact: AttrValue,
    pub aspect_ratio: AspectRatio,
}

#[function_component]
pub fn VideoPlayer(props: &VideoPlayerProps) -> Html {
    let video_ref = use_node_ref();
    let is_playing = use_state(|| false);
    let is_muted = use_state(|| false);
    let progress = use_state(|| 0.0_f64);
    let sound_blocked = use_state(|| false);
    let coarse_pointer = use_state(is_coarse_pointer);

    // Inline playback on iOS, audible by default
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    let _ = video.set_attribute("playsinline", "true");
                    let _ = video.set_attribute("webkit-playsinline", "true");
                    video.set_loop(true);
                    video.set_volume(1.0);
                    video.set_muted(false);
                }
                || ()
            },
            props.src.clone(),
        );
    }

    let toggle_play = {
        let video_ref = video_ref.clone();
        let is_playing = is_playing.clone();
        let is_muted = is_muted.clone();
        let sound_blocked = sound_blocked.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlMediaElement>() else {
                return;
            };
            if *is_playing {
                let _ = video.pause();
                return;
            }
            // First tap counts as the user gesture that allows sound
            video.set_muted(false);
            video.set_volume(1.0);
            is_muted.set(false);
            let is_muted = is_muted.clone();
            let sound_blocked = sound_blocked.clone();
            spawn_local(async move {
                if let Err(e) = play(&video).await {
                    log::warn!("Playback with sound was blocked: {:?}", e);
                    video.set_muted(true);
                    is_muted.set(true);
                    sound_blocked.set(true);
                    if let Err(e) = play(&video).await {
                        log::error!("Muted playback failed too: {:?}", e);
                    }
                }
            });
        })
    };

    let toggle_mute = {
        let video_ref = video_ref.clone();
        let is_muted = is_muted.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                let muted = !*is_muted;
                video.set_muted(muted);
                is_muted.set(muted);
            }
        })
    };

    let enable_sound = {
        let video_ref = video_ref.clone();
        let is_muted = is_muted.clone();
        let sound_blocked = sound_blocked.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                video.set_muted(false);
                video.set_volume(1.0);
                is_muted.set(false);
                sound_blocked.set(false);
            }
        })
    };

    let on_time_update = {
        let video_ref = video_ref.clone();
        let progress = progress.clone();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                progress.set(progress_percent(video.current_time(), video.duration()));
            }
        })
    };

    let on_progress_click = {
        let video_ref = video_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlMediaElement>() else {
                return;
            };
            let Some(bar) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let duration = video.duration();
            if let Some(fraction) = scrub_fraction(e.client_x() as f64, rect.left(), rect.width()) {
                if duration.is_finite() {
                    video.set_current_time(fraction * duration);
                }
            }
        })
    };

    let on_play = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(true))
    };
    let on_pause = {
        let is_playing = is_playing.clone();
        Callback::from(move |_: Event| is_playing.set(false))
    };

    let show_sound_prompt = sound_prompt_visible(*coarse_pointer, *sound_blocked, *is_muted, *is_playing);

    html! {
        <div class={classes!("video-player", match props.aspect_ratio {
            AspectRatio::Portrait => "portrait",
            AspectRatio::Landscape => "landscape",
        })} data-aspect={props.aspect_ratio.as_str()}>
            <div class={classes!("video-frame", props.aspect_ratio.frame_class())}>
                <video
                    ref={video_ref}
                    src={props.src.clone()}
                    class="video-media"
                    preload="metadata"
                    onclick={toggle_play.clone()}
                    ontimeupdate={on_time_update}
                    onplay={on_play}
                    onpause={on_pause}
                />

                if !*is_playing {
                    <div class="video-overlay">
                        <div class="video-overlay-button">
                            <i class="fas fa-play"></i>
                        </div>
                    </div>
                }

                if show_sound_prompt {
                    <button class="video-sound-prompt" onclick={enable_sound}>
                        <i class="fas fa-volume-up"></i>{" Tap for sound"}
                    </button>
                }

                <div class="video-controls">
                    <div class="video-buttons">
                        <button
                            onclick={toggle_play}
                            aria-label={if *is_playing { "Pause" } else { "Play" }}
                        >
                            <i class={if *is_playing { "fas fa-pause" } else { "fas fa-play" }}></i>
                        </button>
                        <button
                            onclick={toggle_mute}
                            aria-label={if *is_muted { "Unmute" } else { "Mute" }}
                        >
                            <i class={if *is_muted { "fas fa-volume-mute" } else { "fas fa-volume-up" }}></i>
                        </button>
                    </div>
                    <div class="video-progress" onclick={on_progress_click}>
                        <div class="video-progress-fill" style={format!("width: {}%;", *progress)}></div>
                    </div>
                </div>
            </div>

            <div class="video-info">
                <h3>{ props.title.clone() }</h3>
                <p class="video-client">{ props.client.clone() }</p>
                <p class="video-impact">{ props.impact.clone() }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_tags_round_trip() {
        assert_eq!(AspectRatio::parse("16:9"), Some(AspectRatio::Landscape));
        assert_eq!(AspectRatio::parse(" 9:16 "), Some(AspectRatio::Portrait));
        assert_eq!(AspectRatio::parse("4:3"), None);
        assert_eq!(AspectRatio::Portrait.as_str(), "9:16");
        assert_eq!(AspectRatio::Landscape.frame_class(), "aspect-video");
    }

    #[test]
    fn progress_is_zero_until_metadata_loads() {
        assert_eq!(progress_percent(3.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(3.0, 0.0), 0.0);
        assert_eq!(progress_percent(3.0, f64::INFINITY), 0.0);
        assert_eq!(progress_percent(15.0, 60.0), 25.0);
        assert_eq!(progress_percent(61.0, 60.0), 100.0);
    }

    #[test]
    fn scrub_position_is_clamped_to_the_bar() {
        assert_eq!(scrub_fraction(150.0, 100.0, 200.0), Some(0.25));
        assert_eq!(scrub_fraction(90.0, 100.0, 200.0), Some(0.0));
        assert_eq!(scrub_fraction(400.0, 100.0, 200.0), Some(1.0));
        assert_eq!(scrub_fraction(150.0, 100.0, 0.0), None);
    }

    #[test]
    fn sound_prompt_only_on_touch_after_a_block() {
        assert!(sound_prompt_visible(true, true, true, true));
        assert!(!sound_prompt_visible(false, true, true, true));
        assert!(!sound_prompt_visible(true, false, true, true));
        assert!(!sound_prompt_visible(true, true, false, true));
        assert!(!sound_prompt_visible(true, true, true, false));
    }
}
