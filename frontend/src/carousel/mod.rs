pub mod ring;

use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ResizeObserver};
use yew::prelude::*;

use crate::components::video_player::{AspectRatio, VideoPlayer};
use ring::{CarouselTuning, RingState};

/// One panel of the ring.
#[derive(Clone, PartialEq, Debug)]
pub struct CarouselItem {
    pub src: AttrValue,
    pub title: AttrValue,
    pub client: AttrValue,
    pub impact: AttrValue,
    pub aspect_ratio: AspectRatio,
}

pub enum RingAction {
    SetPanelCount(usize),
    Resize { panel_width: f64, viewport_width: f64 },
    BeginDrag(f64),
    UpdateDrag(f64),
    EndDrag,
    Step(i32),
}

impl Reducible for RingState {
    type Action = RingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RingAction::SetPanelCount(count) => next.set_panel_count(count),
            RingAction::Resize { panel_width, viewport_width } => {
                next.recompute_radius(panel_width, viewport_width);
            }
            RingAction::BeginDrag(x) => next.begin_drag(x),
            RingAction::UpdateDrag(x) => next.update_drag(x),
            RingAction::EndDrag => {
                next.end_drag();
            }
            RingAction::Step(direction) => next.step(direction),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCylinderCarouselProps {
    pub items: Vec<CarouselItem>,
    #[prop_or_default]
    pub class: Classes,
}

const CAROUSEL_CSS: &str = r#"
    .cylinder-carousel {
        position: relative;
        width: 100%;
    }
    .cylinder-viewport {
        position: relative;
        width: 100%;
        max-width: 72rem;
        height: 360px;
        margin: 0 auto;
        outline: none;
    }
    .cylinder-ring {
        position: absolute;
        inset: 0;
        margin: 0 auto;
        will-change: transform;
        touch-action: pan-y;
        user-select: none;
    }
    .cylinder-ring.grab { cursor: grab; }
    .cylinder-ring.grabbing { cursor: grabbing; }
    .cylinder-panel {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 78%;
        translate: -50% -50%;
    }
    .cylinder-card {
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: var(--card);
        overflow: hidden;
    }
    .cylinder-controls {
        margin-top: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
    }
    .cylinder-position {
        min-width: 3.5rem;
        text-align: center;
        color: var(--muted-foreground);
        font-size: 0.875rem;
    }
    @media (min-width: 768px) {
        .cylinder-viewport { height: 440px; }
        .cylinder-panel { width: 56%; }
    }
    @media (min-width: 1024px) {
        .cylinder-viewport { height: 520px; }
        .cylinder-panel { width: 48%; }
    }
"#;

/// Reads the first panel's width and the viewport width and feeds them to the ring.
/// Layout width is used so the panel's own 3D transform does not skew the reading.
fn measure(container_ref: &NodeRef, panel_ref: &NodeRef, ring: &UseReducerDispatcher<RingState>) {
    let (Some(container), Some(panel)) = (container_ref.cast::<Element>(), panel_ref.cast::<HtmlElement>()) else {
        return;
    };
    ring.dispatch(RingAction::Resize {
        panel_width: panel.offset_width() as f64,
        viewport_width: container.client_width() as f64,
    });
}

/// Observes the container and the measured panel; fires on layout changes
/// that leave the window size alone.
fn watch_size(
    container_ref: &NodeRef,
    panel_ref: &NodeRef,
    callback: &Closure<dyn Fn()>,
) -> Result<ResizeObserver, JsValue> {
    let container = container_ref
        .cast::<Element>()
        .ok_or_else(|| JsValue::from_str("carousel container not mounted"))?;
    let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
    observer.observe(&container);
    if let Some(panel) = panel_ref.cast::<Element>() {
        observer.observe(&panel);
    }
    Ok(observer)
}

fn watch_window(callback: Closure<dyn Fn()>) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    if let Err(e) = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref()) {
        log::warn!("Could not watch viewport size: {:?}", e);
    }
    Box::new(move || {
        let _ = window.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    })
}

/// "2 / 5" under the ring; nothing when there are no panels.
pub fn position_label(active_index: usize, panel_count: usize) -> Option<String> {
    (panel_count > 0).then(|| format!("{} / {}", active_index.min(panel_count - 1) + 1, panel_count))
}

#[function_component]
pub fn VideoCylinderCarousel(props: &VideoCylinderCarouselProps) -> Html {
    let ring = use_reducer(|| RingState::new(props.items.len(), CarouselTuning::default()));
    let container_ref = use_node_ref();
    let panel_ref = use_node_ref();

    // Keep count and step in line with the panel list
    {
        let dispatcher = ring.dispatcher();
        use_effect_with_deps(
            move |count| {
                dispatcher.dispatch(RingAction::SetPanelCount(*count));
                || ()
            },
            props.items.len(),
        );
    }

    // Radius follows the container; observer lives as long as the carousel
    {
        let dispatcher = ring.dispatcher();
        let container_ref = container_ref.clone();
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |_| {
                measure(&container_ref, &panel_ref, &dispatcher);
                let callback = Closure::<dyn Fn()>::new({
                    let container_ref = container_ref.clone();
                    let panel_ref = panel_ref.clone();
                    move || measure(&container_ref, &panel_ref, &dispatcher)
                });
                let destructor: Box<dyn FnOnce()> = match watch_size(&container_ref, &panel_ref, &callback) {
                    Ok(observer) => Box::new(move || {
                        observer.disconnect();
                        drop(callback);
                    }),
                    Err(e) => {
                        log::warn!("ResizeObserver unavailable, falling back to window resize: {:?}", e);
                        watch_window(callback)
                    }
                };
                move || {
                    destructor();
                }
            },
            props.items.len(),
        );
    }

    let onpointerdown = {
        let dispatcher = ring.dispatcher();
        Callback::from(move |e: PointerEvent| {
            dispatcher.dispatch(RingAction::BeginDrag(e.client_x() as f64));
            // Keep receiving moves when the pointer leaves the ring
            if let Some(target) = e.target_dyn_into::<Element>() {
                let _ = target.set_pointer_capture(e.pointer_id());
            }
        })
    };
    let onpointermove = {
        let dispatcher = ring.dispatcher();
        let dragging = ring.is_dragging();
        Callback::from(move |e: PointerEvent| {
            if dragging {
                dispatcher.dispatch(RingAction::UpdateDrag(e.client_x() as f64));
            }
        })
    };
    // up, cancel and lost capture all settle the ring
    let onpointerend = {
        let dispatcher = ring.dispatcher();
        Callback::from(move |_: PointerEvent| dispatcher.dispatch(RingAction::EndDrag))
    };
    let on_prev = {
        let dispatcher = ring.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RingAction::Step(-1)))
    };
    let on_next = {
        let dispatcher = ring.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(RingAction::Step(1)))
    };
    let onkeydown = {
        let dispatcher = ring.dispatcher();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => {
                e.prevent_default();
                dispatcher.dispatch(RingAction::Step(-1));
            }
            "ArrowRight" => {
                e.prevent_default();
                dispatcher.dispatch(RingAction::Step(1));
            }
            _ => {}
        })
    };

    let ring_style = format!(
        "transform-style: preserve-3d; transform: {}; transition: {};",
        ring.ring_transform(),
        ring.transition()
    );
    let panels = props.items.iter().enumerate().map(|(idx, item)| {
        let node_ref = if idx == 0 { panel_ref.clone() } else { NodeRef::default() };
        html! {
            <div
                key={idx}
                ref={node_ref}
                class="cylinder-panel"
                style={format!("transform: {}; transform-style: preserve-3d;", ring.panel_transform(idx))}
            >
                <div class="cylinder-card">
                    <VideoPlayer
                        src={item.src.clone()}
                        title={item.title.clone()}
                        client={item.client.clone()}
                        impact={item.impact.clone()}
                        aspect_ratio={item.aspect_ratio}
                    />
                </div>
            </div>
        }
    });

    html! {
        <div class={classes!("cylinder-carousel", props.class.clone())}>
            <style>{CAROUSEL_CSS}</style>
            <div
                ref={container_ref}
                class="cylinder-viewport"
                style={format!("perspective: {}px;", ring.tuning().perspective_px)}
                tabindex="0"
                aria-roledescription="carousel"
                {onkeydown}
            >
                <div
                    class={classes!("cylinder-ring", if ring.is_dragging() { "grabbing" } else { "grab" })}
                    style={ring_style}
                    {onpointerdown}
                    {onpointermove}
                    onpointerup={onpointerend.clone()}
                    onpointercancel={onpointerend.clone()}
                    onlostpointercapture={onpointerend}
                >
                    { for panels }
                </div>
            </div>

            if let Some(label) = position_label(ring.active_index(), props.items.len()) {
                <div class="cylinder-controls">
                    <button class="icon-button" aria-label="Previous" onclick={on_prev}>
                        <i class="fas fa-arrow-left"></i>
                    </button>
                    <span class="cylinder-position" aria-live="polite">{ label }</span>
                    <button class="icon-button" aria-label="Next" onclick={on_next}>
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<RingState>, action: RingAction) -> Rc<RingState> {
        Reducible::reduce(state, action)
    }

    #[test]
    fn reducer_drives_a_full_gesture() {
        let state = Rc::new(RingState::new(4, CarouselTuning::default()));
        let state = reduce(state, RingAction::Step(1));
        let state = reduce(state, RingAction::BeginDrag(100.0));
        let state = reduce(state, RingAction::UpdateDrag(400.0));
        assert!(state.is_dragging());
        let state = reduce(state, RingAction::EndDrag);
        assert!(!state.is_dragging());
        // 90 - 300 * 0.3 = 0
        assert_eq!(state.rotation(), 0.0);
    }

    #[test]
    fn no_op_actions_keep_the_same_state() {
        let state = Rc::new(RingState::new(3, CarouselTuning::default()));
        let after = reduce(state.clone(), RingAction::EndDrag);
        assert!(Rc::ptr_eq(&state, &after));
        let after = reduce(state.clone(), RingAction::SetPanelCount(3));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn resize_only_touches_radius() {
        let state = Rc::new(RingState::new(4, CarouselTuning::default()));
        let state = reduce(state, RingAction::Step(-1));
        let state = reduce(state, RingAction::Resize { panel_width: 900.0, viewport_width: 1200.0 });
        assert_eq!(state.rotation(), -90.0);
        assert!((state.radius() - 450.0).abs() < 1e-6);
    }

    #[test]
    fn narrower_container_shrinks_a_clamped_radius() {
        // Twelve wide panels want more depth than the container allows
        let state = Rc::new(RingState::new(12, CarouselTuning::default()));
        let state = reduce(state, RingAction::Step(1));
        let state = reduce(state, RingAction::Resize { panel_width: 600.0, viewport_width: 1000.0 });
        assert_eq!(state.radius(), 1000.0);
        let state = reduce(state, RingAction::Resize { panel_width: 600.0, viewport_width: 985.0 });
        assert_eq!(state.radius(), 985.0);
        assert_eq!(state.rotation(), 30.0);
    }

    #[test]
    fn repeated_measurements_do_not_rerender() {
        let state = Rc::new(RingState::new(4, CarouselTuning::default()));
        let state = reduce(state, RingAction::Resize { panel_width: 900.0, viewport_width: 1200.0 });
        let again = reduce(state.clone(), RingAction::Resize { panel_width: 900.0, viewport_width: 1200.0 });
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn position_label_hides_for_an_empty_ring() {
        assert_eq!(position_label(0, 0), None);
        assert_eq!(position_label(0, 4).as_deref(), Some("1 / 4"));
        assert_eq!(position_label(3, 4).as_deref(), Some("4 / 4"));
    }
}
