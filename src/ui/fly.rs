//! Fly sprite component
//!
//! Renders the sprite and drives a [`FlightSequencer`] in the browser. The
//! sequencer decides what happens next; this component measures anchors,
//! runs timers and moves the sprite along each generated path.

use leptos::html::{Div, Section};
use leptos::prelude::*;

use crate::core::fly::{
    AnchorMap, FlightSequence, FlyConfig, Measure, OffsetMap, Point, Rect, scale_x,
};

/// Sprite image served from the assets dir
pub const FLY_SPRITE_SRC: &str = "/fly.png";

macro_rules! measure_node_ref {
    ($($element:ty),*) => {
        $(
            impl Measure for NodeRef<$element> {
                fn measure(&self) -> Option<Rect> {
                    #[cfg(not(feature = "ssr"))]
                    {
                        let element = self.get_untracked()?;
                        let rect = element.get_bounding_client_rect();
                        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
                    }
                    #[cfg(feature = "ssr")]
                    {
                        None
                    }
                }
            }
        )*
    };
}

measure_node_ref!(Div, Section);

/// Decorative fly that hops between anchor elements
///
/// `container` is the positioned ancestor the sprite is absolutely placed
/// in. Anchors that are not mounted are skipped by the sequencer.
#[component]
pub fn FlyAnimation(
    /// Anchor elements keyed by name
    anchors: AnchorMap<NodeRef<Div>>,
    /// Element the sprite's coordinates are relative to
    container: NodeRef<Section>,
    /// Per-anchor pixel adjustments
    #[prop(optional)]
    offsets: OffsetMap,
    /// Timing and path settings
    #[prop(optional)]
    config: FlyConfig,
    /// Anchor cycle, defaults to the hero cycle
    #[prop(optional)]
    sequence: FlightSequence,
) -> impl IntoView {
    let sprite = config.sprite;
    let (visible, set_visible) = signal(false);
    let (top_left, set_top_left) = signal(Point::default());
    let (mirrored, set_mirrored) = signal(true);
    let (flip_ms, set_flip_ms) = signal(0u128);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::fly::FlightSequencer;
        use futures::future::{AbortHandle, Abortable};

        let (abort, registration) = AbortHandle::new_pair();
        let mut start = Some((
            FlightSequencer::new(sequence, config),
            Stage {
                anchors,
                offsets,
                container,
                set_visible,
                set_top_left,
                set_mirrored,
                set_flip_ms,
            },
            registration,
        ));

        // Anchors are measurable once the view is mounted
        Effect::new(move |_| {
            if let Some((sequencer, stage, registration)) = start.take() {
                leptos::task::spawn_local(async move {
                    let _ = Abortable::new(driver::run(sequencer, stage), registration).await;
                });
            }
        });

        on_cleanup(move || abort.abort());
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (anchors, container, offsets, sequence);
        let _ = (set_visible, set_top_left, set_mirrored, set_flip_ms);
    }

    view! {
        <div
            class="pointer-events-none absolute z-30"
            aria-hidden="true"
            style:display=move || if visible.get() { "block" } else { "none" }
            style:left=move || format!("{}px", top_left.get().x)
            style:top=move || format!("{}px", top_left.get().y)
            style:width=format!("{}px", sprite.width)
            style:height=format!("{}px", sprite.height)
        >
            <img
                src=FLY_SPRITE_SRC
                alt=""
                draggable="false"
                width=sprite.width.to_string()
                height=sprite.height.to_string()
                style:transform=move || format!("scaleX({})", scale_x(mirrored.get()))
                style:transition=move || format!("transform {}ms ease-in-out", flip_ms.get())
            />
        </div>
    }
}

/// Handles the driver needs to measure anchors and move the sprite
#[cfg(not(feature = "ssr"))]
struct Stage {
    anchors: AnchorMap<NodeRef<Div>>,
    offsets: OffsetMap,
    container: NodeRef<Section>,
    set_visible: WriteSignal<bool>,
    set_top_left: WriteSignal<Point>,
    set_mirrored: WriteSignal<bool>,
    set_flip_ms: WriteSignal<u128>,
}

#[cfg(not(feature = "ssr"))]
mod driver {
    use std::collections::VecDeque;
    use std::time::Duration;

    use futures::channel::oneshot;
    use gloo_timers::future::TimeoutFuture;
    use leptos::logging::warn;
    use leptos::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::Stage;
    use crate::core::fly::{
        AnchorKey, ControlDraws, Effect, FlightPath, FlightSequencer, Point, resolve,
    };

    /// Frame delay when `requestAnimationFrame` is unavailable
    const FRAME_MS: u32 = 16;
    /// Mount is retried while the first anchor lays out
    const MOUNT_ATTEMPTS: usize = 20;
    const MOUNT_RETRY_MS: u32 = 250;

    impl Stage {
        fn resolve(&self, key: AnchorKey) -> Option<Point> {
            resolve(key, &self.anchors, &self.offsets, &self.container)
        }

        fn place(&self, top_left: Point, mirrored: bool) {
            self.set_flip_ms.set(0);
            self.set_mirrored.set(mirrored);
            self.set_top_left.set(top_left);
        }

        fn flip(&self, mirrored: bool, duration: Duration) {
            self.set_flip_ms.set(duration.as_millis());
            self.set_mirrored.set(mirrored);
        }

        async fn fly(&self, path: &FlightPath, duration: Duration) {
            let total = duration.as_secs_f64() * 1000.0;
            let started = js_sys::Date::now();

            loop {
                let elapsed = js_sys::Date::now() - started;
                let progress = if total > 0.0 { elapsed / total } else { 1.0 };

                if let Some(position) = path.position_at(progress) {
                    self.set_top_left.set(position);
                }
                if progress >= 1.0 {
                    break;
                }
                next_frame().await;
            }
        }
    }

    /// A requested animation frame, cancelled if dropped before it fires
    struct AnimationFrame {
        id: Option<i32>,
        _callback: Closure<dyn FnMut(f64)>,
    }

    impl Drop for AnimationFrame {
        fn drop(&mut self) {
            if let (Some(id), Some(window)) = (self.id, web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    /// Resolves on the next display frame. Paused while the tab is hidden.
    async fn next_frame() {
        let (tx, rx) = oneshot::channel::<()>();
        let mut tx = Some(tx);
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
        });
        let id = web_sys::window()
            .and_then(|window| window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
        let frame = AnimationFrame {
            id,
            _callback: callback,
        };

        if frame.id.is_none() {
            TimeoutFuture::new(FRAME_MS).await;
            return;
        }
        let _ = rx.await;
    }

    fn millis(duration: Duration) -> u32 {
        u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
    }

    pub(super) async fn run(mut sequencer: FlightSequencer, stage: Stage) {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut queue = VecDeque::new();

        for _ in 0..MOUNT_ATTEMPTS {
            let first = stage.resolve(sequencer.sequence().first());
            queue.extend(sequencer.mount(first));
            if sequencer.state().is_initialized() {
                break;
            }
            TimeoutFuture::new(MOUNT_RETRY_MS).await;
        }

        if !sequencer.state().is_initialized() {
            warn!("Fly animation gave up waiting for its first anchor");
            return;
        }

        while let Some(effect) = queue.pop_front() {
            let next = match effect {
                Effect::Place { top_left, mirrored } => {
                    stage.place(top_left, mirrored);
                    continue;
                }
                Effect::Show => {
                    stage.set_visible.set(true);
                    continue;
                }
                Effect::RequestLeg => {
                    let (source, destination) = sequencer.current_leg();
                    sequencer.begin_leg(stage.resolve(source), stage.resolve(destination))
                }
                Effect::Wait(duration) => {
                    TimeoutFuture::new(millis(duration)).await;
                    sequencer.pause_elapsed()
                }
                Effect::Flip { mirrored, duration } => {
                    stage.flip(mirrored, duration);
                    TimeoutFuture::new(millis(duration)).await;
                    sequencer.flip_done(ControlDraws::sample(&mut rng))
                }
                Effect::Fly { path, duration } => {
                    stage.fly(&path, duration).await;
                    sequencer.flight_done()
                }
            };
            queue.extend(next);
        }
    }
}
