//! The carousel transition function.

use folio_model::{
    ImageSource, Key, MinimizeControl, NavigationSource, Orientation,
};

use super::messages::{CarouselEvent, Command};
use super::state::{CarouselContext, CarouselState};
use crate::autoplay::TimerCommand;
use crate::gesture::Swipe;
use crate::lazy_load::FailureOutcome;
use crate::notification::Notification;
use crate::timers::TimerKind;

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: CarouselState,
    pub commands: Vec<Command>,
}

/// Apply `event` to `state`. Pure: the returned commands describe every side
/// effect and the input snapshot is left untouched.
pub fn update(
    state: &CarouselState,
    ctx: &CarouselContext,
    event: CarouselEvent,
) -> Step {
    let mut next = state.clone();
    let mut commands = Vec::new();
    reduce(&mut next, ctx, event, &mut commands);
    Step {
        state: next,
        commands,
    }
}

fn timers(out: &mut Vec<Command>, cmds: Vec<TimerCommand>) {
    out.extend(cmds.into_iter().map(Command::Timer));
}

fn reduce(
    s: &mut CarouselState,
    ctx: &CarouselContext,
    event: CarouselEvent,
    out: &mut Vec<Command>,
) {
    match event {
        CarouselEvent::Start => {
            timers(out, s.autoplay.start());
            request_loads(s, ctx, out);
        }
        CarouselEvent::Teardown => {
            s.is_transitioning = false;
            s.gesture.cancel();
            s.lazy.disconnect();
            s.autoplay.stop();
            for kind in [
                TimerKind::TransitionEnd,
                TimerKind::AutoplayResume,
                TimerKind::AutoplayTick,
            ] {
                out.push(Command::Timer(TimerCommand::Cancel(kind)));
            }
        }

        CarouselEvent::Next(source) => {
            if s.accepts_navigation()
                && let Some(target) = s.layout.next_index(s.current_index)
            {
                navigate(s, ctx, target, source, out);
            }
        }
        CarouselEvent::Previous(source) => {
            if s.accepts_navigation()
                && let Some(target) = s.layout.previous_index(s.current_index)
            {
                navigate(s, ctx, target, source, out);
            }
        }
        CarouselEvent::GoTo(index, source) => {
            if !s.accepts_navigation() || index >= ctx.len() {
                return;
            }
            let target = s.layout.clamp(index);
            if target != s.current_index {
                navigate(s, ctx, target, source, out);
            }
        }
        CarouselEvent::IndexSynced(index) => {
            if index >= ctx.len() {
                return;
            }
            let target = s.layout.clamp(index);
            if s.minimize.is_minimized() {
                s.minimize.resave(target);
            } else if target != s.current_index {
                tracing::debug!(
                    target: "folio::carousel",
                    from = s.current_index,
                    to = target,
                    "index synced"
                );
                s.current_index = target;
            }
        }
        CarouselEvent::Activate(index) => {
            if !s.minimize.is_minimized() && index < ctx.len() {
                out.push(Notification::LightboxRequested(index).into());
            }
        }
        CarouselEvent::Key(press) => {
            if s.minimize.is_minimized() {
                return;
            }
            if let Some(derived) = key_event(s, ctx, press.key) {
                reduce(s, ctx, derived, out);
            }
        }

        CarouselEvent::TouchStart(point) => {
            if s.minimize.is_minimized() {
                return;
            }
            s.gesture.touch_start(point);
            timers(out, s.autoplay.hold());
        }
        CarouselEvent::TouchMove(point) => s.gesture.touch_move(point),
        CarouselEvent::TouchEnd => {
            let swipe = s.gesture.touch_end();
            timers(out, s.autoplay.release_debounced());
            let derived = match swipe {
                Some(Swipe::Next) => {
                    CarouselEvent::Next(NavigationSource::Swipe)
                }
                Some(Swipe::Previous) => {
                    CarouselEvent::Previous(NavigationSource::Swipe)
                }
                None => return,
            };
            reduce(s, ctx, derived, out);
        }
        CarouselEvent::TouchCancel => {
            s.gesture.cancel();
            timers(out, s.autoplay.release_debounced());
        }
        CarouselEvent::PointerEnter => timers(out, s.autoplay.hold()),
        CarouselEvent::PointerLeave => timers(out, s.autoplay.release()),

        CarouselEvent::ViewportResized { width } => {
            let class = ctx.tuning().breakpoints.classify(width);
            if class == s.viewport {
                return;
            }
            s.viewport = class;
            s.layout = ctx.layout(class);
            tracing::debug!(
                target: "folio::carousel",
                ?class,
                items = s.layout.items,
                "viewport class changed"
            );
            if let Some(saved) = s.minimize.saved_index() {
                s.minimize.resave(s.layout.clamp(saved));
            }
            let clamped = s.layout.clamp(s.current_index);
            if clamped != s.current_index {
                s.current_index = clamped;
                out.push(Notification::Navigated(clamped).into());
            }
            let shown = on_screen(s, ctx);
            if s.lazy.reveal(shown) {
                request_loads(s, ctx, out);
            }
        }
        CarouselEvent::Intersection { index, ratio } => {
            if s.lazy.observe(index, ratio).is_some() {
                request_loads(s, ctx, out);
            }
        }
        CarouselEvent::IntersectionGeometry {
            index,
            slide,
            viewport,
        } => {
            if s.lazy.observe_geometry(index, &slide, &viewport).is_some() {
                request_loads(s, ctx, out);
            }
        }
        CarouselEvent::ObserverUnsupported => {
            if !s.lazy.mark_unsupported().is_empty() {
                tracing::debug!(
                    target: "folio::lazy",
                    "intersection observation unsupported; loading every slide"
                );
                request_loads(s, ctx, out);
            }
        }

        CarouselEvent::ImageLoaded { index, source } => {
            if !s.lazy.finish_load(index, source) {
                tracing::trace!(
                    target: "folio::lazy",
                    index,
                    ?source,
                    "ignoring stale load completion"
                );
            }
        }
        CarouselEvent::ImageFailed { index, source } => {
            match s.lazy.fail_load(index, source) {
                FailureOutcome::RetryFull => {
                    tracing::debug!(
                        target: "folio::lazy",
                        index,
                        "thumbnail failed, retrying full resolution"
                    );
                    s.lazy.begin_load(index, ImageSource::Full);
                    out.push(Command::Render {
                        index,
                        source: ImageSource::Full,
                    });
                }
                FailureOutcome::Errored => {
                    tracing::warn!(
                        target: "folio::lazy",
                        index,
                        "slide image failed to load"
                    );
                }
                FailureOutcome::Stale => {}
            }
        }

        CarouselEvent::ToggleMinimize => match ctx.config().minimize {
            MinimizeControl::External => {
                out.push(Notification::MinimizeRequested.into());
            }
            MinimizeControl::Internal => {
                let flag = !s.minimize.is_minimized();
                set_minimized(s, flag, out);
            }
        },
        CarouselEvent::SetMinimized(flag) => set_minimized(s, flag, out),

        CarouselEvent::Timer(TimerKind::TransitionEnd) => {
            s.is_transitioning = false;
        }
        CarouselEvent::Timer(TimerKind::AutoplayResume) => {
            timers(out, s.autoplay.resume_elapsed());
        }
        CarouselEvent::Timer(TimerKind::AutoplayTick) => {
            if s.autoplay.is_running()
                && s.accepts_navigation()
                && let Some(target) = s.layout.next_index(s.current_index)
            {
                navigate(s, ctx, target, NavigationSource::Autoplay, out);
            }
        }
    }
}

fn key_event(
    s: &CarouselState,
    ctx: &CarouselContext,
    key: Key,
) -> Option<CarouselEvent> {
    let source = NavigationSource::Keyboard;
    let orientation = ctx.config().orientation;
    match (orientation, key) {
        (Orientation::Horizontal, Key::ArrowRight)
        | (Orientation::Vertical, Key::ArrowDown) => {
            Some(CarouselEvent::Next(source))
        }
        (Orientation::Horizontal, Key::ArrowLeft)
        | (Orientation::Vertical, Key::ArrowUp) => {
            Some(CarouselEvent::Previous(source))
        }
        (_, Key::Home) => Some(CarouselEvent::GoTo(0, source)),
        (_, Key::End) => {
            Some(CarouselEvent::GoTo(s.layout.max_index(), source))
        }
        (_, Key::Enter | Key::Space) => {
            Some(CarouselEvent::Activate(s.current_index))
        }
        _ => None,
    }
}

fn navigate(
    s: &mut CarouselState,
    ctx: &CarouselContext,
    target: usize,
    source: NavigationSource,
    out: &mut Vec<Command>,
) {
    let Some(image) = ctx.image(target) else {
        return;
    };
    tracing::debug!(
        target: "folio::carousel",
        from = s.current_index,
        to = target,
        ?source,
        "navigate"
    );
    s.current_index = target;

    let duration = ctx.transition_duration();
    if !duration.is_zero() {
        s.is_transitioning = true;
        out.push(
            TimerCommand::Once(TimerKind::TransitionEnd, duration).into(),
        );
    }

    let text = image.announcement(target, ctx.len());
    s.announcement = Some(text.clone());
    out.push(Notification::Navigated(target).into());
    out.push(Notification::Announce(text).into());

    if source.is_user() {
        timers(out, s.autoplay.user_interaction());
    }
}

fn set_minimized(s: &mut CarouselState, flag: bool, out: &mut Vec<Command>) {
    if flag {
        if !s.minimize.minimize(s.current_index) {
            return;
        }
        s.is_transitioning = false;
        s.gesture.cancel();
        out.push(TimerCommand::Cancel(TimerKind::TransitionEnd).into());
        timers(out, s.autoplay.suspend());
        tracing::debug!(
            target: "folio::carousel",
            saved = s.current_index,
            "minimized"
        );
    } else if let Some(saved) = s.minimize.expand() {
        s.current_index = s.layout.clamp(saved);
        timers(out, s.autoplay.restore());
        tracing::debug!(
            target: "folio::carousel",
            restored = s.current_index,
            "expanded"
        );
    }
}

/// Slides shown from the current index plus the initial look-ahead,
/// wrapping when the carousel loops.
fn on_screen(s: &CarouselState, ctx: &CarouselContext) -> Vec<usize> {
    let len = ctx.len();
    if len == 0 {
        return Vec::new();
    }
    let count = s.layout.items + ctx.tuning().lazy.initial_lookahead;
    (s.current_index..s.current_index + count)
        .map(|i| if s.layout.looping { i % len } else { i })
        .filter(|&i| i < len)
        .collect()
}

/// Start every eligible slide that has not begun loading.
fn request_loads(
    s: &mut CarouselState,
    ctx: &CarouselContext,
    out: &mut Vec<Command>,
) {
    for index in s.lazy.pending_loads() {
        let Some(image) = ctx.image(index) else {
            continue;
        };
        let source = image.preferred_source();
        s.lazy.begin_load(index, source);
        out.push(Command::Render { index, source });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::EngineTuning;
    use folio_model::{CarouselConfig, SlideImage, TransitionKind};

    fn context(len: usize, config: CarouselConfig) -> CarouselContext {
        let images: Vec<SlideImage> = (0..len)
            .map(|i| {
                SlideImage::new(format!("img-{i}"), format!("Photo {i}"))
                    .expect("valid slide")
            })
            .collect();
        CarouselContext::new(images, config, EngineTuning::default())
    }

    fn run(
        state: &CarouselState,
        ctx: &CarouselContext,
        events: impl IntoIterator<Item = CarouselEvent>,
    ) -> (CarouselState, Vec<Command>) {
        let mut current = state.clone();
        let mut all = Vec::new();
        for event in events {
            let step = update(&current, ctx, event);
            current = step.state;
            all.extend(step.commands);
        }
        (current, all)
    }

    #[test]
    fn update_leaves_input_snapshot_untouched() {
        let ctx = context(3, CarouselConfig::default());
        let initial = CarouselState::initial(&ctx);
        let step = update(
            &initial,
            &ctx,
            CarouselEvent::Next(NavigationSource::Button),
        );
        assert_eq!(initial.current_index(), 0);
        assert_eq!(step.state.current_index(), 1);
    }

    #[test]
    fn navigation_locks_until_transition_end() {
        let ctx = context(5, CarouselConfig::default());
        let (state, commands) = run(
            &CarouselState::initial(&ctx),
            &ctx,
            [
                CarouselEvent::Next(NavigationSource::Button),
                CarouselEvent::Next(NavigationSource::Button),
            ],
        );
        assert_eq!(state.current_index(), 1);
        assert!(state.is_transitioning());
        assert!(commands.contains(&Command::Notify(Notification::Announce(
            "Image 2 of 5: Photo 1".into()
        ))));

        let step = update(
            &state,
            &ctx,
            CarouselEvent::Timer(TimerKind::TransitionEnd),
        );
        assert!(!step.state.is_transitioning());
    }

    #[test]
    fn zero_duration_never_locks() {
        let config = CarouselConfig::default()
            .with_transition(TransitionKind::Slide, 0);
        let ctx = context(5, config);
        let (state, commands) = run(
            &CarouselState::initial(&ctx),
            &ctx,
            [
                CarouselEvent::Next(NavigationSource::Button),
                CarouselEvent::Next(NavigationSource::Button),
            ],
        );
        assert_eq!(state.current_index(), 2);
        assert!(!commands.iter().any(|c| matches!(
            c,
            Command::Timer(TimerCommand::Once(TimerKind::TransitionEnd, _))
        )));
    }

    #[test]
    fn horizontal_keys_ignore_vertical_arrows() {
        let config = CarouselConfig::default()
            .with_transition(TransitionKind::Slide, 0)
            .with_looping(false);
        let ctx = context(4, config);
        let (state, _) = run(
            &CarouselState::initial(&ctx),
            &ctx,
            [
                CarouselEvent::Key(Key::ArrowDown.into()),
                CarouselEvent::Key(Key::ArrowRight.into()),
                CarouselEvent::Key(Key::End.into()),
            ],
        );
        assert_eq!(state.current_index(), 3);
        let step =
            update(&state, &ctx, CarouselEvent::Key(Key::Home.into()));
        assert_eq!(step.state.current_index(), 0);
    }

    #[test]
    fn enter_activates_current_slide() {
        let ctx = context(3, CarouselConfig::default());
        let step = update(
            &CarouselState::initial(&ctx),
            &ctx,
            CarouselEvent::Key(Key::Enter.into()),
        );
        assert_eq!(
            step.commands,
            vec![Command::Notify(Notification::LightboxRequested(0))]
        );
    }

    #[test]
    fn start_requests_initial_loads_with_preferred_source() {
        let images = vec![
            SlideImage::new("a", "A")
                .expect("valid")
                .with_thumbnail_url("a-thumb.jpg"),
            SlideImage::new("b", "B").expect("valid"),
            SlideImage::new("c", "C").expect("valid"),
        ];
        let ctx = CarouselContext::new(
            images,
            CarouselConfig::default(),
            EngineTuning::default(),
        );
        let step =
            update(&CarouselState::initial(&ctx), &ctx, CarouselEvent::Start);
        assert_eq!(
            step.commands,
            vec![
                Command::Render {
                    index: 0,
                    source: ImageSource::Thumbnail
                },
                Command::Render {
                    index: 1,
                    source: ImageSource::Full
                },
            ]
        );
        assert_eq!(step.state.loading_indices().len(), 2);
    }

    #[test]
    fn sync_moves_without_echo() {
        let ctx = context(5, CarouselConfig::default());
        let step = update(
            &CarouselState::initial(&ctx),
            &ctx,
            CarouselEvent::IndexSynced(3),
        );
        assert_eq!(step.state.current_index(), 3);
        assert!(!step.state.is_transitioning());
        assert!(step.commands.is_empty());
    }

    #[test]
    fn external_minimize_only_requests() {
        let config =
            CarouselConfig::default().with_minimize(MinimizeControl::External);
        let ctx = context(3, config);
        let step = update(
            &CarouselState::initial(&ctx),
            &ctx,
            CarouselEvent::ToggleMinimize,
        );
        assert!(!step.state.is_minimized());
        assert_eq!(
            step.commands,
            vec![Command::Notify(Notification::MinimizeRequested)]
        );
    }
}
