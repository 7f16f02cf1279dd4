//! The lightbox transition function.

use folio_model::{ElementId, Key};

use super::focus::LightboxControl;
use super::messages::{LightboxCommand, LightboxEvent};
use super::state::{LightboxContext, LightboxPhase, LightboxState};
use crate::notification::Notification;

#[derive(Debug, Clone, PartialEq)]
pub struct LightboxStep {
    pub state: LightboxState,
    pub commands: Vec<LightboxCommand>,
}

pub fn update(
    state: &LightboxState,
    ctx: &LightboxContext,
    event: LightboxEvent,
) -> LightboxStep {
    let mut next = state.clone();
    let mut commands = Vec::new();
    reduce(&mut next, ctx, event, &mut commands);
    LightboxStep {
        state: next,
        commands,
    }
}

fn reduce(
    s: &mut LightboxState,
    ctx: &LightboxContext,
    event: LightboxEvent,
    out: &mut Vec<LightboxCommand>,
) {
    if let LightboxEvent::Open {
        index,
        return_focus,
    } = event
    {
        open(s, ctx, index, return_focus, out);
        return;
    }
    if !s.is_open() {
        return;
    }

    match event {
        LightboxEvent::Open { .. } => {}
        LightboxEvent::Close => {
            s.phase = LightboxPhase::Closed;
            s.zoom.reset();
            s.focus.clear();
            out.push(LightboxCommand::ReleaseScrollLock);
            if let Some(element) = s.return_focus.take() {
                out.push(Notification::RestoreFocus(element).into());
            }
            tracing::debug!(
                target: "folio::lightbox",
                index = s.active_index,
                "lightbox closed"
            );
        }

        LightboxEvent::Next => {
            if s.can_go_next() {
                show(s, ctx, s.active_index + 1, true, out);
            }
        }
        LightboxEvent::Previous => {
            if s.can_go_previous() {
                show(s, ctx, s.active_index - 1, true, out);
            }
        }
        LightboxEvent::GoTo(index) => {
            if index < ctx.len() && index != s.active_index {
                show(s, ctx, index, true, out);
            }
        }
        LightboxEvent::IndexSynced(index) => {
            if index < ctx.len() && index != s.active_index {
                show(s, ctx, index, false, out);
            }
        }

        LightboxEvent::Key(press) => {
            let derived = match press.key {
                Key::ArrowLeft => LightboxEvent::Previous,
                Key::ArrowRight => LightboxEvent::Next,
                Key::Escape => LightboxEvent::Close,
                Key::Tab => {
                    if press.modifiers.shift {
                        s.focus.focus_previous();
                    } else {
                        s.focus.focus_next();
                    }
                    return;
                }
                Key::Enter | Key::Space => match s.focus.focused() {
                    Some(control) => LightboxEvent::Activate(control),
                    None => return,
                },
                _ => return,
            };
            reduce(s, ctx, derived, out);
        }
        LightboxEvent::Activate(control) => {
            let derived = match control {
                LightboxControl::Close => LightboxEvent::Close,
                LightboxControl::Previous => LightboxEvent::Previous,
                LightboxControl::Next => LightboxEvent::Next,
                LightboxControl::Retry => LightboxEvent::Retry,
            };
            reduce(s, ctx, derived, out);
        }

        LightboxEvent::Wheel { delta_y, modifiers } => {
            if s.zoom.wheel(delta_y, modifiers) {
                tracing::trace!(
                    target: "folio::lightbox",
                    factor = s.zoom.factor(),
                    "wheel zoom"
                );
            }
        }
        LightboxEvent::PinchStart(a, b) => s.zoom.pinch_start(a, b),
        LightboxEvent::PinchMove(a, b) => {
            s.zoom.pinch_move(a, b);
        }
        LightboxEvent::PinchEnd => s.zoom.pinch_end(),
        LightboxEvent::DragStart(at) => {
            s.zoom.drag_start(at);
        }
        LightboxEvent::DragMove(to) => {
            s.zoom.drag_move(to);
        }
        LightboxEvent::DragEnd => s.zoom.drag_end(),
        LightboxEvent::DoubleClick => s.zoom.toggle(),

        LightboxEvent::ImageLoaded(index) => {
            if index == s.active_index && s.phase == LightboxPhase::Loading {
                s.phase = LightboxPhase::Loaded;
                refresh_focus(s);
            }
        }
        LightboxEvent::ImageFailed(index) => {
            if index == s.active_index && s.phase == LightboxPhase::Loading {
                tracing::warn!(
                    target: "folio::lightbox",
                    index,
                    "lightbox image failed to load"
                );
                s.phase = LightboxPhase::Errored;
                refresh_focus(s);
            }
        }
        LightboxEvent::Retry => {
            if s.phase == LightboxPhase::Errored {
                s.phase = LightboxPhase::Loading;
                refresh_focus(s);
                out.push(LightboxCommand::Render(s.active_index));
            }
        }
    }
}

fn open(
    s: &mut LightboxState,
    ctx: &LightboxContext,
    index: usize,
    return_focus: Option<ElementId>,
    out: &mut Vec<LightboxCommand>,
) {
    let Some(image) = ctx.image(index) else {
        return;
    };
    if s.is_open() {
        out.push(LightboxCommand::ReleaseScrollLock);
    }
    out.push(LightboxCommand::AcquireScrollLock);
    if return_focus.is_some() || !s.is_open() {
        s.return_focus = return_focus;
    }

    s.active_index = index;
    s.phase = LightboxPhase::Loading;
    s.zoom.reset();
    refresh_focus(s);
    s.focus.focus_first();
    out.push(LightboxCommand::Render(index));
    out.push(
        Notification::Announce(image.announcement(index, ctx.len())).into(),
    );
    tracing::debug!(target: "folio::lightbox", index, "lightbox opened");
}

/// Move to `index`, resetting zoom and re-entering `Loading`.
fn show(
    s: &mut LightboxState,
    ctx: &LightboxContext,
    index: usize,
    notify: bool,
    out: &mut Vec<LightboxCommand>,
) {
    let Some(image) = ctx.image(index) else {
        return;
    };
    tracing::debug!(
        target: "folio::lightbox",
        from = s.active_index,
        to = index,
        notify,
        "lightbox index change"
    );
    s.active_index = index;
    s.phase = LightboxPhase::Loading;
    s.zoom.reset();
    refresh_focus(s);
    out.push(LightboxCommand::Render(index));
    if notify {
        out.push(Notification::Navigated(index).into());
        out.push(
            Notification::Announce(image.announcement(index, ctx.len())).into(),
        );
    }
}

fn refresh_focus(s: &mut LightboxState) {
    let (previous, next, errored) =
        (s.can_go_previous(), s.can_go_next(), s.has_error());
    s.focus.rebuild(previous, next, errored);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::EngineTuning;
    use folio_model::{KeyPress, Modifiers, SlideImage};

    fn context(len: usize) -> LightboxContext {
        let images: Vec<SlideImage> = (0..len)
            .map(|i| {
                SlideImage::new(format!("id-{i}"), format!("Alt {i}"))
                    .expect("valid")
            })
            .collect();
        LightboxContext::new(images, EngineTuning::default())
    }

    fn opened(ctx: &LightboxContext, index: usize) -> LightboxState {
        update(
            &LightboxState::closed(ctx),
            ctx,
            LightboxEvent::Open {
                index,
                return_focus: Some(ElementId::new("thumb")),
            },
        )
        .state
    }

    #[test]
    fn open_locks_scroll_and_focuses_close() {
        let ctx = context(3);
        let step = update(
            &LightboxState::closed(&ctx),
            &ctx,
            LightboxEvent::Open {
                index: 1,
                return_focus: None,
            },
        );
        assert_eq!(step.commands[0], LightboxCommand::AcquireScrollLock);
        assert_eq!(step.commands[1], LightboxCommand::Render(1));
        assert!(step.state.is_loading());
        assert_eq!(step.state.focused_control(), Some(LightboxControl::Close));
    }

    #[test]
    fn closed_lightbox_ignores_input() {
        let ctx = context(3);
        let closed = LightboxState::closed(&ctx);
        let step = update(&closed, &ctx, LightboxEvent::Next);
        assert_eq!(step.state, closed);
        assert!(step.commands.is_empty());
    }

    #[test]
    fn navigation_stops_at_bounds() {
        let ctx = context(2);
        let state = opened(&ctx, 1);
        let step = update(&state, &ctx, LightboxEvent::Next);
        assert_eq!(step.state.active_index(), 1);
        assert!(step.commands.is_empty());

        let step =
            update(&state, &ctx, LightboxEvent::Key(Key::ArrowLeft.into()));
        assert_eq!(step.state.active_index(), 0);
        assert!(step.commands.contains(&Notification::Navigated(0).into()));
    }

    #[test]
    fn index_change_resets_zoom() {
        let ctx = context(3);
        let mut state = opened(&ctx, 0);
        for _ in 0..5 {
            state = update(
                &state,
                &ctx,
                LightboxEvent::Wheel {
                    delta_y: -1.0,
                    modifiers: Modifiers::CTRL,
                },
            )
            .state;
        }
        assert!(state.zoom_factor() > 1.0);
        let step = update(&state, &ctx, LightboxEvent::Next);
        assert_eq!(step.state.zoom_factor(), 1.0);
        assert!(step.state.pan_offset().is_zero());
        assert!(step.state.is_loading());
    }

    #[test]
    fn failed_load_offers_retry_in_focus_order() {
        let ctx = context(3);
        let state = opened(&ctx, 0);
        let state = update(&state, &ctx, LightboxEvent::ImageFailed(0)).state;
        assert!(state.has_error());
        assert_eq!(
            state.focusable_controls(),
            &[
                LightboxControl::Close,
                LightboxControl::Next,
                LightboxControl::Retry
            ]
        );
        let step = update(&state, &ctx, LightboxEvent::Retry);
        assert!(step.state.is_loading());
        assert_eq!(step.commands, vec![LightboxCommand::Render(0)]);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let ctx = context(3);
        let state = opened(&ctx, 0);
        let step = update(&state, &ctx, LightboxEvent::ImageLoaded(2));
        assert!(step.state.is_loading());
    }

    #[test]
    fn escape_restores_focus() {
        let ctx = context(3);
        let state = opened(&ctx, 0);
        let step = update(
            &state,
            &ctx,
            LightboxEvent::Key(KeyPress::new(Key::Escape)),
        );
        assert!(!step.state.is_open());
        assert_eq!(
            step.commands,
            vec![
                LightboxCommand::ReleaseScrollLock,
                Notification::RestoreFocus(ElementId::new("thumb")).into(),
            ]
        );
    }

    #[test]
    fn shift_tab_wraps_to_last_control() {
        let ctx = context(3);
        let state = opened(&ctx, 1);
        let step = update(
            &state,
            &ctx,
            LightboxEvent::Key(KeyPress::with_modifiers(
                Key::Tab,
                Modifiers::SHIFT,
            )),
        );
        assert_eq!(step.state.focused_control(), Some(LightboxControl::Next));
    }

    #[test]
    fn sync_does_not_echo() {
        let ctx = context(4);
        let state = opened(&ctx, 0);
        let step = update(&state, &ctx, LightboxEvent::IndexSynced(3));
        assert_eq!(step.state.active_index(), 3);
        assert_eq!(step.commands, vec![LightboxCommand::Render(3)]);
    }
}
