//! Render snapshot of a carousel.
//!
//! The view borrows from the engine; hosts rebuild it after every dispatch
//! and map it onto their own widgets.

use std::collections::HashMap;

use folio_model::{ImageSource, Orientation, SlideImage, TransitionKind};

use super::state::{CarouselContext, CarouselState};
use crate::lazy_load::LoadPhase;

/// Static placeholder shown instead of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback<'a> {
    /// Renderer identifier of the image to show.
    Image(&'a str),
    /// Icon over a gradient.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView<'a, E> {
    pub index: usize,
    pub image: &'a SlideImage,
    pub phase: LoadPhase,
    /// Present once the slide has been handed to the renderer.
    pub element: Option<&'a E>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Display<'a, E> {
    Slides(Vec<SlideView<'a, E>>),
    Minimized(Fallback<'a>),
    Empty(Fallback<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dots {
    pub count: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a, E> {
    pub display: Display<'a, E>,
    pub orientation: Orientation,
    pub transition: TransitionKind,
    pub is_transitioning: bool,
    /// `None` when hidden by config or there is nothing to navigate.
    pub dots: Option<Dots>,
    pub nav: Option<NavButtons>,
    pub announcement: Option<&'a str>,
}

impl<E> CarouselView<'_, E> {
    /// Indices of the rendered slides, empty for fallback displays.
    pub fn visible_indices(&self) -> Vec<usize> {
        match &self.display {
            Display::Slides(slides) => {
                slides.iter().map(|slide| slide.index).collect()
            }
            _ => Vec::new(),
        }
    }
}

pub(crate) fn build<'a, E>(
    ctx: &'a CarouselContext,
    state: &'a CarouselState,
    elements: &'a HashMap<usize, E>,
) -> CarouselView<'a, E> {
    let config = ctx.config();
    let layout = state.layout();
    let interactive = layout.can_navigate() && !state.is_minimized();

    let display = if ctx.is_empty() {
        Display::Empty(
            config
                .fallback_image
                .as_deref()
                .map_or(Fallback::Placeholder, Fallback::Image),
        )
    } else if state.is_minimized() {
        let index = state
            .saved_index_before_minimize()
            .unwrap_or(state.current_index());
        // Only a real thumbnail is shown; full images stay unloaded.
        Display::Minimized(
            ctx.image(index)
                .filter(|image| {
                    image.preferred_source() == ImageSource::Thumbnail
                })
                .map(|image| image.identifier(ImageSource::Thumbnail))
                .map_or(Fallback::Placeholder, Fallback::Image),
        )
    } else {
        Display::Slides(
            state
                .visible_indices()
                .into_iter()
                .filter_map(|index| {
                    ctx.image(index).map(|image| SlideView {
                        index,
                        image,
                        phase: state.load_phase(index),
                        element: elements.get(&index),
                    })
                })
                .collect(),
        )
    };

    let total = state.total_slides();
    let dots = (interactive && config.show_dot_indicators).then(|| Dots {
        count: total,
        active: state.current_index().min(total.saturating_sub(1)),
    });

    let current = state.current_index();
    let nav = (interactive && config.show_nav_buttons).then(|| NavButtons {
        previous_enabled: layout.previous_index(current).is_some(),
        next_enabled: layout.next_index(current).is_some(),
    });

    CarouselView {
        display,
        orientation: config.orientation,
        transition: config.transition,
        is_transitioning: state.is_transitioning(),
        dots,
        nav,
        announcement: state.announcement(),
    }
}
