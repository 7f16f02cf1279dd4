//! Image rendering collaborator.
//!
//! The engines describe *what* should be displayed with a [`RenderRequest`];
//! an [`ImageRenderer`] turns that into whatever its host displays (a URL, a
//! widget handle, a texture) and reports when the bytes arrived or failed.

use std::fmt;

use folio_model::ImageSource;
use thiserror::Error;

/// Which engine a render request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Carousel,
    Lightbox,
}

/// Identity of a single render attempt. Load completions are matched back to
/// the attempt through this key, so a late completion for a superseded
/// attempt is recognisable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub surface: Surface,
    pub index: usize,
    pub source: ImageSource,
}

impl RenderKey {
    pub const fn carousel(index: usize, source: ImageSource) -> Self {
        Self {
            surface: Surface::Carousel,
            index,
            source,
        }
    }

    pub const fn lightbox(index: usize) -> Self {
        Self {
            surface: Surface::Lightbox,
            index,
            source: ImageSource::Full,
        }
    }
}

impl fmt::Display for RenderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}:{:?}", self.surface, self.index, self.source)
    }
}

/// How an image is fitted into the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CropMode {
    /// Cover the box, cropping overflow.
    #[default]
    Fill,
    /// Fit inside the box, preserving the whole image.
    Fit,
    /// Scale without preserving aspect ratio.
    Scale,
}

impl CropMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            CropMode::Fill => "fill",
            CropMode::Fit => "fit",
            CropMode::Scale => "scale",
        }
    }
}

/// Descriptor handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub key: RenderKey,
    pub image_identifier: String,
    pub width: u32,
    pub height: u32,
    pub crop: CropMode,
}

/// Outcome of a load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Failed,
}

/// Whether the renderer already knows how the load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The host reports `onLoad` / `onError` later for this key.
    Pending,
    /// The renderer resolved the load synchronously.
    Ready(LoadStatus),
}

/// A displayable element plus its load completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<E> {
    pub element: E,
    pub completion: Completion,
}

impl<E> Rendered<E> {
    pub fn pending(element: E) -> Self {
        Self {
            element,
            completion: Completion::Pending,
        }
    }

    pub fn ready(element: E, status: LoadStatus) -> Self {
        Self {
            element,
            completion: Completion::Ready(status),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("empty image identifier for {0}")]
    EmptyIdentifier(RenderKey),

    #[error("invalid image url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("renderer unavailable: {0}")]
    Unavailable(String),
}

/// Capability that turns a [`RenderRequest`] into a displayable element.
///
/// Implementations must eventually report a [`LoadStatus`] for every request
/// that returned [`Completion::Pending`]; the engines treat a returned
/// [`RenderError`] as an immediate failure of that attempt.
pub trait ImageRenderer {
    type Element;

    fn render(
        &mut self,
        request: &RenderRequest,
    ) -> Result<Rendered<Self::Element>, RenderError>;
}

impl<R: ImageRenderer + ?Sized> ImageRenderer for Box<R> {
    type Element = R::Element;

    fn render(
        &mut self,
        request: &RenderRequest,
    ) -> Result<Rendered<Self::Element>, RenderError> {
        (**self).render(request)
    }
}
