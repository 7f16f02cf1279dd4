use crate::error::{ModelError, Result};

/// Which variant of a slide's imagery a render attempt targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSource {
    Thumbnail,
    Full,
}

/// A single image in a carousel.
///
/// Slides are ordered by the caller and the order determines their index.
/// The engine never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideImage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumbnail_url: Option<String>,
    pub alt_text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub caption: Option<String>,
    pub source_id: String,
}

impl SlideImage {
    /// Create a slide backed only by its source id.
    pub fn new(
        source_id: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Result<Self> {
        let source_id = source_id.into();
        if source_id.trim().is_empty() {
            return Err(ModelError::MissingSourceId);
        }
        Ok(Self {
            full_url: None,
            thumbnail_url: None,
            alt_text: alt_text.into(),
            caption: None,
            source_id,
        })
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_full_url(mut self, url: impl Into<String>) -> Self {
        self.full_url = Some(url.into());
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// The first source a carousel slide should try. Thumbnails load first
    /// when the slide has one.
    pub fn preferred_source(&self) -> ImageSource {
        if self.thumbnail_url.is_some() {
            ImageSource::Thumbnail
        } else {
            ImageSource::Full
        }
    }

    /// Identifier handed to the image renderer for the given source.
    ///
    /// The full-resolution identifier falls back to `source_id` when no
    /// explicit URL was supplied; a thumbnail request without a thumbnail URL
    /// resolves to the full identifier as well.
    pub fn identifier(&self, source: ImageSource) -> &str {
        match source {
            ImageSource::Thumbnail => self
                .thumbnail_url
                .as_deref()
                .unwrap_or_else(|| self.full_identifier()),
            ImageSource::Full => self.full_identifier(),
        }
    }

    fn full_identifier(&self) -> &str {
        self.full_url.as_deref().unwrap_or(&self.source_id)
    }

    /// Screen reader text for this slide at `index` (zero based) of `total`.
    pub fn announcement(&self, index: usize, total: usize) -> String {
        match self.caption.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(caption) => format!(
                "Image {} of {}: {}. {}",
                index + 1,
                total,
                caption,
                self.alt_text
            ),
            None => {
                format!("Image {} of {}: {}", index + 1, total, self.alt_text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_source_id() {
        assert_eq!(
            SlideImage::new("  ", "alt"),
            Err(ModelError::MissingSourceId)
        );
    }

    #[test]
    fn identifier_prefers_explicit_urls() {
        let slide = SlideImage::new("portfolio/cover", "Cover")
            .unwrap()
            .with_thumbnail_url("thumbs/cover.jpg");
        assert_eq!(slide.preferred_source(), ImageSource::Thumbnail);
        assert_eq!(
            slide.identifier(ImageSource::Thumbnail),
            "thumbs/cover.jpg"
        );
        assert_eq!(slide.identifier(ImageSource::Full), "portfolio/cover");

        let slide = slide.with_full_url("full/cover.jpg");
        assert_eq!(slide.identifier(ImageSource::Full), "full/cover.jpg");
    }

    #[test]
    fn announcement_includes_caption_when_present() {
        let slide = SlideImage::new("a", "A red bridge")
            .unwrap()
            .with_caption("Golden Gate");
        assert_eq!(
            slide.announcement(1, 5),
            "Image 2 of 5: Golden Gate. A red bridge"
        );

        let bare = SlideImage::new("b", "Fog").unwrap();
        assert_eq!(bare.announcement(0, 1), "Image 1 of 1: Fog");
    }
}
