use folio_contracts::render::{
    ImageRenderer, RenderError, RenderRequest, Rendered,
};
use url::Url;

/// Hands the image identifier through as a URL, optionally resolved against
/// a base. Load completion is reported later by the host.
#[derive(Debug, Clone, Default)]
pub struct PlainUrlRenderer {
    base: Option<Url>,
}

impl PlainUrlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative identifiers against `base`.
    pub fn with_base(base: &str) -> Result<Self, RenderError> {
        let base = Url::parse(base).map_err(|err| RenderError::InvalidUrl {
            url: base.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(Self { base: Some(base) })
    }
}

impl ImageRenderer for PlainUrlRenderer {
    type Element = String;

    fn render(
        &mut self,
        request: &RenderRequest,
    ) -> Result<Rendered<String>, RenderError> {
        let identifier = request.image_identifier.trim();
        if identifier.is_empty() {
            return Err(RenderError::EmptyIdentifier(request.key));
        }
        let url = match &self.base {
            Some(base) => base
                .join(identifier)
                .map_err(|err| RenderError::InvalidUrl {
                    url: identifier.to_owned(),
                    reason: err.to_string(),
                })?
                .to_string(),
            None => identifier.to_owned(),
        };
        Ok(Rendered::pending(url))
    }
}
