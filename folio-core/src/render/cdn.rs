//! Image CDN transformation URLs.
//!
//! Produces `{base}/{transform}/{public id}` for assets stored on the CDN and
//! `{base}/fetch/{transform}/{remote url}` for absolute remote URLs, where
//! the transform encodes crop mode and box size.

use folio_contracts::render::{
    ImageRenderer, RenderError, RenderRequest, Rendered,
};
use url::Url;

/// Quality and format negotiation appended to every transform.
const AUTO_FORMAT: &str = "q_auto,f_auto";

#[derive(Debug, Clone)]
pub struct CdnRenderer {
    base: Url,
}

impl CdnRenderer {
    pub fn new(base: &str) -> Result<Self, RenderError> {
        let invalid = |reason: String| RenderError::InvalidUrl {
            url: base.to_owned(),
            reason,
        };
        let base = Url::parse(base).map_err(|err| invalid(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a base url".into()));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn transform(request: &RenderRequest) -> String {
        format!(
            "c_{},w_{},h_{},{}",
            request.crop.as_str(),
            request.width,
            request.height,
            AUTO_FORMAT
        )
    }

    pub fn url_for(&self, request: &RenderRequest) -> Result<Url, RenderError> {
        let identifier = request.image_identifier.trim();
        if identifier.is_empty() {
            return Err(RenderError::EmptyIdentifier(request.key));
        }
        let remote = Url::parse(identifier)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"));

        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                RenderError::InvalidUrl {
                    url: self.base.to_string(),
                    reason: "not a base url".into(),
                }
            })?;
            segments.pop_if_empty();
            match remote {
                Some(remote) => {
                    segments
                        .push("fetch")
                        .push(&Self::transform(request))
                        .push(remote.as_str());
                }
                None => {
                    segments.push(&Self::transform(request)).extend(
                        identifier.split('/').filter(|part| !part.is_empty()),
                    );
                }
            }
        }
        Ok(url)
    }
}

impl ImageRenderer for CdnRenderer {
    type Element = Url;

    fn render(
        &mut self,
        request: &RenderRequest,
    ) -> Result<Rendered<Url>, RenderError> {
        self.url_for(request).map(Rendered::pending)
    }
}
