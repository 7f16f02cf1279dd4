use std::collections::HashMap;
use std::sync::Arc;

use folio_contracts::render::{
    ImageRenderer, LoadStatus, RenderError, RenderRequest, Rendered,
};
use parking_lot::Mutex;

/// How the in-memory renderer answers a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Loads synchronously.
    #[default]
    Load,
    /// Fails synchronously.
    Fail,
    /// Stays pending until the caller reports a completion.
    Defer,
    /// Returns a [`RenderError`].
    Reject,
}

#[derive(Debug, Default)]
struct Script {
    default: Outcome,
    by_identifier: HashMap<String, Outcome>,
    requests: Vec<RenderRequest>,
}

/// Scripted renderer that records every request.
///
/// Clones share the script and the request log, so a test can keep a handle
/// while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    script: Arc<Mutex<Script>>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request stays pending.
    pub fn deferred() -> Self {
        Self::with_default(Outcome::Defer)
    }

    pub fn with_default(outcome: Outcome) -> Self {
        let renderer = Self::default();
        renderer.script.lock().default = outcome;
        renderer
    }

    /// Answer requests for `identifier` with `outcome` from now on.
    pub fn script(&self, identifier: impl Into<String>, outcome: Outcome) {
        self.script
            .lock()
            .by_identifier
            .insert(identifier.into(), outcome);
    }

    pub fn requests(&self) -> Vec<RenderRequest> {
        self.script.lock().requests.clone()
    }

    pub fn requested_identifiers(&self) -> Vec<String> {
        self.script
            .lock()
            .requests
            .iter()
            .map(|r| r.image_identifier.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.script.lock().requests.len()
    }

    pub fn clear_requests(&self) {
        self.script.lock().requests.clear();
    }
}

impl ImageRenderer for MemoryRenderer {
    type Element = String;

    fn render(
        &mut self,
        request: &RenderRequest,
    ) -> Result<Rendered<String>, RenderError> {
        let mut script = self.script.lock();
        script.requests.push(request.clone());
        let outcome = script
            .by_identifier
            .get(&request.image_identifier)
            .copied()
            .unwrap_or(script.default);
        let element = request.image_identifier.clone();
        match outcome {
            Outcome::Load => Ok(Rendered::ready(element, LoadStatus::Loaded)),
            Outcome::Fail => Ok(Rendered::ready(element, LoadStatus::Failed)),
            Outcome::Defer => Ok(Rendered::pending(element)),
            Outcome::Reject => Err(RenderError::Unavailable(format!(
                "scripted rejection for {}",
                request.key
            ))),
        }
    }
}
