//! [`ImageRenderer`](folio_contracts::render::ImageRenderer) implementations.

pub mod cdn;
pub mod memory;
pub mod plain;

pub use cdn::CdnRenderer;
pub use memory::{MemoryRenderer, Outcome};
pub use plain::PlainUrlRenderer;
