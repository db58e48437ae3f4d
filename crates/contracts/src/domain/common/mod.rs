mod resource;
mod serde_helpers;

pub use resource::{EditableDraft, RecordId, Resource, NEW_RECORD_ID};
pub use serde_helpers::{lenient_f64, null_as_default, RawNumber};
