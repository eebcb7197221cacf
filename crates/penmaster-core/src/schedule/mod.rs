//! Schedule generation - the scheduling core.

mod fingerprint;
mod generator;
mod variety;

pub use fingerprint::fingerprint;
pub use generator::{PLACEHOLDER_IMAGE, ScheduleRequest, generate};
pub use variety::{dedupe_variants, existing_fingerprints};
