//! Read-only reference data: precedent citations, the bench roster and
//! sample dockets. Nothing here is mutated at runtime.

pub mod justices;
pub mod precedents;
pub mod samples;

pub use justices::{Justice, PANEL, ROSTER};
pub use precedents::{Citation, Precedent, FALLBACK, PRECEDENTS};
pub use samples::{SampleCase, SAMPLES};
