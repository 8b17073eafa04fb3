//! Duplicate detection for term collections
//!
//! Two terms are suspected duplicates when they share at least two
//! ideographic characters after stopword filtering. The later-positioned
//! record of each suspect pair is dropped from the surviving set.

mod detector;
mod orchestration;
mod signature;

pub use detector::{detect_duplicates, Detection, DuplicatePair};
pub use orchestration::{check_and_clean, CheckOutcome};
pub use signature::{signature, STOP_CHARS};
