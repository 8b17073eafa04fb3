//! memelex-core: record models and offline hygiene passes for a
//! collection of Chinese internet slang ("meme") terms stored as JSON.
//!
//! Two independent batch operations are provided:
//!
//! - [`deduplication`]: finds near-duplicate terms by counting shared
//!   ideographic characters and drops the later-positioned record of each
//!   suspect pair.
//! - [`flatten`]: repairs documents damaged by manual concatenation
//!   (nested arrays of records) and reassigns sequential ids.
//!
//! Both operate on a whole document loaded into memory via [`store`];
//! neither holds state between runs.

pub mod deduplication;
pub mod error;
pub mod flatten;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use record::MemeRecord;
