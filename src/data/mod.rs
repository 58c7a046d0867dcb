//! Chain descriptor ingestion: per-file parsing, the skip rules for unusable
//! documents, and the sorted, count-checked collection handed to the emitter.

pub mod chain;
pub mod collect;
pub mod validate;
