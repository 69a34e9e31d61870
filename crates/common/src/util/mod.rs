//! Helpers that sit next to structures without addressing into them
//!
//! - **[`chunks`]**: split any iterable into fixed-size batches
//! - **[`search_by_parts`]**: find the first mapping that contains a partial mapping
//! - **[`extract_bits`]**: read a bit field out of a 64-bit word

mod bits;
mod chunks;
mod search;

pub use bits::{extract_bits, WORD_BITS};
pub use chunks::{chunks, ChunkSizeError, Chunks};
pub use search::{matches_part, search_by_parts};
