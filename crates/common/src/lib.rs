/**
 * Nested structure addressing and transformation.
 *  - Dotted-path GET / POP with strict and lenient lookups
 *  - Recursive key translation with optional pruning
 *  - Deterministic (sorted) key ordering and fingerprints
 *  - Large integer stringification for JSON consumers
 *     with limited integer precision
 */
pub mod structure;
/**
 * Small helpers that work alongside structures
 *  but do not address into them: chunking,
 *  partial-mapping search and bit-field extraction.
 */
pub mod util;

pub mod prelude {
    pub use crate::structure::{
        access, canonicalize, fingerprint, get, get_ref, pop_at, stringify_large_ints, translate,
        AccessError, AccessOptions, Mapping, Mode, OutFormat, PathAddress, Structure,
        TranslateOptions, TranslationTable,
    };
    pub use crate::util::{chunks, extract_bits, search_by_parts};
}
