pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Bits, Canonicalize, Chunks, Get, Init, Pop, Search, Stringify, Translate, Version};
