//! Ecoji: binary-to-emoji encoding at 10 bits per symbol.
//!
//! Input bytes are packed five at a time into four symbols drawn from a
//! 1024-emoji alphabet. Two alphabet generations exist. [`Variant::V1`]
//! always emits whole groups of four symbols; [`Variant::V2`] ends a short
//! final group with a single padding symbol. Decoding detects the generation
//! from the data, rejects streams that mix them, and accepts concatenated
//! encodings.
//!
//! ```
//! use ecoji::{Variant, decode, encode};
//!
//! let encoded = encode(b"Base64 is so 1999", Variant::V2, 0);
//! assert_eq!(decode(&encoded).unwrap(), b"Base64 is so 1999");
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::{Alphabet, Membership, Role, Symbol, Variant};
pub use crate::core::config::{DEFAULT_WRAP, EcojiConfig, Settings};
pub use crate::core::tables::{MAIN_V1, MAIN_V2, PAD, TAIL_V1, TAIL_V2};
pub use crate::encoders::decoder::{Decoder, VariantLock, decode};
pub use crate::encoders::encoder::{Encoder, encode};
pub use crate::encoders::errors::DecodeError;
pub use crate::encoders::streaming::{DecodeSummary, StreamingDecoder, StreamingEncoder};

#[cfg(test)]
mod tests;
