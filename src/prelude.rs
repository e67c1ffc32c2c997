//! Convenient re-exports for common usage.
//!
//! ```
//! use ecoji::prelude::*;
//!
//! let config = EcojiConfig::load_default().unwrap();
//! let encoded = encode(b"Hello", config.variant(), 0);
//! assert_eq!(decode(&encoded).unwrap(), b"Hello");
//! ```

// Core encoding/decoding
pub use crate::{Decoder, Encoder, Variant, decode, encode};

// Streams
pub use crate::{DecodeSummary, StreamingDecoder, StreamingEncoder};

// Config
pub use crate::{EcojiConfig, Settings};

// Errors
pub use crate::DecodeError;
