mod decoder;
mod encoder;

pub use decoder::{DecodeSummary, StreamingDecoder};
pub use encoder::StreamingEncoder;

const CHUNK_SIZE: usize = 4096; // 4KB chunks
