pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod packer;
pub mod streaming;
pub mod wrap;
