use crate::cli::{
    args::CodecArgs,
    commands::{open_input, open_output},
};
use ecoji::{DecodeError, StreamingDecoder};
use std::io;

pub fn handle(args: &CodecArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.variant().is_some() || args.wrap.is_some() {
        tracing::warn!("--v1, --v2 and --wrap only affect encoding; ignored while decoding");
    }

    let mut reader = open_input(args.file.as_ref())?;
    let writer = open_output(args.output.as_ref())?;

    let summary = StreamingDecoder::new(writer)
        .decode(&mut reader)
        .map_err(unwrap_decode_error)?;

    match summary.variant {
        Some(variant) => tracing::info!(bytes = summary.bytes, variant = %variant, "decoded input"),
        None => tracing::info!(bytes = summary.bytes, "decoded input using only shared symbols"),
    }
    Ok(())
}

/// Pulls a [`DecodeError`] back out of the I/O error the streaming decoder
/// wraps it in, so it is rendered with its own message.
fn unwrap_decode_error(err: io::Error) -> Box<dyn std::error::Error> {
    match err.downcast::<DecodeError>() {
        Ok(decode_error) => Box::new(decode_error),
        Err(err) => Box::new(err),
    }
}
