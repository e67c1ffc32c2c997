use crate::cli::{
    args::CodecArgs,
    commands::{open_input, open_output},
};
use ecoji::{EcojiConfig, StreamingEncoder};

pub fn handle(args: &CodecArgs, config: &EcojiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let variant = args.variant().unwrap_or_else(|| config.variant());
    let wrap = args.wrap.unwrap_or_else(|| config.wrap());

    let mut reader = open_input(args.file.as_ref())?;
    let writer = open_output(args.output.as_ref())?;

    tracing::info!(variant = %variant, wrap, "encoding");

    let mut encoder = StreamingEncoder::new(writer)
        .with_variant(variant)
        .with_wrap(wrap);
    let consumed = encoder.encode(&mut reader)?;

    tracing::info!(bytes = consumed, "encoded input");
    Ok(())
}
