//! Shareable scenario tokens: a list of route records plus the global options,
//! packed into one URL-safe string.

mod bits;
mod error;
mod records;
mod transport;

pub use bits::OptionBits;
pub use error::{CodecError, CodecResult};
pub use records::{decode_text, encode_text};

use crate::router::{PathOptions, RouteRecord};

#[tracing::instrument(level = "trace", skip(records, global), fields(records = records.len() as u64))]
pub fn encode(records: &[RouteRecord], global: &PathOptions) -> CodecResult<String> {
    let text = encode_text(records, global)?;
    let packed = transport::compress(text.as_bytes())?;
    let token = transport::to_safe64(&packed);

    tracing::event!(
        tracing::Level::TRACE,
        operation = "encode",
        text_len = text.len() as u64,
        token_len = token.len() as u64
    );

    Ok(token)
}

#[tracing::instrument(level = "trace", skip(token), fields(token_len = token.len() as u64))]
pub fn decode(token: &str) -> CodecResult<(Vec<RouteRecord>, PathOptions)> {
    let packed = transport::from_safe64(token)?;
    let text = String::from_utf8(transport::decompress(&packed)?)?;
    decode_text(&text)
}
