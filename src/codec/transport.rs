use std::io::{Read, Write};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

use super::CodecResult;

// raw DEFLATE, no zlib or gzip framing
pub fn compress(data: &[u8]) -> CodecResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

pub fn decompress(data: &[u8]) -> CodecResult<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Standard base64 with `+ / =` swapped for `- _ .`.
pub fn to_safe64(data: &[u8]) -> String {
    BASE64_STANDARD
        .encode(data)
        .chars()
        .map(|ch| match ch {
            '+' => '-',
            '/' => '_',
            '=' => '.',
            other => other,
        })
        .collect()
}

pub fn from_safe64(token: &str) -> CodecResult<Vec<u8>> {
    let standard: String = token
        .trim()
        .chars()
        .map(|ch| match ch {
            '-' => '+',
            '_' => '/',
            '.' => '=',
            other => other,
        })
        .collect();
    Ok(BASE64_STANDARD.decode(standard)?)
}
