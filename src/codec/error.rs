use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("path '{path}' contains a newline and cannot be encoded")]
    NewlineInPath { path: String },
    #[error("path '{path}' uses delimiter '{delimiter}'; only '/' can be encoded")]
    UnsupportedDelimiter { path: String, delimiter: char },
    #[error("global options use delimiter '{delimiter}'; only '/' can be encoded")]
    UnsupportedGlobalDelimiter { delimiter: char },
    #[error("'{digit}' is not an option digit (expected 0-7)")]
    InvalidOptionDigit { digit: String },
    #[error("encoded scenario has no global options header")]
    MissingHeader,
    #[error("record {line} is malformed: '{record}'")]
    MalformedRecord { line: usize, record: String },
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("compression stream failed: {0}")]
    Compression(#[from] std::io::Error),
    #[error("decompressed payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type CodecResult<T> = Result<T, CodecError>;
