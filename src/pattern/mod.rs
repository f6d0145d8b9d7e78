mod compiled;
mod error;
mod lexer;
mod scoring;
mod segment;
mod token;

pub use compiled::{CompiledPattern, compile};
pub(crate) use compiled::{ParamSlot, RoutePart};
pub use error::{PatternError, PatternResult};
pub use lexer::{Tokenizer, tokenize_path, tokenize_path_with};
pub use scoring::{MAX_PRECISE_SUB_SEGMENTS, ScoreWeights, score, score_with};
pub use segment::{SegmentGroup, SegmentPiece, group_segments, split_on_delimiter};
pub use token::{
    ParamKind, ParamName, ParamToken, Quantifier, Token, WILDCARD_PATTERN,
    default_segment_pattern, is_default_segment_pattern,
};
