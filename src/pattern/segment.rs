use memchr::memmem;
use smallvec::SmallVec;

use super::{ParamToken, Token};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentPiece<'a> {
    Static(&'a str),
    Param(&'a ParamToken),
}

impl SegmentPiece<'_> {
    fn starts_segment(&self, delimiter: char) -> bool {
        match self {
            Self::Static(text) => text.starts_with(delimiter),
            Self::Param(param) => param.prefix == Some(delimiter),
        }
    }
}

pub type SegmentGroup<'a> = SmallVec<[SegmentPiece<'a>; 4]>;

/// Splits `text` before every occurrence of `delimiter`, so every piece but
/// possibly the first starts with it. `"a/b/"` gives `["a", "/b", "/"]`.
pub fn split_on_delimiter(text: &str, delimiter: char) -> impl Iterator<Item = &str> {
    let mut encoded = [0u8; 4];
    let needle = delimiter.encode_utf8(&mut encoded).as_bytes();
    // a whole encoded char only ever matches on a char boundary
    let mut cuts: SmallVec<[usize; 8]> = memmem::find_iter(text.as_bytes(), needle)
        .filter(|&pos| pos > 0)
        .collect();
    cuts.push(text.len());

    let mut start = 0usize;
    cuts.into_iter().filter_map(move |end| {
        let piece = &text[start..end];
        start = end;
        (!piece.is_empty()).then_some(piece)
    })
}

/// Static tokens that still carry embedded delimiters are cut at each one;
/// the input is left untouched.
pub fn group_segments(tokens: &[Token], delimiter: char) -> Vec<SegmentGroup<'_>> {
    let mut groups = Vec::new();
    let mut current = SegmentGroup::new();

    for token in tokens {
        match token {
            Token::Static { text } => {
                for piece in split_on_delimiter(text, delimiter) {
                    push_piece(&mut groups, &mut current, SegmentPiece::Static(piece), delimiter);
                }
            }
            Token::Param(param) => {
                push_piece(&mut groups, &mut current, SegmentPiece::Param(param), delimiter);
            }
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

fn push_piece<'a>(
    groups: &mut Vec<SegmentGroup<'a>>,
    current: &mut SegmentGroup<'a>,
    piece: SegmentPiece<'a>,
    delimiter: char,
) {
    if piece.starts_segment(delimiter) && !current.is_empty() {
        groups.push(std::mem::take(current));
    }
    current.push(piece);
}
