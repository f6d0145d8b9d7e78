use hashbrown::HashSet as FastHashSet;

use super::segment::{SegmentPiece, group_segments, split_on_delimiter};
use super::{
    ParamName, ParamToken, PatternError, PatternResult, Quantifier, Token,
    default_segment_pattern,
};
use crate::router::DEFAULT_DELIMITER;

/// Character that becomes a parameter prefix besides the delimiter itself,
/// as in `/file.:ext`.
const FORMAT_PREFIX: char = '.';

pub fn tokenize_path(pattern: &str) -> PatternResult<Vec<Token>> {
    Tokenizer::new(DEFAULT_DELIMITER).tokenize(pattern)
}

pub fn tokenize_path_with(pattern: &str, delimiter: char) -> PatternResult<Vec<Token>> {
    Tokenizer::new(delimiter).tokenize(pattern)
}

#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    delimiter: char,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl Tokenizer {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    #[tracing::instrument(level = "trace", skip(self, pattern), fields(pattern = %pattern))]
    pub fn tokenize(&self, pattern: &str) -> PatternResult<Vec<Token>> {
        let tokens = Lexer::new(pattern, self.delimiter).run()?;
        validate_tokens(&tokens, pattern, self.delimiter)?;
        Ok(tokens)
    }
}

struct Lexer<'a> {
    pattern: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
    delimiter: char,
    tokens: Vec<Token>,
    literal: String,
    literal_ends_escaped: bool,
    next_unnamed: usize,
}

impl<'a> Lexer<'a> {
    fn new(pattern: &'a str, delimiter: char) -> Self {
        Self {
            pattern,
            chars: pattern.char_indices().collect(),
            index: 0,
            delimiter,
            tokens: Vec::new(),
            literal: String::new(),
            literal_ends_escaped: false,
            next_unnamed: 0,
        }
    }

    fn run(mut self) -> PatternResult<Vec<Token>> {
        while let Some(ch) = self.peek() {
            match ch {
                '\\' => {
                    let escaped = self.consume_escape_char()?;
                    self.literal.push(escaped);
                    self.literal_ends_escaped = true;
                }
                ':' => self.lex_named_param()?,
                '(' => {
                    let pattern = self.read_group()?;
                    let name = ParamName::Index(self.next_unnamed);
                    self.next_unnamed += 1;
                    self.push_param(name, Some(pattern));
                }
                ')' => {
                    return Err(PatternError::UnexpectedClosingParenthesis {
                        pattern: self.pattern.to_string(),
                        index: self.current_byte_index(),
                    });
                }
                '?' | '*' | '+' => {
                    return Err(PatternError::DanglingModifier {
                        pattern: self.pattern.to_string(),
                        index: self.current_byte_index(),
                        modifier: ch,
                    });
                }
                _ => {
                    self.literal.push(ch);
                    self.literal_ends_escaped = false;
                    self.next();
                }
            }
        }

        self.flush_literal();
        Ok(self.tokens)
    }

    fn lex_named_param(&mut self) -> PatternResult<()> {
        let start = self.current_byte_index();
        self.expect(':');

        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }

        if name.is_empty() {
            return Err(PatternError::ParameterMissingName {
                pattern: self.pattern.to_string(),
                index: start,
            });
        }

        let custom = if self.peek() == Some('(') {
            Some(self.read_group()?)
        } else {
            None
        };

        self.push_param(ParamName::Named(name), custom);
        Ok(())
    }

    fn push_param(&mut self, name: ParamName, custom: Option<String>) {
        let last = self.literal.chars().last();
        let prefix = match last {
            Some(last)
                if !self.literal_ends_escaped
                    && (last == self.delimiter || last == FORMAT_PREFIX) =>
            {
                self.literal.pop()
            }
            _ => None,
        };
        self.flush_literal();

        let quantifier = match Quantifier::from_modifier(self.peek()) {
            Some(quantifier) => {
                self.next();
                quantifier
            }
            None => Quantifier::One,
        };

        let pattern = custom.unwrap_or_else(|| default_segment_pattern(prefix, self.delimiter));
        self.tokens
            .push(Token::Param(ParamToken::new(name, pattern, prefix, quantifier)));
    }

    fn flush_literal(&mut self) {
        if self.literal.is_empty() {
            return;
        }
        for piece in split_on_delimiter(&self.literal, self.delimiter) {
            self.tokens.push(Token::literal(piece));
        }
        self.literal.clear();
        self.literal_ends_escaped = false;
    }

    /// Reads a balanced `( … )` body. Escapes are kept as regex escapes.
    fn read_group(&mut self) -> PatternResult<String> {
        let start = self.current_byte_index();
        self.expect('(');

        let mut depth = 1usize;
        let mut body = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\\' {
                let escaped = self.consume_escape_char()?;
                body.push('\\');
                body.push(escaped);
                continue;
            }
            self.next();
            match ch {
                '(' => {
                    depth += 1;
                    body.push(ch);
                }
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        if body.is_empty() {
                            return Err(PatternError::EmptyGroup {
                                pattern: self.pattern.to_string(),
                                start,
                            });
                        }
                        return Ok(body);
                    }
                    body.push(ch);
                }
                _ => body.push(ch),
            }
        }

        Err(PatternError::UnterminatedGroup {
            pattern: self.pattern.to_string(),
            start,
        })
    }

    fn expect(&mut self, expected: char) {
        let actual = self.next();
        debug_assert_eq!(Some(expected), actual);
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or_else(|| self.pattern.len())
    }

    fn consume_escape_char(&mut self) -> PatternResult<char> {
        let escape_index = self.current_byte_index();
        self.expect('\\');
        match self.next() {
            Some(ch) => Ok(ch),
            None => Err(PatternError::LoneEscapeCharacter {
                pattern: self.pattern.to_string(),
                index: escape_index,
            }),
        }
    }
}

fn validate_tokens(tokens: &[Token], pattern: &str, delimiter: char) -> PatternResult<()> {
    let mut seen = FastHashSet::with_capacity(tokens.len());
    for param in tokens.iter().filter_map(Token::as_param) {
        let key = param.name.to_string();
        if !seen.insert(key.clone()) {
            return Err(PatternError::DuplicateParamName {
                pattern: pattern.to_string(),
                name: key,
            });
        }
    }

    // unnamed groups only stand alone in their segment
    for group in group_segments(tokens, delimiter)
        .iter()
        .filter(|group| group.len() > 1)
    {
        for piece in group {
            if let SegmentPiece::Param(param) = piece
                && let ParamName::Index(position) = param.name
            {
                return Err(PatternError::UnnamedParameterInSegment {
                    pattern: pattern.to_string(),
                    position,
                });
            }
        }
    }

    Ok(())
}
