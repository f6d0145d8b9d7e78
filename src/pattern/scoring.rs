use serde::{Deserialize, Serialize};

use super::segment::{SegmentPiece, group_segments};
use super::{ParamKind, ParamToken, Token};
use crate::router::PathOptions;

/// Past this many pieces the `10^-n` positional weights stop registering in
/// an `f64` sum.
pub const MAX_PRECISE_SUB_SEGMENTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub segment: f64,
    pub sub_segment: f64,
    pub static_text: f64,
    pub dynamic: f64,
    pub dynamic_custom_regexp: f64,
    pub wildcard: f64,
    pub sub_wildcard: f64,
    pub repeatable: f64,
    pub strict: f64,
    pub sensitive: f64,
    pub optional: f64,
    pub sub_optional: f64,
    pub root: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        segment: 4.0,
        sub_segment: 2.0,
        static_text: 3.0,
        dynamic: 2.0,
        dynamic_custom_regexp: 2.5,
        wildcard: -1.0,
        sub_wildcard: 1.0,
        repeatable: -0.5,
        strict: 0.5,
        sensitive: 0.25,
        optional: -4.0,
        sub_optional: -0.1,
        root: 1.0,
    };

    pub fn root_pattern(&self) -> f64 {
        self.segment + self.static_text + self.root
    }

    pub(crate) fn named(&self) -> [(&'static str, f64); 13] {
        [
            ("segment", self.segment),
            ("sub_segment", self.sub_segment),
            ("static_text", self.static_text),
            ("dynamic", self.dynamic),
            ("dynamic_custom_regexp", self.dynamic_custom_regexp),
            ("wildcard", self.wildcard),
            ("sub_wildcard", self.sub_wildcard),
            ("repeatable", self.repeatable),
            ("strict", self.strict),
            ("sensitive", self.sensitive),
            ("optional", self.optional),
            ("sub_optional", self.sub_optional),
            ("root", self.root),
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn score(tokens: &[Token], options: &PathOptions) -> f64 {
    score_with(tokens, options, &ScoreWeights::DEFAULT)
}

#[tracing::instrument(level = "trace", skip(tokens, options, weights), fields(tokens = tokens.len() as u64))]
pub fn score_with(tokens: &[Token], options: &PathOptions, weights: &ScoreWeights) -> f64 {
    let delimiter = options.delimiter;
    let mut total = 0.0;
    if options.strict {
        total += weights.strict;
    }
    if options.sensitive {
        total += weights.sensitive;
    }

    if let [Token::Static { text }] = tokens
        && is_delimiter_only(text, delimiter)
    {
        return total + weights.root_pattern();
    }

    for group in group_segments(tokens, delimiter) {
        if let [piece] = group.as_slice() {
            total += score_for_segment(piece, delimiter, weights);
            continue;
        }

        if group.len() > MAX_PRECISE_SUB_SEGMENTS {
            tracing::warn!(
                pieces = group.len() as u64,
                cap = MAX_PRECISE_SUB_SEGMENTS as u64,
                "composite segment exceeds precise scoring length"
            );
        }

        total += weights.segment + weights.sub_segment;
        let mut multiplier = 0.1;
        for piece in &group {
            total += score_for_sub_segment(piece, weights) * multiplier;
            multiplier /= 10.0;
        }
    }

    total
}

fn score_for_segment(piece: &SegmentPiece<'_>, delimiter: char, weights: &ScoreWeights) -> f64 {
    let mut score = weights.segment;
    match piece {
        SegmentPiece::Static(text) if is_delimiter_only(text, delimiter) => score += weights.root,
        SegmentPiece::Static(_) => score += weights.static_text,
        SegmentPiece::Param(param) => {
            score += param_weight(param, weights.wildcard, weights);
            if param.optional() {
                score += weights.optional;
            }
            if param.repeat() {
                score += weights.repeatable;
            }
        }
    }
    score
}

fn score_for_sub_segment(piece: &SegmentPiece<'_>, weights: &ScoreWeights) -> f64 {
    match piece {
        SegmentPiece::Static(_) => weights.static_text,
        SegmentPiece::Param(param) => {
            let mut score = param_weight(param, weights.sub_wildcard, weights);
            if param.optional() {
                score += weights.sub_optional;
            }
            score
        }
    }
}

fn param_weight(param: &ParamToken, wildcard: f64, weights: &ScoreWeights) -> f64 {
    match param.kind() {
        ParamKind::Wildcard => wildcard,
        ParamKind::Segment => weights.dynamic,
        ParamKind::Custom => weights.dynamic_custom_regexp,
    }
}

fn is_delimiter_only(text: &str, delimiter: char) -> bool {
    let mut chars = text.chars();
    chars.next() == Some(delimiter) && chars.next().is_none()
}
