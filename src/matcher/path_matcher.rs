use super::{ResolveResult, RouteParams};
use crate::pattern::{
    CompiledPattern, PatternResult, ScoreWeights, Token, Tokenizer, compile, score_with,
};
use crate::router::PathOptions;

#[derive(Debug, Clone)]
pub struct PathMatcher {
    pattern: String,
    options: PathOptions,
    tokens: Vec<Token>,
    compiled: CompiledPattern,
    param_names: Vec<String>,
    score: f64,
}

impl PathMatcher {
    pub fn new(pattern: &str, options: PathOptions) -> PatternResult<Self> {
        Self::with_weights(pattern, options, &ScoreWeights::DEFAULT)
    }

    #[tracing::instrument(level = "trace", skip(pattern, options, weights), fields(pattern = %pattern))]
    pub fn with_weights(
        pattern: &str,
        options: PathOptions,
        weights: &ScoreWeights,
    ) -> PatternResult<Self> {
        options.validate()?;
        let tokens = Tokenizer::new(options.delimiter).tokenize(pattern)?;
        let compiled = compile(&tokens, &options)?;
        let score = score_with(&tokens, &options, weights);
        let param_names = compiled.param_names().map(str::to_string).collect();

        Ok(Self {
            pattern: pattern.to_string(),
            options,
            tokens,
            compiled,
            param_names,
            score,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> &PathOptions {
        &self.options
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    pub fn regex(&self) -> &regex::Regex {
        self.compiled.regex()
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.compiled.is_match(path)
    }

    pub fn extract(&self, path: &str) -> Option<RouteParams> {
        self.compiled.extract(path)
    }

    pub fn resolve(&self, params: &RouteParams) -> ResolveResult<String> {
        self.compiled.resolve(params)
    }
}

pub fn create_matcher(pattern: &str, options: PathOptions) -> PatternResult<PathMatcher> {
    PathMatcher::new(pattern, options)
}
