use crate::matcher::{PathMatcher, RouteParams};
use crate::pattern::ScoreWeights;
use crate::registry::{RegistryError, RegistryMetrics, RegistryResult};
use crate::router::{PathOptions, RouteRecord, RouterOptions};
use crate::types::{RankedPattern, RouteMatch};

/// Matchers ordered by descending score. Equal scores keep registration
/// order, so the first registered pattern wins a tie.
#[derive(Debug, Clone, Default)]
pub struct MatcherRegistry {
    matchers: Vec<PathMatcher>,
    global: PathOptions,
    weights: ScoreWeights,
    metrics: RegistryMetrics,
}

impl MatcherRegistry {
    pub fn new(global: PathOptions) -> Self {
        Self::with_options(RouterOptions {
            path: global,
            weights: ScoreWeights::DEFAULT,
        })
    }

    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            matchers: Vec::new(),
            global: options.path,
            weights: options.weights,
            metrics: RegistryMetrics::default(),
        }
    }

    pub fn from_records<'a, I>(records: I, global: PathOptions) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = &'a RouteRecord>,
    {
        let mut registry = Self::new(global);
        for record in records {
            registry.add_record(record)?;
        }
        Ok(registry)
    }

    /// Returns the index the new matcher landed at. Unchanged on error.
    pub fn add(&mut self, pattern: &str, options: Option<PathOptions>) -> RegistryResult<usize> {
        let options = options.unwrap_or(self.global);
        match PathMatcher::with_weights(pattern, options, &self.weights) {
            Ok(matcher) => Ok(self.insert(matcher)),
            Err(err) => {
                self.metrics.record_rejection();
                tracing::event!(
                    tracing::Level::DEBUG,
                    operation = "add",
                    pattern = %pattern,
                    error = %err,
                    "pattern rejected"
                );
                Err(err.into())
            }
        }
    }

    pub fn add_record(&mut self, record: &RouteRecord) -> RegistryResult<usize> {
        let options = record.effective_options(&self.global);
        self.add(&record.path, Some(options))
    }

    /// Places `matcher` before the first entry with a strictly lower score.
    pub fn insert(&mut self, matcher: PathMatcher) -> usize {
        let score = matcher.score();
        let index = self.matchers.partition_point(|existing| existing.score() >= score);
        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            pattern = %matcher.pattern(),
            score,
            index = index as u64
        );
        self.matchers.insert(index, matcher);
        self.metrics.record_insert();
        index
    }

    #[doc(alias = "match")]
    #[tracing::instrument(level = "trace", skip(self, path), fields(path = %path))]
    pub fn match_path(&self, path: &str) -> RegistryResult<RouteMatch> {
        self.metrics.record_lookup();

        match self.find_matcher(path) {
            Some((matcher, params)) => Ok(RouteMatch {
                path: path.to_string(),
                params,
                pattern: matcher.pattern().to_string(),
                score: matcher.score(),
            }),
            None => {
                self.metrics.record_miss();
                tracing::event!(
                    tracing::Level::DEBUG,
                    operation = "match",
                    path = %path,
                    candidates = self.matchers.len() as u64,
                    "no pattern matched"
                );
                Err(RegistryError::NoMatch {
                    path: path.to_string(),
                })
            }
        }
    }

    pub fn find_matcher(&self, path: &str) -> Option<(&PathMatcher, RouteParams)> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.extract(path).map(|params| (matcher, params)))
    }

    pub fn matchers(&self) -> &[PathMatcher] {
        &self.matchers
    }

    pub fn rankings(&self) -> Vec<RankedPattern> {
        self.matchers
            .iter()
            .map(|matcher| RankedPattern {
                pattern: matcher.pattern().to_string(),
                score: matcher.score(),
            })
            .collect()
    }

    pub fn global_options(&self) -> &PathOptions {
        &self.global
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
