use crate::matcher::RouteParams;
use crate::registry::MatcherRegistry;
use crate::router::{PathOptions, RouteRecord, RouterError, RouterOptions, RouterResult};
use crate::types::{RankedPattern, RouteMatch};
use parking_lot::RwLock;

#[derive(Debug)]
pub struct Router {
    inner: RwLock<MatcherRegistry>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            inner: RwLock::new(MatcherRegistry::default()),
        }
    }
}

impl Router {
    pub fn new(options: Option<RouterOptions>) -> RouterResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;
        Ok(Self {
            inner: RwLock::new(MatcherRegistry::with_options(options)),
        })
    }

    pub fn with_records<'a, I>(records: I, options: Option<RouterOptions>) -> RouterResult<Self>
    where
        I: IntoIterator<Item = &'a RouteRecord>,
    {
        let router = Self::new(options)?;
        router.add_records(records)?;
        Ok(router)
    }

    pub fn add(&self, pattern: &str, options: Option<PathOptions>) -> RouterResult<usize> {
        if let Some(options) = &options {
            options.validate()?;
        }
        let mut guard = self.inner.write();
        Ok(guard.add(pattern, options)?)
    }

    pub fn add_record(&self, record: &RouteRecord) -> RouterResult<usize> {
        if record.apply_options {
            record.options.validate()?;
        }
        let mut guard = self.inner.write();
        Ok(guard.add_record(record)?)
    }

    /// Adds every record under a single write lock. Stops at the first
    /// rejected record; records before it stay registered.
    pub fn add_records<'a, I>(&self, records: I) -> RouterResult<Vec<usize>>
    where
        I: IntoIterator<Item = &'a RouteRecord>,
    {
        let mut guard = self.inner.write();
        let mut out = Vec::new();
        for record in records {
            if record.apply_options {
                record.options.validate()?;
            }
            out.push(guard.add_record(record)?);
        }
        Ok(out)
    }

    #[doc(alias = "match")]
    pub fn match_path(&self, path: &str) -> RouterResult<RouteMatch> {
        let guard = self.inner.read();
        Ok(guard.match_path(path)?)
    }

    pub fn resolve(&self, pattern: &str, params: &RouteParams) -> RouterResult<String> {
        let guard = self.inner.read();
        let matcher = guard
            .matchers()
            .iter()
            .find(|matcher| matcher.pattern() == pattern)
            .ok_or_else(|| RouterError::UnknownPattern {
                pattern: pattern.to_string(),
            })?;
        Ok(matcher.resolve(params)?)
    }

    pub fn rankings(&self) -> Vec<RankedPattern> {
        self.inner.read().rankings()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// `(registered, rejected, lookups, misses)`
    pub fn stats(&self) -> (usize, usize, u64, u64) {
        let guard = self.inner.read();
        let metrics = guard.metrics();
        let (lookups, misses) = metrics.snapshot();
        (
            metrics.total_patterns_registered,
            metrics.total_patterns_rejected,
            lookups,
            misses,
        )
    }

    pub fn with_registry<R>(&self, f: impl FnOnce(&MatcherRegistry) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }
}
