//! Ranks route patterns by specificity and matches concrete paths against
//! them, most specific pattern first.
//!
//! ```
//! use path_rank_rs::{MatcherRegistry, PathOptions};
//!
//! let mut registry = MatcherRegistry::new(PathOptions::default());
//! registry.add("/users/:id", None).unwrap();
//! registry.add("/users/new", None).unwrap();
//!
//! let found = registry.match_path("/users/new").unwrap();
//! assert_eq!(found.pattern, "/users/new");
//! ```

pub mod codec;
pub mod matcher;
pub mod pattern;
pub mod registry;
pub mod router;
pub mod types;

pub use codec::{CodecError, CodecResult};
pub use matcher::{
    ParamValue, PathMatcher, ResolveError, ResolveResult, RouteParams, create_matcher,
};
pub use pattern::{
    CompiledPattern, ParamName, ParamToken, PatternError, PatternResult, ScoreWeights, Token,
    tokenize_path,
};
pub use registry::{MatcherRegistry, RegistryError, RegistryResult};
pub use router::{
    DEFAULT_DELIMITER, OptionsError, PathOptions, PathOptionsBuilder, RouteRecord, Router,
    RouterError, RouterOptions, RouterOptionsBuilder, RouterResult,
};
pub use types::{RankedPattern, RouteMatch};
