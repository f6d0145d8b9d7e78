mod error;
mod params;
mod path_matcher;
mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use params::{ParamValue, RouteParams};
pub use path_matcher::{PathMatcher, create_matcher};
