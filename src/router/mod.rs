mod errors;
mod options;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_DELIMITER, OptionsError, PathOptions, PathOptionsBuilder, RouteRecord, RouterOptions,
    RouterOptionsBuilder,
};
pub use service::Router;
