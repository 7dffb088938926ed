pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ServiceConfig;
pub use core::rating::{format_rating, format_rating_with_template, parse_rating};
pub use core::registry::{BackendEntry, BackendOptions, ServiceRegistry};
pub use core::resolver::ServiceResolver;
pub use domain::extras;
pub use domain::model::{SelectionRequest, ServiceKind};
pub use domain::ports::WebtoonApi;
pub use utils::error::{Result, ToonError};
