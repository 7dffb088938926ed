pub mod rating;
pub mod registry;
pub mod resolver;

pub use crate::domain::model::{SelectionRequest, ServiceKind};
pub use crate::domain::ports::WebtoonApi;
pub use crate::utils::error::Result;
