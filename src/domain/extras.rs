//! Keys shared by every component that builds or reads a [`SelectionRequest`].
//!
//! Only [`EXTRA_API`] is interpreted by the resolver. The rest are carried
//! through untouched for the screens that consume them.
//!
//! [`SelectionRequest`]: crate::domain::model::SelectionRequest

/// Names the backend service to use, as a lowercase service tag.
pub const EXTRA_API: &str = "EXTRA_API";
pub const EXTRA_URL: &str = "EXTRA_URL";
pub const EXTRA_EPISODE: &str = "EXTRA_EPISODE";
pub const EXTRA_MAIN_COLOR: &str = "EXTRA_MAIN_COLOR";
pub const EXTRA_STATUS_COLOR: &str = "EXTRA_STATUS_COLOR";

/// Tag of the main content fragment.
pub const MAIN_FRAG_TAG: &str = "main_frag_tag";

pub const ALL_EXTRA_KEYS: [&str; 6] = [
    EXTRA_API,
    EXTRA_URL,
    EXTRA_EPISODE,
    EXTRA_MAIN_COLOR,
    EXTRA_STATUS_COLOR,
    MAIN_FRAG_TAG,
];
