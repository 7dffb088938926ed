use crate::domain::model::ServiceKind;
use crate::utils::error::Result;
use url::Url;

/// A webtoon content backend.
pub trait WebtoonApi: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> ServiceKind;

    fn display_name(&self) -> &str;

    fn base_url(&self) -> &str;

    /// Resolves `path` against the backend's base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(self.base_url())?;
        Ok(base.join(path)?)
    }
}
