use crate::adapters::builtin_backend;
use crate::config::toml_config::ServiceConfig;
use crate::core::registry::ServiceRegistry;
use crate::domain::model::{SelectionRequest, ServiceKind};
use crate::domain::ports::WebtoonApi;
use crate::utils::error::Result;

/// Picks the backend a screen should talk to.
///
/// Resolution never fails: anything that goes wrong while reading the
/// request or building the requested backend is logged and answered with a
/// fresh instance of the default backend.
#[derive(Debug, Clone)]
pub struct ServiceResolver {
    registry: ServiceRegistry,
    default_kind: ServiceKind,
}

impl Default for ServiceResolver {
    fn default() -> Self {
        Self::new(ServiceRegistry::builtin(), ServiceKind::default())
    }
}

impl ServiceResolver {
    pub fn new(registry: ServiceRegistry, default_kind: ServiceKind) -> Self {
        Self {
            registry,
            default_kind,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let mut registry = ServiceRegistry::builtin();
        for (kind, options) in config.backend_options()? {
            registry.set_options(kind, options);
        }
        Ok(Self::new(registry, config.default_service()?))
    }

    pub fn default_kind(&self) -> ServiceKind {
        self.default_kind
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Resolves the backend named by `request`, if any.
    pub fn resolve(&self, request: Option<&SelectionRequest>) -> Box<dyn WebtoonApi> {
        let requested = request.map_or(Ok(None), SelectionRequest::requested_service);

        match requested {
            Ok(Some(kind)) => self.resolve_kind(kind),
            Ok(None) => {
                tracing::debug!("No service requested, using {}", self.default_kind);
                self.default_backend()
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read requested service: {}; falling back to {}",
                    e,
                    self.default_kind
                );
                self.default_backend()
            }
        }
    }

    /// Builds a fresh backend of `kind`, or the default backend if that fails.
    pub fn resolve_kind(&self, kind: ServiceKind) -> Box<dyn WebtoonApi> {
        match self.try_resolve_kind(kind) {
            Ok(api) => api,
            Err(e) => {
                tracing::warn!(
                    "Failed to resolve {} backend: {}; falling back to {}",
                    kind,
                    e,
                    self.default_kind
                );
                self.default_backend()
            }
        }
    }

    pub fn try_resolve_kind(&self, kind: ServiceKind) -> Result<Box<dyn WebtoonApi>> {
        let api = self.registry.create(kind)?;
        tracing::debug!("Resolved {} backend at {}", kind, api.base_url());
        Ok(api)
    }

    fn default_backend(&self) -> Box<dyn WebtoonApi> {
        match self.registry.create(self.default_kind) {
            Ok(api) => api,
            Err(e) => {
                tracing::warn!(
                    "Default backend {} unavailable: {}; using stock settings",
                    self.default_kind,
                    e
                );
                builtin_backend(self.default_kind)
            }
        }
    }
}
