//! Backend registry
//!
//! Maps each [`ServiceKind`] to a factory function. Selecting a backend by an
//! external identifier is a table lookup followed by a factory call; a failed
//! lookup or construction comes back as an error for the caller to handle.

use std::collections::HashMap;

use crate::adapters::{DaumApi, KToonApi, KakaoPageApi, NateApi, NaverApi, OneStoreApi};
use crate::domain::model::ServiceKind;
use crate::domain::ports::WebtoonApi;
use crate::utils::error::{Result, ToonError};

/// Per-backend construction options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendOptions {
    /// Overrides the backend's stock base URL.
    pub base_url: Option<String>,
}

impl BackendOptions {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

pub type BackendFactory = fn(&BackendOptions) -> Result<Box<dyn WebtoonApi>>;

/// Registry entry: a service identity plus the factory that builds it.
#[derive(Clone, Copy)]
pub struct BackendEntry {
    pub kind: ServiceKind,
    /// Human-readable description
    pub description: &'static str,
    pub factory: BackendFactory,
}

impl std::fmt::Debug for BackendEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendEntry")
            .field("kind", &self.kind)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

macro_rules! builtin_factory {
    ($fn_name:ident, $api:ty) => {
        fn $fn_name(options: &BackendOptions) -> Result<Box<dyn WebtoonApi>> {
            match options.base_url.as_deref() {
                Some(base_url) => Ok(Box::new(<$api>::with_base_url(base_url)?)),
                None => Ok(Box::new(<$api>::new())),
            }
        }
    };
}

builtin_factory!(create_naver, NaverApi);
builtin_factory!(create_daum, DaumApi);
builtin_factory!(create_kakao_page, KakaoPageApi);
builtin_factory!(create_nate, NateApi);
builtin_factory!(create_ktoon, KToonApi);
builtin_factory!(create_one_store, OneStoreApi);

pub static BUILTIN_BACKENDS: [BackendEntry; 6] = [
    BackendEntry {
        kind: ServiceKind::Naver,
        description: "Naver Webtoon (default)",
        factory: create_naver,
    },
    BackendEntry {
        kind: ServiceKind::Daum,
        description: "Daum Webtoon",
        factory: create_daum,
    },
    BackendEntry {
        kind: ServiceKind::KakaoPage,
        description: "KakaoPage",
        factory: create_kakao_page,
    },
    BackendEntry {
        kind: ServiceKind::Nate,
        description: "Nate Comics",
        factory: create_nate,
    },
    BackendEntry {
        kind: ServiceKind::KToon,
        description: "KT olleh webtoon",
        factory: create_ktoon,
    },
    BackendEntry {
        kind: ServiceKind::OneStore,
        description: "OneStore Comics",
        factory: create_one_store,
    },
];

#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    entries: Vec<BackendEntry>,
    options: HashMap<ServiceKind, BackendOptions>,
}

impl ServiceRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding every stock backend.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for entry in BUILTIN_BACKENDS.iter() {
            registry.register(*entry);
        }
        registry
    }

    /// Adds `entry`, replacing any entry already registered for the same kind.
    pub fn register(&mut self, entry: BackendEntry) {
        match self.entries.iter_mut().find(|e| e.kind == entry.kind) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn set_options(&mut self, kind: ServiceKind, options: BackendOptions) {
        self.options.insert(kind, options);
    }

    pub fn contains(&self, kind: ServiceKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    pub fn entries(&self) -> &[BackendEntry] {
        &self.entries
    }

    /// Builds a fresh backend for `kind` using its registered factory.
    pub fn create(&self, kind: ServiceKind) -> Result<Box<dyn WebtoonApi>> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.kind == kind)
            .ok_or(ToonError::BackendNotRegistered { kind })?;

        let options = self.options.get(&kind).cloned().unwrap_or_default();
        let api = (entry.factory)(&options).map_err(|e| ToonError::BackendConstruction {
            kind,
            reason: e.to_string(),
        })?;

        if api.kind() != kind {
            return Err(ToonError::BackendConstruction {
                kind,
                reason: format!("factory produced a {} backend", api.kind()),
            });
        }

        Ok(api)
    }
}
