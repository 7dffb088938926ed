use crate::domain::extras::EXTRA_API;
use crate::utils::error::{Result, ToonError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Identity of a webtoon backend service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Naver,
    Daum,
    KakaoPage,
    Nate,
    KToon,
    OneStore,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Naver,
        ServiceKind::Daum,
        ServiceKind::KakaoPage,
        ServiceKind::Nate,
        ServiceKind::KToon,
        ServiceKind::OneStore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Naver => "naver",
            ServiceKind::Daum => "daum",
            ServiceKind::KakaoPage => "kakaopage",
            ServiceKind::Nate => "nate",
            ServiceKind::KToon => "ktoon",
            ServiceKind::OneStore => "onestore",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = ToonError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ToonError::UnknownService {
                name: s.to_string(),
            })
    }
}

/// Extras handed over by whoever opens a screen. Only [`EXTRA_API`] matters
/// for backend selection; other entries are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionRequest {
    extras: Map<String, Value>,
}

impl SelectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request naming `kind` under [`EXTRA_API`].
    pub fn for_service(kind: ServiceKind) -> Self {
        Self::new().with_service(kind)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    pub fn with_service(self, kind: ServiceKind) -> Self {
        self.with_extra(EXTRA_API, kind.as_str())
    }

    pub fn has_extra(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    /// The service named under [`EXTRA_API`], if any.
    ///
    /// A present but null, non-string or unknown value is an error.
    pub fn requested_service(&self) -> Result<Option<ServiceKind>> {
        match self.extras.get(EXTRA_API) {
            None => Ok(None),
            Some(Value::String(name)) => name.parse().map(Some),
            Some(Value::Null) => Err(ToonError::MalformedExtra {
                key: EXTRA_API.to_string(),
                reason: "value is null".to_string(),
            }),
            Some(other) => Err(ToonError::MalformedExtra {
                key: EXTRA_API.to_string(),
                reason: format!("expected a service name, found {}", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extras::EXTRA_URL;

    #[test]
    fn test_service_kind_parsing_is_case_insensitive() {
        assert_eq!("NAVER".parse::<ServiceKind>().unwrap(), ServiceKind::Naver);
        assert_eq!(" KakaoPage ".parse::<ServiceKind>().unwrap(), ServiceKind::KakaoPage);
        assert!(matches!(
            "lezhin".parse::<ServiceKind>(),
            Err(ToonError::UnknownService { .. })
        ));
    }

    #[test]
    fn test_service_kind_serde_uses_tags() {
        let json = serde_json::to_string(&ServiceKind::KToon).unwrap();
        assert_eq!(json, "\"ktoon\"");
        let kind: ServiceKind = serde_json::from_str("\"onestore\"").unwrap();
        assert_eq!(kind, ServiceKind::OneStore);
        for kind in ServiceKind::ALL {
            assert_eq!(kind.as_str().parse::<ServiceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_requested_service() {
        assert_eq!(SelectionRequest::new().requested_service().unwrap(), None);

        let request = SelectionRequest::for_service(ServiceKind::Daum);
        assert_eq!(
            request.requested_service().unwrap(),
            Some(ServiceKind::Daum)
        );

        let only_url = SelectionRequest::new().with_extra(EXTRA_URL, "https://example.com");
        assert_eq!(only_url.requested_service().unwrap(), None);
    }

    #[test]
    fn test_requested_service_rejects_malformed_values() {
        let null = SelectionRequest::new().with_extra(EXTRA_API, Value::Null);
        assert!(matches!(
            null.requested_service(),
            Err(ToonError::MalformedExtra { .. })
        ));

        let number = SelectionRequest::new().with_extra(EXTRA_API, 3);
        assert!(matches!(
            number.requested_service(),
            Err(ToonError::MalformedExtra { .. })
        ));

        let unknown = SelectionRequest::new().with_extra(EXTRA_API, "toptoon");
        assert!(matches!(
            unknown.requested_service(),
            Err(ToonError::UnknownService { .. })
        ));
    }

    #[test]
    fn test_request_from_json() {
        let request =
            SelectionRequest::from_json(r#"{"EXTRA_API": "nate", "EXTRA_EPISODE": 12}"#).unwrap();
        assert_eq!(request.len(), 2);
        assert!(request.has_extra("EXTRA_EPISODE"));
        assert_eq!(request.requested_service().unwrap(), Some(ServiceKind::Nate));

        assert!(SelectionRequest::from_json("[1, 2]").is_err());
    }
}
