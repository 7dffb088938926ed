use crate::domain::model::ServiceKind;
use crate::domain::ports::WebtoonApi;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

macro_rules! webtoon_backend {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $display:expr, $base_url:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            base_url: String,
        }

        impl $name {
            pub const DEFAULT_BASE_URL: &'static str = $base_url;

            pub fn new() -> Self {
                Self {
                    base_url: Self::DEFAULT_BASE_URL.to_string(),
                }
            }

            /// Points the backend at another host, e.g. a mirror or a test server.
            pub fn with_base_url(base_url: &str) -> Result<Self> {
                let url = validate_url("base_url", base_url)?;
                Ok(Self {
                    base_url: url.to_string(),
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl WebtoonApi for $name {
            fn kind(&self) -> ServiceKind {
                $kind
            }

            fn display_name(&self) -> &str {
                $display
            }

            fn base_url(&self) -> &str {
                &self.base_url
            }
        }
    };
}

webtoon_backend!(
    /// The default backend.
    NaverApi,
    ServiceKind::Naver,
    "Naver Webtoon",
    "https://m.comic.naver.com/"
);
webtoon_backend!(DaumApi, ServiceKind::Daum, "Daum Webtoon", "http://m.webtoon.daum.net/");
webtoon_backend!(KakaoPageApi, ServiceKind::KakaoPage, "KakaoPage", "https://page.kakao.com/");
webtoon_backend!(NateApi, ServiceKind::Nate, "Nate Comics", "http://m.comics.nate.com/");
webtoon_backend!(KToonApi, ServiceKind::KToon, "KToon", "https://www.myktoon.com/");
webtoon_backend!(OneStoreApi, ServiceKind::OneStore, "OneStore Comics", "https://m.onestore.co.kr/");

/// Builds the stock backend for `kind` with its no-argument constructor.
pub fn builtin_backend(kind: ServiceKind) -> Box<dyn WebtoonApi> {
    match kind {
        ServiceKind::Naver => Box::new(NaverApi::new()),
        ServiceKind::Daum => Box::new(DaumApi::new()),
        ServiceKind::KakaoPage => Box::new(KakaoPageApi::new()),
        ServiceKind::Nate => Box::new(NateApi::new()),
        ServiceKind::KToon => Box::new(KToonApi::new()),
        ServiceKind::OneStore => Box::new(OneStoreApi::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_backend_matches_kind() {
        for kind in ServiceKind::ALL {
            let api = builtin_backend(kind);
            assert_eq!(api.kind(), kind);
            assert!(api.base_url().starts_with("http"));
        }
    }

    #[test]
    fn test_with_base_url_normalizes_and_validates() {
        let api = NateApi::with_base_url("https://mirror.example.com").unwrap();
        assert_eq!(api.base_url(), "https://mirror.example.com/");
        assert!(NateApi::with_base_url("mirror.example.com").is_err());
        assert!(NateApi::with_base_url("file:///tmp/comics").is_err());
    }

    #[test]
    fn test_endpoint_joins_relative_paths() {
        let api = NaverApi::new();
        let url = api.endpoint("webtoon/weekday?week=mon").unwrap();
        assert_eq!(
            url.as_str(),
            "https://m.comic.naver.com/webtoon/weekday?week=mon"
        );
    }
}
