use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use toon_resolver::extras::{EXTRA_API, EXTRA_EPISODE, EXTRA_MAIN_COLOR};
use toon_resolver::{
    format_rating, format_rating_with_template, BackendEntry, BackendOptions, SelectionRequest, ServiceConfig,
    ServiceKind, ServiceRegistry, ServiceResolver, ToonError, WebtoonApi,
};

fn unavailable(_: &BackendOptions) -> toon_resolver::Result<Box<dyn WebtoonApi>> {
    Err(ToonError::ConfigError {
        message: "service discontinued".to_string(),
    })
}

#[test]
fn test_resolve_from_json_request() -> Result<()> {
    let resolver = ServiceResolver::default();
    let request = SelectionRequest::from_json(
        r##"{"EXTRA_API": "kakaopage", "EXTRA_EPISODE": "42", "EXTRA_MAIN_COLOR": "#ffcc00"}"##,
    )?;

    let api = resolver.resolve(Some(&request));
    assert_eq!(api.kind(), ServiceKind::KakaoPage);
    assert_eq!(api.display_name(), "KakaoPage");

    // Unrelated extras are carried along untouched.
    assert_eq!(request.extra(EXTRA_EPISODE), Some(&serde_json::json!("42")));
    assert!(request.has_extra(EXTRA_MAIN_COLOR));
    Ok(())
}

#[test]
fn test_resolve_always_returns_a_backend() {
    let resolver = ServiceResolver::default();
    let requests = [
        None,
        Some(SelectionRequest::new()),
        Some(SelectionRequest::new().with_extra(EXTRA_API, serde_json::Value::Null)),
        Some(SelectionRequest::new().with_extra(EXTRA_API, serde_json::json!({"class": "NaverApi"}))),
        Some(SelectionRequest::new().with_extra(EXTRA_API, "com.pluu.support.LezhinApi")),
    ];

    for request in &requests {
        let api = resolver.resolve(request.as_ref());
        assert_eq!(api.kind(), ServiceKind::Naver);
    }
}

#[test]
fn test_each_resolution_builds_a_fresh_instance() {
    let resolver = ServiceResolver::default();
    let request = SelectionRequest::for_service(ServiceKind::Nate);

    let first = resolver.resolve(Some(&request));
    let second = resolver.resolve(Some(&request));

    assert_eq!(first.kind(), ServiceKind::Nate);
    assert_eq!(second.kind(), ServiceKind::Nate);
    let first_ptr = &*first as *const dyn WebtoonApi as *const u8;
    let second_ptr = &*second as *const dyn WebtoonApi as *const u8;
    assert_ne!(first_ptr, second_ptr);
}

#[test]
fn test_failed_construction_falls_back_to_default() {
    let mut registry = ServiceRegistry::builtin();
    registry.register(BackendEntry {
        kind: ServiceKind::KToon,
        description: "discontinued",
        factory: unavailable,
    });
    let resolver = ServiceResolver::new(registry, ServiceKind::Daum);

    let api = resolver.resolve(Some(&SelectionRequest::for_service(ServiceKind::KToon)));
    assert_eq!(api.kind(), ServiceKind::Daum);

    let err = resolver.try_resolve_kind(ServiceKind::KToon).unwrap_err();
    assert!(matches!(err, ToonError::BackendConstruction { .. }));
}

#[test]
fn test_resolver_from_config_file() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(
        br#"
[service]
default = "onestore"

[backends.daum]
base_url = "https://daum.mirror.test"

[backends.nate]
base_url = "not-a-url"
"#,
    )?;

    let config = ServiceConfig::from_file(config_file.path())?;
    let resolver = ServiceResolver::from_config(&config)?;
    assert_eq!(resolver.default_kind(), ServiceKind::OneStore);

    let daum = resolver.resolve(Some(&SelectionRequest::for_service(ServiceKind::Daum)));
    assert_eq!(daum.base_url(), "https://daum.mirror.test/");
    assert_eq!(
        daum.endpoint("webtoon/view/1")?.as_str(),
        "https://daum.mirror.test/webtoon/view/1"
    );

    // A broken override is a construction failure, answered with the default.
    let nate = resolver.resolve(Some(&SelectionRequest::for_service(ServiceKind::Nate)));
    assert_eq!(nate.kind(), ServiceKind::OneStore);

    assert_eq!(resolver.resolve(None).kind(), ServiceKind::OneStore);
    Ok(())
}

#[test]
fn test_resolver_from_config_rejects_unknown_default() -> Result<()> {
    let config = ServiceConfig::from_toml_str("[service]\ndefault = \"lezhin\"\n")?;
    assert!(matches!(
        ServiceResolver::from_config(&config),
        Err(ToonError::UnknownService { .. })
    ));
    Ok(())
}

#[test]
fn test_format_rating() -> Result<()> {
    assert_eq!(format_rating("4.5")?, "Rating: 4.50");
    assert_eq!(format_rating("0")?, "Rating: 0.00");

    let err = format_rating("abc").unwrap_err();
    assert!(matches!(err, ToonError::InvalidRating { .. }));
    Ok(())
}

#[test]
fn test_format_rating_matches_feed_rounding() -> Result<()> {
    let cases = [
        ("2.675", "Rating: 2.68"),
        ("0.125", "Rating: 0.13"),
        ("9.995", "Rating: 10.00"),
        ("1.005", "Rating: 1.01"),
        ("+4.5", "Rating: 4.50"),
        ("-1", "Rating: -1.00"),
        ("Infinity", "Rating: Infinity"),
        ("NaN", "Rating: NaN"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_rating(input)?, expected, "input {}", input);
    }

    for input in ["inf", "infinity", "nan", "-inf"] {
        assert!(matches!(
            format_rating(input),
            Err(ToonError::InvalidRating { .. })
        ));
    }
    Ok(())
}

#[test]
fn test_localized_rating_template_from_config() -> Result<()> {
    let config = ServiceConfig::from_toml_str("[display]\nrating_format = \"평점 : {}\"\n")?;
    assert_eq!(
        format_rating_with_template(config.rating_format(), "8.125")?,
        "평점 : 8.13"
    );
    Ok(())
}
