//! Build-time Validation Tests

use hybrid_domain::error::Error;
use hybrid_infrastructure::config::ContainerConfig;
use hybrid_infrastructure::di::{ProviderOptions, ServiceCollection};
use std::sync::Arc;

struct Missing;
struct NeedsMissing;
struct Eager;

#[test]
fn test_validation_turns_missing_dependency_into_configuration_error() {
    let mut services = ServiceCollection::new();
    services
        .add_singleton::<NeedsMissing, _>(|r| {
            r.resolve::<Missing>()?;
            Ok(Arc::new(NeedsMissing))
        })
        .unwrap();

    let err = services.build(ProviderOptions::default()).err().unwrap();
    match &err {
        Error::Configuration { source, .. } => {
            let source = source.as_ref().unwrap();
            assert!(source.to_string().contains("Missing"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_validation_materializes_singletons_eagerly() {
    let mut services = ServiceCollection::new();
    services
        .add_singleton::<Eager, _>(|_| Ok(Arc::new(Eager)))
        .unwrap();

    let provider = services.build(ProviderOptions::default()).unwrap();
    assert_eq!(provider.singleton_count(), 1);
}

#[test]
fn test_validation_reports_cycles_at_build() {
    struct Left;
    struct Right;

    let mut services = ServiceCollection::new();
    services
        .add_transient::<Left, _>(|r| {
            r.resolve::<Right>()?;
            Ok(Arc::new(Left))
        })
        .unwrap()
        .add_transient::<Right, _>(|r| {
            r.resolve::<Left>()?;
            Ok(Arc::new(Right))
        })
        .unwrap();

    let err = services.build(ProviderOptions::default()).err().unwrap();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_options_follow_container_config() {
    let config = ContainerConfig {
        validate_on_build: false,
        validate_scopes: true,
    };
    let options = ProviderOptions::from(config);
    assert!(!options.validate_on_build);
    assert!(options.validate_scopes);
}
