//! Service Registry Tests

use hybrid_domain::error::Error;
use hybrid_infrastructure::di::{ProviderOptions, ServiceCollection, ServiceDescriptor};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

trait ServiceB: Send + Sync {}
trait ServiceA: Send + Sync {
    fn b(&self) -> Arc<dyn ServiceB>;
}

struct ConcreteB;
impl ServiceB for ConcreteB {}

struct ConcreteA {
    b: Arc<dyn ServiceB>,
}
impl ServiceA for ConcreteA {
    fn b(&self) -> Arc<dyn ServiceB> {
        Arc::clone(&self.b)
    }
}

fn lazy() -> ProviderOptions {
    ProviderOptions {
        validate_on_build: false,
        validate_scopes: true,
    }
}

fn graph() -> ServiceCollection {
    let mut services = ServiceCollection::new();
    services
        .add_singleton::<dyn ServiceB, _>(|_| Ok(Arc::new(ConcreteB)))
        .unwrap()
        .add_singleton::<dyn ServiceA, _>(|r| Ok(Arc::new(ConcreteA { b: r.resolve()? })))
        .unwrap();
    services
}

#[test]
fn test_singleton_resolves_to_identical_instance() {
    let provider = graph().build(lazy()).unwrap();

    let first = provider.resolve::<dyn ServiceA>().unwrap();
    let second = provider.resolve::<dyn ServiceA>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_dependency_is_the_shared_singleton() {
    let provider = graph().build(lazy()).unwrap();

    let a = provider.resolve::<dyn ServiceA>().unwrap();
    let b = provider.resolve::<dyn ServiceB>().unwrap();

    assert!(Arc::ptr_eq(&a.b(), &b));
    assert_eq!(provider.singleton_count(), 2);
}

#[test]
fn test_singletons_are_lazy_without_validation() {
    let provider = graph().build(lazy()).unwrap();
    assert_eq!(provider.singleton_count(), 0);

    provider.resolve::<dyn ServiceB>().unwrap();
    assert_eq!(provider.singleton_count(), 1);
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut services = graph();
    let err = services
        .add_singleton::<dyn ServiceB, _>(|_| Ok(Arc::new(ConcreteB)))
        .err()
        .unwrap();

    assert!(matches!(err, Error::DuplicateRegistration { .. }));
    assert_eq!(services.len(), 2);
}

#[test]
fn test_missing_transitive_dependency_is_unresolved() {
    let mut services = ServiceCollection::new();
    services
        .add_singleton::<dyn ServiceA, _>(|r| Ok(Arc::new(ConcreteA { b: r.resolve()? })))
        .unwrap();
    let provider = services.build(lazy()).unwrap();

    let err = provider.resolve::<dyn ServiceA>().err().unwrap();
    match err {
        Error::UnresolvedDependency { service, missing } => {
            assert!(service.contains("ServiceA"));
            assert!(missing.contains("ServiceB"));
        }
        other => panic!("expected unresolved dependency, got {other:?}"),
    }
    assert_eq!(provider.singleton_count(), 0);
}

#[test]
fn test_unregistered_identity_is_unresolved() {
    let provider = ServiceCollection::new().build(lazy()).unwrap();
    let err = provider.resolve::<dyn ServiceB>().err().unwrap();
    assert!(matches!(err, Error::UnresolvedDependency { .. }));
    assert!(provider.try_resolve::<dyn ServiceB>().unwrap().is_none());
}

#[test]
fn test_try_resolve_still_reports_missing_dependencies() {
    let mut services = ServiceCollection::new();
    services
        .add_singleton::<dyn ServiceA, _>(|r| Ok(Arc::new(ConcreteA { b: r.resolve()? })))
        .unwrap();
    let provider = services.build(lazy()).unwrap();

    assert!(provider.try_resolve::<dyn ServiceA>().is_err());
}

#[test]
fn test_two_node_cycle_fails_from_either_side() {
    struct CyclicA;
    struct CyclicB;

    let mut services = ServiceCollection::new();
    services
        .add_singleton::<CyclicA, _>(|r| {
            r.resolve::<CyclicB>()?;
            Ok(Arc::new(CyclicA))
        })
        .unwrap()
        .add_singleton::<CyclicB, _>(|r| {
            r.resolve::<CyclicA>()?;
            Ok(Arc::new(CyclicB))
        })
        .unwrap();
    let provider = services.build(lazy()).unwrap();

    for err in [
        provider.resolve::<CyclicA>().err().unwrap(),
        provider.resolve::<CyclicB>().err().unwrap(),
    ] {
        assert!(matches!(err, Error::CyclicDependency { ref path } if path.len() == 3));
    }
    assert_eq!(provider.singleton_count(), 0);
}

#[test]
fn test_deep_chain_resolves_in_dependency_order() {
    struct Level<const N: usize>;

    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let mut services = ServiceCollection::new();

    let log = Arc::clone(&order);
    services
        .add_singleton::<Level<0>, _>(move |_| {
            log.lock().unwrap().push(0);
            Ok(Arc::new(Level::<0>))
        })
        .unwrap();
    let log = Arc::clone(&order);
    services
        .add_singleton::<Level<1>, _>(move |r| {
            r.resolve::<Level<0>>()?;
            log.lock().unwrap().push(1);
            Ok(Arc::new(Level::<1>))
        })
        .unwrap();
    let log = Arc::clone(&order);
    services
        .add_singleton::<Level<2>, _>(move |r| {
            r.resolve::<Level<1>>()?;
            log.lock().unwrap().push(2);
            Ok(Arc::new(Level::<2>))
        })
        .unwrap();
    let log = Arc::clone(&order);
    services
        .add_singleton::<Level<3>, _>(move |r| {
            r.resolve::<Level<2>>()?;
            r.resolve::<Level<0>>()?;
            log.lock().unwrap().push(3);
            Ok(Arc::new(Level::<3>))
        })
        .unwrap();

    let provider = services.build(lazy()).unwrap();
    provider.resolve::<Level<3>>().unwrap();

    assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_failed_factory_is_not_cached() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);

    let mut services = ServiceCollection::new();
    services
        .add_singleton::<dyn ServiceB, _>(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Error::internal("first attempt fails"))
            } else {
                Ok(Arc::new(ConcreteB))
            }
        })
        .unwrap();
    let provider = services.build(lazy()).unwrap();

    assert!(provider.resolve::<dyn ServiceB>().is_err());
    assert_eq!(provider.singleton_count(), 0);

    let first = provider.resolve::<dyn ServiceB>().unwrap();
    let second = provider.resolve::<dyn ServiceB>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_singleton_constructed_once_under_concurrent_access() {
    let constructions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructions);

    let mut services = ServiceCollection::new();
    services
        .add_singleton::<dyn ServiceB, _>(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            Ok(Arc::new(ConcreteB))
        })
        .unwrap();
    let provider = services.build(lazy()).unwrap();

    let instances: Vec<Arc<dyn ServiceB>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| provider.resolve::<dyn ServiceB>().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(constructions.load(Ordering::SeqCst), 1);
    assert!(instances.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}

#[test]
fn test_instance_registration_returns_the_given_value() {
    let value: Arc<dyn ServiceB> = Arc::new(ConcreteB);
    let mut services = ServiceCollection::new();
    services
        .register(ServiceDescriptor::instance(Arc::clone(&value)))
        .unwrap();

    let provider = services.build(ProviderOptions::default()).unwrap();
    assert!(Arc::ptr_eq(&provider.resolve::<dyn ServiceB>().unwrap(), &value));
}
