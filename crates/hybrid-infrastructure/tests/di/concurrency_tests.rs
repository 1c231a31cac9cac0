//! Concurrent Resolution Tests

use hybrid_domain::error::{Error, Result};
use hybrid_infrastructure::di::{ProviderOptions, ServiceCollection, ServiceProvider};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

struct Alpha;
struct Beta;

const PEER_WAIT: Duration = Duration::from_millis(200);
const RESULT_WAIT: Duration = Duration::from_secs(10);

fn lazy() -> ProviderOptions {
    ProviderOptions {
        validate_on_build: false,
        validate_scopes: true,
    }
}

/// Signals its own entry, then gives the peer factory a chance to enter too
struct Rendezvous {
    entered: Sender<()>,
    peer: Mutex<Receiver<()>>,
}

impl Rendezvous {
    fn meet(&self) {
        let _ = self.entered.send(());
        let _ = self.peer.lock().unwrap().recv_timeout(PEER_WAIT);
    }
}

fn cyclic_provider() -> ServiceProvider {
    let (alpha_tx, alpha_rx) = mpsc::channel();
    let (beta_tx, beta_rx) = mpsc::channel();
    let alpha = Rendezvous {
        entered: alpha_tx,
        peer: Mutex::new(beta_rx),
    };
    let beta = Rendezvous {
        entered: beta_tx,
        peer: Mutex::new(alpha_rx),
    };

    let mut services = ServiceCollection::new();
    services
        .add_singleton::<Alpha, _>(move |r| {
            alpha.meet();
            r.resolve::<Beta>()?;
            Ok(Arc::new(Alpha))
        })
        .unwrap()
        .add_singleton::<Beta, _>(move |r| {
            beta.meet();
            r.resolve::<Alpha>()?;
            Ok(Arc::new(Beta))
        })
        .unwrap();
    services.build(lazy()).unwrap()
}

fn spawn_resolution<F>(start: &Arc<Barrier>, results: &Sender<Result<()>>, resolve: F)
where
    F: FnOnce() -> Result<()> + Send + 'static,
{
    let start = Arc::clone(start);
    let results = results.clone();
    thread::spawn(move || {
        start.wait();
        let _ = results.send(resolve());
    });
}

#[test]
fn test_cycle_entered_from_two_threads_fails_instead_of_deadlocking() {
    let provider = cyclic_provider();
    let start = Arc::new(Barrier::new(2));
    let (results_tx, results) = mpsc::channel();

    let first = provider.clone();
    spawn_resolution(&start, &results_tx, move || first.resolve::<Alpha>().map(drop));
    let second = provider.clone();
    spawn_resolution(&start, &results_tx, move || second.resolve::<Beta>().map(drop));

    for _ in 0..2 {
        let result = results
            .recv_timeout(RESULT_WAIT)
            .expect("resolution did not finish");
        match result {
            Err(Error::CyclicDependency { path }) => {
                assert_eq!(path.len(), 3);
                assert_eq!(path.first(), path.last());
            }
            other => panic!("expected a cyclic dependency, got {other:?}"),
        }
    }
    assert_eq!(provider.singleton_count(), 0);
}

#[test]
fn test_concurrent_first_access_constructs_once() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);

    let mut services = ServiceCollection::new();
    services
        .add_singleton::<Alpha, _>(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            Ok(Arc::new(Alpha))
        })
        .unwrap();
    let provider = services.build(lazy()).unwrap();

    let start = Arc::new(Barrier::new(4));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let provider = provider.clone();
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                provider.resolve::<Alpha>().unwrap()
            })
        })
        .collect();

    let instances: Vec<Arc<Alpha>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
}
