//! Navigation and Event Loop Tests

use super::{GatedHttp, StaticHttp, navigate, replay};
use hybrid_application::components::pages::{Counter, Home, Weather};
use hybrid_application::components::{Page, UiAction};
use hybrid_application::{Host, HostBuilder, RenderedFrame, UiEvent};
use hybrid_domain::constants::SHOW_ALERT_FUNCTION;
use hybrid_domain::ports::{HostInterop, HttpClient};
use hybrid_domain::value_objects::PageType;
use hybrid_infrastructure::adapters::HeadlessHostInterop;
use hybrid_infrastructure::config::AppConfig;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc;

fn action(name: &str) -> UiEvent {
    UiEvent::Action(UiAction::new(name))
}

fn host_with_http<H: HttpClient + 'static>(http: &Arc<H>) -> Host {
    let gate = Arc::clone(http);
    HostBuilder::create_default(AppConfig::default())
        .configure_services(move |services| {
            services.add_scoped::<dyn HttpClient, _>(move |_| {
                Ok(Arc::clone(&gate) as Arc<dyn HttpClient>)
            })?;
            Ok(())
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_first_navigation_moves_shell_from_none_to_home() {
    let host = HostBuilder::create_default(AppConfig::default())
        .build()
        .unwrap();
    assert!(host.current_page().is_none());

    let frames = replay(&host, vec![navigate("/")]).await;

    assert_eq!(frames.len(), 1);
    let frame = &frames[0];
    assert_eq!(frame.generation, 1);
    assert_eq!(frame.path, "/");
    assert_eq!(frame.page, Some(Home::page_type()));
    assert_eq!(host.current_page(), Some(Home::page_type()));

    let app = frame.html("#app").unwrap();
    assert!(app.contains("Hello, world!"));
    assert!(app.contains("<a href=\"/\" class=\"active\" aria-current=\"page\">Home</a>"));
    assert_eq!(
        frame.html("head::after"),
        Some("<title>Home - Hybrid Shell</title>")
    );
}

#[tokio::test]
async fn test_each_committed_navigation_matches_its_route() {
    let host = HostBuilder::create_default(AppConfig::default())
        .build()
        .unwrap();
    let host = &host;
    let steps: Vec<(&str, PageType)> = vec![
        ("/", Home::page_type()),
        ("/counter", Counter::page_type()),
        ("/counter/3", Counter::page_type()),
        ("/", Home::page_type()),
    ];

    let (sender, inbox) = mpsc::channel(1);
    let (frames, mut outbox) = mpsc::unbounded_channel();
    let driver = async move {
        for (generation, (path, page)) in (1u64..).zip(steps) {
            sender.send(navigate(path)).await.unwrap();
            let frame: RenderedFrame = outbox.recv().await.unwrap();
            assert_eq!(frame.generation, generation);
            assert_eq!(frame.page, Some(page));
            assert_eq!(host.current_page(), Some(page));
        }
    };

    let (result, ()) = tokio::join!(host.run(inbox, frames), driver);
    result.unwrap();
    assert_eq!(host.generation(), 4);
}

#[tokio::test]
async fn test_suspended_render_does_not_leave_a_stale_page() {
    let http = Arc::new(GatedHttp::default());
    let host = host_with_http(&http);
    let host = &host;
    let gate = Arc::clone(&http);

    let (sender, inbox) = mpsc::channel(4);
    let (frames, mut outbox) = mpsc::unbounded_channel();
    let driver = async move {
        sender.send(navigate("/weather")).await.unwrap();
        gate.entered.notified().await;
        assert_eq!(host.current_page(), Some(Weather::page_type()));

        sender.send(navigate("/")).await.unwrap();
        let frame: RenderedFrame = outbox.recv().await.unwrap();
        assert_eq!(frame.generation, 2);
        assert_eq!(frame.page, Some(Home::page_type()));

        gate.release.notify_one();
        drop(sender);
        outbox
    };

    let (result, mut outbox) = tokio::join!(host.run(inbox, frames), driver);
    result.unwrap();

    assert!(outbox.recv().await.is_none(), "stale weather frame was committed");
    assert_eq!(host.current_page(), Some(Home::page_type()));
    assert_eq!(http.requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_superseded_render_never_starts() {
    let http = Arc::new(GatedHttp::default());
    http.release.notify_one();
    let host = host_with_http(&http);

    let frames = replay(&host, vec![navigate("/weather"), navigate("/")]).await;

    let pages: Vec<_> = frames.iter().map(|frame| frame.page).collect();
    assert_eq!(pages, vec![Some(Home::page_type())]);
    assert_eq!(http.requests.load(Ordering::SeqCst), 0);
    assert_eq!(host.current_page(), Some(Home::page_type()));
}

#[tokio::test]
async fn test_missed_navigation_renders_not_found() {
    let host = HostBuilder::create_default(AppConfig::default())
        .build()
        .unwrap();

    let frames = replay(&host, vec![navigate("/nowhere")]).await;

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].page, None);
    assert!(frames[0].html("#app").unwrap().contains("Not found"));
    assert_eq!(
        frames[0].html("head::after"),
        Some("<title>Not found - Hybrid Shell</title>")
    );
    assert!(host.current_page().is_none());
}

#[tokio::test]
async fn test_action_rerenders_the_active_page() {
    let host = HostBuilder::create_default(AppConfig::default())
        .build()
        .unwrap();

    let frames = replay(&host, vec![navigate("/counter/4"), action("increment")]).await;

    assert_eq!(frames.len(), 2);
    assert!(frames[0].html("#app").unwrap().contains("Current count: 4"));
    assert!(frames[1].html("#app").unwrap().contains("Current count: 5"));
    assert_eq!(frames[1].generation, 1);
}

#[tokio::test]
async fn test_alert_reaches_the_host() {
    let interop = Arc::new(HeadlessHostInterop::new([SHOW_ALERT_FUNCTION]));
    let registered = Arc::clone(&interop);
    let host = HostBuilder::create_default(AppConfig::default())
        .configure_services(move |services| {
            services.add_instance::<dyn HostInterop>(registered)?;
            Ok(())
        })
        .build()
        .unwrap();

    let frames = replay(&host, vec![navigate("/"), action("trigger-alert")]).await;

    assert_eq!(interop.calls().len(), 1);
    assert!(frames.last().unwrap().html("#app").unwrap().contains("Alert shown"));
}

#[tokio::test]
async fn test_interop_failure_degrades_instead_of_aborting() {
    let host = HostBuilder::create_default(AppConfig::default())
        .configure_services(|services| {
            let headless = HeadlessHostInterop::new(Vec::<String>::new());
            services.add_instance::<dyn HostInterop>(Arc::new(headless))?;
            Ok(())
        })
        .build()
        .unwrap();

    let frames = replay(&host, vec![navigate("/"), action("trigger-alert")]).await;
    assert_eq!(frames.len(), 2);
    assert!(frames[1].html("#app").unwrap().contains("Alert failed"));

    let frames = replay(&host, vec![navigate("/counter")]).await;
    assert_eq!(frames[0].page, Some(Counter::page_type()));
    assert_eq!(frames[0].generation, 2);
    assert_eq!(host.current_page(), Some(Counter::page_type()));
}

#[tokio::test]
async fn test_unhandled_action_commits_nothing() {
    let host = HostBuilder::create_default(AppConfig::default())
        .build()
        .unwrap();

    let frames = replay(&host, vec![navigate("/counter"), action("unknown")]).await;

    assert_eq!(frames.len(), 1);
}

#[tokio::test]
async fn test_malformed_forecast_commits_a_degraded_frame() {
    let http = Arc::new(StaticHttp::new(serde_json::json!({ "error": "maintenance" })));
    let host = host_with_http(&http);

    let frames = replay(&host, vec![navigate("/weather")]).await;

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].page, Some(Weather::page_type()));
    let html = frames[0].html(&host.config().host.app_mount).unwrap();
    assert!(html.contains("Unable to load the forecast."));
    assert_eq!(host.current_page(), Some(Weather::page_type()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_renders_stay_on_the_calling_thread() {
    let http = Arc::new(StaticHttp::new(serde_json::json!([])));
    let host = host_with_http(&http);
    let caller = std::thread::current().id();

    let frames = replay(
        &host,
        vec![
            navigate("/weather"),
            navigate("/counter"),
            navigate("/weather"),
        ],
    )
    .await;

    assert!(!frames.is_empty());
    let threads = http.threads.lock().unwrap();
    assert!(!threads.is_empty());
    assert!(threads.iter().all(|id| *id == caller));
}
