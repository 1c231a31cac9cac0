//! Routable pages

pub mod counter;
pub mod home;
pub mod weather;

pub use counter::Counter;
pub use home::Home;
pub use weather::{Weather, WeatherForecast};

use crate::routing::RouteTable;
use hybrid_domain::error::Result;

/// Route table of the bundled pages
///
/// | Template | Page |
/// |----------|------|
/// | `/` | [`Home`] |
/// | `/counter`, `/counter/{start}` | [`Counter`] |
/// | `/weather` | [`Weather`] |
pub fn page_routes() -> Result<RouteTable> {
    RouteTable::builder()
        .page::<Home>("/")
        .page::<Counter>("/counter")
        .page::<Counter>("/counter/{start}")
        .page::<Weather>("/weather")
        .build()
}
