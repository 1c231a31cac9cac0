//! Weather page

use crate::components::{Component, Element, Page, RenderTree};
use async_trait::async_trait;
use hybrid_domain::constants::WEATHER_DATA_PATH;
use hybrid_domain::error::Result;
use hybrid_domain::ports::HttpClient;
use hybrid_domain::value_objects::RouteParams;
use hybrid_infrastructure::error_ext::ErrorContext;
use hybrid_infrastructure::di::ServiceScope;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// One row of the sample forecast data
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    /// Forecast date as written in the data
    pub date: String,
    /// Temperature in degrees Celsius
    pub temperature_c: i32,
    /// Short description
    #[serde(default)]
    pub summary: Option<String>,
}

impl WeatherForecast {
    /// Temperature in degrees Fahrenheit
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / 0.5556) as i32
    }
}

/// Page listing forecasts fetched over HTTP
///
/// Every render fetches the data again; the render suspends until the
/// response arrives.
pub struct Weather {
    http: Arc<dyn HttpClient>,
}

impl Weather {
    /// Create the page with its injected client
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    fn render_table(forecasts: &[WeatherForecast]) -> Element {
        let header = Element::new("thead").child(
            Element::new("tr")
                .child(Element::new("th").text("Date"))
                .child(Element::new("th").text("Temp. (C)"))
                .child(Element::new("th").text("Temp. (F)"))
                .child(Element::new("th").text("Summary")),
        );

        let body = forecasts.iter().fold(Element::new("tbody"), |body, forecast| {
            body.child(
                Element::new("tr")
                    .child(Element::new("td").text(forecast.date.as_str()))
                    .child(Element::new("td").text(forecast.temperature_c.to_string()))
                    .child(Element::new("td").text(forecast.temperature_f().to_string()))
                    .child(Element::new("td").text(forecast.summary.clone().unwrap_or_default())),
            )
        });

        Element::new("table")
            .attr("class", "table")
            .child(header)
            .child(body)
    }
}

#[async_trait]
impl Component for Weather {
    async fn render(&self, tree: &mut RenderTree) -> Result<()> {
        tree.push(Element::new("h1").text("Weather"));

        match self.load().await {
            Ok(forecasts) => {
                tree.push(Self::render_table(&forecasts));
            }
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "Weather data unavailable");
                tree.push(
                    Element::new("p")
                        .attr("role", "alert")
                        .text("Unable to load the forecast."),
                );
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }
}

impl Weather {
    /// Fetch and decode the forecasts; a malformed payload is an HTTP failure
    async fn load(&self) -> Result<Vec<WeatherForecast>> {
        let value = self.http.get_json(WEATHER_DATA_PATH).await?;
        serde_json::from_value(value).http_context(format!("Decode {WEATHER_DATA_PATH}"))
    }
}

impl Page for Weather {
    const PAGE_NAME: &'static str = "Weather";

    fn activate(scope: &ServiceScope, _params: &RouteParams) -> Result<Self> {
        Ok(Self::new(scope.resolve::<dyn HttpClient>()?))
    }
}
