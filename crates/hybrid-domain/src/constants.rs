//! Domain constants

/// Host function invoked by the home page alert button
pub const SHOW_ALERT_FUNCTION: &str = "showAlert";

/// Message passed to the alert host function
pub const ALERT_MESSAGE: &str = "Button clicked from Razor component!";

/// Relative path of the weather forecast sample data
pub const WEATHER_DATA_PATH: &str = "sample-data/weather.json";

/// Title rendered when no page matched the last navigation
pub const NOT_FOUND_TITLE: &str = "Not found";

/// Separator used when printing a dependency cycle
pub const CYCLE_SEPARATOR: &str = " -> ";
