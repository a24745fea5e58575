//! Record source boundary for Tonolog.
//!
//! The UI crates call [`fetch_measurements`]; server builds talk to the
//! external document database configured via `TONOLOG_DATABASE_URL` and
//! `TONOLOG_API_KEY`, client builds compile down to a network stub.

use dioxus::prelude::*;

mod record;
pub use record::MeasurementRecord;

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod source;

#[cfg(feature = "server")]
pub use error::{ConfigError, SourceError};

/// Fetch every measurement record from the external document database.
///
/// Awaited once, fully, per render cycle. Configuration problems and fetch
/// failures are reduced to human-readable messages at this boundary; callers
/// only ever see the message text.
#[server(FetchMeasurements)]
pub async fn fetch_measurements() -> Result<Vec<MeasurementRecord>, ServerFnError> {
    let config = config::source_config().map_err(|err| ServerFnError::new(err.to_string()))?;
    let source = source::RecordSource::new(config.clone());

    source.fetch_all().await.map_err(|err| {
        tracing::error!("measurement fetch failed: {err}");
        ServerFnError::new("The measurement database could not be reached.")
    })
}
