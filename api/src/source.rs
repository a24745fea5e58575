//! Paginated client for the measurement collection.

use serde::Deserialize;
use serde_json::Value;

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::MeasurementRecord;

/// Documents requested per page. Pages are drained until a short page comes
/// back.
const PAGE_SIZE: usize = 100;

/// One page of raw documents as returned by the database.
#[derive(Debug, Deserialize)]
struct DocumentPage {
    #[serde(default)]
    documents: Vec<Value>,
}

pub(crate) struct RecordSource {
    http: reqwest::Client,
    config: SourceConfig,
}

impl RecordSource {
    pub(crate) fn new(config: SourceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Drain every page of the collection into decoded records.
    ///
    /// Documents without a parseable timestamp are dropped and logged; one
    /// bad document never aborts the whole fetch.
    pub(crate) async fn fetch_all(&self) -> Result<Vec<MeasurementRecord>, SourceError> {
        let mut records = Vec::new();
        let mut offset = 0usize;

        loop {
            let page = self.fetch_page(offset).await?;
            let fetched = page.documents.len();

            for doc in &page.documents {
                match MeasurementRecord::from_document(doc) {
                    Some(record) => records.push(record),
                    None => {
                        tracing::warn!("dropping measurement document without a parseable date");
                    }
                }
            }

            offset += fetched;
            if fetched < PAGE_SIZE {
                break;
            }
        }

        Ok(records)
    }

    async fn fetch_page(&self, offset: usize) -> Result<DocumentPage, SourceError> {
        let url = format!(
            "{}/documents",
            self.config.database_url.trim_end_matches('/')
        );

        let response = self
            .http
            .get(url)
            .header("X-API-Key", &self.config.api_key)
            .query(&[("limit", PAGE_SIZE), ("offset", offset)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_decode_tolerates_missing_documents_key() {
        let page: DocumentPage = serde_json::from_value(json!({ "total": 0 })).expect("decodes");
        assert!(page.documents.is_empty());
    }

    #[test]
    fn page_decode_keeps_raw_documents() {
        let page: DocumentPage = serde_json::from_value(json!({
            "total": 2,
            "documents": [
                { "$id": "a", "date": "2026-01-03T08:30:00Z" },
                { "$id": "b" },
            ],
        }))
        .expect("decodes");
        assert_eq!(page.documents.len(), 2);
    }
}
