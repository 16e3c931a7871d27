use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::model::{Record, RecordId};
use std::time::Duration;

/// Client for the collection REST backend.
///
/// Wraps a shared [`reqwest::Client`], so clones are cheap and reuse the
/// same connection pool. One instance serves every record type; the
/// resource path comes from [`Record::RESOURCE`].
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /<resource>` — the full collection.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.resource_url::<R>(None);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        tracing::debug!(url, status = %response.status(), "list");
        let response = check_status::<R>(response)?;
        response.json().await.map_err(|e| ApiError::Decode {
            resource: R::RESOURCE,
            source: e,
        })
    }

    /// `POST /<resource>` — create from a draft. The backend assigns the
    /// identifier and echoes the full record back.
    pub async fn create<R: Record>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let url = self.resource_url::<R>(None);
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        tracing::debug!(url, status = %response.status(), "create");
        let response = check_status::<R>(response)?;
        response.json().await.map_err(|e| ApiError::Decode {
            resource: R::RESOURCE,
            source: e,
        })
    }

    /// `PUT /<resource>/<id>` — partial update. The response body is
    /// ignored; the caller merges the draft locally on success.
    pub async fn update<R: Record>(
        &self,
        id: &RecordId,
        draft: &R::Draft,
    ) -> Result<(), ApiError> {
        let url = self.resource_url::<R>(Some(id));
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        tracing::debug!(url, status = %response.status(), "update");
        check_status::<R>(response)?;
        Ok(())
    }

    /// `DELETE /<resource>/<id>` — response body ignored.
    pub async fn delete<R: Record>(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = self.resource_url::<R>(Some(id));
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        tracing::debug!(url, status = %response.status(), "delete");
        check_status::<R>(response)?;
        Ok(())
    }

    fn resource_url<R: Record>(&self, id: Option<&RecordId>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, R::RESOURCE, id),
            None => format!("{}/{}", self.base_url, R::RESOURCE),
        }
    }
}

fn transport(url: &str, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

fn check_status<R: Record>(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            resource: R::RESOURCE,
            status,
        })
    }
}
