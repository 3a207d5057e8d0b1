use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Request, StatusCode};
use tracing::{debug, info};
use url::Url;

use super::error::ApiError;
use crate::model::{CreateTripRequest, CreateTripResponse, TripId};

/// The remote operations the trip planner depends on.
pub trait TripApi {
    /// Creates a trip and returns the identifier the server assigned to it.
    fn create_trip(
        &self,
        request: &CreateTripRequest,
    ) -> impl Future<Output = Result<TripId, ApiError>>;
}

/// [`TripApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpTripApi {
    client: Client,
    base_url: Url,
}

impl HttpTripApi {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// `timeout` bounds each whole request, connect to last byte.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `/trips` relative to the base URL, keeping any base path prefix.
    fn trips_url(&self) -> Result<Url, ApiError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("trips")?)
    }

    /// Builds the `POST /trips` request without sending it.
    fn build_create_trip(&self, request: &CreateTripRequest) -> Result<Request, ApiError> {
        let url = self.trips_url()?;
        Ok(self.client.post(url).json(request).build()?)
    }
}

impl TripApi for HttpTripApi {
    async fn create_trip(&self, request: &CreateTripRequest) -> Result<TripId, ApiError> {
        let http_request = self.build_create_trip(request)?;
        debug!(
            url = %http_request.url(),
            guests = request.emails_to_invite.len(),
            "creating trip"
        );

        let response = self.client.execute(http_request).await?;
        let status = response.status();
        let body = response.text().await?;
        let trip_id = parse_create_trip_response(status, &body)?;

        info!(%trip_id, "trip created");
        Ok(trip_id)
    }
}

/// Interprets the status and body of a `POST /trips` response.
fn parse_create_trip_response(status: StatusCode, body: &str) -> Result<TripId, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }
    let response: CreateTripResponse = serde_json::from_str(body)?;
    Ok(response.trip_id)
}
