use async_trait::async_trait;
use praedex::{location, location::LocationProvider, shared::Coordinate};

/// Asks an HTTP endpoint where this deployment is. The endpoint must answer
/// with a json object holding `lat`/`lon` (or `latitude`/`longitude`).
pub struct GeoIpProvider {
    client: reqwest::Client,
    url: String,
}

impl GeoIpProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl LocationProvider for GeoIpProvider {
    async fn acquire(&self) -> Result<Coordinate, location::Error> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| location::Error::Unavailable(format!("Failed to fetch: {err}")))?;
        if !response.status().is_success() {
            return Err(location::Error::Unavailable(format!(
                "Response is not success: {}",
                response.status()
            )));
        }
        response
            .json::<Coordinate>()
            .await
            .map_err(|err| location::Error::Unavailable(format!("Failed to read body: {err}")))
    }
}
