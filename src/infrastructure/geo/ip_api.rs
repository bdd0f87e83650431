//! ip-api.com backed geolocation resolver.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::resolver::{is_private, GeoResolver};

const DEFAULT_BASE_URL: &str = "http://ip-api.com";

/// JSON envelope returned by the ip-api.com `/json/{ip}` endpoint.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    country: Option<String>,
}

/// Country lookup via the ip-api.com free tier.
///
/// Every failure mode except client construction resolves to `None`:
/// transport errors, timeouts, non-2xx statuses, undecodable bodies, and
/// lookups the API itself reports as failed. The free tier allows 45
/// requests per minute; rate-limit rejections surface as non-2xx and
/// degrade the same way.
pub struct IpApiResolver {
    client: Client,
    base_url: Url,
}

impl IpApiResolver {
    /// Creates a resolver pointed at the production ip-api.com endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest::Client` cannot be
    /// constructed or the base URL does not parse.
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a resolver with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest::Client` cannot be
    /// constructed or `base_url` is not a valid URL.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    fn lookup_url(&self, ip: &str) -> Option<Url> {
        let mut url = self.base_url.join(&format!("json/{ip}")).ok()?;
        url.set_query(Some("fields=status,country,countryCode"));
        Some(url)
    }
}

#[async_trait]
impl GeoResolver for IpApiResolver {
    async fn resolve(&self, ip: &str) -> Option<String> {
        if is_private(ip) {
            debug!(ip, "Skipping geolocation for private address");
            return None;
        }

        let url = self.lookup_url(ip)?;

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(ip, error = %e, "Geolocation request failed");
                metrics::counter!("geolocation_lookups_degraded_total").increment(1);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(ip, status = %response.status(), "Geolocation API error");
            metrics::counter!("geolocation_lookups_degraded_total").increment(1);
            return None;
        }

        let body: IpApiResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(ip, error = %e, "Undecodable geolocation response");
                metrics::counter!("geolocation_lookups_degraded_total").increment(1);
                return None;
            }
        };

        if body.status == "success" {
            body.country.filter(|c| !c.is_empty())
        } else {
            debug!(ip, "Geolocation lookup unsuccessful");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver(base_url: &str) -> IpApiResolver {
        IpApiResolver::with_base_url(5, base_url).expect("client construction should not fail")
    }

    #[test]
    fn test_lookup_url_shape() {
        let resolver = resolver("http://ip-api.com");
        let url = resolver.lookup_url("1.2.3.4").unwrap();
        assert_eq!(
            url.as_str(),
            "http://ip-api.com/json/1.2.3.4?fields=status,country,countryCode"
        );
    }

    #[tokio::test]
    async fn test_resolves_country_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/81.2.69.142"))
            .and(query_param("fields", "status,country,countryCode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "country": "United Kingdom",
                "countryCode": "GB"
            })))
            .mount(&server)
            .await;

        let resolver = resolver(&server.uri());
        assert_eq!(
            resolver.resolve("81.2.69.142").await.as_deref(),
            Some("United Kingdom")
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "fail",
                "message": "reserved range"
            })))
            .mount(&server)
            .await;

        let resolver = resolver(&server.uri());
        assert!(resolver.resolve("203.0.113.7").await.is_none());
    }

    #[tokio::test]
    async fn test_api_error_status_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let resolver = resolver(&server.uri());
        assert!(resolver.resolve("203.0.113.7").await.is_none());
    }

    #[tokio::test]
    async fn test_garbage_body_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let resolver = resolver(&server.uri());
        assert!(resolver.resolve("203.0.113.7").await.is_none());
    }

    #[tokio::test]
    async fn test_private_address_short_circuits_without_request() {
        // No mock mounted: a request against the server would 404 and the
        // mock server would record it; expect zero received requests.
        let server = MockServer::start().await;

        let resolver = resolver(&server.uri());
        assert!(resolver.resolve("192.168.1.10").await.is_none());
        assert!(resolver.resolve("10.0.0.5").await.is_none());
        assert!(resolver.resolve("127.0.0.1").await.is_none());

        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
