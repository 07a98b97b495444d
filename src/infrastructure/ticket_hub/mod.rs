// src/infrastructure/ticket_hub/mod.rs
// Ticket hub repository implementation over hyper

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Client, Method, Request, Uri};
use hyper_tls::HttpsConnector;

use crate::domain::errors::{SubmissionError, SubmissionResult};
use crate::domain::model::TicketOrderRequest;
use crate::domain::repository::{OrderResponse, TicketOrderRepository};

pub struct HyperTicketHubRepository {
    client: Client<HttpsConnector<HttpConnector>>,
    endpoint: Uri,
}

impl HyperTicketHubRepository {
    /// Repository posting to the full order endpoint URL
    pub fn new(endpoint: &str) -> SubmissionResult<Self> {
        let endpoint = endpoint
            .parse::<Uri>()
            .map_err(|e| SubmissionError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        if endpoint.scheme().is_none() || endpoint.host().is_none() {
            return Err(SubmissionError::InvalidEndpoint(format!(
                "{}: expected an absolute http(s) URL",
                endpoint
            )));
        }

        Ok(Self {
            client: Client::builder().build::<_, Body>(HttpsConnector::new()),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    fn build_request(&self, order: &TicketOrderRequest) -> SubmissionResult<Request<Body>> {
        let body = serde_json::to_vec(order)?;

        Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|e| SubmissionError::Request(e.to_string()))
    }
}

#[async_trait]
impl TicketOrderRepository for HyperTicketHubRepository {
    async fn post_order(&self, order: &TicketOrderRequest) -> SubmissionResult<OrderResponse> {
        let request = self.build_request(order)?;
        log::debug!("POST {}", self.endpoint);

        let response = self.client.request(request).await?;
        let status = response.status().as_u16();
        let bytes = hyper::body::to_bytes(response.into_body()).await?;

        Ok(OrderResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
