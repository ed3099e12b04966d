//! HTTP client wrapper - executes a resolved request and captures the response

use crate::constants::{APP_NAME, APP_VERSION};
use crate::error::CliError;
use crate::models::{Header, HttpMethod, Request, RequestBody, ResponseRecord};

/// Something that can perform one HTTP request
#[allow(async_fn_in_trait)]
pub trait Dispatch {
    async fn dispatch(&self, request: &Request) -> Result<ResponseRecord, CliError>;
}

/// [`Dispatch`] backed by a `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ReqwestDispatcher {
    client: reqwest::Client,
}

impl ReqwestDispatcher {
    pub fn new() -> Result<Self, CliError> {
        Ok(ReqwestDispatcher {
            client: create_client()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        ReqwestDispatcher { client }
    }
}

impl Dispatch for ReqwestDispatcher {
    async fn dispatch(&self, request: &Request) -> Result<ResponseRecord, CliError> {
        tracing::info!(url = %request.url, method = ?request.method, "Executing request");
        let req_builder = build_request(&self.client, request)?;
        let resp = req_builder.send().await?;
        let record = read_response(resp).await?;
        tracing::info!(status = record.status_code, "Request completed");
        Ok(record)
    }
}

/// Build a request from the given parameters
fn build_request(
    client: &reqwest::Client,
    request: &Request,
) -> Result<reqwest::RequestBuilder, CliError> {
    let url = request.url.as_str();
    let mut req_builder = match request.method {
        HttpMethod::GET => client.get(url),
        HttpMethod::POST => client.post(url),
        HttpMethod::PUT => client.put(url),
        HttpMethod::DELETE => client.delete(url),
        HttpMethod::PATCH => client.patch(url),
    };

    for header in request.headers.iter() {
        req_builder = req_builder.header(&header.key, &header.value);
    }

    req_builder = match &request.body {
        RequestBody::None => req_builder,
        RequestBody::Raw(text) => req_builder.body(text.clone()),
        RequestBody::Json(value) => {
            let bytes = serde_json::to_vec(value).map_err(anyhow::Error::from)?;
            req_builder.body(bytes)
        }
    };

    Ok(req_builder)
}

/// Drain a response into a [`ResponseRecord`]
async fn read_response(resp: reqwest::Response) -> Result<ResponseRecord, CliError> {
    let status = resp.status();
    let headers = resp
        .headers()
        .iter()
        .map(|(name, value)| {
            Header::new(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let reason = reason_phrase(&resp);
    let body = resp.text().await?;

    Ok(ResponseRecord {
        status_code: status.as_u16(),
        reason,
        headers,
        body,
    })
}

/// The server's own phrase when it differs from the canonical one, else the
/// canonical phrase (empty for unregistered codes)
fn reason_phrase(resp: &reqwest::Response) -> String {
    match resp.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => resp
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> Result<reqwest::Client, CliError> {
    let client = reqwest::Client::builder()
        .user_agent(format!("{}/{}", APP_NAME, APP_VERSION))
        .build()?;
    Ok(client)
}
