use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error as _;
use std::io;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

const USER_AGENT: &str = concat!("summoner_lookup/", env!("CARGO_PKG_VERSION"));

/// Categorized failure of a single HTTP exchange.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// Body of a successful (2xx) reply.
#[derive(Debug)]
pub struct HttpReply {
    pub body: String,
}

pub fn build_agent(timeout: Duration) -> Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// POSTs `payload` as JSON. Non-2xx statuses come back as `RequestError::Status`
/// with the body kept for the caller to mine.
pub fn post_json<P: Serialize>(agent: &Agent, url: &str, payload: &P) -> Result<HttpReply, RequestError> {
    let response = agent.post(url).send_json(payload);
    into_reply(response)
}

pub fn get(agent: &Agent, url: &str) -> Result<HttpReply, RequestError> {
    let response = agent.get(url).call();
    into_reply(response)
}

pub fn decode_json<T: DeserializeOwned>(reply: &HttpReply) -> Result<T, RequestError> {
    serde_json::from_str(&reply.body).map_err(|e| RequestError::MalformedBody(e.to_string()))
}

fn into_reply(response: Result<ureq::Response, ureq::Error>) -> Result<HttpReply, RequestError> {
    match response {
        Ok(resp) => {
            let body = resp.into_string().map_err(read_error)?;
            Ok(HttpReply { body })
        }
        Err(ureq::Error::Status(status, resp)) => {
            // Body is best-effort; the status alone is enough to report
            let body = resp.into_string().unwrap_or_default();
            Err(RequestError::Status { status, body })
        }
        Err(ureq::Error::Transport(transport)) => {
            if is_timeout(&transport) {
                Err(RequestError::Timeout)
            } else {
                Err(RequestError::Network(transport.to_string()))
            }
        }
    }
}

fn read_error(e: io::Error) -> RequestError {
    if is_timeout_kind(e.kind()) {
        RequestError::Timeout
    } else {
        RequestError::Network(e.to_string())
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    let io_timeout = transport
        .source()
        .and_then(|e| e.downcast_ref::<io::Error>())
        .map(|e| is_timeout_kind(e.kind()))
        .unwrap_or(false);

    // Some deadline paths only carry a message, no io::Error source
    io_timeout || (transport.kind() == ureq::ErrorKind::Io && transport.to_string().contains("timed out"))
}

fn is_timeout_kind(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}
