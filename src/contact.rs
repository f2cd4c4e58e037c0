use crate::api::models::ContactRequest;
use crate::api::request::{self, RequestError};
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use ureq::Agent;
use url::Url;

const CONTACT_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Trims every field and checks the form is complete with a plausible email.
    pub fn validate(self) -> Result<Self, AppError> {
        let form = ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() {
            return Err(AppError::Validation(
                "Please fill in your name, email, and a message.".to_string(),
            ));
        }
        if !EMAIL_RE.is_match(&form.email) {
            return Err(AppError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }

        Ok(form)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No endpoint configured; the message never left this machine.
    LocalDemo,
}

pub struct ContactClient {
    agent: Agent,
    endpoint: Option<String>,
}

impl ContactClient {
    pub fn new(agent: Agent, endpoint: Option<String>) -> Self {
        ContactClient { agent, endpoint }
    }

    pub fn submit(&self, form: &ContactForm) -> Result<Delivery, AppError> {
        let url = match self.endpoint.as_deref().filter(|url| is_http_url(url)) {
            Some(url) => url,
            None => return Ok(Delivery::LocalDemo),
        };

        let payload = ContactRequest {
            name: &form.name,
            email: &form.email,
            message: &form.message,
        };

        match request::post_json(&self.agent, url, &payload) {
            Ok(_) => Ok(Delivery::Sent),
            Err(RequestError::Status { body, .. }) => {
                let detail = body.trim();
                let detail = if detail.is_empty() { "Please try again." } else { detail };
                Err(AppError::Contact(format!("Failed to send message. {}", detail)))
            }
            Err(RequestError::Network(_) | RequestError::Timeout) => {
                Err(AppError::Network(CONTACT_NETWORK_ERROR.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::build_agent;
    use crate::api::request::tests::serve_once;
    use std::time::Duration;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn expect_validation(form: ContactForm, expected: &str) {
        match form.validate() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, expected),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn trims_valid_form() {
        let form = form("  Ana ", " ana@example.com ", " gg wp \n").validate().unwrap();
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.message, "gg wp");
    }

    #[test]
    fn missing_fields_are_rejected() {
        let msg = "Please fill in your name, email, and a message.";
        expect_validation(form("", "a@b.co", "hi"), msg);
        expect_validation(form("Ana", "  ", "hi"), msg);
        expect_validation(form("Ana", "a@b.co", "\t"), msg);
    }

    #[test]
    fn bad_emails_are_rejected() {
        for email in ["ana", "ana@example", "ana @example.com", "@example.com", "ana@@example.com"] {
            expect_validation(form("Ana", email, "hi"), "Please enter a valid email address.");
        }
    }

    #[test]
    fn unconfigured_endpoint_is_a_local_demo() {
        let agent = build_agent(Duration::from_secs(1));
        let form = form("Ana", "ana@example.com", "hi").validate().unwrap();

        assert_eq!(ContactClient::new(agent.clone(), None).submit(&form).unwrap(), Delivery::LocalDemo);
        assert_eq!(
            ContactClient::new(agent, Some("ftp://example.com".to_string()))
                .submit(&form)
                .unwrap(),
            Delivery::LocalDemo
        );
    }

    #[test]
    fn posts_form_to_endpoint() {
        let (url, request) = serve_once("200 OK", "{}");
        let client = ContactClient::new(build_agent(Duration::from_secs(5)), Some(url));
        let form = form("Ana", "ana@example.com", "hello").validate().unwrap();

        assert_eq!(client.submit(&form).unwrap(), Delivery::Sent);
        let sent: serde_json::Value = serde_json::from_str(&request.recv().unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({"name": "Ana", "email": "ana@example.com", "message": "hello"})
        );
    }

    #[test]
    fn failed_send_includes_server_detail() {
        let (url, _request) = serve_once("500 Internal Server Error", "mailer down");
        let client = ContactClient::new(build_agent(Duration::from_secs(5)), Some(url));
        let form = form("Ana", "ana@example.com", "hello").validate().unwrap();

        match client.submit(&form) {
            Err(AppError::Contact(msg)) => assert_eq!(msg, "Failed to send message. mailer down"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn endpoint_scheme_decides_delivery_mode() {
        assert!(is_http_url("https://fn.example/"));
        assert!(is_http_url("HTTP://fn.example/"));
        assert!(!is_http_url("ftp://fn.example/"));
        assert!(!is_http_url("not a url"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn unreachable_endpoint_reports_a_network_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = ContactClient::new(
            build_agent(Duration::from_secs(5)),
            Some(format!("http://127.0.0.1:{}/", port)),
        );
        let form = form("Ana", "ana@example.com", "hello").validate().unwrap();

        match client.submit(&form) {
            Err(AppError::Network(msg)) => {
                assert_eq!(msg, "Network error. Please check your connection and try again.")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn failed_send_without_detail_asks_to_retry() {
        let (url, _request) = serve_once("502 Bad Gateway", "");
        let client = ContactClient::new(build_agent(Duration::from_secs(5)), Some(url));
        let form = form("Ana", "ana@example.com", "hello").validate().unwrap();

        match client.submit(&form) {
            Err(AppError::Contact(msg)) => assert_eq!(msg, "Failed to send message. Please try again."),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
