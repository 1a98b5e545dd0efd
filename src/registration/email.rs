// SPDX-License-Identifier: MPL-2.0
//! Boundary to the e-mail sending collaborator.
//!
//! The collaborator accepts `{to, subject, html}` and answers with a bare
//! success/failure status. Nothing is retried here; callers surface the
//! outcome to the user.

use crate::error::{BackendError, Result};
use serde::Serialize;

/// One outbound e-mail, as the sending service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Hands a prepared e-mail to the sending service.
pub async fn send(endpoint: String, request: EmailRequest) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .post(&endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(BackendError::Rejected(format!("email service answered {}", response.status())).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_request_serializes_expected_fields() {
        let request = EmailRequest {
            to: "ada@example.org".to_string(),
            subject: "Hello".to_string(),
            html: "<p>Hi</p>".to_string(),
        };
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json["to"], "ada@example.org");
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["html"], "<p>Hi</p>");
    }
}
