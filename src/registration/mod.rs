// SPDX-License-Identifier: MPL-2.0
//! Client for the conference registration backend.
//!
//! The backend speaks JSON with camelCase keys; every payload carries a
//! `success` flag and an optional `message` describing failures. This module
//! only covers the two boundaries the app consumes: looking a registration
//! up by its code, and handing a prepared e-mail to the sending service.

use crate::error::{BackendError, Result};
use serde::Deserialize;

pub mod email;

/// A registration record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub name: String,
    pub email: String,
    pub registration_code: String,
    pub registration_type: String,
    pub registration_status: String,
    pub payment_status: String,
    /// Badge QR image location; absent until payment clears.
    #[serde(default)]
    pub qr_code_url: Option<String>,
}

/// Envelope every backend response is wrapped in.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Record>,
}

impl LookupResponse {
    fn into_record(self) -> Result<Record> {
        match (self.success, self.data) {
            (true, Some(record)) => Ok(record),
            (true, None) => {
                Err(BackendError::MalformedResponse("success without data".to_string()).into())
            }
            (false, _) => {
                Err(BackendError::Rejected(self.message.unwrap_or_default()).into())
            }
        }
    }
}

/// Fetches a registration record by its code.
///
/// Takes owned strings so it can be handed directly to `Task::perform`.
pub async fn lookup(api_base_url: String, code: String) -> Result<Record> {
    let url = format!(
        "{}/registrations/{}",
        api_base_url.trim_end_matches('/'),
        code.trim()
    );

    let response = reqwest::get(&url)
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(BackendError::NotFound.into());
    }

    let envelope: LookupResponse = response
        .json()
        .await
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

    envelope.into_record()
}

/// Builds the confirmation e-mail for a record, ready for the sending
/// service.
#[must_use]
pub fn confirmation_email(record: &Record) -> email::EmailRequest {
    email::EmailRequest {
        to: record.email.clone(),
        subject: format!("MedConf registration confirmed: {}", record.registration_code),
        html: format!(
            "<h1>See you at MedConf!</h1>\
             <p>Dear {name},</p>\
             <p>Your registration <strong>{code}</strong> ({kind}) is confirmed.</p>\
             <p>Payment status: {payment}.</p>",
            name = record.name,
            code = record.registration_code,
            kind = record.registration_type,
            payment = record.payment_status,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "success": true,
            "data": {
                "id": "reg_01",
                "name": "Ada Byron",
                "email": "ada@example.org",
                "registrationCode": "MC-2025-0042",
                "registrationType": "delegate",
                "registrationStatus": "confirmed",
                "paymentStatus": "paid",
                "qrCodeUrl": "https://cdn.medconf.example/qr/MC-2025-0042.png"
            }
        }"#
    }

    #[test]
    fn record_decodes_from_camel_case() {
        let envelope: LookupResponse = serde_json::from_str(sample_json()).expect("valid json");
        let record = envelope.into_record().expect("success with data");
        assert_eq!(record.registration_code, "MC-2025-0042");
        assert_eq!(record.payment_status, "paid");
        assert!(record.qr_code_url.is_some());
    }

    #[test]
    fn missing_qr_url_defaults_to_none() {
        let json = r#"{
            "success": true,
            "data": {
                "id": "reg_02",
                "name": "Grace Hopper",
                "email": "grace@example.org",
                "registrationCode": "MC-2025-0007",
                "registrationType": "speaker",
                "registrationStatus": "confirmed",
                "paymentStatus": "pending"
            }
        }"#;
        let envelope: LookupResponse = serde_json::from_str(json).expect("valid json");
        let record = envelope.into_record().expect("success with data");
        assert!(record.qr_code_url.is_none());
    }

    #[test]
    fn failed_envelope_becomes_rejected_error() {
        let json = r#"{ "success": false, "message": "code revoked" }"#;
        let envelope: LookupResponse = serde_json::from_str(json).expect("valid json");
        let err = envelope.into_record().unwrap_err();
        match err {
            crate::error::Error::Backend(BackendError::Rejected(msg)) => {
                assert_eq!(msg, "code revoked");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn success_without_data_is_malformed() {
        let json = r#"{ "success": true }"#;
        let envelope: LookupResponse = serde_json::from_str(json).expect("valid json");
        let err = envelope.into_record().unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Backend(BackendError::MalformedResponse(_))
        ));
    }

    #[test]
    fn confirmation_email_mentions_name_and_code() {
        let envelope: LookupResponse = serde_json::from_str(sample_json()).expect("valid json");
        let record = envelope.into_record().expect("success with data");
        let mail = confirmation_email(&record);
        assert_eq!(mail.to, "ada@example.org");
        assert!(mail.subject.contains("MC-2025-0042"));
        assert!(mail.html.contains("Ada Byron"));
        assert!(mail.html.contains("paid"));
    }
}
