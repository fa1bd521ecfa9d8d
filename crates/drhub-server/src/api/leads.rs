//! Whitepaper lead capture.

use std::sync::LazyLock;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::USER_AGENT, HeaderMap},
    Extension, Json,
};
use chrono::Utc;
use drhub_store::DownloadOutcome;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_json_rejection, ApiError, AppState};

const RETURNING_MESSAGE: &str = "Welcome back! Your whitepaper is ready for download.";

const SUSPICIOUS_WORDS: &[&str] = &["spam", "test", "fake", "temp", "disposable"];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~](\.?[-!#$%&'*+/0-9=?A-Z^_a-z`{|}~])*@[a-zA-Z0-9](-*\.?[a-zA-Z0-9])*\.[a-zA-Z](-?[a-zA-Z0-9])+$",
    )
    .expect("valid regex")
});

#[derive(Debug, Deserialize)]
pub(in crate::api) struct StoreEmailRequest {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct StoreEmailResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    returning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn is_valid_format(email: &str) -> bool {
    if email.len() > 254 || !EMAIL_RE.is_match(email) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    local.len() <= 64 && domain.split('.').all(|label| label.len() <= 63)
}

fn domain_of(email: &str) -> &str {
    email.split_once('@').map_or("", |(_, domain)| domain)
}

/// Throwaway-inbox check against the domain list shipped with `mailchecker`.
fn is_disposable(email: &str) -> bool {
    !mailchecker::is_valid(&email.to_ascii_lowercase())
}

fn has_valid_domain_structure(email: &str) -> bool {
    let domain = domain_of(email);
    domain.contains('.')
        && (4..=255).contains(&domain.len())
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// True when `s` holds the same character five or more times in a row.
fn has_long_run(s: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in s.chars() {
        if Some(c) == previous {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if run >= 5 {
            return true;
        }
    }
    false
}

fn is_suspicious(email: &str) -> bool {
    let lower = email.to_lowercase();
    if SUSPICIOUS_WORDS.iter().any(|word| lower.contains(word)) {
        return true;
    }

    let local = lower.split('@').next().unwrap_or_default();
    local.len() > 30 || local.chars().all(|c| c.is_ascii_digit()) || has_long_run(local)
}

/// Runs every check in order and returns the first failure message.
fn validate_email(email: Option<&str>) -> Result<&str, &'static str> {
    let email = email.filter(|e| !e.is_empty()).ok_or("Email is required")?;

    if !is_valid_format(email) {
        return Err("Invalid email format");
    }
    if is_disposable(email) {
        return Err("Disposable email addresses are not allowed");
    }
    if !has_valid_domain_structure(email) {
        return Err("Invalid email domain");
    }
    if is_suspicious(email) {
        return Err("This email appears to be invalid");
    }
    Ok(email)
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// POST /api/store-email
pub(in crate::api) async fn store_email(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    headers: HeaderMap,
    body: Result<Json<StoreEmailRequest>, JsonRejection>,
) -> Result<Json<StoreEmailResponse>, ApiError> {
    let Json(body) = body.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;
    let email = validate_email(body.email.as_deref())
        .map_err(|message| ApiError::new(req_id.0.clone(), "validation_error", message))?;

    let user_agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());

    let outcome = state
        .store
        .record_email_download(email, user_agent, Utc::now())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to record whitepaper lead");
            ApiError::new(req_id.0.clone(), "internal_error", "Failed to store email")
                .with_detail(e)
        })?;

    let response = match outcome {
        DownloadOutcome::New => {
            tracing::info!("new whitepaper lead recorded");
            StoreEmailResponse {
                success: true,
                returning: None,
                message: None,
            }
        }
        DownloadOutcome::Returning { downloads } => {
            tracing::info!(downloads, "returning whitepaper lead");
            StoreEmailResponse {
                success: true,
                returning: Some(true),
                message: Some(RETURNING_MESSAGE),
            }
        }
    };
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in ["jane.doe@acme.io", "dev+hub@acme.co.uk", "a1b2@corp.dev"] {
            assert_eq!(validate_email(Some(email)), Ok(email), "{email}");
        }
    }

    #[test]
    fn missing_or_empty_is_required() {
        assert_eq!(validate_email(None), Err("Email is required"));
        assert_eq!(validate_email(Some("")), Err("Email is required"));
    }

    #[test]
    fn malformed_addresses_fail_format() {
        for email in [
            "plainaddress",
            "@acme.io",
            "jane@",
            "jane@acme",
            "jane..doe@acme.io",
            "jane doe@acme.io",
            "jane@-acme.io",
        ] {
            assert_eq!(
                validate_email(Some(email)),
                Err("Invalid email format"),
                "{email}"
            );
        }
    }

    #[test]
    fn overlong_local_part_fails_format() {
        let email = format!("{}@acme.io", "a".repeat(65));
        assert_eq!(validate_email(Some(&email)), Err("Invalid email format"));
    }

    #[test]
    fn disposable_domains_are_rejected_case_insensitively() {
        for email in [
            "jane@Mailinator.com",
            "jane@guerrillamailblock.com",
            "jane@yopmail.fr",
        ] {
            assert_eq!(
                validate_email(Some(email)),
                Err("Disposable email addresses are not allowed"),
                "{email}"
            );
        }
    }

    #[test]
    fn suspicious_patterns_are_rejected() {
        for email in [
            "spammer@acme.io",
            "qa-test@acme.io",
            "fakename@acme.io",
            "tempuser@acme.io",
            "1234567@acme.io",
            "zzzzzed@acme.io",
            "abcdefghijabcdefghijabcdefghijab@acme.io",
        ] {
            assert_eq!(
                validate_email(Some(email)),
                Err("This email appears to be invalid"),
                "{email}"
            );
        }
    }

    #[test]
    fn four_repeats_are_not_a_run() {
        assert!(!has_long_run("aaaab"));
        assert!(has_long_run("baaaaa"));
    }

    #[test]
    fn domain_structure_rules() {
        assert!(has_valid_domain_structure("x@a.io"));
        assert!(!has_valid_domain_structure("x@a.b"));
        assert!(!has_valid_domain_structure("x@.acme.io"));
        assert!(!has_valid_domain_structure("x@acme.io."));
        assert!(!has_valid_domain_structure("x@localhost"));
    }
}
