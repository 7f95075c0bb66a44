//! Contact submission validation

pub mod rules;

pub use rules::{is_valid_email, text_field};

use serde_json::{Map, Value};

use crate::{
    error::{AppError, Result},
    models::contact::ContactSubmission,
};

/// Checks run in order and stop at the first failure.
pub fn validate_submission(fields: &Map<String, Value>) -> Result<ContactSubmission> {
    let name = text_field(fields.get("name"));
    let email = text_field(fields.get("email"));
    let message = text_field(fields.get("message"));

    let (Some(name), Some(email), Some(message)) = (name, email, message) else {
        return Err(AppError::MissingFields);
    };

    if !is_valid_email(&email) {
        return Err(AppError::InvalidEmail);
    }

    Ok(ContactSubmission {
        name,
        email,
        company: text_field(fields.get("company")),
        service: text_field(fields.get("service")).unwrap_or_default(),
        message,
    })
}

/// Validates an already parsed request body. Anything other than a JSON
/// object has no fields to offer.
pub fn validate_body(body: &Value) -> Result<ContactSubmission> {
    match body {
        Value::Object(fields) => validate_submission(fields),
        _ => Err(AppError::MissingFields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "company": "Acme",
            "service": "consulting",
            "message": "Hello\nWorld"
        })
    }

    #[test]
    fn test_valid_submission() {
        let submission = validate_body(&valid_body()).unwrap();
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.company.as_deref(), Some("Acme"));
        assert_eq!(submission.service, "consulting");
        assert_eq!(submission.message, "Hello\nWorld");
    }

    #[test]
    fn test_missing_required_fields() {
        for field in ["name", "email", "message"] {
            for replacement in [None, Some(json!("")), Some(json!(null)), Some(json!(false))] {
                let mut body = valid_body();
                let object = body.as_object_mut().unwrap();
                match &replacement {
                    Some(value) => {
                        object.insert(field.to_string(), value.clone());
                    }
                    None => {
                        object.remove(field);
                    }
                }

                let result = validate_body(&body);
                assert!(
                    matches!(result, Err(AppError::MissingFields)),
                    "{} = {:?} should be reported as missing",
                    field,
                    replacement
                );
            }
        }
    }

    #[test]
    fn test_missing_fields_checked_before_email_format() {
        let body = json!({ "name": "", "email": "not-an-email", "message": "Hi" });
        assert!(matches!(validate_body(&body), Err(AppError::MissingFields)));
    }

    #[test]
    fn test_invalid_email_format() {
        for email in ["no-at-sign", "a@b", "a b@c.com"] {
            let mut body = valid_body();
            body["email"] = json!(email);
            assert!(
                matches!(validate_body(&body), Err(AppError::InvalidEmail)),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_optional_fields_default() {
        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Hi"
        });
        let submission = validate_body(&body).unwrap();
        assert_eq!(submission.company, None);
        assert_eq!(submission.service, "");

        let body = json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "company": "",
            "service": null,
            "message": "Hi"
        });
        let submission = validate_body(&body).unwrap();
        assert_eq!(submission.company, None);
        assert_eq!(submission.service, "");
    }

    #[test]
    fn test_service_membership_is_not_enforced() {
        let mut body = valid_body();
        body["service"] = json!("something-new");
        assert_eq!(validate_body(&body).unwrap().service, "something-new");
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        for body in [json!([]), json!("text"), json!(42), json!(null)] {
            assert!(matches!(validate_body(&body), Err(AppError::MissingFields)));
        }
    }
}
