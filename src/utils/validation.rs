use chrono::NaiveDate;

use crate::types::book::{BookPayload, NewBook};
use crate::types::error::{AppError, FieldErrors};
use crate::types::user::{Credentials, LoginPayload};

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_AUTHOR_LEN: usize = 255;

const MSG_REQUIRED: &str = "This field is required.";
const MSG_BLANK: &str = "This field may not be blank.";
const MSG_BAD_DATE: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

fn add(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Required, non-blank string field. Returns the value only when it passed.
fn require_string(errors: &mut FieldErrors, field: &str, value: &Option<String>) -> Option<String> {
    match value {
        None => {
            add(errors, field, MSG_REQUIRED);
            None
        }
        Some(s) if s.is_empty() => {
            add(errors, field, MSG_BLANK);
            None
        }
        Some(s) => Some(s.clone()),
    }
}

fn check_max_len(errors: &mut FieldErrors, field: &str, value: &str, max: usize) -> bool {
    if value.chars().count() > max {
        add(
            errors,
            field,
            &format!("Ensure this field has no more than {max} characters."),
        );
        return false;
    }
    true
}

fn require_date(errors: &mut FieldErrors, field: &str, value: &Option<String>) -> Option<NaiveDate> {
    let raw = match value {
        None => {
            add(errors, field, MSG_REQUIRED);
            return None;
        }
        Some(s) => s,
    };
    // chrono tolerates unpadded parts like `2024-1-1`; hold the input to
    // the zero-padded ten-character shape the message promises
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) if raw.len() == 10 => Some(date),
        _ => {
            add(errors, field, MSG_BAD_DATE);
            None
        }
    }
}

pub fn validate_login(payload: &LoginPayload) -> Result<Credentials, AppError> {
    let mut errors = FieldErrors::new();
    let username = require_string(&mut errors, "username", &payload.username);
    let password = require_string(&mut errors, "password", &payload.password);
    match (username, password) {
        (Some(username), Some(password)) if errors.is_empty() => Ok(Credentials { username, password }),
        _ => Err(AppError::Validation(errors)),
    }
}

pub fn validate_book(payload: &BookPayload) -> Result<NewBook, AppError> {
    let mut errors = FieldErrors::new();

    let title = require_string(&mut errors, "title", &payload.title)
        .filter(|v| check_max_len(&mut errors, "title", v, MAX_TITLE_LEN));
    let author = require_string(&mut errors, "author", &payload.author)
        .filter(|v| check_max_len(&mut errors, "author", v, MAX_AUTHOR_LEN));
    let published_date = require_date(&mut errors, "published_date", &payload.published_date);

    match (title, author, published_date) {
        (Some(title), Some(author), Some(published_date)) if errors.is_empty() => Ok(NewBook {
            title,
            author,
            published_date,
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: Option<&str>, author: Option<&str>, date: Option<&str>) -> BookPayload {
        BookPayload {
            title: title.map(String::from),
            author: author.map(String::from),
            published_date: date.map(String::from),
        }
    }

    fn field_errors(err: AppError) -> FieldErrors {
        match err {
            AppError::Validation(fields) => fields,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_book_passes() {
        let new = validate_book(&book(Some("T"), Some("A"), Some("2024-01-01"))).unwrap();
        assert_eq!(new.title, "T");
        assert_eq!(new.author, "A");
        assert_eq!(
            new.published_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn missing_title_is_reported_by_field() {
        let fields = field_errors(validate_book(&book(None, Some("A"), Some("2024-01-01"))).unwrap_err());
        assert_eq!(fields["title"], vec![MSG_REQUIRED.to_string()]);
        assert!(!fields.contains_key("author"));
    }

    #[test]
    fn blank_and_bad_date_collected_together() {
        let fields = field_errors(validate_book(&book(Some(""), Some("A"), Some("01/01/2024"))).unwrap_err());
        assert_eq!(fields["title"], vec![MSG_BLANK.to_string()]);
        assert_eq!(fields["published_date"], vec![MSG_BAD_DATE.to_string()]);
    }

    #[test]
    fn unpadded_date_rejected() {
        let fields = field_errors(validate_book(&book(Some("T"), Some("A"), Some("2024-1-1"))).unwrap_err());
        assert_eq!(fields["published_date"], vec![MSG_BAD_DATE.to_string()]);
    }

    #[test]
    fn impossible_calendar_date_rejected() {
        let fields = field_errors(validate_book(&book(Some("T"), Some("A"), Some("2024-02-31"))).unwrap_err());
        assert!(fields.contains_key("published_date"));
    }

    #[test]
    fn overlong_title_rejected() {
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        let fields = field_errors(validate_book(&book(Some(&long), Some("A"), Some("2024-01-01"))).unwrap_err());
        assert_eq!(
            fields["title"],
            vec!["Ensure this field has no more than 255 characters.".to_string()]
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let payload = LoginPayload {
            username: Some("tester".into()),
            password: None,
        };
        let fields = field_errors(validate_login(&payload).unwrap_err());
        assert_eq!(fields["password"], vec![MSG_REQUIRED.to_string()]);
        assert!(!fields.contains_key("username"));
    }
}
