//! Contact Form Validation
//!
//! Front-end only. Submission is always suppressed; a valid draft shows
//! a demo success hint and resets the form, nothing is sent.

use std::sync::OnceLock;

use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::{
    EMAIL_ERROR, ERROR_SLOT_ATTRIBUTE, FORM_ACCEPTED_HINT, FORM_INVALID_HINT, MESSAGE_ERROR, NAME_ERROR,
};
use crate::dom::{listen, set_text};
use crate::error::PageError;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("valid email regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Matches `data-error-for` on the error slot
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Strips whitespace and the byte-order mark, like the browser's `String.trim`
fn trim_field(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

/// Length in UTF-16 code units, as the browser reports `value.length`
fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

impl ContactDraft {
    /// Trims every field
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: trim_field(name),
            email: trim_field(email),
            message: trim_field(message),
        }
    }

    /// Every rule runs, so several errors can show at once
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();
        if field_len(&self.name) < MIN_NAME_CHARS {
            errors.push((Field::Name, NAME_ERROR));
        }
        if !is_valid_email(&self.email) {
            errors.push((Field::Email, EMAIL_ERROR));
        }
        if field_len(&self.message) < MIN_MESSAGE_CHARS {
            errors.push((Field::Message, MESSAGE_ERROR));
        }
        ValidationReport { errors }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(Field, &'static str)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn hint(&self) -> &'static str {
        if self.is_valid() { FORM_ACCEPTED_HINT } else { FORM_INVALID_HINT }
    }
}

/// Form controls the draft is read from
pub struct ContactFields {
    pub name: Element,
    pub email: Element,
    pub message: Element,
}

impl ContactFields {
    fn draft(&self) -> ContactDraft {
        ContactDraft::new(
            &control_value(&self.name),
            &control_value(&self.email),
            &control_value(&self.message),
        )
    }
}

fn control_value(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn show_error(doc: &Document, field: Field, message: &str) {
    let selector = format!("[{}=\"{}\"]", ERROR_SLOT_ATTRIBUTE, field.key());
    if let Ok(Some(slot)) = doc.query_selector(&selector) {
        set_text(&slot, message);
    }
}

pub fn bind(doc: Document, form: HtmlFormElement, hint: Element, fields: ContactFields) -> Result<(), PageError> {
    let target = form.clone();
    listen(&target, "submit", move |ev| {
        ev.prevent_default();
        set_text(&hint, "");
        for field in Field::ALL {
            show_error(&doc, field, "");
        }

        let report = fields.draft().validate();
        for field in Field::ALL {
            if let Some(message) = report.error_for(field) {
                show_error(&doc, field, message);
            }
        }
        set_text(&hint, report.hint());

        if report.is_valid() {
            web_sys::console::log_1(&"[FORM] Accepted (demo, not sent)".into());
            form.reset();
        } else {
            web_sys::console::log_1(&"[FORM] Validation failed".into());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_three_errors_at_once() {
        let report = ContactDraft::new("A", "bad", "short").validate();
        assert!(!report.is_valid());
        assert_eq!(report.error_for(Field::Name), Some(NAME_ERROR));
        assert_eq!(report.error_for(Field::Email), Some(EMAIL_ERROR));
        assert_eq!(report.error_for(Field::Message), Some(MESSAGE_ERROR));
        assert_eq!(report.hint(), "Forma xatolari bor. Iltimos, tekshiring.");
    }

    #[test]
    fn test_valid_draft_is_accepted() {
        let report = ContactDraft::new("Jane", "jane@example.com", "Hello, this is long enough.").validate();
        assert!(report.is_valid());
        for field in Field::ALL {
            assert_eq!(report.error_for(field), None);
        }
        assert_eq!(report.hint(), "Xabar qabul qilindi (demo). Backend ulansa real yuboriladi.");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let draft = ContactDraft::new("  J  ", " jane@example.com ", "   123456789   ");
        assert_eq!(draft.name, "J");
        let report = draft.validate();
        assert_eq!(report.error_for(Field::Name), Some(NAME_ERROR));
        assert_eq!(report.error_for(Field::Email), None);
        assert_eq!(report.error_for(Field::Message), Some(MESSAGE_ERROR));
    }

    #[test]
    fn test_length_boundaries() {
        let report = ContactDraft::new("Al", "al@site.io", "0123456789").validate();
        assert!(report.is_valid());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        let report = ContactDraft::new("😀", "jane@example.com", "Hello, this is long enough.").validate();
        assert_eq!(report.error_for(Field::Name), None);

        let report = ContactDraft::new("Jane", "jane@example.com", "😀😀😀😀😀").validate();
        assert_eq!(report.error_for(Field::Message), None);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let draft = ContactDraft::new("\u{FEFF}A", "jane@example.com\u{FEFF}", "Hello, this is long enough.");
        assert_eq!(draft.name, "A");
        assert_eq!(draft.email, "jane@example.com");

        let report = draft.validate();
        assert_eq!(report.error_for(Field::Name), Some(NAME_ERROR));
        assert_eq!(report.error_for(Field::Email), None);
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("jane@example.c"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example@mail.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(""));
    }
}
