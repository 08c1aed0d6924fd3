//! Field checks shared by the entity validators.
//!
//! Each helper records into a [`Violations`] collector instead of returning
//! early, so one request reports every bad field at once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::Violations;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email regex compiles")
});

/// Length is counted in characters, not bytes.
pub fn check_len(v: &mut Violations, field: &'static str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        v.push(field, format!("length must be between {min} and {max} characters"));
    }
}

pub fn check_not_blank(v: &mut Violations, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        v.push(field, "must not be empty");
        return false;
    }
    true
}

pub fn check_range(v: &mut Violations, field: &'static str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        v.push(field, format!("must be between {min} and {max}"));
    }
}

pub fn check_min(v: &mut Violations, field: &'static str, value: i64, min: i64) {
    if value < min {
        v.push(field, format!("must be greater than or equal to {min}"));
    }
}

/// Digits of any script, superscripts included. Letter-like numerals
/// (Roman `Ⅷ`) and vulgar fractions (`½`) are not digits.
fn is_digit(c: char) -> bool {
    let fraction = matches!(c, '\u{00BC}'..='\u{00BE}' | '\u{2150}'..='\u{215F}' | '\u{2189}');
    c.is_numeric() && !c.is_alphabetic() && !fraction
}

pub fn check_no_digits(v: &mut Violations, field: &'static str, value: &str) {
    if value.chars().any(is_digit) {
        v.push(field, "must not contain digits");
    }
}

pub fn check_email(v: &mut Violations, field: &'static str, value: &str) {
    if value.len() > 254 || !EMAIL_RE.is_match(value) {
        v.push(field, "must be a valid email address");
    }
}

/// Lower-case the domain part; the local part is case sensitive.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_chars() {
        let mut v = Violations::new();
        check_len(&mut v, "name", "Кіт", 3, 100);
        assert!(v.is_empty());
        check_len(&mut v, "name", "ab", 3, 100);
        assert!(v.has_field("name"));
    }

    #[test]
    fn email_shapes() {
        let good = ["a@x.com", "first.last+tag@sub.example.org"];
        let bad = ["", "plain", "a@", "@x.com", "a@x", "a b@x.com", "a@x..com"];
        for e in good {
            let mut v = Violations::new();
            check_email(&mut v, "email", e);
            assert!(v.is_empty(), "{e} should be valid");
        }
        for e in bad {
            let mut v = Violations::new();
            check_email(&mut v, "email", e);
            assert!(!v.is_empty(), "{e} should be invalid");
        }
    }

    #[test]
    fn digits_are_detected() {
        let mut v = Violations::new();
        check_no_digits(&mut v, "name", "Anna");
        assert!(v.is_empty());
        check_no_digits(&mut v, "name", "Anna2");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn non_ascii_digits_count_but_numerals_and_fractions_do_not() {
        for name in ["Anna٣", "Anna²"] {
            let mut v = Violations::new();
            check_no_digits(&mut v, "name", name);
            assert!(!v.is_empty(), "{name} has a digit");
        }
        for name in ["Louis Ⅷ", "Anna½"] {
            let mut v = Violations::new();
            check_no_digits(&mut v, "name", name);
            assert!(v.is_empty(), "{name} has no digit");
        }
    }

    #[test]
    fn normalize_lowercases_domain_only() {
        assert_eq!(normalize_email(" Anna@Example.COM "), "Anna@example.com");
    }
}
