//! Field Validation - Violation aggregation
//!
//! Write requests are validated field by field; failures are collected
//! into a [`Violations`] list and returned together, one entry per
//! failing field, instead of aborting on the first problem.

use serde::Serialize;
use std::fmt;

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Request field name (camelCase, as it appears on the wire)
    pub field: &'static str,
    /// Human-readable message
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulator for field violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(Violation::new(field, message));
    }

    /// Record a violation when `failed` holds.
    pub fn check(&mut self, failed: bool, field: &'static str, message: impl Into<String>) {
        if failed {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", v)?;
            first = false;
        }
        Ok(())
    }
}

impl From<Violations> for Vec<Violation> {
    fn from(v: Violations) -> Self {
        v.0
    }
}

/// Shared length-bounds check used by several request validators.
///
/// Counts Unicode scalar values, not bytes.
pub fn check_length(
    violations: &mut Violations,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min {
        violations.add(field, format!("must be at least {} characters", min));
    } else if len > max {
        violations.add(field, format!("must be at most {} characters", max));
    }
}

/// Mandatory-field check: blank (empty or whitespace-only) is a violation.
pub fn check_not_blank(violations: &mut Violations, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.add(field, "must not be blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_violations_is_ok() {
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn test_violations_accumulate() {
        let mut v = Violations::new();
        v.add("title", "must not be blank");
        v.add("slug", "must be at least 5 characters");
        let err = v.into_result().unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.iter().next().unwrap().field, "title");
    }

    #[test]
    fn test_check_records_only_on_failure() {
        let mut v = Violations::new();
        v.check(false, "a", "nope");
        v.check(true, "b", "yes");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_check_length_bounds() {
        let mut v = Violations::new();
        check_length(&mut v, "slug", "abc", 5, 20);
        check_length(&mut v, "title", &"x".repeat(30), 5, 10);
        check_length(&mut v, "ok", "hello", 5, 20);
        assert_eq!(v.len(), 2);
        assert!(v.iter().any(|x| x.field == "slug"));
        assert!(v.iter().any(|x| x.field == "title"));
    }

    #[test]
    fn test_check_length_counts_chars_not_bytes() {
        let mut v = Violations::new();
        // five multibyte characters, well inside 5..=20
        check_length(&mut v, "title", "ねこだいすき", 5, 20);
        assert!(v.is_empty());
    }

    #[test]
    fn test_check_not_blank() {
        let mut v = Violations::new();
        check_not_blank(&mut v, "name", "   ");
        check_not_blank(&mut v, "content", "hello");
        assert_eq!(v.len(), 1);
        assert_eq!(v.iter().next().unwrap().field, "name");
    }

    #[test]
    fn test_serialize_shape() {
        let mut v = Violations::new();
        v.add("username", "already exists");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"[{"field":"username","message":"already exists"}]"#);
    }
}
