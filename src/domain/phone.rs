//! PhoneNumber value object.

use std::fmt;

/// A phone number, normalized at construction time.
///
/// Construction strips surrounding whitespace and removes every
/// occurrence of the formatting characters `-`, `(`, `)`, `+`. All
/// other characters (including interior whitespace and non-digits) are
/// kept as-is; whether a number must be all-digit is a caller policy,
/// checked through [`PhoneNumber::is_digits_only`].
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1-(555)-1234");
/// assert_eq!(phone.as_str(), "15551234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, sanitizing the raw input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Self::sanitize(&raw.into()))
    }

    /// Strip surrounding whitespace, then remove `-`, `(`, `)`, `+`.
    ///
    /// Idempotent: sanitizing an already-sanitized value is a no-op.
    pub fn sanitize(raw: &str) -> String {
        raw.trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '(' | ')' | '+'))
            .collect()
    }

    /// True when the stored value is non-empty and consists of ASCII
    /// digits only.
    pub fn is_digits_only(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the sanitized number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
