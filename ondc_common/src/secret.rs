use std::{
    fmt,
    fmt::{Debug, Display},
};

/// Wraps a sensitive value (e.g. an API access token) so that it can never leak into log output.
///
/// Both `Debug` and `Display` print `****`. Use [`Secret::reveal`] at the one place the value is actually needed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret<T>
where T: Clone + Default
{
    value: T,
}

impl<T: Clone + Default> Secret<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn reveal(&self) -> &T {
        &self.value
    }
}

impl Secret<String> {
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// A log-safe description of the secret: `**REDACTED**` when set, `EMPTY` otherwise.
    pub fn redacted(&self) -> &'static str {
        if self.is_empty() {
            "EMPTY"
        } else {
            "**REDACTED**"
        }
    }
}

impl<T: Clone + Default> Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl<T: Clone + Default> Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}
