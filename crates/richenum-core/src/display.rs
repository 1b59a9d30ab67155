//! # Display Names
//!
//! The human-facing label of a member need not be text when the member is
//! declared. A caller may hand over anything that renders to a string, most
//! commonly a deferred translation that is only resolved at display time.
//! This crate never localizes anything itself; it only calls `Display`.

use std::fmt;
use std::sync::Arc;

/// A render-on-demand display payload.
///
/// Cloning shares the underlying payload.
#[derive(Clone)]
pub struct DisplayName(Arc<dyn fmt::Display + Send + Sync>);

impl DisplayName {
    /// A display name that is already text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(Arc::new(text.into()))
    }

    /// A display name backed by any `Display` value.
    pub fn from_display<D>(value: D) -> Self
    where
        D: fmt::Display + Send + Sync + 'static,
    {
        Self(Arc::new(value))
    }

    /// A display name rendered by calling `render` every time it is shown.
    ///
    /// ```
    /// use richenum_core::DisplayName;
    ///
    /// let label = DisplayName::deferred(|| "Okra".to_uppercase());
    /// assert_eq!(label.render(), "OKRA");
    /// ```
    pub fn deferred<F>(render: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(Deferred(render)))
    }

    /// Render the payload to a string.
    pub fn render(&self) -> String {
        self.0.to_string()
    }
}

struct Deferred<F>(F);

impl<F: Fn() -> String> fmt::Display for Deferred<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&(self.0)())
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.render())
    }
}

impl From<&str> for DisplayName {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DisplayName {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
