//! Model metadata types usable across crates.

/// Typed key for identifying a forecasting model backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelKey(pub &'static str);

impl ModelKey {
    /// Construct a new typed model key from a static name.
    ///
    /// The name is used to tag `ModelFitting` errors raised by that backend.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<ModelKey> for &'static str {
    fn from(k: ModelKey) -> Self {
        k.0
    }
}

impl core::fmt::Display for ModelKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}
