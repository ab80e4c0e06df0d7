//! Options controlling how a single input is read.

/// Options for [`get_input`](super::get_input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    /// Fail when the input is absent or empty.
    pub required: bool,

    /// Strip leading and trailing whitespace from the value.
    pub trim_whitespace: bool,
}

impl InputOptions {
    /// Options for a required, trimmed input.
    #[must_use]
    pub const fn required() -> Self {
        Self {
            required: true,
            trim_whitespace: true,
        }
    }

    /// Options for an optional, trimmed input.
    #[must_use]
    pub const fn optional() -> Self {
        Self {
            required: false,
            trim_whitespace: true,
        }
    }

    /// Returns these options with whitespace trimming disabled.
    #[must_use]
    pub const fn untrimmed(mut self) -> Self {
        self.trim_whitespace = false;
        self
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self::optional()
    }
}
