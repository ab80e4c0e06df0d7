//! Action input resolution.
//!
//! Inputs are named string values handed to the step by the host. This
//! module reads them through the [`InputSource`] seam and applies the
//! required/trim rules of the Actions toolkit.

mod env;
mod error;
mod options;

pub use env::{env_var_name, EnvInputs};
pub use error::InputError;
pub use options::InputOptions;

use std::collections::HashMap;

/// A provider of raw action input values.
pub trait InputSource {
    /// Returns the raw value of the named input, if the host supplied one.
    fn raw_input(&self, name: &str) -> Option<String>;
}

impl InputSource for HashMap<String, String> {
    fn raw_input(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Reads a single input.
///
/// Absent inputs read as the empty string. Surrounding whitespace is removed
/// when [`InputOptions::trim_whitespace`] is set.
///
/// # Errors
///
/// Returns [`InputError::MissingRequired`] if the input is required and its
/// value is empty.
pub fn get_input(
    source: &impl InputSource,
    name: &str,
    options: InputOptions,
) -> Result<String, InputError> {
    let raw = source.raw_input(name).unwrap_or_default();
    let value = if options.trim_whitespace {
        raw.trim().to_string()
    } else {
        raw
    };

    if options.required && value.is_empty() {
        return Err(InputError::MissingRequired {
            name: name.to_string(),
        });
    }

    Ok(value)
}
