//! Inputs supplied through `INPUT_*` environment variables.

use super::InputSource;

/// Reads inputs the way the Actions runner exposes them to a step.
///
/// Input `my input` is read from `INPUT_MY_INPUT`. Values that are not valid
/// UTF-8 are converted lossily rather than treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl InputSource for EnvInputs {
    fn raw_input(&self, name: &str) -> Option<String> {
        std::env::var_os(env_var_name(name)).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Returns the environment variable holding the named input.
#[must_use]
pub fn env_var_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}
