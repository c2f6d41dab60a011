//! Picker configuration.
//!
//! Every field has a default, so a partial JSON object (or `{}`) is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::color::{Hex, OutputFormat};
use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Shape of the value emitted to the host.
    pub format: OutputFormat,
    /// Render the panel permanently instead of behind a swatch toggle.
    pub inline: bool,
    /// Ignore pointer and keyboard input.
    pub disabled: bool,
    /// Color loaded when the host writes an empty value.
    pub default_color: Hex,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            inline: false,
            disabled: false,
            default_color: Hex::from_normalized(constants::DEFAULT_COLOR.to_string()),
        }
    }
}

impl PickerConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
