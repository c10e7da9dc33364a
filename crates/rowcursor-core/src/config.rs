//! Rendering configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Indicator returned by table rendering when no rows were produced.
pub const NO_RECORDS_MESSAGE: &str = "No records found";

/// Markup table rendering options.
///
/// # Example
///
/// ```rust
/// use rowcursor_core::TableConfig;
///
/// let config = TableConfig::default();
/// assert_eq!(config.empty_message, "No records found");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Text returned instead of a table when there are no rows.
    /// Emitted verbatim.
    pub empty_message: String,

    /// Optional `class` attribute for the `<table>` element.
    pub table_class: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            empty_message: NO_RECORDS_MESSAGE.to_string(),
            table_class: None,
        }
    }
}

impl TableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the empty-result message.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the table `class` attribute.
    #[must_use]
    pub fn table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = Some(class.into());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.empty_message.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "empty_message must not be blank".to_string(),
            ));
        }

        if let Some(class) = &self.table_class {
            if class.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "table_class must not be blank when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}
