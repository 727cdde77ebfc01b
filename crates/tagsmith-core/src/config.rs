//! Render configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// The doctype written before the root node by default
pub const DEFAULT_DOCTYPE: &str = "<!DOCTYPE html>";

/// Options for one render pass.
///
/// # Examples
///
/// ```
/// use tagsmith_core::RenderOptions;
///
/// let options = RenderOptions::new().max_depth(64).flush_streams(false);
/// assert_eq!(options.max_depth, Some(64));
/// assert!(!options.flush_streams);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Literal written before the root node.
	pub doctype: String,
	/// Whether streaming nodes flush the sink after each chunk, when the
	/// sink supports flushing.
	pub flush_streams: bool,
	/// Upper bound on nested tags. `None` leaves recursion unbounded.
	pub max_depth: Option<usize>,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			doctype: DEFAULT_DOCTYPE.to_string(),
			flush_streams: true,
			max_depth: None,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the doctype literal.
	pub fn doctype(mut self, doctype: impl Into<String>) -> Self {
		self.doctype = doctype.into();
		self
	}

	/// Enables or disables flushing after streamed chunks.
	pub fn flush_streams(mut self, enable: bool) -> Self {
		self.flush_streams = enable;
		self
	}

	/// Bounds the nesting depth of a render pass.
	pub fn max_depth(mut self, limit: usize) -> Self {
		self.max_depth = Some(limit);
		self
	}

	/// Loads options from a TOML document. Missing keys keep their defaults.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] when the document is not valid TOML or
	/// a value has the wrong type.
	///
	/// # Examples
	///
	/// ```
	/// use tagsmith_core::RenderOptions;
	///
	/// let options = RenderOptions::from_toml_str("max_depth = 128").unwrap();
	/// assert_eq!(options.max_depth, Some(128));
	/// assert_eq!(options.doctype, "<!DOCTYPE html>");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let options = RenderOptions::default();
		assert_eq!(options.doctype, DEFAULT_DOCTYPE);
		assert!(options.flush_streams);
		assert_eq!(options.max_depth, None);
	}

	#[rstest]
	fn test_from_toml_overrides_all_keys() {
		// Arrange
		let source = r#"
doctype = "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\">"
flush_streams = false
max_depth = 16
"#;

		// Act
		let options = RenderOptions::from_toml_str(source).unwrap();

		// Assert
		assert!(options.doctype.contains("HTML 4.01"));
		assert!(!options.flush_streams);
		assert_eq!(options.max_depth, Some(16));
	}

	#[rstest]
	fn test_from_toml_rejects_wrong_type() {
		// Act
		let result = RenderOptions::from_toml_str("max_depth = \"deep\"");

		// Assert
		assert!(matches!(result, Err(ConfigError::Toml(_))));
	}

	#[rstest]
	fn test_empty_toml_is_default() {
		assert_eq!(
			RenderOptions::from_toml_str("").unwrap(),
			RenderOptions::default()
		);
	}
}
