//! Error types for tagsmith-core

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Error type for building and rendering node trees
///
/// Every failure aborts the remaining traversal. Variants raised while
/// writing carry the number of bytes the sink accepted, so a caller can
/// tell a complete document from a truncated one.
#[derive(Debug, Error)]
pub enum RenderError {
	/// A tag template that cannot take spliced attributes
	#[error("Invalid tag template {template:?}: {reason}")]
	InvalidTag {
		/// The rejected open markup
		template: String,
		/// Why it was rejected
		reason: &'static str,
	},

	/// The output sink refused a write or a flush
	#[error("Output sink failed after {written} bytes: {source}")]
	Write {
		/// Bytes accepted before the failure
		written: usize,
		/// Underlying I/O error
		#[source]
		source: io::Error,
	},

	/// A streaming content source failed mid-render
	#[error("Streaming source failed after {written} bytes: {source}")]
	StreamRead {
		/// Bytes accepted before the failure
		written: usize,
		/// Underlying I/O error
		#[source]
		source: io::Error,
	},

	/// Nesting went deeper than the configured limit
	#[error("Render depth exceeded the configured limit of {limit}")]
	DepthExceeded {
		/// The configured `max_depth`
		limit: usize,
	},

	/// Rendered output requested as text was not valid UTF-8
	#[error("Rendered output is not valid UTF-8: {0}")]
	Utf8(#[from] FromUtf8Error),
}

impl RenderError {
	/// Returns the number of bytes written before the failure, if known.
	pub fn bytes_written(&self) -> Option<usize> {
		match self {
			Self::Write { written, .. } | Self::StreamRead { written, .. } => Some(*written),
			Self::InvalidTag { .. } | Self::DepthExceeded { .. } | Self::Utf8(_) => None,
		}
	}
}

/// Error type for loading render configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML document could not be parsed
	#[error("Invalid render configuration: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_write_error_reports_bytes_written() {
		// Arrange
		let err = RenderError::Write {
			written: 42,
			source: io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
		};

		// Act & Assert
		assert_eq!(err.bytes_written(), Some(42));
		assert_eq!(err.to_string(), "Output sink failed after 42 bytes: closed");
	}

	#[rstest]
	fn test_invalid_tag_has_no_byte_count() {
		// Arrange
		let err = RenderError::InvalidTag {
			template: "<a><b>".to_string(),
			reason: "more than one '>'",
		};

		// Act & Assert
		assert_eq!(err.bytes_written(), None);
		assert!(err.to_string().contains("\"<a><b>\""));
	}

	#[rstest]
	fn test_utf8_error_converts_from_std() {
		// Arrange
		let source = String::from_utf8(vec![0xff]).unwrap_err();

		// Act
		let err = RenderError::from(source);

		// Assert
		assert!(matches!(err, RenderError::Utf8(_)));
		assert_eq!(err.bytes_written(), None);
	}
}
