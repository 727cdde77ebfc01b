//! Unique name generation for generated identifiers

/// Counter for names that must be unique within one document
///
/// Image maps, generated script functions and similar identifiers take
/// their names from a generator owned by the document being built. Names
/// are unique per generator only; two documents may hand out the same name.
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
	issued: u64,
}

impl NameGenerator {
	/// Creates a generator that starts counting at 1.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `prefix` followed by the next sequence number.
	///
	/// # Example
	///
	/// ```
	/// use tagsmith_core::NameGenerator;
	///
	/// let mut names = NameGenerator::new();
	/// assert_eq!(names.next_name("map"), "map1");
	/// assert_eq!(names.next_name("map"), "map2");
	/// assert_eq!(names.next_name("fn"), "fn3");
	/// ```
	pub fn next_name(&mut self, prefix: &str) -> String {
		self.issued += 1;
		format!("{prefix}{}", self.issued)
	}

	/// Returns how many names have been issued.
	pub fn issued(&self) -> u64 {
		self.issued
	}
}
