//! Attribute storage shared by every node kind
//!
//! Nodes do not inherit attribute handling. They embed an [`Attributes`]
//! value and expose it through the [`Attributed`] trait, which provides the
//! mutation helpers and the fluent builder methods.

use std::collections::BTreeMap;

/// Key/value attribute store with canonical serialization
///
/// Keys are kept in ascending lexicographic order, so serialization is
/// deterministic. Two values are special: `"true"` renders as a bare
/// attribute name and `"false"` renders nothing. Values are written as
/// given; they are not escaped.
///
/// ## Example
///
/// ```
/// use tagsmith_core::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("src", "a.png");
/// attrs.set("alt", "logo");
/// attrs.set("hidden", "true");
/// attrs.set("draggable", "false");
///
/// assert_eq!(attrs.to_attr_string(), r#" alt="logo" hidden src="a.png""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	attrs: BTreeMap<String, String>,
}

impl Attributes {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute, overwriting any previous value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.attrs.insert(key.into(), value.into());
	}

	/// Returns the value for `key`, or an empty string when unset.
	pub fn get(&self, key: &str) -> &str {
		self.attrs.get(key).map_or("", String::as_str)
	}

	/// Removes an attribute, returning its previous value.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.attrs.remove(key)
	}

	/// Returns whether `key` has been set.
	pub fn contains(&self, key: &str) -> bool {
		self.attrs.contains_key(key)
	}

	/// Returns whether no attribute has been set.
	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	/// Iterates over `(key, value)` pairs in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Appends `key:value` to the cumulative `style` attribute.
	///
	/// Entries after the first are separated with `;`.
	pub fn add_style(&mut self, key: &str, value: &str) {
		let style = self.attrs.entry("style".to_string()).or_default();
		if !style.is_empty() {
			style.push(';');
		}
		style.push_str(key);
		style.push(':');
		style.push_str(value);
	}

	/// Sets the single-valued `class` attribute. The last call wins.
	pub fn set_class(&mut self, class: impl Into<String>) {
		self.set("class", class);
	}

	/// Serializes the set as ` key="value"` fragments in ascending key order.
	///
	/// Returns an empty string when no attribute renders.
	pub fn to_attr_string(&self) -> String {
		let mut out = String::new();
		for (key, value) in &self.attrs {
			match value.as_str() {
				"false" => {}
				"true" => {
					out.push(' ');
					out.push_str(key);
				}
				_ => {
					out.push(' ');
					out.push_str(key);
					out.push_str("=\"");
					out.push_str(value);
					out.push('"');
				}
			}
		}
		out
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			attrs: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// Attribute capability of a node
///
/// Implementors only provide access to their embedded [`Attributes`]; every
/// other method has a default. The fluent methods consume and return the
/// node so builders can be chained:
///
/// ```ignore
/// let img = Image::new("logo.png").attr("alt", "Logo").class("brand");
/// ```
pub trait Attributed {
	/// Returns the node's attributes.
	fn attributes(&self) -> &Attributes;

	/// Returns the node's attributes for mutation.
	fn attributes_mut(&mut self) -> &mut Attributes;

	/// Sets an attribute, overwriting any previous value.
	fn set_attr(&mut self, key: &str, value: &str) {
		self.attributes_mut().set(key, value);
	}

	/// Returns an attribute value, or an empty string when unset.
	fn get_attr(&self, key: &str) -> &str {
		self.attributes().get(key)
	}

	/// Appends an inline style declaration.
	fn add_style(&mut self, key: &str, value: &str) {
		self.attributes_mut().add_style(key, value);
	}

	/// Sets the CSS class. The last call wins.
	fn set_class(&mut self, class: &str) {
		self.attributes_mut().set_class(class);
	}

	/// Fluent form of [`Attributed::set_attr`].
	fn attr(mut self, key: &str, value: &str) -> Self
	where
		Self: Sized,
	{
		self.set_attr(key, value);
		self
	}

	/// Fluent form of [`Attributed::add_style`].
	fn style(mut self, key: &str, value: &str) -> Self
	where
		Self: Sized,
	{
		self.add_style(key, value);
		self
	}

	/// Fluent form of [`Attributed::set_class`].
	fn class(mut self, class: &str) -> Self
	where
		Self: Sized,
	{
		self.set_class(class);
		self
	}

	/// Sets the `id` attribute.
	fn id(mut self, id: &str) -> Self
	where
		Self: Sized,
	{
		self.set_attr("id", id);
		self
	}
}

impl Attributed for Attributes {
	fn attributes(&self) -> &Attributes {
		self
	}

	fn attributes_mut(&mut self) -> &mut Attributes {
		self
	}
}
