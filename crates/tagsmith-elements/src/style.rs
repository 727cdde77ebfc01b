//! Stylesheet modelling: rules, classes, sheets and raw CSS blocks
//!
//! Both [`StyleSheet`] and [`CssBlock`] render as `<style type="text/css">`
//! and render nothing when they hold nothing.

use std::collections::BTreeMap;
use tagsmith_core::{Attributed, Attributes, Node, RenderEngine, Result, Tag};

const STYLE_TYPE: &str = "text/css";

/// One `key: value` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDef {
	/// Property name
	pub key: String,
	/// Property value
	pub value: String,
}

impl StyleDef {
	/// Creates a declaration.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}

	/// `background: <color>`
	pub fn background_color(color: impl Into<String>) -> Self {
		Self::new("background", color)
	}
}

/// A named CSS rule: selectors plus declarations
///
/// Declarations are keyed by property, so setting a property twice keeps the
/// last value, and they render in ascending property order.
///
/// ## Example
///
/// ```
/// use tagsmith_elements::{StyleDef, StyleRule};
///
/// let rule = StyleRule::new("cells")
///     .select("td")
///     .select("th")
///     .define(StyleDef::new("padding", "4px"));
///
/// assert_eq!(rule.to_css(), "td, th {\n    padding: 4px;\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
	name: String,
	selectors: Vec<String>,
	declarations: BTreeMap<String, String>,
}

impl StyleRule {
	/// Creates an empty rule identified by `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			selectors: Vec::new(),
			declarations: BTreeMap::new(),
		}
	}

	/// Returns the rule name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Adds a selector: an element (`table`), class (`.center`) or id (`#t1`).
	pub fn select(mut self, selector: impl Into<String>) -> Self {
		self.selectors.push(selector.into());
		self
	}

	/// Adds a declaration.
	pub fn define(mut self, def: StyleDef) -> Self {
		self.add(def);
		self
	}

	/// Adds a declaration in place.
	pub fn add(&mut self, def: StyleDef) -> &mut Self {
		self.declarations.insert(def.key, def.value);
		self
	}

	/// Applies the rule to every element carrying `class`.
	pub fn add_class(&mut self, class: &Class) -> &mut Self {
		self.selectors.push(format!(".{}", class.name()));
		self
	}

	/// Returns whether the rule would render anything.
	pub fn is_renderable(&self) -> bool {
		!self.selectors.is_empty() && !self.declarations.is_empty()
	}

	/// Returns the CSS text, or an empty string when the rule has no
	/// selectors or no declarations.
	pub fn to_css(&self) -> String {
		if !self.is_renderable() {
			return String::new();
		}
		let mut css = self.selectors.join(", ");
		css.push_str(" {\n");
		for (key, value) in &self.declarations {
			css.push_str("    ");
			css.push_str(key);
			css.push_str(": ");
			css.push_str(value);
			css.push_str(";\n");
		}
		css.push_str("}\n");
		css
	}
}

/// A CSS class name linking rules to elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
	name: String,
}

impl Class {
	/// Creates a class.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	/// Returns the class name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Same as [`StyleRule::add_class`], from the class side.
	pub fn apply_to(&self, rule: &mut StyleRule) {
		rule.add_class(self);
	}

	/// Sets this class on an element, replacing its previous class.
	pub fn assign<N: Attributed + ?Sized>(&self, node: &mut N) {
		node.set_class(&self.name);
	}
}

/// `<style>` holding named rules
///
/// Rules are keyed by name; adding a rule with an existing name replaces
/// it. Each rule is preceded by a `<!-- Style <name> -->` comment.
#[derive(Debug, Clone)]
pub struct StyleSheet {
	attrs: Attributes,
	rules: BTreeMap<String, StyleRule>,
}

impl Default for StyleSheet {
	fn default() -> Self {
		let mut attrs = Attributes::new();
		attrs.set("type", STYLE_TYPE);
		Self {
			attrs,
			rules: BTreeMap::new(),
		}
	}
}

impl StyleSheet {
	/// Creates an empty stylesheet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a rule.
	pub fn add(&mut self, rule: StyleRule) -> &mut Self {
		self.rules.insert(rule.name.clone(), rule);
		self
	}

	/// Returns the rule called `name`.
	pub fn get(&self, name: &str) -> Option<&StyleRule> {
		self.rules.get(name)
	}

	/// Returns the number of rules.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Returns whether there are no rules.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

impl_attributed!(StyleSheet);

impl Node for StyleSheet {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		if self.rules.is_empty() {
			tracing::trace!("Skipping stylesheet without rules");
			return Ok(());
		}
		engine.render_tag(&Tag::STYLE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for (name, rule) in &self.rules {
			engine.comment(["Style", name.as_str()])?;
			engine.write_str(&rule.to_css())?;
		}
		Ok(())
	}
}

/// A chunk of literal CSS, written verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Css(String);

impl Css {
	/// Wraps CSS source.
	pub fn new(source: impl Into<String>) -> Self {
		Self(source.into())
	}

	/// Returns the source.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// `<style>` holding raw [`Css`] chunks in insertion order
#[derive(Debug, Clone)]
pub struct CssBlock {
	attrs: Attributes,
	chunks: Vec<Css>,
}

impl Default for CssBlock {
	fn default() -> Self {
		let mut attrs = Attributes::new();
		attrs.set("type", STYLE_TYPE);
		Self {
			attrs,
			chunks: Vec::new(),
		}
	}
}

impl CssBlock {
	/// Creates an empty block.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a chunk.
	pub fn add(&mut self, css: Css) -> &mut Self {
		self.chunks.push(css);
		self
	}

	/// Returns whether there are no chunks.
	pub fn is_empty(&self) -> bool {
		self.chunks.is_empty()
	}
}

impl_attributed!(CssBlock);

impl Node for CssBlock {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		if self.chunks.is_empty() {
			tracing::trace!("Skipping css block without chunks");
			return Ok(());
		}
		engine.render_tag(&Tag::STYLE, self)
	}

	fn render_content(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		for chunk in &self.chunks {
			engine.write_str(chunk.as_str())?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn render(node: &mut dyn Node) -> String {
		let mut out = Vec::new();
		node.render(&mut RenderEngine::new(&mut out)).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[rstest]
	#[case(StyleRule::new("r"))]
	#[case(StyleRule::new("r").select("td"))]
	#[case(StyleRule::new("r").define(StyleDef::new("color", "red")))]
	fn test_incomplete_rules_render_nothing(#[case] rule: StyleRule) {
		assert_eq!(rule.to_css(), "");
	}

	#[rstest]
	fn test_declarations_are_sorted_and_last_value_wins() {
		// Arrange
		let rule = StyleRule::new("r")
			.select("p")
			.define(StyleDef::new("margin", "0"))
			.define(StyleDef::background_color("white"))
			.define(StyleDef::new("margin", "1em"));

		// Act & Assert
		assert_eq!(
			rule.to_css(),
			"p {\n    background: white;\n    margin: 1em;\n}\n"
		);
	}

	#[rstest]
	fn test_class_links_rule() {
		// Arrange
		let center = Class::new("center");
		let mut rule = StyleRule::new("centered").define(StyleDef::new("text-align", "center"));

		// Act
		center.apply_to(&mut rule);

		// Assert
		assert_eq!(rule.to_css(), ".center {\n    text-align: center;\n}\n");
	}

	#[rstest]
	fn test_class_assigns_to_element() {
		// Arrange
		let warning = Class::new("warning");
		let mut div = crate::block::Div::new().class("plain");

		// Act
		warning.assign(&mut div);

		// Assert
		assert_eq!(render(&mut div), "<div class=\"warning\"></div>\n");
	}

	#[rstest]
	fn test_empty_stylesheet_renders_nothing() {
		assert_eq!(render(&mut StyleSheet::new()), "");
	}

	#[rstest]
	fn test_stylesheet_comments_each_rule() {
		// Arrange
		let mut sheet = StyleSheet::new();
		sheet.add(
			StyleRule::new("table")
				.select("table")
				.define(StyleDef::new("border", "1px solid")),
		);

		// Act & Assert
		assert_eq!(
			render(&mut sheet),
			"<style type=\"text/css\"><!-- Style table -->\ntable {\n    border: 1px solid;\n}\n</style>\n"
		);
	}

	#[rstest]
	fn test_stylesheet_replaces_rules_by_name() {
		// Arrange
		let mut sheet = StyleSheet::new();

		// Act
		sheet.add(StyleRule::new("x").select("a"));
		sheet.add(StyleRule::new("x").select("b"));

		// Assert
		assert_eq!(sheet.len(), 1);
		assert_eq!(sheet.get("x"), Some(&StyleRule::new("x").select("b")));
	}

	#[rstest]
	fn test_css_block() {
		// Arrange
		let mut block = CssBlock::new();
		assert_eq!(render(&mut block), "");

		// Act
		block.add(Css::new("a{}")).add(Css::new("b{}"));

		// Assert
		assert_eq!(render(&mut block), "<style type=\"text/css\">a{}b{}</style>\n");
	}
}
