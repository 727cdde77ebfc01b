//! Literal open/close markup pairs
//!
//! A [`Tag`] is the template a node renders with. Attributes are spliced in
//! front of the single `>` of the open markup, so templates with more than
//! one `>` are rejected when they are built.

use crate::error::{RenderError, Result};
use std::borrow::Cow;

/// Immutable open/close markup pair for one tag kind
///
/// [`Tag::NONE`] marks tagless nodes (text, raw markup, fragments): the
/// engine skips literal markup for them and only renders their content.
/// Void kinds such as `<img>` carry an empty close markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
	open: Cow<'static, str>,
	close: Cow<'static, str>,
}

macro_rules! builtin_tags {
	($($(#[$meta:meta])* $name:ident => ($open:literal, $close:literal)),* $(,)?) => {
		impl Tag {
			$(
				$(#[$meta])*
				pub const $name: Tag = Tag::builtin($open, $close);
			)*

			/// Every built-in tag, in declaration order
			pub const BUILTIN: &'static [Tag] = &[$(Tag::builtin($open, $close)),*];
		}
	};
}

builtin_tags! {
	/// `<a>`
	A => ("<a>", "</a>"),
	/// `<area>` (void)
	AREA => ("<area>", ""),
	/// `<audio>`
	AUDIO => ("<audio>", "</audio>"),
	/// `<b>`
	B => ("<b>", "</b>"),
	/// `<body>`
	BODY => ("<body>", "</body>"),
	/// `<br>` (void)
	BR => ("<br>", ""),
	/// Markup comment; takes no attributes
	COMMENT => ("<!--", "-->"),
	/// `<dd>`
	DD => ("<dd>", "</dd>"),
	/// `<div>`
	DIV => ("<div>", "</div>"),
	/// `<dl>`
	DL => ("<dl>", "</dl>"),
	/// `<dt>`
	DT => ("<dt>", "</dt>"),
	/// `<form>`
	FORM => ("<form>", "</form>"),
	/// `<h1>`
	H1 => ("<h1>", "</h1>"),
	/// `<h2>`
	H2 => ("<h2>", "</h2>"),
	/// `<h3>`
	H3 => ("<h3>", "</h3>"),
	/// `<h4>`
	H4 => ("<h4>", "</h4>"),
	/// `<h5>`
	H5 => ("<h5>", "</h5>"),
	/// `<h6>`
	H6 => ("<h6>", "</h6>"),
	/// `<head>`
	HEAD => ("<head>", "</head>"),
	/// `<html>`
	HTML => ("<html>", "</html>"),
	/// `<i>`
	I => ("<i>", "</i>"),
	/// `<iframe>`
	IFRAME => ("<iframe>", "</iframe>"),
	/// `<img>` (void)
	IMG => ("<img>", ""),
	/// `<input>` (void)
	INPUT => ("<input>", ""),
	/// `<label>`
	LABEL => ("<label>", "</label>"),
	/// `<li>`
	LI => ("<li>", "</li>"),
	/// `<map>`
	MAP => ("<map>", "</map>"),
	/// `<meta>` (void)
	META => ("<meta>", ""),
	/// `<ol>`
	OL => ("<ol>", "</ol>"),
	/// `<option>`
	OPTION => ("<option>", "</option>"),
	/// `<p>`
	P => ("<p>", "</p>"),
	/// `<pre>`
	PRE => ("<pre>", "</pre>"),
	/// `<script>`
	SCRIPT => ("<script>", "</script>"),
	/// `<select>`
	SELECT => ("<select>", "</select>"),
	/// `<source>` (void)
	SOURCE => ("<source>", ""),
	/// `<style>`
	STYLE => ("<style>", "</style>"),
	/// `<table>`
	TABLE => ("<table>", "</table>"),
	/// `<td>`
	TD => ("<td>", "</td>"),
	/// `<textarea>`
	TEXTAREA => ("<textarea>", "</textarea>"),
	/// `<th>`
	TH => ("<th>", "</th>"),
	/// `<title>`
	TITLE => ("<title>", "</title>"),
	/// `<tr>`
	TR => ("<tr>", "</tr>"),
	/// `<ul>`
	UL => ("<ul>", "</ul>"),
}

impl Tag {
	/// The tagless sentinel used by text and fragment nodes
	pub const NONE: Tag = Tag::builtin("", "");

	const fn builtin(open: &'static str, close: &'static str) -> Self {
		Self {
			open: Cow::Borrowed(open),
			close: Cow::Borrowed(close),
		}
	}

	/// Creates a tag from custom markup.
	///
	/// # Errors
	///
	/// Returns [`RenderError::InvalidTag`] when the open markup contains more
	/// than one `>`, because attributes could not be placed unambiguously.
	///
	/// # Example
	///
	/// ```
	/// use tagsmith_core::Tag;
	///
	/// let section = Tag::new("<section>", "</section>").unwrap();
	/// assert_eq!(section.open(), "<section>");
	/// assert!(Tag::new("<a><b>", "</b></a>").is_err());
	/// ```
	pub fn new(
		open: impl Into<Cow<'static, str>>,
		close: impl Into<Cow<'static, str>>,
	) -> Result<Self> {
		let open = open.into();
		if open.matches('>').count() > 1 {
			return Err(RenderError::InvalidTag {
				template: open.into_owned(),
				reason: "open markup must contain at most one '>'",
			});
		}
		Ok(Self {
			open,
			close: close.into(),
		})
	}

	/// Creates a void tag: open markup only, no separate close.
	///
	/// # Errors
	///
	/// Same validation as [`Tag::new`].
	pub fn void(open: impl Into<Cow<'static, str>>) -> Result<Self> {
		Self::new(open, "")
	}

	/// Returns the open markup template.
	pub fn open(&self) -> &str {
		&self.open
	}

	/// Returns the close markup.
	pub fn close(&self) -> &str {
		&self.close
	}

	/// Returns whether this is the tagless sentinel.
	pub fn is_none(&self) -> bool {
		self.open.is_empty() && self.close.is_empty()
	}

	/// Returns whether the tag has no separate close markup.
	pub fn is_void(&self) -> bool {
		!self.open.is_empty() && self.close.is_empty()
	}

	/// Returns the open markup with `attrs` spliced before its `>`.
	///
	/// Templates without a `>` (such as [`Tag::COMMENT`]) are returned
	/// unchanged.
	pub fn open_with(&self, attrs: &str) -> Cow<'_, str> {
		if attrs.is_empty() {
			return Cow::Borrowed(&self.open);
		}
		match self.open.find('>') {
			Some(pos) => {
				let mut out = String::with_capacity(self.open.len() + attrs.len());
				out.push_str(&self.open[..pos]);
				out.push_str(attrs);
				out.push_str(&self.open[pos..]);
				Cow::Owned(out)
			}
			None => Cow::Borrowed(&self.open),
		}
	}
}
