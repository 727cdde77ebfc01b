//! Container-backed block and phrasing elements
//!
//! These always render their tag, even when they have no children.

use tagsmith_core::{Attributed, Tag, Text};

container_element! {
	/// `<div>` division
	///
	/// ## Example
	///
	/// ```
	/// use tagsmith_elements::{Div, Paragraph};
	/// use tagsmith_core::{Node, RenderEngine};
	///
	/// let mut div = Div::center().child(Paragraph::text("hi"));
	/// let mut out = Vec::new();
	/// div.render(&mut RenderEngine::new(&mut out)).unwrap();
	/// assert_eq!(out, b"<div align=\"center\"><p>hi</p>\n</div>\n");
	/// ```
	Div => Tag::DIV, default
}

impl Div {
	/// Creates a centered division.
	pub fn center() -> Self {
		Self::new().attr("align", "center")
	}

	/// Creates a division showing `message` in red.
	pub fn error(message: impl Into<String>) -> Self {
		Self::new()
			.style("color", "red")
			.child(Text::new(message.into()))
	}
}

container_element! {
	/// `<p>` paragraph
	Paragraph => Tag::P, default
}

impl Paragraph {
	/// Creates a paragraph holding escaped text.
	pub fn text(text: impl Into<String>) -> Self {
		Self::new().child(Text::new(text.into()))
	}
}

container_element! {
	/// `<b>` bold run
	Bold => Tag::B, default
}

impl Bold {
	/// Creates a bold run of escaped text.
	pub fn text(text: impl Into<String>) -> Self {
		Self::new().child(Text::new(text.into()))
	}
}

container_element! {
	/// `<i>` italic run
	Italic => Tag::I, default
}

impl Italic {
	/// Creates an italic run of escaped text.
	pub fn text(text: impl Into<String>) -> Self {
		Self::new().child(Text::new(text.into()))
	}
}

container_element! {
	/// `<pre>` preformatted block, typically wrapping a
	/// [`Streaming`](tagsmith_core::Streaming) node
	Pre => Tag::PRE, default
}

container_element! {
	/// `<iframe>` inline frame
	IFrame => Tag::IFRAME, default
}

container_element! {
	/// `<body>` of a document
	Body => Tag::BODY, default
}
