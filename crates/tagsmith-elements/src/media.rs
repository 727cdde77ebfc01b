//! Images and audio

use crate::map::ImageMap;
use tagsmith_core::{Attributed, Attributes, Container, Node, RenderEngine, Result, Tag, Text};

/// `<img>` (void)
///
/// ## Example
///
/// ```
/// use tagsmith_elements::Image;
/// use tagsmith_core::{Node, RenderEngine};
///
/// let mut img = Image::new("logo.png").width(120).height(40);
/// let mut out = Vec::new();
/// img.render(&mut RenderEngine::new(&mut out)).unwrap();
/// assert_eq!(out, b"<img height=\"40\" src=\"logo.png\" width=\"120\">\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Image {
	attrs: Attributes,
}

impl Image {
	/// Creates an image loading `src`.
	pub fn new(src: &str) -> Self {
		Self::default().attr("src", src)
	}

	/// Sets the width in pixels.
	pub fn width(self, pixels: u32) -> Self {
		self.attr("width", &pixels.to_string())
	}

	/// Sets the height in pixels.
	pub fn height(self, pixels: u32) -> Self {
		self.attr("height", &pixels.to_string())
	}

	/// Sets the alternative text.
	pub fn alt(self, text: &str) -> Self {
		self.attr("alt", text)
	}

	/// Links the image to a client-side image map.
	pub fn use_map(self, map: &ImageMap) -> Self {
		let target = format!("#{}", map.name());
		self.attr("usemap", &target)
	}
}

impl_attributed!(Image);

impl Node for Image {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::IMG, self)
	}

	fn render_content(&mut self, _engine: &mut RenderEngine<'_>) -> Result<()> {
		Ok(())
	}
}

/// How much of an audio file the browser loads up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preload {
	/// Load nothing until playback
	None,
	/// Load metadata only
	Metadata,
	/// Load the whole file
	Auto,
}

impl Preload {
	/// Returns the attribute value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Metadata => "metadata",
			Self::Auto => "auto",
		}
	}
}

container_element! {
	/// `<audio>` player with optional sources and fallback text
	Audio => Tag::AUDIO
}

impl Audio {
	/// Creates a player for `src`. An empty `src` leaves the attribute out,
	/// for players that only use [`Audio::source`].
	pub fn new(src: &str) -> Self {
		let audio = Self::from_container(Container::new());
		if src.is_empty() {
			audio
		} else {
			audio.attr("src", src)
		}
	}

	/// Sets the preload hint.
	pub fn preload(self, preload: Preload) -> Self {
		self.attr("preload", preload.as_str())
	}

	/// Shows the browser's playback controls.
	pub fn controls(self) -> Self {
		self.attr("controls", "true")
	}

	/// Adds an alternative source.
	pub fn source(self, source: Source) -> Self {
		self.child(source)
	}

	/// Adds text shown by browsers without audio support.
	pub fn fallback(self, text: impl Into<String>) -> Self {
		self.child(Text::new(text.into()))
	}
}

/// `<source>` (void) inside a media element
#[derive(Debug, Clone, Default)]
pub struct Source {
	attrs: Attributes,
}

impl Source {
	/// Creates a source for `src`.
	pub fn new(src: &str) -> Self {
		Self::default().attr("src", src)
	}

	/// Sets the MIME type.
	pub fn media_type(self, mime: &str) -> Self {
		self.attr("type", mime)
	}
}

impl_attributed!(Source);

impl Node for Source {
	fn render(&mut self, engine: &mut RenderEngine<'_>) -> Result<()> {
		engine.render_tag(&Tag::SOURCE, self)
	}

	fn render_content(&mut self, _engine: &mut RenderEngine<'_>) -> Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tagsmith_core::NameGenerator;

	fn render(node: &mut dyn Node) -> String {
		let mut out = Vec::new();
		node.render(&mut RenderEngine::new(&mut out)).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[rstest]
	fn test_image_never_closes() {
		// Arrange
		let mut img = Image::new("a.png").alt("A");

		// Act
		let html = render(&mut img);

		// Assert
		assert_eq!(html, "<img alt=\"A\" src=\"a.png\">\n");
		assert!(!html.contains("</img>"));
	}

	#[rstest]
	fn test_image_uses_map_name() {
		// Arrange
		let mut names = NameGenerator::new();
		let map = ImageMap::generated(&mut names);

		// Act
		let img = Image::new("plan.png").use_map(&map);

		// Assert
		assert_eq!(img.get_attr("usemap"), "#map1");
	}

	#[rstest]
	fn test_audio_with_sources_and_fallback() {
		// Arrange
		let mut audio = Audio::new("")
			.controls()
			.preload(Preload::Metadata)
			.source(Source::new("a.ogg").media_type("audio/ogg"))
			.fallback("No <audio> support");

		// Act & Assert
		assert_eq!(
			render(&mut audio),
			"<audio controls preload=\"metadata\"><source src=\"a.ogg\" type=\"audio/ogg\">\nNo &lt;audio&gt; support</audio>\n"
		);
	}

	#[rstest]
	#[case("", false)]
	#[case("song.mp3", true)]
	fn test_audio_src_is_optional(#[case] src: &str, #[case] has_src: bool) {
		assert_eq!(Audio::new(src).attributes().contains("src"), has_src);
	}
}
