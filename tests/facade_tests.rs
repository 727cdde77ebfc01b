//! Facade Integration Tests
//!
//! Checks that the root crate exposes the render core and, with the default
//! features, the element catalog.

use rstest::rstest;
use tagsmith::prelude::*;

#[rstest]
fn test_core_reexports_render_fragment() {
	// Arrange
	let mut root = tagsmith::render::Container::new();
	root.add(tagsmith::render::Raw::new("<hr>"));
	let mut out = Vec::new();

	// Act
	let written = tagsmith::render_page(&mut root, &mut out, RenderOptions::default()).unwrap();

	// Assert
	assert_eq!(out, b"<!DOCTYPE html><hr>");
	assert_eq!(written, out.len());
}

#[cfg(feature = "elements")]
#[rstest]
fn test_prelude_builds_document() {
	// Arrange
	let mut doc = tagsmith::Document::new();
	doc.set_title("Facade");
	let mut table = Table::new();
	table.header().cell_text("a");
	table.row().cell(Anchor::text("/b", "b"));
	doc.body_mut().add(table);

	// Act
	let html = doc.render_to_string().unwrap();

	// Assert
	assert!(html.contains("<title>Facade</title>"));
	assert!(html.contains("<td><a href=\"/b\">b</a>\n</td>"));
}

#[cfg(feature = "elements")]
#[rstest]
fn test_elements_module_matches_crate() {
	// Arrange
	let mut heading = tagsmith::elements::Heading::text(9, "Clamped");

	// Act
	let mut out = Vec::new();
	heading.render(&mut RenderEngine::new(&mut out)).unwrap();

	// Assert
	assert_eq!(out, b"<h6>Clamped</h6>\n");
}
