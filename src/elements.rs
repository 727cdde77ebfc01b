//! Element catalog and the document aggregate
//!
//! This module provides access to tagsmith-elements: divisions, tables,
//! lists, forms, media, stylesheets and the [`Document`] that ties a head
//! and a body together.
//!
//! ## Example
//!
//! ```
//! use tagsmith::elements::{Document, Form, Input, Label};
//!
//! let mut doc = Document::new();
//! doc.body_mut().add(
//!     Form::new("/subscribe")
//!         .post()
//!         .child(Label::new("Email"))
//!         .child(Input::text("email", 32))
//!         .child(Input::submit("go", "Subscribe")),
//! );
//!
//! let html = doc.render_to_string().unwrap();
//! assert!(html.contains("<form action=\"/subscribe\" method=\"POST\">"));
//! ```

// Re-export all tagsmith-elements functionality
pub use tagsmith_elements::*;
