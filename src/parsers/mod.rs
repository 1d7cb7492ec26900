//! Markup parsing: structured field extraction and visible-text reduction.

pub mod html;
pub mod text;


pub use html::extract;
pub use text::visible_text;
