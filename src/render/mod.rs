//! Output formats for generated clouds.

pub mod html;
pub mod json;

pub use html::{escape_html, save_html, to_html, write_html};
pub use json::{from_json, save_json, to_json};
