//! Navigation output: sidebar rendering and config templating.

mod template;
mod text;
mod writer;

pub use template::{fill_template, write_config};
pub use text::escape_js_string;
pub use writer::{render_document, render_sidebar};
