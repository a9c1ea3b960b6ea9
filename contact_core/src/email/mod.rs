pub mod template;

pub use template::{escape_html, format_received_at, EmailTemplate};
