pub mod pretty_number;
pub mod slug;

pub use pretty_number::{dash, format_metric, pretty_number};
pub use slug::{slugify, unique_slug};
