pub mod css;
pub mod fit;
pub mod parsers;

pub use css::{GridStyle, linear_gradient};
pub use fit::ImageFit;
pub use parsers::{MarkdownImage, StyleParseError, is_external_url};
