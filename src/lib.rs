//! HTML fragment → JSX source converter.
//!
//! Walks an html5ever-parsed DOM tree and emits the equivalent JSX source
//! text: camelCased SVG tag names, renamed props (`class` → `className`,
//! `for` → `htmlFor`), inline styles as object literals, escaped text and
//! comments, and a wrapper `<div>` when the fragment has no single root
//! element.
//!
//! ```
//! let jsx = html2jsx::convert("<p class=\"intro\">hello</p>")?;
//! assert_eq!(jsx, "<p className=\"intro\">{'hello'}</p>");
//! # Ok::<(), html2jsx::ConvertError>(())
//! ```

mod convert;
mod dom;
mod escape;
mod names;
mod serialize;
mod style;

#[cfg(test)]
mod convert_tests;

pub use convert::{convert, ConvertError, ConvertOptions, HtmlToJsx};
pub use dom::parse_into_container;
pub use escape::{escape_html_text, escape_jsx_string_literal};
pub use names::{jsx_attribute_name, jsx_tag_name};
pub use serialize::JsxSerializer;
pub use style::translate_inline_style;
