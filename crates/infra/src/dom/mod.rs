//! HTML parsing behind the core DOM ports

pub mod html;

pub use html::{HtmlNode, HtmlPage};
