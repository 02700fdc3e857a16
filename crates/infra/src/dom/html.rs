//! `scraper`-backed implementation of the DOM capability traits.

use std::path::Path;

use intrasync_core::dom::{DomDocument, DomNode};
use intrasync_domain::Result;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// A parsed intranet page snapshot.
pub struct HtmlPage {
    html: Html,
}

impl HtmlPage {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            debug!(errors = html.errors.len(), "HTML parsed with recoverable errors");
        }
        Self { html }
    }

    /// Reads and parses a saved page.
    pub fn from_file(path: &Path) -> Result<Self> {
        let markup = std::fs::read_to_string(path).map_err(InfraError::from)?;
        Ok(Self::parse(&markup))
    }
}

impl DomDocument for HtmlPage {
    type Node<'a> = HtmlNode<'a>;

    fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.html.root_element())
    }
}

/// One element of an [`HtmlPage`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(error) => {
            warn!(css, %error, "invalid selector");
            None
        }
    }
}

impl<'a> DomNode for HtmlNode<'a> {
    fn query_all(&self, css: &str) -> Vec<Self> {
        let Some(selector) = selector(css) else {
            return Vec::new();
        };
        let own_id = self.0.id();
        self.0.select(&selector).filter(|element| element.id() != own_id).map(HtmlNode).collect()
    }

    fn closest(&self, css: &str) -> Option<Self> {
        let selector = selector(css)?;
        std::iter::once(self.0)
            .chain(self.0.ancestors().filter_map(ElementRef::wrap))
            .find(|element| selector.matches(element))
            .map(HtmlNode)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    fn element_index(&self) -> Option<usize> {
        let parent = self.0.parent()?;
        parent
            .children()
            .filter_map(ElementRef::wrap)
            .position(|sibling| sibling.id() == self.0.id())
    }
}
