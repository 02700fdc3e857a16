//! DOM capability ports
//!
//! Extraction never touches a concrete HTML tree. It talks to these two traits,
//! which the infrastructure layer implements on top of a real parser and the
//! tests implement with small synthetic trees.
//!
//! Selectors are plain CSS strings limited to tag names, class lists and the
//! descendant combinator (`.calendar.planner`, `thead th`, `.title a`).

/// Read-only view of one element.
pub trait DomNode: Clone {
    /// All descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;

    /// First descendant matching `selector`.
    fn query(&self, selector: &str) -> Option<Self> {
        self.query_all(selector).into_iter().next()
    }

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text of all descendant text nodes, untrimmed.
    fn text(&self) -> String;

    fn has_class(&self, class: &str) -> bool;

    /// Zero-based position among the parent's element children.
    fn element_index(&self) -> Option<usize>;
}

/// A parsed page snapshot.
pub trait DomDocument {
    type Node<'a>: DomNode
    where
        Self: 'a;

    /// The document element.
    fn root(&self) -> Self::Node<'_>;

    /// Text of the page body, used for page-wide heuristics.
    fn body_text(&self) -> String {
        let root = self.root();
        root.query("body").map_or_else(|| root.text(), |body| body.text())
    }
}
