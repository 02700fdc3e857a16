//! Synthetic DOM for extraction tests.
//!
//! Supports the selector subset the extractors use: a compound of an optional
//! tag and any number of classes (`div.appoint.singleday`, `.title`, `th`),
//! joined by the descendant combinator.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use intrasync_core::dom::{DomDocument, DomNode};

/// Element under construction.
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<ChildBuilder>,
}

#[derive(Debug, Clone)]
enum ChildBuilder {
    Element(ElementBuilder),
    Text(String),
}

/// `el("td")`, `el("div.appoint.singleday.class")`, `el(".title")`
pub fn el(descriptor: &str) -> ElementBuilder {
    let mut parts = descriptor.split('.');
    let tag = parts.next().filter(|t| !t.is_empty()).unwrap_or("div").to_string();
    ElementBuilder { tag, classes: parts.map(str::to_string).collect(), ..Default::default() }
}

impl ElementBuilder {
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(ChildBuilder::Text(text.to_string()));
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(ChildBuilder::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children.extend(children.into_iter().map(ChildBuilder::Element));
        self
    }

    fn build(self, parent: Weak<NodeData>) -> Rc<NodeData> {
        let node = Rc::new(NodeData {
            tag: self.tag,
            classes: self.classes,
            attributes: self.attributes,
            parent,
            children: RefCell::new(Vec::new()),
        });
        let children = self
            .children
            .into_iter()
            .map(|child| match child {
                ChildBuilder::Element(element) => {
                    Child::Element(element.build(Rc::downgrade(&node)))
                }
                ChildBuilder::Text(text) => Child::Text(text),
            })
            .collect();
        *node.children.borrow_mut() = children;
        node
    }
}

#[derive(Debug)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    parent: Weak<NodeData>,
    children: RefCell<Vec<Child>>,
}

#[derive(Debug, Clone)]
enum Child {
    Element(Rc<NodeData>),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct FakeNode(Rc<NodeData>);

impl FakeNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent.upgrade().map(FakeNode)
    }

    fn element_children(&self) -> Vec<Self> {
        self.0
            .children
            .borrow()
            .iter()
            .filter_map(|child| match child {
                Child::Element(node) => Some(FakeNode(Rc::clone(node))),
                Child::Text(_) => None,
            })
            .collect()
    }

    fn descendants(&self, out: &mut Vec<Self>) {
        for child in self.element_children() {
            out.push(child.clone());
            child.descendants(out);
        }
    }

    fn matches_compound(&self, compound: &str) -> bool {
        let mut parts = compound.split('.');
        let tag = parts.next().unwrap_or_default();
        (tag.is_empty() || tag == self.0.tag) && parts.all(|class| self.has_class(class))
    }

    fn matches(&self, selector: &str) -> bool {
        let compounds: Vec<&str> = selector.split_whitespace().collect();
        let Some((last, ancestors)) = compounds.split_last() else {
            return false;
        };
        if !self.matches_compound(last) {
            return false;
        }

        let mut pending = ancestors.iter().rev().peekable();
        let mut cursor = self.parent();
        while let (Some(compound), Some(node)) = (pending.peek(), cursor) {
            if node.matches_compound(compound) {
                pending.next();
            }
            cursor = node.parent();
        }
        pending.peek().is_none()
    }
}

impl DomNode for FakeNode {
    fn query_all(&self, selector: &str) -> Vec<Self> {
        let mut all = Vec::new();
        self.descendants(&mut all);
        all.into_iter().filter(|node| node.matches(selector)).collect()
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        let mut cursor = Some(self.clone());
        while let Some(node) = cursor {
            if node.matches(selector) {
                return Some(node);
            }
            cursor = node.parent();
        }
        None
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.clone())
    }

    fn text(&self) -> String {
        self.0
            .children
            .borrow()
            .iter()
            .map(|child| match child {
                Child::Element(node) => FakeNode(Rc::clone(node)).text(),
                Child::Text(text) => text.clone(),
            })
            .collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.iter().any(|c| c == class)
    }

    fn element_index(&self) -> Option<usize> {
        let parent = self.parent()?;
        parent.element_children().iter().position(|sibling| Rc::ptr_eq(&sibling.0, &self.0))
    }
}

/// Owns the synthetic tree; `root` is the `<html>` element.
pub struct FakeDocument {
    root: FakeNode,
}

impl FakeDocument {
    pub fn new(root: ElementBuilder) -> Self {
        Self { root: FakeNode(root.build(Weak::new())) }
    }

    /// `<html><body>…</body></html>` around `body_children`.
    pub fn page(body_children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        Self::new(el("html").child(el("body").children(body_children)))
    }
}

impl DomDocument for FakeDocument {
    type Node<'a> = FakeNode;

    fn root(&self) -> FakeNode {
        self.root.clone()
    }
}
