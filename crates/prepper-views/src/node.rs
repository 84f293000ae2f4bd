//! The renderable view tree.

use crate::action::Action;

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An HTML element.
    Element(Element),
    /// Text, escaped on render.
    Text(String),
    /// Trusted HTML from the product API, emitted as is.
    Raw(String),
    /// A form that submits an action.
    Form(Form),
    /// Siblings without a wrapper.
    Fragment(Vec<Node>),
}

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: &'static str,
    /// Attributes in insertion order.
    pub attrs: Vec<(&'static str, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

/// A POST form bound to an `Action`.
///
/// The action's fields become hidden inputs; the children supply the
/// visible controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    /// What submitting the form does.
    pub action: Action,
    /// CSS classes of the form element.
    pub class: String,
    /// Visible controls.
    pub children: Vec<Node>,
}

/// Starts an element.
#[must_use]
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A `div` with `class`.
#[must_use]
pub fn div(class: &str) -> Element {
    el("div").class(class)
}

/// A `p` with `class` and text.
#[must_use]
pub fn paragraph(class: &str, content: impl Into<String>) -> Element {
    el("p").class(class).text(content)
}

/// An `h1`-`h6` heading. Levels outside 1-6 are clamped.
#[must_use]
pub fn heading(level: u8, content: impl Into<String>, class: &str) -> Element {
    let tag = match level {
        0 | 1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    };
    el(tag).class(class).text(content)
}

/// An `a` linking to `href`.
#[must_use]
pub fn link(href: impl Into<String>, content: impl Into<String>, class: &str) -> Element {
    el("a").attr("href", href).class(class).text(content)
}

/// An `img`.
#[must_use]
pub fn image(src: impl Into<String>, alt: impl Into<String>, class: &str) -> Element {
    el("img").attr("src", src).attr("alt", alt).class(class)
}

/// A submit button.
#[must_use]
pub fn submit(label: impl Into<String>, class: &str) -> Element {
    el("button").attr("type", "submit").class(class).text(label)
}

/// Text content.
#[must_use]
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Trusted HTML.
#[must_use]
pub fn raw(html: impl Into<String>) -> Node {
    Node::Raw(html.into())
}

/// A form submitting `action`.
#[must_use]
pub fn form(action: Action, class: &str) -> Form {
    Form {
        action,
        class: class.to_owned(),
        children: Vec::new(),
    }
}

/// A form holding a single submit button.
#[must_use]
pub fn action_button(action: Action, label: impl Into<String>, class: &str) -> Node {
    form(action, "inline").child(submit(label, class)).into()
}

impl Element {
    /// Sets the `class` attribute. Empty classes are skipped.
    #[must_use]
    pub fn class(self, class: &str) -> Self {
        if class.is_empty() {
            return self;
        }
        self.attr("class", class)
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Adds an attribute when `condition` holds.
    #[must_use]
    pub fn attr_if(self, condition: bool, name: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn children<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    /// The value of attribute `name`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Form {
    /// Appends a child.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Form> for Node {
    fn from(form: Form) -> Self {
        Self::Form(form)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }
}

impl Node {
    /// An empty fragment.
    #[must_use]
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    fn children(&self) -> &[Node] {
        match self {
            Self::Element(e) => &e.children,
            Self::Form(f) => &f.children,
            Self::Fragment(nodes) => nodes,
            Self::Text(_) | Self::Raw(_) => &[],
        }
    }

    /// All text in the subtree, in document order. Raw HTML is included
    /// verbatim.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) | Self::Raw(t) => out.push_str(t),
            _ => self.children().iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Every action bound in the subtree, in document order.
    #[must_use]
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        if let Self::Form(f) = self {
            out.push(&f.action);
        }
        self.children()
            .iter()
            .for_each(|c| c.collect_actions(out));
    }

    /// The first element carrying attribute `name`.
    #[must_use]
    pub fn find_by_attr(&self, name: &str) -> Option<&Element> {
        if let Self::Element(e) = self
            && e.get_attr(name).is_some()
        {
            return Some(e);
        }
        self.children().iter().find_map(|c| c.find_by_attr(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_attrs_and_children() {
        let node: Node = div("box")
            .attr("id", "main")
            .child(paragraph("", "hej"))
            .into();

        let Node::Element(e) = &node else {
            panic!("expected element");
        };
        assert_eq!(e.get_attr("class"), Some("box"));
        assert_eq!(e.get_attr("id"), Some("main"));
        assert_eq!(node.text_content(), "hej");
    }

    #[test]
    fn test_empty_class_is_skipped() {
        assert!(div("").attrs.is_empty());
    }

    #[test]
    fn test_actions_are_collected_in_document_order() {
        let node: Node = div("")
            .child(action_button(Action::Checkout, "Betal", ""))
            .child(action_button(Action::ClearCart, "Tøm", ""))
            .into();

        assert_eq!(node.actions(), vec![&Action::Checkout, &Action::ClearCart]);
    }

    #[test]
    fn test_find_by_attr_searches_subtree() {
        let node: Node = div("")
            .child(Node::Fragment(vec![el("span").attr("data-cart-badge", "").text("3").into()]))
            .into();

        let badge = node.find_by_attr("data-cart-badge").unwrap();
        assert_eq!(badge.tag, "span");
        assert!(node.find_by_attr("data-missing").is_none());
    }

    #[test]
    fn test_heading_levels_are_clamped() {
        assert_eq!(heading(0, "", "").tag, "h1");
        assert_eq!(heading(2, "", "").tag, "h2");
        assert_eq!(heading(9, "", "").tag, "h6");
    }
}
