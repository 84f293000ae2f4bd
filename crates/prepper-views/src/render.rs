//! HTML rendering.

use std::fmt::Write;

use crate::node::{Element, Form, Node};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Renders `node` to an HTML string.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Renders a complete page around `body`.
#[must_use]
pub fn document(title: &str, body: &Node, stylesheet: &str) -> String {
    let mut out = String::from("<!DOCTYPE html><html lang=\"da\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = write!(
        out,
        "<title>{}</title><link rel=\"stylesheet\" href=\"{}\"></head><body class=\"bg-white\">",
        escape_text(title),
        escape_attr(stylesheet)
    );
    write_node(&mut out, body);
    out.push_str("</body></html>");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(e) => write_element(out, e),
        Node::Text(t) => out.push_str(&escape_text(t)),
        Node::Raw(html) => out.push_str(html),
        Node::Form(f) => write_form(out, f),
        Node::Fragment(nodes) => nodes.iter().for_each(|n| write_node(out, n)),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }
    element.children.iter().for_each(|c| write_node(out, c));
    let _ = write!(out, "</{}>", element.tag);
}

fn write_form(out: &mut String, form: &Form) {
    let _ = write!(out, "<form method=\"post\" action=\"{}\"", form.action.endpoint());
    if !form.class.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&form.class));
    }
    out.push('>');
    for (name, value) in form.action.fields() {
        let _ = write!(
            out,
            "<input type=\"hidden\" name=\"{name}\" value=\"{}\">",
            escape_attr(&value)
        );
    }
    form.children.iter().for_each(|c| write_node(out, c));
    out.push_str("</form>");
}

/// Escapes text content.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a double-quoted attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}
