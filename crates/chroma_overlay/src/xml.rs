//! Minimal XML tree for generated resource documents
//!
//! Documents are built as [`Element`] trees and serialized in one pass, so
//! optional sections are plain `Option`s at build time rather than string
//! fragments spliced into a template. All attribute values and text are
//! escaped on output.

use std::fmt::{self, Write};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT: &str = "    ";

/// Child of an [`Element`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the first attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    fn write_to(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        write_indent(out, depth)?;
        write!(out, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(out, " {name}=\"")?;
            write_escaped(out, value)?;
            out.write_char('"')?;
        }

        match self.children.as_slice() {
            [] => out.write_str(" />\n"),
            [Node::Text(text)] => {
                out.write_char('>')?;
                write_escaped(out, text)?;
                writeln!(out, "</{}>", self.name)
            }
            children => {
                out.write_str(">\n")?;
                for child in children {
                    match child {
                        Node::Element(element) => element.write_to(out, depth + 1)?,
                        Node::Text(text) => {
                            write_indent(out, depth + 1)?;
                            write_escaped(out, text)?;
                            out.write_char('\n')?;
                        }
                    }
                }
                write_indent(out, depth)?;
                writeln!(out, "</{}>", self.name)
            }
        }
    }
}

/// Serialize `root` as a standalone document with an XML declaration.
pub fn render_document(root: &Element) -> Result<String, fmt::Error> {
    let mut out = String::new();
    out.write_str(DECLARATION)?;
    out.write_char('\n')?;
    root.write_to(&mut out, 0)?;
    Ok(out)
}

fn write_indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

fn write_escaped(out: &mut impl Write, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}
