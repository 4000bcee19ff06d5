//! Abstract node tree produced by renderers.
//!
//! A renderer never touches the host surface. It returns a tree of
//! `{tag, attributes, children}` elements plus text leaves; the host
//! materializes it however it likes. Interactive elements carry
//! [`Handler`]s describing what the host should report back when the
//! element is clicked or hovered.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// A node in the rendered tree: either an element or a text leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes, children and event handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handlers: Vec<Handler>,
}

/// DOM-style events an element can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomEvent {
    Click,
    MouseEnter,
    MouseLeave,
}

impl DomEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomEvent::Click => "click",
            DomEvent::MouseEnter => "mouseenter",
            DomEvent::MouseLeave => "mouseleave",
        }
    }
}

/// What the host reports back to the template when a handler fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Interaction {
    /// A value was picked (rating position, thumbs up = 1 / down = 0).
    Select(u32),
    /// The pointer entered the given 1-based position.
    Hover(u32),
    /// The pointer left the interactive area.
    ClearHover,
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interaction::Select(v) => write!(f, "select:{}", v),
            Interaction::Hover(v) => write!(f, "hover:{}", v),
            Interaction::ClearHover => f.write_str("clear-hover"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    pub event: DomEvent,
    pub action: Interaction,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            handlers: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attr_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(key, v),
            None => self,
        }
    }

    /// Append a class to the `class` attribute.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        if class.is_empty() {
            return self;
        }
        match self.attributes.get_mut("class") {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => {
                self.attributes.insert("class".to_string(), class.to_string());
            }
        }
        self
    }

    pub fn class_if(self, cond: bool, class: impl AsRef<str>) -> Self {
        if cond {
            self.class(class)
        } else {
            self
        }
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on(mut self, event: DomEvent, action: Interaction) -> Self {
        self.handlers.push(Handler { event, action });
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// The handler bound to `event`, if any.
    pub fn handler(&self, event: DomEvent) -> Option<Interaction> {
        self.handlers
            .iter()
            .find(|h| h.event == event)
            .map(|h| h.action)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Depth-first (pre-order) list of elements matching `pred`.
    pub fn find_all<'a, P>(&'a self, pred: P) -> Vec<&'a Element>
    where
        P: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.walk(&pred, &mut found);
        found
    }

    fn walk<'a, P>(&'a self, pred: &P, found: &mut Vec<&'a Element>)
    where
        P: Fn(&Element) -> bool,
    {
        if let Node::Element(e) = self {
            if pred(e) {
                found.push(e);
            }
            for c in &e.children {
                c.walk(pred, found);
            }
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|e| e.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|e| e.tag == tag)
    }

    /// Render as an HTML-like string. Handlers become `data-on-*`
    /// attributes so previews stay readable.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Element(e) => {
                let _ = write!(out, "<{}", e.tag);
                for (k, v) in &e.attributes {
                    let _ = write!(out, " {}=\"{}\"", k, escape(v));
                }
                for h in &e.handlers {
                    let _ = write!(out, " data-on-{}=\"{}\"", h.event.as_str(), h.action);
                }
                out.push('>');
                for c in &e.children {
                    c.write_markup(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
