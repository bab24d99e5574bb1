//! A small virtual tree: what the view builds and the host mounts.

use std::fmt;

/// Something a user interaction asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectParty(crate::party::PartyId),
    DeleteParty(crate::party::PartyId),
    SubmitParty,
}

/// Event wiring attached to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Click(Action),
    Submit(Action),
}

impl Handler {
    pub fn action(&self) -> Action {
        match self {
            Handler::Click(action) | Handler::Submit(action) => *action,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub classes: Vec<&'static str>,
    pub children: Vec<Node>,
    pub handler: Option<Handler>,
}

/// Elements serialized without a closing tag
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
            handler: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every element in the tree, depth-first, document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut out);
        out
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if let Node::Element(el) = self {
            out.push(el);
            for child in &el.children {
                child.walk(out);
            }
        }
    }

    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.elements().into_iter().filter(|el| el.tag == tag).collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|el| el.get_attr("id") == Some(id))
    }

    pub fn by_class(&self, class: &str) -> Option<&Element> {
        self.elements().into_iter().find(|el| el.has_class(class))
    }

    /// Every action wired into the tree, in document order.
    pub fn actions(&self) -> Vec<Action> {
        self.elements()
            .into_iter()
            .filter_map(|el| el.handler.map(|h| h.action()))
            .collect()
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.write_str(&escape(text)),
            Node::Element(el) => fmt::Display::fmt(el, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes.join(" "))?;
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {}=\"{}\"", name, escape(value))?;
            }
        }
        f.write_str(">")?;

        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
