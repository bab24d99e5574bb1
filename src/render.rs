//! Terminal rendering for the view tree.
//!
//! Walks the same tree a browser would mount and lays it out as colored lines.

use owo_colors::OwoColorize;
use party_core::{Action, Handler, Node};
use party_core::view::Element;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Node {
    fn render(&self) -> String {
        let mut lines = Vec::new();
        render_node(self, &mut lines);
        lines.join("\n")
    }
}

fn render_node(node: &Node, lines: &mut Vec<String>) {
    match node {
        Node::Text(text) => {
            let text = text.trim();
            if !text.is_empty() {
                lines.push(text.to_string());
            }
        }
        Node::Element(el) => render_element(el, lines),
    }
}

fn render_element(el: &Element, lines: &mut Vec<String>) {
    match el.tag {
        "h1" => lines.push(el.text_content().bold().to_string()),
        "h2" => {
            lines.push(String::new());
            lines.push(el.text_content().bold().underline().to_string());
        }
        "h3" => lines.push(format!("  {}", el.text_content().bold())),
        "ul" if el.has_class("parties") && el.children.is_empty() => {
            lines.push(format!("  {}", "No parties yet".dimmed()));
        }
        "ul" if el.has_class("guests") => render_guests(el, lines),
        "li" => lines.push(render_party_row(el)),
        "time" | "address" => lines.push(format!("  {}", el.text_content().dimmed())),
        "p" => lines.push(format!("  {}", el.text_content())),
        "form" => {
            for child in el.children.iter().filter(|c| is_tag(c, "h2")) {
                render_node(child, lines);
            }
            lines.push(format!(
                "  {}",
                "party-planner add --name <NAME> --description <TEXT> --date <YYYY-MM-DD> --location <PLACE>"
                    .dimmed()
            ));
        }
        "button" | "input" => {}
        _ => {
            for child in &el.children {
                render_node(child, lines);
            }
        }
    }
}

fn render_party_row(el: &Element) -> String {
    let name = el.text_content();
    let id = match el.handler {
        Some(Handler::Click(Action::SelectParty(id))) => format!("#{id}"),
        _ => String::new(),
    };

    if el.has_class("selected") {
        format!("  {} {} {}", "▸".green(), name.green().bold(), id.dimmed())
    } else {
        format!("  • {} {}", name, id.dimmed())
    }
}

fn render_guests(el: &Element, lines: &mut Vec<String>) {
    lines.push(format!("  {}", "Guests:".bold()));
    if el.children.is_empty() {
        lines.push(format!("    {}", "No RSVPs yet".dimmed()));
        return;
    }
    for guest in &el.children {
        lines.push(format!("    - {}", guest.text_content()));
    }
}

fn is_tag(node: &Node, tag: &str) -> bool {
    matches!(node, Node::Element(el) if el.tag == tag)
}
