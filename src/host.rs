//! Terminal stand-in for the browser document.

use std::sync::Mutex;

use owo_colors::OwoColorize;
use party_core::{Host, Node};

/// Keeps the most recently mounted view and prints alerts as they happen.
#[derive(Default)]
pub struct TerminalHost {
    mounted: Mutex<Option<Node>>,
    alerts: Mutex<Vec<String>>,
}

impl TerminalHost {
    pub fn mounted(&self) -> Option<Node> {
        self.mounted.lock().ok().and_then(|m| m.clone())
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.lock().map(|a| a.len()).unwrap_or(0)
    }
}

impl Host for TerminalHost {
    fn mount(&self, tree: Node) {
        if let Ok(mut mounted) = self.mounted.lock() {
            *mounted = Some(tree);
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{} {}", "!".red().bold(), message.red());
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }
}
