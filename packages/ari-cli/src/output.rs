//! Terminal output shared by all commands

use anyhow::Result;
use console::style;
use serde::Serialize;

pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn value<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// A `key  detail` row; `detail` is dimmed.
    pub fn row(&self, key: &str, detail: &str) {
        println!("{}  {}", style(key).bold(), style(detail).dim());
    }

    pub fn print_success(&self, msg: &str) {
        if !self.json {
            println!("{}", style(msg).green());
        }
    }

    pub fn print_warning(&self, msg: &str) {
        eprintln!("{}", style(msg).yellow());
    }

    pub fn print_info(&self, msg: &str) {
        if !self.json {
            println!("{}", style(msg).cyan());
        }
    }
}
