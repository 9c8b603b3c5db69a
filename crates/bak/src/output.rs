//! Terminal output
//!
//! All user-facing messages go through [`Output`], which carries the
//! `--silent` policy explicitly.

use console::style;

/// Output policy for user-facing messages
#[derive(Debug, Clone, Copy)]
pub struct Output {
    silent: bool,
}

impl Output {
    pub fn new(silent: bool) -> Self {
        Self { silent }
    }

    /// Print a success message
    pub fn success(&self, msg: &str) {
        if !self.silent {
            println!("{} {}", style("✓").green().bold(), msg);
        }
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        if !self.silent {
            eprintln!("{} {}", style("✗").red().bold(), msg);
        }
    }

    /// Print an info message
    pub fn info(&self, msg: &str) {
        if !self.silent {
            println!("{} {}", style("ℹ").blue().bold(), msg);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if !self.silent {
            println!("  {}: {}", style(key).dim(), value);
        }
    }
}
