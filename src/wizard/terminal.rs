//! Terminal implementations of the wizard capability traits.
//!
//! Prompts read from stdin line by line. An empty answer falls back to the
//! default where one exists; `q` or end-of-input dismisses the prompt.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::{NotificationSink, PromptProvider};

/// Stdin/stdout prompt provider.
#[derive(Debug, Default)]
pub struct TerminalPrompts;

impl TerminalPrompts {
    pub fn new() -> Self {
        Self
    }

    /// Read one trimmed line; `None` on EOF.
    fn read_line() -> io::Result<Option<String>> {
        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    fn is_dismissed(answer: &str) -> bool {
        answer.eq_ignore_ascii_case("q")
    }
}

impl PromptProvider for TerminalPrompts {
    fn input(&self, prompt: &str, default: Option<&str>) -> io::Result<Option<String>> {
        match default {
            Some(default) => print!("{prompt} [{default}]: "),
            None => print!("{prompt}: "),
        }
        io::stdout().flush()?;

        let Some(answer) = Self::read_line()? else {
            return Ok(None);
        };

        if Self::is_dismissed(&answer) {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(default.map(ToString::to_string));
        }
        Ok(Some(answer))
    }

    fn select(&self, prompt: &str, items: &[String]) -> io::Result<Option<usize>> {
        println!("{prompt}:");
        for (index, item) in items.iter().enumerate() {
            println!("  {}) {item}", index + 1);
        }
        print!("Choose [1-{}, q to cancel]: ", items.len());
        io::stdout().flush()?;

        let Some(answer) = Self::read_line()? else {
            return Ok(None);
        };

        if answer.is_empty() || Self::is_dismissed(&answer) {
            return Ok(None);
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => Ok(Some(n - 1)),
            _ => {
                println!("Invalid choice: {answer}");
                self.select(prompt, items)
            }
        }
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> io::Result<Option<Vec<usize>>> {
        println!("{prompt}:");
        for (index, item) in items.iter().enumerate() {
            println!("  {}) {item}", index + 1);
        }
        print!("Choose any (comma-separated, empty for none, q to cancel): ");
        io::stdout().flush()?;

        let Some(answer) = Self::read_line()? else {
            return Ok(None);
        };

        if Self::is_dismissed(&answer) {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let mut indices = Vec::new();
        for part in answer.split(',') {
            match part.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => {
                    if !indices.contains(&(n - 1)) {
                        indices.push(n - 1);
                    }
                }
                _ => {
                    println!("Invalid choice: {}", part.trim());
                    return self.multi_select(prompt, items);
                }
            }
        }
        Ok(Some(indices))
    }

    fn pick_directory(&self, prompt: &str, default: &Path) -> io::Result<Option<PathBuf>> {
        let Some(answer) = self.input(prompt, Some(&default.display().to_string()))? else {
            return Ok(None);
        };

        let expanded = shellexpand::tilde(&answer);
        Ok(Some(PathBuf::from(expanded.as_ref())))
    }
}

/// Notification sink writing to stdout/stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for TerminalNotifier {
    fn info(&self, message: &str) {
        println!("✓ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {message}");
    }
}
