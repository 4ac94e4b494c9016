//! Rotating quote display

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    fn new(text: &str, author: &str) -> Self {
        Self {
            text: text.to_string(),
            author: author.to_string(),
        }
    }
}

/// Picks an index in `0..len`
pub type IndexPicker = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// Fixed list of quotes with a current pick
pub struct QuoteBook {
    quotes: Vec<Quote>,
    current: Quote,
    picker: IndexPicker,
}

impl QuoteBook {
    /// Create a book that picks uniformly at random
    pub fn new() -> Self {
        Self::with_picker(Box::new(|len| rand::thread_rng().gen_range(0..len)))
    }

    pub fn with_picker(picker: IndexPicker) -> Self {
        Self {
            quotes: vec![
                Quote::new("Focus on being productive instead of busy.", "Tim Ferriss"),
                Quote::new("Your time is limited, don't waste it.", "Steve Jobs"),
                Quote::new("Start before you're ready.", "Stephen King"),
            ],
            current: Quote::new(
                "The only way to do great work is to love what you do.",
                "Steve Jobs",
            ),
            picker,
        }
    }

    pub fn current(&self) -> &Quote {
        &self.current
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Replace the current quote with a pick from the list
    pub fn next(&mut self) -> &Quote {
        let index = (self.picker)(self.quotes.len()) % self.quotes.len();
        self.current = self.quotes[index].clone();
        &self.current
    }
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QuoteBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteBook")
            .field("quotes", &self.quotes.len())
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_quote() {
        let book = QuoteBook::with_picker(Box::new(|_| 0));
        assert_eq!(book.current().author, "Steve Jobs");
        assert!(book.current().text.starts_with("The only way"));
    }

    #[test]
    fn next_uses_injected_picker() {
        let mut book = QuoteBook::with_picker(Box::new(|_| 2));
        assert_eq!(book.next().author, "Stephen King");
    }

    #[test]
    fn out_of_range_pick_wraps() {
        let mut book = QuoteBook::with_picker(Box::new(|len| len));
        assert_eq!(book.next().author, "Tim Ferriss");
    }

    #[test]
    fn random_pick_stays_in_list() {
        let mut book = QuoteBook::new();
        for _ in 0..20 {
            let quote = book.next().clone();
            assert!(book.quotes().contains(&quote));
        }
    }
}
