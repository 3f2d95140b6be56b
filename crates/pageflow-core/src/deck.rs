//! Section decks
//!
//! A deck is the ordered list of full-screen sections the navigator moves
//! through. Decks are plain TOML files; the section count is fixed once the
//! deck is loaded.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One full-viewport content panel, addressed by its zero-based position in
/// the deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Short line rendered under the title
    #[serde(default)]
    pub tagline: String,
    /// Body lines, rendered centered
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(rename = "section")]
    pub sections: Vec<Section>,
}

impl Deck {
    /// Parse a deck from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let deck: Deck = toml::from_str(input).map_err(|e| Error::Deck(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Load and validate a deck file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::Deck("a deck needs at least one section".into()));
        }
        for (idx, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(Error::Deck(format!("section {} has an empty title", idx)));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Built-in three-section demo deck, used when no deck file is given.
    pub fn demo() -> Self {
        Self {
            sections: vec![
                Section {
                    title: "Pageflow".to_string(),
                    tagline: "Fullpage navigation for the terminal".to_string(),
                    body: vec![
                        "Scroll with the mouse wheel, drag to swipe,".to_string(),
                        "or use the arrow keys to move between sections.".to_string(),
                        String::new(),
                        "Fast scrolling means fast transitions.".to_string(),
                    ],
                },
                Section {
                    title: "Adaptive speed".to_string(),
                    tagline: "The transition matches your intent".to_string(),
                    body: vec![
                        "A rolling window of recent scroll events is classified".to_string(),
                        "as normal, fast, or ultra-fast from three signals:".to_string(),
                        "event interval, magnitude, and streak length.".to_string(),
                        String::new(),
                        "Keep flicking and watch the transitions tighten.".to_string(),
                    ],
                },
                Section {
                    title: "Make it yours".to_string(),
                    tagline: "Decks are plain TOML".to_string(),
                    body: vec![
                        "Run `pageflow export` to write a starter kit,".to_string(),
                        "then `pageflow run --deck your-deck.toml`.".to_string(),
                        String::new(),
                        "Press ? for the key map.".to_string(),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deck() {
        let deck = Deck::from_toml_str(
            r#"
            [[section]]
            title = "One"
            tagline = "first"
            body = ["line a", "line b"]

            [[section]]
            title = "Two"
            "#,
        )
        .expect("valid deck");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).map(|s| s.title.as_str()), Some("One"));
        assert_eq!(deck.get(1).map(|s| s.body.len()), Some(0));
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = Deck::from_toml_str("section = []").unwrap_err();
        assert!(matches!(err, Error::Deck(_)));
    }

    #[test]
    fn test_blank_title_rejected() {
        let result = Deck::from_toml_str(
            r#"
            [[section]]
            title = "  "
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_demo_deck_is_valid() {
        let deck = Deck::demo();
        assert!(deck.validate().is_ok());
        assert_eq!(deck.len(), 3);
    }
}
