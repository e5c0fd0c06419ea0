use std::fmt;

use serde::{Deserialize, Serialize};

/// Product category the user confirms before any content is generated.
///
/// Selects between the two template families; nothing else is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Beauty,
    Electronics,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beauty => "Beauty",
            Category::Electronics => "Electronics",
        }
    }

    /// Pre-selection hint from the sheet's category text. Never authoritative.
    pub fn detect(text: &str) -> Self {
        if text.to_lowercase().contains("electronic") {
            Category::Electronics
        } else {
            Category::Beauty
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_electronics() {
        assert_eq!(Category::detect("Consumer Electronics"), Category::Electronics);
        assert_eq!(Category::detect("ELECTRONIC GROOMING"), Category::Electronics);
    }

    #[test]
    fn test_detect_defaults_to_beauty() {
        assert_eq!(Category::detect("Skin Care"), Category::Beauty);
        assert_eq!(Category::detect(""), Category::Beauty);
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let c: Category = serde_json::from_str(r#""Electronics""#).unwrap();
        assert_eq!(c, Category::Electronics);
        assert_eq!(serde_json::to_string(&Category::Beauty).unwrap(), r#""Beauty""#);
    }
}
