//! ContentStore: generated text per section for one session.
//!
//! Sections are only ever written whole: a successful generation or a manual
//! edit replaces one entry, a failed generation writes nothing.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::generation::sections::ContentSection;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentStore {
    sections: BTreeMap<ContentSection, String>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, section: ContentSection) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    /// Stores generated text, replacing any previous text for the section.
    pub fn set(&mut self, section: ContentSection, text: impl Into<String>) {
        self.sections.insert(section, text.into());
    }

    /// Manual edit. Blank text removes the section.
    pub fn edit(&mut self, section: ContentSection, text: &str) {
        if text.trim().is_empty() {
            self.sections.remove(&section);
        } else {
            self.sections.insert(section, text.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Non-empty sections in export order.
    pub fn filled(&self) -> impl Iterator<Item = (ContentSection, &str)> {
        self.sections
            .iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(section, text)| (*section, text.as_str()))
    }

    /// Flat `{section_key: text}` object with every section key, pretty-printed.
    /// Sections never generated export as "".
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&FlatExport(self))
    }

    pub fn export_document(&self, product_name: &str) -> ListingDocument {
        ListingDocument {
            title: format!("Product Listing Content - {product_name}"),
            sections: self
                .filled()
                .map(|(section, text)| DocumentSection {
                    heading: section.heading(),
                    body: text.trim().to_string(),
                })
                .collect(),
        }
    }
}

/// Serializes in `ContentSection::ALL` order regardless of map features.
struct FlatExport<'a>(&'a ContentStore);

impl Serialize for FlatExport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ContentSection::ALL.len()))?;
        for section in ContentSection::ALL {
            map.serialize_entry(section.key(), self.0.get(section).unwrap_or(""))?;
        }
        map.end()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document export
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSection {
    pub heading: &'static str,
    pub body: String,
}

/// Title heading followed by one heading + paragraph per non-empty section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingDocument {
    pub title: String,
    pub sections: Vec<DocumentSection>,
}

impl ListingDocument {
    /// Markdown rendering: `#` title, `##` per section.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        for section in &self.sections {
            out.push_str(&format!("\n## {}\n\n{}\n", section.heading, section.body));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_has_all_keys_in_order() {
        let mut store = ContentStore::new();
        store.set(ContentSection::Reviews, "Great!");
        store.set(ContentSection::Title, "A title");

        let json = store.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 15);
        assert_eq!(obj["title"], "A title");
        assert_eq!(obj["reviews"], "Great!");
        assert_eq!(obj["full_site_bundle"], "");

        // Pretty-printed, and keys appear in export order.
        assert!(json.contains("\n  \"title\": \"A title\""));
        let title_at = json.find("\"title\"").unwrap();
        let bullets_at = json.find("\"bullets\"").unwrap();
        let bundle_at = json.find("\"full_site_bundle\"").unwrap();
        assert!(title_at < bullets_at && bullets_at < bundle_at);
    }

    #[test]
    fn test_document_skips_empty_and_keeps_fixed_order() {
        let mut store = ContentStore::new();
        store.set(ContentSection::Faqs, "Q: A?");
        store.set(ContentSection::Title, "Serum Title");
        store.set(ContentSection::Usp, "   ");

        let doc = store.export_document("Vitamin C Serum");
        assert_eq!(doc.title, "Product Listing Content - Vitamin C Serum");
        let headings: Vec<_> = doc.sections.iter().map(|s| s.heading).collect();
        assert_eq!(headings, vec!["Product Title", "FAQs"]);

        let md = doc.to_markdown();
        assert!(md.starts_with("# Product Listing Content - Vitamin C Serum\n"));
        assert!(md.contains("\n## Product Title\n\nSerum Title\n"));
        assert!(!md.contains("USP"));
    }

    #[test]
    fn test_edit_and_clear() {
        let mut store = ContentStore::new();
        store.set(ContentSection::Bullets, "old");
        store.edit(ContentSection::Bullets, "new");
        assert_eq!(store.get(ContentSection::Bullets), Some("new"));

        store.edit(ContentSection::Bullets, "  ");
        assert_eq!(store.get(ContentSection::Bullets), None);

        store.set(ContentSection::Title, "t");
        store.set(ContentSection::Faqs, "f");
        assert_eq!(store.len(), 2);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.filled().count(), 0);
    }

    #[test]
    fn test_snapshot_serializes_by_section_key() {
        let mut store = ContentStore::new();
        store.set(ContentSection::HeroPrompts, "prompts");
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["hero_prompts"], "prompts");
    }
}
