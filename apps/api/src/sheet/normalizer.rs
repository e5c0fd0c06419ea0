//! Sheet Normalizer: turns cleaned (label, value) pairs into a canonical ProductRecord.
//!
//! Resolution per field runs two passes over the whole entry list:
//! 1. exact pass: alias equals label (case-insensitive), non-empty value
//! 2. substring pass: alias contained in label (case-insensitive), non-empty value
//!
//! Within a pass aliases are tried in priority order and, for each alias, entries
//! in sheet order. The first hit wins. An exact hit anywhere outranks a substring
//! hit anywhere. Nothing matched → the field's configured default.
//!
//! Known limitation: the first matching entry in sheet order wins even when a later
//! entry would be a more specific match for the same alias.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::sheet::fields::{CanonicalField, NOT_SPECIFIED};
use crate::sheet::reader::{RawPair, SheetError};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One cleaned row of the sheet. `label` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    label: String,
    value: String,
}

impl RawEntry {
    /// Builds an entry from raw cell text, or `None` if the label is blank.
    pub fn new(label: &str, value: &str) -> Option<Self> {
        let label = clean_cell(label);
        if label.is_empty() {
            return None;
        }
        Some(Self {
            label,
            value: clean_cell(value),
        })
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// How a field obtained its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Exact,
    Substring,
    /// No alias matched; the value is the field's configured default.
    Default,
    /// Replaced by an interactive user selection after normalization.
    UserOverride,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField {
    pub value: String,
    pub resolution: Resolution,
    /// Sheet label the value came from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
}

impl ResolvedField {
    fn unset(field: CanonicalField) -> Self {
        Self {
            value: field.default_value().to_string(),
            resolution: Resolution::Default,
            source_label: None,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.resolution == Resolution::Default
    }
}

/// Canonical product record. Every canonical field is always present.
///
/// Immutable after normalization except for the two user-confirmed overrides
/// (`category` and `brand_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductRecord {
    fields: BTreeMap<CanonicalField, ResolvedField>,
}

impl ProductRecord {
    pub fn field(&self, field: CanonicalField) -> &ResolvedField {
        // Construction fills every field, so the lookup cannot miss.
        &self.fields[&field]
    }

    /// Resolved value (possibly the default).
    pub fn get(&self, field: CanonicalField) -> &str {
        &self.field(field).value
    }

    /// Value as it is rendered into prompts: empty defaults become "N/A".
    pub fn prompt_value(&self, field: CanonicalField) -> &str {
        match self.get(field) {
            "" => "N/A",
            v => v,
        }
    }

    pub fn override_category(&mut self, category: &str) {
        self.apply_override(CanonicalField::Category, category);
    }

    pub fn override_brand_name(&mut self, brand_name: &str) {
        self.apply_override(CanonicalField::BrandName, brand_name);
    }

    fn apply_override(&mut self, field: CanonicalField, value: &str) {
        self.fields.insert(
            field,
            ResolvedField {
                value: value.trim().to_string(),
                resolution: Resolution::UserOverride,
                source_label: None,
            },
        );
    }

    /// (label, value) rows worth showing: drops empty and "Not specified" values.
    pub fn display_rows(&self) -> Vec<(&'static str, &str)> {
        CanonicalField::ALL
            .iter()
            .map(|&f| (f.label(), self.get(f)))
            .filter(|(_, v)| !v.trim().is_empty() && *v != NOT_SPECIFIED)
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cleaning
// ────────────────────────────────────────────────────────────────────────────

/// Trims a cell and maps missing-value tokens ("nan" as written by some
/// spreadsheet exporters) to the empty string.
fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Drops rows with blank labels (which covers rows where both cells are blank).
pub fn clean_entries<I>(pairs: I) -> Vec<RawEntry>
where
    I: IntoIterator<Item = RawPair>,
{
    pairs
        .into_iter()
        .filter_map(|pair| RawEntry::new(&pair.label, &pair.value))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Finds the first entry for `aliases`: exact pass over everything, then substring pass.
pub fn resolve_aliases<'a>(
    entries: &'a [RawEntry],
    aliases: &[&str],
) -> Option<(&'a RawEntry, Resolution)> {
    let aliases: Vec<String> = aliases.iter().map(|a| a.to_lowercase()).collect();
    let labels: Vec<String> = entries.iter().map(|e| e.label.to_lowercase()).collect();

    let find = |matches: &dyn Fn(&str, &str) -> bool| {
        aliases.iter().find_map(|alias| {
            entries
                .iter()
                .zip(&labels)
                .find(|(entry, label)| !entry.value.is_empty() && matches(alias, label))
                .map(|(entry, _)| entry)
        })
    };

    if let Some(entry) = find(&|alias: &str, label: &str| alias == label) {
        return Some((entry, Resolution::Exact));
    }
    find(&|alias: &str, label: &str| label.contains(alias)).map(|entry| (entry, Resolution::Substring))
}

/// Normalizes cleaned entries into a ProductRecord. Pure function of its input.
pub fn normalize_entries(entries: &[RawEntry]) -> Result<ProductRecord, SheetError> {
    if entries.is_empty() {
        return Err(SheetError::NoEntries);
    }

    let fields = CanonicalField::ALL
        .iter()
        .map(|&field| {
            let resolved = match resolve_aliases(entries, field.aliases()) {
                Some((entry, resolution)) => {
                    debug!(
                        "field {} <- '{}' ({:?})",
                        field.key(),
                        entry.label,
                        resolution
                    );
                    ResolvedField {
                        value: entry.value.clone(),
                        resolution,
                        source_label: Some(entry.label.clone()),
                    }
                }
                None => ResolvedField::unset(field),
            };
            (field, resolved)
        })
        .collect();

    Ok(ProductRecord { fields })
}

/// Cleans raw sheet pairs and normalizes them in one step.
pub fn normalize<I>(pairs: I) -> Result<ProductRecord, SheetError>
where
    I: IntoIterator<Item = RawPair>,
{
    normalize_entries(&clean_entries(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(rows: &[(&str, &str)]) -> Vec<RawPair> {
        rows.iter()
            .map(|(l, v)| RawPair {
                label: l.to_string(),
                value: v.to_string(),
            })
            .collect()
    }

    fn entries(rows: &[(&str, &str)]) -> Vec<RawEntry> {
        clean_entries(pairs(rows))
    }

    #[test]
    fn test_literal_scenario() {
        let record = normalize(pairs(&[
            ("Product Name", " Glow Serum "),
            ("Brand Name", "MakeMeeBold"),
            ("INGREDIENTS", "Niacinamide"),
        ]))
        .unwrap();

        assert_eq!(record.get(CanonicalField::ProductName), "Glow Serum");
        assert_eq!(record.get(CanonicalField::BrandName), "MakeMeeBold");
        assert_eq!(record.get(CanonicalField::Ingredients), "Niacinamide");
        assert_eq!(record.get(CanonicalField::Claims), "Not specified");
        assert!(record.field(CanonicalField::Claims).is_unset());
    }

    #[test]
    fn test_exact_match_anywhere_outranks_substring_match() {
        let e = entries(&[("USP Back", "X"), ("USP", "Y")]);
        let (entry, resolution) = resolve_aliases(&e, &["USP"]).unwrap();
        assert_eq!(entry.value(), "Y");
        assert_eq!(resolution, Resolution::Exact);
    }

    #[test]
    fn test_substring_pass_used_when_no_exact_match() {
        let e = entries(&[("Key Claims (front pack)", "Dermatologically tested")]);
        let (entry, resolution) = resolve_aliases(&e, &["Claims"]).unwrap();
        assert_eq!(entry.value(), "Dermatologically tested");
        assert_eq!(resolution, Resolution::Substring);
    }

    #[test]
    fn test_exact_match_skips_empty_values() {
        let e = entries(&[("Claims", ""), ("Claims", "Paraben free")]);
        let (entry, _) = resolve_aliases(&e, &["Claims"]).unwrap();
        assert_eq!(entry.value(), "Paraben free");
    }

    #[test]
    fn test_alias_priority_before_sheet_order() {
        let e = entries(&[("How to use", "later alias"), ("HOW TO USE IT?", "first alias")]);
        let (entry, _) = resolve_aliases(&e, CanonicalField::HowToUse.aliases()).unwrap();
        assert_eq!(entry.value(), "first alias");
    }

    #[test]
    fn test_first_in_sheet_order_wins_for_same_alias() {
        let e = entries(&[("mrp", "499"), ("MRP", "599")]);
        let (entry, _) = resolve_aliases(&e, &["MRP"]).unwrap();
        assert_eq!(entry.value(), "499");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let record = normalize(pairs(&[("product name", "Beard Oil"), ("x", "y")])).unwrap();
        assert_eq!(record.get(CanonicalField::ProductName), "Beard Oil");
    }

    #[test]
    fn test_nan_token_treated_as_empty() {
        let record = normalize(pairs(&[("Claims", "nan"), ("Product Name", "Serum")])).unwrap();
        assert_eq!(record.get(CanonicalField::Claims), "Not specified");
        assert!(record.field(CanonicalField::Claims).is_unset());
    }

    #[test]
    fn test_cleaning_drops_blank_labels() {
        let e = entries(&[("", "orphan"), ("  ", ""), ("nan", "value"), ("Claims", "ok")]);
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].label(), "Claims");
    }

    #[test]
    fn test_all_blank_rows_is_an_error() {
        let err = normalize(pairs(&[("", ""), ("  ", "nan")])).unwrap_err();
        assert!(matches!(err, SheetError::NoEntries));
    }

    #[test]
    fn test_every_field_resolved() {
        let record = normalize(pairs(&[("Product Name", "Serum")])).unwrap();
        for field in CanonicalField::ALL {
            let resolved = record.field(field);
            if field != CanonicalField::ProductName {
                assert!(resolved.is_unset(), "{} should be unset", field.key());
                assert_eq!(resolved.value, field.default_value());
            }
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let rows = pairs(&[
            ("Product Name", "Trimmer"),
            ("Category", "Electronics"),
            ("Box Includes", "Trimmer, cable"),
        ]);
        let a = normalize(rows.clone()).unwrap();
        let b = normalize(rows).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overrides_replace_category_and_brand() {
        let mut record = normalize(pairs(&[("Category", "Skin care"), ("Brand Name", "urban yog")])).unwrap();
        record.override_category("Beauty");
        record.override_brand_name("Urban Yog");
        assert_eq!(record.get(CanonicalField::Category), "Beauty");
        assert_eq!(record.get(CanonicalField::BrandName), "Urban Yog");
        assert_eq!(
            record.field(CanonicalField::BrandName).resolution,
            Resolution::UserOverride
        );
    }

    #[test]
    fn test_prompt_value_renders_empty_default_as_na() {
        let record = normalize(pairs(&[("Product Name", "Serum")])).unwrap();
        assert_eq!(record.prompt_value(CanonicalField::Warranty), "N/A");
        assert_eq!(record.prompt_value(CanonicalField::Claims), "Not specified");
    }

    #[test]
    fn test_display_rows_hide_unset_values() {
        let record = normalize(pairs(&[("Product Name", "Serum")])).unwrap();
        let rows = record.display_rows();
        assert!(rows.contains(&("Product Name", "Serum")));
        assert!(rows.contains(&("Category", "Beauty")));
        assert!(!rows.iter().any(|(_, v)| *v == "Not specified"));
    }
}
