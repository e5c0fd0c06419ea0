//! Content Request Builder: turns a product record plus the user's selections
//! into one GenerationRequest per section.
//!
//! Template choice is a pure function of (section, category, brand):
//! - category-sensitive sections pick the Beauty or Electronics template family
//! - brand-sensitive sections render the brand's review policy
//! - a resolved brand appends its tonality block to the system instruction
//!
//! Preconditions are checked before anything is assembled: no category → no
//! request; Amazon section without keywords → no request.

use std::borrow::Cow;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::brand::review_policy::{review_policy, ReviewPolicy, ReviewerGenders};
use crate::brand::Brand;
use crate::generation::prompts::*;
use crate::generation::sections::ContentSection;
use crate::models::category::Category;
use crate::sheet::{CanonicalField, ProductRecord};

/// Minimum Amazon title length in characters.
pub const TITLE_MIN_CHARS: usize = 230;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A fully assembled instruction pair for the generation collaborator.
/// Built fresh for every action and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub section: ContentSection,
    pub system_instruction: String,
    pub user_instruction: String,
}

/// A required user selection is missing; the action stays disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Select a product category (Beauty or Electronics) before generating content")]
    CategoryNotSelected,

    #[error("Add SEO keywords before generating the Amazon {0}")]
    KeywordsRequired(ContentSection),
}

/// User-supplied SEO keywords: trimmed, non-empty, case-insensitively unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    /// Parses comma-separated free text.
    pub fn parse(text: &str) -> Self {
        Self::from_items(text.split(','))
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for item in items {
            let keyword = item.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }
            if keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
                continue;
            }
            keywords.push(keyword.to_string());
        }
        Self(keywords)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

pub struct ContentRequestBuilder<'a> {
    record: &'a ProductRecord,
    category: Option<Category>,
    brand: Option<&'static Brand>,
    keywords: &'a KeywordList,
}

impl<'a> ContentRequestBuilder<'a> {
    pub fn new(
        record: &'a ProductRecord,
        category: Option<Category>,
        brand: Option<&'static Brand>,
        keywords: &'a KeywordList,
    ) -> Self {
        Self {
            record,
            category,
            brand,
            keywords,
        }
    }

    /// Checks preconditions, selects the template, and fills every placeholder.
    pub fn build(&self, section: ContentSection) -> Result<GenerationRequest, PreconditionError> {
        let category = self.category.ok_or(PreconditionError::CategoryNotSelected)?;
        if section.is_amazon() && self.keywords.is_empty() {
            return Err(PreconditionError::KeywordsRequired(section));
        }

        let template = select_template(section, category);
        if section.is_category_sensitive() {
            debug!("{section}: using the {category} template");
        }
        let policy = section
            .is_brand_sensitive()
            .then(|| self.review_policy(category));

        let user_instruction = fill_template(template, |name| {
            self.placeholder(name, policy.as_ref())
        });

        Ok(GenerationRequest {
            section,
            system_instruction: self.system_instruction(),
            user_instruction,
        })
    }

    /// Persona sentence plus, when the brand resolved, its tonality block.
    pub fn system_instruction(&self) -> String {
        let mut system = COPYWRITER_PERSONA.to_string();
        if let Some(brand) = self.brand {
            system.push_str(
                &BRAND_TONE_BLOCK
                    .replace("{brand}", brand.name)
                    .replace("{tonality}", brand.tonality),
            );
        }
        system
    }

    pub fn review_policy(&self, category: Category) -> ReviewPolicy {
        review_policy(
            self.brand.map(|b| b.id),
            category,
            self.record.get(CanonicalField::Gender),
        )
    }

    fn keyword_clause(&self) -> String {
        if self.keywords.is_empty() {
            KEYWORDS_GENERIC.to_string()
        } else {
            KEYWORDS_REQUIRED.replace("{keywords}", &self.keywords.as_slice().join(", "))
        }
    }

    fn placeholder(&self, name: &str, policy: Option<&ReviewPolicy>) -> Option<Cow<'a, str>> {
        if let Some(field) = CanonicalField::from_key(name) {
            return Some(Cow::Borrowed(self.record.prompt_value(field)));
        }
        let value = match name {
            "keyword_clause" => self.keyword_clause(),
            "title_min_chars" => TITLE_MIN_CHARS.to_string(),
            "plain_text_rule" => PLAIN_TEXT_RULE.to_string(),
            "review_total" => policy?.total.to_string(),
            "review_block" => render_review_block(policy?),
            _ => return None,
        };
        Some(Cow::Owned(value))
    }
}

fn select_template(section: ContentSection, category: Category) -> &'static str {
    use Category::{Beauty, Electronics};
    use ContentSection as S;

    match (section, category) {
        (S::Title, Beauty) => TITLE_BEAUTY,
        (S::Title, Electronics) => TITLE_ELECTRONICS,
        (S::Bullets, _) => BULLETS,
        (S::Description, _) => DESCRIPTION,
        (S::ShopifyDescription, _) => SHOPIFY_DESCRIPTION,
        (S::HeroPrompts, Beauty) => HERO_BEAUTY,
        (S::HeroPrompts, Electronics) => HERO_ELECTRONICS,
        (S::APlusPrompts, Beauty) => A_PLUS_BEAUTY,
        (S::APlusPrompts, Electronics) => A_PLUS_ELECTRONICS,
        (S::WebBullets, _) => WEB_BULLETS,
        (S::WebDescription, Beauty) => WEB_DESCRIPTION_BEAUTY,
        (S::WebDescription, Electronics) => WEB_DESCRIPTION_ELECTRONICS,
        (S::Usp, _) => USP,
        (S::QuantityBlurb, Beauty) => QUANTITY_BEAUTY,
        (S::QuantityBlurb, Electronics) => QUANTITY_ELECTRONICS,
        (S::HowToUse, Beauty) => HOW_TO_USE_BEAUTY,
        (S::HowToUse, Electronics) => HOW_TO_USE_ELECTRONICS,
        (S::Faqs, Beauty) => FAQS_BEAUTY,
        (S::Faqs, Electronics) => FAQS_ELECTRONICS,
        (S::Reviews, _) => REVIEWS,
        (S::BrandInfo, _) => BRAND_INFO,
        (S::FullSiteBundle, Beauty) => FULL_SITE_BEAUTY,
        (S::FullSiteBundle, Electronics) => FULL_SITE_ELECTRONICS,
    }
}

/// Review instructions: counts, long-form rule, language split, genders,
/// mandatory gift and comparison reviews, then tone directives.
pub fn render_review_block(policy: &ReviewPolicy) -> String {
    let genders = match policy.genders {
        ReviewerGenders::Split { female, male } => {
            format!("{female} reviewers are women and {male} reviewers are men")
        }
        ReviewerGenders::AllMale => format!("All {} reviewers are men", policy.total),
        ReviewerGenders::Unspecified => {
            "Choose reviewer names that suit the product's audience".to_string()
        }
    };

    let mut block = format!(
        "{total} Customer Reviews ({name}):\n\
         - Exactly {total} reviews in total.\n\
         - Reviews 1-{long}: long, story-style testimonials. The remaining {short} reviews are short, each highlighting a different aspect.\n\
         - Language: {english} reviews in premium English and {hinglish} reviews in natural Hinglish (Hindi in Roman script mixed with English).\n\
         - Reviewers: {genders}. Use common Indian names (first name + last name).\n\
         - Exactly {gift} review must describe buying the product as a gift for someone.\n\
         - Exactly {comparison} review must compare the product with an alternative the reviewer used before.\n\
         - Tone:",
        total = policy.total,
        name = policy.name,
        long = policy.long_form,
        short = policy.total - policy.long_form,
        english = policy.language.english,
        hinglish = policy.language.hinglish,
        gift = policy.gift_reviews,
        comparison = policy.comparison_reviews,
    );
    for directive in &policy.tone_directives {
        block.push_str("\n  - ");
        block.push_str(directive);
    }
    block
}

/// Single-pass `{name}` substitution. Unknown names and non-identifier braces
/// (such as JSON examples) are left untouched, and substituted values are never
/// rescanned.
pub fn fill_template<'v, F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<Cow<'v, str>>,
{
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            let is_ident = !name.is_empty()
                && name.chars().all(|c| c.is_ascii_lowercase() || c == '_');
            if !is_ident {
                return None;
            }
            lookup(name).map(|value| (value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(&value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
