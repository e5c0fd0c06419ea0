//! Review policy: decides the language mix, reviewer genders, and tone for the
//! 15 generated customer reviews.
//!
//! Pure function of (brand, category, gender text). Every policy writes exactly
//! `REVIEW_COUNT` reviews, the first `LONG_FORM_REVIEWS` of them long-form, with
//! one gift-use review and one comparison-to-alternative review.
//!
//! Unisex detection is a plain substring check, so "women" alone also contains
//! "men" and reads as unisex. Sheets that say "Women" get the unisex split.

use serde::Serialize;

use crate::brand::catalog::BrandId;
use crate::models::category::Category;

pub const REVIEW_COUNT: u8 = 15;
pub const LONG_FORM_REVIEWS: u8 = 2;

/// Which language style each review is written in. Counts always sum to `REVIEW_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageSplit {
    pub english: u8,
    pub hinglish: u8,
}

/// Reviewer persona genders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewerGenders {
    Split { female: u8, male: u8 },
    AllMale,
    /// No gender signal: leave personas to the model.
    Unspecified,
}

/// Audience gender as read from the free-text gender field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceGender {
    Unisex,
    Unknown,
}

/// Case-insensitive substring check: "unisex", "men" with "women", or "male"
/// with "female" means unisex. Anything else carries no gender signal.
pub fn detect_audience(gender_text: &str) -> AudienceGender {
    let lower = gender_text.to_lowercase();
    let unisex = lower.contains("unisex")
        || (lower.contains("men") && lower.contains("women"))
        || (lower.contains("male") && lower.contains("female"));
    if unisex {
        AudienceGender::Unisex
    } else {
        AudienceGender::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewPolicy {
    /// Short policy name, shown in prompts and logs.
    pub name: &'static str,
    pub total: u8,
    pub long_form: u8,
    pub language: LanguageSplit,
    pub genders: ReviewerGenders,
    pub audience: AudienceGender,
    pub tone_directives: Vec<&'static str>,
    pub gift_reviews: u8,
    pub comparison_reviews: u8,
}

struct BrandVoice {
    name: &'static str,
    language: LanguageSplit,
    /// (female, male) split used when the audience is unisex.
    unisex_split: (u8, u8),
    male_only: bool,
    directives: &'static [&'static str],
}

fn brand_voice(brand: Option<BrandId>) -> BrandVoice {
    match brand {
        Some(BrandId::MakeMeeBold) => BrandVoice {
            name: "makemeebold_confident",
            language: LanguageSplit { english: 9, hinglish: 6 },
            unisex_split: (12, 3),
            male_only: false,
            directives: &[
                "Confident, results-focused voices; reviewers talk about efficacy, not hype",
                "Crisp, modern phrasing; no exaggerated praise",
            ],
        },
        Some(BrandId::UrbanYog) => BrandVoice {
            name: "urban_yog_playful",
            language: LanguageSplit { english: 5, hinglish: 10 },
            unisex_split: (12, 3),
            male_only: false,
            directives: &[
                "Playful, Gen Z voices with light humour and pop-culture references",
                "Sensory language about texture, scent, and feel",
            ],
        },
        Some(BrandId::UrbanGabru) => BrandVoice {
            name: "urban_gabru_masculine",
            language: LanguageSplit { english: 8, hinglish: 7 },
            unisex_split: (0, 15),
            male_only: true,
            directives: &[
                "Direct, to-the-point male voices: college, gym, office, and daily hustle",
                "Talk about confidence and results without sounding arrogant",
            ],
        },
        Some(BrandId::Seoulskin) => BrandVoice {
            name: "seoulskin_premium_english",
            language: LanguageSplit { english: 12, hinglish: 3 },
            unisex_split: (10, 5),
            male_only: false,
            directives: &[
                "Premium, sophisticated English; emphasize K-beauty rituals and consistency",
                "Keep Hinglish reviews minimal and subtle (e.g. \"bohot acha\", \"mujhe pasand aaya\")",
                "Use refined vocabulary: radiant, luminous, gentle, calming",
            ],
        },
        None => BrandVoice {
            name: "generic_hinglish",
            language: LanguageSplit { english: 2, hinglish: 13 },
            unisex_split: (10, 5),
            male_only: false,
            directives: &[
                "Natural Hinglish (Hindi in Roman script mixed with English) like real Indian customers",
                "Mix casual reviews with a few semi-formal ones",
            ],
        },
    }
}

fn category_directive(category: Category) -> &'static str {
    match category {
        Category::Beauty => {
            "Mention texture, fragrance, skin or hair feel, and visible results over days of use"
        }
        Category::Electronics => {
            "Mention build quality, battery or power, ease of use, and performance over weeks of use"
        }
    }
}

/// Decides the review mix for a brand, category, and free-text gender field.
pub fn review_policy(brand: Option<BrandId>, category: Category, gender_text: &str) -> ReviewPolicy {
    let voice = brand_voice(brand);
    let audience = detect_audience(gender_text);

    let genders = if voice.male_only {
        ReviewerGenders::AllMale
    } else {
        match audience {
            AudienceGender::Unisex => ReviewerGenders::Split {
                female: voice.unisex_split.0,
                male: voice.unisex_split.1,
            },
            AudienceGender::Unknown => ReviewerGenders::Unspecified,
        }
    };

    let mut tone_directives = voice.directives.to_vec();
    tone_directives.push(category_directive(category));
    tone_directives.push("Include realistic observations, not only praise (e.g. \"thoda patience chahiye result ke liye\")");

    ReviewPolicy {
        name: voice.name,
        total: REVIEW_COUNT,
        long_form: LONG_FORM_REVIEWS,
        language: voice.language,
        genders,
        audience,
        tone_directives,
        gift_reviews: 1,
        comparison_reviews: 1,
    }
}
