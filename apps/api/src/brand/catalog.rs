//! Brand catalog: static registry of house brands and their tonality guidelines.
//!
//! Read-only after startup. A name that resolves to no brand is not an error:
//! callers fall back to the generic copywriter voice.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandId {
    MakeMeeBold,
    UrbanYog,
    UrbanGabru,
    Seoulskin,
}

#[derive(Debug, Serialize)]
pub struct Brand {
    pub id: BrandId,
    /// Canonical display name.
    pub name: &'static str,
    pub tonality: &'static str,
    /// Normalized spelling variants (lowercase, single-spaced).
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

const MAKEMEEBOLD_TONALITY: &str = "\
Confident, not cocky: Customers are sure about our products because they work, not because of overselling.
Modern & aspirational: Sleek, smart, and relevant to today's beauty consumer; informed but not clinical.
Empowering: Encourages self-expression, not perfection. The name itself speaks to inner and outer confidence.
Clean & refined: Language is crisp and minimal, avoiding clutter or fluff.
Contemporary feminine: It's a women-focused brand, however it is gender-neutral enough to feel inclusive, but still elegant and aspirational.
Results-oriented: clear about efficacy, with evidence, or focus on USPs";

const URBAN_YOG_TONALITY: &str = "\
Playful, not pretentious: Skincare is fun and expressive; never boring or overly serious
Relatable, not preachy: Speaks like a best-friend who gets it - conversational, and easy to connect with
Bold & unapologetic: owns topics that others avoid such as body hair, acne, etc with confidence, humour and zero shame.
Yummy & sensory: language is colourful & indulgent - textures, adjectives, scents, and visuals that make skincare feel like a treat
Youthful & vibrant: fresh, pop-culture-driven, socially fluent, resonates with Gen Z and young millenials
Witty & confident: Uses playful quips & puns sometimes, that add spunk & personality without losing meaning or clarity.
Miniso, cutesy vibes: The brand gives off a miniso-esque, cutesy vibe";

const URBAN_GABRU_TONALITY: &str = "\
Confident, not arrogant: Speaks to men who take charge of their lives; ambitious, self-assured, and results-driven.
Sharp & modern: Sleek, innovative, and tuned to the needs of the contemporary Indian man.
Empowering & aspirational: Encourages self-improvement and personal growth; grooming is positioned as the start of greatness, not the end goal.
Practical & purposeful: Clear, direct messaging that communicates product efficacy and everyday relevance, built to support hustle, fitness, and professional ambitions.
Masculine, yet approachable: Maintains a strong, confident tone without being intimidating; relatable to men from all walks of life.
Dynamic & motivating: Language inspires action and upward momentum.
Premium & credible: the brand positions itself as a premium and credible brand with authenticity and trustworthiness.
To-the-point: Clearly defined USPs and no extra fluff just the way most men communicate.";

const SEOULSKIN_TONALITY: &str = "\
Calm, not flashy: Focuses on simplicity and serenity, avoiding hype and quick-fix messaging.
Consistent & reliable: Emphasizes long-term results and daily rituals, positioning the brand as a trustworthy skincare companion.
Purposeful & minimal: Every product and message is intentional; no clutter, no unnecessary complexity, only what truly benefits the skin.
Gentle & nurturing: Soft, caring language conveys comfort and reassurance, appealing to those seeking mindful self-care.
Authentic & credible: Rooted in the principles of Korean skincare, the brand communicates expertise without being clinical or intimidating.
Sophisticated & understated: Elegant, refined, and approachable; appeals to consumers who value quality and efficacy over trends.
Mindful & reassuring: Speaks to the desire for slow, consistent care, emphasizing trust, comfort, and skin confidence.";

static BRANDS: [Brand; 4] = [
    Brand {
        id: BrandId::MakeMeeBold,
        name: "MakeMeeBold",
        tonality: MAKEMEEBOLD_TONALITY,
        aliases: &["makemeebold", "make mee bold", "makemebold", "make me bold", "make-mee-bold"],
    },
    Brand {
        id: BrandId::UrbanYog,
        name: "Urban Yog",
        tonality: URBAN_YOG_TONALITY,
        aliases: &["urban yog", "urbanyog", "urban-yog", "urban yogg"],
    },
    Brand {
        id: BrandId::UrbanGabru,
        name: "Urban Gabru",
        tonality: URBAN_GABRU_TONALITY,
        aliases: &["urban gabru", "urbangabru", "urban-gabru", "urban gabroo", "urbangabroo"],
    },
    Brand {
        id: BrandId::Seoulskin,
        name: "Seoulskin",
        tonality: SEOULSKIN_TONALITY,
        aliases: &["seoulskin", "seoul skin", "seoul-skin", "seoulskins"],
    },
];

/// Lowercases and collapses runs of whitespace to a single space.
fn clean_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn without_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct BrandCatalog {
    brands: &'static [Brand],
}

impl Default for BrandCatalog {
    fn default() -> Self {
        Self { brands: &BRANDS }
    }
}

impl BrandCatalog {
    pub fn brands(&self) -> &'static [Brand] {
        self.brands
    }

    #[cfg(test)]
    pub fn get(&self, id: BrandId) -> Option<&'static Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    /// Resolves a free-text brand name to a canonical brand.
    ///
    /// Order: alias table on the cleaned name, then canonical names compared
    /// exactly or with all spaces removed.
    pub fn normalize(&self, raw_name: &str) -> Option<&'static Brand> {
        let cleaned = clean_name(raw_name);
        if cleaned.is_empty() {
            return None;
        }
        let compact = without_spaces(&cleaned);

        let by_alias = self.brands.iter().find(|b| {
            b.aliases
                .iter()
                .any(|&alias| alias == cleaned || without_spaces(alias) == compact)
        });
        if by_alias.is_some() {
            return by_alias;
        }

        self.brands.iter().find(|b| {
            let name = b.name.to_lowercase();
            name == cleaned || without_spaces(&name) == compact
        })
    }

    /// Best guess used only to pre-select a brand for the user: normalize first,
    /// then the first canonical name contained in the raw text.
    pub fn detect(&self, raw: &str) -> Option<&'static Brand> {
        if let Some(brand) = self.normalize(raw) {
            return Some(brand);
        }
        let compact = without_spaces(&clean_name(raw));
        if compact.is_empty() {
            return None;
        }
        self.brands
            .iter()
            .find(|b| compact.contains(&without_spaces(&b.name.to_lowercase())))
    }
}
