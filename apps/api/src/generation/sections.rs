use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One discrete generated artifact of a listing.
///
/// Declaration order is the fixed export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSection {
    Title,
    Bullets,
    Description,
    ShopifyDescription,
    HeroPrompts,
    APlusPrompts,
    WebBullets,
    WebDescription,
    Usp,
    QuantityBlurb,
    HowToUse,
    Faqs,
    Reviews,
    BrandInfo,
    FullSiteBundle,
}

impl ContentSection {
    pub const ALL: [ContentSection; 15] = [
        ContentSection::Title,
        ContentSection::Bullets,
        ContentSection::Description,
        ContentSection::ShopifyDescription,
        ContentSection::HeroPrompts,
        ContentSection::APlusPrompts,
        ContentSection::WebBullets,
        ContentSection::WebDescription,
        ContentSection::Usp,
        ContentSection::QuantityBlurb,
        ContentSection::HowToUse,
        ContentSection::Faqs,
        ContentSection::Reviews,
        ContentSection::BrandInfo,
        ContentSection::FullSiteBundle,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContentSection::Title => "title",
            ContentSection::Bullets => "bullets",
            ContentSection::Description => "description",
            ContentSection::ShopifyDescription => "shopify_description",
            ContentSection::HeroPrompts => "hero_prompts",
            ContentSection::APlusPrompts => "a_plus_prompts",
            ContentSection::WebBullets => "web_bullets",
            ContentSection::WebDescription => "web_description",
            ContentSection::Usp => "usp",
            ContentSection::QuantityBlurb => "quantity_blurb",
            ContentSection::HowToUse => "how_to_use",
            ContentSection::Faqs => "faqs",
            ContentSection::Reviews => "reviews",
            ContentSection::BrandInfo => "brand_info",
            ContentSection::FullSiteBundle => "full_site_bundle",
        }
    }

    /// Heading used in the exported document.
    pub fn heading(self) -> &'static str {
        match self {
            ContentSection::Title => "Product Title",
            ContentSection::Bullets => "Amazon Bullet Points",
            ContentSection::Description => "Amazon Description",
            ContentSection::ShopifyDescription => "Shopify Description",
            ContentSection::HeroPrompts => "Hero Image Prompts",
            ContentSection::APlusPrompts => "A+ Image Prompts",
            ContentSection::WebBullets => "Website Bullet Points",
            ContentSection::WebDescription => "Website Description",
            ContentSection::Usp => "USP",
            ContentSection::QuantityBlurb => "What Do You Get",
            ContentSection::HowToUse => "How to Use",
            ContentSection::Faqs => "FAQs",
            ContentSection::Reviews => "Customer Reviews",
            ContentSection::BrandInfo => "Brand & Contact Information",
            ContentSection::FullSiteBundle => "Full Website Content",
        }
    }

    /// Amazon listing sections; these refuse to generate without a keyword list.
    pub fn is_amazon(self) -> bool {
        matches!(
            self,
            ContentSection::Title | ContentSection::Bullets | ContentSection::Description
        )
    }

    /// Sections whose instruction template differs between Beauty and Electronics.
    pub fn is_category_sensitive(self) -> bool {
        matches!(
            self,
            ContentSection::Title
                | ContentSection::HeroPrompts
                | ContentSection::APlusPrompts
                | ContentSection::WebDescription
                | ContentSection::FullSiteBundle
                | ContentSection::HowToUse
                | ContentSection::QuantityBlurb
                | ContentSection::Faqs
        )
    }

    /// Sections whose instructions depend on the resolved brand's review policy.
    pub fn is_brand_sensitive(self) -> bool {
        matches!(self, ContentSection::Reviews | ContentSection::FullSiteBundle)
    }
}

impl fmt::Display for ContentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContentSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.key() == s)
            .ok_or_else(|| format!("Unknown content section '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for section in ContentSection::ALL {
            assert_eq!(section.key().parse::<ContentSection>().unwrap(), section);
        }
        assert!("web_full".parse::<ContentSection>().is_err());
    }

    #[test]
    fn test_serde_key_matches_key() {
        for section in ContentSection::ALL {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.key()));
        }
    }

    #[test]
    fn test_only_three_amazon_sections() {
        let amazon: Vec<_> = ContentSection::ALL
            .iter()
            .filter(|s| s.is_amazon())
            .collect();
        assert_eq!(
            amazon,
            vec![
                &ContentSection::Title,
                &ContentSection::Bullets,
                &ContentSection::Description
            ]
        );
    }

    #[test]
    fn test_all_is_sorted_in_export_order() {
        let mut sorted = ContentSection::ALL;
        sorted.sort();
        assert_eq!(sorted, ContentSection::ALL);
    }
}
