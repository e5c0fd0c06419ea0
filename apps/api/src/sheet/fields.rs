//! Canonical product fields and the alias table used to find them in a KLD sheet.
//!
//! Aliases are ordered most-specific first. The table is the single place that
//! decides which sheet labels feed which field; the normalizer never matches
//! label strings on its own.

use serde::{Deserialize, Serialize};

/// Default for fields a listing cannot do without.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Category default when the sheet carries no category label at all.
const DEFAULT_CATEGORY: &str = "Beauty";

/// The fixed set of attributes a ProductRecord always carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    ProductName,
    BrandName,
    UspsFront,
    UspBack,
    UspSide,
    Ingredients,
    Claims,
    HowToUse,
    Mrp,
    Category,
    TargetAudience,
    Gender,
    KnowYourProduct,
    NetQty,
    CountryOfOrigin,
    MarketedBy,
    Email,
    Contact,
    BoxIncludes,
    Warranty,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 20] = [
        CanonicalField::ProductName,
        CanonicalField::BrandName,
        CanonicalField::UspsFront,
        CanonicalField::UspBack,
        CanonicalField::UspSide,
        CanonicalField::Ingredients,
        CanonicalField::Claims,
        CanonicalField::HowToUse,
        CanonicalField::Mrp,
        CanonicalField::Category,
        CanonicalField::TargetAudience,
        CanonicalField::Gender,
        CanonicalField::KnowYourProduct,
        CanonicalField::NetQty,
        CanonicalField::CountryOfOrigin,
        CanonicalField::MarketedBy,
        CanonicalField::Email,
        CanonicalField::Contact,
        CanonicalField::BoxIncludes,
        CanonicalField::Warranty,
    ];

    /// Snake-case key, also used as the `{placeholder}` name in prompt templates.
    pub fn key(self) -> &'static str {
        match self {
            CanonicalField::ProductName => "product_name",
            CanonicalField::BrandName => "brand_name",
            CanonicalField::UspsFront => "usps_front",
            CanonicalField::UspBack => "usp_back",
            CanonicalField::UspSide => "usp_side",
            CanonicalField::Ingredients => "ingredients",
            CanonicalField::Claims => "claims",
            CanonicalField::HowToUse => "how_to_use",
            CanonicalField::Mrp => "mrp",
            CanonicalField::Category => "category",
            CanonicalField::TargetAudience => "target_audience",
            CanonicalField::Gender => "gender",
            CanonicalField::KnowYourProduct => "know_your_product",
            CanonicalField::NetQty => "net_qty",
            CanonicalField::CountryOfOrigin => "country_of_origin",
            CanonicalField::MarketedBy => "marketed_by",
            CanonicalField::Email => "email",
            CanonicalField::Contact => "contact",
            CanonicalField::BoxIncludes => "box_includes",
            CanonicalField::Warranty => "warranty",
        }
    }

    /// Human-readable label for the product-information view.
    pub fn label(self) -> &'static str {
        match self {
            CanonicalField::ProductName => "Product Name",
            CanonicalField::BrandName => "Brand Name",
            CanonicalField::UspsFront => "USPs Front",
            CanonicalField::UspBack => "USP Back",
            CanonicalField::UspSide => "USP Side",
            CanonicalField::Ingredients => "Ingredients",
            CanonicalField::Claims => "Claims",
            CanonicalField::HowToUse => "How to use it?",
            CanonicalField::Mrp => "MRP (Incl. of all taxes)",
            CanonicalField::Category => "Category",
            CanonicalField::TargetAudience => "Target Audience",
            CanonicalField::Gender => "Gender",
            CanonicalField::KnowYourProduct => "Know Your Product",
            CanonicalField::NetQty => "Net Qty.",
            CanonicalField::CountryOfOrigin => "Country Of Origin",
            CanonicalField::MarketedBy => "Brand Owned & Marketed By",
            CanonicalField::Email => "Email",
            CanonicalField::Contact => "Contact Us",
            CanonicalField::BoxIncludes => "Box Includes",
            CanonicalField::Warranty => "Warranty",
        }
    }

    /// Candidate sheet labels, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            CanonicalField::ProductName => &["Product Name"],
            CanonicalField::BrandName => &["Brand Name"],
            CanonicalField::UspsFront => &["USPs Front", "USP Front"],
            CanonicalField::UspBack => &["USP Back"],
            CanonicalField::UspSide => &["USP Side"],
            CanonicalField::Ingredients => &["INGREDIENTS", "Ingredients"],
            CanonicalField::Claims => &["Claims"],
            CanonicalField::HowToUse => &["HOW TO USE IT?", "HOW TO USE", "How to use it?", "How to use"],
            CanonicalField::Mrp => &["MRP (Incl. of all taxes)", "MRP"],
            CanonicalField::Category => &["Category", "Product Type", "Application Area"],
            CanonicalField::TargetAudience => &["Target Audience", "Ideal For"],
            CanonicalField::Gender => &["Gender", "Suitable For"],
            CanonicalField::KnowYourProduct => &["KNOW YOUR PRODUCT", "Know Your Product"],
            CanonicalField::NetQty => &["Net Qty.", "Net Qty", "Net Quantity"],
            CanonicalField::CountryOfOrigin => &["Country Of Origin", "Country of Origin"],
            CanonicalField::MarketedBy => &[
                "BRAND OWNED & MARKETED BY",
                "Brand Owned & Marketed By",
                "Marketed By",
            ],
            CanonicalField::Email => &["EMAIL", "Email", "E-mail"],
            CanonicalField::Contact => &["CONTACT US", "Contact Us", "Contact"],
            CanonicalField::BoxIncludes => &[
                "BOX INCLUDES",
                "Box Includes",
                "Box includes",
                "What's in the box",
            ],
            CanonicalField::Warranty => &["WARRANTY", "Warranty", "Warrenty"],
        }
    }

    /// Value the field takes when no alias matched a non-empty entry.
    pub fn default_value(self) -> &'static str {
        match self {
            CanonicalField::ProductName
            | CanonicalField::BrandName
            | CanonicalField::UspsFront
            | CanonicalField::UspBack
            | CanonicalField::Ingredients
            | CanonicalField::Claims
            | CanonicalField::HowToUse
            | CanonicalField::Mrp => NOT_SPECIFIED,
            CanonicalField::Category => DEFAULT_CATEGORY,
            _ => "",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}
