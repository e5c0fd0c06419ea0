// All LLM prompt constants for listing generation.
//
// Placeholders use `{name}`: every canonical field key (`{product_name}`,
// `{usps_front}`, ...) plus the builder-supplied `{keyword_clause}`,
// `{review_block}`, `{title_min_chars}`, and `{plain_text_rule}`.
// Beauty and Electronics templates are separate families; neither is derived
// from the other.

/// Persona sentence every system instruction starts with.
pub const COPYWRITER_PERSONA: &str = "You are a professional ecommerce copywriter.";

/// Appended to the system instruction when the brand resolves.
/// Replace: {brand}, {tonality}
pub const BRAND_TONE_BLOCK: &str = "\n\nIMPORTANT - BRAND TONE & VOICE:\n\
You are writing for the brand '{brand}'. Follow this brand tonality strictly:\n\n\
{tonality}\n\n\
Ensure all content reflects this brand's personality, tone, and style.";

pub const PLAIN_TEXT_RULE: &str = "IMPORTANT: Provide the output in plain text format only. \
Do NOT use markdown syntax like **, ##, ___ or bullet points with *. \
Use simple numbered lists, dashes, and plain text.";

/// Keyword clause when the user supplied keywords. Replace: {keywords}
pub const KEYWORDS_REQUIRED: &str = "SEO KEYWORDS (MANDATORY): The following keywords MUST appear naturally in the text: {keywords}. \
Work every keyword in at least once, without keyword stuffing or breaking readability.";

pub const KEYWORDS_GENERIC: &str =
    "SEO KEYWORDS: Use generic high-value keywords that shoppers search for in this product category.";

// ────────────────────────────────────────────────────────────────────────────
// Amazon
// ────────────────────────────────────────────────────────────────────────────

pub const TITLE_BEAUTY: &str = r#"Write an Amazon product title for a high-converting beauty listing.
The title MUST be at least {title_min_chars} characters long.
Use this format: Brand + Product Type + Key Ingredient + Skin/Hair Concern + Claims.
Do not include size, weight, or volume in the title.

{keyword_clause}

Product: {product_name}
Brand: {brand_name}
USPs: {usps_front}
Ingredients: {ingredients}
Claims: {claims}
Target Audience: {target_audience}"#;

pub const TITLE_ELECTRONICS: &str = r#"Write an Amazon product title for a high-converting electronics listing.
The title MUST be at least {title_min_chars} characters long.
Use this format: Brand + Product Type + Key Feature + Technical Highlights (power, runtime, settings) + Use Case.
Do not include price or warranty terms in the title.

{keyword_clause}

Product: {product_name}
Brand: {brand_name}
Main Features: {usps_front}
Other Features: {usp_back}
Claims: {claims}
Box Includes: {box_includes}"#;

pub const BULLETS: &str = r#"Write 7 optimized Amazon bullet points. Each bullet should follow this format:
BENEFIT IN CAPS: Followed by a clear, compelling benefit (250-300 characters).

Avoid mentioning price, value for money, discounts, or any numerical cost-related details. Focus only on features, results, usage, or ingredient benefits.

{keyword_clause}

Product: {product_name}
Brand: {brand_name}
USPs: {usps_front}, {usp_back}, {usp_side}
Ingredients: {ingredients}
Claims: {claims}
How to Use: {how_to_use}"#;

pub const DESCRIPTION: &str = r#"Write an Amazon HTML product description (max 400 words).
Use 2 paragraphs, <p> and <br> tags for light formatting.

{keyword_clause}

Product: {product_name}
Brand: {brand_name}
USPs: {usps_front}
Ingredients: {ingredients}
Claims: {claims}
How to Use: {how_to_use}"#;

pub const SHOPIFY_DESCRIPTION: &str = r#"Write a Shopify product description using a friendly, informative tone.
Include small paragraphs, bullet points, and headings. Length: 1500-2000 characters.

IMPORTANT: Do NOT use markdown formatting. Use plain text only.
- Do not use ** for bold
- Do not use # for headings
- Use simple text formatting only

{keyword_clause}

Product: {product_name}
Brand: {brand_name}
USPs: {usps_front}
Ingredients: {ingredients}
Claims: {claims}
How to Use: {how_to_use}
MRP: {mrp}"#;

// ────────────────────────────────────────────────────────────────────────────
// Image prompts
// ────────────────────────────────────────────────────────────────────────────

pub const HERO_BEAUTY: &str = r#"Generate a series of 7 hero image prompts for a beauty product, each designed to be a standalone visual in the following sequence.
Each image must be exactly 1500 x 1500 pixels. For each image, include specific visual/creative directions as outlined.

{plain_text_rule}

1. Hero Image: What does it do / Differentiation / Before-After
- Show the product with a clear before-and-after comparison, highlighting the main benefit or transformation.
- Use high-resolution, professional imagery with a clean, softly colored, on-brand background.
- Overlay concise benefit-driven text or icons.
- Ensure the product is the main focal point.

2. USP
- Focus on the unique selling proposition that sets this product apart.
- Use bold text or a badge to highlight the USP.
- Incorporate lifestyle or in-use imagery for emotional connection.

3. Ingredients & Their Use
- Visually showcase key ingredients with small icons or illustrations.
- Briefly mention each ingredient's benefit.
- Use a soft, inviting color palette.

4. Science Behind USP
- Include science-related visuals (molecules, lab glassware, dermatologist icons) to reinforce efficacy.
- Overlay a short, clear explanation of the science behind the USP.

5. Comparison / Do's and Don'ts
- Create a side-by-side comparison with alternatives or a clear Do's and Don'ts visual.
- Use simple icons and minimal text for clarity.

6. How to Use
- Present step-by-step usage instructions in 3-4 crisp, numbered icons or steps.
- Keep instructions short, clear, and visually engaging.

7. Safe for All Hair/Skin Types
- Use icons or imagery showing diversity in models (different skin/hair types).
- Add a clear statement or badge indicating suitability for all skin types.

General Visual/Creative Directions for All Images:
- Each image must be exactly 1500 x 1500 pixels.
- Clean, uncluttered, on-brand backgrounds; consistent style, color palette, and font.
- Optimize for both desktop and mobile screens.
- Do not include any call-to-action (CTA) buttons.
- Feature models where appropriate, ensuring diversity in skin and hair types.
- Use professional lighting (softboxes, ring lights) for soft, even illumination.
- Ensure the product is always the main focal point.

Product details:
Product: {product_name}
USP: {usps_front}
Ingredients: {ingredients}
How to use: {how_to_use}
Target: {target_audience}
Other details: {know_your_product}"#;

pub const HERO_ELECTRONICS: &str = r#"Generate a series of 7 hero image prompts for an electronics product, each designed to be a standalone visual in the following sequence.
Each image must be exactly 1500 x 1500 pixels. For each image, include specific visual/creative directions as outlined.

{plain_text_rule}

1. Hero Image: What does it do / Differentiation / Before-After
- Show the product in action or with a before-and-after or comparison visual.
- Use high-resolution, professional imagery with a clean, on-brand background.
- Overlay concise benefit-driven text or icons.

2. Main USP
- Highlight the primary unique selling point with bold text or a badge.
- Use dynamic angles and close-ups to draw attention.

3. Other USPs
- Present additional features with icons or short text.
- Arrange features for easy scanning.

4. Comparison
- Create a side-by-side comparison with other products or brands.
- Use simple graphics and minimal text.

5. How to Use
- Show 2-4 easy-to-follow steps or icons for product usage.
- Keep instructions short and visually engaging.

6. Specs & Build
- Call out motor, battery, runtime, charging, and material details with clean iconography.
- Use exploded or cut-away views where they explain the engineering.

7. What's in the Box / Customer Care
- Display all included accessories in a neat flat-lay or organized arrangement.
- Add customer care contact or warranty info in a clear, non-intrusive way.

General Visual/Creative Directions for All Images:
- Each image must be exactly 1500 x 1500 pixels.
- Clean, uncluttered, on-brand backgrounds; consistent style, color palette, and font.
- Optimize for both desktop and mobile screens.
- Do not include any call-to-action (CTA) buttons.
- Feature models where appropriate (e.g., for scale or lifestyle context).
- Use professional lighting to show finish and texture of the device without glare.
- Ensure the product is always the main focal point.

Product details:
Product: {product_name}
Main USP: {usps_front}
Other USPs: {usp_back}
How to use: {how_to_use}
Box includes: {box_includes}
Warranty: {warranty}
Customer care: {contact}
Other details: {know_your_product}"#;

pub const A_PLUS_BEAUTY: &str = r#"Generate 7 Amazon A+ content image prompts for a beauty product in this format:

Image N:
- Visual: 1464x600 (desktop) / 600x450 (mobile). Clean layout, brand, benefits.
- Text: Marketing headline
- Supporting Text: Short supporting copy

Cover these modules in order:
1. Brand story and product hero
2. Key benefit with texture close-up
3. Hero ingredients and what each does
4. Clinical or dermatological claims
5. Routine: where the product fits (AM/PM)
6. How to apply
7. Results and suitability

{plain_text_rule}

Product: {product_name}
USPs: {usps_front}
How to Use: {how_to_use}
Claims: {claims}
Ingredients: {ingredients}"#;

pub const A_PLUS_ELECTRONICS: &str = r#"Generate 7 Amazon A+ content image prompts for an electronics product in this format:

Image N:
- Visual: 1464x600 (desktop) / 600x450 (mobile). Clean layout, brand, benefits.
- Text: Marketing headline
- Supporting Text: Short supporting copy

Cover these modules in order:
1. Brand story and product hero
2. Main feature in action
3. Technical specifications table
4. Comparison chart against previous model or alternatives
5. Setup and how to use
6. What's in the box
7. Warranty and customer care

{plain_text_rule}

Product: {product_name}
Features: {usps_front}
Other Features: {usp_back}
How to Use: {how_to_use}
Claims: {claims}
Box Includes: {box_includes}
Warranty: {warranty}"#;

// ────────────────────────────────────────────────────────────────────────────
// Website
// ────────────────────────────────────────────────────────────────────────────

pub const WEB_BULLETS: &str = r#"Write 7 bullet points for website use. Each point should focus on product benefits, customer problems, or emotional triggers.

{plain_text_rule}

Product: {product_name}
USPs: {usps_front}"#;

pub const WEB_DESCRIPTION_BEAUTY: &str = r#"Write a product description for the website (max 400 words). Use a warm, benefit-oriented tone and structure it with two paragraphs.
Include brand credibility information naturally in the content.

Product: {product_name}
Brand: {brand_name}
USPs: {usps_front}
Claims: {claims}
Ingredients: {ingredients}
Brand Owned & Marketed By: {marketed_by}
Country of Origin: {country_of_origin}"#;

pub const WEB_DESCRIPTION_ELECTRONICS: &str = r#"Write a product description for the website (max 400 words). Use a warm, benefit-oriented tone and structure it with two paragraphs.
Include brand credibility information naturally in the content.

After the main description, add two additional sections:
1. "What's in the Box" - List all items included as bullet points (one item per line with a dash)
2. "Warranty Information" - Include warranty details

Product: {product_name}
Brand: {brand_name}
USPs: {usps_front}
Claims: {claims}
Brand Owned & Marketed By: {marketed_by}
Country of Origin: {country_of_origin}
Box Includes: {box_includes}
Warranty: {warranty}"#;

pub const USP: &str = r#"Generate exactly 6 concise USPs for a product listing.
Guidelines:
- Each USP must be a short, impactful phrase of 2-4 words.
- Do not include full sentences.
- Do not include explanations.
- Format strictly as a bullet list like:
- Frizz-control Formula
- Lightweight & Non-Greasy
- Safe for Daily Use

Product: {product_name}
USPs: {usps_front}"#;

pub const QUANTITY_BEAUTY: &str = r#"Describe what the customer will receive when they purchase the product. Mention packaging, quantity, and any bonuses.
Keep it to 2-3 short sentences and mention how long the pack lasts with regular use if it can be inferred.

Product: {product_name}
Net Quantity: {net_qty}"#;

pub const QUANTITY_ELECTRONICS: &str = r#"Describe what the customer will receive in the box when they purchase the product.
List every item included (device, attachments, cables, manuals) as a dash list, then one sentence on the warranty cover.

Product: {product_name}
Box Includes: {box_includes}
Net Quantity: {net_qty}
Warranty: {warranty}"#;

pub const HOW_TO_USE_BEAUTY: &str = r#"Describe how to use this product step-by-step in a friendly, instructional tone.
Cover skin or hair preparation, amount to apply, application technique, and how often to use it.

Product: {product_name}
Instructions: {how_to_use}"#;

pub const HOW_TO_USE_ELECTRONICS: &str = r#"Describe how to use this device step-by-step in a friendly, instructional tone.
Cover first-time charging or setup, operating the controls, cleaning and maintenance, and storage.

Product: {product_name}
Instructions: {how_to_use}
Box Includes: {box_includes}"#;

pub const FAQS_BEAUTY: &str = r#"Write 6 frequently asked questions and concise answers for this beauty product listing.
Guidelines:
- Do NOT include questions about certifications, result timelines, or return/refund policies.
- Avoid questions like "What is it?" or "How do I use it?" since those are covered elsewhere.
- Focus on skin or hair type compatibility, layering with other products, patch testing, storage, frequency, and common customer concerns.
- Keep answers under 150 characters.
- Do not mention price, promotions, or other brands.

{keyword_clause}

Product: {product_name}
Key Features: {usps_front}
Ingredients: {ingredients}
How to Use: {how_to_use}"#;

pub const FAQS_ELECTRONICS: &str = r#"Write 6 frequently asked questions and concise answers for this electronics product listing.
Guidelines:
- Do NOT include questions about certifications or return/refund policies.
- Avoid questions like "What is it?" or "How do I use it?" since those are covered elsewhere.
- Focus on battery and charging, compatibility, safety in use, cleaning, warranty claims, and durability.
- Keep answers under 150 characters.
- Do not mention price, promotions, or other brands.

{keyword_clause}

Product: {product_name}
Key Features: {usps_front}
Box Includes: {box_includes}
Warranty: {warranty}
How to Use: {how_to_use}"#;

pub const REVIEWS: &str = r#"Write {review_total} customer reviews for this product.

{review_block}

EXAMPLES OF HINGLISH STYLE TO FOLLOW:
- "First time use kiya aur fark dikh raha h, mujhe acha laga ye product"
- "pehli baar try kiya aur accha laga, mujhe lagta h regular use se aur best result milega"
- "Feels premium from the first use, the quality is exactly what I was hoping for."

{plain_text_rule} Write the reviewer name followed by their review, separated by " - ".

Product: {product_name}
Brand: {brand_name}
Key Features: {usps_front}"#;

pub const BRAND_INFO: &str = r#"Generate a professional brand and contact information section for the website footer.
Format it in a clean, easy-to-read structure suitable for a website.
Include:
- Brand ownership and marketing information
- Country of origin
- Customer support contact details
- Email address

Make it concise, professional, and customer-friendly.

Brand: {brand_name}
Brand Owned & Marketed By: {marketed_by}
Country of Origin: {country_of_origin}
Email: {email}
Contact: {contact}"#;

pub const FULL_SITE_BEAUTY: &str = r#"Generate the following website content in a structured format:

1. 7 Bullet Points - focus on customer benefits, pain points, or product uniqueness.
2. Description - 2 paragraphs, warm and benefit-driven tone, max 400 words.
3. USP Points - concise value-driven phrases (2-4 words each).
4. What do you get - brief explanation of what comes in the package.
5. How to use - easy-to-follow, friendly, step-by-step instructions.
6. 6 FAQs - with short, helpful answers about skin or hair compatibility and routine.
7. {review_block}
8. Brand & Contact Information - Include brand ownership, country of origin, contact details.

{plain_text_rule}

Product Name: {product_name}
Brand: {brand_name}
USPs / Features: {usps_front}
Ingredients: {ingredients}
Claims: {claims}
How to Use: {how_to_use}
MRP: {mrp}
Net Quantity: {net_qty}
Brand Owned & Marketed By: {marketed_by}
Country of Origin: {country_of_origin}
Email: {email}
Contact: {contact}"#;

pub const FULL_SITE_ELECTRONICS: &str = r#"Generate the following website content in a structured format:

1. 7 Bullet Points - focus on customer benefits, pain points, or product uniqueness.
2. Description - 2 paragraphs, warm and benefit-driven tone, max 400 words.
   After the description, add a "What's in the Box" section with items listed one per line with a dash,
   followed by a "Warranty Information" section.
3. USP Points - concise value-driven phrases (2-4 words each).
4. What do you get - brief explanation of what comes in the package.
5. How to use - setup, operation, cleaning and charging steps.
6. 6 FAQs - with short, helpful answers about battery, compatibility, and warranty.
7. {review_block}
8. Brand & Contact Information - Include brand ownership, country of origin, contact details.

{plain_text_rule}

Product Name: {product_name}
Brand: {brand_name}
USPs / Features: {usps_front}
Claims: {claims}
How to Use: {how_to_use}
MRP: {mrp}
Brand Owned & Marketed By: {marketed_by}
Country of Origin: {country_of_origin}
Email: {email}
Contact: {contact}
Box Includes: {box_includes}
Warranty: {warranty}"#;

// ────────────────────────────────────────────────────────────────────────────
// Keyword suggestion (structured output)
// ────────────────────────────────────────────────────────────────────────────

pub const KEYWORD_SYSTEM: &str = "You are an Amazon SEO specialist for the Indian marketplace. \
You MUST respond with a valid JSON object only. \
Do NOT include any text outside the JSON object.";

/// Replace: {category}, {product_name}, {brand_name}, {usps_front}, {ingredients}, {claims}
pub const KEYWORD_PROMPT: &str = r#"Suggest 15 high-intent Amazon search keywords for this {category} product.

Return a JSON object with this EXACT schema:
{
  "keywords": [
    {"keyword": "vitamin c face serum", "type": "short-tail", "search_intent": "commercial"}
  ]
}

Rules:
- "type" is one of: "short-tail", "long-tail", "generic", "brand".
- "search_intent" is one of: "commercial", "transactional", "informational".
- Use phrases real shoppers type; lowercase; no duplicates.

Product: {product_name}
Brand: {brand_name}
USPs: {usps_front}
Ingredients: {ingredients}
Claims: {claims}"#;
