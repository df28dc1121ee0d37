//! Static keyword tables.
//!
//! Every table is matched with "contains any" against the normalized
//! message. Entries are lower case and use canonical spellings; the
//! normalizer rewrites regional variants before matching. Substring
//! containment is deliberate: "ok" also matches inside "book".

/// Social greetings answered before anything else.
pub const GREETING: &[&str] = &[
    "hello",
    "hey there",
    "hiya",
    "howdy",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
    "g'day",
];

/// "How are you" style questions.
pub const WELLBEING: &[&str] = &[
    "how are you",
    "how are u",
    "how r u",
    "how're you",
    "how's it going",
    "how is it going",
    "how do you do",
    "how have you been",
];

pub const THANKS: &[&str] = &[
    "thanks",
    "thank you",
    "thankyou",
    "cheers",
    "much appreciated",
    "appreciate it",
];

pub const GOODBYE: &[&str] = &[
    "goodbye",
    "bye",
    "see you",
    "see ya",
    "take care",
    "have a good day",
    "have a nice day",
];

/// Answers accepted as "yes" to a pending question.
pub const AFFIRMATIVE: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "sure",
    "ok",
    "okay",
    "definitely",
    "absolutely",
    "of course",
    "please",
    "yup",
];

/// Answers accepted as "no" to a pending question.
pub const NEGATIVE: &[&str] = &[
    "no", "nope", "nah", "not", "don't", "dont", "never", "pass",
];

/// Product-attribute questions, only meaningful on a product page.
pub const PRODUCT_QUESTION: &[&str] = &[
    "material",
    "made from",
    "made of",
    "fabric",
    "color",
    "size",
    "dimension",
    "weight",
    "feature",
    "specification",
    "detail",
    "warranty",
    "this product",
    "this item",
    "how does it",
    "does it have",
    "is it",
    "can it",
];

pub const PRODUCT_MATERIAL: &[&str] = &["material", "made from", "made of", "fabric"];

pub const PRODUCT_SIZE: &[&str] = &["size", "dimension", "measurement"];

/// Collection-scoped questions, only meaningful on a collection page.
pub const COLLECTION_QUESTION: &[&str] = &[
    "popular",
    "best seller",
    "bestseller",
    "top selling",
    "recommend",
    "suggestion",
    "this collection",
    "these products",
    "sort by",
    "filter",
    "price range",
];

pub const COLLECTION_POPULARITY: &[&str] = &["popular", "best seller", "bestseller", "top selling"];

pub const COLLECTION_RECOMMENDATION: &[&str] = &["recommend", "suggestion"];

/// Phrases that turn a message into a product search even without a
/// recognized category.
pub const SEARCH_PATTERNS: &[&str] = &[
    "looking for",
    "need",
    "want",
    "find",
    "search",
    "show me",
    "do you have",
    "any",
];

pub const SALE: &[&str] = &["sale", "discount", "deal", "on sale", "special"];

pub const TRACKING: &[&str] = &["track", "where"];

/// Includes the common "shopping" slip for "shipping".
pub const SHIPPING: &[&str] = &["shipping", "delivery", "shopping", "ship", "postage", "send"];

pub const PRODUCT_LISTING: &[&str] = &["product", "item", "show me"];

pub const CART: &[&str] = &["cart", "checkout"];

pub const COLLECTION_LISTING: &[&str] = &["collection", "category"];

pub const RETURNS: &[&str] = &["return", "refund"];

/// A product category and the words that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Singular name, e.g. `bag`.
    pub name: &'static str,
    pub synonyms: &'static [&'static str],
}

/// Categories in resolution order: the first whose synonyms match wins.
pub const PRODUCT_CATEGORIES: &[Category] = &[
    Category {
        name: "bag",
        synonyms: &["bag", "handbag", "purse", "tote", "backpack", "satchel", "clutch"],
    },
    Category {
        name: "wallet",
        synonyms: &["wallet", "card holder", "cardholder", "money clip"],
    },
    Category {
        name: "luggage",
        synonyms: &["luggage", "suitcase", "carry-on", "carry on", "trolley", "duffel", "duffle"],
    },
    Category {
        name: "watch",
        synonyms: &["watch", "timepiece", "wristwatch"],
    },
    Category {
        name: "jewelry",
        synonyms: &["jewelry", "necklace", "bracelet", "earring", "pendant"],
    },
    Category {
        name: "accessory",
        synonyms: &[
            "accessor",
            "sunglasses",
            "scarf",
            "belt",
            "umbrella",
            "passport holder",
            "travel pillow",
        ],
    },
];

/// Colors recognized in searches, in match order.
pub const COLORS: &[&str] = &[
    "black", "white", "brown", "navy", "blue", "red", "green", "pink", "gray", "beige", "gold",
    "silver", "purple", "orange", "yellow",
];

/// Canonical spelling followed by the regional variants rewritten to it.
pub const SPELLING_VARIANTS: &[(&str, &[&str])] = &[
    ("color", &["colour"]),
    ("gray", &["grey"]),
    ("jewelry", &["jewellery", "jewelery"]),
    ("favorite", &["favourite"]),
    ("center", &["centre"]),
    ("organize", &["organise"]),
    ("aluminum", &["aluminium"]),
    ("customize", &["customise"]),
    ("traveling", &["travelling"]),
];
