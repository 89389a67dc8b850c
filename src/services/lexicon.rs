//! Category and region lexicon.
//!
//! Static keyword tables mapping natural-language phrases to the catalog's
//! canonical categories and to coarse regions. Detection is a substring scan
//! in table order, so the first listed keyword found in the message wins.
//! Both intent extraction and response synthesis go through [`detect_category`],
//! keeping the two sides of the pipeline in agreement about what was asked.

/// Canonical event categories tracked by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Wildfires,
    Volcanoes,
    Floods,
    Storms,
    Earthquakes,
    Drought,
    Landslides,
    Snow,
    Ice,
    Dust,
    Manmade,
}

/// Keyword table for category detection. Order matters: the first entry whose
/// keyword occurs in the message decides the category.
const CATEGORY_KEYWORDS: &[(&str, CategoryKey)] = &[
    ("wildfire", CategoryKey::Wildfires),
    ("volcano", CategoryKey::Volcanoes),
    ("flood", CategoryKey::Floods),
    ("storm", CategoryKey::Storms),
    ("earthquake", CategoryKey::Earthquakes),
    ("drought", CategoryKey::Drought),
    ("droughts", CategoryKey::Drought),
    ("landslide", CategoryKey::Landslides),
    ("snow", CategoryKey::Snow),
    ("ice", CategoryKey::Ice),
    ("dust", CategoryKey::Dust),
    ("manmade", CategoryKey::Manmade),
    ("man-made", CategoryKey::Manmade),
];

impl CategoryKey {
    /// Canonical lower-case name, matching the catalog's category titles.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Wildfires => "wildfires",
            CategoryKey::Volcanoes => "volcanoes",
            CategoryKey::Floods => "floods",
            CategoryKey::Storms => "storms",
            CategoryKey::Earthquakes => "earthquakes",
            CategoryKey::Drought => "drought",
            CategoryKey::Landslides => "landslides",
            CategoryKey::Snow => "snow",
            CategoryKey::Ice => "ice",
            CategoryKey::Dust => "dust",
            CategoryKey::Manmade => "manmade",
        }
    }

    /// Numeric category id used by the catalog API.
    pub fn eonet_id(&self) -> u32 {
        match self {
            CategoryKey::Wildfires => 8,
            CategoryKey::Volcanoes => 12,
            CategoryKey::Floods => 9,
            CategoryKey::Storms => 10,
            CategoryKey::Earthquakes => 16,
            CategoryKey::Drought => 6,
            CategoryKey::Landslides => 14,
            CategoryKey::Snow => 17,
            CategoryKey::Ice => 15,
            CategoryKey::Dust => 7,
            CategoryKey::Manmade => 19,
        }
    }

    /// Resolve a single keyword to a category. Case-insensitive, accepts the
    /// detection keywords and the canonical names; unknown keywords yield None.
    pub fn resolve(keyword: &str) -> Option<CategoryKey> {
        let keyword = keyword.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(kw, _)| *kw == keyword)
            .map(|(_, cat)| *cat)
            .or_else(|| {
                [
                    CategoryKey::Wildfires,
                    CategoryKey::Volcanoes,
                    CategoryKey::Floods,
                    CategoryKey::Storms,
                    CategoryKey::Earthquakes,
                    CategoryKey::Drought,
                    CategoryKey::Landslides,
                    CategoryKey::Snow,
                    CategoryKey::Ice,
                    CategoryKey::Dust,
                    CategoryKey::Manmade,
                ]
                .into_iter()
                .find(|cat| cat.as_str() == keyword)
            })
    }
}

/// Detect the category a message is asking about, or None for "all events".
pub fn detect_category(message: &str) -> Option<CategoryKey> {
    let message = message.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, category)| *category)
}

/// Coarse geographic regions recognised in user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    NorthAmerica,
    Europe,
    Asia,
    Africa,
    Oceania,
    SouthAmerica,
    #[default]
    All,
}

const REGION_KEYWORDS: &[(&str, Region)] = &[
    ("north america", Region::NorthAmerica),
    ("usa", Region::NorthAmerica),
    ("united states", Region::NorthAmerica),
    ("europe", Region::Europe),
    ("asia", Region::Asia),
    ("africa", Region::Africa),
    ("oceania", Region::Oceania),
    ("australia", Region::Oceania),
    ("south america", Region::SouthAmerica),
];

/// Detect the region a message refers to, defaulting to [`Region::All`].
pub fn detect_region(message: &str) -> Region {
    let message = message.to_lowercase();
    REGION_KEYWORDS
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, region)| *region)
        .unwrap_or(Region::All)
}
