//! Industry/region mapping table.
//!
//! Maps a logical content-market key (a national cinema) to the language
//! and region codes used to bias discover queries toward that market.
//! The table is process-wide static data; no mutation path exists.

/// Language/region bias for one content market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryConfig {
    /// ISO 639-1 language code for `with_original_language`
    pub language: &'static str,
    /// ISO 3166-1 country code for `region` / `with_origin_country`
    pub region: Option<&'static str>,
}

const INDUSTRY_TABLE: &[(&str, IndustryConfig)] = &[
    ("hollywood", IndustryConfig { language: "en", region: Some("US") }),
    ("bollywood", IndustryConfig { language: "hi", region: Some("IN") }),
    ("tollywood", IndustryConfig { language: "te", region: Some("IN") }),
    ("kollywood", IndustryConfig { language: "ta", region: Some("IN") }),
    ("korean", IndustryConfig { language: "ko", region: Some("KR") }),
    ("japanese", IndustryConfig { language: "ja", region: Some("JP") }),
    ("chinese", IndustryConfig { language: "zh", region: Some("CN") }),
    ("french", IndustryConfig { language: "fr", region: Some("FR") }),
    ("spanish", IndustryConfig { language: "es", region: Some("ES") }),
    ("italian", IndustryConfig { language: "it", region: Some("IT") }),
    ("german", IndustryConfig { language: "de", region: Some("DE") }),
    ("british", IndustryConfig { language: "en", region: Some("GB") }),
    ("nollywood", IndustryConfig { language: "en", region: Some("NG") }),
    ("turkish", IndustryConfig { language: "tr", region: Some("TR") }),
];

/// Look up the language/region bias for an industry key.
///
/// # Returns
/// * `Some(&IndustryConfig)` for a known key
/// * `None` for an unknown key, meaning no industry bias is applied
///
/// # Examples
/// ```
/// use reelpick_core::industry;
///
/// let korean = industry::lookup("korean").unwrap();
/// assert_eq!(korean.language, "ko");
/// assert_eq!(korean.region, Some("KR"));
/// assert!(industry::lookup("martian").is_none());
/// ```
pub fn lookup(key: &str) -> Option<&'static IndustryConfig> {
    INDUSTRY_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, config)| config)
}

/// All known industry keys, in table order.
///
/// Useful for a caller populating a selection UI.
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    INDUSTRY_TABLE.iter().map(|(name, _)| *name)
}
