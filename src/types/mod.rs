//! Request, response and option types for the News API.
//!
//! Every option enum has a default variant that means "filter not applied". It renders as the
//! empty string and is never sent to the API.

use serde::Serialize;

pub mod request;
pub mod response;

/// Date and time types used by the `from` and `to` filters.
pub use chrono::{DateTime, TimeZone, Utc};
/// Secret string type that redacts the API key in debug output.
pub use secrecy::SecretString;

/// The category to get headlines for. Cannot be mixed with the sources filter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Category {
    /// No category filter.
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    All,
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::All
    }
}

/// The 2-letter ISO-639-1 code of the language to get articles for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[non_exhaustive]
pub enum Language {
    /// No language filter.
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    All,
    #[serde(rename = "ar")]
    #[strum(serialize = "ar")]
    Arabic,
    #[serde(rename = "de")]
    #[strum(serialize = "de")]
    German,
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    English,
    #[serde(rename = "es")]
    #[strum(serialize = "es")]
    Spanish,
    #[serde(rename = "fr")]
    #[strum(serialize = "fr")]
    French,
    #[serde(rename = "he")]
    #[strum(serialize = "he")]
    Hebrew,
    #[serde(rename = "it")]
    #[strum(serialize = "it")]
    Italian,
    #[serde(rename = "nl")]
    #[strum(serialize = "nl")]
    Dutch,
    #[serde(rename = "no")]
    #[strum(serialize = "no")]
    Norwegian,
    #[serde(rename = "pt")]
    #[strum(serialize = "pt")]
    Portuguese,
    #[serde(rename = "ru")]
    #[strum(serialize = "ru")]
    Russian,
    #[serde(rename = "sv")]
    #[strum(serialize = "sv")]
    Swedish,
    /// Articles whose language could not be determined.
    #[serde(rename = "ud")]
    #[strum(serialize = "ud")]
    Undefined,
    #[serde(rename = "zh")]
    #[strum(serialize = "zh")]
    Chinese,
}

impl Language {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::All
    }
}

/// The 2-letter ISO 3166-1 code of the country to get headlines for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[non_exhaustive]
pub enum Country {
    /// No country filter.
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    All,
    #[serde(rename = "ae")]
    #[strum(serialize = "ae")]
    UnitedArabEmirates,
    #[serde(rename = "ar")]
    #[strum(serialize = "ar")]
    Argentina,
    #[serde(rename = "at")]
    #[strum(serialize = "at")]
    Austria,
    #[serde(rename = "au")]
    #[strum(serialize = "au")]
    Australia,
    #[serde(rename = "be")]
    #[strum(serialize = "be")]
    Belgium,
    #[serde(rename = "bg")]
    #[strum(serialize = "bg")]
    Bulgaria,
    #[serde(rename = "br")]
    #[strum(serialize = "br")]
    Brazil,
    #[serde(rename = "ca")]
    #[strum(serialize = "ca")]
    Canada,
    #[serde(rename = "ch")]
    #[strum(serialize = "ch")]
    Switzerland,
    #[serde(rename = "cn")]
    #[strum(serialize = "cn")]
    China,
    #[serde(rename = "co")]
    #[strum(serialize = "co")]
    Colombia,
    #[serde(rename = "cu")]
    #[strum(serialize = "cu")]
    Cuba,
    #[serde(rename = "cz")]
    #[strum(serialize = "cz")]
    Czechia,
    #[serde(rename = "de")]
    #[strum(serialize = "de")]
    Germany,
    #[serde(rename = "eg")]
    #[strum(serialize = "eg")]
    Egypt,
    #[serde(rename = "fr")]
    #[strum(serialize = "fr")]
    France,
    #[serde(rename = "gb")]
    #[strum(serialize = "gb")]
    UnitedKingdom,
    #[serde(rename = "gr")]
    #[strum(serialize = "gr")]
    Greece,
    #[serde(rename = "hk")]
    #[strum(serialize = "hk")]
    HongKong,
    #[serde(rename = "hu")]
    #[strum(serialize = "hu")]
    Hungary,
    #[serde(rename = "id")]
    #[strum(serialize = "id")]
    Indonesia,
    #[serde(rename = "ie")]
    #[strum(serialize = "ie")]
    Ireland,
    #[serde(rename = "il")]
    #[strum(serialize = "il")]
    Israel,
    #[serde(rename = "in")]
    #[strum(serialize = "in")]
    India,
    #[serde(rename = "it")]
    #[strum(serialize = "it")]
    Italy,
    #[serde(rename = "jp")]
    #[strum(serialize = "jp")]
    Japan,
    #[serde(rename = "kr")]
    #[strum(serialize = "kr")]
    SouthKorea,
    #[serde(rename = "lt")]
    #[strum(serialize = "lt")]
    Lithuania,
    #[serde(rename = "lv")]
    #[strum(serialize = "lv")]
    Latvia,
    #[serde(rename = "ma")]
    #[strum(serialize = "ma")]
    Morocco,
    #[serde(rename = "mx")]
    #[strum(serialize = "mx")]
    Mexico,
    #[serde(rename = "my")]
    #[strum(serialize = "my")]
    Malaysia,
    #[serde(rename = "ng")]
    #[strum(serialize = "ng")]
    Nigeria,
    #[serde(rename = "nl")]
    #[strum(serialize = "nl")]
    Netherlands,
    #[serde(rename = "no")]
    #[strum(serialize = "no")]
    Norway,
    #[serde(rename = "nz")]
    #[strum(serialize = "nz")]
    NewZealand,
    #[serde(rename = "ph")]
    #[strum(serialize = "ph")]
    Philippines,
    #[serde(rename = "pl")]
    #[strum(serialize = "pl")]
    Poland,
    #[serde(rename = "pt")]
    #[strum(serialize = "pt")]
    Portugal,
    #[serde(rename = "ro")]
    #[strum(serialize = "ro")]
    Romania,
    #[serde(rename = "rs")]
    #[strum(serialize = "rs")]
    Serbia,
    #[serde(rename = "ru")]
    #[strum(serialize = "ru")]
    Russia,
    #[serde(rename = "sa")]
    #[strum(serialize = "sa")]
    SaudiArabia,
    #[serde(rename = "se")]
    #[strum(serialize = "se")]
    Sweden,
    #[serde(rename = "sg")]
    #[strum(serialize = "sg")]
    Singapore,
    #[serde(rename = "si")]
    #[strum(serialize = "si")]
    Slovenia,
    #[serde(rename = "sk")]
    #[strum(serialize = "sk")]
    Slovakia,
    #[serde(rename = "th")]
    #[strum(serialize = "th")]
    Thailand,
    #[serde(rename = "tr")]
    #[strum(serialize = "tr")]
    Turkey,
    #[serde(rename = "tw")]
    #[strum(serialize = "tw")]
    Taiwan,
    #[serde(rename = "ua")]
    #[strum(serialize = "ua")]
    Ukraine,
    #[serde(rename = "us")]
    #[strum(serialize = "us")]
    UnitedStates,
    #[serde(rename = "ve")]
    #[strum(serialize = "ve")]
    Venezuela,
    #[serde(rename = "za")]
    #[strum(serialize = "za")]
    SouthAfrica,
}

impl Country {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::All
    }
}

/// The field to restrict keyword matching to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum SearchIn {
    /// Search every field (the API default).
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Default,
    Title,
    Description,
    Content,
}

impl SearchIn {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::Default
    }
}

/// The order to sort articles in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[non_exhaustive]
pub enum SortBy {
    /// Let the API pick (newest first).
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Default,
    /// Articles more closely related to the query come first.
    #[serde(rename = "relevancy")]
    #[strum(serialize = "relevancy")]
    Relevancy,
    /// Articles from popular sources and publishers come first.
    #[serde(rename = "popularity")]
    #[strum(serialize = "popularity")]
    Popularity,
    /// Newest articles come first.
    #[serde(rename = "publishedAt")]
    #[strum(serialize = "publishedAt")]
    PublishedAt,
}

impl SortBy {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::Default
    }
}
