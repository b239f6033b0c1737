//! Fixed language code table.

/// Languages with a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Chinese,
    Japanese,
    German,
    French,
    Korean,
    Spanish,
}

impl Language {
    /// Every supported language, in table order.
    pub const ALL: [Self; 7] = [
        Self::English,
        Self::Chinese,
        Self::Japanese,
        Self::German,
        Self::French,
        Self::Korean,
        Self::Spanish,
    ];

    /// Resolve a dimension value such as `en`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Dimension value for this language.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
            Self::Japanese => "ja",
            Self::German => "de",
            Self::French => "fr",
            Self::Korean => "ko",
            Self::Spanish => "es",
        }
    }

    /// Name shown in page copy.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "Chinese",
            Self::Japanese => "Japanese",
            Self::German => "German",
            Self::French => "French",
            Self::Korean => "Korean",
            Self::Spanish => "Spanish",
        }
    }
}
