use serde::{Deserialize, Serialize};

/// Display language of the check form
///
/// Selects both the accepted answer alphabet and the language of every
/// operator-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English answer sheets (A/B/C/D bubbles)
    English,
    /// Bengali answer sheets (ক/খ/গ/ঘ bubbles)
    Bengali,
}

impl Language {
    /// Code sent in the `language` form field of the checker request
    pub fn wire_code(self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Bengali => "ben",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Bengali => "Bengali",
        }
    }

    /// The four answer symbols valid for this language, in bubble order
    pub fn alphabet(self) -> [char; 4] {
        match self {
            Language::English => ['A', 'B', 'C', 'D'],
            Language::Bengali => ['ক', 'খ', 'গ', 'ঘ'],
        }
    }

    /// Whether a single character belongs to this language's alphabet
    ///
    /// English symbols match case-insensitively; Bengali glyphs have no case.
    pub fn accepts(self, symbol: char) -> bool {
        match self {
            Language::English => matches!(symbol.to_ascii_uppercase(), 'A' | 'B' | 'C' | 'D'),
            Language::Bengali => matches!(symbol, 'ক' | 'খ' | 'গ' | 'ঘ'),
        }
    }

    /// Parse the exact wire code
    pub fn from_wire_code(code: &str) -> Option<Self> {
        match code {
            "eng" => Some(Language::English),
            "ben" => Some(Language::Bengali),
            _ => None,
        }
    }

    /// Resolve a language from operator input (tolerant matching)
    pub fn find(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "eng" | "en" | "english" => Some(Language::English),
            "ben" | "bn" | "bangla" | "bengali" => Some(Language::Bengali),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
