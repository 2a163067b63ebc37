use serde::{Deserialize, Serialize};

/// Console/platform identifiers attached to catalog entries.
///
/// The three known platforms get their own variants so membership tests
/// don't rely on scattered string literals. Any other platform name found
/// in loaded data is kept verbatim in [`Console::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Console {
    PlayStation,
    Xbox,
    Pc,
    Other(String),
}

/// Known console variants in display order.
const KNOWN_CONSOLES: &[Console] = &[Console::PlayStation, Console::Xbox, Console::Pc];

impl Console {
    /// Canonical spelling as it appears in catalog data.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlayStation => "PlayStation",
            Self::Xbox => "Xbox",
            Self::Pc => "PC",
            Self::Other(name) => name,
        }
    }

    /// Accepted names for a known console (case-insensitive matching).
    ///
    /// `Other` has no aliases; it only ever comes from data.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::PlayStation => &["playstation", "ps", "psx", "ps1", "sony"],
            Self::Xbox => &["xbox", "xb", "microsoft"],
            Self::Pc => &["pc", "windows", "win", "computer"],
            Self::Other(_) => &[],
        }
    }

    /// The known (non-`Other`) consoles.
    pub fn known() -> &'static [Console] {
        KNOWN_CONSOLES
    }
}

impl std::fmt::Display for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exact, case-sensitive conversion used when reading catalog data.
impl From<String> for Console {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PlayStation" => Self::PlayStation,
            "Xbox" => Self::Xbox,
            "PC" => Self::Pc,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for Console {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Console> for String {
    fn from(console: Console) -> Self {
        match console {
            Console::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Error returned when a string cannot be parsed into a known `Console`.
#[derive(Debug, Clone)]
pub struct ConsoleParseError(pub String);

impl std::fmt::Display for ConsoleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown console: '{}'", self.0)
    }
}

impl std::error::Error for ConsoleParseError {}

impl std::str::FromStr for Console {
    type Err = ConsoleParseError;

    /// Parse a console from any recognized name (case-insensitive).
    ///
    /// Only resolves the known consoles; used for user input rather than data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for console in KNOWN_CONSOLES {
            if console.aliases().iter().any(|alias| *alias == lower) {
                return Ok(console.clone());
            }
        }
        Err(ConsoleParseError(s.to_string()))
    }
}
