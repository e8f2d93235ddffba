use serde::{Deserialize, Serialize};

/// How the highlighter breaks text into fragments.
///
/// ## Examples
///
/// ```rust
/// use typedapi::types::enums::BoundaryScanner;
///
/// let scanner: BoundaryScanner = "WORD".parse().unwrap();
/// assert_eq!(scanner, BoundaryScanner::Word);
/// assert_eq!(scanner.to_string(), "word");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BoundaryScanner {
    /// Breaks on characters listed in `boundary_chars`.
    Chars,
    /// Breaks at the next sentence boundary.
    Sentence,
    /// Breaks at the next word boundary.
    Word,
    /// A tag this crate does not know, kept verbatim.
    Unknown(String),
}

tag_enum!(BoundaryScanner {
    Chars => "chars",
    Sentence => "sentence",
    Word => "word",
});
