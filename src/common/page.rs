//! Page reference type.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// A virtual page named in a reference string.
///
/// Pages carry no structure beyond identity. Each one is a single symbol,
/// so the reference string `A B C A` names three distinct pages.
///
/// # Example
/// ```
/// use pagesim::Page;
///
/// let page: Page = "A".parse().unwrap();
/// assert_eq!(page, Page::new('A'));
/// assert_eq!(page.to_string(), "A");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Page(pub char);

impl Page {
    /// Create a new Page.
    #[inline]
    pub fn new(symbol: char) -> Self {
        Page(symbol)
    }

    /// Parse a whole reference string, one page per character.
    ///
    /// Whitespace and commas separate nothing and are skipped, so `"ABCA"`,
    /// `"A B C A"` and `"A,B,C,A"` are the same reference string.
    pub fn parse_sequence(s: &str) -> Vec<Page> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Page)
            .collect()
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Page(c)),
            _ => Err(Error::InvalidPage(s.to_string())),
        }
    }
}

impl From<char> for Page {
    fn from(symbol: char) -> Self {
        Page(symbol)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
