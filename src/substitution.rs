// Literal substitution engine
// Scans raw bytes left to right and replaces non-overlapping matches

use regex::bytes::{Regex, RegexBuilder};
use std::borrow::Cow;
use tracing::debug;

use crate::error::ChangeResult;

/// Upper bound on the compiled size of the literal search pattern
const PATTERN_SIZE_LIMIT: usize = 1 << 30;

/// Outcome of a substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted<'a> {
    /// Transformed content; borrowed when nothing changed
    pub content: Cow<'a, [u8]>,
    /// Number of occurrences replaced
    pub replacements: usize,
}

impl Substituted<'_> {
    /// Whether any occurrence was replaced
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_owned()
    }
}

/// A compiled search/replacement pair
#[derive(Debug, Clone)]
pub struct Substitution {
    replacement: Vec<u8>,
    // None when the search text is empty
    matcher: Option<Regex>,
}

impl Substitution {
    /// Compile a literal byte search. Pattern syntax in `search` is not interpreted.
    pub fn new(search: &[u8], replacement: &[u8]) -> ChangeResult<Self> {
        let matcher = if search.is_empty() {
            None
        } else {
            let matcher = RegexBuilder::new(&escape_bytes(search))
                .unicode(false)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()?;
            Some(matcher)
        };

        Ok(Self {
            replacement: replacement.to_vec(),
            matcher,
        })
    }

    /// Replace every non-overlapping occurrence of the search text.
    ///
    /// An empty search text matches nothing and leaves the content unchanged.
    pub fn apply<'a>(&self, content: &'a [u8]) -> Substituted<'a> {
        let Some(matcher) = &self.matcher else {
            debug!("Empty search text, leaving content unchanged");
            return Substituted {
                content: Cow::Borrowed(content),
                replacements: 0,
            };
        };

        let replacement = self.replacement.as_slice();
        let mut output: Option<Vec<u8>> = None;
        let mut last_end = 0;
        let mut replacements = 0;

        for found in matcher.find_iter(content) {
            let out = output.get_or_insert_with(|| Vec::with_capacity(content.len()));
            out.extend_from_slice(&content[last_end..found.start()]);
            out.extend_from_slice(replacement);
            last_end = found.end();
            replacements += 1;
        }

        let content = match output {
            Some(mut out) => {
                out.extend_from_slice(&content[last_end..]);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(content),
        };

        debug!(
            "Replaced {} occurrence(s) with {}",
            replacements,
            String::from_utf8_lossy(replacement)
        );

        Substituted {
            content,
            replacements,
        }
    }
}

/// Escape arbitrary bytes into a pattern that matches exactly those bytes
fn escape_bytes(search: &[u8]) -> String {
    let mut pattern = String::with_capacity(search.len() * 2);
    for &byte in search {
        if byte.is_ascii() {
            pattern.push_str(&regex::escape(char::from(byte).encode_utf8(&mut [0; 4])));
        } else {
            pattern.push_str(&format!("\\x{:02X}", byte));
        }
    }
    pattern
}

/// Replace all occurrences of `search` in `content` with `replacement`
pub fn replace_all(content: &[u8], search: &[u8], replacement: &[u8]) -> ChangeResult<Vec<u8>> {
    let substitution = Substitution::new(search, replacement)?;
    Ok(substitution.apply(content).into_bytes())
}
