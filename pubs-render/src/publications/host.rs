//! Per-page configuration read from the root container's `data-*` attributes

use super::settings::RenderSettings;
use crate::page::dom;
use markup5ever_rcdom::Handle;

/// What a particular page asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Path or URL of the publication JSON (`data-source`)
    pub source: String,
    /// Maximum number of rendered items, `None` for unlimited (`data-limit`)
    pub limit: Option<usize>,
    /// Render one continuous list without year headers (`data-flat="true"`)
    pub flat: bool,
}

impl HostConfig {
    pub fn from_root(root: &Handle, settings: &RenderSettings) -> Self {
        let source = dom::get_attr(root, "data-source")
            .filter(|source| !source.is_empty())
            .unwrap_or_else(|| settings.default_source.clone());
        let limit = dom::get_attr(root, "data-limit").and_then(|value| parse_limit(&value));
        let flat = dom::get_attr(root, "data-flat").as_deref() == Some("true");

        Self {
            source,
            limit,
            flat,
        }
    }
}

/// Parse a limit the way browsers run `parseInt`: optional sign, then leading digits.
///
/// Zero, negative and unparsable values mean unlimited.
fn parse_limit(value: &str) -> Option<usize> {
    let trimmed = value.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let number: usize = unsigned[..end].parse().ok()?;

    if negative || number == 0 {
        None
    } else {
        Some(number)
    }
}
