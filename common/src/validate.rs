//! String validators for configuration values.

/// How strictly [`is_quoted_with`] anchors the closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteAnchoring {
    /// The value starts with a quote and a second quote follows somewhere on the first line.
    Leading,
    /// The value starts and ends with a quote.
    #[default]
    Both,
}

/// Returns `true` when the whole value is wrapped in double quotes.
pub fn is_quoted(value: &str) -> bool {
    is_quoted_with(value, QuoteAnchoring::Both)
}

pub fn is_quoted_with(value: &str, anchoring: QuoteAnchoring) -> bool {
    let Some(rest) = value.strip_prefix('"') else {
        return false;
    };

    match anchoring {
        QuoteAnchoring::Leading => rest.lines().next().is_some_and(|line| line.contains('"')),
        QuoteAnchoring::Both => rest.ends_with('"'),
    }
}

/// Returns `true` for a dotted-quad IPv4 literal: four decimal groups, each in `0..=255`.
///
/// Leading zeros inside a group are accepted (`010.0.0.1`).
pub fn is_valid_ipv4(value: &str) -> bool {
    let groups: Vec<&str> = value.split('.').collect();
    if groups.len() != 4 {
        return false;
    }

    groups.iter().all(|group| is_octet(group))
}

fn is_octet(group: &str) -> bool {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let significant: &str = group.trim_start_matches('0');
    if significant.len() > 3 {
        return false;
    }

    significant.is_empty() || significant.parse::<u16>().is_ok_and(|n| n <= 255)
}
