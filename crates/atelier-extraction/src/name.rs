//! Template name extraction: an ordered list of strategies, first hit wins.

use std::sync::LazyLock;

use regex::Regex;

/// Returned when no strategy matches.
pub const PLACEHOLDER_NAME: &str = "Curated Design Template";

const MAX_NAME_CHARS: usize = 60;

/// A pure `text -> Option<name>` strategy.
pub type NameStrategy = fn(&str) -> Option<String>;

macro_rules! name_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── "Template: Aurora" / "design name = Aurora" ───────────────────────────
name_pattern!(
    RE_LABELLED,
    r#"(?i)\b(?:template|design|project|theme|site)\s*(?:name|title)?\s*[:=]\s*["'“]?([^"'”\n.,;:]{3,60})"#
);

// ── "Aurora Dashboard" in double quotes ───────────────────────────────────
name_pattern!(RE_QUOTED, r#"["“]([A-Z][^"”\n]{2,59})["”]"#);

// ── Capitalised phrase ending in a structural noun: "Hero Section" ────────
name_pattern!(
    RE_TITLED,
    r"\b((?:[A-Z][A-Za-z0-9]*\s+){1,3}(?:Section|Component|Template|Layout|Dashboard|Page|Portfolio|Gallery|Header|Card|Form|Footer|Navigation|Navbar|Store|Showcase|System))\b"
);

// ── "built a minimal landing page" ────────────────────────────────────────
name_pattern!(
    RE_BUILT,
    r"(?i)\b(?:built|created|designed|crafted|developed)\s+(?:an?\s+|the\s+)?((?:[a-z0-9-]+\s+){0,3}(?:template|layout|page|site|interface|dashboard|portfolio|storefront))\b"
);

/// Strategies in precedence order. Earlier entries win.
pub const NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("labelled", labelled),
    ("quoted", quoted),
    ("titled", titled),
    ("built", built),
];

/// Extract a template name from `text`, or [`PLACEHOLDER_NAME`].
pub fn extract_name(text: &str) -> String {
    NAME_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(text))
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string())
}

pub fn labelled(text: &str) -> Option<String> {
    first_capture(&RE_LABELLED, text)
}

pub fn quoted(text: &str) -> Option<String> {
    first_capture(&RE_QUOTED, text)
}

pub fn titled(text: &str) -> Option<String> {
    first_capture(&RE_TITLED, text)
}

pub fn built(text: &str) -> Option<String> {
    first_capture(&RE_BUILT, text).map(|name| title_case(&name))
}

fn first_capture(regex: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let re = regex.as_ref()?;
    let captured = re.captures(text)?.get(1)?.as_str();
    clean(captured)
}

/// Collapse whitespace and bound length. Blank captures count as no match.
fn clean(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }
    Some(collapsed.chars().take(MAX_NAME_CHARS).collect::<String>().trim_end().to_string())
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
