use super::document::Document;
use log::debug;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Block-level marker of a line. Stored apart from the line's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `#`, `##`, `###`
    Heading(u8),
    /// `#ttl`
    Title,
    /// `#agd`
    Agenda,
    /// `#!`
    Summary,
    /// `-`
    Bullet,
    /// `*`
    Asterisk,
    /// `!`
    Emphasis,
    /// `N.`
    Numbered(u32),
    /// `A.` to `Z.`
    Alpha(char),
}

impl Attribute {
    pub fn token(&self) -> String {
        match self {
            Attribute::Heading(level) => "#".repeat(usize::from(*level)),
            Attribute::Title => "#ttl".to_string(),
            Attribute::Agenda => "#agd".to_string(),
            Attribute::Summary => "#!".to_string(),
            Attribute::Bullet => "-".to_string(),
            Attribute::Asterisk => "*".to_string(),
            Attribute::Emphasis => "!".to_string(),
            Attribute::Numbered(n) => format!("{n}."),
            Attribute::Alpha(letter) => format!("{letter}."),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Attribute::Heading(_))
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, Attribute::Title | Attribute::Agenda | Attribute::Summary)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeParseError {
    #[error("unknown attribute token: {0:?}")]
    Unknown(String),
}

impl FromStr for Attribute {
    type Err = AttributeParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let attribute = match token {
            "#ttl" => Some(Attribute::Title),
            "#agd" => Some(Attribute::Agenda),
            "#!" => Some(Attribute::Summary),
            "#" | "##" | "###" => Some(Attribute::Heading(token.len() as u8)),
            "-" => Some(Attribute::Bullet),
            "*" => Some(Attribute::Asterisk),
            "!" => Some(Attribute::Emphasis),
            _ => token.strip_suffix('.').and_then(|marker| {
                parse_list_number(marker).map(Attribute::Numbered).or_else(|| {
                    let mut chars = marker.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) if letter.is_ascii_uppercase() => {
                            Some(Attribute::Alpha(letter))
                        }
                        _ => None,
                    }
                })
            }),
        };

        attribute.ok_or_else(|| AttributeParseError::Unknown(token.to_string()))
    }
}

/// What decoding a line says about its attribute.
///
/// `Unchanged` means nothing was detected and the existing attribute must be
/// kept; `Cleared` explicitly removes it. Callers must not treat the two alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    Unchanged,
    Cleared,
    Set(Attribute),
}

impl AttributeChange {
    pub fn apply(self, current: Option<Attribute>) -> Option<Attribute> {
        match self {
            AttributeChange::Unchanged => current,
            AttributeChange::Cleared => None,
            AttributeChange::Set(attribute) => Some(attribute),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<'a> {
    pub attribute: AttributeChange,
    pub text: &'a str,
}

// Alternation order is the detection priority; the regex crate picks the
// leftmost-first alternative.
static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?P<layout>#ttl|#agd|#!)",
        r"|(?P<heading>#{1,3})",
        r"|(?P<bullet>-)",
        r"|(?P<asterisk>\*)",
        r"|(?P<emphasis>!)",
        r"|(?P<number>[0-9]+)\.",
        r"|(?P<alpha>[A-Za-z])\.",
        r") ",
    ))
    .expect("attribute pattern is valid")
});

fn parse_list_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only canonical numbers survive a serialize round trip.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// Whether the first character of `raw` could begin an attribute token.
pub fn could_start_attribute(raw: &str) -> bool {
    raw.chars()
        .next()
        .is_some_and(|c| matches!(c, '#' | '-' | '*' | '!') || c.is_ascii_alphanumeric())
}

/// Split a leading attribute token off `raw`.
///
/// The token must be followed by exactly one space; a second whitespace
/// character after it leaves the line undecoded.
pub fn decode(raw: &str) -> Decoded<'_> {
    let unchanged = Decoded {
        attribute: AttributeChange::Unchanged,
        text: raw,
    };

    let Some(captures) = ATTRIBUTE_PATTERN.captures(raw) else {
        return unchanged;
    };
    let Some(whole) = captures.get(0) else {
        return unchanged;
    };
    let rest = &raw[whole.end()..];
    if rest.starts_with([' ', '\t']) {
        return unchanged;
    }

    let attribute = if let Some(layout) = captures.name("layout") {
        layout.as_str().parse().ok()
    } else if let Some(heading) = captures.name("heading") {
        Some(Attribute::Heading(heading.len() as u8))
    } else if captures.name("bullet").is_some() {
        Some(Attribute::Bullet)
    } else if captures.name("asterisk").is_some() {
        Some(Attribute::Asterisk)
    } else if captures.name("emphasis").is_some() {
        Some(Attribute::Emphasis)
    } else if let Some(number) = captures.name("number") {
        parse_list_number(number.as_str()).map(Attribute::Numbered)
    } else {
        captures
            .name("alpha")
            .and_then(|alpha| alpha.as_str().chars().next())
            .map(|letter| Attribute::Alpha(letter.to_ascii_uppercase()))
    };

    match attribute {
        Some(attribute) => Decoded {
            attribute: AttributeChange::Set(attribute),
            text: rest,
        },
        None => unchanged,
    }
}

/// `decode` behind the cheap first-character check used on every keystroke.
pub fn decode_fast(raw: &str) -> Decoded<'_> {
    if could_start_attribute(raw) {
        decode(raw)
    } else {
        Decoded {
            attribute: AttributeChange::Unchanged,
            text: raw,
        }
    }
}

/// Attribute of the line created when Enter splits a line carrying `current`.
pub fn next_attribute_for_split(current: Option<Attribute>) -> Option<Attribute> {
    match current? {
        Attribute::Bullet => Some(Attribute::Bullet),
        Attribute::Asterisk => Some(Attribute::Asterisk),
        Attribute::Numbered(n) => n.checked_add(1).map(Attribute::Numbered),
        // Continuation stops at Z.
        Attribute::Alpha(letter) if letter < 'Z' => {
            char::from_u32(letter as u32 + 1).map(Attribute::Alpha)
        }
        _ => None,
    }
}

/// Renumber the contiguous run of numbered lines starting at `from_index`.
pub fn renumber_following(document: &Document, from_index: usize, start_number: u32) -> Document {
    let mut result = document.clone();
    let mut number = start_number;
    let mut index = from_index;

    while let Some(line) = document.line(index) {
        if !matches!(line.attribute, Some(Attribute::Numbered(_))) {
            break;
        }
        if line.attribute != Some(Attribute::Numbered(number)) {
            result = result.replace(index, line.with_attribute(Some(Attribute::Numbered(number))));
        }
        number = number.saturating_add(1);
        index += 1;
    }

    if index > from_index {
        debug!("renumbered lines {from_index}..{index} starting at {start_number}");
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    /// Tab
    Increase,
    /// Shift+Tab
    Decrease,
}

/// New indent level and heading change for Tab / Shift+Tab.
///
/// Indent and attribute move independently: a non-heading line still gets its
/// indent changed while its attribute stays as it is.
pub fn toggle_indent_and_level(
    indent_level: usize,
    attribute: Option<Attribute>,
    direction: IndentDirection,
    max_indent: usize,
) -> (usize, AttributeChange) {
    match direction {
        IndentDirection::Increase => {
            let level = if indent_level < max_indent {
                indent_level + 1
            } else {
                indent_level
            };
            let change = match attribute {
                Some(Attribute::Heading(1)) => AttributeChange::Set(Attribute::Heading(2)),
                Some(Attribute::Heading(2)) => AttributeChange::Set(Attribute::Heading(3)),
                Some(Attribute::Heading(3)) => AttributeChange::Cleared,
                _ => AttributeChange::Unchanged,
            };
            (level, change)
        }
        IndentDirection::Decrease => {
            let change = match attribute {
                None => AttributeChange::Set(Attribute::Heading(3)),
                Some(Attribute::Heading(3)) => AttributeChange::Set(Attribute::Heading(2)),
                Some(Attribute::Heading(2)) => AttributeChange::Set(Attribute::Heading(1)),
                _ => AttributeChange::Unchanged,
            };
            (indent_level.saturating_sub(1), change)
        }
    }
}
