//! Numeric format strings for the individual label components.
//!
//! Supported forms:
//! - empty: plain decimal
//! - standard: `D`/`d` (decimal), `G`/`g` (general), `X`/`x` (hex), each
//!   with an optional minimum digit count, e.g. `D4`
//! - custom: `0` (zero placeholder) and `#` (digit placeholder) mixed with
//!   literal text, `\`-escaped characters and quoted `'...'`/`"..."` runs

use crate::domain::Version;
use crate::error::{LabellerError, Result};
use std::fmt;

/// One component of a four-part version label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
    Revision,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
            Component::Revision => "revision",
        };
        f.write_str(name)
    }
}

/// Element of a custom format pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Digit { zero: bool },
    Literal(String),
}

/// Parsed numeric format for a single component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NumberFormat {
    #[default]
    Plain,
    Decimal {
        min_digits: usize,
    },
    Hex {
        min_digits: usize,
        upper: bool,
    },
    Custom(Vec<Token>),
}

impl NumberFormat {
    /// Parse a format string
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            return Ok(NumberFormat::Plain);
        }

        if let Some(standard) = parse_standard(spec)? {
            return Ok(standard);
        }

        parse_custom(spec)
    }

    /// Render a value with this format
    pub fn apply(&self, value: u32) -> String {
        match self {
            NumberFormat::Plain => value.to_string(),
            NumberFormat::Decimal { min_digits } => {
                format!("{:0width$}", value, width = *min_digits)
            }
            NumberFormat::Hex {
                min_digits,
                upper: true,
            } => format!("{:0width$X}", value, width = *min_digits),
            NumberFormat::Hex {
                min_digits,
                upper: false,
            } => format!("{:0width$x}", value, width = *min_digits),
            NumberFormat::Custom(tokens) => render_custom(tokens, value),
        }
    }
}

/// Returns `Ok(None)` when the string is not a standard format specifier
fn parse_standard(spec: &str) -> Result<Option<NumberFormat>> {
    let mut chars = spec.chars();
    let letter = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => c,
        _ => return Ok(None),
    };
    let precision = chars.as_str();
    if !precision.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    if precision.len() > 2 {
        return Err(LabellerError::format(format!(
            "Precision in '{}' is longer than two digits",
            spec
        )));
    }
    let min_digits = if precision.is_empty() {
        0
    } else {
        precision
            .parse::<usize>()
            .map_err(|_| LabellerError::format(format!("Invalid precision in '{}'", spec)))?
    };

    match letter {
        'D' | 'd' => Ok(Some(NumberFormat::Decimal { min_digits })),
        // precision only limits significant digits, never pads
        'G' | 'g' => Ok(Some(NumberFormat::Plain)),
        'X' => Ok(Some(NumberFormat::Hex {
            min_digits,
            upper: true,
        })),
        'x' => Ok(Some(NumberFormat::Hex {
            min_digits,
            upper: false,
        })),
        other => Err(LabellerError::format(format!(
            "Unsupported standard format '{}' in '{}'",
            other, spec
        ))),
    }
}

fn parse_custom(spec: &str) -> Result<NumberFormat> {
    let mut tokens = Vec::new();
    let mut chars = spec.chars();

    while let Some(c) = chars.next() {
        match c {
            '0' => tokens.push(Token::Digit { zero: true }),
            '#' => tokens.push(Token::Digit { zero: false }),
            '\\' => {
                let escaped = chars.next().ok_or_else(|| {
                    LabellerError::format(format!("Dangling escape at end of '{}'", spec))
                })?;
                push_literal(&mut tokens, escaped);
            }
            '\'' | '"' => {
                let mut closed = false;
                for quoted in chars.by_ref() {
                    if quoted == c {
                        closed = true;
                        break;
                    }
                    push_literal(&mut tokens, quoted);
                }
                if !closed {
                    return Err(LabellerError::format(format!(
                        "Unterminated quote in '{}'",
                        spec
                    )));
                }
            }
            '.' | ',' | '%' | '\u{2030}' | ';' => {
                return Err(LabellerError::format(format!(
                    "Unsupported format character '{}' in '{}'",
                    c, spec
                )));
            }
            other => push_literal(&mut tokens, other),
        }
    }

    Ok(NumberFormat::Custom(tokens))
}

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    if let Some(Token::Literal(text)) = tokens.last_mut() {
        text.push(c);
    } else {
        tokens.push(Token::Literal(c.to_string()));
    }
}

fn render_custom(tokens: &[Token], value: u32) -> String {
    let placeholders: Vec<bool> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Digit { zero } => Some(*zero),
            Token::Literal(_) => None,
        })
        .collect();
    let count = placeholders.len();
    let first_zero = placeholders.iter().position(|z| *z).unwrap_or(count);

    // Placeholders from the leftmost '0' rightwards are always filled
    let digits = if value == 0 {
        String::new()
    } else {
        value.to_string()
    };
    let min_len = count - first_zero;
    let padded = format!("{:0>width$}", digits, width = min_len);
    let offset = padded.len() as isize - count as isize;

    let mut out = String::new();
    let mut index = 0isize;
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Digit { .. } => {
                if index == 0 {
                    // Overflow digits all land in the leftmost placeholder
                    let end = (offset + 1).max(0) as usize;
                    out.push_str(&padded[..end]);
                } else {
                    let pos = offset + index;
                    if pos >= 0 {
                        let pos = pos as usize;
                        out.push_str(&padded[pos..pos + 1]);
                    }
                }
                index += 1;
            }
        }
    }
    out
}

/// Formats for all four label components
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFormat {
    pub major: NumberFormat,
    pub minor: NumberFormat,
    pub patch: NumberFormat,
    pub revision: NumberFormat,
}

impl LabelFormat {
    /// Replace the format for a component
    pub fn set(&mut self, component: Component, format: NumberFormat) {
        match component {
            Component::Major => self.major = format,
            Component::Minor => self.minor = format,
            Component::Patch => self.patch = format,
            Component::Revision => self.revision = format,
        }
    }

    /// Render a version as `major.minor.patch.revision`
    pub fn render(&self, version: &Version) -> String {
        format!(
            "{}.{}.{}.{}",
            self.major.apply(version.major),
            self.minor.apply(version.minor),
            self.patch.apply(version.patch),
            self.revision.apply(version.revision)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(spec: &str, value: u32) -> String {
        NumberFormat::parse(spec).unwrap().apply(value)
    }

    #[test]
    fn test_plain() {
        assert_eq!(fmt("", 0), "0");
        assert_eq!(fmt("", 1240), "1240");
        assert_eq!(NumberFormat::default().apply(12345), "12345");
    }

    #[test]
    fn test_standard_decimal() {
        assert_eq!(fmt("D", 5), "5");
        assert_eq!(fmt("D3", 5), "005");
        assert_eq!(fmt("d4", 12345), "12345");
    }

    #[test]
    fn test_standard_general_ignores_precision() {
        assert_eq!(fmt("G", 42), "42");
        assert_eq!(fmt("G5", 42), "42");
    }

    #[test]
    fn test_standard_hex() {
        assert_eq!(fmt("X", 255), "FF");
        assert_eq!(fmt("x4", 255), "00ff");
    }

    #[test]
    fn test_unsupported_standard() {
        assert!(NumberFormat::parse("N2").is_err());
        assert!(NumberFormat::parse("C").is_err());
    }

    #[test]
    fn test_standard_precision_too_long() {
        assert_eq!(fmt("D99", 7).len(), 99);
        let err = NumberFormat::parse("D100").unwrap_err();
        assert!(err.to_string().contains("D100"), "got: {}", err);
        assert!(NumberFormat::parse("X123").is_err());
    }

    #[test]
    fn test_custom_zero_padding() {
        assert_eq!(fmt("0000", 44), "0044");
        assert_eq!(fmt("0000", 12345), "12345");
        assert_eq!(fmt("0", 0), "0");
    }

    #[test]
    fn test_custom_digit_placeholder() {
        assert_eq!(fmt("#", 0), "");
        assert_eq!(fmt("##", 7), "7");
        assert_eq!(fmt("#0#", 5), "05");
    }

    #[test]
    fn test_custom_literals() {
        assert_eq!(fmt("rev 0", 3), "rev 3");
        assert_eq!(fmt("0-0", 12345), "1234-5");
        assert_eq!(fmt("'#'00", 7), "#07");
        assert_eq!(fmt("\\#0", 7), "#7");
        assert_eq!(fmt("build", 7), "build");
    }

    #[test]
    fn test_custom_invalid() {
        assert!(NumberFormat::parse("0.00").is_err());
        assert!(NumberFormat::parse("#,##0").is_err());
        assert!(NumberFormat::parse("'open").is_err());
        assert!(NumberFormat::parse("0\\").is_err());
    }

    #[test]
    fn test_label_format_render() {
        let mut format = LabelFormat::default();
        format.set(Component::Revision, NumberFormat::parse("00000").unwrap());
        assert_eq!(format.render(&Version::new(2, 3, 6, 44)), "2.3.6.00044");
        assert_eq!(format.major, NumberFormat::Plain);
    }

    #[test]
    fn test_component_display() {
        assert_eq!(Component::Revision.to_string(), "revision");
    }
}
