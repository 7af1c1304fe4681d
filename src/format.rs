use std::fmt;
use std::str::FromStr;

use crate::consts::{
    DAY_PATTERN_CHAR, DEFAULT_FORMAT, EMPTY_FORMAT, MONTH_PATTERN_CHAR, YEAR_PATTERN_CHAR,
};
use crate::prelude::*;

/// The date component a field token selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldKind {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// How month options are labeled, chosen by the length of the `M` run:
/// 1-2 letters numeric, 3 abbreviated, 4 or more full names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthStyle {
    #[default]
    Numeric,
    Abbreviated,
    Full,
}

impl MonthStyle {
    pub(crate) const fn from_run(len: usize) -> Self {
        match len {
            1 | 2 => Self::Numeric,
            3 => Self::Abbreviated,
            _ => Self::Full,
        }
    }
}

/// One segment of a format pattern: a date field or a literal run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Day,
    Month(MonthStyle),
    Year,
    Literal(String),
}

impl Token {
    /// The field this token selects, or `None` for literals.
    pub const fn field_kind(&self) -> Option<FieldKind> {
        match self {
            Self::Day => Some(FieldKind::Day),
            Self::Month(_) => Some(FieldKind::Month),
            Self::Year => Some(FieldKind::Year),
            Self::Literal(_) => None,
        }
    }
}

/// Error type for format pattern parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The same field appears in more than one run.
    #[error("Duplicate {field} field in format pattern")]
    DuplicateField { field: FieldKind },
}

/// An ordered sequence of field and literal tokens parsed from a format
/// string such as `"MM/dd/yyyy"`.
///
/// Literal characters of the source pattern are preserved exactly, in
/// order; adjacent literal characters merge into a single token. The
/// sentinel pattern `"empty"` parses to zero tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatPattern {
    tokens: Vec<Token>,
}

impl FormatPattern {
    /// A pattern with no tokens at all (the `"empty"` format).
    pub const fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    /// All tokens in pattern order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Field tokens only, in pattern order.
    pub fn fields(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.field_kind().is_some())
    }

    /// Whether the pattern contains a field of the given kind.
    pub fn has_field(&self, kind: FieldKind) -> bool {
        self.tokens.iter().any(|t| t.field_kind() == Some(kind))
    }
}

impl Default for FormatPattern {
    fn default() -> Self {
        DEFAULT_FORMAT.parse().unwrap_or_else(|_| Self::empty())
    }
}

impl FromStr for FormatPattern {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EMPTY_FORMAT {
            return Ok(Self::empty());
        }

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            let is_field = c == DAY_PATTERN_CHAR || c == MONTH_PATTERN_CHAR || c == YEAR_PATTERN_CHAR;
            if !is_field {
                literal.push(c);
                continue;
            }

            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }

            let token = if c == DAY_PATTERN_CHAR {
                Token::Day
            } else if c == YEAR_PATTERN_CHAR {
                Token::Year
            } else {
                Token::Month(MonthStyle::from_run(run))
            };

            // field_kind is Some for every non-literal token
            if let Some(field) = token.field_kind() {
                if tokens.iter().any(|t| t.field_kind() == Some(field)) {
                    return Err(FormatError::DuplicateField { field });
                }
            }
            tokens.push(token);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self { tokens })
    }
}

impl fmt::Display for FormatPattern {
    /// Canonical pattern text: `dd`, `MM`/`MMM`/`MMMM`, `yyyy`, literals
    /// verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Day => f.write_str("dd")?,
                Token::Month(MonthStyle::Numeric) => f.write_str("MM")?,
                Token::Month(MonthStyle::Abbreviated) => f.write_str("MMM")?,
                Token::Month(MonthStyle::Full) => f.write_str("MMMM")?,
                Token::Year => f.write_str("yyyy")?,
                Token::Literal(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> FormatPattern {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_pattern() {
        let pattern = FormatPattern::default();
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Month(MonthStyle::Numeric),
                Token::Day,
                Token::Year
            ]
        );
        assert_eq!(pattern.to_string(), "MMddyyyy");
    }

    #[test]
    fn test_two_digit_year_run() {
        let pattern = parse("ddMMyy");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Day,
                Token::Month(MonthStyle::Numeric),
                Token::Year
            ]
        );
    }

    #[test]
    fn test_month_style_by_run_length() {
        struct TestCase {
            pattern: &'static str,
            style: MonthStyle,
        }

        let cases = [
            TestCase {
                pattern: "ddMyyyy",
                style: MonthStyle::Numeric,
            },
            TestCase {
                pattern: "ddMMyyyy",
                style: MonthStyle::Numeric,
            },
            TestCase {
                pattern: "ddMMMyyyy",
                style: MonthStyle::Abbreviated,
            },
            TestCase {
                pattern: "ddMMMMyyyy",
                style: MonthStyle::Full,
            },
            TestCase {
                pattern: "ddMMMMMMyyyy",
                style: MonthStyle::Full,
            },
        ];

        for case in &cases {
            let pattern = parse(case.pattern);
            assert_eq!(
                pattern.tokens()[1],
                Token::Month(case.style),
                "pattern {}",
                case.pattern
            );
        }
    }

    #[test]
    fn test_literals_interleaved() {
        let pattern = parse("MM/dd/yyyy");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Month(MonthStyle::Numeric),
                Token::Literal("/".into()),
                Token::Day,
                Token::Literal("/".into()),
                Token::Year,
            ]
        );
        assert_eq!(pattern.to_string(), "MM/dd/yyyy");
    }

    #[test]
    fn test_literal_text_preserved_verbatim() {
        let pattern = parse("day: dd Month: MMMM year: yyyy");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Literal("day: ".into()),
                Token::Day,
                Token::Literal(" Month: ".into()),
                Token::Month(MonthStyle::Full),
                Token::Literal(" year: ".into()),
                Token::Year,
            ]
        );
        // Literal characters survive exactly, including repeated whitespace
        assert_eq!(pattern.to_string(), "day: dd Month: MMMM year: yyyy");
    }

    #[test]
    fn test_unknown_letters_are_literals() {
        let pattern = parse("dd-QQ-yyyy");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Day,
                Token::Literal("-QQ-".into()),
                Token::Year,
            ]
        );
    }

    #[test]
    fn test_empty_sentinel() {
        let pattern = parse("empty");
        assert!(pattern.tokens().is_empty());
        assert_eq!(pattern, FormatPattern::empty());
    }

    #[test]
    fn test_blank_pattern_has_no_fields() {
        let pattern = parse("");
        assert!(pattern.tokens().is_empty());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        assert_eq!(
            "dd/dd".parse::<FormatPattern>(),
            Err(FormatError::DuplicateField {
                field: FieldKind::Day
            })
        );
        assert_eq!(
            "MMddMMyyyy".parse::<FormatPattern>(),
            Err(FormatError::DuplicateField {
                field: FieldKind::Month
            })
        );
        assert_eq!(
            "yyyy-MM-dd yy".parse::<FormatPattern>(),
            Err(FormatError::DuplicateField {
                field: FieldKind::Year
            })
        );
    }

    #[test]
    fn test_field_queries() {
        let pattern = parse("ddMMyyyy");
        assert!(pattern.has_field(FieldKind::Day));
        assert!(pattern.has_field(FieldKind::Month));
        assert!(pattern.has_field(FieldKind::Year));
        assert_eq!(pattern.fields().count(), 3);

        let quick_only = parse("empty");
        assert!(!quick_only.has_field(FieldKind::Day));
        assert_eq!(quick_only.fields().count(), 0);
    }

    #[test]
    fn test_duplicate_error_display() {
        let err = FormatError::DuplicateField {
            field: FieldKind::Month,
        };
        assert_eq!(err.to_string(), "Duplicate month field in format pattern");
    }
}
