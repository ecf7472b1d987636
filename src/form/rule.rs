use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded email regex"));

/// Format produced by a browser date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One validation rule attached to a form field, with the message shown
/// when the rule is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    MinLength(usize, &'static str),
    Date(&'static str),
}

impl Rule {
    /// Returns the rule's message if `value` breaks it.
    ///
    /// Only `Required` rejects an empty value; the format rules leave empty
    /// input to it.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let accept = match *self {
            Rule::Required(_) => !value.is_empty(),
            _ if value.is_empty() => true,
            Rule::Email(_) => EMAIL_REGEX.is_match(value),
            Rule::MinLength(min, _) => value.chars().count() >= min,
            Rule::Date(_) => NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok(),
        };
        if accept {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub const fn message(&self) -> &'static str {
        match *self {
            Rule::Required(message)
            | Rule::Email(message)
            | Rule::MinLength(_, message)
            | Rule::Date(message) => message,
        }
    }
}

/// Runs the rules in order and stops at the first broken one.
pub fn first_violation(rules: &[Rule], value: &str) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule.check(value).err())
}
