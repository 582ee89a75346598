use std::fmt;

pub const DEBUG_PARAM: &str = "debug";
pub const OPEN_PARAM: &str = "open";
pub const PAGE_PARAM: &str = "page";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JournalOptions {
    pub debug_hud: bool,
    pub start_open: bool,
    pub start_page: Option<usize>,
}

impl JournalOptions {
    /// Builds options from query parameters, keeping defaults for values that
    /// do not parse. Unknown keys are ignored.
    pub fn from_params<'a, I>(params: I) -> (Self, Vec<OptionError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        let mut errors = Vec::new();
        for (key, value) in params {
            let applied = match key {
                DEBUG_PARAM => parse_flag(value).map(|flag| options.debug_hud = flag),
                OPEN_PARAM => parse_flag(value).map(|flag| options.start_open = flag),
                PAGE_PARAM => parse_page(value).map(|page| options.start_page = Some(page)),
                _ => continue,
            };
            if applied.is_none() {
                errors.push(OptionError {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
        (options, errors)
    }
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Pages are numbered from 1 in the URL, the same way the indicator shows them.
pub fn parse_page(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|page| page.checked_sub(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionError {
    pub key: String,
    pub value: String,
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignoring {}={:?}", self.key, self.value)
    }
}

impl std::error::Error for OptionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_params() {
        let (options, errors) =
            JournalOptions::from_params([("debug", "1"), ("open", "true"), ("page", "3")]);
        assert!(errors.is_empty());
        assert!(options.debug_hud);
        assert!(options.start_open);
        assert_eq!(options.start_page, Some(2));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let (options, errors) =
            JournalOptions::from_params([("debug", "maybe"), ("page", "0"), ("theme", "dark")]);
        assert_eq!(options, JournalOptions::default());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "ignoring debug=\"maybe\"");
    }
}
