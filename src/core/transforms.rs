use crate::core::{LineError, LineTransform};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "MODIFIED: ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimMode {
    #[default]
    Trailing,
    Both,
    None,
}

impl TrimMode {
    pub fn apply<'a>(&self, line: &'a str) -> &'a str {
        match self {
            TrimMode::Trailing => line.trim_end(),
            TrimMode::Both => line.trim(),
            TrimMode::None => line.trim_end_matches('\n'),
        }
    }
}

/// Reference policy: trim, uppercase, prepend a fixed prefix and end with
/// exactly one newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixUppercase {
    pub prefix: String,
    pub trim: TrimMode,
    pub uppercase: bool,
}

impl PrefixUppercase {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn modify(&self, line: &str) -> String {
        let body = self.trim.apply(line);
        if self.uppercase {
            format!("{}{}\n", self.prefix, body.to_uppercase())
        } else {
            format!("{}{}\n", self.prefix, body)
        }
    }
}

impl Default for PrefixUppercase {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            trim: TrimMode::default(),
            uppercase: true,
        }
    }
}

impl LineTransform for PrefixUppercase {
    fn apply(&self, line: &str) -> Result<String, LineError> {
        Ok(self.modify(line))
    }
}

/// Adapts a closure that may reject a line.
pub struct TryLineFn<F>(pub F);

impl<F, E> LineTransform for TryLineFn<F>
where
    F: Fn(&str) -> Result<String, E> + Send + Sync,
    E: Into<LineError>,
{
    fn apply(&self, line: &str) -> Result<String, LineError> {
        (self.0)(line).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_transform() {
        let transform = PrefixUppercase::default();
        assert_eq!(transform.modify("hello\n"), "MODIFIED: HELLO\n");
    }

    #[test]
    fn test_trailing_trim_keeps_leading_whitespace() {
        let transform = PrefixUppercase::default();
        assert_eq!(transform.modify("  indented \t\n"), "MODIFIED:   INDENTED\n");
    }

    #[test]
    fn test_both_trim() {
        let transform = PrefixUppercase::default().with_trim(TrimMode::Both);
        assert_eq!(transform.modify("  indented \t\n"), "MODIFIED: INDENTED\n");
    }

    #[test]
    fn test_no_trim_only_drops_newline() {
        let transform = PrefixUppercase::new(">> ")
            .with_trim(TrimMode::None)
            .with_uppercase(false);
        assert_eq!(transform.modify(" keep me \n"), ">>  keep me \n");
    }

    #[test]
    fn test_blank_line_still_gets_prefix() {
        let transform = PrefixUppercase::default();
        assert_eq!(transform.modify("\n"), "MODIFIED: \n");
    }

    #[test]
    fn test_reapplying_accumulates_prefix() {
        let transform = PrefixUppercase::default();
        let once = transform.modify("hello\n");
        let twice = transform.modify(&once);
        assert_ne!(once, twice);
        assert_eq!(twice, "MODIFIED: MODIFIED: HELLO\n");
    }

    #[test]
    fn test_try_line_fn_propagates_rejection() {
        let transform = TryLineFn(|line: &str| {
            if line.contains("bad") {
                Err("contains bad".to_string())
            } else {
                Ok(line.to_string())
            }
        });
        assert_eq!(transform.apply("ok\n").unwrap(), "ok\n");
        let err = transform.apply("bad\n").unwrap_err();
        assert_eq!(err.to_string(), "contains bad");
    }

    #[test]
    fn test_closure_is_line_transform() {
        let transform = |line: &str| line.to_lowercase();
        assert_eq!(transform.apply("ABC").unwrap(), "abc");
    }
}
