#![forbid(unsafe_code)]

//! Wrapping options.

/// Options adjusting word-wrapping behavior.
///
/// The default value wraps at spaces, never breaks inside a word and appends
/// no marker.
///
/// # Example
/// ```
/// use wordwrap::WrapOptions;
///
/// let options = WrapOptions::new().break_words(true).break_marker("-");
/// assert!(options.break_words);
/// assert_eq!(options.break_marker, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapOptions {
    /// Disable width-based wrapping; only existing line breaks are used.
    pub no_wrap: bool,
    /// Allow breaking a line mid-word when no space is available.
    pub break_words: bool,
    /// Appended to a line that was broken mid-word.
    ///
    /// Counts as a single column regardless of its length. Ignored unless
    /// `break_words` is set.
    pub break_marker: String,
}

impl WrapOptions {
    /// Create options with wrapping enabled and word breaking disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether wrapping is disabled.
    #[must_use]
    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    /// Set whether words may be broken mid-word.
    #[must_use]
    pub fn break_words(mut self, break_words: bool) -> Self {
        self.break_words = break_words;
        self
    }

    /// Set the marker appended to word-broken lines.
    #[must_use]
    pub fn break_marker(mut self, marker: impl Into<String>) -> Self {
        self.break_marker = marker.into();
        self
    }

    /// True when a non-empty marker reserves a column on word-broken lines.
    #[inline]
    pub(crate) fn has_marker(&self) -> bool {
        !self.break_marker.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wraps_without_breaking_words() {
        let options = WrapOptions::default();
        assert!(!options.no_wrap);
        assert!(!options.break_words);
        assert!(options.break_marker.is_empty());
        assert!(!options.has_marker());
    }

    #[test]
    fn builder_sets_fields() {
        let options = WrapOptions::new()
            .no_wrap(true)
            .break_words(true)
            .break_marker("~");
        assert!(options.no_wrap);
        assert!(options.break_words);
        assert_eq!(options.break_marker, "~");
        assert!(options.has_marker());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let options: WrapOptions =
            serde_json::from_str(r#"{"break_words": true}"#).expect("valid options json");
        assert_eq!(options, WrapOptions::new().break_words(true));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_string(&WrapOptions::new().break_marker("-"))
            .expect("serialize options");
        assert_eq!(
            json,
            r#"{"no_wrap":false,"break_words":false,"break_marker":"-"}"#
        );
    }
}
