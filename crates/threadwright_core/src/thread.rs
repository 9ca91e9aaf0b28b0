//! Generated thread units.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One post body of a thread. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
#[serde(try_from = "String", into = "String")]
pub struct ThreadUnit(String);

impl ThreadUnit {
    /// Trim `text` and wrap it, or return `None` if nothing remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwright_core::ThreadUnit;
    ///
    /// assert_eq!(ThreadUnit::new("  hello ").unwrap().as_str(), "hello");
    /// assert!(ThreadUnit::new(" \n\t ").is_none());
    /// ```
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Borrow the unit text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for ThreadUnit {
    type Error = &'static str;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(&text).ok_or("thread unit is blank")
    }
}

impl From<ThreadUnit> for String {
    fn from(unit: ThreadUnit) -> Self {
        unit.0
    }
}

/// Ordered units derived from one generation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Thread {
    /// Units in posting order
    units: Vec<ThreadUnit>,
}

impl Thread {
    /// Build a thread from already-validated units.
    pub fn new(units: Vec<ThreadUnit>) -> Self {
        Self { units }
    }

    /// Split a raw response on `delimiter`, trimming each segment and
    /// dropping the empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwright_core::Thread;
    ///
    /// let thread = Thread::from_delimited("A|||B|||  |||C", "|||");
    /// let texts: Vec<&str> = thread.units().iter().map(|u| u.as_str()).collect();
    /// assert_eq!(texts, vec!["A", "B", "C"]);
    /// ```
    pub fn from_delimited(raw: &str, delimiter: &str) -> Self {
        let units = raw.split(delimiter).filter_map(ThreadUnit::new).collect();
        Self { units }
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True when there is nothing to post.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_drops_blank_segments() {
        let thread = Thread::from_delimited("A|||B|||  |||C", "|||");
        assert_eq!(thread.len(), 3);
        assert_eq!(thread.units()[0].as_str(), "A");
        assert_eq!(thread.units()[1].as_str(), "B");
        assert_eq!(thread.units()[2].as_str(), "C");
    }

    #[test]
    fn test_split_trims_multiline_units() {
        let raw = "\n🚀 Hook tweet here\n|||\n  Second tweet with numbers: 800V  \n|||\nWhat do you think? 🤔\n";
        let thread = Thread::from_delimited(raw, "|||");
        assert_eq!(thread.len(), 3);
        assert_eq!(thread.units()[0].as_str(), "🚀 Hook tweet here");
        assert_eq!(
            thread.units()[1].as_str(),
            "Second tweet with numbers: 800V"
        );
    }

    #[test]
    fn test_split_without_delimiter_is_single_unit() {
        let thread = Thread::from_delimited("just one tweet", "|||");
        assert_eq!(thread.len(), 1);
    }

    #[test]
    fn test_split_of_blank_response_is_empty() {
        assert!(Thread::from_delimited("   ", "|||").is_empty());
        assert!(Thread::from_delimited("||||||", "|||").is_empty());
        assert!(Thread::from_delimited("", "|||").is_empty());
    }

    #[test]
    fn test_deserialize_keeps_unit_invariant() {
        let unit: ThreadUnit = serde_json::from_str(r#""  hook  ""#).unwrap();
        assert_eq!(unit.as_str(), "hook");
        assert!(serde_json::from_str::<ThreadUnit>(r#""   ""#).is_err());

        assert!(serde_json::from_str::<Thread>(r#"{"units":["A"," "]}"#).is_err());
        let thread: Thread = serde_json::from_str(r#"{"units":[" A ","B"]}"#).unwrap();
        assert_eq!(thread.units()[0].as_str(), "A");
    }

    #[test]
    fn test_serialize_is_plain_string() {
        let unit = ThreadUnit::new("hook").unwrap();
        assert_eq!(serde_json::to_string(&unit).unwrap(), r#""hook""#);
    }

    #[test]
    fn test_char_count_is_not_byte_length() {
        let unit = ThreadUnit::new("é 800V").unwrap();
        assert_eq!(unit.as_str().len(), 7);
        assert_eq!(unit.char_count(), 6);
    }
}
