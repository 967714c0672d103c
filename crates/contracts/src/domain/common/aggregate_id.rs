use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of a backend-owned record.
///
/// The backend issues opaque string ids; the console never generates them.
pub trait AggregateId: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// Borrow the raw id
    fn as_str(&self) -> &str;

    /// Trailing eight characters, used as a compact reference in tables
    fn short(&self) -> &str {
        let raw = self.as_str();
        let count = raw.chars().count();
        if count <= 8 {
            return raw;
        }
        let start = raw
            .char_indices()
            .nth(count - 8)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &raw[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct RawId(String);

    impl Display for RawId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl AggregateId for RawId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_short_keeps_trailing_chars() {
        assert_eq!(RawId("6650f1a2b3c4d5e6".into()).short(), "b3c4d5e6");
        assert_eq!(RawId("abc".into()).short(), "abc");
    }
}
