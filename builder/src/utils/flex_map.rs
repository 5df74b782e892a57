use indexmap::IndexMap;

/// Case-folded ASCII letters and digits of `s`, with everything else dropped.
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
}

fn flex_eq(a: &str, b: &str) -> bool {
    itertools::equal(folded(a), folded(b))
}

/// Lookup of schema identifiers that tolerates differences in case and punctuation, so that
/// `NQ Owner` finds `nq_owner`.
pub trait FlexMap<T> {
    /// Returns the stored key along with the value, because callers want the canonical name.
    fn flex_get_full(&self, key: &str) -> Option<(&String, &T)>;
}

impl<T> FlexMap<T> for IndexMap<String, T> {
    fn flex_get_full(&self, search_key: &str) -> Option<(&String, &T)> {
        let mut winner = self.get_key_value(search_key);
        if winner.is_some() {
            return winner;
        }

        for (key, value) in self.iter() {
            if !flex_eq(key, search_key) {
                continue;
            }
            if winner.is_none() {
                winner = Some((key, value));
            } else {
                // Ambiguous matches resolve to nothing
                return None;
            }
        }

        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_eq() {
        assert!(flex_eq("foo", "foo"));
        assert!(flex_eq("", ""));
        assert!(flex_eq("nq_owner", "NQ Owner"));
        assert!(flex_eq("FOO Bar!", "foo bar."));

        assert!(!flex_eq("a", "aa"));
        assert!(!flex_eq("onetwo", "one"));
        assert!(!flex_eq("four", "föúr")); // Unicode -> ASCII transliteration is not supported
    }

    #[test]
    fn test_flex_map() {
        let mut map = IndexMap::new();
        map.insert("one".to_string(), 1);
        map.insert("one two".to_string(), 12);
        map.insert("Two three".to_string(), 23);
        map.insert("two_three".to_string(), 23);

        assert_eq!(map.flex_get_full("ONE"), Some((&"one".to_string(), &1)));
        assert_eq!(
            map.flex_get_full("oneTwo"),
            Some((&"one two".to_string(), &12))
        );
        assert_eq!(
            map.flex_get_full("two_three"),
            Some((&"two_three".to_string(), &23))
        );
        assert_eq!(map.flex_get_full("twoThree"), None);
        assert_eq!(map.flex_get_full("nope"), None);
    }
}
