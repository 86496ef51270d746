//! Property-based tests for portable path notation.

use super::codec::PortablePathCodec;
use super::join::{join, with_trailing_separator};
use crate::buffer::PathBuffer;
use proptest::prelude::*;

const HOME: &str = "/home/alice";
const APP: &str = "/home/alice/retroarch";

fn codec() -> PortablePathCodec {
    PortablePathCodec::new(Some(HOME.into()), Some(APP.into()))
}

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,16}"
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

// Absolute paths with no notation token.
fn absolute_strategy() -> impl Strategy<Value = String> {
    relative_strategy().prop_map(|rel| format!("/{rel}"))
}

// Absolute paths strictly below one of the two anchors.
fn anchored_strategy() -> impl Strategy<Value = String> {
    (prop_oneof![Just(HOME), Just(APP)], relative_strategy())
        .prop_map(|(anchor, rel)| format!("{anchor}/{rel}"))
}

fn expand(input: &str) -> String {
    let mut buf = PathBuffer::default();
    codec().expand(input, &mut buf).unwrap();
    buf.into_string()
}

fn abbreviate(input: &str) -> String {
    let mut buf = PathBuffer::default();
    codec().abbreviate(input, &mut buf).unwrap();
    buf.into_string()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Expansion leaves untokened paths alone.
    #[test]
    fn expand_untokened_is_identity(path in absolute_strategy()) {
        prop_assert_eq!(expand(&path), path);
    }

    // Abbreviation is undone by expansion for paths under an anchor.
    #[test]
    fn expand_inverts_abbreviate(path in anchored_strategy()) {
        let abbreviated = abbreviate(&path);
        prop_assert!(PortablePathCodec::is_portable(&abbreviated));
        prop_assert_eq!(expand(&abbreviated), path);
    }

    // Paths under the application directory always take the `:` form.
    #[test]
    fn application_anchor_wins(rel in relative_strategy()) {
        let abbreviated = abbreviate(&format!("{APP}/{rel}"));
        prop_assert_eq!(abbreviated, format!(":/{rel}"));
    }

    // Abbreviating a portable path changes nothing.
    #[test]
    fn abbreviate_portable_is_identity(rel in relative_strategy()) {
        let portable = format!(":/{rel}");
        prop_assert_eq!(abbreviate(&portable), portable.clone());
        let portable = format!("~/{rel}");
        prop_assert_eq!(abbreviate(&portable), portable);
    }

    // A result either fits its buffer exactly or the buffer stays empty.
    #[test]
    fn expand_never_truncates(rel in relative_strategy(), capacity in 0usize..48) {
        let input = format!("~/{rel}");
        let full = expand(&input);
        let mut buf = PathBuffer::new(capacity);
        match codec().expand(&input, &mut buf) {
            Ok(()) => {
                prop_assert!(full.len() < capacity);
                prop_assert_eq!(buf.as_str(), full.as_str());
            }
            Err(_) => {
                prop_assert!(full.len() >= capacity);
                prop_assert!(buf.is_empty());
            }
        }
    }

    // Trailing separator normalization is idempotent.
    #[test]
    fn trailing_separator_idempotent(path in absolute_strategy()) {
        let once = with_trailing_separator(&path);
        prop_assert_eq!(with_trailing_separator(&once), once.clone());
        prop_assert!(once.ends_with('/'));
        prop_assert!(!once.ends_with("//"));
    }

    // Joining never produces a doubled separator at the seam.
    #[test]
    fn join_single_separator(base in absolute_strategy(), rel in relative_strategy()) {
        let joined = join(&format!("{base}/"), &rel);
        prop_assert_eq!(joined, format!("{base}/{rel}"));
    }
}
