//! Property tests for PHP literal escaping.

use proptest::prelude::*;

use ferry::domain::services::escaping::{
    escape_single_quoted, quote_single, single_quoted_literals, unescape_single_quoted,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: PHP reads back exactly the text that was escaped.
    #[test]
    fn property_escape_round_trip(s in "(?s).{0,128}") {
        prop_assert_eq!(unescape_single_quoted(&escape_single_quoted(&s)), s);
    }

    /// PROPERTY: A quoted value is one literal; quotes and backslashes in it
    /// never terminate it early.
    #[test]
    fn property_quoted_value_stays_one_literal(s in "[a-z'\\\\ ;$]{0,32}") {
        let line = format!("exec({}, $debug);", quote_single(&s));
        let literals = single_quoted_literals(&line);
        prop_assert_eq!(literals.len(), 1);
        prop_assert_eq!(unescape_single_quoted(&literals[0]), s);
    }

    /// PROPERTY: Escaped text has no unescaped single quote.
    #[test]
    fn property_no_bare_quote(s in "(?s).{0,64}") {
        let escaped = escape_single_quoted(&s);
        let mut backslashes = 0usize;
        for c in escaped.chars() {
            if c == '\'' {
                prop_assert!(backslashes % 2 == 1, "bare quote in {:?}", escaped);
            }
            backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        }
    }
}
