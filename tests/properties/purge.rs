//! Property tests for purge-exclusion matching.

use proptest::prelude::*;

use ferry::domain::entities::{PurgeRules, ARCHIVE_NAME, PUBLIC_DIR};
use ferry::domain::services::{
    hidden_to_delete, release_root_to_delete, PurgeDecision, PurgePlanner,
};
use ferry::domain::value_objects::PurgePattern;

const ROOT: &str = "/0srv/1app/2public";
const SELF: &str = "/0srv/1app/2public/deploy.php";

fn pattern() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z]{1,6}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

/// Directory listing mixing pseudo-entries, dotfiles and the fixed names
fn listing() -> impl Strategy<Value = Vec<String>> {
    let name = prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(PUBLIC_DIR.to_string()),
        Just(ARCHIVE_NAME.to_string()),
        proptest::string::string_regex("\\.?[a-z0-9._-]{1,8}").unwrap(),
    ];
    proptest::collection::vec(name, 0..16)
}

fn planner(raw: &str) -> PurgePlanner {
    PurgePlanner::new(&PurgeRules::new([raw]))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization is idempotent and tolerates stray slashes.
    #[test]
    fn property_normalize_idempotent(raw in pattern()) {
        let messy = format!("/{}/", raw.replace('/', "//"));
        let once = PurgePattern::new(&messy).unwrap();
        prop_assert_eq!(once.as_str(), raw.as_str());
        prop_assert_eq!(PurgePattern::new(once.as_str()).unwrap(), once);
    }

    /// PROPERTY: The protected path itself is kept, file or directory.
    #[test]
    fn property_pattern_keeps_its_path(raw in pattern(), is_dir in any::<bool>()) {
        let path = format!("{ROOT}/{raw}");
        prop_assert_eq!(planner(&raw).decide(&path, SELF, is_dir), PurgeDecision::Keep);
    }

    /// PROPERTY: Matching is anchored at a segment boundary.
    #[test]
    fn property_partial_segment_is_deleted(raw in pattern(), prefix in "[a-z]{1,4}") {
        let path = format!("{ROOT}/{prefix}{raw}");
        prop_assert_eq!(planner(&raw).decide(&path, SELF, false), PurgeDecision::Delete);
    }

    /// PROPERTY: Every ancestor directory of a nested pattern is descended into.
    #[test]
    fn property_ancestors_are_descended(raw in pattern()) {
        let p = planner(&raw);
        let normalized = PurgePattern::new(&raw).unwrap();
        for ancestor in normalized.ancestors() {
            let path = format!("{ROOT}/{ancestor}");
            prop_assert_eq!(p.decide(&path, SELF, true), PurgeDecision::Descend);
        }
    }

    /// PROPERTY: The running script survives whatever the patterns say.
    #[test]
    fn property_script_survives(raw in pattern()) {
        prop_assert_eq!(planner(&raw).decide(SELF, SELF, false), PurgeDecision::KeepSelf);
    }

    /// PROPERTY: The dotfile purge never touches `.` or `..` and only
    /// deletes hidden names.
    #[test]
    fn property_hidden_purge_spares_pseudo_entries(names in listing()) {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let deleted = hidden_to_delete(&names);
        prop_assert!(!deleted.contains(&"."));
        prop_assert!(!deleted.contains(&".."));
        prop_assert!(deleted.iter().all(|n| n.starts_with('.')));
        let expected = names
            .iter()
            .filter(|n| n.starts_with('.') && **n != "." && **n != "..")
            .count();
        prop_assert_eq!(deleted.len(), expected);
    }

    /// PROPERTY: The release-root purge keeps `public`, the archive and
    /// hidden entries, and deletes everything else.
    #[test]
    fn property_release_root_keeps_public_and_archive(names in listing()) {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let deleted = release_root_to_delete(&names, ARCHIVE_NAME);
        prop_assert!(!deleted.contains(&PUBLIC_DIR));
        prop_assert!(!deleted.contains(&ARCHIVE_NAME));
        prop_assert!(deleted.iter().all(|n| !n.starts_with('.')));
        for name in &names {
            let kept = name.starts_with('.') || *name == PUBLIC_DIR || *name == ARCHIVE_NAME;
            prop_assert_eq!(deleted.contains(name), !kept, "{}", name);
        }
    }
}
