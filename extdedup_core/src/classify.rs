//! Keep/delete decisions for base name groups

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extension::{ExtensionPair, Tracked};
use crate::scan::Group;

/// Which tracked extensions exist for a base name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presence {
    pub preferred: bool,
    pub default: bool,
}

impl Presence {
    /// Record that a file with the given extension was seen
    pub fn mark(&mut self, tracked: Tracked) {
        match tracked {
            Tracked::Preferred => self.preferred = true,
            Tracked::Default => self.default = true,
        }
    }
}

/// What to do with one base name group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Both variants exist: keep preferred, delete default
    KeepPreferredDeleteDefault,
    /// A single variant exists and is kept
    KeepOnly(Tracked),
    /// Nothing tracked for this base name
    Ignore,
}

impl Decision {
    pub fn for_presence(presence: Presence) -> Self {
        match (presence.preferred, presence.default) {
            (true, true) => Self::KeepPreferredDeleteDefault,
            (true, false) => Self::KeepOnly(Tracked::Preferred),
            (false, true) => Self::KeepOnly(Tracked::Default),
            (false, false) => Self::Ignore,
        }
    }

    /// The variant that survives, if any
    pub fn keep(self) -> Option<Tracked> {
        match self {
            Self::KeepPreferredDeleteDefault => Some(Tracked::Preferred),
            Self::KeepOnly(tracked) => Some(tracked),
            Self::Ignore => None,
        }
    }

    /// The variant to remove, if any
    pub fn delete(self) -> Option<Tracked> {
        match self {
            Self::KeepPreferredDeleteDefault => Some(Tracked::Default),
            _ => None,
        }
    }
}

/// Sorted keep and delete lists for a whole scan
///
/// Paths are relative to the scan root and sorted by their byte
/// representation, which is plain string order for UTF-8 names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DedupPlan {
    pub keep: Vec<PathBuf>,
    pub delete: Vec<PathBuf>,
}

impl DedupPlan {
    /// Classify every group and build the sorted lists
    pub fn from_groups<I>(groups: I, pair: &ExtensionPair) -> Self
    where
        I: IntoIterator<Item = Group>,
    {
        let mut plan = Self::default();

        for group in groups {
            let decision = Decision::for_presence(group.presence);
            log::debug!("{}: {:?}", group.base.display(), decision);

            if let Some(tracked) = decision.keep() {
                plan.keep.push(with_extension(&group.base, pair, tracked));
            }
            if let Some(tracked) = decision.delete() {
                plan.delete.push(with_extension(&group.base, pair, tracked));
            }
        }

        sort_paths(&mut plan.keep);
        sort_paths(&mut plan.delete);
        plan
    }

    pub fn keep_count(&self) -> usize {
        self.keep.len()
    }

    pub fn delete_count(&self) -> usize {
        self.delete.len()
    }

    /// True when there is nothing to keep or delete
    pub fn is_empty(&self) -> bool {
        self.keep.is_empty() && self.delete.is_empty()
    }
}

/// Re-attach a tracked extension to a base name
///
/// Appends rather than using `Path::with_extension`, which would replace a
/// dotted part of the stem (`v1.2` + `png` must give `v1.2.png`).
fn with_extension(base: &Path, pair: &ExtensionPair, tracked: Tracked) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(pair.get(tracked).as_str());
    PathBuf::from(name)
}

fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pair() -> ExtensionPair {
        ExtensionPair::parse("png", "jpg").unwrap()
    }

    fn group(base: &str, preferred: bool, default: bool) -> Group {
        Group {
            base: PathBuf::from(base),
            presence: Presence { preferred, default },
        }
    }

    #[test]
    fn test_decision_table() {
        let both = Presence {
            preferred: true,
            default: true,
        };
        assert_eq!(
            Decision::for_presence(both),
            Decision::KeepPreferredDeleteDefault
        );
        assert_eq!(
            Decision::for_presence(Presence {
                preferred: true,
                default: false
            }),
            Decision::KeepOnly(Tracked::Preferred)
        );
        assert_eq!(
            Decision::for_presence(Presence {
                preferred: false,
                default: true
            }),
            Decision::KeepOnly(Tracked::Default)
        );
        assert_eq!(
            Decision::for_presence(Presence::default()),
            Decision::Ignore
        );
    }

    #[test]
    fn test_plan_for_documented_scenario() {
        let groups = vec![group("a", true, true), group("b", false, true)];
        let plan = DedupPlan::from_groups(groups, &pair());

        assert_eq!(plan.keep, vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
        assert_eq!(plan.delete, vec![PathBuf::from("a.jpg")]);
        assert_eq!(plan.keep_count(), 2);
        assert_eq!(plan.delete_count(), 1);
    }

    #[test]
    fn test_plan_is_sorted_as_strings() {
        let groups = vec![
            group("b", true, true),
            group("a/z", true, true),
            group("a.b", true, true),
        ];
        let plan = DedupPlan::from_groups(groups, &pair());

        // '.' (0x2e) sorts before '/' (0x2f)
        assert_eq!(
            plan.delete,
            vec![
                PathBuf::from("a.b.jpg"),
                PathBuf::from("a/z.jpg"),
                PathBuf::from("b.jpg")
            ]
        );
    }

    #[test]
    fn test_dotted_stem_keeps_its_dots() {
        let plan = DedupPlan::from_groups(vec![group("render.v1.2", true, true)], &pair());

        assert_eq!(plan.keep, vec![PathBuf::from("render.v1.2.png")]);
        assert_eq!(plan.delete, vec![PathBuf::from("render.v1.2.jpg")]);
    }

    #[test]
    fn test_empty_plan() {
        let plan = DedupPlan::from_groups(Vec::new(), &pair());
        assert!(plan.is_empty());
    }

    proptest! {
        #[test]
        fn prop_delete_only_with_preferred_sibling(
            entries in prop::collection::btree_map("[a-z]{1,6}", (any::<bool>(), any::<bool>()), 0..20)
        ) {
            let groups: Vec<Group> = entries
                .iter()
                .map(|(base, (p, d))| group(base, *p, *d))
                .collect();
            let plan = DedupPlan::from_groups(groups, &pair());

            let both = entries.values().filter(|(p, d)| *p && *d).count();
            let any = entries.values().filter(|(p, d)| *p || *d).count();
            prop_assert_eq!(plan.delete_count(), both);
            prop_assert_eq!(plan.keep_count(), any);

            for path in &plan.delete {
                let base = path.with_extension("");
                let key = base.to_str().unwrap();
                prop_assert_eq!(entries.get(key), Some(&(true, true)));
                let kept = PathBuf::from(format!("{key}.png"));
                prop_assert!(plan.keep.contains(&kept));
            }
        }
    }
}
