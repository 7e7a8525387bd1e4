use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ViewKind
///
/// Closed set of UI contexts a console renders an entity in.
/// Declaration order is the canonical rendering order; it drives both
/// `ALL` and the `Ord` used when per-view maps are emitted on the wire.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    List,
    Form,
    Show,
    Quick,
}

impl ViewKind {
    /// Every view kind, in canonical order.
    pub const ALL: [Self; 4] = [Self::List, Self::Form, Self::Show, Self::Quick];
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::List => "list",
            Self::Form => "form",
            Self::Show => "show",
            Self::Quick => "quick",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_view_in_canonical_order() {
        assert_eq!(
            ViewKind::ALL,
            [
                ViewKind::List,
                ViewKind::Form,
                ViewKind::Show,
                ViewKind::Quick
            ]
        );
    }

    #[test]
    fn ord_follows_canonical_order() {
        let mut shuffled = [
            ViewKind::Quick,
            ViewKind::List,
            ViewKind::Show,
            ViewKind::Form,
        ];
        shuffled.sort();

        assert_eq!(shuffled, ViewKind::ALL);
    }

    #[test]
    fn serde_names_are_stable() {
        for (view, expected) in [
            (ViewKind::List, "\"list\""),
            (ViewKind::Form, "\"form\""),
            (ViewKind::Show, "\"show\""),
            (ViewKind::Quick, "\"quick\""),
        ] {
            let json = serde_json::to_string(&view).expect("view kind should serialize");
            assert_eq!(json, expected);

            let back: ViewKind =
                serde_json::from_str(&json).expect("view kind should deserialize");
            assert_eq!(back, view);
        }
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(ViewKind::Quick.to_string(), "quick");
        assert_eq!(ViewKind::List.to_string(), "list");
    }
}
