//! Canonical cursor roles and their filename aliases
//!
//! Windows keeps the active cursor scheme as one registry value per role under
//! `HKCU\Control Panel\Cursors`. The catalog maps each role to the filename
//! keywords (Japanese and common English spellings) used to recognize which
//! role a cursor file is intended for.

use std::fmt;

/// One of the 17 cursor-appearance slots Windows recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CursorRole {
    Arrow,
    Help,
    AppStarting,
    Wait,
    Crosshair,
    IBeam,
    Handwriting,
    No,
    SizeNS,
    SizeWE,
    SizeNWSE,
    SizeNESW,
    SizeAll,
    UpArrow,
    Hand,
    LocationSelect,
    PersonSelect,
}

impl CursorRole {
    /// Every role, in registry order.
    pub const ALL: [Self; 17] = [
        Self::Arrow,
        Self::Help,
        Self::AppStarting,
        Self::Wait,
        Self::Crosshair,
        Self::IBeam,
        Self::Handwriting,
        Self::No,
        Self::SizeNS,
        Self::SizeWE,
        Self::SizeNWSE,
        Self::SizeNESW,
        Self::SizeAll,
        Self::UpArrow,
        Self::Hand,
        Self::LocationSelect,
        Self::PersonSelect,
    ];

    /// The registry value name for this role under `Control Panel\Cursors`.
    pub fn registry_value(self) -> &'static str {
        match self {
            Self::Arrow => "Arrow",
            Self::Help => "Help",
            Self::AppStarting => "AppStarting",
            Self::Wait => "Wait",
            Self::Crosshair => "Crosshair",
            Self::IBeam => "IBeam",
            Self::Handwriting => "Handwriting",
            Self::No => "No",
            Self::SizeNS => "SizeNS",
            Self::SizeWE => "SizeWE",
            Self::SizeNWSE => "SizeNWSE",
            Self::SizeNESW => "SizeNESW",
            Self::SizeAll => "SizeAll",
            Self::UpArrow => "UpArrow",
            Self::Hand => "Hand",
            Self::LocationSelect => "LocationSelect",
            Self::PersonSelect => "PersonSelect",
        }
    }
}

impl fmt::Display for CursorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.registry_value())
    }
}

/// Ordered role → alias mapping consumed by the matcher.
///
/// Aliases compare case-insensitively. List order within a role matters only
/// for the partial-match tie-break, where longer aliases are tested first.
/// The catalog is immutable once built; pass a custom one to the matcher to
/// substitute the recognition table (e.g. in tests).
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    entries: Vec<(CursorRole, Vec<String>)>,
}

impl RoleCatalog {
    pub fn new(entries: Vec<(CursorRole, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Entries in catalog order (the order roles are matched in).
    pub fn entries(&self) -> &[(CursorRole, Vec<String>)] {
        &self.entries
    }

    /// Aliases for a role, in catalog order. Empty if the role is not listed.
    pub fn aliases(&self, role: CursorRole) -> &[String] {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, aliases)| aliases.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for RoleCatalog {
    /// The built-in recognition table: Japanese scheme names as shipped by
    /// cursor-set authors (plain, numbered, and extension-bearing spellings)
    /// plus common English keywords.
    fn default() -> Self {
        let table: [(CursorRole, &[&str]); 17] = [
            (
                CursorRole::Arrow,
                &["通常", "1_通常", "通常.ani", "通常.cur", "Normal", "Default", "Arrow"],
            ),
            (
                CursorRole::Help,
                &["ヘルプの選択", "2_ヘルプの選択", "ヘルプ.ani", "ヘルプ.cur", "Help", "Question"],
            ),
            (
                CursorRole::AppStarting,
                &[
                    "バックグラウンドで作業中",
                    "3_バックグラウンドで作業中",
                    "バックグラウンド.ani",
                    "バックグラウンド.cur",
                    "Working",
                    "Background",
                ],
            ),
            (
                CursorRole::Wait,
                &["待ち状態", "4_待ち状態", "待ち状態.ani", "待ち状態.cur", "Wait", "Busy"],
            ),
            (
                CursorRole::Crosshair,
                &["領域選択", "5_領域選択", "領域選択.ani", "領域選択.cur", "Cross", "Precision"],
            ),
            (
                CursorRole::IBeam,
                &[
                    "テキスト選択",
                    "6_テキスト選択",
                    "テキスト選択.ani",
                    "テキスト選択.cur",
                    "Text",
                    "IBeam",
                ],
            ),
            (
                CursorRole::Handwriting,
                &["手書き", "7_手書き", "手書き.ani", "手書き.cur", "Handwriting", "Pen"],
            ),
            (
                CursorRole::No,
                &["利用不可", "8_利用不可", "利用不可.ani", "利用不可.cur", "Unavailable", "No", "Denied"],
            ),
            (
                CursorRole::SizeNS,
                &[
                    "上下に拡大,縮小",
                    "9_上下に拡大,縮小",
                    "上下.ani",
                    "上下.cur",
                    "上下",
                    "NS",
                    "NorthSouth",
                    "Vertical",
                ],
            ),
            (
                CursorRole::SizeWE,
                &[
                    "左右に拡大,縮小",
                    "10_左右に拡大,縮小",
                    "左右.ani",
                    "左右.cur",
                    "左右",
                    "WE",
                    "WestEast",
                    "Horizontal",
                ],
            ),
            (
                CursorRole::SizeNWSE,
                &[
                    "斜めに拡大,縮小1",
                    "11_斜めに拡大,縮小1",
                    "斜め.ani",
                    "斜め.cur",
                    "斜め",
                    "NWSE",
                    "Diagonal1",
                ],
            ),
            (
                CursorRole::SizeNESW,
                &[
                    "斜めに拡大,縮小2",
                    "12_斜めに拡大,縮小2",
                    "斜め2.ani",
                    "斜め2.cur",
                    "斜め2",
                    "NESW",
                    "Diagonal2",
                ],
            ),
            (
                CursorRole::SizeAll,
                &["移動", "13_移動", "移動.ani", "移動.cur", "Move", "SizeAll"],
            ),
            (
                CursorRole::UpArrow,
                &["代替選択", "代替選択.ani", "代替選択.cur", "Alternate", "UpArrow"],
            ),
            (
                CursorRole::Hand,
                &[
                    "リンクの選択",
                    "15_リンクの選択",
                    "リンクの選択.ani",
                    "リンクの選択.cur",
                    "リンク",
                    "Link",
                    "Hand",
                ],
            ),
            (
                CursorRole::LocationSelect,
                &["位置選択", "Location", "Pin", "GPS", "Point"],
            ),
            (
                CursorRole::PersonSelect,
                &["ユーザー選択", "Person", "User", "People"],
            ),
        ];

        Self {
            entries: table
                .iter()
                .map(|(role, aliases)| {
                    (*role, aliases.iter().map(|a| a.to_string()).collect())
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_covers_every_role() {
        let catalog = RoleCatalog::default();
        assert_eq!(catalog.entries().len(), 17);

        for role in CursorRole::ALL {
            assert!(
                !catalog.aliases(role).is_empty(),
                "role {role} has no aliases"
            );
        }
    }

    #[test]
    fn test_default_catalog_order_matches_registry_order() {
        let catalog = RoleCatalog::default();
        let order: Vec<CursorRole> = catalog.entries().iter().map(|(r, _)| *r).collect();
        assert_eq!(order, CursorRole::ALL);
    }

    #[test]
    fn test_registry_value_names() {
        assert_eq!(CursorRole::Arrow.registry_value(), "Arrow");
        assert_eq!(CursorRole::AppStarting.registry_value(), "AppStarting");
        assert_eq!(CursorRole::SizeNWSE.registry_value(), "SizeNWSE");
        assert_eq!(CursorRole::PersonSelect.registry_value(), "PersonSelect");
    }

    #[test]
    fn test_aliases_include_english_keywords() {
        let catalog = RoleCatalog::default();
        assert!(catalog
            .aliases(CursorRole::Arrow)
            .iter()
            .any(|a| a == "Normal"));
        assert!(catalog
            .aliases(CursorRole::IBeam)
            .iter()
            .any(|a| a == "Text"));
    }

    #[test]
    fn test_aliases_for_unlisted_role_are_empty() {
        let catalog = RoleCatalog::new(vec![(
            CursorRole::Arrow,
            vec!["Normal".to_string()],
        )]);
        assert!(catalog.aliases(CursorRole::Wait).is_empty());
    }

    #[test]
    fn test_display_uses_registry_value() {
        assert_eq!(CursorRole::IBeam.to_string(), "IBeam");
    }
}
