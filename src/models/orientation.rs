//! Panel orientation for the split layout.

use serde::{Deserialize, Serialize};

/// Which side of the screen the fixed light panel occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Light panel on the left, dark panel on the right.
    Left,
    /// Light panel on the right, dark panel on the left.
    #[default]
    Right,
    /// Single full-bleed light panel, no dark panel.
    Full,
}

/// Horizontal side of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Direction multiplier for horizontal offsets (`-1.0` for left).
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Orientation {
    /// CSS class applied to the layout root. Exactly one per orientation.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Left => "panel-on-left",
            Self::Right => "panel-on-right",
            Self::Full => "panel-full",
        }
    }

    /// Panel placement for this orientation.
    pub fn panels(self) -> PanelPlacement {
        match self {
            Self::Left => PanelPlacement {
                light: Side::Left,
                dark: Some(Side::Right),
            },
            Self::Right => PanelPlacement {
                light: Side::Right,
                dark: Some(Side::Left),
            },
            Self::Full => PanelPlacement {
                light: Side::Left,
                dark: None,
            },
        }
    }

    pub fn has_dark_panel(self) -> bool {
        self.panels().dark.is_some()
    }

    /// Edge the menu slides in from: the light panel's side.
    pub fn menu_side(self) -> Side {
        self.panels().light
    }
}

/// Where the light and dark panels sit. `dark` is `None` for full-bleed pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelPlacement {
    pub light: Side,
    pub dark: Option<Side>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Orientation; 3] = [Orientation::Left, Orientation::Right, Orientation::Full];

    #[test]
    fn test_class_names_are_mutually_exclusive() {
        let classes: Vec<_> = ALL.iter().map(|o| o.class_name()).collect();
        for (i, class) in classes.iter().enumerate() {
            let matching = classes.iter().filter(|c| *c == class).count();
            assert_eq!(matching, 1, "class {} selected by more than one orientation", i);
        }
        assert_eq!(Orientation::Left.class_name(), "panel-on-left");
        assert_eq!(Orientation::Right.class_name(), "panel-on-right");
        assert_eq!(Orientation::Full.class_name(), "panel-full");
    }

    #[test]
    fn test_full_never_has_dark_panel() {
        assert!(!Orientation::Full.has_dark_panel());
        assert!(Orientation::Left.has_dark_panel());
        assert!(Orientation::Right.has_dark_panel());
    }

    #[test]
    fn test_light_and_dark_are_opposite() {
        for o in [Orientation::Left, Orientation::Right] {
            let p = o.panels();
            assert_eq!(p.dark, Some(p.light.opposite()));
        }
        assert_eq!(Orientation::Left.panels().light, Side::Left);
        assert_eq!(Orientation::Right.panels().light, Side::Right);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let o: Orientation = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(o, Orientation::Full);
    }
}
