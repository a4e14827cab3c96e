//! Layout state and its reducer.
//!
//! The state is only ever replaced through [`reduce`], which takes the old
//! value and returns a new one. Callers keep it in a single signal and write
//! it back with `update(|s| *s = reduce(*s, action))`.

use super::{Orientation, Route};

/// Shared layout/menu state for the split-panel layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutState {
    /// Slide-out menu is open
    pub menu_open: bool,
    /// Current panel orientation
    pub orientation: Orientation,
    /// Page-derived props are held while a transition is running; see
    /// [`LayoutState::current_route`]
    pub frozen: bool,
    /// Content is painted at all (false while waiting for a route)
    pub display_content: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            menu_open: false,
            orientation: Orientation::default(),
            frozen: false,
            display_content: true,
        }
    }
}

impl LayoutState {
    pub fn with_orientation(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// Route the site chrome treats as current.
    ///
    /// While frozen this is the page still on screen, so menu highlighting
    /// does not jump ahead of the content; otherwise the requested route.
    pub fn current_route<'a>(
        &self,
        displayed: Option<&'a Route>,
        requested: &'a Route,
    ) -> &'a Route {
        match displayed {
            Some(displayed) if self.frozen => displayed,
            _ => requested,
        }
    }
}

/// Actions accepted by [`reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutAction {
    OpenMenu,
    CloseMenu,
    ToggleMenu,
    /// Hold the current page's props until `Unfreeze`
    Freeze,
    /// Release props, adopting the new page's orientation
    Unfreeze(Orientation),
    HideContent,
    ShowContent,
}

/// Apply an action to a copy of the state.
pub fn reduce(state: LayoutState, action: LayoutAction) -> LayoutState {
    let mut next = state;
    match action {
        LayoutAction::OpenMenu => next.menu_open = true,
        LayoutAction::CloseMenu => next.menu_open = false,
        LayoutAction::ToggleMenu => next.menu_open = !state.menu_open,
        LayoutAction::Freeze => next.frozen = true,
        LayoutAction::Unfreeze(orientation) => {
            next.frozen = false;
            next.orientation = orientation;
        }
        LayoutAction::HideContent => next.display_content = false,
        LayoutAction::ShowContent => next.display_content = true,
    }
    next
}
