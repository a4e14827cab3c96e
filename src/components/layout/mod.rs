//! Desktop layout: split panels and the slide-out menu.

mod menu;
mod split;

pub use split::SplitLayout;
