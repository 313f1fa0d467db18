//! Platform-free state and content for the portfolio view.
//!
//! Nothing in here touches the DOM. The controller combines these pieces and
//! the browser layer turns their output into attribute and class writes.

pub mod excerpt;
pub mod fragment;
pub mod reveal;
pub mod section;
pub mod sidebar;
pub mod splash;

pub use excerpt::{Excerpt, OverlayId};
pub use fragment::{Fragment, Node, Tag};
pub use reveal::RevealOptions;
pub use section::{Emphasis, HistoryEntry, HistoryState, NavSource, SectionId, ShortcutTable};
pub use sidebar::SidebarState;
pub use splash::{SplashDismisser, SplashPhase};
