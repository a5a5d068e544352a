//! Unidirectional state container for UI views
//!
//! This crate provides:
//! - The application state tree ([`AppState`]) split into independent slices
//! - A closed set of [`Action`]s that describe state transitions
//! - Pure reducers that apply actions to state
//! - A [`Store`] that owns the state, dispatches actions and notifies subscribers
//! - [`SliceWatcher`] for views that should only re-render when their slice changes
//!
//! ```
//! use ui_store::{Action, Store};
//!
//! let store = Store::default();
//! store.subscribe(|store| {
//!     let page = store.select(|state| state.sidebar.active_page.clone());
//!     println!("sidebar shows {page}");
//! });
//! store.dispatch(Action::sidebar_change_active_page("filesSidebar"));
//! assert_eq!(store.state().sidebar.active_page, "filesSidebar");
//! ```

pub mod actions;
pub mod error;
pub mod reducers;
pub mod state;
pub mod store;
pub mod subscription;
pub mod watcher;

pub use actions::{Action, ActionType, Payload, PayloadKind};
pub use error::ActionError;
pub use state::{AppState, SidebarState, UserProfileState};
pub use store::Store;
pub use subscription::SubscriptionId;
pub use watcher::SliceWatcher;
