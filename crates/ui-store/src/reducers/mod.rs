//! Reducers
//!
//! Pure functions from (slice, action) to the next slice. The root
//! [`app_reducer::reduce`] routes each action to the slice it affects.

pub mod app_reducer;
pub mod sidebar_reducer;
pub mod user_profile_reducer;
