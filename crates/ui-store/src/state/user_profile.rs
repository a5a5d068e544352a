//! User Profile State

/// Default page of the user profile panel
pub const USER_PROFILE: &str = "UserProfile";

/// User profile slice - visibility of the profile panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfileState {
    pub visible: bool,
    /// Profile sub-view identifier. No action changes it yet.
    pub active_page: String,
}

impl Default for UserProfileState {
    fn default() -> Self {
        Self {
            visible: false,
            active_page: USER_PROFILE.to_string(),
        }
    }
}
