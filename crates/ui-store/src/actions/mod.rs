//! Actions module
//!
//! An action is a closed [`ActionType`] tag plus an optional [`Payload`].
//! Use the factory methods on [`Action`] to build well-typed actions; the raw
//! [`Action::new`] accepts any payload and leaves mismatches to the reducer,
//! which ignores them.

mod payload;

pub use payload::{Payload, PayloadKind};

use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ActionError;

/// All kinds of state change the store understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ActionType {
    /// Switch the sidebar to another page (text payload)
    SidebarChangeActivePage,
    /// Show the user profile panel
    UserProfileShow,
    /// Hide the user profile panel
    UserProfileHide,
}

impl ActionType {
    /// Payload shape this kind of action expects
    pub fn expected_payload(self) -> PayloadKind {
        match self {
            Self::SidebarChangeActivePage => PayloadKind::Text,
            Self::UserProfileShow | Self::UserProfileHide => PayloadKind::None,
        }
    }

    /// Parse an action type by name, rejecting anything outside the enumeration
    pub fn parse(name: &str) -> Result<Self, ActionError> {
        Self::from_str(name).map_err(|_| ActionError::UnknownActionType(name.to_string()))
    }
}

/// An intended state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionType,
    pub payload: Payload,
}

impl Action {
    /// Build an action with an arbitrary payload
    pub fn new(kind: ActionType, payload: impl Into<Payload>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    /// Build an action that carries no payload
    pub fn bare(kind: ActionType) -> Self {
        Self {
            kind,
            payload: Payload::None,
        }
    }

    /// Switch the sidebar to `page`
    pub fn sidebar_change_active_page(page: impl Into<String>) -> Self {
        Self::new(ActionType::SidebarChangeActivePage, Payload::Text(page.into()))
    }

    /// Show the user profile panel
    pub fn user_profile_show() -> Self {
        Self::bare(ActionType::UserProfileShow)
    }

    /// Hide the user profile panel
    pub fn user_profile_hide() -> Self {
        Self::bare(ActionType::UserProfileHide)
    }

    /// Build an action from text, e.g. a key binding table entry
    ///
    /// Fails fast on an unknown type name or a payload that does not fit the type.
    pub fn parse(kind: &str, payload: Option<&str>) -> Result<Self, ActionError> {
        let kind = ActionType::parse(kind)?;
        match (kind.expected_payload(), payload) {
            (PayloadKind::None, None) => Ok(Self::bare(kind)),
            (PayloadKind::None, Some(_)) => Err(ActionError::UnexpectedPayload { kind }),
            (PayloadKind::Text, Some(text)) => Ok(Self::new(kind, text)),
            (expected, _) => Err(ActionError::MissingPayload { kind, expected }),
        }
    }

    /// Payload shape this action's type expects
    pub fn expected_payload(&self) -> PayloadKind {
        self.kind.expected_payload()
    }

    /// Whether the payload matches what the action type expects
    ///
    /// Payload-less kinds ignore their payload, so they are always well formed.
    pub fn is_well_formed(&self) -> bool {
        match self.expected_payload() {
            PayloadKind::None => true,
            expected => self.payload.kind() == expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_action_types_round_trip_by_name() {
        for kind in ActionType::iter() {
            assert_eq!(ActionType::parse(kind.as_ref()), Ok(kind));
        }
        assert_eq!(ActionType::iter().count(), 3);
    }

    #[test]
    fn test_unknown_action_type_is_rejected() {
        assert_eq!(
            ActionType::parse("SidebarToggle"),
            Err(ActionError::UnknownActionType("SidebarToggle".to_string()))
        );
    }

    #[test]
    fn test_factories_build_well_formed_actions() {
        let change = Action::sidebar_change_active_page("filesSidebar");
        assert_eq!(change.kind, ActionType::SidebarChangeActivePage);
        assert_eq!(change.payload.as_text(), Some("filesSidebar"));
        assert!(change.is_well_formed());

        assert_eq!(Action::user_profile_show().payload, Payload::None);
        assert!(Action::user_profile_hide().is_well_formed());
    }

    #[test]
    fn test_mismatched_payload_is_not_well_formed() {
        let action = Action::new(ActionType::SidebarChangeActivePage, true);
        assert!(!action.is_well_formed());

        // Payload is ignored for show/hide
        assert!(Action::new(ActionType::UserProfileShow, 3_i64).is_well_formed());
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(
            Action::parse("SidebarChangeActivePage", Some("bugSidebar")),
            Ok(Action::sidebar_change_active_page("bugSidebar"))
        );
        assert_eq!(
            Action::parse("UserProfileHide", None),
            Ok(Action::user_profile_hide())
        );
    }

    #[test]
    fn test_parse_action_rejects_bad_payloads() {
        assert_eq!(
            Action::parse("SidebarChangeActivePage", None),
            Err(ActionError::MissingPayload {
                kind: ActionType::SidebarChangeActivePage,
                expected: PayloadKind::Text,
            })
        );
        assert_eq!(
            Action::parse("UserProfileShow", Some("now")),
            Err(ActionError::UnexpectedPayload {
                kind: ActionType::UserProfileShow
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Action::parse("SidebarChangeActivePage", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SidebarChangeActivePage expects a text payload"
        );
    }
}
