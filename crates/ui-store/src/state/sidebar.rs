//! Sidebar State

/// Page shown by the sidebar before anything is dispatched
pub const CHAT_LIST: &str = "chatList";
pub const FILES_SIDEBAR: &str = "filesSidebar";
pub const BUG_SIDEBAR: &str = "bugSidebar";

/// Header component rendered above the sidebar pages
pub const CHAT_HEADER: &str = "ChatHeader";

/// Sidebar slice - which page the sidebar is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    /// Identifier of the active sidebar page
    pub active_page: String,
    /// Identifier of the header component
    pub header_component: String,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            active_page: CHAT_LIST.to_string(),
            header_component: CHAT_HEADER.to_string(),
        }
    }
}

impl SidebarState {
    /// Check whether the given page is the active one
    pub fn is_active(&self, page: &str) -> bool {
        self.active_page == page
    }
}
