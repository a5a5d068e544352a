//! Sidebar View
//!
//! Builds every page upfront and only switches the visible one when the
//! store's `sidebar.active_page` actually changes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ui_store::{SliceWatcher, Store};

/// A pre-built sidebar page
#[derive(Debug, Clone)]
struct Page {
    body: Text<'static>,
}

impl Page {
    fn build(name: &str) -> Self {
        let body = Text::from(vec![
            Line::from(""),
            Line::from("This is the HEAVY layout for"),
            Line::from(format!("'{}'", name)).style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .alignment(Alignment::Center);
        Self { body }
    }
}

#[derive(Debug, Default)]
struct SidebarViewState {
    /// Last seen (active page, header component)
    watcher: SliceWatcher<(String, String)>,
    /// Page currently shown; stays put when the active page has no layout
    visible_page: Option<String>,
    header: String,
    updates: usize,
}

/// Sidebar view subscribed to the store
#[derive(Debug)]
pub struct SidebarView {
    pages: HashMap<String, Page>,
    inner: RefCell<SidebarViewState>,
}

impl SidebarView {
    /// Build all pages, subscribe to `store` and render the current state once
    pub fn attach(store: &Store, page_names: &[String]) -> Rc<Self> {
        let pages = page_names
            .iter()
            .map(|name| (name.clone(), Page::build(name)))
            .collect();

        let view = Rc::new(Self {
            pages,
            inner: RefCell::new(SidebarViewState::default()),
        });

        let subscriber = Rc::clone(&view);
        store.subscribe_and_seed(move |store| subscriber.on_state_changed(store));
        view
    }

    fn on_state_changed(&self, store: &Store) {
        let (page, header) = store.select(|state| {
            (
                state.sidebar.active_page.clone(),
                state.sidebar.header_component.clone(),
            )
        });

        let mut inner = self.inner.borrow_mut();
        if !inner.watcher.observe((page.clone(), header.clone())) {
            log::debug!("Sidebar state did NOT change. Ignoring notification.");
            return;
        }

        log::debug!("Sidebar state CHANGED. Updating view to: {:?}", page);
        inner.updates += 1;
        inner.header = header;
        if self.pages.contains_key(&page) {
            inner.visible_page = Some(page);
        } else {
            log::warn!("Sidebar has no page named {:?}", page);
        }
    }

    /// Page currently shown
    pub fn visible_page(&self) -> Option<String> {
        self.inner.borrow().visible_page.clone()
    }

    /// Header component shown above the pages
    pub fn header(&self) -> String {
        self.inner.borrow().header.clone()
    }

    /// Number of times the view re-rendered
    pub fn update_count(&self) -> usize {
        self.inner.borrow().updates
    }

    pub fn render(&self, area: Rect, f: &mut Frame) {
        let inner = self.inner.borrow();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Sidebar: {} ", inner.header));
        let content = block.inner(area);
        f.render_widget(block, area);

        let [title_area, page_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(content);

        let title = inner.visible_page.as_deref().unwrap_or("(none)");
        f.render_widget(
            Paragraph::new(title).style(Style::default().add_modifier(Modifier::ITALIC)),
            title_area,
        );

        if let Some(page) = inner
            .visible_page
            .as_ref()
            .and_then(|name| self.pages.get(name))
        {
            f.render_widget(
                Paragraph::new(page.body.clone())
                    .block(Block::default().borders(Borders::ALL))
                    .wrap(Wrap { trim: true }),
                page_area,
            );
        }
    }
}
