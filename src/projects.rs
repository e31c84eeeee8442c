//! Project Filter + Search
//!
//! One tab is active at a time. Every tab click or search keystroke
//! recomputes visibility for every card in the grid.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::config::{FILTER_ATTRIBUTE, PROJECT_CARD, TAB_ACTIVE_CLASS, TAGS_ATTRIBUTE};
use crate::dom::{listen, query_all_in, text_of};
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Keyword(String),
}

impl Filter {
    /// From a tab's `data-filter`; missing or "all" means no filtering
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("all") => Filter::All,
            Some(keyword) => Filter::Keyword(keyword.to_string()),
        }
    }

    /// `tags` must already be lowercased
    pub fn matches(&self, tags: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Keyword(keyword) => tags.contains(keyword.as_str()),
        }
    }
}

pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Card is shown when it passes both the tab filter and the search query.
/// `query` must already be normalized.
pub fn card_matches(filter: &Filter, query: &str, tags: &str, text: &str) -> bool {
    let tags = tags.to_lowercase();
    let matches_filter = filter.matches(&tags);
    let matches_search = query.is_empty() || tags.contains(query) || text.to_lowercase().contains(query);
    matches_filter && matches_search
}

/// Tab filters with at most one active entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    filters: Vec<Filter>,
    active: Option<usize>,
}

impl TabSet {
    pub fn new(filters: Vec<Filter>, active: Option<usize>) -> Self {
        let active = active.filter(|&i| i < filters.len());
        Self { filters, active }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.filters.len() {
            self.active = Some(index);
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Filter of the active tab, or "all" when none is active
    pub fn active_filter(&self) -> Filter {
        self.active
            .and_then(|i| self.filters.get(i).cloned())
            .unwrap_or(Filter::All)
    }
}

/// Show or hide every card in `grid`
pub fn apply_filter(grid: &Element, search: &HtmlInputElement, filter: &Filter) {
    let query = normalize_query(&search.value());
    let cards = match query_all_in(grid, PROJECT_CARD) {
        Ok(cards) => cards,
        Err(err) => {
            web_sys::console::error_1(&format!("[PROJECTS] {}", err).into());
            return;
        }
    };

    for card in cards {
        let Ok(card) = card.dyn_into::<HtmlElement>() else { continue };
        let tags = card.get_attribute(TAGS_ATTRIBUTE).unwrap_or_default();
        let style = card.style();
        if card_matches(filter, &query, &tags, &text_of(&card)) {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }
}

fn render_tabs(tabs: &[Element], set: &TabSet) {
    for (i, tab) in tabs.iter().enumerate() {
        let active = set.is_active(i);
        let _ = tab.class_list().toggle_with_force(TAB_ACTIVE_CLASS, active);
        let _ = tab.set_attribute("aria-selected", if active { "true" } else { "false" });
    }
}

/// Wire tabs and search, then run the first filter pass
pub fn bind(tabs: Vec<Element>, grid: Element, search: HtmlInputElement) -> Result<(), PageError> {
    let filters = tabs
        .iter()
        .map(|tab| Filter::from_attribute(tab.get_attribute(FILTER_ATTRIBUTE).as_deref()))
        .collect();
    let initially_active = tabs.iter().position(|tab| tab.class_list().contains(TAB_ACTIVE_CLASS));
    let set = StoredValue::new(TabSet::new(filters, initially_active));

    for (index, tab) in tabs.iter().enumerate() {
        let tabs = tabs.clone();
        let grid = grid.clone();
        let search = search.clone();
        listen(tab, "click", move |_| {
            set.update_value(|set| set.select(index));
            set.with_value(|set| render_tabs(&tabs, set));
            apply_filter(&grid, &search, &set.with_value(TabSet::active_filter));
        })?;
    }

    {
        let grid = grid.clone();
        let input = search.clone();
        listen(&search, "input", move |_| {
            apply_filter(&grid, &input, &set.with_value(TabSet::active_filter));
        })?;
    }

    apply_filter(&grid, &search, &set.with_value(TabSet::active_filter));
    Ok(())
}
