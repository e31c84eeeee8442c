//! Page Controller
//!
//! Locates the elements the markup promises, restores the theme and
//! wires every feature exactly once. After `mount` returns the page is
//! driven purely by browser events.

use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::config;
use crate::contact::{self, ContactFields};
use crate::dom::{self, required, set_text};
use crate::error::PageError;
use crate::{clipboard, counters, nav, progress, projects, theme};

/// Every element the controller touches
pub struct PageElements {
    pub root: Element,
    pub year: Element,
    pub progress_bar: HtmlElement,
    pub nav_toggle: HtmlElement,
    pub nav_links: Element,
    pub nav_link_items: Vec<Element>,
    pub theme_toggle: HtmlElement,
    pub copy_email_button: HtmlElement,
    pub email_text: Element,
    pub copy_hint: Element,
    pub tabs: Vec<Element>,
    pub project_grid: Element,
    pub search_input: HtmlInputElement,
    pub counters: Vec<Element>,
    pub contact_form: HtmlFormElement,
    pub form_hint: Element,
    pub contact_fields: ContactFields,
}

impl PageElements {
    pub fn locate(doc: &Document) -> Result<Self, PageError> {
        let root = doc.document_element().ok_or_else(|| PageError::MissingElement {
            selector: "html".to_string(),
        })?;

        Ok(Self {
            root,
            year: required(doc, config::YEAR)?,
            progress_bar: required(doc, config::PROGRESS_BAR)?,
            nav_toggle: required(doc, config::NAV_TOGGLE)?,
            nav_links: required(doc, config::NAV_LINKS)?,
            nav_link_items: dom::query_all(doc, config::NAV_LINK)?,
            theme_toggle: required(doc, config::THEME_TOGGLE)?,
            copy_email_button: required(doc, config::COPY_EMAIL_BUTTON)?,
            email_text: required(doc, config::EMAIL_TEXT)?,
            copy_hint: required(doc, config::COPY_HINT)?,
            tabs: dom::query_all(doc, config::TAB)?,
            project_grid: required(doc, config::PROJECT_GRID)?,
            search_input: required(doc, config::SEARCH_INPUT)?,
            counters: dom::query_all(doc, config::COUNTER)?,
            contact_form: required(doc, config::CONTACT_FORM)?,
            form_hint: required(doc, config::FORM_HINT)?,
            contact_fields: ContactFields {
                name: required(doc, config::NAME_INPUT)?,
                email: required(doc, config::EMAIL_INPUT)?,
                message: required(doc, config::MESSAGE_INPUT)?,
            },
        })
    }
}

pub struct PageController;

impl PageController {
    pub fn mount() -> Result<(), PageError> {
        let doc = dom::document()?;
        let page = PageElements::locate(&doc)?;
        web_sys::console::log_1(
            &format!(
                "[PAGE] Mounting: {} tabs, {} counters, {} nav links",
                page.tabs.len(),
                page.counters.len(),
                page.nav_link_items.len()
            )
            .into(),
        );

        set_text(&page.year, &js_sys::Date::new_0().get_full_year().to_string());

        theme::bind(page.root, &page.theme_toggle)?;
        progress::bind(doc.clone(), page.progress_bar)?;
        nav::bind(page.nav_toggle, page.nav_links, page.nav_link_items)?;
        clipboard::bind(&page.copy_email_button, page.email_text, page.copy_hint)?;
        counters::bind(page.counters)?;
        projects::bind(page.tabs, page.project_grid, page.search_input)?;
        contact::bind(doc, page.contact_form, page.form_hint, page.contact_fields)?;

        Ok(())
    }
}
