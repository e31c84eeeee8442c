//! Page Constants
//!
//! Element selectors, attribute names, timings and UI strings shared
//! with the page markup (`index.html`).

// ========================
// Selectors
// ========================

pub const YEAR: &str = "#year";
pub const PROGRESS_BAR: &str = "#progressBar";
pub const NAV_TOGGLE: &str = "#navToggle";
pub const NAV_LINKS: &str = "#navLinks";
pub const NAV_LINK: &str = ".nav__link";
pub const THEME_TOGGLE: &str = "#themeToggle";
pub const COPY_EMAIL_BUTTON: &str = "#copyEmailBtn";
pub const EMAIL_TEXT: &str = "#emailText";
pub const COPY_HINT: &str = "#copyHint";
pub const TAB: &str = ".tab";
pub const PROJECT_GRID: &str = "#projectGrid";
pub const PROJECT_CARD: &str = ".project";
pub const SEARCH_INPUT: &str = "#searchInput";
pub const COUNTER: &str = "[data-counter]";
pub const CONTACT_FORM: &str = "#contactForm";
pub const FORM_HINT: &str = "#formHint";
pub const NAME_INPUT: &str = "#name";
pub const EMAIL_INPUT: &str = "#email";
pub const MESSAGE_INPUT: &str = "#message";

// ========================
// Attributes & classes
// ========================

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const COUNTER_ATTRIBUTE: &str = "data-counter";
pub const FILTER_ATTRIBUTE: &str = "data-filter";
pub const TAGS_ATTRIBUTE: &str = "data-tags";
pub const ERROR_SLOT_ATTRIBUTE: &str = "data-error-for";
pub const NAV_OPEN_CLASS: &str = "is-open";
pub const TAB_ACTIVE_CLASS: &str = "is-active";

/// localStorage key holding "light" or "dark"
pub const THEME_STORAGE_KEY: &str = "theme";

// ========================
// Timings
// ========================

pub const COPY_HINT_CLEAR_MS: u32 = 1800;
pub const COUNTER_DURATION_MS: f64 = 800.0;
/// Visible ratio at which a counter starts animating
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.4;

// ========================
// UI strings
// ========================

pub const COPY_OK_HINT: &str = "Email nusxalandi.";
pub const COPY_FALLBACK_HINT: &str = "Clipboard ruxsati yo‘q. Email’ni qo‘lda nusxalang.";

pub const NAME_ERROR: &str = "Ism kamida 2 ta belgi bo‘lsin.";
pub const EMAIL_ERROR: &str = "Email formati noto‘g‘ri.";
pub const MESSAGE_ERROR: &str = "Xabar kamida 10 ta belgi bo‘lsin.";
pub const FORM_INVALID_HINT: &str = "Forma xatolari bor. Iltimos, tekshiring.";
pub const FORM_ACCEPTED_HINT: &str = "Xabar qabul qilindi (demo). Backend ulansa real yuboriladi.";
