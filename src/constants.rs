// Stable identifiers and class names the page markup and stylesheet agree on.
//
// Kept free of `web_sys` so host tests can `include!` this file.

// Elements looked up by id
pub const HEADER_ID: &str = "header";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_ID: &str = "nav";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
pub const MONTH_TABS_ID: &str = "monthTabs";
pub const MONTH_PREV_ID: &str = "monthPrev";
pub const MONTH_NEXT_ID: &str = "monthNext";
pub const MAIN_CONTENT_ID: &str = "main-content";

// Selectors
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_FOCUSABLE_SELECTOR: &str = "a, button";
pub const PAGE_SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const FAQ_QUESTION_SELECTOR: &str = ".faq-question";
pub const MONTH_TAB_SELECTOR: &str = ".month-tab";
pub const MONTH_SECTION_SELECTOR: &str = ".month-section";
pub const MONTH_NAV_SELECTOR: &str = ".month-navigation";
pub const REVEAL_SELECTOR: &str =
    ".event-card, .category-card, .feature-item, .contact-card, .faq-item";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const YEAR_SELECTOR: &str = ".current-year";
pub const FORM_GROUP_SELECTOR: &str = ".form-group";
pub const FORM_CONTROL_SELECTOR: &str = "input, select, textarea";
pub const FLOATING_CARD_SELECTOR: &str = ".image-card";
pub const PRELOADER_SELECTOR: &str = ".preloader";
pub const EVENT_CARD_SELECTOR: &str = ".event-list-card";
pub const SHARE_BUTTON_SELECTOR: &str = ".share-btn";
pub const EVENT_TITLE_SELECTOR: &str = ".event-list-title";
pub const EVENT_DATE_SELECTOR: &str = ".event-list-date";
pub const EVENT_LOCATION_SELECTOR: &str = ".event-list-location";
pub const EVENT_LINK_SELECTOR: &str = ".btn-primary";
pub const NEWSLETTER_EMAIL_SELECTOR: &str = "input[type=\"email\"]";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

// State classes
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
pub const SHOW_CLASS: &str = "show";
pub const HIDING_CLASS: &str = "hiding";
pub const HIDDEN_CLASS: &str = "hidden";
pub const LOADED_CLASS: &str = "loaded";
pub const LOAD_ERROR_CLASS: &str = "error";
pub const FOCUSED_CLASS: &str = "focused";
pub const FILLED_CLASS: &str = "filled";
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

// Elements created by the script
pub const NAV_OVERLAY_CLASS: &str = "nav-overlay";
pub const TOAST_CONTAINER_CLASS: &str = "toast-container";
pub const PROGRESS_BAR_CLASS: &str = "scroll-progress";
pub const RIPPLE_CLASS: &str = "ripple-effect";
pub const RIPPLE_STYLE_ID: &str = "ripple-styles";
pub const SKIP_LINK_CLASS: &str = "skip-link";
pub const SKIP_LINK_TEXT: &str = "Langsung ke konten utama";

// Data attributes
pub const LAZY_SRC_ATTR: &str = "data-src";
pub const WHATSAPP_NUMBER_ATTR: &str = "data-whatsapp";

// Observer and effect tuning
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_OFFSET_PX: f64 = 20.0;
pub const REVEAL_STAGGER_SEC: f64 = 0.1;
pub const REVEAL_DURATION_SEC: f64 = 0.5;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const LAZY_ROOT_MARGIN: &str = "50px 0px";
pub const RIPPLE_SIZE_PX: f64 = 100.0;
pub const PROGRESS_BAR_HEIGHT_PX: f64 = 3.0;
