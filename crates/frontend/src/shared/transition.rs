//! Page transition controller.
//!
//! Intercepts ordinary same-origin link clicks, plays the exit animation on
//! the main content element, and only then performs the real navigation.
//! Restores the enter animation when a page comes back from the
//! back/forward cache. Purely cosmetic; none of the data components depend
//! on it.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Matches the 0.3s animation duration in the stylesheet.
const EXIT_DELAY_MS: u32 = 300;

const CONTENT_ID: &str = "main-content";
const ENTER_CLASS: &str = "page-enter";
const EXIT_CLASS: &str = "page-exit";

/// Decide whether a click on an anchor should be animated and intercepted.
///
/// Fragment, `javascript:`, `mailto:` and `tel:` links, explicit new-tab
/// targets and modified clicks (ctrl/meta/shift/alt) all keep their native
/// behavior. Same-origin filtering happens separately, in the DOM handler,
/// because it needs the live window location.
pub fn should_intercept(href: Option<&str>, target: Option<&str>, modified: bool) -> bool {
    let Some(href) = href else {
        return false;
    };
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return false;
    }
    if target == Some("_blank") {
        return false;
    }
    !modified
}

fn swap_content_class(from: &str, to: &str) {
    let content = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTENT_ID));
    if let Some(el) = content {
        let classes = el.class_list();
        let _ = classes.remove_1(from);
        let _ = classes.add_1(to);
    }
}

/// A link is animated only when it stays on this origin.
fn is_same_origin(href: &str) -> bool {
    let Some(w) = window() else {
        return false;
    };
    let location = w.location();
    let origin = location.origin().unwrap_or_default();
    let base = location.href().unwrap_or_default();
    match web_sys::Url::new_with_base(href, &base) {
        Ok(url) => url.origin() == origin,
        // Unparseable hrefs are treated as relative, hence internal
        Err(_) => true,
    }
}

fn handle_click(ev: web_sys::MouseEvent) {
    let modified = ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key();

    let anchor = ev
        .target()
        .and_then(|t| t.dyn_ref::<web_sys::Element>().cloned())
        .and_then(|el| el.closest("a").ok().flatten());
    let Some(anchor) = anchor else {
        return;
    };

    let href = anchor.get_attribute("href");
    let target = anchor.get_attribute("target");
    if !should_intercept(href.as_deref(), target.as_deref(), modified) {
        return;
    }
    let href = href.unwrap_or_default();
    if !is_same_origin(&href) {
        return;
    }

    ev.prevent_default();
    swap_content_class(ENTER_CLASS, EXIT_CLASS);

    // Let the exit animation play before the actual navigation
    Timeout::new(EXIT_DELAY_MS, move || {
        if let Some(w) = window() {
            let _ = w.location().set_href(&href);
        }
    })
    .forget();
}

/// Install the click interceptor and the back/forward-cache restore handler.
/// Call once at app mount.
pub fn install() {
    let Some(w) = window() else {
        return;
    };
    let Some(document) = w.document() else {
        return;
    };

    let click = Closure::wrap(Box::new(handle_click) as Box<dyn FnMut(web_sys::MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget(); // lives for the rest of the page

    let pageshow = Closure::wrap(Box::new(move |ev: web_sys::PageTransitionEvent| {
        if ev.persisted() {
            swap_content_class(EXIT_CLASS, ENTER_CLASS);
        }
    }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>);
    let _ = w.add_event_listener_with_callback("pageshow", pageshow.as_ref().unchecked_ref());
    pageshow.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_internal_links_are_intercepted() {
        assert!(should_intercept(Some("/jobs"), None, false));
        assert!(should_intercept(Some("/workers/5"), Some("_self"), false));
    }

    #[test]
    fn test_special_schemes_are_skipped() {
        assert!(!should_intercept(Some("#section"), None, false));
        assert!(!should_intercept(Some("javascript:void(0)"), None, false));
        assert!(!should_intercept(Some("mailto:a@b.c"), None, false));
        assert!(!should_intercept(Some("tel:+2348000000"), None, false));
        assert!(!should_intercept(Some(""), None, false));
        assert!(!should_intercept(None, None, false));
    }

    #[test]
    fn test_new_tab_and_modified_clicks_are_skipped() {
        assert!(!should_intercept(Some("/jobs"), Some("_blank"), false));
        assert!(!should_intercept(Some("/jobs"), None, true));
    }
}
