//! Current-page navigation highlight.

use crate::dom::{DomHost, DomResult};
use crate::model::nav::NavLink;
use log::debug;

pub const NAV_LINK_CLASS: &str = "nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Last path segment of `pathname`, or `default_page` when it is empty.
///
/// `/docs/history.html` → `history.html`; `/docs/` → `default_page`.
pub fn current_page<'a>(pathname: &'a str, default_page: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => default_page,
    }
}

/// Marks `.nav-link` elements whose `href` equals the current page as
/// active and clears the mark from all others.
pub fn highlight_current_nav<H: DomHost + ?Sized>(
    host: &mut H,
    pathname: &str,
    default_page: &str,
) -> DomResult<Vec<NavLink>> {
    let page = current_page(pathname, default_page);
    let mut links = Vec::new();
    for node in host.elements_by_class(NAV_LINK_CLASS)? {
        let href = host.attribute(node, "href")?.unwrap_or_default();
        let is_active = href == page;
        if is_active {
            host.add_class(node, ACTIVE_CLASS)?;
        } else {
            host.remove_class(node, ACTIVE_CLASS)?;
        }
        links.push(NavLink { href, is_active });
    }

    debug!(
        "event=nav_highlight module=render status=ok page={} links={}",
        page,
        links.len()
    );
    Ok(links)
}
