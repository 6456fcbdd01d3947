//! Loading / error / empty placeholders.

use crate::dom::{DomHost, DomResult};
use log::debug;

const ERROR_ICON: &str = "⚠️";
const EMPTY_ICON: &str = "📭";

/// Escapes text for use inside element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn loading_markup(message: &str) -> String {
    format!(
        "<div class=\"loading\">\n    <div class=\"spinner\"></div>\n    <p>{}</p>\n</div>",
        escape_html(message)
    )
}

pub fn error_markup(message: &str) -> String {
    state_markup(ERROR_ICON, message)
}

pub fn empty_markup(message: &str) -> String {
    state_markup(EMPTY_ICON, message)
}

fn state_markup(icon: &str, message: &str) -> String {
    format!(
        "<div class=\"empty-state\">\n    <div class=\"empty-state-icon\">{icon}</div>\n    <p>{}</p>\n</div>",
        escape_html(message)
    )
}

/// Replaces the content of `#container_id` with the loading spinner.
///
/// Returns `false` when no such container exists.
pub fn show_loading<H: DomHost + ?Sized>(
    host: &mut H,
    container_id: &str,
    message: &str,
) -> DomResult<bool> {
    render_into(host, container_id, "loading", &loading_markup(message))
}

pub fn show_error<H: DomHost + ?Sized>(
    host: &mut H,
    container_id: &str,
    message: &str,
) -> DomResult<bool> {
    render_into(host, container_id, "error", &error_markup(message))
}

pub fn show_empty<H: DomHost + ?Sized>(
    host: &mut H,
    container_id: &str,
    message: &str,
) -> DomResult<bool> {
    render_into(host, container_id, "empty", &empty_markup(message))
}

fn render_into<H: DomHost + ?Sized>(
    host: &mut H,
    container_id: &str,
    state: &str,
    markup: &str,
) -> DomResult<bool> {
    let Some(container) = host.get_by_id(container_id) else {
        debug!(
            "event=render_state module=render status=skipped state={} container={}",
            state, container_id
        );
        return Ok(false);
    };
    host.set_inner_html(container, markup)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::{empty_markup, error_markup, escape_html, loading_markup};

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("纯文本"), "纯文本");
    }

    #[test]
    fn fragments_use_fixed_templates() {
        assert!(loading_markup("正在加载数据...").contains("<div class=\"spinner\"></div>"));
        assert!(error_markup("boom").contains("<div class=\"empty-state-icon\">⚠️</div>"));
        assert!(empty_markup("nothing").contains("<div class=\"empty-state-icon\">📭</div>"));
        assert!(empty_markup("nothing").contains("<p>nothing</p>"));
    }
}
