//! Toast notifier.
//!
//! # Responsibility
//! - Own the page-lifetime toast container and the toasts inside it.
//! - Move each toast through visible → exiting → removed on its own timer.
//!
//! # Invariants
//! - The container is created on first use and reused while it stays in the
//!   document; it is recreated if the page dropped it.
//! - Toasts are appended in call order; removal depends only on each toast's
//!   `created_at`.
//! - The number of simultaneous toasts is not capped.

use crate::clock::Clock;
use crate::config::SiteConfig;
use crate::dom::{DomHost, DomResult, NodeId};
use crate::model::toast::{Toast, ToastId, ToastKind};
use log::debug;

/// Entrance keyframes, installed once into `<head>`.
pub const TOAST_KEYFRAMES: &str = "@keyframes slideIn { \
from { transform: translateX(400px); opacity: 0; } \
to { transform: translateX(0); opacity: 1; } }";

const KEYFRAMES_STYLE_ID: &str = "toast-keyframes";
const ENTER_ANIMATION: &str = "slideIn 0.3s ease";
const EXIT_ANIMATION: &str = "slideIn 0.3s ease reverse";

const CONTAINER_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("z-index", "9999"),
];

const TOAST_STYLES: &[(&str, &str)] = &[
    ("background", "rgba(30, 41, 59, 0.95)"),
    ("backdrop-filter", "blur(20px)"),
    ("color", "white"),
    ("padding", "1rem 1.5rem"),
    ("border-radius", "8px"),
    ("margin-bottom", "10px"),
    ("box-shadow", "0 4px 16px rgba(0, 0, 0, 0.4)"),
];

/// Timing and placement of toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSettings {
    pub container_id: String,
    pub display_ms: u64,
    pub exit_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl ToastSettings {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            container_id: config.toast_container_id.clone(),
            display_ms: config.toast_display_ms,
            exit_ms: config.toast_exit_ms,
        }
    }
}

/// Lifecycle stage of a toast still in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Exit animation running; node removed once `exit_ms` elapses.
    Exiting,
}

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    node: NodeId,
    phase: ToastPhase,
}

/// Shows transient notifications in one document.
#[derive(Debug)]
pub struct ToastNotifier<C: Clock> {
    clock: C,
    settings: ToastSettings,
    container: Option<NodeId>,
    active: Vec<ActiveToast>,
}

impl<C: Clock> ToastNotifier<C> {
    pub fn new(clock: C, settings: ToastSettings) -> Self {
        Self {
            clock,
            settings,
            container: None,
            active: Vec::new(),
        }
    }

    pub fn from_config(clock: C, config: &SiteConfig) -> Self {
        Self::new(clock, ToastSettings::from_config(config))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Container created by the last `notify`, if any.
    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Toasts not yet removed, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter().map(|entry| &entry.toast)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.active
            .iter()
            .find(|entry| entry.toast.id == id)
            .map(|entry| entry.phase)
    }

    /// DOM node rendering the toast `id`.
    pub fn node(&self, id: ToastId) -> Option<NodeId> {
        self.active
            .iter()
            .find(|entry| entry.toast.id == id)
            .map(|entry| entry.node)
    }

    /// Earliest time a pending toast changes phase.
    pub fn next_deadline(&self) -> Option<i64> {
        self.active
            .iter()
            .map(|entry| match entry.phase {
                ToastPhase::Visible => self.exit_at(&entry.toast),
                ToastPhase::Exiting => self.remove_at(&entry.toast),
            })
            .min()
    }

    /// Appends a toast to the container and starts its display window.
    pub fn notify<H: DomHost + ?Sized>(
        &mut self,
        host: &mut H,
        message: &str,
        kind: ToastKind,
    ) -> DomResult<ToastId> {
        let container = self.ensure_container(host)?;
        ensure_keyframes(host)?;

        let toast = Toast::new(message, kind, self.clock.now_ms());
        let node = host.create_element("div");
        host.set_attribute(node, "class", &format!("toast toast-{}", kind.as_str()))?;
        host.set_attribute(node, "data-toast-id", &toast.id.to_string())?;
        for (property, value) in TOAST_STYLES {
            host.set_style(node, property, value)?;
        }
        host.set_style(
            node,
            "border-left",
            &format!("4px solid {}", kind.accent_color()),
        )?;
        host.set_style(node, "animation", ENTER_ANIMATION)?;
        host.set_text_content(node, message)?;
        host.append_child(container, node)?;

        debug!(
            "event=toast_shown module=notify status=ok kind={} active={}",
            kind.as_str(),
            self.active.len() + 1
        );

        let id = toast.id;
        self.active.push(ActiveToast {
            toast,
            node,
            phase: ToastPhase::Visible,
        });
        Ok(id)
    }

    /// Advances every toast to the current time.
    ///
    /// Returns how many toasts were removed from the document.
    pub fn tick<H: DomHost + ?Sized>(&mut self, host: &mut H) -> DomResult<usize> {
        let now = self.clock.now_ms();
        let mut removed = 0;
        let mut index = 0;
        while index < self.active.len() {
            let node = self.active[index].node;
            let exit_at = self.exit_at(&self.active[index].toast);
            let remove_at = self.remove_at(&self.active[index].toast);

            if self.active[index].phase == ToastPhase::Visible && now >= exit_at {
                host.set_style(node, "animation", EXIT_ANIMATION)?;
                self.active[index].phase = ToastPhase::Exiting;
            }

            if self.active[index].phase == ToastPhase::Exiting && now >= remove_at {
                if let Some(parent) = host.parent(node)? {
                    host.remove_child(parent, node)?;
                }
                let entry = self.active.remove(index);
                debug!(
                    "event=toast_removed module=notify status=ok id={} kind={}",
                    entry.toast.id,
                    entry.toast.kind.as_str()
                );
                removed += 1;
                continue;
            }
            index += 1;
        }
        Ok(removed)
    }

    fn exit_at(&self, toast: &Toast) -> i64 {
        toast.created_at.saturating_add(millis(self.settings.display_ms))
    }

    fn remove_at(&self, toast: &Toast) -> i64 {
        self.exit_at(toast)
            .saturating_add(millis(self.settings.exit_ms))
    }

    fn ensure_container<H: DomHost + ?Sized>(&mut self, host: &mut H) -> DomResult<NodeId> {
        if let Some(existing) = host.get_by_id(&self.settings.container_id) {
            self.container = Some(existing);
            return Ok(existing);
        }

        let container = host.create_element("div");
        host.set_attribute(container, "id", &self.settings.container_id)?;
        for (property, value) in CONTAINER_STYLES {
            host.set_style(container, property, value)?;
        }
        let body = host.body();
        host.append_child(body, container)?;
        debug!(
            "event=toast_container_created module=notify status=ok id={}",
            self.settings.container_id
        );
        self.container = Some(container);
        Ok(container)
    }
}

fn ensure_keyframes<H: DomHost + ?Sized>(host: &mut H) -> DomResult<()> {
    if host.get_by_id(KEYFRAMES_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = host.create_element("style");
    host.set_attribute(style, "id", KEYFRAMES_STYLE_ID)?;
    host.set_text_content(style, TOAST_KEYFRAMES)?;
    let head = host.head();
    host.append_child(head, style)
}

fn millis(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::{ToastNotifier, ToastPhase, ToastSettings};
    use crate::clock::ManualClock;
    use crate::dom::{DomHost, MemoryDocument};
    use crate::model::toast::ToastKind;

    #[test]
    fn toast_exits_then_is_removed() {
        let clock = ManualClock::new(0);
        let mut document = MemoryDocument::new();
        let mut notifier = ToastNotifier::new(clock.clone(), ToastSettings::default());

        let id = notifier
            .notify(&mut document, "hello", ToastKind::Info)
            .expect("notify");
        assert_eq!(notifier.phase(id), Some(ToastPhase::Visible));
        assert_eq!(notifier.next_deadline(), Some(3_000));

        clock.advance(3_000);
        assert_eq!(notifier.tick(&mut document).expect("tick"), 0);
        assert_eq!(notifier.phase(id), Some(ToastPhase::Exiting));
        let node = notifier.node(id).expect("node");
        assert_eq!(
            document.style(node, "animation").expect("style").as_deref(),
            Some("slideIn 0.3s ease reverse")
        );

        clock.advance(299);
        assert_eq!(notifier.tick(&mut document).expect("tick"), 0);
        clock.advance(1);
        assert_eq!(notifier.tick(&mut document).expect("tick"), 1);
        assert_eq!(notifier.phase(id), None);
        assert!(!document.is_attached(node));
    }

    #[test]
    fn keyframes_are_installed_once() {
        let mut document = MemoryDocument::new();
        let mut notifier = ToastNotifier::new(ManualClock::new(0), ToastSettings::default());
        for _ in 0..3 {
            notifier
                .notify(&mut document, "again", ToastKind::Info)
                .expect("notify");
        }
        let styles = document
            .all_by_tags(document.head(), &["style"])
            .expect("styles");
        assert_eq!(styles.len(), 1);
    }
}
