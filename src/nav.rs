//! Pill navigation state.
//!
//! The nav bar highlights whichever section is most visible while the page
//! scrolls freely, but a clicked pill must hold its highlight while the page
//! smooth-scrolls to it. The model reconciles the two inputs with a short
//! suppression window after every click, during which scroll-driven
//! visibility reports are ignored.

use std::time::Instant;

use crate::constants::NAV_SCROLL_SUPPRESS;
use crate::types::NavLink;

/// One entry of the flattened list the pill bar renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatLink {
    pub href: String,
    pub label: String,
    /// Label of the dropdown this link came from, if any
    pub parent: Option<String>,
}

/// Flatten the nav tree for rendering: a parent's children replace it in
/// the list, each tagged with the parent's label.
pub fn flatten(links: &[NavLink]) -> Vec<FlatLink> {
    let mut flat = Vec::new();
    for link in links {
        if link.has_children() {
            for child in &link.children {
                flat.push(FlatLink {
                    href: child.href.clone(),
                    label: child.label.clone(),
                    parent: Some(link.label.clone()),
                });
            }
        } else {
            flat.push(FlatLink {
                href: link.href.clone(),
                label: link.label.clone(),
                parent: None,
            });
        }
    }
    flat
}

/// State behind the pill navigation bar.
#[derive(Clone, Debug)]
pub struct NavModel {
    links: Vec<NavLink>,
    flat: Vec<FlatLink>,
    active: Option<String>,
    open_dropdown: Option<String>,
    suppress_until: Option<Instant>,
}

impl NavModel {
    /// Build the model; the first configured link starts highlighted.
    pub fn new(links: Vec<NavLink>) -> Self {
        let flat = flatten(&links);
        let active = links.first().map(|link| link.href.clone());
        Self {
            links,
            flat,
            active,
            open_dropdown: None,
            suppress_until: None,
        }
    }

    /// The links as configured, dropdown structure intact.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// The flattened pill list.
    pub fn flat_links(&self) -> &[FlatLink] {
        &self.flat
    }

    /// Href of the highlighted link.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Label of the open dropdown, if any.
    pub fn open_dropdown(&self) -> Option<&str> {
        self.open_dropdown.as_deref()
    }

    /// Label of the dropdown containing the highlighted link, so the parent
    /// pill lights up when one of its children is active.
    pub fn active_parent(&self) -> Option<&str> {
        let active = self.active.as_deref()?;
        self.flat
            .iter()
            .find(|link| link.href == active)
            .and_then(|link| link.parent.as_deref())
    }

    /// Whether scroll-driven visibility reports are currently ignored.
    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.suppress_until.is_some_and(|until| now < until)
    }

    /// A section became the most visible one while scrolling. Ignored
    /// during the post-click suppression window, and for hrefs the nav does
    /// not know.
    pub fn section_visible(&mut self, href: &str, now: Instant) {
        if self.is_suppressed(now) {
            return;
        }
        if !self.knows(href) {
            tracing::debug!("visibility report for unknown section {:?}", href);
            return;
        }
        self.active = Some(href.to_string());
    }

    /// A nav link was clicked: highlight it, close any dropdown, and hold
    /// the highlight against visibility reports while the page scrolls.
    pub fn link_clicked(&mut self, href: &str, now: Instant) {
        if !self.knows(href) {
            tracing::debug!("click on unknown nav link {:?}", href);
            return;
        }
        self.active = Some(href.to_string());
        self.open_dropdown = None;
        self.suppress_until = Some(now + NAV_SCROLL_SUPPRESS);
    }

    /// Toggle the dropdown under the parent pill with `label`. Labels that
    /// are not parents are ignored.
    pub fn toggle_dropdown(&mut self, label: &str) {
        if self.open_dropdown.as_deref() == Some(label) {
            self.open_dropdown = None;
        } else if self
            .links
            .iter()
            .any(|link| link.has_children() && link.label == label)
        {
            self.open_dropdown = Some(label.to_string());
        }
    }

    /// Close any open dropdown, as on a click elsewhere on the page.
    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    fn knows(&self, href: &str) -> bool {
        self.flat.iter().any(|link| link.href == href)
    }
}
