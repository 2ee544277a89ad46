//! Application lifecycle - construction, the tick pump, and teardown.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;

use crate::catalog::Catalog;
use crate::constants::HERO_ROTATING_TEXTS;
use crate::contact::{ContactState, FormError};
use crate::nav::NavModel;
use crate::rotator::TextRotator;

use super::state::{HeroState, SectionState, Showboard};

impl Showboard {
    /// Build the page over the catalog compiled into the binary.
    pub fn new(now: Instant) -> Self {
        Self::from_catalog(Arc::new(Catalog::builtin()), now)
    }

    /// Build the page over a catalog loaded from a JSON file.
    pub fn from_path(path: &Path, now: Instant) -> anyhow::Result<Self> {
        let catalog = Catalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?;
        tracing::info!(
            "loaded catalog with {} members from {}",
            catalog.len(),
            path.display()
        );
        Ok(Self::from_catalog(Arc::new(catalog), now))
    }

    /// Build the page over an already validated catalog. One section per
    /// member, in catalog order; every autoplay and rotation countdown
    /// starts at `now`.
    pub fn from_catalog(catalog: Arc<Catalog>, now: Instant) -> Self {
        let sections = catalog
            .members()
            .iter()
            .enumerate()
            .map(|(position, member)| {
                SectionState::new(
                    position,
                    member.id.clone(),
                    member.gallery_len(),
                    member.profiles.len(),
                    now,
                )
            })
            .collect();

        let hero_texts = HERO_ROTATING_TEXTS
            .iter()
            .map(|text| text.to_string())
            .collect();

        Self {
            catalog: Arc::clone(&catalog),
            hero: HeroState {
                rotator: TextRotator::new(hero_texts, now),
            },
            sections,
            nav: NavModel::new(catalog.nav_links().to_vec()),
            contact: ContactState::default(),
        }
    }

    /// Fire everything that has come due by `now`: the hero line's phase
    /// changes and each section's autoplay, momentum, and linger timers.
    ///
    /// The host calls this from its frame loop or whenever
    /// [`next_deadline`](Self::next_deadline) passes; catching up after a
    /// long gap fires the backlog in order and never panics.
    pub fn tick(&mut self, now: Instant) {
        self.hero.rotator.tick(now);
        for section in &mut self.sections {
            section.tick(now);
        }
    }

    /// The earliest instant at which `tick` would have work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let hero = self.hero.rotator.next_deadline();
        let sections = self.sections.iter().filter_map(SectionState::next_deadline);
        sections.chain(hero).min()
    }

    /// Cancel every pending timer across the whole page. After this no
    /// amount of ticking moves anything; the page is safe to drop or
    /// rebuild against a fresh catalog.
    pub fn teardown(&mut self) {
        self.hero.rotator.teardown();
        for section in &mut self.sections {
            section.teardown();
        }
    }

    /// Validate the contact form and compose its `mailto:` URL for the
    /// host to open. On success the submission notice starts counting.
    pub fn submit_contact(&mut self, now: Instant) -> Result<String, FormError> {
        let recipient = self.catalog.contact_email().to_string();
        self.contact.submit(&recipient, now)
    }
}
