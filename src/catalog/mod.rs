//! The member catalog - read-only data the whole site derives from.
//!
//! Everything shown on the page (sections, galleries, nav pills, contact
//! links) comes out of one validated [`Catalog`]. The interaction state
//! machines hold only indices into it, never copies of its content, so a
//! swapped catalog cannot disagree with what is on screen.
//!
//! A catalog ships compiled into the binary and can be overridden by a JSON
//! file with the site's established camelCase shape.
//!
//! ## Modules
//!
//! - `builtin` - the catalog compiled into the binary
//! - `error` - error types for loading and watching
//! - `watcher` - change notifications for an external catalog file

mod builtin;
mod error;
mod watcher;

pub use error::{CatalogError, CatalogResult};
pub use watcher::{CatalogEvent, CatalogWatcher};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::CONTACT_RECIPIENT;
use crate::types::{Member, NavLink};

/// Serialized catalog shape, as stored in `catalog.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    pub members: Vec<Member>,
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub contact_links: Vec<String>,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

fn default_contact_email() -> String {
    CONTACT_RECIPIENT.to_string()
}

/// Validated catalog with constant-time member lookup by id.
#[derive(Clone, Debug)]
pub struct Catalog {
    members: Vec<Member>,
    by_id: HashMap<String, usize>,
    nav_links: Vec<NavLink>,
    contact_links: Vec<String>,
    contact_email: String,
}

impl Catalog {
    /// Validate `data` and build the id index.
    ///
    /// Duplicate member ids are rejected outright; thin members (empty
    /// galleries or no profiles) are allowed but logged, since the site can
    /// render around them.
    pub fn from_data(data: CatalogData) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(data.members.len());
        for (position, member) in data.members.iter().enumerate() {
            if by_id.insert(member.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateMember {
                    id: member.id.clone(),
                });
            }
            if member.gallery_images.is_empty() {
                tracing::warn!("member {:?} has an empty gallery", member.id);
            }
            if member.profiles.is_empty() {
                tracing::warn!("member {:?} has no profiles", member.id);
            }
        }
        if data.members.is_empty() {
            tracing::warn!("catalog has no members");
        }

        Ok(Self {
            members: data.members,
            by_id,
            nav_links: data.nav_links,
            contact_links: data.contact_links,
            contact_email: data.contact_email,
        })
    }

    /// An empty catalog. The site built on it shows nothing but stays alive.
    pub fn empty() -> Self {
        Self {
            members: Vec::new(),
            by_id: HashMap::new(),
            nav_links: Vec::new(),
            contact_links: Vec::new(),
            contact_email: CONTACT_RECIPIENT.to_string(),
        }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        builtin::builtin_catalog()
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = fs::read_to_string(path)?;
        let data: CatalogData = serde_json::from_str(&raw)?;
        Self::from_data(data)
    }

    /// All members in display order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Look up a member by id.
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.by_id
            .get(id)
            .and_then(|&position| self.members.get(position))
    }

    /// Gallery image paths for a member id.
    pub fn gallery(&self, id: &str) -> Option<&[String]> {
        self.member(id).map(|member| member.gallery_images.as_slice())
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    pub fn contact_links(&self) -> &[String] {
        &self.contact_links
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Default location of an external catalog override.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("showboard").join("catalog.json"))
}
