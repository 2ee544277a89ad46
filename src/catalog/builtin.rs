//! The catalog compiled into the binary.
//!
//! Image paths here are site-relative and maintained by hand: the numbered
//! lists name exactly the files that exist under the site's public image
//! folders, gaps included.

use once_cell::sync::Lazy;

use crate::constants::CONTACT_RECIPIENT;
use crate::types::{CreatorProfile, Member, NavLink};

use super::{Catalog, CatalogData};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_data(builtin_data()).unwrap_or_else(|error| {
        tracing::error!("builtin catalog failed validation: {}", error);
        Catalog::empty()
    })
});

pub(super) fn builtin_catalog() -> Catalog {
    BUILTIN.clone()
}

fn numbered(category: &str, numbers: impl IntoIterator<Item = u32>) -> Vec<String> {
    numbers
        .into_iter()
        .map(|number| format!("/images/{}/{}.jpg", category, number))
        .collect()
}

fn profile(contact: &str, image: &str) -> CreatorProfile {
    CreatorProfile {
        contact: contact.to_string(),
        profile_image: image.to_string(),
    }
}

fn builtin_data() -> CatalogData {
    let artist_one = "/images/profiles/artists1.jpg";
    let artist_two = "/images/profiles/artists2.jpg";
    let artist_three = "/images/profiles/artists3.jpg";
    let artist_four = "/images/profiles/artists4.jpg";
    let artist_five = "/images/profiles/artists5.jpg";
    let moderator = "/images/profiles/moderators.jpg";

    let members = vec![
        Member {
            id: "artists".into(),
            section_title: "The Visionary Artist".into(),
            name: "Digital & Hand Drawing Artist".into(),
            bio: "A passionate artist who brings imagination to life through 2D illustrations, \
                  character art, furry designs, banners, and custom digital work. Anything you \
                  dream, they can draw."
                .into(),
            profiles: vec![
                profile("Discord: @carlacruz2002", artist_one),
                profile("Discord: @gaia_here", artist_two),
                profile("Discord: @alessia_her", artist_three),
                profile("Discord: @vayra_her", artist_four),
                profile("Discord: @vixara_here", artist_five),
            ],
            // Only these shots made the cut
            gallery_images: numbered(
                "artists",
                [1, 2, 3, 7, 8, 9, 10, 11, 13, 14, 15, 16, 17, 19, 20, 24, 25],
            ),
        },
        Member {
            id: "developers".into(),
            section_title: "The Web Wizard".into(),
            name: "Web Developer".into(),
            bio: "A coding expert who creates websites of all kinds — from simple portfolios to \
                  complex online stores. Clean design, smooth function, and performance-focused \
                  builds every time."
                .into(),
            profiles: vec![profile("Discord: @vixara_here", artist_five)],
            gallery_images: numbered("developers", 1..=10),
        },
        Member {
            id: "designers".into(),
            section_title: "The Thumbnail Designer".into(),
            name: "Thumbnail Designer".into(),
            bio: "Crafts eye-catching thumbnails for YouTube and other platforms. Each design \
                  is tailored to grab attention and boost engagement."
                .into(),
            profiles: vec![profile("Discord: @vayra_her", artist_four)],
            gallery_images: numbered("designers", 1..=8),
        },
        Member {
            id: "editors".into(),
            section_title: "The Video Editor".into(),
            name: "Video Editor".into(),
            bio: "Skilled in editing content for YouTube, TikTok, and Instagram. Delivers \
                  smooth cuts, dynamic transitions, and impactful storytelling."
                .into(),
            profiles: vec![profile("Discord: @alessia_her", artist_three)],
            gallery_images: numbered("editors", 1..=10),
        },
        Member {
            id: "cosplay".into(),
            section_title: "The Cosplay Crafter".into(),
            name: "Cosplay Equipment Provider".into(),
            bio: "Supplies a wide range of cosplay equipment and accessories. From swords to \
                  armor to wigs, providing quality materials for creators and performers."
                .into(),
            profiles: vec![profile("Discord: @carlacruz2002", artist_one)],
            gallery_images: numbered("cosplay", 1..=5),
        },
        Member {
            id: "moderators".into(),
            section_title: "The Server Moderator".into(),
            name: "Discord Moderator".into(),
            bio: "A skilled community moderator experienced in managing large Discord servers. \
                  Keeps spaces safe, organized, and welcoming."
                .into(),
            profiles: vec![profile("Discord: @ramiro_here", moderator)],
            gallery_images: numbered("moderators", 1..=10),
        },
        Member {
            id: "furry".into(),
            section_title: "The Furry Specialist".into(),
            name: "Furry Content Creator".into(),
            bio: "Your go-to person for everything furry. Deals in fursuits, furry-themed \
                  bedsheets, decor, and more."
                .into(),
            profiles: vec![profile("Discord: @vayra_her", artist_four)],
            // furry/10.jpg does not exist
            gallery_images: numbered("furry", (1..=9).chain(11..=19)),
        },
    ];

    let nav_links = vec![
        NavLink::new("#home", "Home"),
        NavLink::new("#about", "About"),
        NavLink::group(
            "Talent",
            vec![
                NavLink::new("#artists", "Artists"),
                NavLink::new("#developers", "Developers"),
                NavLink::new("#designers", "Designers"),
                NavLink::new("#editors", "Editors"),
                NavLink::new("#cosplay", "Cosplay"),
                NavLink::new("#moderators", "Moderators"),
                NavLink::new("#furry", "Furry"),
            ],
        ),
        NavLink::new("#contact", "Contact"),
    ];

    let contact_links = vec![
        "Join our Discord".to_string(),
        "Collaborate with us".to_string(),
        "Follow The Creatorz".to_string(),
        "Get in touch".to_string(),
        "Work with us".to_string(),
    ];

    CatalogData {
        members,
        nav_links,
        contact_links,
        contact_email: CONTACT_RECIPIENT.to_string(),
    }
}
