//! Merge/seed reconciliation between a stored snapshot and the compiled-in
//! defaults.
//!
//! Rules, applied independently per collection:
//! - stored content wins entirely for any id present in storage;
//! - default entries whose id is not stored yet are appended, in default
//!   order, after the stored items;
//! - gallery image URLs pointing at a known placeholder host are rewritten
//!   to the empty string regardless of origin.
//!
//! The caller persists the merged result immediately, so a snapshot heals
//! itself on the first load after an upgrade.

use crate::modules::content::application::domain::entities::{
    Achievement, GalleryItem, HomePageData,
};

/// Image hosts whose URLs are stand-ins, not real content.
const PLACEHOLDER_IMAGE_HOSTS: &[&str] = &["via.placeholder.com", "placehold.co"];

pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Achievement {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Append every default whose id is absent from `stored`. Stored entries are
/// never modified or reordered; shared ids keep the stored version whole (no
/// field-level blending).
pub fn merge_collection<T: Identified + Clone>(stored: Vec<T>, defaults: &[T]) -> Vec<T> {
    let mut merged = stored;
    for default in defaults {
        if !merged.iter().any(|item| item.id() == default.id()) {
            merged.push(default.clone());
        }
    }
    merged
}

pub fn is_placeholder_image_url(url: &str) -> bool {
    PLACEHOLDER_IMAGE_HOSTS.iter().any(|host| url.contains(host))
}

/// Rewrite placeholder image URLs to "" (meaning "no image").
pub fn scrub_placeholder_images(items: &mut [GalleryItem]) {
    for item in items {
        if is_placeholder_image_url(&item.image_url) {
            item.image_url = String::new();
        }
    }
}

/// Reconcile a loaded home snapshot with the defaults.
///
/// `stored = None` covers first-ever load, corruption, and an unavailable
/// store alike: the defaults are the result. Fields without a per-item merge
/// rule (bio, profile images, headings, custom sections) are
/// override-if-present.
pub fn merge_home_page(stored: Option<HomePageData>, defaults: &HomePageData) -> HomePageData {
    let mut merged = match stored {
        Some(snapshot) => HomePageData {
            gallery_items: merge_collection(snapshot.gallery_items, &defaults.gallery_items),
            achievements: merge_collection(snapshot.achievements, &defaults.achievements),
            sections: snapshot.sections,
            bio_data: snapshot.bio_data.or_else(|| defaults.bio_data.clone()),
            profile_images: snapshot
                .profile_images
                .or_else(|| defaults.profile_images.clone()),
            section_headings: snapshot
                .section_headings
                .or_else(|| defaults.section_headings.clone()),
        },
        None => defaults.clone(),
    };
    scrub_placeholder_images(&mut merged.gallery_items);
    merged
}
