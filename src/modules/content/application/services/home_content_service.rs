use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;

use crate::modules::content::application::domain::defaults::default_home_page;
use crate::modules::content::application::domain::editor::{DraftView, EditorError, EditorState};
use crate::modules::content::application::domain::entities::{
    Achievement, ContentSection, GalleryItem, HomePageData, SectionHeadings, new_record_id,
};
use crate::modules::content::application::domain::policies::merge_policy::merge_home_page;
use crate::modules::content::application::ports::incoming::use_cases::{
    CarouselView, ContentError, DraftMode, HomeContentUseCase, HomeDraftKind,
    SaveAchievementData, SaveGalleryItemData, SaveSectionData, StartDraftData,
};
use crate::modules::content::application::ports::outgoing::snapshot_store::{
    SnapshotStore, HOME_PAGE_KEY,
};
use crate::modules::content::application::services::carousel::{
    CarouselRotor, DEFAULT_ROTATION_PERIOD,
};
use crate::modules::content::application::services::snapshot_codec::{load_json, save_json};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//
// Page state controller for the home page: owns the merged aggregate view,
// one draft slot per record type, and the carousel rotor. Mutations are
// admin-driven and serialized by the UI; there is no cross-request mutual
// exclusion beyond the draft locks.
//

pub struct HomeContentService {
    store: Arc<dyn SnapshotStore>,
    defaults: HomePageData,
    drafts: RwLock<HashMap<HomeDraftKind, EditorState>>,
    rotor: Arc<CarouselRotor>,
}

impl HomeContentService {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            defaults: default_home_page(),
            drafts: RwLock::new(HashMap::new()),
            rotor: Arc::new(CarouselRotor::new(DEFAULT_ROTATION_PERIOD)),
        }
    }

    /// Arm the carousel for the current image list. Called once at startup,
    /// from within the runtime.
    pub async fn start_carousel(&self) {
        let count = self.merged_page().profile_image_count();
        self.rotor.restart(count);
    }

    /// Load + merge without the self-heal write. Read path only.
    fn merged_page(&self) -> HomePageData {
        let stored = load_json(self.store.as_ref(), HOME_PAGE_KEY);
        merge_home_page(stored, &self.defaults)
    }

    /// Stored snapshot when present, scrubbed defaults otherwise. Mutations
    /// start from this view so a deleted default stays deleted until the
    /// next merge on load; re-running the merge here would resurrect it on
    /// any unrelated write.
    fn current(&self) -> HomePageData {
        load_json(self.store.as_ref(), HOME_PAGE_KEY)
            .unwrap_or_else(|| merge_home_page(None, &self.defaults))
    }

    fn persist(&self, page: &HomePageData) {
        save_json(self.store.as_ref(), HOME_PAGE_KEY, page);
    }

    fn finish_draft(&self, kind: HomeDraftKind) {
        self.drafts.write().entry(kind).or_default().finish();
    }

    fn blank_form(kind: HomeDraftKind) -> serde_json::Value {
        match kind {
            HomeDraftKind::Gallery => json!({ "title": "", "imageUrl": "" }),
            HomeDraftKind::Achievement => json!({ "title": "", "description": "" }),
            HomeDraftKind::Section => json!({ "title": "", "content": "" }),
        }
    }

    fn record_form(
        page: &HomePageData,
        kind: HomeDraftKind,
        id: &str,
    ) -> Result<serde_json::Value, ContentError> {
        let form = match kind {
            HomeDraftKind::Gallery => page
                .gallery_items
                .iter()
                .find(|i| i.id == id)
                .map(|i| json!(i)),
            HomeDraftKind::Achievement => page
                .achievements
                .iter()
                .find(|a| a.id == id)
                .map(|a| json!(a)),
            HomeDraftKind::Section => {
                page.sections.iter().find(|s| s.id == id).map(|s| json!(s))
            }
        };
        form.ok_or(ContentError::NotFound)
    }
}

fn required(value: &str, field: &'static str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::Validation(field))
    } else {
        Ok(())
    }
}

/// Replace the matching record, or append when absent.
fn upsert<T, F>(collection: &mut Vec<T>, record: T, matches: F)
where
    F: Fn(&T) -> bool,
{
    match collection.iter_mut().find(|item| matches(item)) {
        Some(slot) => *slot = record,
        None => collection.push(record),
    }
}

#[async_trait]
impl HomeContentUseCase for HomeContentService {
    async fn load_page(&self) -> HomePageData {
        let merged = self.merged_page();
        // Self-healing snapshot: the merged view is written straight back.
        self.persist(&merged);
        merged
    }

    async fn save_gallery_item(
        &self,
        data: SaveGalleryItemData,
    ) -> Result<GalleryItem, ContentError> {
        required(&data.title, "title")?;

        let mut page = self.current();
        let id = data.id.unwrap_or_else(new_record_id);
        let item = GalleryItem {
            id: id.clone(),
            title: data.title,
            image_url: data.image_url,
            description: data.description,
            category: data.category,
        };
        upsert(&mut page.gallery_items, item.clone(), |i| i.id == id);
        self.persist(&page);
        self.finish_draft(HomeDraftKind::Gallery);
        Ok(item)
    }

    async fn delete_gallery_item(&self, id: &str) {
        let mut page = self.current();
        page.gallery_items.retain(|i| i.id != id);
        self.persist(&page);
    }

    async fn save_achievement(
        &self,
        data: SaveAchievementData,
    ) -> Result<Achievement, ContentError> {
        required(&data.title, "title")?;
        required(&data.description, "description")?;

        let mut page = self.current();
        let id = data.id.unwrap_or_else(new_record_id);
        let achievement = Achievement {
            id: id.clone(),
            title: data.title,
            description: data.description,
            icon: data.icon,
            date: data.date,
            organization: data.organization,
            background_image: data.background_image,
        };
        upsert(&mut page.achievements, achievement.clone(), |a| a.id == id);
        self.persist(&page);
        self.finish_draft(HomeDraftKind::Achievement);
        Ok(achievement)
    }

    async fn delete_achievement(&self, id: &str) {
        let mut page = self.current();
        page.achievements.retain(|a| a.id != id);
        self.persist(&page);
    }

    async fn save_section(&self, data: SaveSectionData) -> Result<ContentSection, ContentError> {
        required(&data.title, "title")?;
        required(&data.content, "content")?;

        let mut page = self.current();
        let id = data.id.unwrap_or_else(new_record_id);
        let section = ContentSection {
            id: id.clone(),
            title: data.title,
            subtitle: data.subtitle,
            content: data.content,
        };
        upsert(&mut page.sections, section.clone(), |s| s.id == id);
        self.persist(&page);
        self.finish_draft(HomeDraftKind::Section);
        Ok(section)
    }

    async fn delete_section(&self, id: &str) {
        let mut page = self.current();
        page.sections.retain(|s| s.id != id);
        self.persist(&page);
    }

    async fn update_bio(&self, bio: String) {
        let mut page = self.current();
        page.bio_data = Some(bio);
        self.persist(&page);
    }

    async fn update_headings(&self, headings: SectionHeadings) {
        let mut page = self.current();
        page.section_headings = Some(headings);
        self.persist(&page);
    }

    async fn update_profile_images(&self, images: Vec<String>) {
        let mut page = self.current();
        let count = images.len();
        page.profile_images = Some(images);
        self.persist(&page);
        // The rotor must never keep iterating a list of a different size.
        self.rotor.restart(count);
    }

    async fn start_draft(
        &self,
        kind: HomeDraftKind,
        data: StartDraftData,
    ) -> Result<DraftView, ContentError> {
        let form = match data.mode {
            DraftMode::Add => Self::blank_form(kind),
            DraftMode::Edit => {
                if !data.confirm {
                    return Err(ContentError::ConfirmationRequired);
                }
                let id = data.id.as_deref().ok_or(ContentError::Validation("id"))?;
                Self::record_form(&self.merged_page(), kind, id)?
            }
        };

        let mut drafts = self.drafts.write();
        let editor = drafts.entry(kind).or_default();
        let result = match data.mode {
            DraftMode::Add => editor.begin_add(form, data.discard),
            DraftMode::Edit => {
                let id = data.id.clone().unwrap_or_default();
                editor.begin_edit(id, form, data.discard)
            }
        };
        match result {
            Ok(()) => Ok(editor.view()),
            Err(EditorError::DraftPending) => Err(ContentError::DraftPending),
        }
    }

    async fn cancel_draft(&self, kind: HomeDraftKind) -> DraftView {
        let mut drafts = self.drafts.write();
        let editor = drafts.entry(kind).or_default();
        editor.cancel();
        editor.view()
    }

    async fn carousel(&self) -> CarouselView {
        let page = self.merged_page();
        let images = page.profile_images.unwrap_or_default();
        let count = images.len();
        let index = if count == 0 {
            0
        } else {
            self.rotor.index() % count
        };
        CarouselView {
            index,
            count,
            image: images.into_iter().nth(index),
        }
    }
}
