use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::content::application::domain::editor::DraftView;
use crate::modules::content::application::domain::entities::{
    Achievement, ContentSection, GalleryItem, HomePageData, PortfolioData, Profile, Project,
    SectionHeadings, Skill, SkillCategory, SocialLinks,
};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field omitted => keep current value
// - Null: explicit null => clear (optional fields only)
// - Value(v): replace with v
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    /// Fold onto the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGalleryItemData {
    /// Absent for a new record; a fresh id is assigned.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAchievementData {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSectionData {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSkillData {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: i32,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProjectData {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Partial profile update: required fields replace when provided, optional
/// fields follow `PatchField` semantics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchProfileData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub avatar: PatchField<String>,
    #[serde(default)]
    pub social_links: PatchField<SocialLinks>,
}

//
// ──────────────────────────────────────────────────────────
// Draft control
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeDraftKind {
    Gallery,
    Achievement,
    Section,
}

impl HomeDraftKind {
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "gallery" => Some(Self::Gallery),
            "achievements" => Some(Self::Achievement),
            "sections" => Some(Self::Section),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortfolioDraftKind {
    Profile,
    Skill,
    Project,
    Section,
}

impl PortfolioDraftKind {
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "profile" => Some(Self::Profile),
            "skills" => Some(Self::Skill),
            "projects" => Some(Self::Project),
            "sections" => Some(Self::Section),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftMode {
    Add,
    Edit,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDraftData {
    pub mode: DraftMode,
    #[serde(default)]
    pub id: Option<String>,
    /// Human-in-the-loop guard for edits of existing records.
    #[serde(default)]
    pub confirm: bool,
    /// Explicitly abandon a pending draft of the same kind.
    #[serde(default)]
    pub discard: bool,
}

/// Current carousel position, resolved against the live image list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub index: usize,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("validation failed: {0}")]
    Validation(&'static str),

    #[error("record not found")]
    NotFound,

    #[error("another draft is pending")]
    DraftPending,

    #[error("confirmation required")]
    ConfirmationRequired,
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait HomeContentUseCase: Send + Sync {
    /// Load + merge with defaults + self-heal persist.
    async fn load_page(&self) -> HomePageData;

    async fn save_gallery_item(&self, data: SaveGalleryItemData)
        -> Result<GalleryItem, ContentError>;
    async fn delete_gallery_item(&self, id: &str);

    async fn save_achievement(&self, data: SaveAchievementData)
        -> Result<Achievement, ContentError>;
    async fn delete_achievement(&self, id: &str);

    async fn save_section(&self, data: SaveSectionData) -> Result<ContentSection, ContentError>;
    async fn delete_section(&self, id: &str);

    async fn update_bio(&self, bio: String);
    async fn update_headings(&self, headings: SectionHeadings);
    async fn update_profile_images(&self, images: Vec<String>);

    async fn start_draft(
        &self,
        kind: HomeDraftKind,
        data: StartDraftData,
    ) -> Result<DraftView, ContentError>;
    async fn cancel_draft(&self, kind: HomeDraftKind) -> DraftView;

    async fn carousel(&self) -> CarouselView;
}

#[async_trait]
pub trait PortfolioContentUseCase: Send + Sync {
    async fn load_page(&self) -> PortfolioData;

    async fn update_profile(&self, patch: PatchProfileData) -> Result<Profile, ContentError>;

    async fn save_skill(&self, data: SaveSkillData) -> Result<Skill, ContentError>;
    async fn delete_skill(&self, id: &str);

    async fn save_project(&self, data: SaveProjectData) -> Result<Project, ContentError>;
    async fn delete_project(&self, id: &str);

    async fn save_section(&self, data: SaveSectionData) -> Result<ContentSection, ContentError>;
    async fn delete_section(&self, id: &str);

    /// Replace the whole ordered list (drag-and-drop reordering).
    async fn reorder_sections(
        &self,
        sections: Vec<ContentSection>,
    ) -> Vec<ContentSection>;

    async fn start_draft(
        &self,
        kind: PortfolioDraftKind,
        data: StartDraftData,
    ) -> Result<DraftView, ContentError>;
    async fn cancel_draft(&self, kind: PortfolioDraftKind) -> DraftView;
}
