use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::json;

use crate::modules::content::application::domain::defaults::default_portfolio;
use crate::modules::content::application::domain::editor::{DraftView, EditorError, EditorState};
use crate::modules::content::application::domain::entities::{
    ContentSection, PortfolioData, Profile, Project, Skill, new_record_id,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentError, DraftMode, PatchProfileData, PortfolioContentUseCase, PortfolioDraftKind,
    SaveProjectData, SaveSectionData, SaveSkillData, StartDraftData,
};
use crate::modules::content::application::ports::outgoing::snapshot_store::{
    SnapshotStore, PORTFOLIO_KEY,
};
use crate::modules::content::application::services::snapshot_codec::{load_json, save_json};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//
// Page state controller for the portfolio page. The stored snapshot, when
// present, fully replaces the defaults (override-if-present), so unlike the
// home page there is no per-item merge and reads do not write back.
//

pub struct PortfolioContentService {
    store: Arc<dyn SnapshotStore>,
    defaults: PortfolioData,
    drafts: RwLock<HashMap<PortfolioDraftKind, EditorState>>,
}

impl PortfolioContentService {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            defaults: default_portfolio(),
            drafts: RwLock::new(HashMap::new()),
        }
    }

    fn current(&self) -> PortfolioData {
        load_json(self.store.as_ref(), PORTFOLIO_KEY).unwrap_or_else(|| self.defaults.clone())
    }

    fn persist(&self, data: &PortfolioData) {
        save_json(self.store.as_ref(), PORTFOLIO_KEY, data);
    }

    fn finish_draft(&self, kind: PortfolioDraftKind) {
        self.drafts.write().entry(kind).or_default().finish();
    }

    fn blank_form(kind: PortfolioDraftKind, data: &PortfolioData) -> serde_json::Value {
        match kind {
            // The profile is a singleton: its "blank" form is the live record.
            PortfolioDraftKind::Profile => json!(data.profile),
            PortfolioDraftKind::Skill => {
                json!({ "name": "", "category": "other", "proficiency": 50 })
            }
            PortfolioDraftKind::Project => {
                json!({ "title": "", "description": "", "technologies": [], "featured": false })
            }
            PortfolioDraftKind::Section => json!({ "title": "", "content": "" }),
        }
    }

    fn record_form(
        data: &PortfolioData,
        kind: PortfolioDraftKind,
        id: &str,
    ) -> Result<serde_json::Value, ContentError> {
        let form = match kind {
            PortfolioDraftKind::Profile => Some(json!(data.profile)),
            PortfolioDraftKind::Skill => {
                data.skills.iter().find(|s| s.id == id).map(|s| json!(s))
            }
            PortfolioDraftKind::Project => {
                data.projects.iter().find(|p| p.id == id).map(|p| json!(p))
            }
            PortfolioDraftKind::Section => {
                data.sections.iter().find(|s| s.id == id).map(|s| json!(s))
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

#[async_trait]
impl PortfolioContentUseCase for PortfolioContentService {
    async fn load_page(&self) -> PortfolioData {
        self.current()
    }

    async fn update_profile(&self, patch: PatchProfileData) -> Result<Profile, ContentError> {
        let mut data = self.current();
        let current = data.profile.clone();

        let updated = Profile {
            name: patch.name.unwrap_or(current.name),
            title: patch.title.unwrap_or(current.title),
            bio: patch.bio.unwrap_or(current.bio),
            email: patch.email.unwrap_or(current.email),
            phone: patch.phone.apply(current.phone),
            location: patch.location.apply(current.location),
            avatar: patch.avatar.apply(current.avatar),
            social_links: patch.social_links.apply(current.social_links),
        };
        required(&updated.name, "name")?;

        data.profile = updated.clone();
        self.persist(&data);
        self.finish_draft(PortfolioDraftKind::Profile);
        Ok(updated)
    }

    async fn save_skill(&self, req: SaveSkillData) -> Result<Skill, ContentError> {
        required(&req.name, "name")?;

        let mut data = self.current();
        let id = req.id.unwrap_or_else(new_record_id);
        let skill = Skill {
            id: id.clone(),
            name: req.name,
            category: req.category,
            // Accepted as-is; the 0-100 bound is advisory.
            proficiency: req.proficiency,
            icon: req.icon,
        };
        match data.skills.iter_mut().find(|s| s.id == id) {
            Some(slot) => *slot = skill.clone(),
            None => data.skills.push(skill.clone()),
        }
        self.persist(&data);
        self.finish_draft(PortfolioDraftKind::Skill);
        Ok(skill)
    }

    async fn delete_skill(&self, id: &str) {
        let mut data = self.current();
        data.skills.retain(|s| s.id != id);
        self.persist(&data);
    }

    async fn save_project(&self, req: SaveProjectData) -> Result<Project, ContentError> {
        required(&req.title, "title")?;
        required(&req.description, "description")?;

        let mut data = self.current();
        let now = Utc::now();
        let id = req.id.unwrap_or_else(new_record_id);
        let existing = data.projects.iter().position(|p| p.id == id);

        let project = Project {
            id: id.clone(),
            title: req.title,
            description: req.description,
            technologies: req.technologies,
            image_url: req.image_url,
            github_url: req.github_url,
            live_url: req.live_url,
            featured: req.featured,
            // Creation time survives edits; update time always moves.
            created_at: existing
                .map(|i| data.projects[i].created_at)
                .unwrap_or(now),
            updated_at: now,
        };
        match existing {
            Some(i) => data.projects[i] = project.clone(),
            None => data.projects.push(project.clone()),
        }
        self.persist(&data);
        self.finish_draft(PortfolioDraftKind::Project);
        Ok(project)
    }

    async fn delete_project(&self, id: &str) {
        let mut data = self.current();
        data.projects.retain(|p| p.id != id);
        self.persist(&data);
    }

    async fn save_section(&self, req: SaveSectionData) -> Result<ContentSection, ContentError> {
        required(&req.title, "title")?;
        required(&req.content, "content")?;

        let mut data = self.current();
        let id = req.id.unwrap_or_else(new_record_id);
        let section = ContentSection {
            id: id.clone(),
            title: req.title,
            subtitle: req.subtitle,
            content: req.content,
        };
        match data.sections.iter_mut().find(|s| s.id == id) {
            Some(slot) => *slot = section.clone(),
            None => data.sections.push(section.clone()),
        }
        self.persist(&data);
        self.finish_draft(PortfolioDraftKind::Section);
        Ok(section)
    }

    async fn delete_section(&self, id: &str) {
        let mut data = self.current();
        data.sections.retain(|s| s.id != id);
        self.persist(&data);
    }

    async fn reorder_sections(&self, sections: Vec<ContentSection>) -> Vec<ContentSection> {
        let mut data = self.current();
        data.sections = sections.clone();
        self.persist(&data);
        sections
    }

    async fn start_draft(
        &self,
        kind: PortfolioDraftKind,
        req: StartDraftData,
    ) -> Result<DraftView, ContentError> {
        let data = self.current();
        let form = match req.mode {
            DraftMode::Add => Self::blank_form(kind, &data),
            DraftMode::Edit => {
                if !req.confirm {
                    return Err(ContentError::ConfirmationRequired);
                }
                // The profile needs no id; everything else does.
                if kind == PortfolioDraftKind::Profile {
                    Self::record_form(&data, kind, "")?
                } else {
                    let id = req.id.as_deref().ok_or(ContentError::Validation("id"))?;
                    Self::record_form(&data, kind, id)?
                }
            }
        };

        let mut drafts = self.drafts.write();
        let editor = drafts.entry(kind).or_default();
        let result = match req.mode {
            DraftMode::Add => editor.begin_add(form, req.discard),
            DraftMode::Edit => {
                editor.begin_edit(req.id.clone().unwrap_or_default(), form, req.discard)
            }
        };
        match result {
            Ok(()) => Ok(editor.view()),
            Err(EditorError::DraftPending) => Err(ContentError::DraftPending),
        }
    }

    async fn cancel_draft(&self, kind: PortfolioDraftKind) -> DraftView {
        let mut drafts = self.drafts.write();
        let editor = drafts.entry(kind).or_default();
        editor.cancel();
        editor.view()
    }
}
