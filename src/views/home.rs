use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::content::{self, Profile, Project, SelectOption, Skill};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    profile: &'static Profile,
    skills: &'static [Skill],
    projects: &'static [Project],
    project_types: &'static [SelectOption],
    budget_ranges: &'static [SelectOption],
    timelines: &'static [SelectOption],
}

pub async fn index() -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        profile: &content::PROFILE,
        skills: content::SKILLS,
        projects: content::PROJECTS,
        project_types: content::PROJECT_TYPES,
        budget_ranges: content::BUDGET_RANGES,
        timelines: content::TIMELINES,
    };

    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Failed to render page: {e}")))?;
    Ok(Html(html))
}
