//! Typed client for the portfolio REST backend.
//!
//! One method per (resource, verb) pair. Each call issues exactly one request
//! with the transport's defaults: no retries, no timeout override. Sections
//! turn the `Result` into a [`FetchOutcome`] at their boundary.

use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    EntityId, Experience, ExperienceUpdate, NewExperience, NewProject, NewSkill, PersonalInfo,
    PersonalInfoUpdate, PortfolioData, Project, ProjectUpdate, Skill, SkillCategory, SkillUpdate,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Backend endpoints, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    PersonalInfo,
    PersonalInfoById(EntityId),
    Projects,
    Project(EntityId),
    FeaturedProjects,
    SearchProjects(&'a str),
    ProjectsByTechnology(&'a str),
    Experiences,
    Experience(EntityId),
    CurrentExperiences,
    ExperiencesByCompany(&'a str),
    ExperiencesByPosition(&'a str),
    Skills,
    Skill(EntityId),
    SkillsByCategory(SkillCategory),
    Portfolio,
}

impl Route<'_> {
    pub fn path(&self) -> String {
        use urlencoding::encode;
        match self {
            Route::PersonalInfo => "/personal-info".to_string(),
            Route::PersonalInfoById(id) => format!("/personal-info/{id}"),
            Route::Projects => "/projects".to_string(),
            Route::Project(id) => format!("/projects/{id}"),
            Route::FeaturedProjects => "/projects/featured".to_string(),
            Route::SearchProjects(kw) => format!("/projects/search?keyword={}", encode(kw)),
            Route::ProjectsByTechnology(tech) => format!("/projects/technology/{}", encode(tech)),
            Route::Experiences => "/experiences".to_string(),
            Route::Experience(id) => format!("/experiences/{id}"),
            Route::CurrentExperiences => "/experiences/current".to_string(),
            Route::ExperiencesByCompany(c) => {
                format!("/experiences/search/company?company={}", encode(c))
            }
            Route::ExperiencesByPosition(p) => {
                format!("/experiences/search/position?position={}", encode(p))
            }
            Route::Skills => "/skills".to_string(),
            Route::Skill(id) => format!("/skills/{id}"),
            Route::SkillsByCategory(category) => format!("/skills/category/{category}"),
            Route::Portfolio => "/portfolio".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, route: Route<'_>) -> String {
        format!("{}{}", self.base_url, route.path())
    }

    pub fn request(&self, method: Method, route: Route<'_>) -> RequestBuilder {
        self.http.request(method, self.url(route))
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await?;
        let resp = check_response(resp).await?;
        let body = resp.text().await?;
        decode(&body)
    }

    async fn get<T: DeserializeOwned>(&self, route: Route<'_>) -> Result<T, ApiError> {
        self.fetch(self.request(Method::GET, route)).await
    }

    async fn send_json<B, T>(&self, method: Method, route: Route<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.request(method, route).json(body)).await
    }

    async fn delete(&self, route: Route<'_>) -> Result<(), ApiError> {
        let resp = self.request(Method::DELETE, route).send().await?;
        check_response(resp).await?;
        Ok(())
    }

    // personal info

    pub async fn personal_info(&self) -> Result<PersonalInfo, ApiError> {
        self.get(Route::PersonalInfo).await
    }

    pub async fn update_personal_info(
        &self,
        id: EntityId,
        update: &PersonalInfoUpdate,
    ) -> Result<PersonalInfo, ApiError> {
        self.send_json(Method::PUT, Route::PersonalInfoById(id), update)
            .await
    }

    // projects

    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get(Route::Projects).await
    }

    pub async fn project(&self, id: EntityId) -> Result<Project, ApiError> {
        self.get(Route::Project(id)).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get(Route::FeaturedProjects).await
    }

    pub async fn search_projects(&self, keyword: &str) -> Result<Vec<Project>, ApiError> {
        self.get(Route::SearchProjects(keyword)).await
    }

    pub async fn projects_by_technology(&self, tech: &str) -> Result<Vec<Project>, ApiError> {
        self.get(Route::ProjectsByTechnology(tech)).await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        self.send_json(Method::POST, Route::Projects, project).await
    }

    pub async fn update_project(
        &self,
        id: EntityId,
        update: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        self.send_json(Method::PUT, Route::Project(id), update).await
    }

    pub async fn delete_project(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(Route::Project(id)).await
    }

    // experiences

    pub async fn experiences(&self) -> Result<Vec<Experience>, ApiError> {
        self.get(Route::Experiences).await
    }

    pub async fn experience(&self, id: EntityId) -> Result<Experience, ApiError> {
        self.get(Route::Experience(id)).await
    }

    pub async fn current_experiences(&self) -> Result<Vec<Experience>, ApiError> {
        self.get(Route::CurrentExperiences).await
    }

    pub async fn experiences_by_company(&self, company: &str) -> Result<Vec<Experience>, ApiError> {
        self.get(Route::ExperiencesByCompany(company)).await
    }

    pub async fn experiences_by_position(
        &self,
        position: &str,
    ) -> Result<Vec<Experience>, ApiError> {
        self.get(Route::ExperiencesByPosition(position)).await
    }

    pub async fn create_experience(
        &self,
        experience: &NewExperience,
    ) -> Result<Experience, ApiError> {
        self.send_json(Method::POST, Route::Experiences, experience)
            .await
    }

    pub async fn update_experience(
        &self,
        id: EntityId,
        update: &ExperienceUpdate,
    ) -> Result<Experience, ApiError> {
        self.send_json(Method::PUT, Route::Experience(id), update)
            .await
    }

    pub async fn delete_experience(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(Route::Experience(id)).await
    }

    // skills

    pub async fn skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get(Route::Skills).await
    }

    pub async fn skill(&self, id: EntityId) -> Result<Skill, ApiError> {
        self.get(Route::Skill(id)).await
    }

    pub async fn skills_by_category(&self, category: SkillCategory) -> Result<Vec<Skill>, ApiError> {
        self.get(Route::SkillsByCategory(category)).await
    }

    pub async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, ApiError> {
        self.send_json(Method::POST, Route::Skills, skill).await
    }

    pub async fn update_skill(&self, id: EntityId, update: &SkillUpdate) -> Result<Skill, ApiError> {
        self.send_json(Method::PUT, Route::Skill(id), update).await
    }

    pub async fn delete_skill(&self, id: EntityId) -> Result<(), ApiError> {
        self.delete(Route::Skill(id)).await
    }

    // aggregate

    pub async fn portfolio(&self) -> Result<PortfolioData, ApiError> {
        self.get(Route::Portfolio).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Maps a non-success status to [`ApiError::Status`], preferring the
/// backend's structured `message` over the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(b) => b.message,
        Err(_) if !body.trim().is_empty() => body,
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
    };
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Parses a success body. A body of the wrong shape (an object where a list
/// is expected, say) is a `Decode` error, not a transport one.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// What a section got back from its fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> FetchOutcome<T> {
    /// Logs failures once, here, so views never see a raw error.
    pub fn from_result(result: Result<T, ApiError>, section: &str) -> Self {
        match result {
            Ok(value) => FetchOutcome::Loaded(value),
            Err(e) => {
                log::error!("Error fetching {section}: {e}");
                FetchOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            FetchOutcome::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Loaded(v) => FetchOutcome::Loaded(f(v)),
            FetchOutcome::Empty => FetchOutcome::Empty,
            FetchOutcome::Failed(reason) => FetchOutcome::Failed(reason),
        }
    }
}

impl<T> FetchOutcome<Vec<T>> {
    pub fn from_list(result: Result<Vec<T>, ApiError>, section: &str) -> Self {
        match Self::from_result(result, section) {
            FetchOutcome::Loaded(v) if v.is_empty() => FetchOutcome::Empty,
            other => other,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.loaded().unwrap_or_default()
    }
}
