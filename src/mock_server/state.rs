//! Mock server state management.
//!
//! Provides the in-memory data store for the mock NewReleases API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{AuthKey, Project, ProjectOptions, Release, ReleaseNote, Tag};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Supported provider names (e.g., "github", "npm").
    pub providers: Vec<String>,

    /// Tracked projects in insertion order.
    pub projects: Vec<Project>,

    /// Releases indexed by project ID, newest first.
    pub releases: HashMap<String, Vec<Release>>,

    /// Release notes indexed by project ID and version.
    pub notes: HashMap<(String, String), ReleaseNote>,

    /// Tags in insertion order.
    pub tags: Vec<Tag>,

    /// Auth keys returned by `/v1/auth/keys`.
    pub auth_keys: Vec<AuthKey>,

    /// Optional API key. If set, requests must carry it in `X-Key`.
    pub required_key: Option<String>,

    /// Email and password accepted as basic auth on `/v1/auth/keys`.
    pub account: Option<(String, String)>,

    /// Number of items on one list page.
    pub page_size: usize,

    /// Requests allowed before the server answers 429.
    pub rate_limit: u64,

    /// Seconds until the rate window resets, as reported in headers.
    pub rate_reset_secs: u64,

    /// Requests served so far.
    pub requests: u64,

    next_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            projects: Vec::new(),
            releases: HashMap::new(),
            notes: HashMap::new(),
            tags: Vec::new(),
            auth_keys: Vec::new(),
            required_key: None,
            account: None,
            page_size: 10,
            rate_limit: 1000,
            rate_reset_secs: 3600,
            requests: 0,
            next_id: 1,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a supported provider.
    pub fn with_provider(mut self, provider: &str) -> Self {
        self.providers.push(provider.to_string());
        self
    }

    /// Add a tracked project.
    pub fn with_project(mut self, project: Project) -> Self {
        if !self.providers.contains(&project.provider) {
            self.providers.push(project.provider.clone());
        }
        self.projects.push(project);
        self
    }

    /// Add a release to a project, keeping releases newest first.
    pub fn with_release(mut self, project_id: &str, release: Release) -> Self {
        let releases = self.releases.entry(project_id.to_string()).or_default();
        releases.push(release);
        releases.sort_by(|a, b| b.date.cmp(&a.date));
        self
    }

    /// Attach a note to a project's release.
    pub fn with_note(mut self, project_id: &str, version: &str, note: ReleaseNote) -> Self {
        self.notes
            .insert((project_id.to_string(), version.to_string()), note);
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Add an auth key.
    pub fn with_auth_key(mut self, key: AuthKey) -> Self {
        self.auth_keys.push(key);
        self
    }

    /// Set the required API key.
    pub fn with_required_key(mut self, key: &str) -> Self {
        self.required_key = Some(key.to_string());
        self
    }

    /// Set the email and password accepted for listing auth keys.
    pub fn with_account(mut self, email: &str, password: &str) -> Self {
        self.account = Some((email.to_string(), password.to_string()));
        self
    }

    /// Set the list page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the number of requests allowed before throttling.
    pub fn with_rate_limit(mut self, limit: u64) -> Self {
        self.rate_limit = limit;
        self
    }

    /// Generate a fresh identifier with the given prefix.
    pub fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{:06}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Index of a project referenced by ID or `provider/name`.
    pub fn project_index(&self, reference: &str) -> Option<usize> {
        if let Some(i) = self.projects.iter().position(|p| p.id == reference) {
            return Some(i);
        }
        let (provider, name) = reference.split_once('/')?;
        self.projects
            .iter()
            .position(|p| p.provider == provider && p.name == name)
    }

    /// Find a project referenced by ID or `provider/name`.
    pub fn find_project(&self, reference: &str) -> Option<&Project> {
        self.project_index(reference).map(|i| &self.projects[i])
    }

    /// Providers that have at least one tracked project.
    pub fn added_providers(&self) -> Vec<String> {
        let mut added: Vec<String> = Vec::new();
        for project in &self.projects {
            if !added.contains(&project.provider) {
                added.push(project.provider.clone());
            }
        }
        added.sort();
        added
    }

    /// List projects, optionally restricted to one provider.
    pub fn list_projects(&self, provider: Option<&str>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| provider.map(|pr| p.provider == pr).unwrap_or(true))
            .collect()
    }

    /// Projects whose name contains `query`, case-insensitively.
    pub fn search_projects(&self, query: &str, provider: Option<&str>) -> Vec<&Project> {
        let query = query.to_lowercase();
        self.list_projects(provider)
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Releases of a project, newest first.
    pub fn list_releases(&self, project_id: &str) -> &[Release] {
        self.releases
            .get(project_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Apply options to a project, leaving `None` fields unchanged.
    pub fn update_project(&mut self, index: usize, options: ProjectOptions) -> &Project {
        let project = &mut self.projects[index];
        if let Some(email) = options.email_notification {
            project.email_notification = Some(email);
        }
        if let Some(ids) = options.slack_ids {
            project.slack_ids = ids;
        }
        if let Some(ids) = options.telegram_chat_ids {
            project.telegram_chat_ids = ids;
        }
        if let Some(ids) = options.discord_ids {
            project.discord_ids = ids;
        }
        if let Some(ids) = options.hangouts_chat_webhook_ids {
            project.hangouts_chat_webhook_ids = ids;
        }
        if let Some(ids) = options.microsoft_teams_webhook_ids {
            project.microsoft_teams_webhook_ids = ids;
        }
        if let Some(ids) = options.mattermost_webhook_ids {
            project.mattermost_webhook_ids = ids;
        }
        if let Some(ids) = options.webhook_ids {
            project.webhook_ids = ids;
        }
        if let Some(exclusions) = options.exclusions {
            project.exclusions = exclusions;
        }
        if let Some(v) = options.exclude_prereleases {
            project.exclude_prereleases = v;
        }
        if let Some(v) = options.exclude_updated {
            project.exclude_updated = v;
        }
        project
    }

    /// Remove a project and its releases.
    pub fn remove_project(&mut self, index: usize) -> Project {
        let project = self.projects.remove(index);
        self.releases.remove(&project.id);
        self.notes.retain(|(id, _), _| *id != project.id);
        project
    }
}
