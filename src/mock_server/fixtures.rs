//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{DateTime, Utc};

use crate::{AuthKey, EmailNotification, Exclusion, IpNet, Project, Release, ReleaseNote, Tag};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create a project with default options.
    pub fn project(id: &str, provider: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            provider: provider.to_string(),
            url: String::new(),
            email_notification: None,
            slack_ids: vec![],
            telegram_chat_ids: vec![],
            discord_ids: vec![],
            hangouts_chat_webhook_ids: vec![],
            microsoft_teams_webhook_ids: vec![],
            mattermost_webhook_ids: vec![],
            webhook_ids: vec![],
            exclusions: vec![],
            exclude_prereleases: false,
            exclude_updated: false,
        }
    }

    /// Create a GitHub project with a releases URL and daily emails.
    pub fn github_project(id: &str, name: &str) -> Project {
        let mut project = Self::project(id, "github", name);
        project.url = format!("https://github.com/{name}/releases");
        project.email_notification = Some(EmailNotification::Daily);
        project
    }

    // =========================================================================
    // Release Fixtures
    // =========================================================================

    /// Create a release published at an RFC 3339 `date`.
    ///
    /// An unparsable date falls back to the Unix epoch.
    pub fn release(version: &str, date: &str) -> Release {
        Release {
            version: version.to_string(),
            date: date.parse::<DateTime<Utc>>().unwrap_or_default(),
            is_prerelease: false,
            is_updated: false,
            is_excluded: false,
            has_note: false,
        }
    }

    /// Create a pre-release.
    pub fn prerelease(version: &str, date: &str) -> Release {
        let mut release = Self::release(version, date);
        release.is_prerelease = true;
        release
    }

    /// Create a release note.
    pub fn note(title: &str, message: &str) -> ReleaseNote {
        ReleaseNote {
            title: title.to_string(),
            message: message.to_string(),
            url: String::new(),
        }
    }

    // =========================================================================
    // Account Fixtures
    // =========================================================================

    pub fn tag(id: &str, name: &str) -> Tag {
        Tag {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// Create an auth key restricted to the given CIDR networks.
    ///
    /// Networks that fail to parse are skipped.
    pub fn auth_key(name: &str, secret: &str, networks: &[&str]) -> AuthKey {
        AuthKey {
            name: name.to_string(),
            secret: secret.to_string(),
            authorized_networks: networks
                .iter()
                .filter_map(|n| n.parse::<IpNet>().ok())
                .collect(),
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub providers: Vec<String>,
    pub projects: Vec<Project>,
    pub releases: Vec<(String, Release)>,
    pub notes: Vec<(String, String, ReleaseNote)>,
    pub tags: Vec<Tag>,
    pub auth_keys: Vec<AuthKey>,
}

impl DefaultScenario {
    fn new() -> Self {
        let providers = ["github", "npm", "pypi", "dockerhub", "cargo"]
            .iter()
            .map(|p| p.to_string())
            .collect();

        let mut go = Fixtures::github_project("p-go", "golang/go");
        go.exclusions = vec![Exclusion {
            value: "^weekly".to_string(),
            inverse: false,
        }];

        let projects = vec![
            go,
            Fixtures::github_project("p-rust", "rust-lang/rust"),
            Fixtures::project("p-express", "npm", "express"),
        ];

        let mut with_note = Fixtures::release("go1.13", "2019-09-03T17:00:00Z");
        with_note.has_note = true;

        let releases = vec![
            ("p-go".to_string(), Fixtures::release("go1.12.9", "2019-08-15T18:13:00Z")),
            ("p-go".to_string(), Fixtures::prerelease("go1.13rc1", "2019-08-21T16:31:00Z")),
            ("p-go".to_string(), with_note),
            ("p-rust".to_string(), Fixtures::release("1.38.0", "2019-09-26T00:00:00Z")),
            ("p-express".to_string(), Fixtures::release("4.17.1", "2019-05-26T00:00:00Z")),
        ];

        let notes = vec![(
            "p-go".to_string(),
            "go1.13".to_string(),
            Fixtures::note("Go 1.13", "<p>Go 1.13 is released</p>"),
        )];

        let tags = vec![
            Fixtures::tag("t-backend", "Backend"),
            Fixtures::tag("t-tools", "Tools"),
        ];

        let auth_keys = vec![
            Fixtures::auth_key("Master", "m6bdyhgf5ncrqqgwnw3kcawddmdqbqcc", &[]),
            Fixtures::auth_key("CI", "h7gs9bdl3lt0qtp6wm1sj4c0h11dqcc0", &["10.0.0.0/8"]),
        ];

        Self {
            providers,
            projects,
            releases,
            notes,
            tags,
            auth_keys,
        }
    }
}
