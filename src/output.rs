//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{EmailNotification, Project, Rate, Release};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let header = format!("Project: {}/{}", self.provider, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider, format!("ID:             {}", self.id)];

        if !self.url.is_empty() {
            lines.push(format!("URL:            {}", self.url));
        }

        if let Some(email) = self.email_notification {
            lines.push(format!("Email:          {}", email_label(email)));
        }

        let channels = self.slack_ids.len()
            + self.telegram_chat_ids.len()
            + self.discord_ids.len()
            + self.hangouts_chat_webhook_ids.len()
            + self.microsoft_teams_webhook_ids.len()
            + self.mattermost_webhook_ids.len()
            + self.webhook_ids.len();
        if channels > 0 {
            lines.push(format!("Channels:       {}", channels));
        }

        for exclusion in &self.exclusions {
            let kind = if exclusion.inverse { "only" } else { "exclude" };
            lines.push(format!("Filter:         {} {}", kind, exclusion.value));
        }

        if self.exclude_prereleases {
            lines.push("Pre-releases:   excluded".to_string());
        }

        if self.exclude_updated {
            lines.push("Updates:        excluded".to_string());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Release {
    fn pretty_print(&self) -> String {
        let header = format!("Release: {}", self.version);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Date:           {}", self.date.format("%Y-%m-%d %H:%M:%S UTC")),
        ];

        let mut flags = Vec::new();
        if self.is_prerelease {
            flags.push("pre-release");
        }
        if self.is_updated {
            flags.push("updated");
        }
        if self.is_excluded {
            flags.push("excluded");
        }
        if self.has_note {
            flags.push("has note");
        }
        if !flags.is_empty() {
            lines.push(format!("Flags:          {}", flags.join(", ")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Rate {
    fn pretty_print(&self) -> String {
        let mut lines = vec![
            format!("Limit:          {}", self.limit),
            format!("Remaining:      {}", self.remaining),
        ];
        if let Some(reset) = self.reset {
            lines.push(format!("Reset:          {}", reset.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        if let Some(retry) = self.retry {
            lines.push(format!("Retry after:    {}", retry.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        lines.join("\n")
    }
}

fn email_label(email: EmailNotification) -> &'static str {
    match email {
        EmailNotification::None => "none",
        EmailNotification::Instant => "instant",
        EmailNotification::Hourly => "hourly",
        EmailNotification::Daily => "daily",
        EmailNotification::Weekly => "weekly",
        EmailNotification::Default => "default",
    }
}
