//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the newreleases binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::{ProjectListOrder, ProjectRef};

/// NewReleases API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "newreleases", about = "NewReleases API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List project providers.
    Providers {
        /// Only providers of projects that are tracked.
        #[arg(long)]
        added: bool,
    },

    /// List tracked projects.
    Projects {
        /// Page number (1-indexed).
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Sort order.
        #[arg(long)]
        order: Option<Order>,

        /// Reverse the sort order.
        #[arg(long)]
        reverse: bool,

        /// Only projects of this provider.
        #[arg(long)]
        provider: Option<String>,
    },

    /// Show a single project.
    Project {
        /// Project ID, or provider/name (e.g. github/golang/go).
        reference: String,
    },

    /// List releases of a project.
    Releases {
        /// Project ID, or provider/name (e.g. github/golang/go).
        reference: String,

        /// Page number (1-indexed).
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// List tags.
    Tags,

    /// Show the current rate limit.
    Rate,
}

/// Project list orders.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Updated,
    Added,
    Name,
}

impl From<Order> for ProjectListOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Updated => ProjectListOrder::Updated,
            Order::Added => ProjectListOrder::Added,
            Order::Name => ProjectListOrder::Name,
        }
    }
}

/// Interpret a command-line project reference.
///
/// `provider/name` when it contains a slash, otherwise a project ID.
pub fn parse_project_ref(reference: &str) -> ProjectRef {
    match reference.split_once('/') {
        Some((provider, name)) if !provider.is_empty() && !name.is_empty() => {
            ProjectRef::name(provider, name)
        }
        _ => ProjectRef::id(reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_ref() {
        assert_eq!(
            parse_project_ref("github/golang/go"),
            ProjectRef::name("github", "golang/go")
        );
        assert_eq!(
            parse_project_ref("pf4w494lbjsd3ydp5hnf4gsptw"),
            ProjectRef::id("pf4w494lbjsd3ydp5hnf4gsptw")
        );
    }
}
