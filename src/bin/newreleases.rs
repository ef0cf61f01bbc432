//! NewReleases API CLI binary.
//!
//! A command-line interface for interacting with the NewReleases API.

use clap::Parser;
use newreleases::cli::{parse_project_ref, Cli, Command};
use newreleases::{
    list_added_providers, list_providers, Get, List, NewReleasesClient, Page, PrettyPrint,
    Project, ProjectListQuery, Release, Tag,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let client = match NewReleasesClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set NEWRELEASES_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            let rate = client.rate();
            if rate.retry.is_some() {
                eprintln!("Rate limit: {rate}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &NewReleasesClient, cli: Cli) -> newreleases::Result<()> {
    match cli.command {
        Command::Providers { added } => {
            let providers = if added {
                list_added_providers(client).await?
            } else {
                list_providers(client).await?
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&providers)?);
            } else {
                for provider in providers {
                    println!("{provider}");
                }
            }
        }
        Command::Projects {
            page,
            order,
            reverse,
            provider,
        } => {
            let query = ProjectListQuery {
                provider,
                order: order.map(Into::into),
                reverse,
            };
            let projects = Project::list_page(client, &query, page).await?;
            output_page(&projects, cli.json, |p| ProjectRow::from(p))?;
        }
        Command::Project { reference } => {
            let project = Project::get(client, parse_project_ref(&reference)).await?;
            output_single(&project, cli.json)?;
        }
        Command::Releases { reference, page } => {
            let releases = Release::list_page(client, &parse_project_ref(&reference), page).await?;
            output_page(&releases, cli.json, |r| ReleaseRow::from(r))?;
        }
        Command::Tags => {
            let tags = Tag::list(client).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                let rows: Vec<TagRow> = tags.iter().map(TagRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        Command::Rate => {
            // The rate is only known after a request.
            list_providers(client).await?;
            let rate = client.rate();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "limit": rate.limit,
                        "remaining": rate.remaining,
                        "reset": rate.reset,
                        "retry": rate.retry,
                    }))?
                );
            } else {
                println!("{}", rate.pretty_print());
            }
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> newreleases::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page<T, R, F>(page: &Page<T>, json: bool, to_row: F) -> newreleases::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&page.items)?);
    } else {
        let rows: Vec<R> = page.items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\nPage {}/{}", page.page, page.total_pages.max(1));
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct ProjectRow {
    id: String,
    provider: String,
    name: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            provider: p.provider.clone(),
            name: p.name.clone(),
        }
    }
}

#[derive(Tabled)]
struct ReleaseRow {
    version: String,
    date: String,
    flags: String,
}

impl From<&Release> for ReleaseRow {
    fn from(r: &Release) -> Self {
        let mut flags = Vec::new();
        if r.is_prerelease {
            flags.push("pre");
        }
        if r.is_updated {
            flags.push("updated");
        }
        if r.has_note {
            flags.push("note");
        }
        Self {
            version: r.version.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            flags: flags.join(", "),
        }
    }
}

#[derive(Tabled)]
struct TagRow {
    id: String,
    name: String,
}

impl From<&Tag> for TagRow {
    fn from(t: &Tag) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
        }
    }
}
