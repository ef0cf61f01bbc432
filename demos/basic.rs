//! Basic example demonstrating the NewReleases API client.
//!
//! Run with:
//! ```
//! NEWRELEASES_API_KEY=your-key cargo run --example basic
//! ```

use newreleases::{
    list_added_providers, Get, List, NewReleasesClient, Project, ProjectListQuery, ProjectRef,
    Release, ReleaseNote, ReleaseRef,
};

#[tokio::main]
async fn main() -> newreleases::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating NewReleases client...");
    let client = NewReleasesClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Providers in use ---");
    for provider in list_added_providers(&client).await? {
        println!("  - {}", provider);
    }

    // List first page of projects
    println!("\n--- Listing Projects (first page) ---");
    let projects_page = Project::list_page(&client, &ProjectListQuery::default(), 1).await?;
    println!(
        "Found {} projects (page {} of {})",
        projects_page.len(),
        projects_page.page,
        projects_page.total_pages
    );

    for project in &projects_page {
        println!("  - {}/{} ({})", project.provider, project.name, project.id);
    }

    // Get a specific project (using the first one from the list)
    if let Some(first_project) = projects_page.items.first() {
        println!("\n--- Getting Project Details ---");
        let project = Project::get(&client, ProjectRef::from(first_project)).await?;
        println!("Project: {}/{}", project.provider, project.name);
        println!("  URL: {}", project.url);
        println!("  Email: {:?}", project.email_notification);
        println!("  Exclusions: {}", project.exclusions.len());

        // List releases for this project
        println!("\n--- Listing Releases ---");
        let reference = ProjectRef::from(&project);
        let releases = Release::list_page(&client, &reference, 1).await?;
        println!("Found {} releases on the first page", releases.len());

        for release in releases.iter().take(5) {
            println!("  - {} ({})", release.version, release.date.format("%Y-%m-%d"));
        }

        // Show the note of the newest release that has one
        if let Some(release) = releases.iter().find(|r| r.has_note) {
            println!("\n--- Release Note ---");
            let note =
                ReleaseNote::get(&client, ReleaseRef::new(reference, &release.version)).await?;
            println!("{}: {}", release.version, note.title);
        }
    }

    println!("\n--- Rate Limit ---");
    println!("{}", client.rate());

    println!("\nDone!");
    Ok(())
}
