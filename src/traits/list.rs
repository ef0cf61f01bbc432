//! List trait for fetching paginated collections of entities.

use async_trait::async_trait;

use crate::client::NewReleasesClient;
use crate::error::Result;
use crate::pagination::Page;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// List entities page by page.
///
/// # Example
///
/// ```ignore
/// use newreleases::{NewReleasesClient, Project, List};
///
/// let client = NewReleasesClient::from_env()?;
///
/// // Fetch a single page
/// let page = Project::list_page(&client, &Default::default(), 1).await?;
///
/// // Fetch all pages
/// let all_projects = Project::list_all(&client, &Default::default()).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Query parameters for filtering.
    type Query: Send + Sync;

    /// List entities matching the query (single page).
    ///
    /// # Arguments
    ///
    /// * `client` - The NewReleases API client
    /// * `query` - Query parameters for filtering
    /// * `page` - Page number (1-indexed)
    ///
    /// # Errors
    ///
    /// Returns [`crate::NewReleasesError::InvalidPageNumber`] for page 0
    /// without sending a request, or an error if the request fails.
    async fn list_page(client: &NewReleasesClient, query: &Self::Query, page: u32)
        -> Result<Page<Self>>;

    /// List all entities matching the query (fetches all pages).
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &NewReleasesClient, query: &Self::Query) -> Result<Vec<Self>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let result = Self::list_page(client, query, page).await?;
            let has_more = result.has_more();
            all_items.extend(result.items);

            if !has_more {
                break;
            }
            page += 1;

            // Safety limit to prevent infinite loops
            if page > MAX_PAGES {
                tracing::warn!("Reached pagination limit of {} pages, stopping", MAX_PAGES);
                break;
            }
        }

        Ok(all_items)
    }
}
