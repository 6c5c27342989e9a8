//! Read façade over the content store.
//!
//! One operation per content shape, and every operation fails closed: a
//! store error or a payload that does not decode is logged with the
//! operation name and replaced by that operation's fallback (empty list,
//! absent document, or all-absent navigation). Callers never see a
//! `Result` here and never need error handling of their own.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::ContentError;
use crate::models::{
    About, ContactPageSettings, Homepage, NavLink, Project, ProjectDetail, ProjectNavigation,
    ProjectsPageSettings, SiteSettings, SlugRef,
};
use crate::query;
use crate::store::{ContentStore, QueryParams};

/// Typed content reads for every page of the site.
///
/// Generic over [`ContentStore`] so the HTTP client can be swapped for an
/// in-memory store in tests.
pub struct ContentRepository<S> {
    store: S,
}

impl<S: ContentStore> ContentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run a query and decode the result, substituting `fallback` on any
    /// failure. This is the only error path in the façade.
    async fn fetch_or<T: DeserializeOwned>(
        &self,
        query: &'static str,
        params: QueryParams,
        operation: &'static str,
        fallback: T,
    ) -> T {
        let result = match self.store.query(query, &params).await {
            Ok(result) => result,
            Err(error) => {
                warn!(operation, %error, "content fetch failed, serving fallback");
                return fallback;
            }
        };
        match serde_json::from_value(result).map_err(ContentError::from) {
            Ok(value) => value,
            Err(error) => {
                warn!(operation, %error, "content payload did not decode, serving fallback");
                fallback
            }
        }
    }

    /// Every project, ascending by catalog order. Falls back to an empty
    /// list; the presentation tier decides whether to show placeholders.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.fetch_or(query::PROJECTS, QueryParams::new(), "list_projects", Vec::new())
            .await
    }

    /// Featured projects only, in catalog order. Falls back to an empty list.
    pub async fn list_featured_projects(&self) -> Vec<Project> {
        self.fetch_or(
            query::FEATURED_PROJECTS,
            QueryParams::new(),
            "list_featured_projects",
            Vec::new(),
        )
        .await
    }

    /// A single project with its content body, or `None` when the slug
    /// matches nothing (or the fetch fails).
    pub async fn get_project_by_slug(&self, slug: &str) -> Option<ProjectDetail> {
        self.fetch_or(
            query::PROJECT_BY_SLUG,
            QueryParams::new().set("slug", slug),
            "get_project_by_slug",
            None,
        )
        .await
    }

    /// Slugs of every project, for path generation. Falls back to an empty
    /// list, which degrades prebuilt detail pages to on-demand rendering.
    pub async fn list_project_slugs(&self) -> Vec<SlugRef> {
        self.fetch_or(
            query::PROJECT_SLUGS,
            QueryParams::new(),
            "list_project_slugs",
            Vec::new(),
        )
        .await
    }

    /// Previous and next projects around `current_order`, by strict order
    /// comparison. Ties on equal order values resolve to the store's
    /// document order. Both sides are fetched concurrently; if either
    /// fetch errors the whole result falls back to both-absent, while a
    /// side that merely decodes badly degrades to absent on its own.
    pub async fn get_project_navigation(&self, current_order: i64) -> ProjectNavigation {
        let previous_params = QueryParams::new().set("currentOrder", current_order);
        let next_params = QueryParams::new().set("currentOrder", current_order);
        let (previous, next) = tokio::join!(
            self.store.query(query::NAV_PREVIOUS, &previous_params),
            self.store.query(query::NAV_NEXT, &next_params),
        );
        let (previous, next) = match (previous, next) {
            (Ok(previous), Ok(next)) => (previous, next),
            (Err(error), _) | (_, Err(error)) => {
                warn!(
                    operation = "get_project_navigation",
                    %error,
                    "content fetch failed, serving fallback"
                );
                return ProjectNavigation::default();
            }
        };
        ProjectNavigation {
            previous: decode_nav_link(previous, "previous"),
            next: decode_nav_link(next, "next"),
        }
    }

    /// The about page document, or `None` when unauthored or unavailable.
    pub async fn get_about(&self) -> Option<About> {
        self.fetch_or(query::ABOUT, QueryParams::new(), "get_about", None)
            .await
    }

    /// Site-wide settings, or `None`. Callers fall back to their own
    /// compiled-in defaults for name and metadata.
    pub async fn get_site_settings(&self) -> Option<SiteSettings> {
        self.fetch_or(
            query::SITE_SETTINGS,
            QueryParams::new(),
            "get_site_settings",
            None,
        )
        .await
    }

    /// The homepage document with all sections, or `None`.
    pub async fn get_homepage(&self) -> Option<Homepage> {
        self.fetch_or(query::HOMEPAGE, QueryParams::new(), "get_homepage", None)
            .await
    }

    /// Projects listing page copy, or `None`.
    pub async fn get_projects_page_settings(&self) -> Option<ProjectsPageSettings> {
        self.fetch_or(
            query::PROJECTS_PAGE_SETTINGS,
            QueryParams::new(),
            "get_projects_page_settings",
            None,
        )
        .await
    }

    /// Contact page copy and form routing, or `None`.
    pub async fn get_contact_page_settings(&self) -> Option<ContactPageSettings> {
        self.fetch_or(
            query::CONTACT_PAGE_SETTINGS,
            QueryParams::new(),
            "get_contact_page_settings",
            None,
        )
        .await
    }
}

fn decode_nav_link(value: Value, side: &'static str) -> Option<NavLink> {
    match serde_json::from_value(value).map_err(ContentError::from) {
        Ok(link) => link,
        Err(error) => {
            warn!(
                operation = "get_project_navigation",
                side,
                %error,
                "navigation payload did not decode, serving absent link"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::error::{ContentError, Result};
    use serde_json::json;

    /// Answers every query with the same canned value.
    struct CannedStore(Value);

    #[async_trait]
    impl ContentStore for CannedStore {
        async fn query(&self, _query: &str, _params: &QueryParams) -> Result<Value> {
            Ok(self.0.clone())
        }
    }

    struct ErrStore;

    #[async_trait]
    impl ContentStore for ErrStore {
        async fn query(&self, _query: &str, _params: &QueryParams) -> Result<Value> {
            Err(ContentError::Store {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn store_error_serves_the_fallback() {
        let repo = ContentRepository::new(ErrStore);
        assert!(repo.list_projects().await.is_empty());
        assert!(repo.get_about().await.is_none());
    }

    #[tokio::test]
    async fn undecodable_payload_serves_the_fallback() {
        let repo = ContentRepository::new(CannedStore(json!({ "not": "a list" })));
        assert!(repo.list_projects().await.is_empty());
    }

    #[tokio::test]
    async fn null_singleton_decodes_to_absent() {
        let repo = ContentRepository::new(CannedStore(Value::Null));
        assert!(repo.get_site_settings().await.is_none());
        assert!(repo.get_project_by_slug("anything").await.is_none());
    }

    #[tokio::test]
    async fn navigation_store_error_serves_both_absent() {
        let repo = ContentRepository::new(ErrStore);
        let nav = repo.get_project_navigation(3).await;
        assert_eq!(nav, ProjectNavigation::default());
    }

    #[tokio::test]
    async fn navigation_bad_payload_degrades_per_side() {
        // Both sides answer with a shape that is neither null nor a link.
        let repo = ContentRepository::new(CannedStore(json!(42)));
        let nav = repo.get_project_navigation(3).await;
        assert!(nav.previous.is_none());
        assert!(nav.next.is_none());
    }
}
