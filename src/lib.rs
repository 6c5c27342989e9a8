//! Typed content client for the Folio portfolio site
//!
//! Fetches the site's structured content (projects, homepage sections,
//! page settings) from a Sanity content lake and derives CDN URLs for
//! image and file assets. Every read operation fails closed: errors are
//! logged with the operation name and replaced by that operation's
//! documented fallback, so a content outage renders empty states instead
//! of an error page.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_content::{ContentRepository, ImageUrlBuilder, SanityClient, SanityConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SanityConfig::from_env();
//! let images = ImageUrlBuilder::from_config(&config);
//! let repo = ContentRepository::new(SanityClient::new(config)?);
//!
//! // List the catalog; an unreachable store yields an empty list.
//! for project in repo.list_projects().await {
//!     let card = project
//!         .card_image
//!         .as_ref()
//!         .and_then(|image| images.card_image_url(image));
//!     println!("{}: {:?}", project.title, card);
//! }
//!
//! // Single documents come back as Option.
//! if let Some(detail) = repo.get_project_by_slug("ecommerce-redesign").await {
//!     let nav = repo.get_project_navigation(detail.project.order).await;
//!     println!("prev: {:?}, next: {:?}", nav.previous, nav.next);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod models;
pub mod placeholders;
pub mod query;
pub mod repository;
pub mod store;

// Re-export main types
pub use client::SanityClient;
pub use config::SanityConfig;
pub use error::{ContentError, Result};
pub use image::ImageUrlBuilder;
pub use models::*;
pub use repository::ContentRepository;
pub use store::{ContentStore, QueryParams};
