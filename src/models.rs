//! Content shapes returned by the repository.
//!
//! These mirror the projections in [`crate::query`], not the full authoring
//! schemas: a field the query does not select does not appear here. The
//! store projects missing attributes as explicit `null`, so every field
//! that is optional in the studio is an `Option`, and list/flag fields
//! decode `null` to their empty value.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decode `null` (a projected-but-unset attribute) as the type's default.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// URL slug wrapper, stored as `{ "current": "…" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// A dereferenced asset pointer.
///
/// Queries expand `asset->` inline, so both the reference id (the parseable
/// `image-{id}-{WxH}-{format}` / `file-{id}-{ext}` form) and the direct CDN
/// URL may be present. Either can be absent; URL building tries the
/// reference first and falls back to the stored URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// An image field. `asset` is absent when no image was uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

/// An uploaded file field, e.g. the resume PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

/// One block of rich text content.
///
/// Blocks are an open format: paragraphs, headings, inline images, video
/// embeds. Only the block identity is modeled; the shape-specific payload
/// stays as raw JSON for the rendering tier to interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableTextBlock {
    #[serde(rename = "_key", default)]
    pub key: Option<String>,
    #[serde(rename = "_type")]
    pub block_type: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A portfolio project as listed on the work and home pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Unique lookup key for detail pages. Authoring caps slugs at 96
    /// characters; this layer does not enforce that.
    pub slug: Slug,
    /// Short summary for cards. Authoring warns past 120 characters.
    pub description: String,
    /// Card image shown in project grids (16:10 crop target).
    #[serde(default)]
    pub card_image: Option<ImageRef>,
    /// Hero image shown on the detail page (16:9 crop target).
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_to_default")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    /// Editor-managed catalog position. Drives listing sort and
    /// previous/next navigation.
    #[serde(default, deserialize_with = "null_to_default")]
    pub order: i64,
}

/// A project plus its rich content body, for detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default, deserialize_with = "null_to_default")]
    pub content: Vec<PortableTextBlock>,
}

/// Slug row from the all-slugs query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlugRef {
    pub slug: Slug,
}

/// Title and slug of a neighboring project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub slug: Slug,
}

/// Previous/next links for a project detail page. Either side is absent at
/// the corresponding end of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectNavigation {
    #[serde(default)]
    pub previous: Option<NavLink>,
    #[serde(default)]
    pub next: Option<NavLink>,
}

/// The about page singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub bio: Vec<PortableTextBlock>,
    #[serde(default)]
    pub profile_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub skills: Vec<String>,
}

/// One social profile in the site footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Display handle, e.g. `@name`, when it differs from the URL.
    #[serde(default)]
    pub handle: Option<String>,
}

/// Site-wide settings singleton: identity, contact, social, share image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(rename = "_id")]
    pub id: String,
    pub site_name: String,
    #[serde(default)]
    pub site_description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub social_links: Vec<SocialLink>,
    /// Default social-share image for pages without their own.
    #[serde(default)]
    pub og_image: Option<ImageRef>,
}

/// Homepage hero: intro copy, headshot, resume download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub heading: String,
    pub bio: String,
    #[serde(default)]
    pub headshot_image: Option<ImageRef>,
    #[serde(default)]
    pub resume_file: Option<FileRef>,
    #[serde(default)]
    pub resume_link_text: Option<String>,
}

/// A past employer in the "where I've worked" strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub logo: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhereIveWorked {
    #[serde(default)]
    pub section_title: Option<String>,
    /// Editors keep this to at most six entries; the reader returns
    /// whatever count is stored.
    #[serde(default, deserialize_with = "null_to_default")]
    pub companies: Vec<Company>,
}

/// One service column: title, blurb, item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIDoColumn {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIDo {
    /// Nominally three columns, but any count renders.
    #[serde(default, deserialize_with = "null_to_default")]
    pub columns: Vec<WhatIDoColumn>,
}

/// Copy for the featured-work section header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedWork {
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub section_title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cta_text: Option<String>,
}

/// Closing contact call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCta {
    pub heading: String,
    #[serde(default)]
    pub subtext: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
}

/// The homepage singleton. Sections are optional so a partially authored
/// document still renders what exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub hero_section: Option<HeroSection>,
    #[serde(default)]
    pub where_ive_worked: Option<WhereIveWorked>,
    #[serde(default)]
    pub what_i_do: Option<WhatIDo>,
    #[serde(default)]
    pub featured_work: Option<FeaturedWork>,
    #[serde(rename = "contactCTA", default)]
    pub contact_cta: Option<ContactCta>,
}

/// Footer call-to-action on the projects page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterCta {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
}

/// Projects listing page header copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPageSettings {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "footerCTA", default)]
    pub footer_cta: Option<FooterCta>,
}

/// Contact page copy and form routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageSettings {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Form backend identifier; the contact form is disabled when unset.
    #[serde(default)]
    pub formspree_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn project_decodes_from_projection_shape() {
        let value = json!({
            "_id": "project-1",
            "title": "Edge Cache",
            "slug": { "current": "edge-cache", "_type": "slug" },
            "description": "CDN warm-up pipeline",
            "cardImage": { "asset": { "_ref": "image-abc123-1600x1000-jpg", "url": null } },
            "mainImage": null,
            "featured": true,
            "technologies": ["Rust", "Redis"],
            "projectUrl": null,
            "githubUrl": "https://github.com/example/edge-cache",
            "order": 2
        });
        let project: Project = from_value(value).unwrap();
        assert_eq!(project.id, "project-1");
        assert_eq!(project.slug.current, "edge-cache");
        assert!(project.featured);
        assert_eq!(project.technologies, vec!["Rust", "Redis"]);
        assert!(project.main_image.is_none());
        assert!(project.project_url.is_none());
        assert_eq!(project.order, 2);
        let card = project.card_image.unwrap().asset.unwrap();
        assert_eq!(card.reference.as_deref(), Some("image-abc123-1600x1000-jpg"));
        assert!(card.url.is_none());
    }

    #[test]
    fn projected_nulls_decode_to_empty_values() {
        let value = json!({
            "_id": "project-2",
            "title": "Bare",
            "slug": { "current": "bare" },
            "description": "No optional fields set",
            "cardImage": null,
            "mainImage": null,
            "featured": null,
            "technologies": null,
            "projectUrl": null,
            "githubUrl": null,
            "order": null
        });
        let project: Project = from_value(value).unwrap();
        assert!(!project.featured);
        assert!(project.technologies.is_empty());
        assert_eq!(project.order, 0);
    }

    #[test]
    fn detail_flattens_project_fields_beside_content() {
        let value = json!({
            "_id": "project-3",
            "title": "Writeup",
            "slug": { "current": "writeup" },
            "description": "Case study",
            "featured": false,
            "order": 1,
            "content": [
                { "_key": "a1", "_type": "block", "style": "normal", "children": [] },
                { "_key": "b2", "_type": "videoEmbed", "url": "https://example.com/v" }
            ]
        });
        let detail: ProjectDetail = from_value(value).unwrap();
        assert_eq!(detail.project.title, "Writeup");
        assert_eq!(detail.content.len(), 2);
        assert_eq!(detail.content[1].block_type, "videoEmbed");
        assert_eq!(
            detail.content[1].fields.get("url"),
            Some(&json!("https://example.com/v"))
        );
    }

    #[test]
    fn missing_singleton_decodes_to_none() {
        let about: Option<About> = from_value(Value::Null).unwrap();
        assert!(about.is_none());
        let detail: Option<ProjectDetail> = from_value(Value::Null).unwrap();
        assert!(detail.is_none());
    }

    #[test]
    fn homepage_tolerates_unset_sections() {
        let value = json!({
            "_id": "homepage",
            "heroSection": null,
            "whereIveWorked": null,
            "whatIDo": { "columns": [
                { "title": "Design", "description": "Systems", "items": null },
                { "title": "Build", "description": "Frontends", "items": ["React"] }
            ]},
            "featuredWork": null,
            "contactCTA": { "heading": "Say hi", "subtext": null, "buttonText": null }
        });
        let homepage: Homepage = from_value(value).unwrap();
        assert!(homepage.hero_section.is_none());
        let columns = homepage.what_i_do.unwrap().columns;
        assert_eq!(columns.len(), 2);
        assert!(columns[0].items.is_empty());
        assert_eq!(homepage.contact_cta.unwrap().heading, "Say hi");
    }

    #[test]
    fn site_settings_decode_with_share_image() {
        let value = json!({
            "_id": "siteSettings",
            "siteName": "Folio",
            "siteDescription": null,
            "email": "hello@example.com",
            "socialLinks": [
                { "platform": "GitHub", "url": "https://github.com/example", "handle": null }
            ],
            "ogImage": { "asset": { "_ref": "image-og1-1200x628-png", "url": null } }
        });
        let settings: SiteSettings = from_value(value).unwrap();
        assert_eq!(settings.site_name, "Folio");
        assert_eq!(settings.social_links.len(), 1);
        assert!(settings.social_links[0].handle.is_none());
        assert!(settings.og_image.unwrap().asset.is_some());
    }

    #[test]
    fn navigation_defaults_to_both_absent() {
        let nav = ProjectNavigation::default();
        assert!(nav.previous.is_none());
        assert!(nav.next.is_none());
    }
}
