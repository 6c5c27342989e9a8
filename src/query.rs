//! GROQ queries for every content shape the site reads.
//!
//! Queries are fixed strings; everything variable travels through
//! [`QueryParams`](crate::store::QueryParams) bindings (`$slug`,
//! `$currentOrder`), never through string interpolation.

// Splices the shared project projection between a query head and tail at
// compile time. Asset references are dereferenced inline so image fields
// arrive with both `_ref` and `url` in the same round-trip.
macro_rules! project_query {
    ($head:literal, $tail:literal) => {
        concat!(
            $head,
            "_id, title, slug, description, cardImage { asset-> { _ref, url } }, mainImage { asset-> { _ref, url } }, featured, technologies, projectUrl, githubUrl, order",
            $tail
        )
    };
}

/// Field selection shared by every project query.
pub const PROJECT_FIELDS: &str = project_query!("", "");

/// Every project, ascending by the editor-managed `order` field.
pub const PROJECTS: &str =
    project_query!(r#"*[_type == "project"] | order(order asc) { "#, " }");

/// Projects flagged as featured, in the same catalog order.
pub const FEATURED_PROJECTS: &str = project_query!(
    r#"*[_type == "project" && featured == true] | order(order asc) { "#,
    " }"
);

/// A single project by its URL slug, including the rich content body.
/// Binds `$slug`.
pub const PROJECT_BY_SLUG: &str = project_query!(
    r#"*[_type == "project" && slug.current == $slug][0] { "#,
    ", content }"
);

/// Slug of every project, for sitemap/static-path generation.
pub const PROJECT_SLUGS: &str = r#"*[_type == "project"] { slug }"#;

/// Nearest project strictly before `$currentOrder` in catalog order.
pub const NAV_PREVIOUS: &str =
    r#"*[_type == "project" && order < $currentOrder] | order(order desc)[0] { title, slug }"#;

/// Nearest project strictly after `$currentOrder` in catalog order.
pub const NAV_NEXT: &str =
    r#"*[_type == "project" && order > $currentOrder] | order(order asc)[0] { title, slug }"#;

/// The about singleton.
pub const ABOUT: &str =
    r#"*[_type == "about"][0] { _id, title, bio, profileImage { asset-> { _ref, url } }, skills }"#;

/// The site settings singleton, including the default share image.
pub const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0] { _id, siteName, siteDescription, email, socialLinks, ogImage { asset-> { _ref, url } } }"#;

/// The homepage singleton with all five sections.
pub const HOMEPAGE: &str = r#"*[_type == "homepage"][0] { _id, heroSection { heading, bio, headshotImage { asset-> { _ref, url } }, resumeFile { asset-> { _ref, url } }, resumeLinkText }, whereIveWorked { sectionTitle, companies[] { name, logo { asset-> { _ref, url } } } }, whatIDo { columns[] { title, description, items } }, featuredWork { eyebrow, sectionTitle, description, ctaText }, contactCTA { heading, subtext, buttonText } }"#;

/// The projects page settings singleton.
pub const PROJECTS_PAGE_SETTINGS: &str =
    r#"*[_type == "projectsPageSettings"][0] { _id, eyebrow, title, description, footerCTA { text, linkText } }"#;

/// The contact page settings singleton.
pub const CONTACT_PAGE_SETTINGS: &str =
    r#"*[_type == "contactPageSettings"][0] { _id, eyebrow, heading, description, formspreeId }"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_queries_share_the_field_selection() {
        for query in [PROJECTS, FEATURED_PROJECTS, PROJECT_BY_SLUG] {
            assert!(query.contains(PROJECT_FIELDS));
        }
    }

    #[test]
    fn collection_queries_sort_ascending() {
        assert!(PROJECTS.contains("| order(order asc)"));
        assert!(FEATURED_PROJECTS.contains("featured == true"));
    }

    #[test]
    fn detail_query_adds_content_and_binds_slug() {
        assert!(PROJECT_BY_SLUG.contains("$slug"));
        assert!(PROJECT_BY_SLUG.ends_with(", content }"));
        assert!(!PROJECTS.contains("content"));
    }

    #[test]
    fn navigation_uses_strict_inequalities() {
        assert!(NAV_PREVIOUS.contains("order < $currentOrder"));
        assert!(NAV_PREVIOUS.contains("order(order desc)[0]"));
        assert!(NAV_NEXT.contains("order > $currentOrder"));
        assert!(NAV_NEXT.contains("order(order asc)[0]"));
    }

    #[test]
    fn singleton_queries_take_the_first_document() {
        for query in [
            ABOUT,
            SITE_SETTINGS,
            HOMEPAGE,
            PROJECTS_PAGE_SETTINGS,
            CONTACT_PAGE_SETTINGS,
        ] {
            assert!(query.contains("[0]"));
        }
    }

    #[test]
    fn site_settings_projects_the_share_image() {
        assert!(SITE_SETTINGS.contains("ogImage { asset-> { _ref, url } }"));
    }
}
