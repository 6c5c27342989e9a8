//! Placeholder projects shown while the catalog is empty.
//!
//! The repository never substitutes these; it reports the store's truth
//! (an empty list) and the presentation tier chooses to render this
//! catalog during initial setup. Keeping the substitution out of the
//! fetch layer keeps "no content yet" distinguishable from real data.

use crate::models::{Project, Slug};

fn placeholder(
    id: &str,
    title: &str,
    slug: &str,
    description: &str,
    technologies: &[&str],
    featured: bool,
    order: i64,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        slug: Slug {
            current: slug.to_string(),
        },
        description: description.to_string(),
        card_image: None,
        main_image: None,
        featured,
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        project_url: None,
        github_url: None,
        order,
    }
}

/// The six example projects, in catalog order.
pub fn placeholder_projects() -> Vec<Project> {
    vec![
        placeholder(
            "placeholder-1",
            "E-Commerce Platform Redesign",
            "ecommerce-redesign",
            "Led the complete redesign of a multi-million dollar e-commerce platform, improving conversion rates by 40%.",
            &["Product Strategy", "UX Design", "A/B Testing"],
            true,
            1,
        ),
        placeholder(
            "placeholder-2",
            "Mobile App Launch",
            "mobile-app",
            "Spearheaded the development and launch of a mobile-first experience, reaching 100K users in the first month.",
            &["Mobile", "User Research", "Agile"],
            true,
            2,
        ),
        placeholder(
            "placeholder-3",
            "Analytics Dashboard",
            "analytics-dashboard",
            "Designed and shipped a comprehensive analytics dashboard for enterprise clients, enabling data-driven decision making.",
            &["Data Visualization", "Enterprise", "SaaS"],
            false,
            3,
        ),
        placeholder(
            "placeholder-4",
            "Design System 2.0",
            "design-system",
            "Built a scalable design system from the ground up, reducing design-to-development time by 60%.",
            &["Design Systems", "Component Library", "Documentation"],
            false,
            4,
        ),
        placeholder(
            "placeholder-5",
            "Payment Integration",
            "payment-integration",
            "Implemented a seamless payment flow that increased transaction completion rates by 25%.",
            &["FinTech", "Payments", "Security"],
            false,
            5,
        ),
        placeholder(
            "placeholder-6",
            "Onboarding Flow Optimization",
            "onboarding-flow",
            "Redesigned user onboarding experience, reducing drop-off rates from 45% to 12%.",
            &["User Experience", "Conversion Optimization", "Research"],
            false,
            6,
        ),
    ]
}

/// Featured placeholders only, for the homepage section.
pub fn featured_placeholder_projects() -> Vec<Project> {
    placeholder_projects()
        .into_iter()
        .filter(|p| p.featured)
        .collect()
}
