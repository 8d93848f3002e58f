//! Portfolio content and navbar links

use folio_core::NavigationTarget;

/// Sample resume shown when no document is given on the command line
pub const SAMPLE_RESUME: &str = include_str!("../../assets/resume.txt");

/// Label shown in place of a file path for the built-in resume
pub const SAMPLE_RESUME_NAME: &str = "<built-in resume>";

/// Navbar brand
pub const BRAND: &str = "Folio";

/// A clickable navbar entry
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavigationTarget,
}

/// Navbar entries in display order
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink {
            label: "Home",
            target: NavigationTarget::section("home"),
        },
        NavLink {
            label: "Projects",
            target: NavigationTarget::section("projects"),
        },
        NavLink {
            label: "Certificates",
            target: NavigationTarget::section("certificates"),
        },
        NavLink {
            label: "Resume",
            target: NavigationTarget::section("resume"),
        },
        NavLink {
            label: "Full Resume",
            target: NavigationTarget::route("full-resume", "/resume"),
        },
    ]
}

/// Section ids the activity tracker observes, in declaration order
pub fn tracked_sections(links: &[NavLink]) -> Vec<String> {
    links
        .iter()
        .filter_map(|link| match &link.target {
            NavigationTarget::Section { id } => Some(id.clone()),
            NavigationTarget::Route { .. } => None,
        })
        .collect()
}

/// A block of the home page
#[derive(Debug)]
pub struct SectionContent {
    pub id: &'static str,
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Stretch to at least one viewport tall
    pub fill_viewport: bool,
}

pub const SECTIONS: &[SectionContent] = &[
    SectionContent {
        id: "home",
        eyebrow: "Hello, I build things",
        title: "Software engineer crafting calm, fast interfaces",
        paragraphs: &[
            "Systems-minded developer who enjoys the seams between user interfaces and the machinery underneath them.",
            "Use the number keys or click the navbar to jump between sections.",
        ],
        fill_viewport: true,
    },
    SectionContent {
        id: "about",
        eyebrow: "About",
        title: "A little background",
        paragraphs: &[
            "Started out writing scripts to automate lab equipment, stayed for the joy of making tools that disappear into the workflow of the people using them.",
            "Most days are spent on front-end architecture, performance work, and the occasional terminal application.",
        ],
        fill_viewport: false,
    },
    SectionContent {
        id: "projects",
        eyebrow: "Selected Work",
        title: "Projects",
        paragraphs: &[
            "Trackline - a route planner that keeps long itineraries readable by folding quiet stretches of the journey.",
            "Inkwell - a markdown notebook with instant full-text search across thousands of pages.",
            "Relay - a tiny webhook fan-out service with per-target retry budgets.",
            "Paperweight - a document viewer that streams pages lazily as they scroll into view.",
        ],
        fill_viewport: false,
    },
    SectionContent {
        id: "certificates",
        eyebrow: "Learning",
        title: "Certificates",
        paragraphs: &[
            "Cloud Practitioner - foundational cloud architecture and pricing models.",
            "Front-End Performance - rendering pipelines, layout thrashing, and measuring what matters.",
            "Applied Cryptography - primitives, protocols, and the ways they fail in practice.",
        ],
        fill_viewport: false,
    },
    SectionContent {
        id: "resume",
        eyebrow: "My Background",
        title: "Professional Resume",
        paragraphs: &[
            "The full resume opens as a paginated document. Press r or choose Full Resume in the navbar to read it page by page.",
            "Press d at any time to open the document file directly.",
        ],
        fill_viewport: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_sections_skip_routes() {
        let links = nav_links();
        assert_eq!(
            tracked_sections(&links),
            vec!["home", "projects", "certificates", "resume"]
        );
    }

    #[test]
    fn test_every_section_link_has_content() {
        for id in tracked_sections(&nav_links()) {
            assert!(SECTIONS.iter().any(|s| s.id == id), "no content for {}", id);
        }
    }

    #[test]
    fn test_sample_resume_parses() {
        let doc = folio_core::PagedDocument::parse(
            std::path::Path::new(SAMPLE_RESUME_NAME),
            SAMPLE_RESUME,
        )
        .unwrap();
        assert!(doc.page_count() >= 2);
    }
}
