//! Navigation bar shared by every page.

/// One entry in the navigation bar.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    /// Accent colour used when active.
    pub accent: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct NavBar {
    pub links: Vec<NavLink>,
}

const LINKS: [(&str, &str, &str); 3] = [
    ("/research", "Research", "blue"),
    ("/topics", "Topics", "purple"),
    ("/script-generator", "Script Generator", "pink"),
];

impl NavBar {
    /// Navigation with the entry for `path` marked active (exact match).
    pub fn for_path(path: &str) -> Self {
        Self {
            links: LINKS
                .iter()
                .map(|&(href, label, accent)| NavLink {
                    href,
                    label,
                    accent,
                    active: href == path,
                })
                .collect(),
        }
    }
}
