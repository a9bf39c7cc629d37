//! Fixed option catalogs.
//!
//! These lists are configuration shipped with the system rather than data
//! read from a directory: the available publication and announcement
//! filters, the coarse document types, and the official-document statuses.

/// A catalog entry for publication and announcement filters.
///
/// `group_key` lets a client group the options after the fact even though
/// the option set itself is stored ungrouped.
pub struct CatalogOption {
    pub label: &'static str,
    pub slug: &'static str,
    pub group_key: &'static str,
}

pub static PUBLICATION_TYPES: &[CatalogOption] = &[
    CatalogOption { label: "Policy papers", slug: "policy-papers", group_key: "policy" },
    CatalogOption { label: "Consultations", slug: "consultations", group_key: "policy" },
    CatalogOption { label: "Impact assessments", slug: "impact-assessments", group_key: "policy" },
    CatalogOption { label: "Guidance", slug: "guidance", group_key: "guidance" },
    CatalogOption { label: "Forms", slug: "forms", group_key: "guidance" },
    CatalogOption { label: "Statistics", slug: "statistics", group_key: "research" },
    CatalogOption { label: "Research and analysis", slug: "research-and-analysis", group_key: "research" },
    CatalogOption { label: "Corporate reports", slug: "corporate-reports", group_key: "transparency" },
    CatalogOption { label: "Transparency data", slug: "transparency-data", group_key: "transparency" },
    CatalogOption { label: "FOI releases", slug: "foi-releases", group_key: "transparency" },
];

pub static ANNOUNCEMENT_TYPES: &[CatalogOption] = &[
    CatalogOption { label: "Press releases", slug: "press-releases", group_key: "news" },
    CatalogOption { label: "News stories", slug: "news-stories", group_key: "news" },
    CatalogOption { label: "Fatality notices", slug: "fatality-notices", group_key: "news" },
    CatalogOption { label: "Speeches", slug: "speeches", group_key: "speeches-and-statements" },
    CatalogOption { label: "Written statements", slug: "written-statements", group_key: "speeches-and-statements" },
    CatalogOption { label: "Oral statements", slug: "oral-statements", group_key: "speeches-and-statements" },
];

pub static DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("Announcements", "announcements"),
    ("Policies", "policies"),
    ("Publications", "publications"),
];

pub static OFFICIAL_DOCUMENT_STATUSES: &[(&str, &str)] = &[
    ("Command or act papers", "command_and_act_papers"),
    ("Command papers only", "command_papers_only"),
    ("Act papers only", "act_papers_only"),
];
