/*-------------------------------------------------------------------------------------------------
  GitHub Functional Categories
-------------------------------------------------------------------------------------------------*/

/// A functional category published in the GitHub meta document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Category {
    /// JSON key in the meta document.
    pub key: &'static str,

    /// Human-readable name reported in check results.
    pub name: &'static str,
}

/// The categories checked, in match-priority order. When an address falls within ranges of more
/// than one category, the first category in this list is reported.
pub const CATEGORIES: [Category; 10] = [
    Category { key: "hooks", name: "Hooks" },
    Category { key: "web", name: "Web" },
    Category { key: "api", name: "API" },
    Category { key: "git", name: "Git" },
    Category { key: "packages", name: "Packages" },
    Category { key: "pages", name: "Pages" },
    Category { key: "importer", name: "Importer" },
    Category { key: "actions", name: "Actions" },
    Category { key: "dependabot", name: "Dependabot" },
    Category { key: "actions_ipv4", name: "Actions IPv4" },
];

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
