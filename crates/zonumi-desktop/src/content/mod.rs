//! Content records rendered inside windows
//!
//! Records arrive already parsed from markdown front-matter. The window
//! manager only reads them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Heading that separates the profile summary from certifications
const CERTIFICATIONS_HEADING: &str = r"^##\s+Certifications and Education\s*$";

/// A client engagement shown in the Projects window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// File stem of the source markdown
    pub slug: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Sort key, higher first
    #[serde(default)]
    pub weight: f64,
    /// Markdown body
    #[serde(default)]
    pub content: String,
}

/// Owner profile shown in the Profile and Education windows
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    /// Markdown body
    #[serde(default)]
    pub content: String,
}

/// Named groups of entries
pub type EntryGroups = BTreeMap<String, Vec<String>>;

/// Employers grouped by period, shown in the Experience window
pub type Experience = EntryGroups;

/// Skills grouped by area
pub type Skills = EntryGroups;

impl Profile {
    /// Split the body into `(summary, certifications)` at the certifications heading
    ///
    /// Without the heading the whole body is the summary.
    pub fn split_certifications(&self) -> (&str, &str) {
        match certifications_heading().find(&self.content) {
            Some(m) => (
                self.content[..m.start()].trim(),
                self.content[m.end()..].trim(),
            ),
            None => (self.content.trim(), ""),
        }
    }

    /// Number of list items in the certifications section
    pub fn certification_count(&self) -> usize {
        let (_, certifications) = self.split_certifications();
        certifications
            .lines()
            .filter(|line| line.trim().starts_with("- "))
            .count()
    }
}

fn certifications_heading() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        RegexBuilder::new(CERTIFICATIONS_HEADING)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .expect("certifications heading pattern is valid")
    })
}

/// Sort projects by weight, highest first; equal weights keep their order
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.weight.total_cmp(&a.weight));
}

/// Every technology used across projects, deduplicated and sorted
pub fn technologies(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.technologies.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Total number of entries across all groups
pub fn entry_count(groups: &EntryGroups) -> usize {
    groups.values().map(Vec::len).sum()
}

/// Project selected in the Projects window list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    slug: Option<String>,
}

impl ProjectSelection {
    /// Select the first project
    pub fn first_of(projects: &[Project]) -> Self {
        Self {
            slug: projects.first().map(|p| p.slug.clone()),
        }
    }

    /// Select a project by slug
    pub fn select(&mut self, slug: &str) {
        self.slug = Some(slug.to_string());
    }

    /// Selected slug, if any
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Selected project; falls back to the first one if the slug is unknown
    pub fn selected<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        self.slug
            .as_deref()
            .and_then(|slug| projects.iter().find(|p| p.slug == slug))
            .or_else(|| projects.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &str, weight: f64, tech: &[&str]) -> Project {
        Project {
            slug: slug.to_string(),
            client: format!("{slug} client"),
            role: "Engineer".to_string(),
            period: "2020-2021".to_string(),
            technologies: tech.iter().map(|t| t.to_string()).collect(),
            weight,
            content: String::new(),
        }
    }

    #[test]
    fn test_project_from_front_matter() {
        let p: Project = serde_json::from_str(
            r#"{"slug": "acme", "client": "ACME", "technologies": ["Rust", "Kafka"], "weight": 3}"#,
        )
        .unwrap();

        assert_eq!(p.client, "ACME");
        assert_eq!(p.technologies, vec!["Rust", "Kafka"]);
        assert!((p.weight - 3.0).abs() < 0.001);
        assert!(p.role.is_empty());
    }

    #[test]
    fn test_sort_projects() {
        let mut projects = vec![project("a", 1.0, &[]), project("b", 5.0, &[]), project("c", 1.0, &[])];
        sort_projects(&mut projects);

        let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_technologies() {
        let projects = vec![
            project("a", 1.0, &["Rust", "AWS"]),
            project("b", 1.0, &["AWS", "Kotlin"]),
        ];
        assert_eq!(technologies(&projects), vec!["AWS", "Kotlin", "Rust"]);
    }

    #[test]
    fn test_split_certifications() {
        let profile = Profile {
            content: "Intro text.\n\n## certifications and education\n- AWS SA\n- CKA\n".to_string(),
            ..Default::default()
        };

        let (summary, certs) = profile.split_certifications();
        assert_eq!(summary, "Intro text.");
        assert_eq!(certs, "- AWS SA\n- CKA");
        assert_eq!(profile.certification_count(), 2);
    }

    #[test]
    fn test_split_without_heading() {
        let profile = Profile {
            content: "  Only a summary.\n".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.split_certifications(), ("Only a summary.", ""));
        assert_eq!(profile.certification_count(), 0);
    }

    #[test]
    fn test_entry_count() {
        let mut groups = EntryGroups::new();
        groups.insert("Cloud".to_string(), vec!["AWS".to_string(), "GCP".to_string()]);
        groups.insert("Languages".to_string(), vec!["Rust".to_string()]);
        assert_eq!(entry_count(&groups), 3);
    }

    #[test]
    fn test_selection_fallback() {
        let projects = vec![project("a", 1.0, &[]), project("b", 1.0, &[])];
        let mut selection = ProjectSelection::first_of(&projects);
        assert_eq!(selection.selected(&projects).unwrap().slug, "a");

        selection.select("b");
        assert_eq!(selection.selected(&projects).unwrap().slug, "b");

        selection.select("gone");
        assert_eq!(selection.selected(&projects).unwrap().slug, "a");
        assert!(ProjectSelection::default().selected(&[]).is_none());
    }
}
