//! Page sections and the portfolio work list.
//!
//! Content is static and read-only: the page shell supplies an ordered
//! list of work items and the section order. A user file at
//! `~/.config/folio/work.toml` may replace the built-in list; anything
//! wrong with it degrades to the built-ins with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sections of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Work,
    About,
    Contact,
}

impl Section {
    /// All sections in priority order (first wins on containment ties).
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Work,
        Section::About,
        Section::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation header
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Work => 1,
            Self::About => 2,
            Self::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Stable slug
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub year: String,
    /// Art reference; purely decorative in the terminal rendering
    #[serde(default)]
    pub image: String,
    /// Accent color as a hex string, e.g. "#FF5470"
    pub accent: String,
}

/// The built-in portfolio.
pub fn builtin_work() -> Vec<WorkItem> {
    let items = [
        ("essence", "Essence", "Brand identity system", "Branding", "2023", "#FF5470"),
        ("horizon", "Horizon", "Digital experience", "Digital", "2023", "#0496FF"),
        ("monochrome", "Monochrome", "Photography series", "Photography", "2022", "#6665DD"),
        ("whisper", "Whisper", "Packaging design", "Product", "2022", "#06D6A0"),
        ("lucid", "Lucid", "Interactive installation", "Digital", "2023", "#FFC43D"),
        ("serenity", "Serenity", "Editorial design", "Print", "2022", "#EF476F"),
    ];

    items
        .into_iter()
        .map(|(id, title, description, category, year, accent)| WorkItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            year: year.to_string(),
            image: String::new(),
            accent: accent.to_string(),
        })
        .collect()
}

/// Filter work items by category, case-insensitively.
///
/// `"all"` (any casing) passes every item through; relative order is
/// always preserved.
pub fn filter_work<'a>(items: &'a [WorkItem], filter: &str) -> Vec<&'a WorkItem> {
    if filter.eq_ignore_ascii_case("all") {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category.eq_ignore_ascii_case(filter))
        .collect()
}

/// Distinct categories in first-appearance order, for the filter tabs.
pub fn categories(items: &[WorkItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|c| c.eq_ignore_ascii_case(&item.category)) {
            seen.push(item.category.clone());
        }
    }
    seen
}

#[derive(Debug, Deserialize)]
struct WorkFile {
    #[serde(default)]
    work: Vec<WorkItem>,
}

/// Load a work list from a TOML file.
pub fn load_work(path: &Path) -> Result<Vec<WorkItem>> {
    let content = std::fs::read_to_string(path)?;
    let file: WorkFile =
        toml::from_str(&content).map_err(|e| Error::Content(e.to_string()))?;
    if file.work.is_empty() {
        return Err(Error::Content("work file contains no items".to_string()));
    }
    Ok(file.work)
}

/// Load the user's work list if present, falling back to the built-ins.
pub fn load_work_or_builtin(path: Option<&Path>) -> Vec<WorkItem> {
    match path {
        Some(path) if path.exists() => match load_work(path) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(%err, "failed to load work file, using built-in portfolio");
                builtin_work()
            }
        },
        _ => builtin_work(),
    }
}
