//! Name table and gender tags
//!
//! The bundled table is built once and shared read-only. A custom table can be
//! loaded from a TOML file with `[[male]]` / `[[female]]` arrays.

mod data;
pub mod selector;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// Which list of the table to sample from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(alias = "m", alias = "男")]
    Male,
    #[serde(alias = "f", alias = "女")]
    Female,
}

impl Gender {
    pub fn toggle(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    /// Tag used in config files and JSON output
    pub fn tag(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Label shown in the gender selector
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male (男)",
            Gender::Female => "Female (女)",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender '{0}' (expected male or female)")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Gender::Male),
            "female" | "f" | "女" => Ok(Gender::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// A candidate English first name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInfo {
    pub name: String,
    pub meaning: String,
    pub cultural_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    #[serde(default)]
    male: Vec<NameInfo>,
    #[serde(default)]
    female: Vec<NameInfo>,
}

static BUILTIN: OnceLock<NameTable> = OnceLock::new();

impl NameTable {
    #[cfg(test)]
    pub fn new(male: Vec<NameInfo>, female: Vec<NameInfo>) -> Self {
        Self { male, female }
    }

    /// The table bundled with the binary
    pub fn builtin() -> &'static NameTable {
        BUILTIN.get_or_init(|| Self {
            male: data::MALE.iter().map(to_info).collect(),
            female: data::FEMALE.iter().map(to_info).collect(),
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let table: NameTable = toml::from_str(content).context("Failed to parse name table")?;
        Ok(table)
    }

    /// Load a custom table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read name table {}", path.display()))?;
        let table = Self::from_toml(&content)
            .with_context(|| format!("Invalid name table {}", path.display()))?;

        tracing::info!(
            "Loaded name table from {} ({} male, {} female)",
            path.display(),
            table.male.len(),
            table.female.len()
        );
        Ok(table)
    }

    pub fn names(&self, gender: Gender) -> &[NameInfo] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

fn to_info(entry: &(&str, &str, &str)) -> NameInfo {
    let (name, meaning, cultural_notes) = *entry;
    NameInfo {
        name: name.to_string(),
        meaning: meaning.to_string(),
        cultural_notes: cultural_notes.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_builtin_entries_are_distinct() {
        let table = NameTable::builtin();
        for gender in [Gender::Male, Gender::Female] {
            let names = table.names(gender);
            assert!(names.len() >= 4, "{} list too short", gender);

            let unique: HashSet<&str> = names.iter().map(|n| n.name.as_str()).collect();
            assert_eq!(unique.len(), names.len());
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(NameTable::builtin(), NameTable::builtin()));
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" M ".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("女".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_toggle_and_labels() {
        assert_eq!(Gender::Male.toggle(), Gender::Female);
        assert_eq!(Gender::Female.toggle().toggle(), Gender::Female);
        assert_eq!(Gender::Male.label(), "Male (男)");
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn test_table_from_toml_missing_section() {
        let table = NameTable::from_toml(
            r#"
            [[female]]
            name = "Ada"
            meaning = "Noble"
            cultural_notes = "Ada Lovelace"
            "#,
        )
        .unwrap();

        assert!(table.names(Gender::Male).is_empty());
        assert_eq!(table.names(Gender::Female)[0].name, "Ada");
    }

    #[test]
    fn test_table_from_toml_rejects_incomplete_entry() {
        let result = NameTable::from_toml(
            r#"
            [[male]]
            name = "Leo"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_table_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[male]]\nname = \"Leo\"\nmeaning = \"Lion\"\ncultural_notes = \"Short and strong\""
        )
        .unwrap();

        let table = NameTable::load(file.path()).unwrap();
        assert_eq!(table.names(Gender::Male).len(), 1);
    }

    #[test]
    fn test_table_load_missing_file_names_path() {
        let err = NameTable::load(Path::new("/nonexistent/names.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/names.toml"));
    }
}
