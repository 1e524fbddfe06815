use anyhow::Context;
use serde::Deserialize;

use crate::search::rows::{Column, RowSource, RowSourceError};

/// One course entry as stored in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub department: String,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credits: Option<f64>,
}

/// In-memory catalog loaded once from a YAML file at startup.
///
/// Stands in for a relational backend behind [`RowSource`]: filtering
/// matches the department column case-insensitively by prefix.
pub struct StaticCatalog {
    courses: Vec<Course>,
}

impl StaticCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {path}"))?;
        let courses: Vec<Course> =
            serde_yaml::from_str(&text).with_context(|| format!("failed to parse {path}"))?;
        Ok(Self::new(courses))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl RowSource for StaticCatalog {
    fn for_each_row(
        &self,
        department: &str,
        on_row: &mut dyn FnMut(&[Column<'_>]),
    ) -> Result<(), RowSourceError> {
        let filter = department.to_ascii_lowercase();

        for course in &self.courses {
            if !course.department.to_ascii_lowercase().starts_with(&filter) {
                continue;
            }

            let credits = course.credits.map(|c| c.to_string());
            let columns = [
                Column { name: "department", value: Some(&course.department) },
                Column { name: "code", value: Some(&course.code) },
                Column { name: "title", value: Some(&course.title) },
                Column { name: "description", value: course.description.as_deref() },
                Column { name: "credits", value: credits.as_deref() },
            ];
            on_row(&columns);
        }

        Ok(())
    }
}
