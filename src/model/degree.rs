use crate::error::{EnrollmentError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Degree programme as described by `data.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DegreeDescription {
    pub code: String,
    pub name: String,
    pub school: School,
    pub courses: Vec<CourseUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct School {
    pub code: String,
    pub name: String,
}

/// Curricular unit, or an option group when `courses` is present
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseUnit {
    pub year: u8,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub courses: Option<Vec<SubCourse>>,
}

/// Concrete alternative inside an option group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubCourse {
    pub code: String,
    pub name: String,
}

impl DegreeDescription {
    /// Read and validate a degree description from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a degree description from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let degree: DegreeDescription = serde_json::from_str(content)?;
        degree.validate()?;
        Ok(degree)
    }

    /// Highest curricular year referenced by any course
    pub fn max_year(&self) -> u8 {
        self.courses.iter().map(|c| c.year).max().unwrap_or(0)
    }

    fn validate(&self) -> Result<()> {
        for course in &self.courses {
            if course.year == 0 {
                return Err(EnrollmentError::InvalidDegree(format!(
                    "course {} has curricular year 0",
                    course.code
                )));
            }
            if let Some(ref options) = course.courses {
                if options.is_empty() {
                    return Err(EnrollmentError::InvalidDegree(format!(
                        "option group {} has no courses",
                        course.code
                    )));
                }
            }
        }
        Ok(())
    }
}
