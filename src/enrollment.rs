//! Joins degree courses with year cohorts into report rows

use crate::error::{EnrollmentError, Result};
use crate::generator::Cohorts;
use crate::model::{CourseUnit, DegreeDescription, StudentRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Parent option group of a resolved unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionGroup<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

/// The concrete unit a row is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedUnit<'a> {
    pub year: u8,
    pub code: &'a str,
    pub name: &'a str,
    pub option: Option<OptionGroup<'a>>,
}

/// Resolve a course for one row. Option groups draw one of their
/// sub-courses on every call.
pub fn resolve_unit<'a, R: Rng + ?Sized>(course: &'a CourseUnit, rng: &mut R) -> ResolvedUnit<'a> {
    let chosen = course.courses.as_deref().and_then(|options| options.choose(rng));

    match chosen {
        Some(sub) => ResolvedUnit {
            year: course.year,
            code: &sub.code,
            name: &sub.name,
            option: Some(OptionGroup {
                code: &course.code,
                name: &course.name,
            }),
        },
        None => ResolvedUnit {
            year: course.year,
            code: &course.code,
            name: &course.name,
            option: None,
        },
    }
}

/// Typed cell value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Number(f64),
    Text(&'a str),
}

/// Columns per report row
pub const COLUMN_COUNT: usize = 16;

/// One line of the enrollment report
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentRow<'a> {
    pub academic_year: i32,
    pub degree: &'a DegreeDescription,
    pub unit: ResolvedUnit<'a>,
    pub student: &'a StudentRecord,
}

impl<'a> EnrollmentRow<'a> {
    /// Cell values in report column order
    pub fn cells(&self) -> [Cell<'a>; COLUMN_COUNT] {
        let (option_code, option_name) = self
            .unit
            .option
            .map(|o| (o.code, o.name))
            .unwrap_or(("", ""));

        [
            Cell::Number(f64::from(self.academic_year)),
            Cell::Text(&self.degree.school.code),
            Cell::Text(&self.degree.school.name),
            Cell::Text(&self.degree.code),
            Cell::Text(&self.degree.name),
            Cell::Text(""), // Edição
            Cell::Number(f64::from(self.unit.year)),
            Cell::Text(self.unit.code),
            Cell::Text(self.unit.name),
            Cell::Text(option_code),
            Cell::Text(option_name),
            Cell::Text(&self.student.number),
            Cell::Text(&self.student.name),
            Cell::Text(&self.student.email),
            Cell::Text(self.student.gender.as_str()),
            Cell::Text(self.student.special_status_code()),
        ]
    }
}

/// Build every report row: courses in degree order, then students in cohort order.
pub fn enrollment_rows<'a, R: Rng + ?Sized>(
    degree: &'a DegreeDescription,
    cohorts: &'a Cohorts,
    academic_year: i32,
    rng: &mut R,
) -> Result<Vec<EnrollmentRow<'a>>> {
    let mut rows = Vec::new();

    for course in &degree.courses {
        let students = cohorts
            .year(course.year)
            .ok_or(EnrollmentError::MissingCohort(course.year))?;
        log::debug!("{} ({}): {} students", course.code, course.year, students.len());

        for student in students {
            rows.push(EnrollmentRow {
                academic_year,
                degree,
                unit: resolve_unit(course, rng),
                student,
            });
        }
    }

    Ok(rows)
}

/// Fail unless every curricular year used by the degree has a cohort
pub fn check_coverage(degree: &DegreeDescription, cohorts: &Cohorts) -> Result<()> {
    let max_year = degree.max_year();
    if usize::from(max_year) > cohorts.years() {
        return Err(EnrollmentError::MissingCohort(max_year));
    }
    Ok(())
}

/// Number of rows `enrollment_rows` produces
pub fn expected_row_count(degree: &DegreeDescription, cohorts: &Cohorts) -> usize {
    degree
        .courses
        .iter()
        .map(|c| cohorts.year(c.year).map_or(0, <[StudentRecord]>::len))
        .sum()
}
