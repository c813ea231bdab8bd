//! Synthetic student generation
//!
//! All randomness flows through the caller's RNG handle, so a seeded
//! `StdRng` reproduces a run exactly.

use crate::model::{Gender, SpecialStatus, StudentRecord};
use crate::names::NameProvider;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// Cohort sizes for curricular years 1, 2 and 3
pub const DEFAULT_COHORT_SIZES: [usize; 3] = [220, 160, 130];

/// Number of students written to the plain roster
pub const DEFAULT_ROSTER_SIZE: usize = 30;

/// Probability that a student has a special attendance regime
pub const SPECIAL_STATUS_PROBABILITY: f64 = 0.1;

/// Last names per student, inclusive
pub const LAST_NAME_COUNT: RangeInclusive<usize> = 2..=5;

/// Per-report tuning of the generated records
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub number_range: RangeInclusive<u32>,
    pub special_status: bool,
}

impl StudentProfile {
    /// Plain student roster
    pub fn roster() -> Self {
        Self {
            number_range: 100_000..=999_999,
            special_status: false,
        }
    }

    /// Enrollment-by-course report
    pub fn enrollment() -> Self {
        Self {
            number_range: 100_000..=139_999,
            special_status: true,
        }
    }
}

/// Generates student records from a name provider and a profile
#[derive(Debug, Clone)]
pub struct StudentGenerator<N> {
    names: N,
    profile: StudentProfile,
}

impl<N: NameProvider> StudentGenerator<N> {
    pub fn new(names: N, profile: StudentProfile) -> Self {
        Self { names, profile }
    }

    /// Generate one student
    pub fn generate_student<R: Rng + ?Sized>(&self, rng: &mut R) -> StudentRecord {
        let gender = Gender::ALL.choose(rng).copied().unwrap_or(Gender::Female);
        let number = rng.gen_range(self.profile.number_range.clone());
        let name = self.generate_name(gender, rng);

        let status = if self.profile.special_status {
            generate_special_status(rng)
        } else {
            None
        };

        StudentRecord::new(number, name, gender).with_special_status(status)
    }

    /// First name for `gender` followed by 2 to 5 last names
    pub fn generate_name<R: Rng + ?Sized>(&self, gender: Gender, rng: &mut R) -> String {
        let count = rng.gen_range(LAST_NAME_COUNT);
        let last_names: Vec<&str> = (0..count).map(|_| self.names.last_name(rng)).collect();
        format!("{} {}", self.names.first_name(gender, rng), last_names.join(" "))
    }

    pub fn generate_students<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<StudentRecord> {
        (0..count).map(|_| self.generate_student(rng)).collect()
    }

    /// One cohort per curricular year, in year order
    pub fn generate_cohorts<R: Rng + ?Sized>(&self, sizes: &[usize], rng: &mut R) -> Cohorts {
        let groups = sizes
            .iter()
            .map(|&size| self.generate_students(size, rng))
            .collect();
        Cohorts::new(groups)
    }
}

/// Draw a special attendance regime, `None` most of the time
pub fn generate_special_status<R: Rng + ?Sized>(rng: &mut R) -> Option<SpecialStatus> {
    if rng.gen_bool(SPECIAL_STATUS_PROBABILITY) {
        SpecialStatus::ALL.choose(rng).copied()
    } else {
        None
    }
}

/// Students grouped by curricular year (index 0 is year 1)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cohorts {
    groups: Vec<Vec<StudentRecord>>,
}

impl Cohorts {
    pub fn new(groups: Vec<Vec<StudentRecord>>) -> Self {
        Self { groups }
    }

    /// Students of curricular year `year` (1-based)
    pub fn year(&self, year: u8) -> Option<&[StudentRecord]> {
        let idx = usize::from(year).checked_sub(1)?;
        self.groups.get(idx).map(Vec::as_slice)
    }

    pub fn years(&self) -> usize {
        self.groups.len()
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}
