pub mod degree;
pub mod student;

pub use degree::{CourseUnit, DegreeDescription, School, SubCourse};
pub use student::{Gender, SpecialStatus, StudentRecord};
