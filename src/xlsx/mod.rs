pub mod layout;
pub mod writer;

pub use writer::write_enrollment_report_xlsx;
pub use writer::write_student_roster_xlsx;
