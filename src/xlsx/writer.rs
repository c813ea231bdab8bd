use super::layout::{
    academic_year_label, document_headers, worksheet_name, ReportFormats, ROSTER_ACADEMIC_YEAR,
    ROSTER_DEGREE_NAME, ROW_HEIGHT, TABLE_HEADERS,
};
use crate::enrollment::{enrollment_rows, expected_row_count, Cell, EnrollmentRow};
use crate::error::Result;
use crate::generator::Cohorts;
use crate::model::{DegreeDescription, StudentRecord};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Write a plain student roster to an Excel file
pub fn write_student_roster_xlsx(students: &[StudentRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    write_roster_sheet(worksheet, students)?;

    workbook.save(path)?;
    log::info!("Wrote {} students to {}", students.len(), path.display());
    Ok(())
}

/// Unstyled title block and table header, then one student name per row
fn write_roster_sheet(sheet: &mut Worksheet, students: &[StudentRecord]) -> Result<()> {
    let mut row = 0u32;

    // Title block; the blank line stays empty
    for header in document_headers(ROSTER_ACADEMIC_YEAR, ROSTER_DEGREE_NAME) {
        if !header.is_empty() {
            sheet.write_string(row, 0, &header)?;
        }
        row += 1;
    }

    // Write headers
    for (col, (label, _)) in TABLE_HEADERS.iter().enumerate() {
        sheet.write_string(row, col as u16, *label)?;
    }
    row += 1;

    // Names only
    for student in students {
        sheet.write_string(row, 0, &student.name)?;
        row += 1;
    }

    Ok(())
}

/// Write the enrollment-by-course report to an Excel file.
///
/// `date` fixes the worksheet name and the academic year. Returns the number
/// of data rows written.
pub fn write_enrollment_report_xlsx<R: Rng + ?Sized>(
    degree: &DegreeDescription,
    cohorts: &Cohorts,
    date: NaiveDate,
    rng: &mut R,
    path: &Path,
) -> Result<usize> {
    let rows = enrollment_rows(degree, cohorts, date.year(), rng)?;
    debug_assert_eq!(rows.len(), expected_row_count(degree, cohorts));
    let headers = document_headers(&academic_year_label(date), &degree.name);

    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(worksheet_name(date))?;
    write_enrollment_sheet(worksheet, &headers, &rows)?;

    workbook.save(path)?;
    log::info!("Wrote {} enrollment rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

/// Write the styled title block, table header and data rows
fn write_enrollment_sheet(
    sheet: &mut Worksheet,
    headers: &[String],
    rows: &[EnrollmentRow<'_>],
) -> Result<()> {
    let formats = ReportFormats::new();
    let mut row = 0u32;

    // Title block, one line per row
    for header in headers {
        sheet.set_row_height(row, ROW_HEIGHT)?;
        sheet.set_row_format(row, &formats.document_header)?;
        write_text(sheet, row, 0, header, &formats.document_header)?;
        row += 1;
    }

    // Set column widths and write table headers
    sheet.set_row_height(row, ROW_HEIGHT)?;
    for (col, (label, width)) in TABLE_HEADERS.iter().enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, *width)?;
        sheet.write_string_with_format(row, col, *label, &formats.table_header)?;
    }
    row += 1;

    // Write enrollment data, striped by sheet row
    for data in rows {
        sheet.set_row_height(row, ROW_HEIGHT)?;
        let format = formats.row(row);

        for (col, cell) in data.cells().iter().enumerate() {
            let col = col as u16;
            match *cell {
                Cell::Number(n) => {
                    sheet.write_number_with_format(row, col, n, format)?;
                }
                Cell::Text(s) => {
                    write_text(sheet, row, col, s, format)?;
                }
            }
        }
        row += 1;
    }

    Ok(())
}

/// Empty strings become formatted blank cells
fn write_text(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
    format: &Format,
) -> Result<()> {
    if text.is_empty() {
        sheet.write_blank(row, col, format)?;
    } else {
        sheet.write_string_with_format(row, col, text, format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{StudentGenerator, StudentProfile, DEFAULT_COHORT_SIZES};
    use crate::model::Gender;
    use crate::names::PortugueseNames;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FIRST_DATA_ROW: u32 = 7;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn read_sheet(path: &Path) -> (Vec<String>, calamine::Range<Data>) {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let names = workbook.sheet_names();
        let range = workbook.worksheet_range(&names[0]).unwrap();
        (names, range)
    }

    fn text(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
        match range.get_value((row, col)) {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Empty) | None => String::new(),
            Some(other) => panic!("unexpected cell at ({row}, {col}): {other:?}"),
        }
    }

    fn number(range: &calamine::Range<Data>, row: u32, col: u32) -> f64 {
        match range.get_value((row, col)) {
            Some(Data::Float(n)) => *n,
            Some(Data::Int(n)) => *n as f64,
            other => panic!("expected number at ({row}, {col}), got {other:?}"),
        }
    }

    fn single_course_degree(options: bool) -> DegreeDescription {
        let json = if options {
            r#"{"code": "LEI", "name": "Licenciatura em Engenharia Informática",
                "school": {"code": "EE", "name": "Escola de Engenharia"},
                "courses": [{"year": 1, "code": "OPT", "name": "Opção",
                    "courses": [{"code": "S1", "name": "Sub 1"}, {"code": "S2", "name": "Sub 2"}]}]}"#
        } else {
            r#"{"code": "LEI", "name": "Licenciatura em Engenharia Informática",
                "school": {"code": "EE", "name": "Escola de Engenharia"},
                "courses": [{"year": 1, "code": "L.EInf", "name": "Programação Funcional"}]}"#
        };
        DegreeDescription::from_json(json).unwrap()
    }

    #[test]
    fn test_roster_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.xlsx");
        let mut rng = StdRng::seed_from_u64(1);
        let generator = StudentGenerator::new(PortugueseNames, StudentProfile::roster());
        let students = generator.generate_students(30, &mut rng);

        write_student_roster_xlsx(&students, &path).unwrap();

        let (_, range) = read_sheet(&path);
        assert_eq!(text(&range, 0, 0), "Inscritos por UC");
        assert_eq!(text(&range, 1, 0), "");
        assert_eq!(text(&range, 3, 0), "Ano Letivo: 2024/2025");
        assert_eq!(text(&range, 5, 0), "Curso: Licenciatura em Engenharia Informática");
        for (col, (label, _)) in TABLE_HEADERS.iter().enumerate() {
            assert_eq!(text(&range, 6, col as u32), *label);
        }
        for (i, student) in students.iter().enumerate() {
            assert_eq!(text(&range, FIRST_DATA_ROW + i as u32, 0), student.name);
            assert_eq!(text(&range, FIRST_DATA_ROW + i as u32, 1), "");
        }
        assert_eq!(range.end().map(|(r, _)| r), Some(FIRST_DATA_ROW + 29));
    }

    #[test]
    fn test_single_course_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students_by_courses.xlsx");
        let mut rng = StdRng::seed_from_u64(2);
        let degree = single_course_degree(false);
        let students = (0..3)
            .map(|i| StudentRecord::new(120_000 + i, format!("Rui Costa {}", i), Gender::Male))
            .collect();
        let cohorts = Cohorts::new(vec![students]);

        let written =
            write_enrollment_report_xlsx(&degree, &cohorts, report_date(), &mut rng, &path).unwrap();
        assert_eq!(written, 3);

        let (names, range) = read_sheet(&path);
        assert_eq!(names, vec!["Listagem_Inscritos_por_UC_19_10".to_string()]);
        assert_eq!(range.end().map(|(r, _)| r), Some(FIRST_DATA_ROW + 2));

        for i in 0..3u32 {
            let row = FIRST_DATA_ROW + i;
            assert_eq!(number(&range, row, 0), 2026.0);
            assert_eq!(text(&range, row, 1), "EE");
            assert_eq!(text(&range, row, 5), "");
            assert_eq!(number(&range, row, 6), 1.0);
            assert_eq!(text(&range, row, 7), "L.EInf");
            assert_eq!(text(&range, row, 8), "Programação Funcional");
            assert_eq!(text(&range, row, 9), "");
            assert_eq!(text(&range, row, 11), format!("A{}", 120_000 + i));
            assert_eq!(text(&range, row, 13), format!("A{}@alunos.uminho.pt", 120_000 + i));
            assert_eq!(text(&range, row, 14), "M");
        }
    }

    #[test]
    fn test_enrollment_headers_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let mut rng = StdRng::seed_from_u64(3);
        let degree = single_course_degree(true);
        let generator = StudentGenerator::new(PortugueseNames, StudentProfile::enrollment());
        let cohorts = generator.generate_cohorts(&[4], &mut rng);

        write_enrollment_report_xlsx(&degree, &cohorts, report_date(), &mut rng, &path).unwrap();

        let (_, range) = read_sheet(&path);
        assert_eq!(text(&range, 0, 0), "Inscritos por UC");
        assert_eq!(text(&range, 2, 0), "Ciclo de Estudos: 1º Ciclo / Mestrado Integrado");
        assert_eq!(text(&range, 3, 0), "Ano Letivo: 2026/2027");
        let labels: Vec<String> = (0..16).map(|col| text(&range, 6, col)).collect();
        let expected: Vec<String> = TABLE_HEADERS.iter().map(|(l, _)| l.to_string()).collect();
        assert_eq!(labels, expected);

        for row in FIRST_DATA_ROW..FIRST_DATA_ROW + 4 {
            let code = text(&range, row, 7);
            assert!(code == "S1" || code == "S2");
            assert_eq!(text(&range, row, 9), "OPT");
            assert_eq!(text(&range, row, 10), "Opção");
        }
    }

    #[test]
    fn test_default_cohorts_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let mut rng = StdRng::seed_from_u64(4);
        let degree = DegreeDescription::from_json(
            r#"{"code": "LEI", "name": "LEI", "school": {"code": "EE", "name": "EE"},
                "courses": [
                    {"year": 1, "code": "A", "name": "A"},
                    {"year": 2, "code": "B", "name": "B"},
                    {"year": 3, "code": "C", "name": "C", "courses": [{"code": "C1", "name": "C1"}]},
                    {"year": 3, "code": "D", "name": "D"}
                ]}"#,
        )
        .unwrap();
        let generator = StudentGenerator::new(PortugueseNames, StudentProfile::enrollment());
        let cohorts = generator.generate_cohorts(&DEFAULT_COHORT_SIZES, &mut rng);

        let written =
            write_enrollment_report_xlsx(&degree, &cohorts, report_date(), &mut rng, &path).unwrap();
        assert_eq!(written, 220 + 160 + 130 + 130);

        let (_, range) = read_sheet(&path);
        assert_eq!(range.end().map(|(r, _)| r), Some(FIRST_DATA_ROW + written as u32 - 1));
    }

    #[test]
    fn test_unwritable_path() {
        let mut rng = StdRng::seed_from_u64(5);
        let degree = single_course_degree(false);
        let cohorts = Cohorts::new(vec![Vec::new()]);
        let path = Path::new("/nonexistent-dir/report.xlsx");
        assert!(write_enrollment_report_xlsx(&degree, &cohorts, report_date(), &mut rng, path).is_err());
    }
}
