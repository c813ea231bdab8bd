use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Color, Format, FormatAlign};

/// Degree named in the plain roster title block
pub const ROSTER_DEGREE_NAME: &str = "Licenciatura em Engenharia Informática";

/// Academic year printed in the plain roster title block
pub const ROSTER_ACADEMIC_YEAR: &str = "2024/2025";

/// Table header labels with their column widths
pub const TABLE_HEADERS: [(&str, f64); 16] = [
    ("Código do ano letivo", 24.0),
    ("Código da escola", 18.0),
    ("UOEI", 20.0),
    ("Código do curso", 18.0),
    ("Curso", 40.0),
    ("Edição", 5.5),
    ("Ano Curricular da UC", 23.0),
    ("Código da UC", 16.0),
    ("Unidade Curricular", 50.0),
    ("Código da Opção", 20.0),
    ("Designação da Opção", 24.0),
    ("Nº Mecanográfico", 19.0),
    ("Nome", 58.0),
    ("Email", 28.0),
    ("Género", 9.0),
    ("Regimes especiais de frequência", 38.0),
];

pub const ROW_HEIGHT: f64 = 20.0;

/// Title block written above the table, one line per row
pub fn document_headers(academic_year: &str, degree_name: &str) -> Vec<String> {
    vec![
        "Inscritos por UC".to_string(),
        String::new(),
        "Ciclo de Estudos: 1º Ciclo / Mestrado Integrado".to_string(),
        format!("Ano Letivo: {}", academic_year),
        "UOEI: Escola de Engenharia".to_string(),
        format!("Curso: {}", degree_name),
    ]
}

/// `YYYY/YYYY+1` starting at the calendar year of `date`
pub fn academic_year_label(date: NaiveDate) -> String {
    format!("{}/{}", date.year(), date.year() + 1)
}

/// `Listagem_Inscritos_por_UC_DD_MM`
pub fn worksheet_name(date: NaiveDate) -> String {
    format!("Listagem_Inscritos_por_UC_{:02}_{:02}", date.day(), date.month())
}

/// Cell formats of the enrollment report
pub struct ReportFormats {
    pub document_header: Format,
    pub table_header: Format,
    /// Data row backgrounds, indexed by sheet row parity
    pub rows: [Format; 2],
}

impl ReportFormats {
    pub fn new() -> Self {
        let document_header = Format::new()
            .set_font_size(10)
            .set_font_name("Aptos Narrow")
            .set_background_color(Color::RGB(0xFFFFFF));

        let table_header = Format::new()
            .set_bold()
            .set_font_size(8)
            .set_font_name("Verdana")
            .set_background_color(Color::RGB(0xA05D62))
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let row = |background: u32| {
            Format::new()
                .set_font_size(8)
                .set_font_name("Verdana")
                .set_background_color(Color::RGB(background))
                .set_font_color(Color::RGB(0x000000))
        };

        Self {
            document_header,
            table_header,
            rows: [row(0xF5F5F5), row(0xFFFFFF)],
        }
    }

    pub fn row(&self, row: u32) -> &Format {
        &self.rows[(row % 2) as usize]
    }
}

impl Default for ReportFormats {
    fn default() -> Self {
        Self::new()
    }
}
