use std::fmt;

/// Domain of every student e-mail address
pub const EMAIL_DOMAIN: &str = "alunos.uminho.pt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Special attendance regime ("Regimes especiais de frequência")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialStatus {
    /// Trabalhador-estudante
    Te,
    Aum,
    Eint,
    Te2,
    Pd,
    Dlg,
    Dae,
}

impl SpecialStatus {
    pub const ALL: [SpecialStatus; 7] = [
        SpecialStatus::Te,
        SpecialStatus::Aum,
        SpecialStatus::Eint,
        SpecialStatus::Te2,
        SpecialStatus::Pd,
        SpecialStatus::Dlg,
        SpecialStatus::Dae,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialStatus::Te => "TE",
            SpecialStatus::Aum => "AUM",
            SpecialStatus::Eint => "EINT",
            SpecialStatus::Te2 => "TE2",
            SpecialStatus::Pd => "PD",
            SpecialStatus::Dlg => "DLG",
            SpecialStatus::Dae => "DAE",
        }
    }
}

impl fmt::Display for SpecialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: String,
    /// Institutional number, e.g. `A123456`
    pub number: String,
    pub email: String,
    pub gender: Gender,
    pub special_status: Option<SpecialStatus>,
}

impl StudentRecord {
    /// Build a record from its number; the e-mail is always derived from it.
    pub fn new(number: u32, name: String, gender: Gender) -> Self {
        let number = format!("A{}", number);
        let email = format!("{}@{}", number, EMAIL_DOMAIN);
        Self {
            name,
            number,
            email,
            gender,
            special_status: None,
        }
    }

    pub fn with_special_status(mut self, status: Option<SpecialStatus>) -> Self {
        self.special_status = status;
        self
    }

    /// Status code as written to the report, empty when there is none
    pub fn special_status_code(&self) -> &'static str {
        self.special_status.map(|s| s.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_derived_from_number() {
        let s = StudentRecord::new(123456, "Ana Silva Costa".to_string(), Gender::Female);
        assert_eq!(s.number, "A123456");
        assert_eq!(s.email, "A123456@alunos.uminho.pt");
        assert_eq!(s.special_status_code(), "");
    }

    #[test]
    fn test_special_status_codes() {
        let codes: Vec<&str> = SpecialStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(codes, ["TE", "AUM", "EINT", "TE2", "PD", "DLG", "DAE"]);

        let s = StudentRecord::new(100000, "Rui Sousa Pinto".to_string(), Gender::Male)
            .with_special_status(Some(SpecialStatus::Te2));
        assert_eq!(s.special_status_code(), "TE2");
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Male.as_str(), "M");
        assert_eq!(Gender::Female.to_string(), "F");
    }
}
