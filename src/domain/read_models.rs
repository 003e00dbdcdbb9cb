use crate::utils::error::ApprovalError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persistence shape of an employee. Only ever built by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeEntity {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub department_id: i32,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl FromStr for Gender {
    type Err = ApprovalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Ok(Gender::Unspecified);
        }

        match value.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ApprovalError::InvalidFieldValueError {
                field: "Gender__pc".to_string(),
                value: value.to_string(),
                reason: "expected Male or Female".to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unspecified => "Unspecified",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub number: String,
    pub document_type: String,
    pub expiration_date: NaiveDate,
}

/// Read model of a natural person as a party to an approval case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualParty {
    pub gender: Gender,
    pub title: String,
    pub birth_city: String,
    pub birth_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub pep_mep: bool,
    pub documents: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("  ".parse::<Gender>().unwrap(), Gender::Unspecified);
        assert!("Other".parse::<Gender>().is_err());
    }
}
