use crate::core::mapper::{Mapper, MapperConfiguration, Profile};
use crate::domain::data::Employee;
use crate::domain::read_models::{Document, EmployeeEntity, Gender, IndividualParty};
use crate::domain::salesforce::{IdentityDocument, PersonAccount};
use crate::utils::error::{ApprovalError, Result};

/// Mapping rules of the approval application.
pub struct MapperProfile;

impl Profile for MapperProfile {
    fn name(&self) -> &str {
        "approval"
    }

    fn configure(&self, configuration: &mut MapperConfiguration) {
        configuration.create_map::<Employee, EmployeeEntity, _>(employee_to_entity);
        configuration.create_map::<IdentityDocument, Document, _>(identity_document_to_document);
        configuration
            .create_map::<PersonAccount, IndividualParty, _>(person_account_to_party)
            .requires::<IdentityDocument, Document>();
    }
}

/// Builds a validated mapper holding every rule of [`MapperProfile`].
pub fn build_mapper() -> Result<Mapper> {
    let mut configuration = MapperConfiguration::new();
    configuration.add_profile(MapperProfile);
    configuration.create_mapper()
}

fn employee_to_entity(employee: &Employee, _: &Mapper) -> Result<EmployeeEntity> {
    Ok(EmployeeEntity {
        id: employee.employee_id,
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        email: employee.email.clone(),
        date_of_birth: employee.date_of_birth.date(),
        department_id: employee.department_id,
        department: employee.department.clone(),
    })
}

fn identity_document_to_document(document: &IdentityDocument, _: &Mapper) -> Result<Document> {
    let number = document
        .document_number
        .clone()
        .ok_or_else(|| ApprovalError::missing_field("Document_Number__c"))?;
    let expiration_date = document
        .expiration_date
        .ok_or_else(|| ApprovalError::missing_field("Expiration_Date__c"))?;

    Ok(Document {
        number,
        document_type: document.document_type.clone().unwrap_or_default(),
        expiration_date,
    })
}

fn person_account_to_party(account: &PersonAccount, mapper: &Mapper) -> Result<IndividualParty> {
    let gender: Gender = account.gender.as_deref().unwrap_or("").parse()?;
    let birth_date = account
        .birthdate
        .ok_or_else(|| ApprovalError::missing_field("PersonBirthdate"))?;
    let documents = match &account.identity_documents {
        Some(related) => mapper.map_all::<IdentityDocument, Document>(&related.records)?,
        None => Vec::new(),
    };

    Ok(IndividualParty {
        gender,
        title: account.salutation.clone().unwrap_or_default(),
        birth_city: account.birth_city.clone().unwrap_or_default(),
        birth_date,
        first_name: account.first_name.clone().unwrap_or_default(),
        last_name: account.last_name.clone(),
        middle_name: account.middle_name.clone().unwrap_or_default(),
        pep_mep: account.pep_mep.unwrap_or(false),
        documents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_profile_configuration_is_valid() {
        let mut configuration = MapperConfiguration::new();
        configuration.add_profile(MapperProfile);

        assert_eq!(configuration.type_map_count(), 3);
        assert!(configuration.assert_configuration_is_valid().is_ok());
    }

    #[test]
    fn test_document_without_number_is_rejected() {
        let mapper = build_mapper().unwrap();
        let document = IdentityDocument {
            document_number: None,
            document_type: Some("PASSPORT".to_string()),
            expiration_date: NaiveDate::from_ymd_opt(2030, 1, 1),
        };

        let err = mapper.map::<IdentityDocument, Document>(&document).unwrap_err();
        assert!(err.to_string().contains("Document_Number__c"));
    }

    #[test]
    fn test_document_without_expiration_date_is_rejected() {
        let mapper = build_mapper().unwrap();
        let document = IdentityDocument {
            document_number: Some("X1".to_string()),
            document_type: Some("PASSPORT".to_string()),
            expiration_date: None,
        };

        let err = mapper.map::<IdentityDocument, Document>(&document).unwrap_err();
        assert!(matches!(err, ApprovalError::InvalidFieldValueError { .. }));
        assert!(err.to_string().contains("Expiration_Date__c"));
    }

    #[test]
    fn test_document_without_type_gets_empty_type() {
        let mapper = build_mapper().unwrap();
        let document = IdentityDocument {
            document_number: Some("X1".to_string()),
            document_type: None,
            expiration_date: NaiveDate::from_ymd_opt(2030, 1, 1),
        };

        let mapped: Document = mapper.map(&document).unwrap();
        assert_eq!(mapped.number, "X1");
        assert_eq!(mapped.document_type, "");
    }

    #[test]
    fn test_gender_picklist_variants_map_through_account_rule() {
        let mapper = build_mapper().unwrap();
        let cases = [
            ("M", Gender::Male),
            ("female", Gender::Female),
            ("FEMALE", Gender::Female),
            ("", Gender::Unspecified),
        ];

        for (text, expected) in cases {
            let account = PersonAccount {
                gender: Some(text.to_string()),
                last_name: "Roe".to_string(),
                birthdate: NaiveDate::from_ymd_opt(1990, 4, 12),
                ..Default::default()
            };
            let party: IndividualParty = mapper.map(&account).unwrap();
            assert_eq!(party.gender, expected, "gender text {:?}", text);
        }
    }

    #[test]
    fn test_null_relationship_in_json_maps_to_no_documents() {
        let mapper = build_mapper().unwrap();
        let account: PersonAccount = serde_json::from_value(serde_json::json!({
            "LastName": "Roe",
            "PersonBirthdate": "1990-04-12",
            "Identity_Documents__r": null
        }))
        .unwrap();

        let party: IndividualParty = mapper.map(&account).unwrap();
        assert!(party.documents.is_empty());
    }

    #[test]
    fn test_absent_relationship_maps_to_no_documents() {
        let mapper = build_mapper().unwrap();
        let account = PersonAccount {
            last_name: "Roe".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 4, 12),
            ..Default::default()
        };

        let party: IndividualParty = mapper.map(&account).unwrap();
        assert_eq!(party.gender, Gender::Unspecified);
        assert!(party.documents.is_empty());
        assert_eq!(party.title, "");
        assert!(!party.pep_mep);
    }

    #[test]
    fn test_account_without_birthdate_is_rejected() {
        let mapper = build_mapper().unwrap();
        let account = PersonAccount {
            last_name: "Roe".to_string(),
            ..Default::default()
        };

        assert!(mapper.map::<PersonAccount, IndividualParty>(&account).is_err());
    }
}
