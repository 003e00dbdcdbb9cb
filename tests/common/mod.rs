#![allow(dead_code)]

use approval_mapper::domain::data::Employee;
use approval_mapper::domain::salesforce::{IdentityDocument, PersonAccount, RelatedRecords};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(0, 0, 0).unwrap()
}

pub fn john_doe_employee() -> Employee {
    Employee::new(
        9,
        "John",
        "Doe",
        "john.doe@gmail.com",
        midnight(2022, 2, 7),
        2,
        "IT department",
    )
}

pub fn al_capone() -> PersonAccount {
    PersonAccount {
        gender: Some("Male".to_string()),
        salutation: Some("Mr.".to_string()),
        birth_city: Some("Brooklyn".to_string()),
        birthdate: Some(date(1899, 1, 25)),
        first_name: Some("Al".to_string()),
        last_name: "Capone".to_string(),
        middle_name: None,
        pep_mep: Some(false),
        identity_documents: Some(RelatedRecords::from_records(vec![IdentityDocument {
            document_number: Some("89898*3234".to_string()),
            document_type: Some("ID CARD".to_string()),
            expiration_date: Some(date(2000, 1, 5)),
        }])),
    }
}

/// `al_capone()` as the Salesforce REST API returns it.
pub fn al_capone_json() -> serde_json::Value {
    serde_json::json!({
        "attributes": { "type": "Account", "url": "/services/data/v58.0/sobjects/Account/001" },
        "Gender__pc": "Male",
        "Salutation": "Mr.",
        "Birth_City__pc": "Brooklyn",
        "PersonBirthdate": "1899-01-25",
        "FirstName": "Al",
        "LastName": "Capone",
        "MiddleName": null,
        "PEP_MEP__pc": false,
        "Identity_Documents__r": {
            "totalSize": 1,
            "done": true,
            "records": [{
                "attributes": { "type": "Identity_Document__c" },
                "Document_Number__c": "89898*3234",
                "Document_Type__c": "ID CARD",
                "Expiration_Date__c": "2000-01-05"
            }]
        }
    })
}
