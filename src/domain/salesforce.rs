//! Records as returned by the Salesforce REST API.
//!
//! Field names follow the API verbatim (custom fields end in `__c`/`__pc`,
//! child relationships in `__r`), so a query response deserializes directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Child relationship result (`{ "totalSize": 1, "done": true, "records": [...] }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRecords<T> {
    pub total_size: usize,
    pub done: bool,
    pub records: Vec<T>,
}

impl<T> RelatedRecords<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            total_size: records.len(),
            done: true,
            records,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocument {
    #[serde(rename = "Document_Number__c")]
    pub document_number: Option<String>,
    #[serde(rename = "Document_Type__c")]
    pub document_type: Option<String>,
    #[serde(rename = "Expiration_Date__c")]
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonAccount {
    #[serde(rename = "Gender__pc", default)]
    pub gender: Option<String>,
    #[serde(rename = "Salutation", default)]
    pub salutation: Option<String>,
    #[serde(rename = "Birth_City__pc", default)]
    pub birth_city: Option<String>,
    #[serde(rename = "PersonBirthdate", default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "MiddleName", default)]
    pub middle_name: Option<String>,
    #[serde(rename = "PEP_MEP__pc", default)]
    pub pep_mep: Option<bool>,
    #[serde(rename = "Identity_Documents__r", default)]
    pub identity_documents: Option<RelatedRecords<IdentityDocument>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_query_record() {
        let json = serde_json::json!({
            "attributes": { "type": "Account" },
            "Gender__pc": "Female",
            "Salutation": "Ms.",
            "PersonBirthdate": "1990-04-12",
            "FirstName": "Jane",
            "LastName": "Roe",
            "MiddleName": null,
            "Identity_Documents__r": {
                "totalSize": 1,
                "done": true,
                "records": [{
                    "Document_Number__c": "X1",
                    "Document_Type__c": "PASSPORT",
                    "Expiration_Date__c": "2031-09-30"
                }]
            }
        });

        let account: PersonAccount = serde_json::from_value(json).unwrap();
        assert_eq!(account.last_name, "Roe");
        assert_eq!(account.birth_city, None);
        assert_eq!(account.pep_mep, None);
        let documents = account.identity_documents.unwrap();
        assert_eq!(documents.total_size, 1);
        assert_eq!(documents.records[0].document_type.as_deref(), Some("PASSPORT"));
    }
}
