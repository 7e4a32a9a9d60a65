//! Personal and business data submitted for verification.
//!
//! The same shapes come back from the test-entities configuration endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Container for every data group a verification can carry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_info: Option<PersonInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<Communication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_licence: Option<DriverLicence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_ids: Option<Vec<NationalId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport: Option<Passport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<Business>,
    /// Country code to field name to value, for fields only some countries use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_specific: Option<BTreeMap<String, BTreeMap<String, String>>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersonInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub first_given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub first_sur_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub second_surname: Option<String>,
    #[serde(rename = "ISOLatin1Name", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub iso_latin1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_birth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_of_birth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_birth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_age: Option<u32>,
    /// `"M"` or `"F"`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fields: Option<PersonAdditionalFields>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersonAdditionalFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub full_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub building_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub unit_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub state_province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub postal_code: Option<String>,
    #[serde(rename = "POBox", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub po_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_fields: Option<LocationAdditionalFields>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocationAdditionalFields {
    /// Unparsed single-line address
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub address1: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct Communication {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub telephone2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email_address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct DriverLicence {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_expiry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_of_expiry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_expiry: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct NationalId {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub number: Option<String>,
    /// e.g. `"NationalID"`, `"Health"`, `"SocialService"`
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub city_of_issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub county_of_issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub district_of_issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub province_of_issue: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct Passport {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub mrz1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub mrz2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_expiry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_of_expiry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_expiry: Option<i32>,
}

/// Identity document images, base64 encoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub document_front_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub document_back_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub live_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub document_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, bon::Builder)]
#[builder(start_fn = new)]
#[serde(rename_all = "PascalCase", default)]
pub struct Business {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub business_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_incorporation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_of_incorporation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_incorporation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub jurisdiction_of_incorporation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_info_uses_service_casing() {
        let person = PersonInfo::new()
            .first_given_name("test")
            .first_sur_name("test")
            .iso_latin1_name("Jose")
            .year_of_birth(1980)
            .build();
        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            json!({
                "FirstGivenName": "test",
                "FirstSurName": "test",
                "ISOLatin1Name": "Jose",
                "YearOfBirth": 1980
            })
        );
    }

    #[test]
    fn location_po_box_and_address_line() {
        let location = Location {
            po_box: Some("PO 12".into()),
            additional_fields: Some(LocationAdditionalFields {
                address1: Some("1 Main St".into()),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&location).unwrap(),
            json!({ "POBox": "PO 12", "AdditionalFields": { "Address1": "1 Main St" } })
        );
    }

    #[test]
    fn test_entity_round_trips_national_ids() {
        let raw = json!({
            "PersonInfo": { "FirstGivenName": "Justin", "FirstSurName": "Williams", "DayOfBirth": 5 },
            "NationalIds": [ { "Number": "5643513953", "Type": "Health" } ],
            "CountrySpecific": { "AU": { "MedicareColor": "Green" } }
        });
        let fields: DataFields = serde_json::from_value(raw.clone()).unwrap();
        let ids = fields.national_ids.as_ref().unwrap();
        assert_eq!(ids[0].id_type.as_deref(), Some("Health"));
        assert_eq!(
            fields.country_specific.as_ref().unwrap()["AU"]["MedicareColor"],
            "Green"
        );
        assert_eq!(serde_json::to_value(&fields).unwrap(), raw);
    }

    #[test]
    fn every_group_builds_the_same_way() {
        let fields = DataFields::new()
            .communication(
                Communication::new()
                    .email_address("test@example.test")
                    .mobile_number("+4915112345678")
                    .build(),
            )
            .driver_licence(
                DriverLicence::new()
                    .number("D123")
                    .state("ON")
                    .year_of_expiry(2030)
                    .build(),
            )
            .national_ids(vec![
                NationalId::new().number("123456789").id_type("SocialService").build(),
            ])
            .passport(Passport::new().number("P123").month_of_expiry(6).build())
            .document(
                Document::new()
                    .document_front_image("aGVsbG8=")
                    .document_type("DrivingLicence")
                    .build(),
            )
            .business(
                Business::new()
                    .business_name("Acme GmbH")
                    .jurisdiction_of_incorporation("DE")
                    .build(),
            )
            .build();

        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({
                "Communication": { "MobileNumber": "+4915112345678", "EmailAddress": "test@example.test" },
                "DriverLicence": { "Number": "D123", "State": "ON", "YearOfExpiry": 2030 },
                "NationalIds": [ { "Number": "123456789", "Type": "SocialService" } ],
                "Passport": { "Number": "P123", "MonthOfExpiry": 6 },
                "Document": { "DocumentFrontImage": "aGVsbG8=", "DocumentType": "DrivingLicence" },
                "Business": { "BusinessName": "Acme GmbH", "JurisdictionOfIncorporation": "DE" }
            })
        );
    }
}
