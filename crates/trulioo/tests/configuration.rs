mod common;

use common::{MockClient, client, json_response};
use http::StatusCode;
use serde_json::json;
use trulioo::api::configuration::IDENTITY_VERIFICATION;

#[tokio::test(flavor = "multi_thread")]
async fn country_codes_escape_configuration_name() {
    let mock = MockClient::default();
    mock.push(json_response(StatusCode::OK, json!(["AU", "CA", "DE"])))
        .await;

    let codes = client(&mock)
        .configuration()
        .get_country_codes(IDENTITY_VERIFICATION)
        .await
        .unwrap();
    assert_eq!(codes, vec!["AU", "CA", "DE"]);

    let log = mock.take_log().await;
    assert_eq!(
        log[0].uri().to_string(),
        "https://api.globaldatacompany.com/configuration/v1/countrycodes/Identity%20Verification"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn consents_and_subdivisions() {
    let mock = MockClient::default();
    mock.push(json_response(StatusCode::OK, json!(["Birth Registry", "Visa Verification"])))
        .await;
    mock.push(json_response(
        StatusCode::OK,
        json!([
            { "Name": "Ontario", "Code": "ON", "ParentCode": "" },
            { "Name": "Quebec", "Code": "QC", "ParentCode": "" }
        ]),
    ))
    .await;

    let client = client(&mock);
    let consents = client
        .configuration()
        .get_consents(IDENTITY_VERIFICATION, "AU")
        .await
        .unwrap();
    assert_eq!(consents.len(), 2);

    let subdivisions = client
        .configuration()
        .get_country_subdivisions("CA")
        .await
        .unwrap();
    assert_eq!(subdivisions[1].code, "QC");

    let uris: Vec<String> = mock
        .take_log()
        .await
        .iter()
        .map(|req| req.uri().to_string())
        .collect();
    assert_eq!(
        uris,
        vec![
            "https://api.globaldatacompany.com/configuration/v1/consents/Identity%20Verification/AU",
            "https://api.globaldatacompany.com/configuration/v1/countrysubdivisions/CA",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_entities_decode_as_data_fields() {
    let mock = MockClient::default();
    mock.push(json_response(
        StatusCode::OK,
        json!([{
            "PersonInfo": { "FirstGivenName": "Justin", "FirstSurName": "Williams", "YearOfBirth": 1983 },
            "Location": { "City": "Toronto", "StateProvinceCode": "ON", "PostalCode": "M5V 3L9" }
        }]),
    ))
    .await;

    let entities = client(&mock)
        .configuration()
        .get_test_entities(IDENTITY_VERIFICATION, "CA")
        .await
        .unwrap();
    let person = entities[0].person_info.as_ref().unwrap();
    assert_eq!(person.first_given_name.as_deref(), Some("Justin"));
    assert_eq!(person.year_of_birth, Some(1983));
    let location = entities[0].location.as_ref().unwrap();
    assert_eq!(location.city.as_deref(), Some("Toronto"));
}

#[tokio::test(flavor = "multi_thread")]
async fn fields_are_untyped_json() {
    let mock = MockClient::default();
    mock.push(json_response(
        StatusCode::OK,
        json!({ "properties": { "PersonInfo": { "type": "object" } } }),
    ))
    .await;

    let fields = client(&mock)
        .configuration()
        .get_fields(IDENTITY_VERIFICATION, "US")
        .await
        .unwrap();
    assert_eq!(fields["properties"]["PersonInfo"]["type"], "object");
}
