use trulioo_api::DataFields;
use trulioo_api::configuration::{
    Consent, CountrySubdivision, NormalizedDatasourceGroupCountry,
    get_consents::GetConsents,
    get_country_codes::GetCountryCodes,
    get_country_subdivisions::GetCountrySubdivisions,
    get_datasources::GetDatasources,
    get_detailed_consents::GetDetailedConsents,
    get_document_types::{DocumentTypes, GetDocumentTypes},
    get_fields::GetFields,
    get_recommended_fields::GetRecommendedFields,
    get_test_entities::GetTestEntities,
};
use trulioo_common::{error::TruliooResult, http_client::HttpClient};

use super::TruliooApiClient;

/// Account configuration lookups, under `/configuration/v1/`.
///
/// `configuration_name` is the product name on the account, e.g.
/// [`IDENTITY_VERIFICATION`](trulioo_api::configuration::IDENTITY_VERIFICATION).
pub struct ConfigurationApi<'a, C: HttpClient> {
    client: &'a TruliooApiClient<C>,
}

impl<'a, C: HttpClient + Sync> ConfigurationApi<'a, C> {
    pub(crate) fn new(client: &'a TruliooApiClient<C>) -> Self {
        Self { client }
    }

    /// Countries the configuration is enabled for.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_country_codes(&self, configuration_name: &str) -> TruliooResult<Vec<String>> {
        let request = GetCountryCodes::new()
            .configuration_name(configuration_name)
            .build();
        self.client.call(&request).await
    }

    /// JSON schema of the fields accepted for a country.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_fields(
        &self,
        configuration_name: &str,
        country_code: &str,
    ) -> TruliooResult<serde_json::Value> {
        let request = GetFields::new()
            .configuration_name(configuration_name)
            .country_code(country_code)
            .build();
        self.client.call(&request).await
    }

    /// Fields recommended for the best match rate in a country.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_recommended_fields(
        &self,
        configuration_name: &str,
        country_code: &str,
    ) -> TruliooResult<serde_json::Value> {
        let request = GetRecommendedFields::new()
            .configuration_name(configuration_name)
            .country_code(country_code)
            .build();
        self.client.call(&request).await
    }

    /// Datasources requiring consent in a country.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_consents(
        &self,
        configuration_name: &str,
        country_code: &str,
    ) -> TruliooResult<Vec<String>> {
        let request = GetConsents::new()
            .configuration_name(configuration_name)
            .country_code(country_code)
            .build();
        self.client.call(&request).await
    }

    /// Consents with their display text and links.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_detailed_consents(
        &self,
        configuration_name: &str,
        country_code: &str,
    ) -> TruliooResult<Vec<Consent>> {
        let request = GetDetailedConsents::new()
            .configuration_name(configuration_name)
            .country_code(country_code)
            .build();
        self.client.call(&request).await
    }

    /// States and provinces of a country.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_country_subdivisions(
        &self,
        country_code: &str,
    ) -> TruliooResult<Vec<CountrySubdivision>> {
        let request = GetCountrySubdivisions::new().country_code(country_code).build();
        self.client.call(&request).await
    }

    /// Datasource groups and their field requirements.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_datasources(
        &self,
        configuration_name: &str,
        country_code: &str,
    ) -> TruliooResult<Vec<NormalizedDatasourceGroupCountry>> {
        let request = GetDatasources::new()
            .configuration_name(configuration_name)
            .country_code(country_code)
            .build();
        self.client.call(&request).await
    }

    /// Sandbox identities for demo-mode verifications.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_test_entities(
        &self,
        configuration_name: &str,
        country_code: &str,
    ) -> TruliooResult<Vec<DataFields>> {
        let request = GetTestEntities::new()
            .configuration_name(configuration_name)
            .country_code(country_code)
            .build();
        self.client.call(&request).await
    }

    /// Document types accepted in a country.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn get_document_types(&self, country_code: &str) -> TruliooResult<DocumentTypes> {
        let request = GetDocumentTypes::new().country_code(country_code).build();
        self.client.call(&request).await
    }
}
