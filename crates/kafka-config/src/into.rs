use rdkafka::ClientConfig;
use schema_registry_converter::async_impl::schema_registry::{SrSettings, SrSettingsBuilder};

use crate::{
    KafkaConfig, SchemaRegistryAuth, SchemaRegistryBasicAuth, SchemaRegistryBearerAuth,
    SchemaRegistryConfig,
};

impl From<SchemaRegistryConfig> for SrSettingsBuilder {
    fn from(config: SchemaRegistryConfig) -> Self {
        let mut builder = SrSettings::new_builder(config.endpoint.to_string());
        match config.auth {
            SchemaRegistryAuth::Basic(SchemaRegistryBasicAuth { username, password }) => {
                builder.set_basic_authorization(&username, Some(&password));
            }
            SchemaRegistryAuth::Bearer(SchemaRegistryBearerAuth { token }) => {
                builder.set_token_authorization(&token);
            }
        }
        builder
    }
}

impl From<KafkaConfig> for ClientConfig {
    fn from(config: KafkaConfig) -> Self {
        let mut client_config = ClientConfig::new();

        client_config.set("bootstrap.servers", config.endpoint);
        client_config.set("security.protocol", config.securityprotocol);
        if let Some(sasl) = config.sasl {
            client_config.set("sasl.mechanisms", sasl.mechanisms);
            client_config.set("sasl.username", sasl.username);
            client_config.set("sasl.password", sasl.password);
            client_config.set("delivery.timeout.ms", "2000");
        }

        client_config
    }
}

impl KafkaConfig {
    /// Builds the schema registry client settings, if a registry is configured.
    ///
    /// Nothing is sent to the registry, this only checks that the settings are usable.
    pub fn schema_registry_settings(&self) -> anyhow::Result<Option<SrSettings>> {
        let Some(schema_registry) = self.schema_registry.clone() else {
            return Ok(None);
        };
        let endpoint = schema_registry.endpoint.clone();
        let settings = SrSettingsBuilder::from(schema_registry)
            .build()
            .map_err(|e| anyhow::anyhow!("invalid schema registry settings for {endpoint}: {e}"))?;
        Ok(Some(settings))
    }
}
