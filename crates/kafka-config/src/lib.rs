use std::path::Path;

use config::Config;
use config::File;
use config::FileFormat;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

pub mod codec;
pub mod consumer;
mod into;
pub mod producer;
pub use codec::{use_deserializer, use_serializer, Codec, Element};
pub use consumer::ConsumerConfiguration;
pub use producer::ProducerConfiguration;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sasl {
    pub username: String,
    pub password: String,
    pub mechanisms: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SchemaRegistryConfig {
    #[serde(flatten)]
    pub auth: SchemaRegistryAuth,
    pub endpoint: Url,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum SchemaRegistryAuth {
    Basic(SchemaRegistryBasicAuth),
    Bearer(SchemaRegistryBearerAuth),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SchemaRegistryBasicAuth {
    pub username: String,
    pub password: String,
}
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SchemaRegistryBearerAuth {
    pub token: String,
}

impl Default for Sasl {
    fn default() -> Self {
        Sasl {
            mechanisms: "PLAIN".to_string(),
            username: "".to_string(),
            password: "".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KafkaConfig {
    pub securityprotocol: String,
    pub endpoint: String,
    pub sasl: Option<Sasl>,
    #[serde(rename = "schemaregistry")]
    pub schema_registry: Option<SchemaRegistryConfig>,
    #[serde(default)]
    pub producer: ProducerConfiguration,
    #[serde(default)]
    pub consumer: ConsumerConfiguration,
}

impl KafkaConfig {
    #[cfg(test)]
    pub fn unsecure(endpoint: String) -> Self {
        Self {
            endpoint,
            securityprotocol: "plaintext".to_string(),
            sasl: None,
            ..Self::default()
        }
    }

    /// Loads the configuration from the working directory, `KAFKA_CONFIG_PATH`
    /// and `KAFKA_*` environment variables.
    pub fn from_env() -> anyhow::Result<KafkaConfig> {
        Self::load(None)
    }

    /// Like [`KafkaConfig::from_env`], but reads the config files from `file_or_folder`
    /// instead of the working directory. A file must exist, a folder may be empty.
    pub fn load(file_or_folder: Option<&Path>) -> anyhow::Result<KafkaConfig> {
        let mut builder = Config::builder();

        builder = builder.add_source(Config::try_from(&KafkaConfig::default())?);
        builder = match file_or_folder {
            Some(folder) if folder.is_dir() => builder
                .add_source(File::from(folder.join(".kafka.config.yaml")).required(false))
                .add_source(File::from(folder.join(".kafka.config.json")).required(false)),
            Some(file) => {
                log::info!("Loading config from: {}", file.display());
                builder.add_source(File::from(file).required(true))
            }
            None => builder
                .add_source(File::new(".kafka.config.yaml", FileFormat::Yaml).required(false))
                .add_source(File::new(".kafka.config.json", FileFormat::Json).required(false)),
        };

        let path_from_env = std::env::var("KAFKA_CONFIG_PATH");
        builder = if let Ok(path_from_env) = path_from_env {
            log::info!("Loading config from: {path_from_env}");
            if path_from_env.ends_with("yaml") {
                builder.add_source(File::new(&path_from_env, FileFormat::Yaml).required(true))
            } else if path_from_env.ends_with("json") {
                builder.add_source(File::new(&path_from_env, FileFormat::Json).required(true))
            } else {
                log::warn!("File type not supported. Ignore file: {path_from_env}");
                builder
            }
        } else {
            builder
        };

        builder = builder.add_source(config::Environment::with_prefix("KAFKA").separator("_"));

        let kafka_config: KafkaConfig = builder.build()?.try_deserialize()?;
        Ok(kafka_config)
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        KafkaConfig {
            endpoint: "localhost:9092".to_string(),
            securityprotocol: "SASL_SSL".to_string(),
            sasl: Some(Sasl::default()),
            schema_registry: None,
            producer: ProducerConfiguration::default(),
            consumer: ConsumerConfiguration::default(),
        }
    }
}
