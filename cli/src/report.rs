use std::fmt;

use kafka_config::{use_deserializer, use_serializer, Codec, Element, KafkaConfig};
use rdkafka::ClientConfig;
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ElementReport {
    pub element: String,
    pub serialize: bool,
    pub serializer: Option<Codec>,
    pub deserialize: bool,
    pub deserializer: Option<Codec>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct CodecReport {
    pub bootstrap_servers: Option<String>,
    pub security_protocol: Option<String>,
    pub schema_registry: Option<String>,
    pub elements: Vec<ElementReport>,
}

impl CodecReport {
    pub fn new(config: &KafkaConfig, elements: &[Element]) -> Self {
        // Only settings without credentials end up in the report.
        let client: ClientConfig = config.clone().into();
        Self {
            bootstrap_servers: client.get("bootstrap.servers").map(str::to_string),
            security_protocol: client.get("security.protocol").map(str::to_string),
            schema_registry: config
                .schema_registry
                .as_ref()
                .map(|registry| registry.endpoint.to_string()),
            elements: elements
                .iter()
                .map(|&element| {
                    let serialize = use_serializer(config, element);
                    let deserialize = use_deserializer(config, element);
                    ElementReport {
                        element: element.to_string(),
                        serialize,
                        serializer: config.producer.serializer(element).filter(|_| serialize),
                        deserialize,
                        deserializer: config
                            .consumer
                            .deserializer(element)
                            .filter(|_| deserialize),
                    }
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CodecReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bootstrap servers: {}", self.bootstrap_servers.as_deref().unwrap_or("-"))?;
        writeln!(f, "security protocol: {}", self.security_protocol.as_deref().unwrap_or("-"))?;
        match &self.schema_registry {
            Some(endpoint) => writeln!(f, "schema registry: {endpoint}")?,
            None => writeln!(f, "schema registry: not configured")?,
        }
        for element in &self.elements {
            writeln!(
                f,
                "{:<6} produce: {:<5} consume: {}",
                format!("{}:", element.element),
                codec_name(element.serializer),
                codec_name(element.deserializer),
            )?;
        }
        Ok(())
    }
}

fn codec_name(codec: Option<Codec>) -> &'static str {
    codec.map(|codec| codec.as_str()).unwrap_or("raw")
}
