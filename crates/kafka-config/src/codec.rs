use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::KafkaConfig;

/// Schema aware codecs a message element can be encoded with.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    Avro,
}

/// The side of a kafka message a codec decision is made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Key,
    Value,
}

impl Codec {
    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::Avro => "avro",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Codec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Codec::Avro.as_str()) {
            Ok(Codec::Avro)
        } else {
            Err(anyhow::anyhow!("unknown codec: '{s}'"))
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Key => f.write_str("key"),
            Element::Value => f.write_str("value"),
        }
    }
}

/// Reads a codec field from raw configuration text.
///
/// Missing or blank values mean no codec. Values that do not name a known codec
/// are logged and also treated as no codec, so a typo disables the codec instead
/// of failing the whole configuration.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<Option<Codec>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| match raw.parse::<Codec>() {
            Ok(codec) => Some(codec),
            Err(e) => {
                log::warn!("{e}, the element will be passed through untouched");
                None
            }
        }))
}

fn schema_aware(codec: Option<Codec>) -> bool {
    match codec {
        Some(Codec::Avro) => true,
        None => false,
    }
}

/// Whether the producer should encode `element` with a schema aware codec.
///
/// Requires a configured schema registry and a known serializer for that element.
pub fn use_serializer(config: &KafkaConfig, element: Element) -> bool {
    config.schema_registry.is_some() && schema_aware(config.producer.serializer(element))
}

/// Whether the consumer should decode `element` with a schema aware codec.
pub fn use_deserializer(config: &KafkaConfig, element: Element) -> bool {
    config.schema_registry.is_some() && schema_aware(config.consumer.deserializer(element))
}
