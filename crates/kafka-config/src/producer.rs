use serde::{Deserialize, Serialize};

use crate::codec::{self, Codec, Element};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProducerConfiguration {
    #[serde(rename = "keyserializer", default, deserialize_with = "codec::lenient")]
    pub key_serializer: Option<Codec>,
    #[serde(rename = "valueserializer", default, deserialize_with = "codec::lenient")]
    pub value_serializer: Option<Codec>,
}

impl ProducerConfiguration {
    pub fn serializer(&self, element: Element) -> Option<Codec> {
        match element {
            Element::Key => self.key_serializer,
            Element::Value => self.value_serializer,
        }
    }
}
