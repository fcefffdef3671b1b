use serde::{Deserialize, Serialize};

use crate::codec::{self, Codec, Element};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsumerConfiguration {
    #[serde(rename = "keydeserializer", default, deserialize_with = "codec::lenient")]
    pub key_deserializer: Option<Codec>,
    #[serde(rename = "valuedeserializer", default, deserialize_with = "codec::lenient")]
    pub value_deserializer: Option<Codec>,
}

impl ConsumerConfiguration {
    pub fn deserializer(&self, element: Element) -> Option<Codec> {
        match element {
            Element::Key => self.key_deserializer,
            Element::Value => self.value_deserializer,
        }
    }
}
