//! Serde representation for cards: a card is its numeric strength.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards::Card;

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Card::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid card value: {value}")))
    }
}
