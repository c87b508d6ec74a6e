use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use crate::hash::KeyHasher;
use crate::HashMap;

struct MapVisitor<V, H> {
    _marker: PhantomData<HashMap<V, H>>,
}

impl<V, H> Serialize for HashMap<V, H>
where
    V: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_map(self)
    }
}

impl<'de, V, H> Deserialize<'de> for HashMap<V, H>
where
    V: Deserialize<'de>,
    H: KeyHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MapVisitor {
            _marker: PhantomData,
        })
    }
}

impl<'de, V, H> Visitor<'de> for MapVisitor<V, H>
where
    V: Deserialize<'de>,
    H: KeyHasher + Default,
{
    type Value = HashMap<V, H>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a map with string keys")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        // Room for the hinted entries below the growth threshold.
        let capacity = access.size_hint().unwrap_or(0).saturating_mul(2) + 1;
        let mut values = HashMap::new(capacity, H::default());
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            values.put(key, value);
        }
        Ok(values)
    }
}
