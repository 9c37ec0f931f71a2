// Structured record shared by the 2D and 3D serde helpers.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

pub(crate) const FIELDS_2D: &[&str] = &["x", "y"];
pub(crate) const FIELDS_3D: &[&str] = &["x", "y", "z"];

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    X,
    Y,
    Z,
    #[serde(other)]
    Other,
}

/// Axes read from a record. `z` is `None` when the record carried only two.
pub(crate) struct Axes<A> {
    pub x: A,
    pub y: A,
    pub z: Option<A>,
}

struct AxesVisitor<A> {
    name: &'static str,
    with_z: bool,
    marker: PhantomData<A>,
}

impl<'de, A: Deserialize<'de>> Visitor<'de> for AxesVisitor<A> {
    type Value = Axes<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "struct {}", self.name)
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: SeqAccess<'de>,
    {
        let x = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let y = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let z = if self.with_z { seq.next_element()? } else { None };
        Ok(Axes { x, y, z })
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut x = None;
        let mut y = None;
        let mut z = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::X => {
                    if x.is_some() {
                        return Err(de::Error::duplicate_field("x"));
                    }
                    x = Some(map.next_value()?);
                }
                Field::Y => {
                    if y.is_some() {
                        return Err(de::Error::duplicate_field("y"));
                    }
                    y = Some(map.next_value()?);
                }
                Field::Z if self.with_z => {
                    if z.is_some() {
                        return Err(de::Error::duplicate_field("z"));
                    }
                    z = Some(map.next_value()?);
                }
                Field::Z | Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let x = x.ok_or_else(|| de::Error::missing_field("x"))?;
        let y = y.ok_or_else(|| de::Error::missing_field("y"))?;
        Ok(Axes { x, y, z })
    }
}

pub(crate) fn read_axes<'de, A, D>(
    deserializer: D,
    name: &'static str,
    with_z: bool,
) -> Result<Axes<A>, D::Error>
where
    A: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let fields = if with_z { FIELDS_3D } else { FIELDS_2D };
    deserializer.deserialize_struct(
        name,
        fields,
        AxesVisitor {
            name,
            with_z,
            marker: PhantomData,
        },
    )
}
