//! Serde support. A set serializes as a sequence in sorted order.
//! Deserializing needs the comparator, so it goes through
//! [`DeserializeSeed`] on `&mut TreeSet`, clearing the set and adding each
//! element back in whatever order the input has.

use std::fmt;

use serde::de::{Deserialize, DeserializeSeed, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::compare::Compare;
use crate::tree::TreeSet;

impl<T, C> Serialize for TreeSet<T, C>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        let mut res = Ok(());
        self.each(|_, value| {
            res = seq.serialize_element(value);
            res.is_ok()
        });
        res?;
        seq.end()
    }
}

impl<'de, 'a, T, C> DeserializeSeed<'de> for &'a mut TreeSet<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T>,
{
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        self.clear();
        deserializer.deserialize_seq(SetVisitor { set: self })
    }
}

impl<T, C> TreeSet<T, C>
where
    C: Compare<T>,
{
    /// Create a new set ordered by `compare`, loaded from a serialized
    /// sequence.
    pub fn deserialize_with<'de, D>(compare: C, deserializer: D) -> Result<TreeSet<T, C>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let mut set = TreeSet::new(compare);
        DeserializeSeed::deserialize(&mut set, deserializer)?;
        Ok(set)
    }
}

struct SetVisitor<'a, T, C> {
    set: &'a mut TreeSet<T, C>,
}

impl<'a, 'de, T, C> Visitor<'de> for SetVisitor<'a, T, C>
where
    T: Deserialize<'de>,
    C: Compare<T>,
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        while let Some(value) = seq.next_element()? {
            self.set.add(value);
        }
        Ok(())
    }
}
