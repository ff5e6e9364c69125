use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA display color attached to a shape for downstream viewers.
/// Channels are floats in [0, 1]; alpha defaults to fully opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// True when every channel lies in [0, 1]. NaN fails the check.
    pub fn channels_in_range(&self) -> bool {
        self.as_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// Serialized as an [r, g, b, a] list so manifest colors read as plain
// channel arrays; three-channel input is accepted with alpha = 1.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(4))?;
        for channel in self.as_array() {
            seq.serialize_element(&channel)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl<'de> Visitor<'de> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a sequence of 3 or 4 color channels")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Color, A::Error> {
                let mut channels = Vec::with_capacity(4);
                while let Some(value) = seq.next_element::<f64>()? {
                    channels.push(value);
                }
                match channels.as_slice() {
                    [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                    [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
                    other => Err(serde::de::Error::invalid_length(
                        other.len(),
                        &"3 or 4 channels",
                    )),
                }
            }
        }

        deserializer.deserialize_seq(ColorVisitor)
    }
}
