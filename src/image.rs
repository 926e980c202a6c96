/// Image metadata referenced by styles and shapes

use serde::{Deserialize, Serialize};

/// Source URI and display size of an image.
///
/// Values are stored exactly as given. Nothing is validated: an empty source
/// or negative, fractional and non-finite dimensions are carried through
/// unchanged. Non-finite dimensions serialize as the strings `"inf"`,
/// `"-inf"` and `"NaN"`, since JSON numbers cannot hold them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(with = "dimension")]
    pub width: f64,
    #[serde(with = "dimension")]
    pub height: f64,
}

impl Image {
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

mod dimension {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid image dimension '{}'", other))),
            },
        }
    }
}
