/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// An integer that clients may send either as a JSON number or as a numeric
/// string.
///
/// The trivia frontend builds category ids from object keys and reads
/// difficulty from a `<select>`, so the same value arrives as `3` from one
/// screen and `"3"` from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "IntRepr")]
pub struct LenientInt(pub i64);

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum IntRepr {
    Number(i64),
    Text(String),
}

impl TryFrom<IntRepr> for LenientInt {
    type Error = String;

    fn try_from(repr: IntRepr) -> Result<Self, Self::Error> {
        match repr {
            IntRepr::Number(id) => Ok(LenientInt(id)),
            IntRepr::Text(text) => text
                .trim()
                .parse()
                .map(LenientInt)
                .map_err(|_| format!("'{text}' is not a valid integer")),
        }
    }
}
