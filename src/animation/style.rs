use std::collections::BTreeMap;
use std::fmt;

/// Target value for one style property.
///
/// Values are opaque to the engine; the host's tween primitive decides how `"75%"` or `150`
/// interpolates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Plain number (unitless or host-default unit).
    Number(f64),
    /// Textual value such as `"50%"`, `"10px"` or `"center"`.
    Text(String),
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Property name to target value, ordered by property name.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Build a [`StyleMap`] from `(property, value)` pairs.
pub fn style<K, V, I>(pairs: I) -> StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
