use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How often a finished group restarts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Restart every time the group completes, until stopped.
    #[default]
    Unbounded,
    /// Restart at most this many times after the initial play.
    Bounded(u32),
}

impl RepeatPolicy {
    /// Play once and stay finished.
    pub const NEVER: Self = Self::Bounded(0);

    /// Return `true` when a group that has already restarted `repeated` times may restart again.
    pub fn allows(self, repeated: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded(cap) => repeated < cap,
        }
    }
}

impl Serialize for RepeatPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unbounded => serializer.serialize_bool(true),
            Self::Bounded(n) => serializer.serialize_u32(*n),
        }
    }
}

/// Accepts `true`, `false` or a count. A fractional count permits as many restarts as there are
/// whole numbers below it; anything else means no restart.
impl<'de> Deserialize<'de> for RepeatPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let policy = match raw {
            serde_json::Value::Bool(true) => Self::Unbounded,
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(v) if v.is_finite() && v > 0.0 => {
                    Self::Bounded(v.ceil().min(f64::from(u32::MAX)) as u32)
                }
                _ => Self::NEVER,
            },
            _ => Self::NEVER,
        };
        Ok(policy)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/repeat.rs"]
mod tests;
