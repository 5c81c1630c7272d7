use crate::animation::merge::{DeepMerge, merge_opt, pick};
use crate::animation::style::StyleMap;
use crate::foundation::core::Easing;
use crate::foundation::lenient;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of one keyframe inside an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PositionKey {
    /// Initial style snapshot, applied instantly before sequencing.
    Start,
    /// Ordinal step, played in ascending order.
    Step(u32),
}

impl PositionKey {
    const START: &'static str = "start";

    /// Parse a JSON object key (`"start"` or a decimal ordinal).
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == Self::START {
            return Some(Self::Start);
        }
        raw.parse::<u32>().ok().map(Self::Step)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str(Self::START),
            Self::Step(i) => write!(f, "{i}"),
        }
    }
}

/// One keyframe as written by a user: style targets plus optional timing.
///
/// `duration` and `easing` are left unresolved here; the duration resolver fills them in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionDef {
    /// Step duration; absent, non-numeric and negative values are defaulted later.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,
    /// Easing name handed to the tween primitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    /// Style property targets.
    #[serde(flatten)]
    pub style: StyleMap,
}

impl PositionDef {
    /// Position with the given style targets and no timing.
    pub fn new(style: StyleMap) -> Self {
        Self {
            duration: None,
            easing: None,
            style,
        }
    }

    /// Set the step duration.
    pub fn duration(mut self, ms: f64) -> Self {
        self.duration = Some(ms);
        self
    }

    /// Set the step easing.
    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.easing = Some(easing.into());
        self
    }
}

impl DeepMerge for PositionDef {
    fn deep_merge(&self, overlay: &Self) -> Self {
        Self {
            duration: pick(&self.duration, &overlay.duration),
            easing: pick(&self.easing, &overlay.easing),
            style: self.style.deep_merge(&overlay.style),
        }
    }
}

/// The ordered keyframes of an animation: an optional start snapshot and ordinal steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionsDef {
    /// Style applied instantly at group start.
    pub start: Option<StyleMap>,
    /// Ordinal steps keyed by index.
    pub steps: BTreeMap<u32, PositionDef>,
}

impl PositionsDef {
    /// Set the start snapshot.
    pub fn with_start(mut self, style: StyleMap) -> Self {
        self.start = Some(style);
        self
    }

    /// Add or replace ordinal step `index`.
    pub fn with_step(mut self, index: u32, position: PositionDef) -> Self {
        self.steps.insert(index, position);
        self
    }

    /// Return `true` when neither a start snapshot nor any step is present.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.steps.is_empty()
    }
}

impl DeepMerge for PositionsDef {
    fn deep_merge(&self, overlay: &Self) -> Self {
        Self {
            start: merge_opt(&self.start, &overlay.start),
            steps: self.steps.deep_merge(&overlay.steps),
        }
    }
}

impl Serialize for PositionsDef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.steps.len() + usize::from(self.start.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(start) = &self.start {
            map.serialize_entry(&PositionKey::Start.to_string(), start)?;
        }
        for (i, p) in &self.steps {
            map.serialize_entry(&PositionKey::Step(*i).to_string(), p)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PositionsDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, PositionDef>::deserialize(deserializer)?;
        let mut out = Self::default();
        for (key, position) in raw {
            match PositionKey::parse(&key) {
                // The snapshot is instantaneous; any timing it carries is meaningless.
                Some(PositionKey::Start) => out.start = Some(position.style),
                Some(PositionKey::Step(i)) => {
                    out.steps.insert(i, position);
                }
                None => tracing::warn!(key = %key, "ignoring position that is neither 'start' nor an ordinal"),
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/position.rs"]
mod tests;
