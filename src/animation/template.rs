use crate::animation::merge::DeepMerge;
use crate::animation::position::PositionsDef;
use crate::animation::style::StyleMap;
use crate::foundation::core::{Easing, Millis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named animation recipe as written by a user or the built-in set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDef {
    /// Keyframes of the recipe.
    #[serde(default)]
    pub positions: PositionsDef,
}

impl TemplateDef {
    /// Template from its keyframes.
    pub fn new(positions: PositionsDef) -> Self {
        Self { positions }
    }
}

impl DeepMerge for TemplateDef {
    fn deep_merge(&self, overlay: &Self) -> Self {
        Self {
            positions: self.positions.deep_merge(&overlay.positions),
        }
    }
}

/// One ordinal step with fully resolved timing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step {
    /// Style property targets.
    pub style: StyleMap,
    /// Non-negative step duration.
    pub duration: Millis,
    /// Easing forwarded to the tween primitive.
    pub easing: Easing,
}

/// A template after duration resolution.
///
/// Every step carries a duration and easing, and `total_duration` is the exact sum of the step
/// durations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimationTemplate {
    /// Registry name.
    pub name: String,
    /// Start snapshot (empty when the template defines none).
    pub start: StyleMap,
    /// Ordinal steps.
    pub steps: BTreeMap<u32, Step>,
    /// Sum of all step durations.
    pub total_duration: Millis,
}
