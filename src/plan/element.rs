use crate::animation::position::PositionsDef;
use crate::animation::style::StyleMap;
use crate::animation::template::Step;
use crate::foundation::core::{ElementId, Millis};
use crate::foundation::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a caller asks of one text element, bound by list position to the container's children.
///
/// Every field is optional and every invalid value is coerced during plan building.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSpec {
    /// Template to play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_name: Option<String>,
    /// Delay after group start before the first step.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub offset: Option<f64>,
    /// Total time budget for the steps; the template's step durations are rescaled to fit.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,
    /// Per-position overrides layered on the template.
    #[serde(default, skip_serializing_if = "PositionsDef::is_empty")]
    pub positions: PositionsDef,
}

impl ElementSpec {
    /// Spec with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a template by name.
    pub fn animation(mut self, name: impl Into<String>) -> Self {
        self.animation_name = Some(name.into());
        self
    }

    /// Set the start offset.
    pub fn offset(mut self, ms: f64) -> Self {
        self.offset = Some(ms);
        self
    }

    /// Request a total duration.
    pub fn duration(mut self, ms: f64) -> Self {
        self.duration = Some(ms);
        self
    }

    /// Set position overrides.
    pub fn positions(mut self, positions: PositionsDef) -> Self {
        self.positions = positions;
        self
    }
}

/// Build progress of a plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Still being assembled.
    #[default]
    Unset,
    /// Fully resolved and schedulable.
    Ready,
}

/// Resolved schedule for one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementPlan {
    /// Element identity (its index in the container).
    pub id: ElementId,
    /// Template actually used after fallback.
    pub animation: String,
    /// Delay after group start.
    pub offset: Millis,
    /// Caller-requested total, when one was valid and positive.
    pub requested_duration: Option<Millis>,
    /// Requested total, or the sum of the merged step durations when none was requested.
    pub effective_duration: Millis,
    /// Start snapshot after merging overrides.
    pub start: StyleMap,
    /// Steps after merging overrides and rescaling.
    pub steps: BTreeMap<u32, Step>,
    /// Build progress.
    pub status: PlanStatus,
}

impl ElementPlan {
    /// Time after group start at which this element is scheduled to finish.
    pub fn finish_time(&self) -> Millis {
        self.offset + self.effective_duration
    }
}
