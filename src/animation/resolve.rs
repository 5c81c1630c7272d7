use crate::animation::merge::DeepMerge;
use crate::animation::position::PositionDef;
use crate::animation::registry::TemplateRegistry;
use crate::animation::template::{AnimationTemplate, Step};
use crate::config::group::PositionDefaults;
use crate::foundation::core::Millis;
use std::collections::BTreeMap;

/// Templates with every step's timing resolved, keyed by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedTemplates {
    templates: BTreeMap<String, AnimationTemplate>,
}

impl ResolvedTemplates {
    /// Look up a resolved template by name.
    pub fn get(&self, name: &str) -> Option<&AnimationTemplate> {
        self.templates.get(name)
    }

    /// Return `true` when `name` resolved.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Iterate templates in name order.
    pub fn iter(&self) -> impl Iterator<Item = &AnimationTemplate> {
        self.templates.values()
    }
}

/// Fill in missing step timing from `defaults` and total each template's duration.
///
/// A step whose duration is absent, non-numeric or negative gets the default duration; a step
/// without easing gets the default easing. The start snapshot carries no timing and does not
/// count toward the total.
#[tracing::instrument(skip_all, fields(templates = registry.len()))]
pub fn resolve_templates(
    registry: &TemplateRegistry,
    defaults: &PositionDefaults,
) -> ResolvedTemplates {
    let templates = registry
        .iter()
        .map(|(name, def)| {
            let steps: BTreeMap<u32, Step> = def
                .positions
                .steps
                .iter()
                .map(|(&i, p)| (i, resolve_step(p, defaults)))
                .collect();
            let total_duration = steps.values().map(|s| s.duration).sum();
            tracing::trace!(template = name, %total_duration, steps = steps.len(), "resolved");

            let template = AnimationTemplate {
                name: name.to_owned(),
                start: def.positions.start.clone().unwrap_or_default(),
                steps,
                total_duration,
            };
            (name.to_owned(), template)
        })
        .collect();

    ResolvedTemplates { templates }
}

/// Resolve one user-written step against the global defaults.
pub(crate) fn resolve_step(def: &PositionDef, defaults: &PositionDefaults) -> Step {
    Step {
        style: def.style.clone(),
        duration: def
            .duration
            .and_then(Millis::non_negative)
            .unwrap_or(defaults.duration),
        easing: def.easing.clone().unwrap_or_else(|| defaults.easing.clone()),
    }
}

/// Layer a user-written override onto an already resolved step.
///
/// Properties and valid timing in `overlay` win; everything else stays as resolved.
pub(crate) fn overlay_step(base: &Step, overlay: &PositionDef) -> Step {
    Step {
        style: base.style.deep_merge(&overlay.style),
        duration: overlay
            .duration
            .and_then(Millis::non_negative)
            .unwrap_or(base.duration),
        easing: overlay.easing.clone().unwrap_or_else(|| base.easing.clone()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/resolve.rs"]
mod tests;
