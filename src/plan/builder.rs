use crate::animation::merge::DeepMerge;
use crate::animation::position::PositionDef;
use crate::animation::resolve::{ResolvedTemplates, overlay_step, resolve_step};
use crate::animation::template::{AnimationTemplate, Step};
use crate::config::group::GroupConfig;
use crate::foundation::core::{ElementId, Millis};
use crate::plan::element::{ElementPlan, ElementSpec, PlanStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Every schedulable element plus the group-level finish bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GroupPlan {
    /// Ready plans in ascending element order.
    pub plans: Vec<ElementPlan>,
    /// Element with the latest scheduled finish; its completion completes the group.
    pub last_element: Option<ElementId>,
    /// Latest scheduled finish across all plans.
    pub total_duration: Millis,
}

impl GroupPlan {
    /// Look up the plan of `id`.
    pub fn plan(&self, id: ElementId) -> Option<&ElementPlan> {
        self.plans
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.plans[i])
    }
}

/// Running maximum of scheduled finish times, starting at zero.
///
/// A finish has to exceed the maximum to claim it, so a schedule that finishes at time zero has
/// no last element and never completes. Equal finishes replace an existing holder, so among ties
/// the last element wins.
#[derive(Default)]
struct FinishTracker {
    max: Millis,
    holder: Option<ElementId>,
}

impl FinishTracker {
    fn observe(&mut self, id: ElementId, finish: Millis) {
        if finish > self.max || (finish == self.max && self.holder.is_some()) {
            self.max = finish;
            self.holder = Some(id);
        }
    }
}

/// Resolve every element spec into a ready plan.
///
/// Spec `i` binds to container child `i`; specs beyond `element_count` produce no plan. Invalid
/// animation names, offsets and durations fall back to the configured defaults. All plans are
/// built before anything plays.
#[tracing::instrument(skip_all, fields(specs = specs.len(), element_count = element_count))]
pub fn build_plans(
    specs: &[ElementSpec],
    templates: &ResolvedTemplates,
    config: &GroupConfig,
    element_count: usize,
) -> GroupPlan {
    let mut plans = Vec::with_capacity(specs.len().min(element_count));
    let mut finish = FinishTracker::default();

    for (index, spec) in specs.iter().enumerate() {
        let id = ElementId(index);
        if index >= element_count {
            tracing::warn!(element = %id, "no container element at this index; skipping");
            continue;
        }

        let Some(template) = select_template(spec, templates, config) else {
            tracing::warn!(
                element = %id,
                fallback = %config.element.animation,
                "default animation is not registered; skipping"
            );
            continue;
        };

        let plan = build_plan(id, spec, template, config);
        finish.observe(id, plan.finish_time());
        tracing::debug!(
            element = %id,
            animation = %plan.animation,
            offset = %plan.offset,
            duration = %plan.effective_duration,
            "plan ready"
        );
        plans.push(plan);
    }

    GroupPlan {
        plans,
        last_element: finish.holder,
        total_duration: finish.max,
    }
}

fn select_template<'a>(
    spec: &ElementSpec,
    templates: &'a ResolvedTemplates,
    config: &GroupConfig,
) -> Option<&'a AnimationTemplate> {
    if let Some(name) = &spec.animation_name {
        if let Some(t) = templates.get(name) {
            return Some(t);
        }
        tracing::warn!(animation = %name, "unknown animation; using default");
    }
    templates.get(&config.element.animation)
}

fn build_plan(
    id: ElementId,
    spec: &ElementSpec,
    template: &AnimationTemplate,
    config: &GroupConfig,
) -> ElementPlan {
    let offset = spec
        .offset
        .and_then(Millis::non_negative)
        .unwrap_or(config.element.offset);
    let requested = spec
        .duration
        .and_then(Millis::non_negative)
        .filter(|d| d.is_positive());

    let start = match &spec.positions.start {
        Some(overlay) => template.start.deep_merge(overlay),
        None => template.start.clone(),
    };
    let mut steps = merge_steps(&template.steps, &spec.positions.steps, config);

    let effective_duration = match requested {
        Some(budget) => {
            rescale(&mut steps, template.total_duration, budget);
            budget
        }
        None => steps.values().map(|s| s.duration).sum(),
    };

    ElementPlan {
        id,
        animation: template.name.clone(),
        offset,
        requested_duration: requested,
        effective_duration,
        start,
        steps,
        status: PlanStatus::Ready,
    }
}

/// Template steps with element overrides layered on; steps only the element names are
/// resolved against the global defaults.
fn merge_steps(
    base: &BTreeMap<u32, Step>,
    overrides: &BTreeMap<u32, PositionDef>,
    config: &GroupConfig,
) -> BTreeMap<u32, Step> {
    let mut out = base.clone();
    for (&i, overlay) in overrides {
        let step = match base.get(&i) {
            Some(step) => overlay_step(step, overlay),
            None => resolve_step(overlay, &config.position),
        };
        out.insert(i, step);
    }
    out
}

/// Redistribute `budget` across the steps in proportion to their weight in the template.
///
/// A zero-length template has no weights to distribute by and is left untouched.
fn rescale(steps: &mut BTreeMap<u32, Step>, template_total: Millis, budget: Millis) {
    if !template_total.is_positive() {
        return;
    }
    for step in steps.values_mut() {
        step.duration = Millis(step.duration.0 / template_total.0 * budget.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/builder.rs"]
mod tests;
