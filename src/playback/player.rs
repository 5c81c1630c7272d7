use crate::animation::registry::TemplateRegistry;
use crate::animation::resolve::{ResolvedTemplates, resolve_templates};
use crate::animation::template::TemplateDef;
use crate::config::def::GroupDef;
use crate::config::group::GroupConfig;
use crate::foundation::core::ElementId;
use crate::plan::builder::{GroupPlan, build_plans};
use crate::plan::element::ElementSpec;
use crate::playback::host::{Container, Host, Ticket, Wakeup};
use std::collections::BTreeMap;

/// Lifecycle of a whole group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupStatus {
    /// Built and styled, never started.
    Idle,
    /// A play cycle is running.
    Playing,
    /// Completed and the repeat policy declined another cycle.
    Finished,
    /// Halted by [`TextGroup::stop`].
    Stopped,
}

/// Playback state of one element within the current cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementState {
    /// Not part of a running cycle.
    Idle,
    /// Waiting for its offset to elapse.
    Pending,
    /// Tweening toward the given step.
    Playing(u32),
    /// Ran through its last step.
    Finished,
}

/// A container of text elements animated as one looping group.
///
/// The group is driven entirely by its host: it issues tweens and timers through [`Host`] and
/// advances when the host reports back through [`TextGroup::handle`].
#[derive(Debug)]
pub struct TextGroup {
    config: GroupConfig,
    templates: ResolvedTemplates,
    plan: GroupPlan,
    states: Vec<ElementState>,
    status: GroupStatus,
    cycle: u64,
    plays: u32,
    repeated: u32,
}

impl TextGroup {
    /// Resolve templates, build every element plan and prepare the container.
    ///
    /// The container is hidden and styled, and each bound element receives the element base
    /// style. Nothing plays until [`TextGroup::start`].
    #[tracing::instrument(skip_all, fields(specs = specs.len()))]
    pub fn new<C>(
        specs: &[ElementSpec],
        config: GroupConfig,
        animations: &BTreeMap<String, TemplateDef>,
        container: &mut C,
    ) -> Self
    where
        C: Container + ?Sized,
    {
        let registry = TemplateRegistry::builtin_with(animations);
        let templates = resolve_templates(&registry, &config.position);
        let plan = build_plans(specs, &templates, &config, container.element_count());

        container.set_visible(false);
        container.style_container(&config.container.base_style);
        for p in &plan.plans {
            container.style_element(p.id, &config.element.base_style);
        }

        let states = vec![ElementState::Idle; plan.plans.len()];
        Self {
            config,
            templates,
            plan,
            states,
            status: GroupStatus::Idle,
            cycle: 0,
            plays: 0,
            repeated: 0,
        }
    }

    /// Build a group from a parsed definition.
    pub fn from_def<C>(def: &GroupDef, container: &mut C) -> Self
    where
        C: Container + ?Sized,
    {
        let config = GroupConfig::from_def(&def.config);
        Self::new(&def.elements, config, &def.animations, container)
    }

    /// Build a group and start it immediately.
    pub fn mount<H>(
        specs: &[ElementSpec],
        config: GroupConfig,
        animations: &BTreeMap<String, TemplateDef>,
        host: &mut H,
    ) -> Self
    where
        H: Host + ?Sized,
    {
        let mut group = Self::new(specs, config, animations, &mut *host);
        group.start(host);
        group
    }

    /// Show the container and begin a play cycle.
    ///
    /// A no-op while a cycle is already running. After the group finished or was stopped this
    /// restarts it; the repeat counter is not reset.
    pub fn start<H>(&mut self, host: &mut H)
    where
        H: Host + ?Sized,
    {
        if self.status == GroupStatus::Playing {
            tracing::debug!("start ignored; group already playing");
            return;
        }
        host.set_visible(true);
        self.begin_cycle(host);
    }

    /// Abort every in-flight tween and pending offset. Safe to call at any time.
    pub fn stop<H>(&mut self, host: &mut H)
    where
        H: Host + ?Sized,
    {
        self.halt(host);
        if self.status == GroupStatus::Playing {
            self.status = GroupStatus::Stopped;
            tracing::info!(plays = self.plays, "group stopped");
        }
    }

    /// Advance the group in response to a host event.
    ///
    /// Events from an earlier cycle, or that do not match the element's current state, are
    /// ignored.
    pub fn handle<H>(&mut self, wakeup: Wakeup, host: &mut H)
    where
        H: Host + ?Sized,
    {
        let ticket = wakeup.ticket();
        if self.status != GroupStatus::Playing || ticket.cycle != self.cycle {
            tracing::trace!(?wakeup, cycle = self.cycle, "stale wakeup ignored");
            return;
        }
        let Some(idx) = self.index_of(ticket.element) else {
            tracing::trace!(?wakeup, "wakeup for unplanned element ignored");
            return;
        };

        match (wakeup, self.states[idx]) {
            (Wakeup::OffsetElapsed(_), ElementState::Pending) => {
                self.enter_step(idx, Some(0), host)
            }
            (Wakeup::TweenFinished(t), ElementState::Playing(k)) if t.step == Some(k) => {
                self.enter_step(idx, k.checked_add(1), host)
            }
            (wakeup, state) => tracing::trace!(?wakeup, ?state, "unexpected wakeup ignored"),
        }
    }

    /// Current group lifecycle state.
    pub fn status(&self) -> GroupStatus {
        self.status
    }

    /// Number of restarts performed by the repeat policy.
    pub fn repeated(&self) -> u32 {
        self.repeated
    }

    /// Number of play cycles begun, including the first.
    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// Resolved element plans.
    pub fn plan(&self) -> &GroupPlan {
        &self.plan
    }

    /// Resolved template registry used by this group.
    pub fn templates(&self) -> &ResolvedTemplates {
        &self.templates
    }

    /// Effective configuration.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Playback state of `element`, or `None` if it has no plan.
    pub fn element_state(&self, element: ElementId) -> Option<ElementState> {
        self.index_of(element).map(|i| self.states[i])
    }

    fn index_of(&self, element: ElementId) -> Option<usize> {
        self.plan
            .plans
            .binary_search_by_key(&element, |p| p.id)
            .ok()
    }

    fn begin_cycle<H>(&mut self, host: &mut H)
    where
        H: Host + ?Sized,
    {
        self.cycle += 1;
        self.plays += 1;
        self.status = GroupStatus::Playing;
        tracing::debug!(cycle = self.cycle, play = self.plays, "group cycle begins");

        let cycle = self.cycle;
        for (plan, state) in self.plan.plans.iter().zip(self.states.iter_mut()) {
            host.style_element(plan.id, &plan.start);
            *state = ElementState::Pending;
            let ticket = Ticket {
                element: plan.id,
                cycle,
                step: None,
            };
            host.schedule(ticket, plan.offset);
        }
    }

    /// Start tweening toward `step`, or finish the element when it has no such step.
    fn enter_step<H>(&mut self, idx: usize, step: Option<u32>, host: &mut H)
    where
        H: Host + ?Sized,
    {
        let plan = &self.plan.plans[idx];
        let Some((k, target)) = step.and_then(|k| plan.steps.get(&k).map(|s| (k, s))) else {
            self.finish(idx, host);
            return;
        };

        let ticket = Ticket {
            element: plan.id,
            cycle: self.cycle,
            step: Some(k),
        };
        tracing::debug!(element = %plan.id, step = k, duration = %target.duration, "tween");
        host.tween(ticket, &target.style, target.duration, &target.easing);
        self.states[idx] = ElementState::Playing(k);
    }

    fn finish<H>(&mut self, idx: usize, host: &mut H)
    where
        H: Host + ?Sized,
    {
        self.states[idx] = ElementState::Finished;
        let id = self.plan.plans[idx].id;
        tracing::debug!(element = %id, "element finished");
        if self.plan.last_element == Some(id) {
            self.complete(host);
        }
    }

    /// The last element finished: interrupt the others and apply the repeat policy.
    fn complete<H>(&mut self, host: &mut H)
    where
        H: Host + ?Sized,
    {
        self.halt(host);
        if self.config.repeat.allows(self.repeated) {
            self.repeated += 1;
            tracing::info!(repeated = self.repeated, "group complete; restarting");
            self.begin_cycle(host);
        } else {
            self.status = GroupStatus::Finished;
            tracing::info!(plays = self.plays, "group complete");
        }
    }

    /// Stop every element's tween and invalidate all outstanding tickets.
    fn halt<H>(&mut self, host: &mut H)
    where
        H: Host + ?Sized,
    {
        for plan in &self.plan.plans {
            host.stop(plan.id);
        }
        self.cycle += 1;
        for state in &mut self.states {
            if *state != ElementState::Finished {
                *state = ElementState::Idle;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
