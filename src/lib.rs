//! animtext sequences keyframed text animations across a group of elements.
//!
//! A group is described by per-element specs, optional custom templates and a configuration.
//! The engine resolves everything into timed plans up front and then plays them through a host:
//!
//! - Merge templates into a [`TemplateRegistry`] and normalize them with [`resolve_templates`]
//! - Build every element's timeline with [`build_plans`]
//! - Drive playback and the repeat policy with a [`TextGroup`] on any [`Host`]
//!
//! [`MemoryStage`] is a deterministic host on a virtual clock, useful for previews and tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod plan;
pub(crate) mod playback;

pub use crate::foundation::core::{Easing, ElementId, Millis};
pub use crate::foundation::error::{AnimTextError, AnimTextResult};

pub use crate::animation::merge::DeepMerge;
pub use crate::animation::position::{PositionDef, PositionKey, PositionsDef};
pub use crate::animation::registry::TemplateRegistry;
pub use crate::animation::resolve::{ResolvedTemplates, resolve_templates};
pub use crate::animation::style::{StyleMap, StyleValue, style};
pub use crate::animation::template::{AnimationTemplate, Step, TemplateDef};
pub use crate::config::def::GroupDef;
pub use crate::config::group::{
    ConfigDef, ContainerDef, ContainerDefaults, ElementDefaults, ElementDefaultsDef, GroupConfig,
    PositionDefaults, PositionDefaultsDef,
};
pub use crate::config::repeat::RepeatPolicy;
pub use crate::plan::builder::{GroupPlan, build_plans};
pub use crate::plan::element::{ElementPlan, ElementSpec, PlanStatus};
pub use crate::playback::host::{Clock, Container, Host, Ticket, Tweener, Wakeup};
pub use crate::playback::memory::{MemoryStage, StageEvent, StageEventKind};
pub use crate::playback::player::{ElementState, GroupStatus, TextGroup};
