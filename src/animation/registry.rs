use crate::animation::merge::DeepMerge;
use crate::animation::position::{PositionDef, PositionsDef};
use crate::animation::style::{StyleValue, style};
use crate::animation::template::TemplateDef;
use std::collections::BTreeMap;

/// Named animation recipes available to a group.
///
/// The registry performs no validation; timing is normalized by
/// [`resolve_templates`](crate::resolve_templates).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateDef>,
}

impl TemplateRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in recipes:
    /// `fadeIn`, `fadeOut`, `left-to-right`, `right-to-left`, `explode` and `implode`.
    pub fn builtin() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert("fadeIn".to_owned(), fade(0.0, 1.0));
        templates.insert("fadeOut".to_owned(), fade(1.0, 0.0));
        templates.insert("right-to-left".to_owned(), right_to_left());
        templates.insert("left-to-right".to_owned(), left_to_right());
        templates.insert("explode".to_owned(), explode());
        templates.insert("implode".to_owned(), implode());
        Self { templates }
    }

    /// Built-ins deep-merged with caller templates.
    pub fn builtin_with(overrides: &BTreeMap<String, TemplateDef>) -> Self {
        Self::builtin().merged(overrides)
    }

    /// Return a new registry with `overrides` layered on top, per template and per position.
    ///
    /// Redefining only step `1` of an existing template keeps its other steps and snapshot.
    pub fn merged(&self, overrides: &BTreeMap<String, TemplateDef>) -> Self {
        Self {
            templates: self.templates.deep_merge(overrides),
        }
    }

    /// Insert or replace a template wholesale.
    pub fn insert(&mut self, name: impl Into<String>, template: TemplateDef) {
        self.templates.insert(name.into(), template);
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Option<&TemplateDef> {
        self.templates.get(name)
    }

    /// Return `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Iterate templates in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateDef)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Return `true` when no template is registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn step(pairs: &[(&str, StyleValue)]) -> PositionDef {
    PositionDef::new(style(pairs.iter().cloned()))
}

fn fade(from: f64, to: f64) -> TemplateDef {
    TemplateDef::new(
        PositionsDef::default()
            .with_start(style([("opacity", from)]))
            .with_step(0, step(&[("opacity", StyleValue::from(to))])),
    )
}

fn right_to_left() -> TemplateDef {
    TemplateDef::new(
        PositionsDef::default()
            .with_start(style([
                ("right", StyleValue::from(0.0)),
                ("opacity", 0.0.into()),
                ("top", "50%".into()),
            ]))
            .with_step(
                0,
                step(&[("right", StyleValue::from("75%")), ("opacity", 1.0.into())])
                    .duration(600.0),
            )
            // Hold in place.
            .with_step(1, step(&[]).duration(600.0))
            .with_step(2, step(&[("opacity", StyleValue::from(0.0))]).duration(600.0)),
    )
}

fn left_to_right() -> TemplateDef {
    TemplateDef::new(
        PositionsDef::default()
            .with_start(style([
                ("right", StyleValue::from("100%")),
                ("opacity", 0.0.into()),
                ("text-align", "right".into()),
                ("top", "50%".into()),
            ]))
            .with_step(
                0,
                step(&[("right", StyleValue::from("25%")), ("opacity", 1.0.into())])
                    .duration(600.0),
            )
            .with_step(1, step(&[]).duration(600.0))
            .with_step(2, step(&[("opacity", StyleValue::from(0.0))]).duration(600.0)),
    )
}

fn explode() -> TemplateDef {
    TemplateDef::new(
        PositionsDef::default()
            .with_start(style([
                ("top", StyleValue::from("30%")),
                ("width", "100%".into()),
                ("opacity", 0.0.into()),
                ("font-size", "10px".into()),
                ("text-align", "center".into()),
            ]))
            .with_step(0, step(&[("opacity", StyleValue::from(1.0))]).duration(0.0))
            .with_step(
                1,
                step(&[
                    ("top", StyleValue::from("0%")),
                    ("font-size", "150px".into()),
                    ("opacity", 0.0.into()),
                ])
                .duration(1000.0),
            ),
    )
}

fn implode() -> TemplateDef {
    TemplateDef::new(
        PositionsDef::default()
            .with_start(style([
                ("width", StyleValue::from("100%")),
                ("opacity", 0.0.into()),
                ("top", "0%".into()),
                ("font-size", "150px".into()),
                ("text-align", "center".into()),
            ]))
            .with_step(
                0,
                step(&[
                    ("top", StyleValue::from("30%")),
                    ("font-size", "40px".into()),
                    ("opacity", 1.0.into()),
                ])
                .duration(1000.0),
            ),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
