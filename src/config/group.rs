use crate::animation::merge::DeepMerge;
use crate::animation::style::{StyleMap, StyleValue, style};
use crate::config::repeat::RepeatPolicy;
use crate::foundation::core::{Easing, Millis};
use crate::foundation::lenient;
use serde::{Deserialize, Serialize};

/// Fully populated settings for one animated group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupConfig {
    /// Restart policy after the group completes.
    pub repeat: RepeatPolicy,
    /// Styling of the wrapping container.
    pub container: ContainerDefaults,
    /// Per-element fallbacks.
    pub element: ElementDefaults,
    /// Per-step timing fallbacks.
    pub position: PositionDefaults,
}

/// Styling of the wrapping container.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerDefaults {
    /// Style applied to the container at construction.
    pub base_style: StyleMap,
}

/// Fallbacks applied to every managed element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementDefaults {
    /// Style applied to each bound element at construction.
    pub base_style: StyleMap,
    /// Offset used when an element's own offset is invalid.
    pub offset: Millis,
    /// Template used when an element names none or an unknown one.
    pub animation: String,
}

/// Timing fallbacks for template steps.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionDefaults {
    /// Duration for steps without a valid one.
    pub duration: Millis,
    /// Easing for steps without one.
    pub easing: Easing,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            repeat: RepeatPolicy::Unbounded,
            container: ContainerDefaults {
                base_style: style([
                    ("position", StyleValue::from("relative")),
                    ("margin", 0.0.into()),
                    ("padding", 0.0.into()),
                    ("width", "100%".into()),
                    ("height", "100%".into()),
                    ("list-style", "none".into()),
                ]),
            },
            element: ElementDefaults {
                base_style: style([
                    ("position", StyleValue::from("absolute")),
                    ("margin", 0.0.into()),
                    ("padding", 0.0.into()),
                ]),
                offset: Millis::ZERO,
                animation: "explode".to_owned(),
            },
            position: PositionDefaults {
                duration: Millis(1000.0),
                easing: Easing::default(),
            },
        }
    }
}

impl GroupConfig {
    /// Built-in defaults with a partial configuration deep-merged on top.
    pub fn from_def(def: &ConfigDef) -> Self {
        Self::default().with_overrides(def)
    }

    /// Return a copy with every field `def` specifies replaced.
    ///
    /// Style maps merge per property. Invalid numbers in `def` keep the current value.
    pub fn with_overrides(&self, def: &ConfigDef) -> Self {
        let mut out = self.clone();
        if let Some(repeat) = def.repeat {
            out.repeat = repeat;
        }
        if let Some(container) = &def.container {
            out.container.base_style = out.container.base_style.deep_merge(&container.base_style);
        }
        if let Some(element) = &def.element_default {
            out.element.base_style = out.element.base_style.deep_merge(&element.base_style);
            if let Some(offset) = element.offset.and_then(Millis::non_negative) {
                out.element.offset = offset;
            }
            if let Some(name) = &element.animation_name {
                out.element.animation = name.clone();
            }
        }
        if let Some(position) = &def.position {
            if let Some(duration) = position.default_duration.and_then(Millis::non_negative) {
                out.position.duration = duration;
            }
            if let Some(easing) = &position.default_easing {
                out.position.easing = easing.clone();
            }
        }
        out
    }
}

/// Partial group configuration as written in JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDef {
    /// `true`, `false` or a restart count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatPolicy>,
    /// Container styling.
    #[serde(default, rename = "element", skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerDef>,
    /// Per-element fallbacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_default: Option<ElementDefaultsDef>,
    /// Step timing fallbacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionDefaultsDef>,
}

/// Container styling overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDef {
    /// Properties merged onto the default container style.
    #[serde(default)]
    pub base_style: StyleMap,
}

/// Element fallback overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefaultsDef {
    /// Properties merged onto the default element style.
    #[serde(default)]
    pub base_style: StyleMap,
    /// Fallback offset.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub offset: Option<f64>,
    /// Fallback template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_name: Option<String>,
}

/// Step timing fallback overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDefaultsDef {
    /// Fallback step duration.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration: Option<f64>,
    /// Fallback easing name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_easing: Option<Easing>,
}

#[cfg(test)]
#[path = "../../tests/unit/config/group.rs"]
mod tests;
