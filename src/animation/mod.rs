pub(crate) mod merge;
pub(crate) mod position;
pub(crate) mod registry;
pub(crate) mod resolve;
pub(crate) mod style;
pub(crate) mod template;
