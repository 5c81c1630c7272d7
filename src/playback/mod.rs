pub(crate) mod host;
pub(crate) mod memory;
pub(crate) mod player;
