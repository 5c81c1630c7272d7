pub(crate) mod def;
pub(crate) mod group;
pub(crate) mod repeat;
