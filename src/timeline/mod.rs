pub(crate) mod clip;
pub(crate) mod dsl;
pub(crate) mod model;
