pub(crate) mod area;
pub(crate) mod clip;
pub(crate) mod parallax;
pub(crate) mod translate;
