pub(crate) mod debounce;
pub(crate) mod fragment;
pub(crate) mod session;
pub(crate) mod style;
