pub(crate) mod constants;
pub(crate) mod distance;
pub(crate) mod keyboard;
