pub(crate) mod commands;
pub(crate) mod event;
pub(crate) mod reply;
pub(crate) mod types;
