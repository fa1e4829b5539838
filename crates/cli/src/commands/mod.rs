pub(crate) mod browse;
pub(crate) mod output;
pub(crate) mod view;
