pub(crate) mod parse_perf;
pub(crate) mod plot;
pub(crate) mod run;
