pub mod anomalies;
pub mod forecast;

pub(crate) mod util;
