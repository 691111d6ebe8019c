//! Library side of the `xrm-ceg` command: logging setup and the generation run.

pub mod logging;
pub mod pipeline;
pub mod types;
