//! Host-independent core: procedural animation, chart geometry, reveal and
//! visibility state machines, scheduling and logging abstractions.

pub mod animation;
pub mod chart;
pub mod errors;
pub mod logging;
pub mod scheduling;
pub mod visibility;
