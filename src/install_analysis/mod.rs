//! Installation analysis domain
//!
//! Pure logic answering "why is this package installed?". Nothing in this
//! module performs I/O: records come in through the ports, chains go out
//! through the application layer.

pub mod domain;
pub mod services;
