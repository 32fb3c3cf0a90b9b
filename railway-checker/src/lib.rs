//! Railway collision checker.
//!
//! Answers one question for a network of stations and tracks: "if these
//! trains all leave at time 0 and run at unit speed, in this order, does
//! any pair of them collide?"

pub mod batch;
pub mod domain;
pub mod network;
pub mod planner;
