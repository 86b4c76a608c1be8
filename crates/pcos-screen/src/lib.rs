//! PCOS risk self-assessment core.
//!
//! The [`assessment`] module holds the weighted scoring heuristic and is the only part with
//! real logic; [`recommendations`] turns its output into diet and exercise plans. The
//! remaining modules carry the surrounding service: assessment history, the expert Q&A
//! listing, the local appointment book, configuration, and telemetry.

pub mod appointments;
pub mod assessment;
pub mod config;
pub mod error;
pub mod history;
pub mod qa;
pub mod recommendations;
pub mod telemetry;
