//! # TraceLib
//!
//! Tracelib generates synthetic memory address traces for feeding into a cache simulator
//!
//! It draws addresses uniformly at random from an inclusive hexadecimal range, so the resulting
//! trace has no spatial or temporal locality, and formats them as a comma-separated list which can
//! be pasted straight into a simulator
//!
//! The random source is always supplied by the caller, so a seeded generator gives a reproducible
//! trace

/// Contains hexadecimal address parsing, formatting, and the validated address range
pub mod address;

/// Contains the JSON request format, which can be used instead of the interactive prompts
pub mod config;

/// Contains the error type shared by the whole pipeline
pub mod error;

/// Contains the generator used to draw addresses from a range
pub mod generator;

/// Contains the interactive console session
pub mod session;

/// Contains the generated address list, its line-wrapped text form, and the JSON report
pub mod trace;
