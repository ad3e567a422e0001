//! Interactive terminal prompt-engineering guide.
//!
//! `promptcraft-guide` wires the promptcraft engine and the terminal UI
//! into a ready-to-run application. [`GuideConfig`] holds the startup
//! settings and builds the session state and TUI configuration.
//!
//! ```ignore
//! use promptcraft_guide::GuideConfig;
//!
//! let config = GuideConfig::default();
//! let state = config.build_state();
//! let library = config.build_template_library()?;
//! ```

pub mod config;

pub use config::GuideConfig;
