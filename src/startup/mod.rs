//! Startup configuration.
//!
//! Settings come from defaults, then environment variables, then CLI flags:
//!
//! ```ignore
//! use trivia_dash::startup::DashboardConfig;
//!
//! let config = DashboardConfig::from_env().apply_cli(&options);
//! let client = config.build_client();
//! ```

pub mod config;

pub use config::DashboardConfig;
