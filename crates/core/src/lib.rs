//! Stirling Dock Core Library
//!
//! This crate provides the core functionality for stirling-dock, a small
//! desktop utility that manages the Stirling PDF Docker container: starting
//! it (creating it on first use), stopping it, and reporting its state.
//!
//! # Key Features
//!
//! - **Docker Invocation**: Build and run the Docker CLI commands for the
//!   managed container, capturing their output
//! - **Status Polling**: Map the existence and running queries onto a small
//!   container-state enum
//! - **Action Control**: Decide between creating and resuming the container,
//!   and report each attempt as a displayable outcome
//! - **Configuration Management**: Optional YAML overrides for the container
//!   name, image, port and data directory
//! - **Error Handling**: Error types for the failure modes of an external
//!   command
//!
//! # Examples
//!
//! Polling the container state:
//!
//! ```no_run
//! use stirling_dock_core::config::AppConfig;
//! use stirling_dock_core::docker::SystemRunner;
//! use stirling_dock_core::status::poll_state;
//!
//! let container = AppConfig::default().container_ref();
//! let state = poll_state(&SystemRunner, &container);
//! println!("Container is {}", state.label());
//! ```

pub mod actions;
pub mod config;
pub mod docker;
pub mod error;
pub mod status;
