//! # first-boot Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fallback.rs   # Strategy selection down to the console banner
//!     ├── dashboard.rs  # Key handling through command execution
//!     └── snapshot.rs   # HostProbe against a synthetic proc tree
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p first-boot-tests
//!
//! # By flow
//! cargo test -p first-boot-tests integration::fallback::
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
