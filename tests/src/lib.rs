//! # Commit-Reveal Voting Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── exploits/         # Attack simulations against a live session
//! │   ├── double_voting.rs
//! │   ├── reveal_forgery.rs
//! │   ├── tally_snooping.rs
//! │   └── timing.rs
//! │
//! └── integration/      # Full elections across modules
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p crv-tests
//!
//! # By category
//! cargo test -p crv-tests integration::
//! cargo test -p crv-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p crv-tests
//! ```

#![allow(dead_code)]

pub mod exploits;
pub mod fixtures;
