//! # Exploit Simulations
//!
//! Attacks a dishonest voter or outsider could try against a running
//! session. Each test asserts the attack fails and leaves no trace.

mod double_voting;
mod reveal_forgery;
mod timing;
