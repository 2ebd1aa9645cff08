//! Vulnerability matching core: domain models, matching services, and
//! policies. Pure in-memory logic with no I/O; acquisition of the
//! dependency list and the advisory corpus happens behind outbound
//! ports.

pub mod domain;
pub mod policies;
pub mod services;
