//! Service layer providing the create/read pipelines on top of models.
//! - Each resource has a repository trait (data access) and a service
//!   (uniqueness checks, guards, error translation).
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod cabinet;
pub mod participant;
pub mod animal;
pub mod task;
