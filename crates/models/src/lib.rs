//! Entities, validators and insert helpers for every resource kind.

pub mod errors;
pub mod db;
pub mod validation;
pub mod cabinet;
pub mod student;
pub mod participant;
pub mod animal;
pub mod task;

#[cfg(test)]
mod tests;
