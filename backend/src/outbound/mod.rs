//! Outbound adapters implementing domain ports for infrastructure.
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic; referential rules and
//! validation live in the domain services that call them.

pub mod persistence;
