//! Shared utility modules used across Prosa components.

pub mod round;
