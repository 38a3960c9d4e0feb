//! Row models and transfer objects.

pub mod task;
