//! Ready-made puzzle configurations.
//!
//! The engine is dataset-agnostic; these are the shipped datasets built
//! on top of it. Currently only the Corrupted Seed puzzle from the
//! Project Eden landing page.

mod corrupted_seed;

pub use corrupted_seed::corrupted_seed;
