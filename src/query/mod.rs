//! Query implementations.

mod nearest_one;
