//! # Storing of vectors and matrices in memory
//!
//! This module provides the sparse data structures and the operations defined on them.

pub mod linear_algebra;
