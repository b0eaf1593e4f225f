//! Property-based tests for the Kruskal MST engine.
//!
//! Verifies the engine against an independent Prim oracle, checks the
//! structural invariants of the accepted forest, and confirms that the total
//! weight does not depend on how equal-weight edges are ordered.

mod oracle;
mod strategies;
