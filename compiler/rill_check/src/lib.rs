//! Rill Check - static analysis of switch case lists.
//!
//! Two questions are answered once per switch expression, at definition
//! time, from the scrutinee's declared type and the pattern list alone:
//!
//! 1. **Exhaustiveness**: is there any value of the scrutinee type that
//!    no case pattern matches?
//! 2. **Reachability**: is there any case that can never match (because
//!    earlier cases already cover everything it covers)?
//!
//! Both are decided with a small set algebra over *finite unions of
//! patterns* — enumerating values is impossible for infinite types, but
//! a `Vec<Pat>` can stand for "every value matched by any of these",
//! and complement/intersection/subtraction stay closed over that
//! representation. See [`algebra`] for the operations and [`check_cases`]
//! for the driver.

pub mod algebra;
mod cases;

pub use cases::check_cases;
