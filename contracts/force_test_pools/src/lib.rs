#![no_std]

//! # Force Reference Pools
//!
//! Minimal pools behind the two adapter variants, for tests and local
//! networks only. They implement just enough of each design to price a
//! single-hop swap:
//!
//! - [`ReferencePair`]: `x * y = k` with a 0.3 % input fee.
//! - [`ReferenceConcentratedPool`]: one active liquidity range priced by a
//!   Q64.64 square-root ratio, with a fee in hundredths of a bip.
//! - [`ReferenceRouter`]: pair/pool registry keyed by the canonical token order.
//!
//! Every contract lives in this one crate, so it is linked as an `rlib` only.

mod concentrated;
mod constant_product;
mod router;

pub use concentrated::{ReferenceConcentratedPool, ReferenceConcentratedPoolClient};
pub use constant_product::{ReferencePair, ReferencePairClient};
pub use router::{ReferenceRouter, ReferenceRouterClient};

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
