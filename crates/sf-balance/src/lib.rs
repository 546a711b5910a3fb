//! sf-balance: global material balance for the column design basis.
//!
//! Converts the production capacity (distillate rate and composition specs)
//! into feed, distillate and bottoms flows by solving the two overall
//! balance equations:
//!
//! ```text
//! F = D + B
//! F*xF = D*xD + B*xB
//! ```

pub mod balance;
pub mod error;

pub use balance::{DesignBasis, HOURS_PER_DAY, StreamFlows, solve_mass_balance};
pub use error::{BalanceError, BalanceResult};
