pub mod adapters;
pub mod carbonate;
pub mod chemistry;
pub mod error;
pub mod models;

pub use crate::adapters::roots::polynomial_roots;
pub use crate::carbonate::solver::{
    CalcResult, CalculationSummary, ChargeBalance, Components, DetailedResult, Speciation,
    calc_carbonate_system, charge_balance_coefficients, check_root, compute_summary, select_root,
    solve, solve_checked, solve_detailed, solve_inputs,
};
pub use crate::chemistry::EquilibriumConstants;
pub use crate::error::{AppError, SolveError};
pub use crate::models::{Assumptions, Inputs};
