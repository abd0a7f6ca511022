//! Chemistry module: physical constants and unit helpers for the seawater
//! carbonate system.
//!
//! This module provides:
//! - Unit conversions used throughout the solver (°C to K, depth to bar, µmol/kg to mol/kg)
//! - The gas constant in the units expected by the Millero pressure correction
//! - Total borate scaled from salinity
//! - The empirical equilibrium constants in [`equilibrium`]
//!
//! Units conventions:
//! - Temperatures enter in °C and are converted to Kelvin where a fit needs them
//! - Applied pressure is in bar, approximated as 1 bar per 10 m of depth
//! - Concentrations cross the public API in µmol/kg and are mol/kg internally
//!
//! # Examples
//! ```rust
//! use carbonate_rs::chemistry::{kelvin, pressure_bar_from_depth, total_borate};
//!
//! assert!((kelvin(15.0) - 288.15).abs() < 1e-12);
//! assert_eq!(pressure_bar_from_depth(1000.0), 100.0);
//! assert!((total_borate(35.0) - 4.16e-4).abs() < 1e-18);
//! ```
//!
//! # Panics
//! None of the functions panic. Nothing is clamped either: negative or
//! non-finite inputs pass straight through to the caller.

pub mod equilibrium;

pub use equilibrium::EquilibriumConstants;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Depth of water column exerting one bar.
pub const METRES_PER_BAR: f64 = 10.0;
/// µmol per mol.
pub const UMOL_PER_MOL: f64 = 1e6;
/// Gas constant in cm³·bar/(mol·K).
pub const GAS_CONSTANT: f64 = 83.131;

/// Total boron (mol/kg) at the reference salinity.
pub const BORON_TOTAL_REF: f64 = 0.000416;
/// Salinity at which `BORON_TOTAL_REF` applies.
pub const SALINITY_REF: f64 = 35.0;

pub fn kelvin(t_c: f64) -> f64 {
    t_c + KELVIN_OFFSET
}

/// Applied (gauge) pressure in bar for a depth in metres.
pub fn pressure_bar_from_depth(depth_m: f64) -> f64 {
    depth_m / METRES_PER_BAR
}

pub fn umol_to_mol(x_umol_kg: f64) -> f64 {
    x_umol_kg * 1e-6
}

pub fn mol_to_umol(x_mol_kg: f64) -> f64 {
    x_mol_kg * UMOL_PER_MOL
}

/// Total borate (mol/kg), linearly scaled from salinity.
pub fn total_borate(s: f64) -> f64 {
    BORON_TOTAL_REF * s / SALINITY_REF
}
