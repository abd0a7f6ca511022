//! Empirical equilibrium constants of the seawater carbonate system.
//!
//! Every constant is on the total/seawater scale used by the charge balance
//! in [`crate::carbonate::solver`]:
//!
//! | Constant | Meaning | Fit |
//! |---|---|---|
//! | KH | CO2 solubility (mol/kg/atm) | Weiss (1974) |
//! | KB | boric acid dissociation | Dickson (1990) |
//! | K1, K2 | carbonic acid dissociation | Lueker et al. (2000) |
//! | KW | water dissociation | DOE (1994) |
//!
//! KB, K1 and K2 are corrected for pressure following Millero (1995). KH and
//! KW are left at their surface values.

use crate::chemistry::{GAS_CONSTANT, kelvin, pressure_bar_from_depth};

/// The five constants for one temperature, salinity and pressure.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EquilibriumConstants {
    pub kh: f64,
    pub kb: f64,
    pub k1: f64,
    pub k2: f64,
    pub kw: f64,
}

impl EquilibriumConstants {
    /// Constants at one atmosphere.
    pub fn surface(t_c: f64, s: f64) -> Self {
        let t_k = kelvin(t_c);
        Self {
            kh: kh_weiss1974(t_k, s),
            kb: kb_dickson1990(t_k, s),
            k1: k1_lueker2000(t_k, s),
            k2: k2_lueker2000(t_k, s),
            kw: kw_doe1994(t_k, s),
        }
    }

    /// Constants at the applied pressure of `depth_m` metres of seawater.
    pub fn at_depth(t_c: f64, s: f64, depth_m: f64) -> Self {
        Self::surface(t_c, s).pressure_corrected(t_c, pressure_bar_from_depth(depth_m))
    }

    /// Applies the Millero (1995) correction to KB, K1 and K2.
    pub fn pressure_corrected(self, t_c: f64, p_bar: f64) -> Self {
        let t_k = kelvin(t_c);
        Self {
            kb: self.kb * pressure_factor(borate_pressure_terms(t_c), t_k, p_bar),
            k1: self.k1 * pressure_factor(k1_pressure_terms(t_c), t_k, p_bar),
            k2: self.k2 * pressure_factor(k2_pressure_terms(t_c), t_k, p_bar),
            ..self
        }
    }
}

/// CO2 solubility, Weiss (1974).
pub fn kh_weiss1974(t_k: f64, s: f64) -> f64 {
    let t100 = t_k / 100.0;
    let u1 = -60.2409 + 93.4517 * (100.0 / t_k) + 23.3585 * t100.ln();
    let u2 = s * (0.023517 - 0.023656 * t100 + 0.0047036 * t100 * t100);
    (u1 + u2).exp()
}

/// Boric acid dissociation, Dickson (1990).
pub fn kb_dickson1990(t_k: f64, s: f64) -> f64 {
    let sqrt_s = s.sqrt();
    let ln_kb = (-8966.9 - 2890.53 * sqrt_s - 77.942 * s + 1.728 * s.powf(1.5)
        - 0.0996 * s * s)
        / t_k
        + 148.0248
        + 137.1942 * sqrt_s
        + 1.62142 * s
        - (24.4344 + 25.085 * sqrt_s + 0.2474 * s) * t_k.ln()
        + 0.053105 * sqrt_s * t_k;
    ln_kb.exp()
}

/// First carbonic acid dissociation, Lueker et al. (2000).
pub fn k1_lueker2000(t_k: f64, s: f64) -> f64 {
    let pk1 = 3633.86 / t_k - 61.2172 + 9.67770 * t_k.ln() - 0.011555 * s + 0.0001152 * s * s;
    10f64.powf(-pk1)
}

/// Second carbonic acid dissociation, Lueker et al. (2000).
pub fn k2_lueker2000(t_k: f64, s: f64) -> f64 {
    let pk2 = 471.78 / t_k + 25.92990 - 3.16967 * t_k.ln() - 0.01781 * s + 0.0001122 * s * s;
    10f64.powf(-pk2)
}

/// Water dissociation, DOE (1994).
pub fn kw_doe1994(t_k: f64, s: f64) -> f64 {
    let kw1 = 148.96502 - 13847.26 / t_k - 23.65218 * t_k.ln();
    let kw2 = (118.67 / t_k - 5.977 + 1.0495 * t_k.ln()) * s.sqrt() - 0.01615 * s;
    (kw1 + kw2).exp()
}

/// Partial molal volume and compressibility change of a dissociation
/// reaction (cm³/mol and cm³/(mol·bar)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressureTerms {
    pub delta_v: f64,
    pub delta_kappa: f64,
}

pub fn borate_pressure_terms(t_c: f64) -> PressureTerms {
    PressureTerms {
        delta_v: -29.48 + 0.1622 * t_c - 0.002608 * t_c * t_c,
        delta_kappa: -0.00284,
    }
}

pub fn k1_pressure_terms(t_c: f64) -> PressureTerms {
    PressureTerms {
        delta_v: -25.50 + 0.1271 * t_c,
        delta_kappa: -0.00308 + 0.0000877 * t_c,
    }
}

pub fn k2_pressure_terms(t_c: f64) -> PressureTerms {
    PressureTerms {
        delta_v: -15.82 - 0.0219 * t_c,
        delta_kappa: 0.00113 - 0.0001475 * t_c,
    }
}

/// Multiplicative factor K(P)/K(0) for an applied pressure in bar.
///
/// `exp(-(ΔV/(R·T))·P + (0.5·Δκ/(R·T))·P²)`
pub fn pressure_factor(terms: PressureTerms, t_k: f64, p_bar: f64) -> f64 {
    let rt = GAS_CONSTANT * t_k;
    (-(terms.delta_v / rt) * p_bar + (0.5 * terms.delta_kappa / rt) * p_bar * p_bar).exp()
}
