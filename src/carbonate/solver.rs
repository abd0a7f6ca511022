use crate::adapters::roots::polynomial_roots;
use crate::chemistry::*;
use crate::error::SolveError;
use crate::models::{Assumptions, Inputs};
use nalgebra::Complex;
use serde::Serialize;

/// Largest |im|/|re| for which the selected root still counts as real.
pub const ROOT_IMAG_TOL: f64 = 1e-6;

/// The five returned species, in µmol/kg except pCO2 (µatm) and pH.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Speciation {
    pub pco2_uatm: f64,
    pub ph: f64,
    pub co2_umol_kg: f64,
    pub hco3_umol_kg: f64,
    pub co3_umol_kg: f64,
}

impl Speciation {
    /// `(pCO2, pH, CO2, HCO3, CO3)`
    pub fn to_tuple(self) -> (f64, f64, f64, f64, f64) {
        (
            self.pco2_uatm,
            self.ph,
            self.co2_umol_kg,
            self.hco3_umol_kg,
            self.co3_umol_kg,
        )
    }
}

/// DIC and total alkalinity rebuilt from the solved speciation (µmol/kg).
///
/// For a correctly selected root both match the inputs to within the
/// accuracy of the root finder.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ChargeBalance {
    pub dic_umol_kg: f64,
    pub alk_umol_kg: f64,
}

impl ChargeBalance {
    /// Relative mismatch against the sample, `(dic, alkalinity)`.
    pub fn relative_error(&self, inp: &Inputs) -> (f64, f64) {
        (
            (self.dic_umol_kg - inp.dic_umol_kg).abs() / inp.dic_umol_kg.abs(),
            (self.alk_umol_kg - inp.alk_umol_kg).abs() / inp.alk_umol_kg.abs(),
        )
    }
}

/// Intermediate quantities behind a `Speciation`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Components {
    pub constants: EquilibriumConstants,
    pub pressure_bar: f64,
    pub total_borate_umol_kg: f64,
    pub h_mol_kg: f64,
    pub boh4_umol_kg: f64,
    pub oh_umol_kg: f64,
    pub charge_balance: ChargeBalance,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DetailedResult {
    pub speciation: Speciation,
    pub components: Components,
}

/// Result of a configured calculation.
///
/// - `Simple` carries the speciation alone.
/// - `Detailed` adds the constants, minor species and charge-balance check,
///   returned when `Assumptions::return_components` is set.
#[derive(Debug)]
pub enum CalcResult {
    Simple(Speciation),
    Detailed(DetailedResult),
}

/// Serializable summary for the CLI and other API callers.
#[derive(Serialize, Debug, Clone)]
pub struct CalculationSummary {
    #[serde(flatten)]
    pub speciation: Speciation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

/// Coefficients `[a1, …, a6]` of the charge-balance polynomial in [H+],
/// highest power first.
///
/// Its roots satisfy
/// `Alk = HCO3 + 2·CO3 + B(OH)4 + OH − H` at the given DIC and total borate.
/// All concentrations are in mol/kg.
pub fn charge_balance_coefficients(
    alk: f64,
    dic: f64,
    tborate: f64,
    k: &EquilibriumConstants,
) -> [f64; 6] {
    let EquilibriumConstants { kb, k1, k2, kw, .. } = *k;

    let a1 = 1.0;
    let a2 = alk + kb + k1;
    let a3 = alk * kb - kb * tborate - kw + alk * k1 + k1 * kb + k1 * k2 - dic * k1;
    let a4 = -kw * kb + alk * kb * k1 - kb * tborate * k1 - kw * k1 + alk * k1 * k2
        + kb * k1 * k2
        - dic * kb * k1
        - 2.0 * dic * k1 * k2;
    let a5 = -kw * kb * k1 + alk * kb * k1 * k2 - kw * k1 * k2 - kb * tborate * k1 * k2
        - 2.0 * dic * kb * k1 * k2;
    let a6 = -kb * kw * k1 * k2;

    [a1, a2, a3, a4, a5, a6]
}

/// Picks the root with the largest real part.
///
/// A NaN root poisons the selection and is returned as-is. `None` only for
/// an empty slice.
pub fn select_root(roots: &[Complex<f64>]) -> Option<Complex<f64>> {
    if let Some(nan) = roots.iter().find(|r| r.re.is_nan()) {
        return Some(*nan);
    }
    roots.iter().copied().max_by(|a, b| a.re.total_cmp(&b.re))
}

/// Accepts a selected root only if it is a finite, real, positive [H+].
pub fn check_root(root: Option<Complex<f64>>) -> Result<f64, SolveError> {
    let root = root.ok_or(SolveError::NoRoots)?;
    let (re, im) = (root.re, root.im);
    if !re.is_finite() || !im.is_finite() {
        return Err(SolveError::NonFiniteRoot { re, im });
    }
    if im.abs() > ROOT_IMAG_TOL * re.abs() {
        return Err(SolveError::ComplexRoot { re, im });
    }
    if re <= 0.0 {
        return Err(SolveError::NonPositiveRoot(re));
    }
    Ok(re)
}

/// Everything computed before speciation, for one sample.
struct Equilibrium {
    constants: EquilibriumConstants,
    pressure_bar: f64,
    tborate: f64,
    dic: f64,
    root: Option<Complex<f64>>,
}

impl Equilibrium {
    fn new(inp: &Inputs) -> Self {
        let alk = umol_to_mol(inp.alk_umol_kg);
        let dic = umol_to_mol(inp.dic_umol_kg);
        let tborate = total_borate(inp.s);
        let pressure_bar = pressure_bar_from_depth(inp.depth_m);
        let constants = EquilibriumConstants::at_depth(inp.t_c, inp.s, inp.depth_m);

        let coeffs = charge_balance_coefficients(alk, dic, tborate, &constants);
        let roots = polynomial_roots(&coeffs);
        let root = select_root(&roots);

        log::debug!(
            "t={} s={} z={} constants={constants:?} roots={roots:?} selected={root:?}",
            inp.t_c,
            inp.s,
            inp.depth_m
        );

        Self {
            constants,
            pressure_bar,
            tborate,
            dic,
            root,
        }
    }

    /// [H+] in mol/kg.
    ///
    /// Permissive mode keeps the real part of the selected root whatever it
    /// is, only logging a warning; strict mode rejects it.
    fn hydrogen_ion(&self, strict: bool) -> Result<f64, SolveError> {
        match check_root(self.root) {
            Ok(h) => Ok(h),
            Err(e) if strict => Err(e),
            Err(e) => {
                log::warn!("Continuing with non-physical H+ root: {e}");
                Ok(self.root.map_or(f64::NAN, |r| r.re))
            }
        }
    }

    fn speciate(&self, h: f64) -> Speciation {
        let EquilibriumConstants { kh, k1, k2, .. } = self.constants;
        let dic = self.dic;

        let hco3 = mol_to_umol(dic / (1.0 + h / k1 + k2 / h));
        let co3 = mol_to_umol(dic / (1.0 + h / k2 + h * h / (k1 * k2)));
        let co2 = mol_to_umol(dic / (1.0 + k1 / h + k1 * k2 / (h * h)));

        Speciation {
            pco2_uatm: co2 / kh,
            ph: -h.log10(),
            co2_umol_kg: co2,
            hco3_umol_kg: hco3,
            co3_umol_kg: co3,
        }
    }

    fn components(&self, h: f64, sp: &Speciation) -> Components {
        let EquilibriumConstants { kb, kw, .. } = self.constants;
        let boh4 = kb * self.tborate / (h + kb);
        let oh = kw / h;

        let charge_balance = ChargeBalance {
            dic_umol_kg: sp.co2_umol_kg + sp.hco3_umol_kg + sp.co3_umol_kg,
            alk_umol_kg: sp.hco3_umol_kg + 2.0 * sp.co3_umol_kg + mol_to_umol(boh4 + oh - h),
        };

        Components {
            constants: self.constants,
            pressure_bar: self.pressure_bar,
            total_borate_umol_kg: mol_to_umol(self.tborate),
            h_mol_kg: h,
            boh4_umol_kg: mol_to_umol(boh4),
            oh_umol_kg: mol_to_umol(oh),
            charge_balance,
        }
    }

    fn detailed(&self, h: f64) -> DetailedResult {
        let speciation = self.speciate(h);
        let components = self.components(h, &speciation);
        DetailedResult {
            speciation,
            components,
        }
    }
}

/// Solve the carbonate system for one point.
///
/// Parameters:
/// - `temp`: temperature (°C)
/// - `s`: salinity (ppt)
/// - `z`: depth (m), applied as `z / 10` bar
/// - `alk`: total alkalinity (µmol/kg)
/// - `dic`: dissolved inorganic carbon (µmol/kg)
///
/// Returns `(pCO2 µatm, pH, CO2 µmol/kg, HCO3 µmol/kg, CO3 µmol/kg)`.
///
/// Nothing is validated. Inputs far outside seawater conditions give NaN or
/// non-physical numbers rather than an error; use [`solve_checked`] to have
/// the H+ root verified.
///
/// ```rust
/// let (pco2, ph, _co2, _hco3, _co3) = carbonate_rs::solve(15.0, 35.0, 10.0, 2300.0, 2100.0);
/// assert!((ph - 8.007).abs() < 1e-3);
/// assert!((pco2 - 442.6).abs() < 0.1);
/// ```
pub fn solve(temp: f64, s: f64, z: f64, alk: f64, dic: f64) -> (f64, f64, f64, f64, f64) {
    solve_inputs(&Inputs::new(temp, s, z, alk, dic)).to_tuple()
}

pub fn solve_inputs(inp: &Inputs) -> Speciation {
    solve_detailed(inp).speciation
}

/// Like [`solve_inputs`], but the selected H+ root must be finite, real and
/// positive.
pub fn solve_checked(inp: &Inputs) -> Result<Speciation, SolveError> {
    let eq = Equilibrium::new(inp);
    let h = eq.hydrogen_ion(true)?;
    Ok(eq.speciate(h))
}

/// Speciation together with the constants, minor species and the
/// charge-balance reconstruction.
pub fn solve_detailed(inp: &Inputs) -> DetailedResult {
    let eq = Equilibrium::new(inp);
    let h = eq.hydrogen_ion(false).unwrap_or(f64::NAN);
    eq.detailed(h)
}

/// Solve a sample under the given `Assumptions`.
///
/// Errors are only possible with `strict_root`; otherwise the result always
/// comes back, degraded to NaN if the inputs are unphysical.
pub fn calc_carbonate_system(inp: &Inputs, ass: &Assumptions) -> Result<CalcResult, SolveError> {
    let eq = Equilibrium::new(inp);
    let h = eq.hydrogen_ion(ass.strict_root)?;

    if !ass.return_components {
        return Ok(CalcResult::Simple(eq.speciate(h)));
    }
    Ok(CalcResult::Detailed(eq.detailed(h)))
}

/// Compute a `CalculationSummary` for the given inputs.
///
/// Components are attached only when `ass.return_components` is set.
pub fn compute_summary(
    inputs: &Inputs,
    assumptions: &Assumptions,
) -> Result<CalculationSummary, SolveError> {
    let summary = match calc_carbonate_system(inputs, assumptions)? {
        CalcResult::Simple(speciation) => CalculationSummary {
            speciation,
            components: None,
        },
        CalcResult::Detailed(d) => CalculationSummary {
            speciation: d.speciation,
            components: Some(d.components),
        },
    };
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Inputs {
        Inputs::new(15.0, 35.0, 10.0, 2300.0, 2100.0)
    }

    #[test]
    fn leading_coefficient_is_one_and_constant_term_negative() {
        let k = EquilibriumConstants::surface(15.0, 35.0);
        let a = charge_balance_coefficients(2.3e-3, 2.1e-3, total_borate(35.0), &k);
        assert_eq!(a[0], 1.0);
        assert!(a[5] < 0.0);
        assert_eq!(a[5], -k.kb * k.kw * k.k1 * k.k2);
    }

    #[test]
    fn selects_largest_real_part() {
        let roots = [
            Complex::new(-2e-3, 0.0),
            Complex::new(9.8e-9, 0.0),
            Complex::new(-1e-6, 3e-7),
            Complex::new(-1e-6, -3e-7),
        ];
        assert_eq!(select_root(&roots), Some(Complex::new(9.8e-9, 0.0)));
        assert_eq!(select_root(&[]), None);
    }

    #[test]
    fn nan_root_wins_selection() {
        let roots = [Complex::new(1.0, 0.0), Complex::new(f64::NAN, 0.0)];
        assert!(select_root(&roots).is_some_and(|r| r.re.is_nan()));
    }

    #[test]
    fn check_root_rejects_non_physical_roots() {
        assert_eq!(check_root(None), Err(SolveError::NoRoots));
        assert!(matches!(
            check_root(Some(Complex::new(f64::NAN, 0.0))),
            Err(SolveError::NonFiniteRoot { .. })
        ));
        assert!(matches!(
            check_root(Some(Complex::new(1e-8, 1e-9))),
            Err(SolveError::ComplexRoot { .. })
        ));
        assert_eq!(
            check_root(Some(Complex::new(-1e-8, 0.0))),
            Err(SolveError::NonPositiveRoot(-1e-8))
        );
        assert_eq!(check_root(Some(Complex::new(1e-8, 0.0))), Ok(1e-8));
    }

    #[test]
    fn strict_and_permissive_agree_on_seawater() {
        let inp = reference();
        let strict = solve_checked(&inp).unwrap();
        assert_eq!(strict, solve_inputs(&inp));
    }

    #[test]
    fn negative_salinity_fails_silently_or_strictly() {
        let inp = Inputs::new(15.0, -1.0, 0.0, 2300.0, 2100.0);
        let (_, ph, ..) = solve_inputs(&inp).to_tuple();
        assert!(ph.is_nan());
        assert!(matches!(
            solve_checked(&inp),
            Err(SolveError::NonFiniteRoot { .. })
        ));
    }

    #[test]
    fn assumptions_select_result_shape() {
        let inp = reference();
        let simple = calc_carbonate_system(&inp, &Assumptions::default()).unwrap();
        assert!(matches!(simple, CalcResult::Simple(_)));

        let ass = Assumptions {
            return_components: true,
            ..Default::default()
        };
        match calc_carbonate_system(&inp, &ass).unwrap() {
            CalcResult::Detailed(d) => {
                assert!((d.components.pressure_bar - 1.0).abs() < 1e-15);
                assert!((d.components.total_borate_umol_kg - 416.0).abs() < 1e-9);
                assert!(d.components.boh4_umol_kg > 0.0);
                assert!(d.components.oh_umol_kg > 0.0);
            }
            CalcResult::Simple(_) => panic!("expected detailed result"),
        }
    }

    #[test]
    fn summary_carries_components_only_on_request() {
        let inp = reference();
        let plain = compute_summary(&inp, &Assumptions::default()).unwrap();
        assert!(plain.components.is_none());

        let ass = Assumptions {
            return_components: true,
            strict_root: true,
        };
        let full = compute_summary(&inp, &ass).unwrap();
        assert_eq!(full.speciation, plain.speciation);
        assert!(full.components.is_some());
    }
}
