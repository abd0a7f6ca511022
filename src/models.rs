use serde::{Deserialize, Serialize};

/// Calculation options that do not describe the water sample itself.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Reject a selected H+ root that is complex, non-finite or non-positive
    /// instead of returning whatever speciation it produces.
    pub strict_root: bool,
    pub return_components: bool,
}

/// A single seawater sample.
///
/// The short aliases (`temp`, `z`, `alk`, `dic`) accept documents written
/// with the conventional field names used in carbonate-chemistry scripts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(alias = "temp")]
    pub t_c: f64,
    #[serde(alias = "salinity")]
    pub s: f64,
    #[serde(alias = "z", alias = "depth")]
    pub depth_m: f64,
    #[serde(alias = "alk", alias = "alkalinity")]
    pub alk_umol_kg: f64,
    #[serde(alias = "dic")]
    pub dic_umol_kg: f64,
}

impl Inputs {
    pub fn new(t_c: f64, s: f64, depth_m: f64, alk_umol_kg: f64, dic_umol_kg: f64) -> Self {
        Self {
            t_c,
            s,
            depth_m,
            alk_umol_kg,
            dic_umol_kg,
        }
    }

    pub fn with_dic(mut self, dic_umol_kg: f64) -> Self {
        self.dic_umol_kg = dic_umol_kg;
        self
    }

    pub fn with_depth(mut self, depth_m: f64) -> Self {
        self.depth_m = depth_m;
        self
    }
}
