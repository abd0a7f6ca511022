use thiserror::Error;

/// Rejections raised by strict root validation.
///
/// The permissive solver never produces these; it lets a bad root flow into
/// NaN or non-physical speciation instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Charge-balance polynomial has no roots")]
    NoRoots,

    #[error("Selected H+ root is not finite ({re} + {im}i)")]
    NonFiniteRoot { re: f64, im: f64 },

    #[error("Selected H+ root is complex: {re} + {im}i")]
    ComplexRoot { re: f64, im: f64 },

    #[error("Selected H+ root is not positive: {0}")]
    NonPositiveRoot(f64),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --assumptions-json: {source}")]
    ParseAssumptionsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --input or --inputs-json")]
    MissingInputData,

    #[error("Carbonate system could not be solved: {0}")]
    Solve(#[from] SolveError),
}
