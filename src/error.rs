use thiserror::Error;

/// Errors produced by the minutiae-detection pipeline.
///
/// Any error is terminal for the current call: the pipeline never retries a
/// stage, and no partial results escape — the success payload only exists on
/// `Ok`.
#[derive(Error, Debug)]
pub enum DetectError {
    /// A pipeline stage failed.
    ///
    /// Collaborator failures are propagated verbatim; `stage` names the
    /// pipeline stage that reported the failure.
    #[error("{stage} stage failed: {reason}")]
    Collaborator {
        stage: &'static str,
        reason: String,
    },

    /// The binarized image came back with dimensions different from the
    /// input image.
    ///
    /// This is a defensive check; a well-behaved binarizer can never trip it.
    #[error("binarized image has bad dimensions: {got_w}x{got_h}, expected {want_w}x{want_h}")]
    DimensionMismatch {
        got_w: usize,
        got_h: usize,
        want_w: usize,
        want_h: usize,
    },

    /// A fixed-capacity structure could not be constructed.
    #[error("allocation failed: {what}")]
    Allocation { what: &'static str },
}

impl DetectError {
    /// Shorthand for a collaborator failure at a named stage.
    pub fn stage(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Collaborator {
            stage,
            reason: reason.into(),
        }
    }
}

/// Input-validation errors of the neural classifier.
///
/// The classifier never aborts the process: every invalid input is reported
/// through one of these variants and no activations are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MlpError {
    /// Hidden layer wider than the static limit.
    #[error("hidden layer has {got} nodes, limit is {limit}")]
    TooManyHidden { got: usize, limit: usize },

    /// One of the layer sizes is zero.
    #[error("layer sizes must be positive: n_inps={n_inps}, n_hids={n_hids}, n_outs={n_outs}")]
    BadLayerSizes {
        n_inps: usize,
        n_hids: usize,
        n_outs: usize,
    },

    /// The weight blob does not match the layer geometry.
    #[error("weight blob has {got} values, layout requires exactly {want}")]
    WeightCount { got: usize, want: usize },

    /// The feature vector is shorter than the input layer.
    #[error("feature vector has {got} entries, need at least {want}")]
    FeatureCount { got: usize, want: usize },

    /// An activation name outside {linear, sigmoid, sinusoid}.
    #[error("unknown activation function {0:?}")]
    UnknownActivation(String),
}
