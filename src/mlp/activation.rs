use crate::error::MlpError;
use serde::{Deserialize, Serialize};

/// Elementwise activation applied to a network layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Identity.
    Linear,
    /// Logistic squashing to (0, 1).
    Sigmoid,
    /// Sine-based squashing to [0, 1]; the formula the original model was
    /// trained with, reproduced exactly.
    Sinusoid,
}

impl Activation {
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Activation::Linear => v,
            Activation::Sigmoid => 1.0 / (1.0 + (-v).exp()),
            Activation::Sinusoid => 0.5 * (1.0 + v.sin()),
        }
    }

    pub(crate) fn apply_slice(self, values: &mut [f64]) {
        for v in values.iter_mut() {
            *v = self.apply(*v);
        }
    }

    /// Parse a config-file name into an activation.
    pub fn from_name(name: &str) -> Result<Self, MlpError> {
        match name {
            "linear" => Ok(Activation::Linear),
            "sigmoid" => Ok(Activation::Sigmoid),
            "sinusoid" => Ok(Activation::Sinusoid),
            other => Err(MlpError::UnknownActivation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formulas_match_the_trained_model() {
        assert_eq!(Activation::Linear.apply(-3.25), -3.25);
        assert!((Activation::Sigmoid.apply(0.0) - 0.5).abs() < 1e-12);
        assert!((Activation::Sigmoid.apply(2.0) - 0.880_797_077_977_882_3).abs() < 1e-12);
        assert!((Activation::Sinusoid.apply(0.0) - 0.5).abs() < 1e-12);
        let v = 1.3f64;
        assert!((Activation::Sinusoid.apply(v) - 0.5 * (1.0 + v.sin())).abs() < 1e-15);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            Activation::from_name("tanh"),
            Err(MlpError::UnknownActivation("tanh".to_string()))
        );
        assert_eq!(Activation::from_name("sinusoid"), Ok(Activation::Sinusoid));
    }
}
