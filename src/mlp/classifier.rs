use super::Activation;
use crate::error::MlpError;
use serde::Serialize;

/// Static upper bound on the hidden-layer width.
pub const MAX_HIDDEN: usize = 1000;

/// Result of running the classifier on one feature vector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Output activations, one per class.
    pub activations: Vec<f64>,
    /// Index of the most strongly activated class.
    pub hyp_class: usize,
    /// The activation at `hyp_class`.
    pub confidence: f64,
}

/// Two-layer perceptron with fixed geometry and activation selectors.
///
/// Construction validates the geometry; [`classify`](Self::classify)
/// validates the weight blob and feature vector against it. Every invalid
/// input is reported as an [`MlpError`] — the classifier never aborts the
/// process.
#[derive(Clone, Copy, Debug)]
pub struct MlpClassifier {
    n_inps: usize,
    n_hids: usize,
    n_outs: usize,
    hidden_act: Activation,
    output_act: Activation,
}

impl MlpClassifier {
    pub fn new(
        n_inps: usize,
        n_hids: usize,
        n_outs: usize,
        hidden_act: Activation,
        output_act: Activation,
    ) -> Result<Self, MlpError> {
        if n_inps == 0 || n_hids == 0 || n_outs == 0 {
            return Err(MlpError::BadLayerSizes {
                n_inps,
                n_hids,
                n_outs,
            });
        }
        if n_hids > MAX_HIDDEN {
            return Err(MlpError::TooManyHidden {
                got: n_hids,
                limit: MAX_HIDDEN,
            });
        }
        Ok(Self {
            n_inps,
            n_hids,
            n_outs,
            hidden_act,
            output_act,
        })
    }

    #[inline]
    pub fn n_inps(&self) -> usize {
        self.n_inps
    }

    #[inline]
    pub fn n_outs(&self) -> usize {
        self.n_outs
    }

    /// Exact number of values the weight blob must hold:
    /// `n_hids·n_inps + n_hids + n_outs·n_hids + n_outs`.
    pub fn weight_count(&self) -> usize {
        self.n_hids * self.n_inps + self.n_hids + self.n_outs * self.n_hids + self.n_outs
    }

    /// Run the network on the first `n_inps` entries of `features`.
    pub fn classify(
        &self,
        weights: &[f64],
        features: &[f64],
    ) -> Result<Classification, MlpError> {
        let want = self.weight_count();
        if weights.len() != want {
            return Err(MlpError::WeightCount {
                got: weights.len(),
                want,
            });
        }
        if features.len() < self.n_inps {
            return Err(MlpError::FeatureCount {
                got: features.len(),
                want: self.n_inps,
            });
        }

        // Where the weights and biases of the two layers begin in the blob.
        let w1_end = self.n_hids * self.n_inps;
        let b1_end = w1_end + self.n_hids;
        let w2_end = b1_end + self.n_outs * self.n_hids;
        let w1 = &weights[..w1_end];
        let b1 = &weights[w1_end..b1_end];
        let w2 = &weights[b1_end..w2_end];
        let b2 = &weights[w2_end..];

        // Hidden activations start out as first-layer biases, then gain the
        // product of the first-layer weights with the feature vector.
        let mut hidden = b1.to_vec();
        for (h, acc) in hidden.iter_mut().enumerate() {
            let row = &w1[h * self.n_inps..(h + 1) * self.n_inps];
            let mut sum = 0.0;
            for (w, f) in row.iter().zip(&features[..self.n_inps]) {
                sum += w * f;
            }
            *acc += sum;
        }
        self.hidden_act.apply_slice(&mut hidden);

        // Same steps again for the second layer.
        let mut output = b2.to_vec();
        for (o, acc) in output.iter_mut().enumerate() {
            let row = &w2[o * self.n_hids..(o + 1) * self.n_hids];
            let mut sum = 0.0;
            for (w, hval) in row.iter().zip(&hidden) {
                sum += w * hval;
            }
            *acc += sum;
        }
        self.output_act.apply_slice(&mut output);

        // Hypothetical class: the most strongly activated output node.
        // Strict comparison keeps the first of equal maxima.
        let mut hyp_class = 0usize;
        let mut confidence = output[0];
        for (idx, &ac) in output.iter().enumerate().skip(1) {
            if ac > confidence {
                confidence = ac;
                hyp_class = idx;
            }
        }

        Ok(Classification {
            activations: output,
            hyp_class,
            confidence,
        })
    }
}
