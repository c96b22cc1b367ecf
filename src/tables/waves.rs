use std::f64::consts::PI;

/// One sampled sinusoid of the DFT basis.
#[derive(Clone, Debug)]
pub struct DftWave {
    pub cos: Vec<f64>,
    pub sin: Vec<f64>,
}

/// Sinusoidal basis used to estimate local ridge frequency and orientation.
///
/// Wave `w` holds `wavelen` samples of frequency `w + 1`, i.e. `w + 1` full
/// periods across the analysis window. Row sums of a rotated window are
/// projected onto each wave; a strong projection at some direction means the
/// ridges oscillate along that direction's normal.
#[derive(Clone, Debug)]
pub struct DftWaves {
    wavelen: usize,
    waves: Vec<DftWave>,
}

impl DftWaves {
    pub fn new(nwaves: usize, wavelen: usize) -> Self {
        let mut waves = Vec::with_capacity(nwaves);
        for w in 0..nwaves {
            let freq = (w + 1) as f64;
            let mut cos = Vec::with_capacity(wavelen);
            let mut sin = Vec::with_capacity(wavelen);
            for j in 0..wavelen {
                let theta = 2.0 * PI * freq * j as f64 / wavelen as f64;
                cos.push(theta.cos());
                sin.push(theta.sin());
            }
            waves.push(DftWave { cos, sin });
        }
        Self { wavelen, waves }
    }

    #[inline]
    pub fn wavelen(&self) -> usize {
        self.wavelen
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    #[inline]
    pub fn wave(&self, w: usize) -> &DftWave {
        &self.waves[w]
    }

    /// Power of `rowsums` projected onto wave `w`.
    pub fn power(&self, w: usize, rowsums: &[f64]) -> f64 {
        let wave = &self.waves[w];
        let mut cos_part = 0.0;
        let mut sin_part = 0.0;
        for (j, &r) in rowsums.iter().enumerate() {
            cos_part += r * wave.cos[j];
            sin_part += r * wave.sin[j];
        }
        cos_part * cos_part + sin_part * sin_part
    }
}
