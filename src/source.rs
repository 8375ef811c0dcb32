use crate::distribution::AzimuthalDistribution;

/// Track source for one run: every track is drawn independently from the
/// configured azimuthal distribution.
#[derive(Debug, Clone)]
pub struct FlowSource {
    pub angle: AzimuthalDistribution,
}

impl FlowSource {
    /// Elliptic-flow source with anisotropy coefficient `v2`.
    pub fn new(v2: f64) -> Self {
        Self {
            angle: AzimuthalDistribution::new_elliptic_flow(v2),
        }
    }

    /// Isotropic source (weight 1 for every track).
    pub fn isotropic() -> Self {
        Self {
            angle: AzimuthalDistribution::new_isotropic(),
        }
    }

    /// Draw one track's azimuthal angle.
    pub fn sample_phi<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.angle.sample_phi(rng)
    }

    /// Weight of a track emitted at `phi`.
    pub fn weight(&self, phi: f64) -> f64 {
        self.angle.weight(phi)
    }
}
