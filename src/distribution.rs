use rand::Rng;

/// Azimuthal angle distributions - simplified enum approach
///
/// Both variants sample the angle uniformly on [0, 2π); the anisotropy enters
/// through the per-sample weight, not through the sampling density. This is
/// the standard weighted Monte Carlo scheme: fill a histogram with
/// `weight(phi)` for uniformly drawn phi and the accumulated contents follow
/// `f(phi) = 1 + 2 v2 cos(2 (phi - psi2))`.
#[derive(Debug, Clone)]
pub enum AzimuthalDistribution {
    Isotropic,
    EllipticFlow { v2: f64, psi2: f64 },
}

impl AzimuthalDistribution {
    /// Create a new elliptic-flow distribution.
    ///
    /// The reference-plane angle psi2 is fixed at 0: every event is assumed to
    /// have its reaction plane exactly aligned with the lab frame.
    pub fn new_elliptic_flow(v2: f64) -> Self {
        Self::EllipticFlow { v2, psi2: 0.0 }
    }

    /// Create a new isotropic distribution.
    pub fn new_isotropic() -> Self {
        Self::Isotropic
    }

    /// Sample an azimuthal angle phi in [0, 2π) from this distribution.
    pub fn sample_phi<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let xi: f64 = rng.gen();
        2.0 * std::f64::consts::PI * xi
    }

    /// Weight carried by a track emitted at angle `phi`.
    ///
    /// For `EllipticFlow` this can be negative when |v2| > 0.5; such weights
    /// are accumulated as-is.
    pub fn weight(&self, phi: f64) -> f64 {
        match *self {
            AzimuthalDistribution::Isotropic => 1.0,
            AzimuthalDistribution::EllipticFlow { v2, psi2 } => {
                1.0 + 2.0 * v2 * (2.0 * (phi - psi2)).cos()
            }
        }
    }
}
