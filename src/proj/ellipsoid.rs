/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major (equatorial) axis (metres)
    pub a: f64,
    /// First eccentricity squared
    pub e2: f64,
}

impl Ellipsoid {
    /// Build from the equatorial radius and the first eccentricity squared.
    pub const fn new(a: f64, e2: f64) -> Self {
        Self { a, e2 }
    }

    /// Meridional radius of curvature ρ(φ) = a(1 - e²) / (1 - e² sin²φ)^1.5.
    pub fn meridional_radius(&self, phi: f64) -> f64 {
        let sin_phi = phi.sin();
        self.a * (1.0 - self.e2) / (1.0 - self.e2 * sin_phi * sin_phi).powf(1.5)
    }

    /// Radius of the parallel circle at latitude φ: a cosφ / sqrt(1 - e² sin²φ).
    pub fn parallel_radius(&self, phi: f64) -> f64 {
        let sin_phi = phi.sin();
        self.a * phi.cos() / (1.0 - self.e2 * sin_phi * sin_phi).sqrt()
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 0.006_694_379_990_14);
