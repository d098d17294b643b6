//! Basic astrodynamics relations.

use std::f64::consts::PI;

/// Universal gravitational constant (m^3 kg^-1 s^-2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67259e-11;

/// Mass of a homogeneous sphere of the given radius (m) and bulk density (kg/m^3).
pub fn mass_of_sphere(radius: f64, bulk_density: f64) -> f64 {
    radius.powi(3) * 4.0 / 3.0 * PI * bulk_density
}

/// Gravitational parameter (m^3/s^2) of a body of the given mass (kg).
pub fn gravitational_parameter(mass: f64) -> f64 {
    mass * GRAVITATIONAL_CONSTANT
}

/// Converts distances expressed in Hill radii of an orbiting body to meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HillRadii {
    pub central_mu: f64,
    pub orbiting_mu: f64,
    pub semi_major_axis: f64,
}

impl HillRadii {
    pub fn new(central_mu: f64, orbiting_mu: f64, semi_major_axis: f64) -> Self {
        Self {
            central_mu,
            orbiting_mu,
            semi_major_axis,
        }
    }

    /// Radius of one Hill sphere in meters.
    pub fn radius(&self) -> f64 {
        self.semi_major_axis * (self.orbiting_mu / (3.0 * self.central_mu)).cbrt()
    }

    pub fn to_meters(&self, n_hill_radii: f64) -> f64 {
        n_hill_radii * self.radius()
    }
}
