//! Record traits and types for reconstructed event data.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Core data structure for a reconstructed particle (particle flow object).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReconstructedParticle {
    /// Energy in GeV.
    pub energy: f64,
    /// Momentum components (px, py, pz) in GeV.
    pub momentum: [f64; 3],
    /// Electric charge in units of e.
    pub charge: f64,
    /// Invariant mass in GeV.
    pub mass: f64,
    /// PDG particle code.
    pub pdg: i32,
}

impl ReconstructedParticle {
    /// Creates a new reconstructed particle.
    #[inline]
    #[must_use]
    pub fn new(energy: f64, momentum: [f64; 3], charge: f64, mass: f64, pdg: i32) -> Self {
        Self {
            energy,
            momentum,
            charge,
            mass,
            pdg,
        }
    }

    /// Creates a particle carrying only an energy value.
    #[inline]
    #[must_use]
    pub fn from_energy(energy: f64) -> Self {
        Self::new(energy, [0.0; 3], 0.0, 0.0, 0)
    }

    /// Computes the transverse momentum.
    #[inline]
    #[must_use]
    pub fn pt(&self) -> f64 {
        let [px, py, _] = self.momentum;
        px.hypot(py)
    }
}

/// Trait for particle-like records.
///
/// This trait provides a common interface for different particle
/// representations to expose their kinematics in a uniform way.
pub trait Particle {
    /// Returns the particle energy.
    fn energy(&self) -> f64;

    /// Returns the momentum components (px, py, pz).
    fn momentum(&self) -> [f64; 3];

    /// Returns the electric charge.
    fn charge(&self) -> f64;
}

impl Particle for ReconstructedParticle {
    #[inline]
    fn energy(&self) -> f64 {
        self.energy
    }

    #[inline]
    fn momentum(&self) -> [f64; 3] {
        self.momentum
    }

    #[inline]
    fn charge(&self) -> f64 {
        self.charge
    }
}

impl<T: Particle> Particle for &T {
    #[inline]
    fn energy(&self) -> f64 {
        (**self).energy()
    }

    #[inline]
    fn momentum(&self) -> [f64; 3] {
        (**self).momentum()
    }

    #[inline]
    fn charge(&self) -> f64 {
        (**self).charge()
    }
}

/// Core data structure for a reconstructed track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    /// Transverse impact parameter in mm.
    pub d0: f64,
    /// Longitudinal impact parameter in mm.
    pub z0: f64,
    /// Signed curvature in 1/mm.
    pub omega: f64,
    /// Azimuthal angle at the reference point.
    pub phi: f64,
    /// Tangent of the dip angle.
    pub tan_lambda: f64,
}

impl Track {
    /// Creates a new track.
    #[inline]
    #[must_use]
    pub fn new(d0: f64, z0: f64, omega: f64, phi: f64, tan_lambda: f64) -> Self {
        Self {
            d0,
            z0,
            omega,
            phi,
            tan_lambda,
        }
    }
}

/// Kind of record stored in an event collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecordKind {
    /// Reconstructed particles (particle flow objects).
    ReconstructedParticle,
    /// Reconstructed tracks.
    Track,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReconstructedParticle => write!(f, "ReconstructedParticle"),
            Self::Track => write!(f, "Track"),
        }
    }
}

/// A single element of an event collection.
///
/// Collections declare a record kind but store elements through this
/// enum, so readers check the kind of each element they consume.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Record {
    /// A reconstructed particle.
    Particle(ReconstructedParticle),
    /// A reconstructed track.
    Track(Track),
}

impl Record {
    /// Returns the kind of this record.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Particle(_) => RecordKind::ReconstructedParticle,
            Self::Track(_) => RecordKind::Track,
        }
    }

    /// Returns the particle if this record is one.
    #[inline]
    #[must_use]
    pub fn as_particle(&self) -> Option<&ReconstructedParticle> {
        match self {
            Self::Particle(particle) => Some(particle),
            Self::Track(_) => None,
        }
    }

    /// Returns the track if this record is one.
    #[inline]
    #[must_use]
    pub fn as_track(&self) -> Option<&Track> {
        match self {
            Self::Track(track) => Some(track),
            Self::Particle(_) => None,
        }
    }
}

impl From<ReconstructedParticle> for Record {
    fn from(particle: ReconstructedParticle) -> Self {
        Self::Particle(particle)
    }
}

impl From<Track> for Record {
    fn from(track: Track) -> Self {
        Self::Track(track)
    }
}
