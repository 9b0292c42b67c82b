//! Geografischer Begrenzungsrahmen der Karte.

use glam::DVec2;

/// Rechteckiger Geo-Rahmen in Breiten-/Längengrad.
///
/// Konvention im gesamten Projekt: `DVec2.x` = Breitengrad (lat),
/// `DVec2.y` = Längengrad (lng).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Südwest-Ecke (minimale lat/lng)
    pub south_west: DVec2,
    /// Nordost-Ecke (maximale lat/lng)
    pub north_east: DVec2,
}

impl GeoBounds {
    /// `true` wenn die Position innerhalb des Rahmens liegt (inklusiv).
    pub fn contains(&self, position: DVec2) -> bool {
        position.x >= self.south_west.x
            && position.x <= self.north_east.x
            && position.y >= self.south_west.y
            && position.y <= self.north_east.y
    }

    /// Begrenzt eine Position auf den Rahmen.
    pub fn clamp(&self, position: DVec2) -> DVec2 {
        position.clamp(self.south_west, self.north_east)
    }

    /// Ausdehnung (Δlat, Δlng).
    pub fn span(&self) -> DVec2 {
        self.north_east - self.south_west
    }

    /// Mittelpunkt des Rahmens.
    pub fn center(&self) -> DVec2 {
        (self.south_west + self.north_east) * 0.5
    }
}
