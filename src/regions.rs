//! Region Catalog: Chile's first-level administrative subdivisions.
//!
//! Static `{value, label}` table in north-to-south order, the way the
//! selector presents it. Codes are the customary roman numerals plus `RM`
//! for the metropolitan region.

/// A selectable region: short code plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    /// Short code stored in the address record
    pub value: &'static str,
    /// Human-readable label shown in the selector
    pub label: &'static str,
}

/// The sixteen Chilean regions, north to south.
pub const CHILEAN_REGIONS: &[RegionEntry] = &[
    RegionEntry { value: "XV", label: "Arica y Parinacota" },
    RegionEntry { value: "I", label: "Tarapacá" },
    RegionEntry { value: "II", label: "Antofagasta" },
    RegionEntry { value: "III", label: "Atacama" },
    RegionEntry { value: "IV", label: "Coquimbo" },
    RegionEntry { value: "V", label: "Valparaíso" },
    RegionEntry { value: "RM", label: "Metropolitana de Santiago" },
    RegionEntry { value: "VI", label: "Libertador General Bernardo O'Higgins" },
    RegionEntry { value: "VII", label: "Maule" },
    RegionEntry { value: "XVI", label: "Ñuble" },
    RegionEntry { value: "VIII", label: "Biobío" },
    RegionEntry { value: "IX", label: "La Araucanía" },
    RegionEntry { value: "XIV", label: "Los Ríos" },
    RegionEntry { value: "X", label: "Los Lagos" },
    RegionEntry { value: "XI", label: "Aysén del General Carlos Ibáñez del Campo" },
    RegionEntry { value: "XII", label: "Magallanes y de la Antártica Chilena" },
];

/// Look up a region by its code. Returns `None` for codes not in the catalog.
pub fn region_by_code(code: &str) -> Option<&'static RegionEntry> {
    CHILEAN_REGIONS.iter().find(|r| r.value == code)
}

/// Whether a code names a catalog region.
pub fn is_valid_region(code: &str) -> bool {
    region_by_code(code).is_some()
}
