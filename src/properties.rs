use crate::error::{Error, Result};
use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Discrete tissue type that is assigned to a voxel.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentationClass {
    Generic = -1,
    Air = 0,
    Muscle = 1,
    Bone = 2,
    Blood = 3,
    Epidermis = 4,
    Dermis = 5,
    Fat = 6,
    UltrasoundGel = 7,
    Water = 8,
    HeavyWater = 9,
    Mediprene = 10,
    Artery = 11,
    Vein = 12,
    RandomArtery = 13,
    RandomVein = 14,
}

static SEGMENTATION_CLASSES: phf::Map<&'static str, SegmentationClass> = phf_map! {
    "generic" => SegmentationClass::Generic,
    "air" => SegmentationClass::Air,
    "muscle" => SegmentationClass::Muscle,
    "bone" => SegmentationClass::Bone,
    "blood" => SegmentationClass::Blood,
    "epidermis" => SegmentationClass::Epidermis,
    "dermis" => SegmentationClass::Dermis,
    "fat" => SegmentationClass::Fat,
    "ultrasound_gel" => SegmentationClass::UltrasoundGel,
    "water" => SegmentationClass::Water,
    "heavy_water" => SegmentationClass::HeavyWater,
    "mediprene" => SegmentationClass::Mediprene,
    "artery" => SegmentationClass::Artery,
    "vein" => SegmentationClass::Vein,
    "random_artery" => SegmentationClass::RandomArtery,
    "random_vein" => SegmentationClass::RandomVein,
};

impl SegmentationClass {
    /// The integer label that is written into the segmentation volume.
    pub fn label(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        SEGMENTATION_CLASSES
            .entries()
            .find(|(_, class)| **class == self)
            .map(|(name, _)| *name)
            .unwrap_or("generic")
    }
}

impl FromStr for SegmentationClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SEGMENTATION_CLASSES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownSegmentation(s.to_owned()))
    }
}

impl fmt::Display for SegmentationClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for SegmentationClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SegmentationClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name: String = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// The continuous per-voxel properties that are composited into the volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    AbsorptionPerCm,
    ScatteringPerCm,
    Anisotropy,
    GruneisenParameter,
    Density,
    SpeedOfSound,
    AlphaCoefficient,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 7] = [
        PropertyKind::AbsorptionPerCm,
        PropertyKind::ScatteringPerCm,
        PropertyKind::Anisotropy,
        PropertyKind::GruneisenParameter,
        PropertyKind::Density,
        PropertyKind::SpeedOfSound,
        PropertyKind::AlphaCoefficient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropertyKind::AbsorptionPerCm => "mua",
            PropertyKind::ScatteringPerCm => "mus",
            PropertyKind::Anisotropy => "g",
            PropertyKind::GruneisenParameter => "gamma",
            PropertyKind::Density => "density",
            PropertyKind::SpeedOfSound => "sos",
            PropertyKind::AlphaCoefficient => "alpha_coeff",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bulk properties of a tissue, either as the aggregate of a molecular
/// composition or resolved for a single wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TissueProperties {
    pub absorption_per_cm: f64,
    pub scattering_per_cm: f64,
    pub anisotropy: f64,
    pub gruneisen_parameter: f64,
    pub density: f64,
    pub speed_of_sound: f64,
    pub alpha_coefficient: f64,
    pub volume_fraction: f64,
    pub oxygenation: Option<f64>,
    pub segmentation: Option<SegmentationClass>,
}

impl TissueProperties {
    pub fn get(&self, kind: PropertyKind) -> f64 {
        match kind {
            PropertyKind::AbsorptionPerCm => self.absorption_per_cm,
            PropertyKind::ScatteringPerCm => self.scattering_per_cm,
            PropertyKind::Anisotropy => self.anisotropy,
            PropertyKind::GruneisenParameter => self.gruneisen_parameter,
            PropertyKind::Density => self.density,
            PropertyKind::SpeedOfSound => self.speed_of_sound,
            PropertyKind::AlphaCoefficient => self.alpha_coefficient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segmentation_names_round_trip() {
        for (name, class) in SEGMENTATION_CLASSES.entries() {
            assert_eq!(class.name(), *name);
            assert_eq!(name.parse::<SegmentationClass>().unwrap(), *class);
        }
        assert_eq!(" Muscle ".parse::<SegmentationClass>().unwrap(), SegmentationClass::Muscle);
        assert_eq!(SegmentationClass::Generic.label(), -1);
        assert_eq!(SegmentationClass::RandomVein.label(), 14);
    }

    #[test]
    fn unknown_segmentation() {
        let result = "cartilage".parse::<SegmentationClass>();
        assert!(matches!(result, Err(Error::UnknownSegmentation(_))));
    }

    #[test]
    fn property_lookup_by_kind() {
        let properties = TissueProperties {
            absorption_per_cm: 1.0,
            scattering_per_cm: 2.0,
            anisotropy: 3.0,
            gruneisen_parameter: 4.0,
            density: 5.0,
            speed_of_sound: 6.0,
            alpha_coefficient: 7.0,
            ..TissueProperties::default()
        };
        let values: Vec<f64> = PropertyKind::ALL.iter().map(|k| properties.get(*k)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }
}
