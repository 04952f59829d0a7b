//! Per-room input snapshot.
//!
//! [`RoomInput`] is the record an external room source hands to the engine.
//! It deserializes from the loosely-typed payloads the legacy room forms
//! produce: numeric fields accept numbers, numeric strings, blank strings,
//! nulls or anything else, and coerce everything non-numeric to zero. An
//! incomplete form must never abort a calculation run; a malformed field
//! contributes no gain instead. Field aliases accept the original Portuguese
//! form names.

use crate::constants::keys;
use crate::FloatValue;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Compass orientation of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    West,
    East,
    North,
    South,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::West,
        Orientation::East,
        Orientation::North,
        Orientation::South,
    ];

    /// Constant key of the design temperature differential for this wall.
    pub fn delta_t_key(self) -> &'static str {
        match self {
            Orientation::West => keys::DELTA_T_PAREDE_OESTE,
            Orientation::East => keys::DELTA_T_PAREDE_LESTE,
            Orientation::North => keys::DELTA_T_PAREDE_NORTE,
            Orientation::South => keys::DELTA_T_PAREDE_SUL,
        }
    }
}

/// Class of an interior partition, by what sits on the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionClass {
    UnconditionedA,
    UnconditionedB,
    ConditionedA,
    ConditionedB,
}

impl PartitionClass {
    pub const ALL: [PartitionClass; 4] = [
        PartitionClass::UnconditionedA,
        PartitionClass::UnconditionedB,
        PartitionClass::ConditionedA,
        PartitionClass::ConditionedB,
    ];

    /// Constant key of the design temperature differential for this class.
    pub fn delta_t_key(self) -> &'static str {
        match self {
            PartitionClass::UnconditionedA => keys::DELTA_T_DIVISORIA_NC1,
            PartitionClass::UnconditionedB => keys::DELTA_T_DIVISORIA_NC2,
            PartitionClass::ConditionedA => keys::DELTA_T_DIVISORIA_C1,
            PartitionClass::ConditionedB => keys::DELTA_T_DIVISORIA_C2,
        }
    }
}

/// Construction material of the room envelope.
///
/// Only two types carry thermal transmittance data; everything else maps to
/// [`ConstructionType::Unknown`], which yields zero wall and ceiling
/// coefficients rather than blocking the run on one bad field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConstructionType {
    /// Prefabricated electrical house (e-house) panels.
    Eletrocentro,
    /// Conventional masonry.
    Alvenaria,
    #[default]
    Unknown,
}

impl ConstructionType {
    /// Parse a construction tag. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "eletrocentro" => ConstructionType::Eletrocentro,
            "alvenaria" => ConstructionType::Alvenaria,
            _ => ConstructionType::Unknown,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            ConstructionType::Eletrocentro => "eletrocentro",
            ConstructionType::Alvenaria => "alvenaria",
            ConstructionType::Unknown => "unknown",
        }
    }
}

impl From<String> for ConstructionType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ConstructionType> for String {
    fn from(construction: ConstructionType) -> Self {
        construction.as_tag().to_owned()
    }
}

/// Wall length per orientation, metres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallLengths {
    #[serde(alias = "oeste", deserialize_with = "safe_number")]
    pub west: FloatValue,
    #[serde(alias = "leste", deserialize_with = "safe_number")]
    pub east: FloatValue,
    #[serde(alias = "norte", deserialize_with = "safe_number")]
    pub north: FloatValue,
    #[serde(alias = "sul", deserialize_with = "safe_number")]
    pub south: FloatValue,
}

impl WallLengths {
    pub fn get(&self, orientation: Orientation) -> FloatValue {
        match orientation {
            Orientation::West => self.west,
            Orientation::East => self.east,
            Orientation::North => self.north,
            Orientation::South => self.south,
        }
    }
}

/// Partition length per class, metres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionLengths {
    #[serde(alias = "divisoria_nc1", deserialize_with = "safe_number")]
    pub unconditioned_a: FloatValue,
    #[serde(alias = "divisoria_nc2", deserialize_with = "safe_number")]
    pub unconditioned_b: FloatValue,
    #[serde(alias = "divisoria_c1", deserialize_with = "safe_number")]
    pub conditioned_a: FloatValue,
    #[serde(alias = "divisoria_c2", deserialize_with = "safe_number")]
    pub conditioned_b: FloatValue,
}

impl PartitionLengths {
    pub fn get(&self, class: PartitionClass) -> FloatValue {
        match class {
            PartitionClass::UnconditionedA => self.unconditioned_a,
            PartitionClass::UnconditionedB => self.unconditioned_b,
            PartitionClass::ConditionedA => self.conditioned_a,
            PartitionClass::ConditionedB => self.conditioned_b,
        }
    }
}

/// Physical description of one climatized room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomInput {
    /// Floor area, m^2.
    #[serde(alias = "area", deserialize_with = "safe_number")]
    pub floor_area: FloatValue,
    /// Ceiling height, m.
    #[serde(alias = "pe_direito", deserialize_with = "safe_number")]
    pub ceiling_height: FloatValue,
    #[serde(alias = "paredes")]
    pub walls: WallLengths,
    #[serde(alias = "divisorias")]
    pub partitions: PartitionLengths,
    #[serde(alias = "tipo_construcao", deserialize_with = "lenient_construction")]
    pub construction: ConstructionType,
    /// Occupant count.
    #[serde(alias = "pessoas", deserialize_with = "safe_number")]
    pub occupants: FloatValue,
    /// Rated panel dissipation, kW.
    #[serde(alias = "dissipacao_kw", deserialize_with = "safe_number")]
    pub equipment_kw: FloatValue,
    /// Outside-air flow, L/s.
    #[serde(alias = "vazao_ar_externo", deserialize_with = "safe_number")]
    pub outside_air_flow: FloatValue,
    /// Whether the room is kept pressurized with outside air.
    #[serde(alias = "pressurizacao")]
    pub pressurized: bool,
    /// Whether a dedicated temperature setpoint applies to this room.
    #[serde(alias = "setpoint")]
    pub setpoint_enabled: bool,
}

impl RoomInput {
    /// A copy with every non-finite numeric field coerced to zero.
    ///
    /// Deserialized inputs are already safe; this covers records built in
    /// code by a room source.
    pub fn sanitized(&self) -> Self {
        Self {
            floor_area: safe(self.floor_area),
            ceiling_height: safe(self.ceiling_height),
            walls: WallLengths {
                west: safe(self.walls.west),
                east: safe(self.walls.east),
                north: safe(self.walls.north),
                south: safe(self.walls.south),
            },
            partitions: PartitionLengths {
                unconditioned_a: safe(self.partitions.unconditioned_a),
                unconditioned_b: safe(self.partitions.unconditioned_b),
                conditioned_a: safe(self.partitions.conditioned_a),
                conditioned_b: safe(self.partitions.conditioned_b),
            },
            construction: self.construction,
            occupants: safe(self.occupants),
            equipment_kw: safe(self.equipment_kw),
            outside_air_flow: safe(self.outside_air_flow),
            pressurized: self.pressurized,
            setpoint_enabled: self.setpoint_enabled,
        }
    }
}

fn safe(value: FloatValue) -> FloatValue {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Lenient construction-tag deserialization: any non-string value maps to
/// [`ConstructionType::Unknown`] instead of failing the whole record.
fn lenient_construction<'de, D>(deserializer: D) -> Result<ConstructionType, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(tag)) => ConstructionType::from_tag(&tag),
        Some(Raw::Other(_)) | None => ConstructionType::Unknown,
    })
}

/// Lenient numeric deserialization: numbers pass through, numeric strings are
/// parsed, everything else (blank strings, nulls, malformed values) becomes
/// zero.
fn safe_number<'de, D>(deserializer: D) -> Result<FloatValue, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(FloatValue),
        Text(String),
        Other(IgnoredAny),
    }

    let value = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(number)) => number,
        Some(Raw::Text(text)) => text.trim().parse::<FloatValue>().unwrap_or(0.0),
        Some(Raw::Other(_)) | None => 0.0,
    };
    Ok(safe(value))
}
