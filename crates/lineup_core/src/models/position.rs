use schemars::gen::SchemaGenerator;
use schemars::schema::{
    InstanceType, NumberValidation, Schema, SchemaObject, SubschemaValidation,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine numbered defensive positions, in scorekeeping order (1 = pitcher ... 9 = right field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPosition {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
}

impl FieldPosition {
    pub const ALL: [FieldPosition; 9] = [
        FieldPosition::Pitcher,
        FieldPosition::Catcher,
        FieldPosition::FirstBase,
        FieldPosition::SecondBase,
        FieldPosition::ThirdBase,
        FieldPosition::Shortstop,
        FieldPosition::LeftField,
        FieldPosition::CenterField,
        FieldPosition::RightField,
    ];

    /// Decode from the scorekeeping number (1..=9).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            FieldPosition::Pitcher => 1,
            FieldPosition::Catcher => 2,
            FieldPosition::FirstBase => 3,
            FieldPosition::SecondBase => 4,
            FieldPosition::ThirdBase => 5,
            FieldPosition::Shortstop => 6,
            FieldPosition::LeftField => 7,
            FieldPosition::CenterField => 8,
            FieldPosition::RightField => 9,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            FieldPosition::Pitcher => "P",
            FieldPosition::Catcher => "C",
            FieldPosition::FirstBase => "1B",
            FieldPosition::SecondBase => "2B",
            FieldPosition::ThirdBase => "3B",
            FieldPosition::Shortstop => "SS",
            FieldPosition::LeftField => "LF",
            FieldPosition::CenterField => "CF",
            FieldPosition::RightField => "RF",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldPosition::Pitcher => "Pitcher",
            FieldPosition::Catcher => "Catcher",
            FieldPosition::FirstBase => "First Base",
            FieldPosition::SecondBase => "Second Base",
            FieldPosition::ThirdBase => "Third Base",
            FieldPosition::Shortstop => "Shortstop",
            FieldPosition::LeftField => "Left Field",
            FieldPosition::CenterField => "Center Field",
            FieldPosition::RightField => "Right Field",
        }
    }
}

/// Where a starter plays in the field.
///
/// Wire form is a string code: `"1"`..`"9"`, `"DP"`, `"FP"` or `""` (unassigned).
/// Bare integers `1..=9` are accepted on input as well. Equality is by tag and value,
/// so `Unassigned` never compares equal to any numbered position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "String")]
pub enum Position {
    Field(FieldPosition),
    /// Bats without a defensive assignment.
    DesignatedPlayer,
    /// Fields without batting (the slot-10 partner of the designated player).
    FlexPlayer,
    #[default]
    Unassigned,
}

impl Position {
    pub const DESIGNATED_CODE: &'static str = "DP";
    pub const FLEX_CODE: &'static str = "FP";

    /// Choices offered by the starting-lineup position selector.
    pub fn selectable() -> impl Iterator<Item = Position> {
        FieldPosition::ALL
            .into_iter()
            .map(Position::Field)
            .chain(std::iter::once(Position::DesignatedPlayer))
    }

    pub fn is_assigned(&self) -> bool {
        !matches!(self, Position::Unassigned)
    }

    pub fn is_designated(&self) -> bool {
        matches!(self, Position::DesignatedPlayer)
    }

    pub fn field_position(&self) -> Option<FieldPosition> {
        match self {
            Position::Field(field) => Some(*field),
            _ => None,
        }
    }

    pub fn code(&self) -> String {
        match self {
            Position::Field(field) => field.number().to_string(),
            Position::DesignatedPlayer => Self::DESIGNATED_CODE.to_string(),
            Position::FlexPlayer => Self::FLEX_CODE.to_string(),
            Position::Unassigned => String::new(),
        }
    }

    /// Short human label ("SS", "DP", "--").
    pub fn label(&self) -> &'static str {
        match self {
            Position::Field(field) => field.abbreviation(),
            Position::DesignatedPlayer => Self::DESIGNATED_CODE,
            Position::FlexPlayer => Self::FLEX_CODE,
            Position::Unassigned => "--",
        }
    }
}

impl From<FieldPosition> for Position {
    fn from(field: FieldPosition) -> Self {
        Position::Field(field)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Ok(Position::Unassigned);
        }
        match code.to_uppercase().as_str() {
            Self::DESIGNATED_CODE => Ok(Position::DesignatedPlayer),
            Self::FLEX_CODE => Ok(Position::FlexPlayer),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(FieldPosition::from_number)
                .map(Position::Field)
                .ok_or_else(|| format!("Invalid position: {}", s)),
        }
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.code()
    }
}

/// Input shape before normalization: lineups authored by hand mix numbers and strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPosition {
    Number(u8),
    Text(String),
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        match raw {
            RawPosition::Number(number) => FieldPosition::from_number(number)
                .map(Position::Field)
                .ok_or_else(|| format!("Invalid position: {}", number)),
            RawPosition::Text(text) => text.parse(),
        }
    }
}

impl JsonSchema for Position {
    fn schema_name() -> String {
        "Position".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        let codes: Vec<serde_json::Value> = FieldPosition::ALL
            .iter()
            .map(|field| field.number().to_string())
            .chain([Self::DESIGNATED_CODE, Self::FLEX_CODE, ""].map(String::from))
            .map(serde_json::Value::from)
            .collect();

        let text = Schema::Object(SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            enum_values: Some(codes),
            ..Default::default()
        });
        let number = Schema::Object(SchemaObject {
            instance_type: Some(InstanceType::Integer.into()),
            number: Some(Box::new(NumberValidation {
                minimum: Some(1.0),
                maximum: Some(9.0),
                ..Default::default()
            })),
            ..Default::default()
        });

        Schema::Object(SchemaObject {
            subschemas: Some(Box::new(SubschemaValidation {
                one_of: Some(vec![text, number]),
                ..Default::default()
            })),
            ..Default::default()
        })
    }
}
