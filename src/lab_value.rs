//! Parser for user-entered 25(OH)D lab values.
//!
//! Accepts a decimal number with an optional unit:
//!
//! - `ng/mL` (default when no unit is given), or the equivalent `ug/L`
//! - `nmol/L`, converted to ng/mL
//!
//! Units are case-insensitive and may be separated from the number by
//! whitespace. The converted value must fall within the plausible domain.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::multispace0,
    combinator::{all_consuming, opt, value},
    number::complete::recognize_float,
    sequence::{delimited, preceded},
    IResult, Parser,
};

use crate::error::LabValueError;
use crate::vitamin_d::{MAX_PLAUSIBLE_NG_ML, MIN_PLAUSIBLE_NG_ML};

/// nmol/L per ng/mL for 25(OH)D.
pub const NMOL_PER_NG: f64 = 2.496;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabUnit {
    NgPerMl,
    NmolPerL,
}

impl LabUnit {
    pub fn to_ng_ml(&self, value: f64) -> f64 {
        match self {
            LabUnit::NgPerMl => value,
            LabUnit::NmolPerL => value / NMOL_PER_NG,
        }
    }
}

fn unit(input: &str) -> IResult<&str, LabUnit> {
    alt((
        value(LabUnit::NgPerMl, tag_no_case("ng/ml")),
        value(LabUnit::NgPerMl, tag_no_case("ug/l")),
        value(LabUnit::NmolPerL, tag_no_case("nmol/l")),
    ))
    .parse(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize_float).parse(input)
}

fn reading(input: &str) -> IResult<&str, (&str, Option<LabUnit>)> {
    all_consuming(delimited(
        multispace0,
        (recognize_float, opt(preceded(multispace0, unit))),
        multispace0,
    ))
    .parse(input)
}

/// Parse a lab value and return it in ng/mL.
pub fn parse_lab_value(input: &str) -> Result<f64, LabValueError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LabValueError::Empty);
    }

    let (digits, unit) = match reading(trimmed) {
        Ok((_, parsed)) => parsed,
        Err(_) => {
            // A number followed by something we don't understand is an
            // unsupported unit; anything else is malformed.
            return Err(match number(trimmed) {
                Ok((rest, _)) => LabValueError::UnknownUnit(rest.trim().to_string()),
                Err(_) => LabValueError::Malformed(trimmed.to_string()),
            });
        }
    };

    let raw: f64 = digits
        .parse()
        .map_err(|_| LabValueError::Malformed(trimmed.to_string()))?;
    let value_ng_ml = unit.unwrap_or(LabUnit::NgPerMl).to_ng_ml(raw);

    if !(MIN_PLAUSIBLE_NG_ML..=MAX_PLAUSIBLE_NG_ML).contains(&value_ng_ml) {
        return Err(LabValueError::OutOfRange {
            value_ng_ml,
            min: MIN_PLAUSIBLE_NG_ML,
            max: MAX_PLAUSIBLE_NG_ML,
        });
    }

    tracing::debug!(input, value_ng_ml, "parsed lab value");
    Ok(value_ng_ml)
}
