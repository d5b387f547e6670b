//! Input encoder: raw soil sample → classifier feature row
//!
//! Substitutes the categorical selections with their integer codes and
//! guards the numeric fields against the model's training ranges. The HTTP
//! surface is open, so range enforcement happens here rather than relying
//! on the form widgets alone.

use thiserror::Error;

use crate::types::{input_bounds, FeatureVector, SoilSample};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("{field} = {value} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} is not a number")]
    NotANumber { field: &'static str },
}

/// Check one numeric field against its inclusive range.
fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), EncodeError> {
    if value.is_nan() {
        return Err(EncodeError::NotANumber { field });
    }
    if value < min || value > max {
        return Err(EncodeError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Encode a raw sample into the fixed 7-column feature row.
///
/// Column order (temperature, humidity, ph, ec, organic_carbon, soil code,
/// crop code) is an implicit contract with the model artifact. No side
/// effects; the sample is read once and a fresh row is returned.
pub fn encode(sample: &SoilSample) -> Result<FeatureVector, EncodeError> {
    check_range("temperature", sample.temperature, input_bounds::TEMPERATURE)?;
    check_range("humidity", sample.humidity, input_bounds::HUMIDITY)?;
    check_range("ph", sample.ph, input_bounds::PH)?;
    check_range("ec", sample.ec, input_bounds::EC)?;
    check_range(
        "organic_carbon",
        sample.organic_carbon,
        input_bounds::ORGANIC_CARBON,
    )?;

    Ok(FeatureVector::new([
        sample.temperature,
        sample.humidity,
        sample.ph,
        sample.ec,
        sample.organic_carbon,
        f64::from(sample.soil_type.code()),
        f64::from(sample.crop_type.code()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CropType, SoilType};

    fn valid_sample() -> SoilSample {
        SoilSample {
            temperature: 25.0,
            humidity: 60.0,
            ph: 6.5,
            ec: 1.2,
            organic_carbon: 1.0,
            soil_type: SoilType::Clay,
            crop_type: CropType::Maize,
        }
    }

    #[test]
    fn categorical_portion_uses_integer_codes() {
        // Clay = 1, Maize = 2
        let row = encode(&valid_sample()).unwrap();
        assert_eq!(row.feature(5), Some(1.0));
        assert_eq!(row.feature(6), Some(2.0));
    }

    #[test]
    fn numeric_fields_pass_through_in_order() {
        let row = encode(&valid_sample()).unwrap();
        assert_eq!(
            row.as_row(),
            &[25.0, 60.0, 6.5, 1.2, 1.0, 1.0, 2.0]
        );
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut sample = valid_sample();
        sample.temperature = 10.0;
        sample.humidity = 100.0;
        sample.ph = 3.0;
        sample.ec = 0.0;
        sample.organic_carbon = 3.0;
        assert!(encode(&sample).is_ok());
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut sample = valid_sample();
        sample.temperature = 55.0;
        let err = encode(&sample).unwrap_err();
        assert_eq!(
            err,
            EncodeError::OutOfRange {
                field: "temperature",
                value: 55.0,
                min: 10.0,
                max: 50.0,
            }
        );
    }

    #[test]
    fn nan_is_rejected() {
        let mut sample = valid_sample();
        sample.ph = f64::NAN;
        assert_eq!(
            encode(&sample).unwrap_err(),
            EncodeError::NotANumber { field: "ph" }
        );
    }
}
