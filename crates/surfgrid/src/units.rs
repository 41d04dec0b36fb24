//! Unit rescaling for node coordinates and pressure-like result fields.
//!
//! Conversion is a plain multiplicative rescale, order-independent with
//! respect to geometry derivation. Unit names are matched exactly;
//! unrecognized names fail the load with a conversion error.

use glam::DVec3;
use surfgrid_core::{Result, SurfgridError};

fn length_factor(unit: &str) -> Result<f64> {
    // Factors to meters.
    match unit {
        "m" => Ok(1.0),
        "cm" => Ok(0.01),
        "mm" => Ok(0.001),
        "ft" => Ok(0.3048),
        "in" => Ok(0.0254),
        _ => Err(SurfgridError::Conversion {
            quantity: "length",
            unit: unit.to_string(),
        }),
    }
}

fn pressure_factor(unit: &str) -> Result<f64> {
    // Factors to pascals.
    match unit {
        "Pa" => Ok(1.0),
        "kPa" => Ok(1.0e3),
        "MPa" => Ok(1.0e6),
        "psi" => Ok(6894.757_293_168_361),
        "psf" => Ok(47.880_258_980_335_84),
        _ => Err(SurfgridError::Conversion {
            quantity: "pressure",
            unit: unit.to_string(),
        }),
    }
}

/// Returns the multiplier taking length values from `from` units to `to` units.
pub fn length_scale(from: &str, to: &str) -> Result<f64> {
    Ok(length_factor(from)? / length_factor(to)?)
}

/// Returns the multiplier taking pressure values from `from` units to `to` units.
pub fn pressure_scale(from: &str, to: &str) -> Result<f64> {
    Ok(pressure_factor(from)? / pressure_factor(to)?)
}

/// Rescales node coordinates in place.
pub fn convert_length(xyz: &mut [DVec3], from: &str, to: &str) -> Result<()> {
    let scale = length_scale(from, to)?;
    for p in xyz.iter_mut() {
        *p *= scale;
    }
    Ok(())
}

/// Rescales a scalar pressure array in place.
pub fn convert_pressure(values: &mut [f64], from: &str, to: &str) -> Result<()> {
    let scale = pressure_scale(from, to)?;
    for v in values.iter_mut() {
        *v *= scale;
    }
    Ok(())
}
