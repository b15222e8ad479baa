use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::core::{Result, ValidationError};
use crate::modules::taxes::models::TaxBreakdown;

/// TaxCalculator turns a base amount and a GST percentage into a breakdown
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate GST on a base amount
    ///
    /// gst_amount = base_amount × gst_rate / 100, total_amount = base_amount + gst_amount.
    /// No rounding is applied here. An amount too large for the result to be
    /// represented is reported as [`ValidationError::InvalidAmount`].
    pub fn calculate(&self, base_amount: Decimal, gst_rate: Decimal) -> Result<TaxBreakdown> {
        // Amount is checked before rate so a form with two bad fields reports the amount
        self.validate_base_amount(base_amount)?;
        self.validate_gst_rate(gst_rate)?;

        let gst_amount = base_amount
            .checked_mul(gst_rate)
            .and_then(|taxed| taxed.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(ValidationError::InvalidAmount)?;
        let total_amount = base_amount
            .checked_add(gst_amount)
            .ok_or(ValidationError::InvalidAmount)?;

        Ok(TaxBreakdown {
            base_amount,
            gst_rate,
            gst_amount,
            total_amount,
        })
    }

    /// Calculate from raw form text. Blank or non-numeric text is invalid.
    pub fn calculate_from_input(&self, base_amount: &str, gst_rate: &str) -> Result<TaxBreakdown> {
        let base_amount = parse_decimal(base_amount).ok_or(ValidationError::InvalidAmount)?;
        let gst_rate = parse_decimal(gst_rate).ok_or(ValidationError::InvalidRate)?;

        self.calculate(base_amount, gst_rate)
    }

    /// Calculate from floating point inputs. NaN and infinities are invalid.
    pub fn calculate_from_f64(&self, base_amount: f64, gst_rate: f64) -> Result<TaxBreakdown> {
        let base_amount = finite_decimal(base_amount).ok_or(ValidationError::InvalidAmount)?;
        let gst_rate = finite_decimal(gst_rate).ok_or(ValidationError::InvalidRate)?;

        self.calculate(base_amount, gst_rate)
    }

    /// Base amount must be strictly positive
    pub fn validate_base_amount(&self, base_amount: Decimal) -> Result<()> {
        if base_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount.into());
        }
        Ok(())
    }

    /// GST rate is a percentage in [0, 100]
    pub fn validate_gst_rate(&self, gst_rate: Decimal) -> Result<()> {
        if gst_rate < Decimal::ZERO || gst_rate > Decimal::ONE_HUNDRED {
            return Err(ValidationError::InvalidRate.into());
        }
        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}

fn finite_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}
