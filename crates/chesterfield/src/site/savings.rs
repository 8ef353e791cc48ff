use serde::{Deserialize, Serialize};

/// Typical leasing fee charged elsewhere, as a share of one month's rent per unit.
pub const TYPICAL_LEASING_FEE_RATE: f64 = 0.85;
/// Monthly management fee, as a share of collected rent.
pub const MANAGEMENT_FEE_RATE: f64 = 0.06;

pub const DEFAULT_MONTHLY_RENT: f64 = 1800.0;
pub const DEFAULT_DOORS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SavingsQuery {
    #[serde(default = "default_rent")]
    pub rent: f64,
    #[serde(default = "default_doors")]
    pub doors: u32,
}

fn default_rent() -> f64 {
    DEFAULT_MONTHLY_RENT
}

fn default_doors() -> u32 {
    DEFAULT_DOORS
}

impl Default for SavingsQuery {
    fn default() -> Self {
        Self {
            rent: DEFAULT_MONTHLY_RENT,
            doors: DEFAULT_DOORS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsEstimate {
    pub monthly_rent: f64,
    pub doors: u32,
    pub leasing_fee_rate: f64,
    pub management_fee_rate: f64,
    /// Leasing fees avoided across all doors.
    pub estimated_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SavingsError {
    #[error("monthly rent must be a finite, non-negative amount (got {0})")]
    InvalidRent(f64),
    #[error("estimate for {doors} door(s) at {rent} per month is out of range")]
    OutOfRange { rent: f64, doors: u32 },
}

pub fn estimate(query: SavingsQuery) -> Result<SavingsEstimate, SavingsError> {
    if !query.rent.is_finite() || query.rent < 0.0 {
        return Err(SavingsError::InvalidRent(query.rent));
    }

    let estimated_savings = query.rent * TYPICAL_LEASING_FEE_RATE * f64::from(query.doors);
    let estimated_savings = (estimated_savings * 100.0).round() / 100.0;
    if !estimated_savings.is_finite() {
        return Err(SavingsError::OutOfRange {
            rent: query.rent,
            doors: query.doors,
        });
    }

    Ok(SavingsEstimate {
        monthly_rent: query.rent,
        doors: query.doors,
        leasing_fee_rate: TYPICAL_LEASING_FEE_RATE,
        management_fee_rate: MANAGEMENT_FEE_RATE,
        estimated_savings,
    })
}
