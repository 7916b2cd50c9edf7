use serde::{Deserialize, Serialize};

use crate::{FiscalDate, ValidationError};

/// One fiscal-year row of an annual income statement.
///
/// Numeric fields are optional: providers omit or null out lines they do not
/// report, and a missing value must survive filtering and sorting without
/// being coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub date: FiscalDate,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub net_income: Option<f64>,
    #[serde(default)]
    pub gross_profit: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub operating_income: Option<f64>,
}

impl FinancialRecord {
    pub fn new(
        date: FiscalDate,
        revenue: Option<f64>,
        net_income: Option<f64>,
        gross_profit: Option<f64>,
        eps: Option<f64>,
        operating_income: Option<f64>,
    ) -> Result<Self, ValidationError> {
        validate_optional_finite("revenue", revenue)?;
        validate_optional_finite("netIncome", net_income)?;
        validate_optional_finite("grossProfit", gross_profit)?;
        validate_optional_finite("eps", eps)?;
        validate_optional_finite("operatingIncome", operating_income)?;

        Ok(Self {
            date,
            revenue,
            net_income,
            gross_profit,
            eps,
            operating_income,
        })
    }

    /// Record carrying only a date, revenue, and net income.
    pub fn summary(
        date: FiscalDate,
        revenue: Option<f64>,
        net_income: Option<f64>,
    ) -> Result<Self, ValidationError> {
        Self::new(date, revenue, net_income, None, None, None)
    }
}

fn validate_optional_finite(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if !value.is_finite() => Err(ValidationError::NonFiniteValue { field }),
        _ => Ok(()),
    }
}
