use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FinancialRecord, FiscalDate, ValidationError};

/// Optional closed-interval bounds over date, revenue, and net income.
///
/// A `None` bound leaves that side of the interval open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub start_date: Option<FiscalDate>,
    pub end_date: Option<FiscalDate>,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
    pub min_net_income: Option<f64>,
    pub max_net_income: Option<f64>,
}

impl FilterSpec {
    pub fn is_unbounded(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `record` satisfies every bound that is set.
    ///
    /// A record missing a numeric field fails any active bound on that field.
    pub fn matches(&self, record: &FinancialRecord) -> bool {
        within_dates(record.date, self.start_date, self.end_date)
            && within_amounts(record.revenue, self.min_revenue, self.max_revenue)
            && within_amounts(record.net_income, self.min_net_income, self.max_net_income)
    }

    /// Copy of this spec with one bound replaced.
    pub fn with_edit(mut self, edit: FilterEdit) -> Self {
        match edit {
            FilterEdit::StartDate(value) => self.start_date = value,
            FilterEdit::EndDate(value) => self.end_date = value,
            FilterEdit::MinRevenue(value) => self.min_revenue = value,
            FilterEdit::MaxRevenue(value) => self.max_revenue = value,
            FilterEdit::MinNetIncome(value) => self.min_net_income = value,
            FilterEdit::MaxNetIncome(value) => self.max_net_income = value,
        }
        self
    }
}

fn within_dates(value: FiscalDate, start: Option<FiscalDate>, end: Option<FiscalDate>) -> bool {
    start.is_none_or(|start| value >= start) && end.is_none_or(|end| value <= end)
}

fn within_amounts(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

/// Records of `records` that satisfy `spec`, in their original order.
pub fn filter(records: &[FinancialRecord], spec: &FilterSpec) -> Vec<FinancialRecord> {
    if spec.is_unbounded() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect()
}

/// Names the six editable bounds of a [`FilterSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterBound {
    StartDate,
    EndDate,
    MinRevenue,
    MaxRevenue,
    MinNetIncome,
    MaxNetIncome,
}

impl FilterBound {
    pub const ALL: [Self; 6] = [
        Self::StartDate,
        Self::EndDate,
        Self::MinRevenue,
        Self::MaxRevenue,
        Self::MinNetIncome,
        Self::MaxNetIncome,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartDate => "start-date",
            Self::EndDate => "end-date",
            Self::MinRevenue => "min-revenue",
            Self::MaxRevenue => "max-revenue",
            Self::MinNetIncome => "min-net-income",
            Self::MaxNetIncome => "max-net-income",
        }
    }
}

impl Display for FilterBound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterBound {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|bound| bound.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidFilterBound {
                value: s.to_owned(),
            })
    }
}

/// A single field-level change to a [`FilterSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterEdit {
    StartDate(Option<FiscalDate>),
    EndDate(Option<FiscalDate>),
    MinRevenue(Option<f64>),
    MaxRevenue(Option<f64>),
    MinNetIncome(Option<f64>),
    MaxNetIncome(Option<f64>),
}

impl FilterEdit {
    /// Edit built from raw user input; unparseable input clears the bound.
    pub fn from_input(bound: FilterBound, input: &str) -> Self {
        match bound {
            FilterBound::StartDate => Self::StartDate(parse_date_input(input)),
            FilterBound::EndDate => Self::EndDate(parse_date_input(input)),
            FilterBound::MinRevenue => Self::MinRevenue(parse_amount_input(input)),
            FilterBound::MaxRevenue => Self::MaxRevenue(parse_amount_input(input)),
            FilterBound::MinNetIncome => Self::MinNetIncome(parse_amount_input(input)),
            FilterBound::MaxNetIncome => Self::MaxNetIncome(parse_amount_input(input)),
        }
    }

    pub const fn clear(bound: FilterBound) -> Self {
        match bound {
            FilterBound::StartDate => Self::StartDate(None),
            FilterBound::EndDate => Self::EndDate(None),
            FilterBound::MinRevenue => Self::MinRevenue(None),
            FilterBound::MaxRevenue => Self::MaxRevenue(None),
            FilterBound::MinNetIncome => Self::MinNetIncome(None),
            FilterBound::MaxNetIncome => Self::MaxNetIncome(None),
        }
    }

    pub const fn bound(&self) -> FilterBound {
        match self {
            Self::StartDate(_) => FilterBound::StartDate,
            Self::EndDate(_) => FilterBound::EndDate,
            Self::MinRevenue(_) => FilterBound::MinRevenue,
            Self::MaxRevenue(_) => FilterBound::MaxRevenue,
            Self::MinNetIncome(_) => FilterBound::MinNetIncome,
            Self::MaxNetIncome(_) => FilterBound::MaxNetIncome,
        }
    }
}

/// Numeric bound from a text input.
///
/// Blank, unparseable, non-finite, and zero inputs all mean "no bound".
pub fn parse_amount_input(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != 0.0)
}

/// Date bound from a text input; anything unparseable means "no bound".
pub fn parse_date_input(input: &str) -> Option<FiscalDate> {
    FiscalDate::parse(input).ok()
}
