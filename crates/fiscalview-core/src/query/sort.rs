use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FinancialRecord, ValidationError};

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Date,
    Revenue,
    NetIncome,
}

/// Orders two records by one field.
pub type Comparator = fn(&FinancialRecord, &FinancialRecord) -> Ordering;

impl SortField {
    pub const ALL: [Self; 3] = [Self::Date, Self::Revenue, Self::NetIncome];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Revenue => "revenue",
            Self::NetIncome => "netIncome",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Revenue => "Revenue",
            Self::NetIncome => "Net Income",
        }
    }

    /// Natural ascending comparison for this field.
    pub fn comparator(self) -> Comparator {
        match self {
            Self::Date => by_date,
            Self::Revenue => by_revenue,
            Self::NetIncome => by_net_income,
        }
    }
}

fn by_date(a: &FinancialRecord, b: &FinancialRecord) -> Ordering {
    a.date.cmp(&b.date)
}

fn by_revenue(a: &FinancialRecord, b: &FinancialRecord) -> Ordering {
    compare_amounts(a.revenue, b.revenue)
}

fn by_net_income(a: &FinancialRecord, b: &FinancialRecord) -> Ordering {
    compare_amounts(a.net_income, b.net_income)
}

/// Missing amounts order before present ones.
fn compare_amounts(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "revenue" => Ok(Self::Revenue),
            "netincome" | "net-income" | "net_income" => Ok(Self::NetIncome),
            _ => Err(ValidationError::InvalidSortField {
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending comparison result.
    pub const fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub const fn arrow(self) -> char {
        match self {
            Self::Asc => '↑',
            Self::Desc => '↓',
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header-click transition: same column flips, another column starts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::Date, SortDirection::Asc)
    }
}

pub fn toggle_sort(current: SortSpec, field: SortField) -> SortSpec {
    current.toggled(field)
}

/// Stable sort of `records` by `field`.
///
/// `direction` orients the comparator, so equal keys keep their input order
/// in both directions.
pub fn sort(
    records: &[FinancialRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<FinancialRecord> {
    let compare = field.comparator();
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| direction.orient(compare(a, b)));
    sorted
}
