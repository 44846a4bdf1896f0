//! Capital and operating expenditure tables.
//!
//! Both tables are compile-time constants. There is no API to add, remove or
//! change a line item.

use serde::Serialize;
use std::fmt;
use tea_core::Real;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpenditureKind {
    /// One-time equipment cost (USD).
    Capital,
    /// Recurring annual cost (USD/year).
    Operating,
}

impl ExpenditureKind {
    pub fn cost_unit(self) -> &'static str {
        match self {
            Self::Capital => "USD",
            Self::Operating => "USD/year",
        }
    }

    pub fn item_header(self) -> &'static str {
        match self {
            Self::Capital => "Equipment",
            Self::Operating => "Item",
        }
    }
}

impl fmt::Display for ExpenditureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capital => write!(f, "Capital Expenditures"),
            Self::Operating => write!(f, "Operational Expenditures"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineItem {
    pub name: &'static str,
    pub cost: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenditureTable {
    kind: ExpenditureKind,
    items: &'static [LineItem],
}

impl ExpenditureTable {
    pub fn kind(&self) -> ExpenditureKind {
        self.kind
    }

    /// Line items in display order.
    pub fn items(&self) -> &'static [LineItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cost_of(&self, name: &str) -> Option<Real> {
        self.items.iter().find(|i| i.name == name).map(|i| i.cost)
    }

    pub fn total(&self) -> Real {
        self.items.iter().map(|i| i.cost).sum()
    }
}

pub const CAPEX: ExpenditureTable = ExpenditureTable {
    kind: ExpenditureKind::Capital,
    items: &[
        LineItem {
            name: "Pretreatment Reactor",
            cost: 1_000_000.0,
        },
        LineItem {
            name: "Hydrolysis Tanks",
            cost: 500_000.0,
        },
        LineItem {
            name: "Fermentation Tanks",
            cost: 750_000.0,
        },
        LineItem {
            name: "Distillation Column",
            cost: 1_200_000.0,
        },
        LineItem {
            name: "Storage Tanks",
            cost: 300_000.0,
        },
    ],
};

pub const OPEX: ExpenditureTable = ExpenditureTable {
    kind: ExpenditureKind::Operating,
    items: &[
        LineItem {
            name: "Corn Stover",
            cost: 100_000.0,
        },
        LineItem {
            name: "Enzymes",
            cost: 50_000.0,
        },
        LineItem {
            name: "Yeast",
            cost: 10_000.0,
        },
        LineItem {
            name: "Utilities",
            cost: 200_000.0,
        },
        LineItem {
            name: "Labor",
            cost: 300_000.0,
        },
        LineItem {
            name: "Maintenance",
            cost: 150_000.0,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capex_totals() {
        assert_eq!(CAPEX.len(), 5);
        assert_eq!(CAPEX.total(), 3_750_000.0);
        assert_eq!(CAPEX.kind().cost_unit(), "USD");
    }

    #[test]
    fn opex_totals() {
        assert_eq!(OPEX.len(), 6);
        assert_eq!(OPEX.total(), 810_000.0);
        assert_eq!(OPEX.kind().cost_unit(), "USD/year");
    }

    #[test]
    fn every_cost_is_positive() {
        for table in [CAPEX, OPEX] {
            assert!(!table.is_empty());
            assert!(table.items().iter().all(|i| i.cost > 0.0));
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(CAPEX.cost_of("Distillation Column"), Some(1_200_000.0));
        assert_eq!(OPEX.cost_of("Labor"), Some(300_000.0));
        assert_eq!(OPEX.cost_of("Catalyst"), None);
    }
}
