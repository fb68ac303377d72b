//! `dotnet test --filter` expression construction.
//!
//! Each qualified name becomes one `FullyQualifiedName<op><name>` term and
//! terms are OR-ed together with ` | `:
//!
//! ```text
//! FullyQualifiedName~Shop.CartTests | FullyQualifiedName~Shop.OrderTests
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::QualifiedName;

/// Test property the filter matches against.
const PROPERTY: &str = "FullyQualifiedName";

/// Separator between OR-ed terms.
const OR: &str = " | ";

/// How a filter term compares the test's fully-qualified name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Substring match (`~`). Matches every test under a type or namespace
    /// and every overload or data row of a method.
    #[default]
    Contains,
    /// Exact match (`=`).
    Equals,
}

impl FilterOperator {
    /// The operator as written in a filter expression.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "~",
            Self::Equals => "=",
        }
    }
}

/// An OR-combined test filter over qualified names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestFilter {
    operator: FilterOperator,
    names: Vec<QualifiedName>,
}

impl TestFilter {
    /// Create an empty filter using `operator`.
    #[must_use]
    pub fn new(operator: FilterOperator) -> Self {
        Self {
            operator,
            names: Vec::new(),
        }
    }

    /// Create a filter from names, keeping their order.
    #[must_use]
    pub fn from_names(
        operator: FilterOperator,
        names: impl IntoIterator<Item = QualifiedName>,
    ) -> Self {
        let mut filter = Self::new(operator);
        for name in names {
            filter.add(name);
        }
        filter
    }

    /// Add a name. Empty names and names already present are ignored.
    pub fn add(&mut self, name: QualifiedName) {
        if name.is_empty() || self.names.contains(&name) {
            return;
        }
        self.names.push(name);
    }

    /// The names in this filter, in insertion order.
    #[must_use]
    pub fn names(&self) -> &[QualifiedName] {
        &self.names
    }

    /// The operator used by every term.
    #[must_use]
    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// Returns `true` if the filter has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render the filter expression.
    #[must_use]
    pub fn expression(&self) -> String {
        self.names
            .iter()
            .map(|name| format!("{PROPERTY}{}{name}", self.operator.as_str()))
            .collect::<Vec<_>>()
            .join(OR)
    }
}

impl fmt::Display for TestFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}
