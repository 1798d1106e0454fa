//! Filter condition operators understood by the CRUD query convention.

use crate::error::ProviderError;
use std::fmt;
use std::str::FromStr;

/// A filter condition operator.
///
/// The `*L` variants are the case-insensitive forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CondOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LowerThan,
    GreaterThanEquals,
    LowerThanEquals,
    Starts,
    Ends,
    Contains,
    Excludes,
    In,
    NotIn,
    IsNull,
    NotNull,
    Between,
    EqualsLow,
    NotEqualsLow,
    StartsLow,
    EndsLow,
    ContainsLow,
    ExcludesLow,
    InLow,
    NotInLow,
}

impl CondOperator {
    pub const ALL: [CondOperator; 23] = [
        CondOperator::Equals,
        CondOperator::NotEquals,
        CondOperator::GreaterThan,
        CondOperator::LowerThan,
        CondOperator::GreaterThanEquals,
        CondOperator::LowerThanEquals,
        CondOperator::Starts,
        CondOperator::Ends,
        CondOperator::Contains,
        CondOperator::Excludes,
        CondOperator::In,
        CondOperator::NotIn,
        CondOperator::IsNull,
        CondOperator::NotNull,
        CondOperator::Between,
        CondOperator::EqualsLow,
        CondOperator::NotEqualsLow,
        CondOperator::StartsLow,
        CondOperator::EndsLow,
        CondOperator::ContainsLow,
        CondOperator::ExcludesLow,
        CondOperator::InLow,
        CondOperator::NotInLow,
    ];

    /// The token written into the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CondOperator::Equals => "$eq",
            CondOperator::NotEquals => "$ne",
            CondOperator::GreaterThan => "$gt",
            CondOperator::LowerThan => "$lt",
            CondOperator::GreaterThanEquals => "$gte",
            CondOperator::LowerThanEquals => "$lte",
            CondOperator::Starts => "$starts",
            CondOperator::Ends => "$ends",
            CondOperator::Contains => "$cont",
            CondOperator::Excludes => "$excl",
            CondOperator::In => "$in",
            CondOperator::NotIn => "$notin",
            CondOperator::IsNull => "$isnull",
            CondOperator::NotNull => "$notnull",
            CondOperator::Between => "$between",
            CondOperator::EqualsLow => "$eqL",
            CondOperator::NotEqualsLow => "$neL",
            CondOperator::StartsLow => "$startsL",
            CondOperator::EndsLow => "$endsL",
            CondOperator::ContainsLow => "$contL",
            CondOperator::ExcludesLow => "$exclL",
            CondOperator::InLow => "$inL",
            CondOperator::NotInLow => "$notinL",
        }
    }

    /// The bare token still accepted for this operator, if any.
    fn legacy_token(&self) -> Option<&'static str> {
        match self {
            CondOperator::Equals
            | CondOperator::NotEquals
            | CondOperator::GreaterThan
            | CondOperator::LowerThan
            | CondOperator::GreaterThanEquals
            | CondOperator::LowerThanEquals
            | CondOperator::Starts
            | CondOperator::Ends
            | CondOperator::Contains
            | CondOperator::Excludes
            | CondOperator::In
            | CondOperator::NotIn
            | CondOperator::IsNull
            | CondOperator::NotNull
            | CondOperator::Between => self.as_str().strip_prefix('$'),
            _ => None,
        }
    }
}

impl fmt::Display for CondOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the `$`-prefixed tokens and, for the case-sensitive operators,
/// the older bare spelling (`eq`, `cont`, `notin`, ...). Parsing a bare token
/// yields the same variant, so the `$` form is what gets written back out.
impl FromStr for CondOperator {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CondOperator::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s || op.legacy_token() == Some(s))
            .ok_or_else(|| ProviderError::InvalidQuery(format!("Invalid condition operator '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_operator_token() {
        for op in CondOperator::ALL {
            assert_eq!(op.as_str().parse::<CondOperator>().unwrap(), op);
        }
    }

    #[test]
    fn test_bare_tokens_parse_to_dollar_form() {
        assert_eq!("cont".parse::<CondOperator>().unwrap(), CondOperator::Contains);
        assert_eq!("notin".parse::<CondOperator>().unwrap(), CondOperator::NotIn);
        assert_eq!("between".parse::<CondOperator>().unwrap(), CondOperator::Between);
        assert_eq!("eq".parse::<CondOperator>().unwrap().to_string(), "$eq");
        // Case-insensitive operators only exist in `$` form.
        assert!("contL".parse::<CondOperator>().is_err());
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let err = "$like".parse::<CondOperator>().unwrap_err();
        assert!(matches!(err, ProviderError::InvalidQuery(msg) if msg.contains("$like")));
    }
}
