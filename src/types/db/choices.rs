use sea_orm::entity::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Waste item category, stored as its snake_case value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ItemCategory {
    #[sea_orm(string_value = "mobile")]
    Mobile,
    #[sea_orm(string_value = "laptop")]
    Laptop,
    #[sea_orm(string_value = "home_appliance")]
    HomeAppliance,
    #[sea_orm(string_value = "other")]
    Other,
}

/// Physical condition of a waste item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ItemCondition {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "used")]
    Used,
    #[sea_orm(string_value = "damaged")]
    Damaged,
    #[sea_orm(string_value = "not_working")]
    NotWorking,
}

/// Lifecycle status of a collection request
///
/// `Cancelled` is a stored value but is never accepted from a submitted
/// payload; it is only set by the cancel operation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RequestStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Unrecognized choice value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

// Text forms come from the `string_value` attributes above
macro_rules! choice_impls {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownChoice;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$ty as ActiveEnum>::try_from_value(&value.to_string())
                    .map_err(|_| UnknownChoice(value.to_string()))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_value())
            }
        }
    };
}

choice_impls!(ItemCategory);
choice_impls!(ItemCondition);
choice_impls!(RequestStatus);
