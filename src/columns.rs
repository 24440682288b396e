//! Column names of the passenger manifest and the columns derived from it.

pub const PASSENGER_ID: &str = "PassengerId";
pub const SURVIVED: &str = "Survived";
pub const PCLASS: &str = "Pclass";
pub const NAME: &str = "Name";
pub const SEX: &str = "Sex";
pub const AGE: &str = "Age";
pub const SIBSP: &str = "SibSp";
pub const PARCH: &str = "Parch";
pub const TICKET: &str = "Ticket";
pub const FARE: &str = "Fare";
pub const CABIN: &str = "Cabin";
pub const EMBARKED: &str = "Embarked";

/// Binary cabin indicator that replaces `Cabin`.
pub const HAS_CABIN: &str = "hasCabin";
/// Grouped honorific extracted from `Name`.
pub const TITLE: &str = "Title";
/// `SibSp + Parch + 1`.
pub const FAMILY_SIZE: &str = "FamilySize";

/// Columns removed by feature engineering.
pub const LOW_VALUE_COLUMNS: [&str; 3] = [PASSENGER_ID, NAME, TICKET];

/// Numeric columns standardized by the scaler, in this order.
pub const SCALED_COLUMNS: [&str; 2] = [AGE, FARE];
