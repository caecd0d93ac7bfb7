//! Closed attribute sets: `Color` and `Size`.
//!
//! Both are small, statically known enumerations. `ALL` lists every member in
//! a fixed order; result counts are reported in that order.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::value_object::ValueObject;

/// Item color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    White,
    Black,
}

/// Item size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

macro_rules! impl_named_attribute {
    ($t:ident, $err:path, [$($variant:ident),+ $(,)?]) => {
        impl $t {
            /// Every member, in reporting order.
            pub const ALL: [$t; [$($t::$variant),+].len()] = [$($t::$variant),+];

            /// Unique display name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($t::$variant => stringify!($variant),)+
                }
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $t {
            type Err = CatalogError;

            /// Case-insensitive; surrounding whitespace is ignored.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|member| member.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $err(wanted.to_string()))
            }
        }
    };
}

impl_named_attribute!(Color, CatalogError::UnknownColor, [Red, Blue, Yellow, White, Black]);
impl_named_attribute!(Size, CatalogError::UnknownSize, [Small, Medium, Large]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_member_once() {
        assert_eq!(
            Color::ALL,
            [Color::Red, Color::Blue, Color::Yellow, Color::White, Color::Black]
        );
        assert_eq!(Size::ALL, [Size::Small, Size::Medium, Size::Large]);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Color::ALL.iter().map(|c| c.name()).collect();
        names.extend(Size::ALL.iter().map(|s| s.name()));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(" BLACK ".parse::<Color>().unwrap(), Color::Black);
        assert_eq!("Medium".parse::<Size>().unwrap(), Size::Medium);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "Redwood".parse::<Color>().unwrap_err(),
            CatalogError::UnknownColor("Redwood".to_string())
        );
        assert_eq!(
            "XL".parse::<Size>().unwrap_err(),
            CatalogError::UnknownSize("XL".to_string())
        );
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&Color::Yellow).unwrap(), "\"Yellow\"");
        assert_eq!(serde_json::from_str::<Size>("\"Large\"").unwrap(), Size::Large);
    }
}
