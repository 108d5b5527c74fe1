use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Sex {
    Male => "Male",
    Female => "Female",
});

str_enum!(Field {
    Name => "name",
    Birthdate => "birthdate",
    Sex => "sex",
    City => "city",
    Specialty => "speciality",
    Doctor => "doctor",
    Email => "email",
    Phone => "phone",
});

impl Sex {
    /// The sex whose specialties are hidden from a patient of this sex.
    pub fn opposite(&self) -> Sex {
        match self {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }
}

impl Field {
    /// All form fields in display order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Birthdate,
        Field::Sex,
        Field::City,
        Field::Specialty,
        Field::Doctor,
        Field::Email,
        Field::Phone,
    ];
}
