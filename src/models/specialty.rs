use serde::{Deserialize, Serialize};

/// Optional audience restrictions attached to a specialty.
///
/// `gender` is kept as the raw catalog string: `"Male"` or `"Female"` restricts
/// the specialty to that sex, anything else (or absence) leaves it open.
/// The age bounds are carried through from the catalog but do not take part
/// in filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<SpecialtyParams>,
}

impl Specialty {
    /// The gender restriction, if the catalog declares one.
    pub fn gender(&self) -> Option<&str> {
        self.params.as_ref().and_then(|p| p.gender.as_deref())
    }
}
