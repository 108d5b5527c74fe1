use serde::{Deserialize, Serialize};

/// A doctor as served by the catalog.
///
/// `city_id` and `specialty_id` are lookup-only references into the city and
/// specialty collections; nothing guarantees they resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub city_id: String,
    #[serde(rename = "specialityId")]
    pub specialty_id: String,
    pub is_pediatrician: bool,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
