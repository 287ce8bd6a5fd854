//! Food Records
//!
//! Data structures matching the remote `/foods` resource.

use serde::{Deserialize, Serialize};

/// Food identifier, assigned by the remote resource
pub type FoodId = u32;

/// One food item on the menu (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub image: String,
    pub name: String,
    pub description: String,
    /// Decimal price kept as entered, e.g. "19.90"
    pub price: String,
    pub available: bool,
}

impl Food {
    /// Copy of this record with `available` flipped
    pub fn with_availability_toggled(&self) -> Food {
        Food {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// Fields the create form collects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodDraft {
    pub image: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

/// Create request body: a draft plus the availability flag, no id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFood {
    pub image: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
}

impl From<FoodDraft> for NewFood {
    /// New foods always start out available.
    fn from(draft: FoodDraft) -> Self {
        Self {
            image: draft.image,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            available: true,
        }
    }
}

/// Partial edit submitted by the edit form
///
/// `None` leaves the selected record's field as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodPatch {
    pub image: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub available: Option<bool>,
}

impl FoodPatch {
    pub fn price(price: impl Into<String>) -> Self {
        Self {
            price: Some(price.into()),
            ..Default::default()
        }
    }

    /// Merge this patch over `base`. The id always comes from `base`.
    pub fn apply_to(&self, base: &Food) -> Food {
        Food {
            id: base.id,
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            price: self.price.clone().unwrap_or_else(|| base.price.clone()),
            available: self.available.unwrap_or(base.available),
        }
    }
}

impl From<FoodDraft> for FoodPatch {
    /// The edit form submits every field it shows.
    fn from(draft: FoodDraft) -> Self {
        Self {
            image: Some(draft.image),
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            available: None,
        }
    }
}

impl From<&Food> for FoodDraft {
    fn from(food: &Food) -> Self {
        Self {
            image: food.image.clone(),
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price.clone(),
        }
    }
}
