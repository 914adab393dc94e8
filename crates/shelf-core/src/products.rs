use serde::{Deserialize, Deserializer, Serialize};

/// A product record as returned by the upstream listing endpoint.
///
/// Only the fields the catalog view needs are modelled; anything else in the
/// upstream payload (slugs, timestamps, category ids) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<Category>,
    /// Primary image URL. Most records only carry `images`.
    #[serde(default)]
    pub image: Option<String>,
    /// Image gallery. Absent and `null` both deserialize to an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Product {
    /// Returns the category name, if the product has a category.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Returns `image`, falling back to the first entry of `images`.
    ///
    /// Empty strings are treated as absent.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
            .filter(|url| !url.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
