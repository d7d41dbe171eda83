use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Clothing,
    Footwear,
    Accessories,
    Electronics,
    Beauty,
    Home,
    Sports,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Clothing,
        ProductCategory::Footwear,
        ProductCategory::Accessories,
        ProductCategory::Electronics,
        ProductCategory::Beauty,
        ProductCategory::Home,
        ProductCategory::Sports,
        ProductCategory::Other,
    ];

    /// Exact, case-sensitive match on the identifier the UI sends.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "clothing" => Some(ProductCategory::Clothing),
            "footwear" => Some(ProductCategory::Footwear),
            "accessories" => Some(ProductCategory::Accessories),
            "electronics" => Some(ProductCategory::Electronics),
            "beauty" => Some(ProductCategory::Beauty),
            "home" => Some(ProductCategory::Home),
            "sports" => Some(ProductCategory::Sports),
            "other" => Some(ProductCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Clothing => "clothing",
            ProductCategory::Footwear => "footwear",
            ProductCategory::Accessories => "accessories",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Beauty => "beauty",
            ProductCategory::Home => "home",
            ProductCategory::Sports => "sports",
            ProductCategory::Other => "other",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        let (name, description, icon) = match self {
            ProductCategory::Clothing => (
                "Clothing & Apparel",
                "Shirts, dresses, pants, jackets, etc.",
                "👕",
            ),
            ProductCategory::Footwear => ("Footwear", "Shoes, sneakers, boots, sandals", "👟"),
            ProductCategory::Accessories => ("Accessories", "Bags, jewelry, watches, hats", "💍"),
            ProductCategory::Electronics => ("Electronics", "Gadgets, phones, headphones", "📱"),
            ProductCategory::Beauty => ("Beauty & Cosmetics", "Makeup, skincare, perfumes", "💄"),
            ProductCategory::Home => (
                "Home & Decor",
                "Furniture, decorations, kitchenware",
                "🏠",
            ),
            ProductCategory::Sports => ("Sports & Fitness", "Equipment, activewear, gear", "⚽"),
            ProductCategory::Other => ("Other", "Custom product category", "📦"),
        };

        CategoryInfo {
            id: self.as_str(),
            name,
            description,
            icon,
        }
    }
}

/// Entry of the category grid shown by the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Base prompt texts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    pub with_model: &'static str,
    pub without_model: &'static str,
}

impl CategoryTemplate {
    pub fn select(&self, has_model_image: bool) -> &'static str {
        if has_model_image {
            self.with_model
        } else {
            self.without_model
        }
    }
}
