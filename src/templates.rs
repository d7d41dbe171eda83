use crate::models::{CategoryTemplate, ProductCategory};

const CLOTHING: CategoryTemplate = CategoryTemplate {
    with_model: "Create a professional fashion marketing poster featuring the exact person from the model reference image wearing the clothing item from the product reference. The model should pose elegantly showcasing the garment's fit, style, and details. Use professional fashion photography lighting with a clean, luxury aesthetic.",
    without_model: "Create a professional fashion marketing poster featuring the clothing item from the reference image. Style it as a high-end fashion advertisement with elegant presentation, professional lighting, and luxury brand aesthetic. Focus on the garment's style, fit, and quality details.",
};

const FOOTWEAR: CategoryTemplate = CategoryTemplate {
    with_model: "Create a professional marketing poster showing the exact person from the model reference image wearing or showcasing the footwear from the product reference. Position the model to highlight the shoes' style, comfort, and design. Use dynamic lighting and modern composition.",
    without_model: "Create a professional marketing poster featuring the footwear from the reference image. Present the shoes with dynamic angles, professional lighting, and modern styling that emphasizes comfort, style, and quality craftsmanship.",
};

const ACCESSORIES: CategoryTemplate = CategoryTemplate {
    with_model: "Create a professional marketing poster featuring the exact person from the model reference image wearing or holding the accessory from the product reference. Style the model elegantly to complement the accessory, with sophisticated lighting and luxury presentation.",
    without_model: "Create a professional marketing poster showcasing the accessory from the reference image. Use elegant styling with sophisticated lighting, luxury presentation, and composition that highlights the item's craftsmanship and style.",
};

const ELECTRONICS: CategoryTemplate = CategoryTemplate {
    with_model: "Create a modern tech marketing poster featuring the exact person from the model reference image using or presenting the electronic device from the product reference. Use contemporary styling with clean, modern aesthetics and professional lighting.",
    without_model: "Create a modern tech marketing poster showcasing the electronic device from the reference image. Use clean, contemporary design with professional product photography lighting and modern composition that emphasizes innovation and quality.",
};

const BEAUTY: CategoryTemplate = CategoryTemplate {
    with_model: "Create a professional beauty marketing poster featuring the exact person from the model reference image using or presenting the beauty product from the product reference. Use glamorous lighting and elegant styling that emphasizes beauty and sophistication.",
    without_model: "Create a professional beauty marketing poster showcasing the beauty product from the reference image. Use glamorous presentation with elegant styling, soft lighting, and luxurious composition that emphasizes quality and appeal.",
};

const HOME: CategoryTemplate = CategoryTemplate {
    with_model: "Create a professional home & lifestyle marketing poster featuring the exact person from the model reference image with the home product from the product reference. Style the scene to show the product in an elegant home setting with warm, inviting lighting.",
    without_model: "Create a professional home & lifestyle marketing poster showcasing the home product from the reference image. Present it in an elegant, well-designed home setting with warm lighting and inviting composition.",
};

const SPORTS: CategoryTemplate = CategoryTemplate {
    with_model: "Create a dynamic sports marketing poster featuring the exact person from the model reference image with the sports product from the product reference. Use energetic composition with dynamic lighting that conveys performance and athleticism.",
    without_model: "Create a dynamic sports marketing poster showcasing the sports product from the reference image. Use energetic composition with dynamic lighting and modern styling that emphasizes performance, quality, and athletic appeal.",
};

const OTHER: CategoryTemplate = CategoryTemplate {
    with_model: "Create a professional marketing poster featuring the exact person from the model reference image with the product from the product reference. Use elegant styling with professional lighting and modern composition suitable for the product type.",
    without_model: "Create a professional marketing poster showcasing the product from the reference image. Use elegant presentation with professional lighting and modern composition that highlights the product's quality and appeal.",
};

impl ProductCategory {
    pub fn template(&self) -> &'static CategoryTemplate {
        match self {
            ProductCategory::Clothing => &CLOTHING,
            ProductCategory::Footwear => &FOOTWEAR,
            ProductCategory::Accessories => &ACCESSORIES,
            ProductCategory::Electronics => &ELECTRONICS,
            ProductCategory::Beauty => &BEAUTY,
            ProductCategory::Home => &HOME,
            ProductCategory::Sports => &SPORTS,
            ProductCategory::Other => &OTHER,
        }
    }
}

/// Template for a category id; unknown ids get the generic `other` template.
pub fn lookup(category: &str) -> &'static CategoryTemplate {
    ProductCategory::from_id(category)
        .unwrap_or(ProductCategory::Other)
        .template()
}
