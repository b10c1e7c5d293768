//! Static reference data the catalog is expanded from.

use jiniso_core::{Category, SubCategory};

/// A physical store.
pub struct StoreSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
}

pub const STORES: &[StoreSeed] = &[
    StoreSeed {
        id: "s1",
        name: "Jiniso Central Mall",
        location: "Level 2, South Wing",
    },
    StoreSeed {
        id: "s2",
        name: "Jiniso Metro Square",
        location: "Ground Floor, Unit 12",
    },
    StoreSeed {
        id: "s3",
        name: "Jiniso Urban Gallery",
        location: "Level 1, North Wing",
    },
];

/// A customer quote. `date` is (year, month, day).
pub struct TestimonialSeed {
    pub id: &'static str,
    pub user: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub date: (i32, u32, u32),
}

pub const TESTIMONIALS: &[TestimonialSeed] = &[
    TestimonialSeed {
        id: "t1",
        user: "Sarah K.",
        content: "The oversized tees are literally perfect. Cotton is so thick!",
        rating: 5,
        date: (2026, 2, 10),
    },
    TestimonialSeed {
        id: "t2",
        user: "Michael B.",
        content: "Best jeans I have owned in years. The fit is exactly as described.",
        rating: 5,
        date: (2026, 2, 12),
    },
    TestimonialSeed {
        id: "t3",
        user: "Lia W.",
        content: "Fast delivery and the packaging was so premium. Love the brand vibe.",
        rating: 4,
        date: (2026, 2, 14),
    },
    TestimonialSeed {
        id: "t4",
        user: "David R.",
        content: "Minimalist design but high impact. Highly recommend for daily wear.",
        rating: 5,
        date: (2026, 2, 15),
    },
    TestimonialSeed {
        id: "t5",
        user: "Elena P.",
        content: "Great value for money. The fabric feels really high-end.",
        rating: 5,
        date: (2026, 2, 18),
    },
];

/// Name prefixes cycled through as the catalog grows.
pub const CATEGORY_PREFIXES: [&str; 10] = [
    "Essential", "Urban", "Classic", "Premium", "Street", "Modern", "Vintage", "Minimal", "Active",
    "Daily",
];

/// A garment the catalog is expanded from.
pub struct ProductTemplate {
    pub kind: &'static str,
    /// Base price in whole rupiah.
    pub price: i64,
    pub image: &'static str,
    pub category: Category,
    pub sub_category: SubCategory,
}

const fn template(
    kind: &'static str,
    price: i64,
    image: &'static str,
    category: Category,
    sub_category: SubCategory,
) -> ProductTemplate {
    ProductTemplate {
        kind,
        price,
        image,
        category,
        sub_category,
    }
}

pub const PRODUCT_TEMPLATES: [ProductTemplate; 14] = [
    template(
        "Oversized Tee",
        199_000,
        "https://images.unsplash.com/photo-1521572267360-ee0c2909d518?w=800&auto=format&fit=crop&q=60",
        Category::Women,
        SubCategory::Tops,
    ),
    template(
        "Slim Fit Jeans",
        499_000,
        "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=800&auto=format&fit=crop&q=60",
        Category::Men,
        SubCategory::Bottoms,
    ),
    template(
        "Canvas Tote",
        89_000,
        "https://images.unsplash.com/photo-1544816153-09730556637e?w=800&auto=format&fit=crop&q=60",
        Category::Accessories,
        SubCategory::Accessories,
    ),
    template(
        "Tech Hoodie",
        359_000,
        "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=800&auto=format&fit=crop&q=60",
        Category::Collections,
        SubCategory::Outerwear,
    ),
    template(
        "Cargo Pants",
        429_000,
        "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=800&auto=format&fit=crop&q=60",
        Category::Men,
        SubCategory::Bottoms,
    ),
    template(
        "Denim Jacket",
        599_000,
        "https://images.unsplash.com/photo-1576905341935-422730623643?w=800&auto=format&fit=crop&q=60",
        Category::Women,
        SubCategory::Outerwear,
    ),
    template(
        "Beanie Hat",
        129_000,
        "https://images.unsplash.com/photo-1576871337622-98d48d365da2?w=800&auto=format&fit=crop&q=60",
        Category::Accessories,
        SubCategory::Accessories,
    ),
    template(
        "Cotton Socks",
        49_000,
        "https://images.unsplash.com/photo-1582966298438-641ff1ec8d7d?w=800&auto=format&fit=crop&q=60",
        Category::Accessories,
        SubCategory::Accessories,
    ),
    template(
        "Windbreaker",
        459_000,
        "https://images.unsplash.com/photo-1620331311520-246422ff83f9?w=800&auto=format&fit=crop&q=60",
        Category::Collections,
        SubCategory::Outerwear,
    ),
    template(
        "Linen Shirt",
        289_000,
        "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=800&auto=format&fit=crop&q=60",
        Category::Men,
        SubCategory::Tops,
    ),
    template(
        "Polo Shirt",
        249_000,
        "https://images.unsplash.com/photo-1586363104864-50e2246b621e?w=800&auto=format&fit=crop&q=60",
        Category::Men,
        SubCategory::Tops,
    ),
    template(
        "Chino Pants",
        399_000,
        "https://images.unsplash.com/photo-1473966968600-fa804b869628?w=800&auto=format&fit=crop&q=60",
        Category::Men,
        SubCategory::Bottoms,
    ),
    template(
        "Sweatshirt",
        299_000,
        "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=800&auto=format&fit=crop&q=60",
        Category::Women,
        SubCategory::Tops,
    ),
    template(
        "Skater Skirt",
        189_000,
        "https://images.unsplash.com/photo-1583496661160-fb5886a0aaaa?w=800&auto=format&fit=crop&q=60",
        Category::Women,
        SubCategory::Bottoms,
    ),
];
