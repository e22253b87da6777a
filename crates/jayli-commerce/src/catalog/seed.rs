//! Static menu the storefront starts with.

use crate::catalog::{CakeCategory, CatalogItem, Review};
use crate::ids::ReviewId;
use crate::money::Money;

#[derive(Debug, Clone, Copy)]
struct CakeSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_kes: i64,
    category: CakeCategory,
    image: &'static str,
    rating: f32,
}

const CAKE_SEEDS: &[CakeSeed] = &[
    CakeSeed {
        id: "1",
        name: "Classic Black Forest",
        description: "Layers of rich chocolate sponge, whipped cream, and cherries. A Kenyan favorite.",
        price_kes: 2500,
        category: CakeCategory::Birthday,
        image: "photo-1606313564200-e75d5e30476c",
        rating: 4.8,
    },
    CakeSeed {
        id: "2",
        name: "Elegant Gold Drip Graduation",
        description: "Vanilla sponge with buttercream frosting and a gold drip finish. Includes custom topper.",
        price_kes: 4500,
        category: CakeCategory::Graduation,
        image: "photo-1562440499-64c9a111f713",
        rating: 4.9,
    },
    CakeSeed {
        id: "3",
        name: "Scholars Chocolate Delight",
        description: "A rich chocolate fudge cake with gold accents, perfect for celebrating academic success.",
        price_kes: 5500,
        category: CakeCategory::Graduation,
        image: "photo-1578985545062-69928b1d9587",
        rating: 5.0,
    },
    CakeSeed {
        id: "4",
        name: "3-Tier Floral Wedding Cake",
        description: "Elegant white fondant with handcrafted sugar flowers. Flavors: Red Velvet, Vanilla, and Fruit Cake.",
        price_kes: 14500,
        category: CakeCategory::Wedding,
        image: "photo-1535254973040-607b474cb50d",
        rating: 4.9,
    },
    CakeSeed {
        id: "5",
        name: "Rustic Semi-Naked Wedding Cake",
        description: "Lightly frosted with fresh flowers and berries. Lemon and Blueberry flavor.",
        price_kes: 11000,
        category: CakeCategory::Wedding,
        image: "photo-1519340333755-56e9c1d04579",
        rating: 4.7,
    },
    CakeSeed {
        id: "w3",
        name: "Royal Gold & White Tier",
        description: "A majestic 4-tier cake with edible gold leaf and white roses. Perfect for grand weddings.",
        price_kes: 15000,
        category: CakeCategory::Wedding,
        image: "photo-1623428187969-5da2dcea5ebf",
        rating: 5.0,
    },
    CakeSeed {
        id: "w4",
        name: "Classic Kenyan Fruit Cake",
        description: "Traditional rich fruit cake, matured with brandy and covered in hard icing.",
        price_kes: 13500,
        category: CakeCategory::Wedding,
        image: "photo-1614707267537-b85aaf00c4b7",
        rating: 4.8,
    },
    CakeSeed {
        id: "w5",
        name: "Modern Minimalist",
        description: "Smooth buttercream finish with a single statement flower. Simple and chic.",
        price_kes: 9500,
        category: CakeCategory::Wedding,
        image: "photo-1560180474-e8563fd75bab",
        rating: 4.6,
    },
    CakeSeed {
        id: "6",
        name: "Colorful Funfetti Surprise",
        description: "Bright and colorful cake with sprinkles inside and out. Perfect for kids parties!",
        price_kes: 3500,
        category: CakeCategory::Kids,
        image: "photo-1621303837174-89787a7d4729",
        rating: 4.8,
    },
    CakeSeed {
        id: "7",
        name: "Unicorn Fantasy",
        description: "Pastel colors, whimsical decorations, and sweet strawberry swirl flavor.",
        price_kes: 3200,
        category: CakeCategory::Kids,
        image: "photo-1586985289688-ca3cf47d3e6e",
        rating: 4.9,
    },
    CakeSeed {
        id: "8",
        name: "Red Velvet Supreme",
        description: "Rich red velvet sponge with smooth cream cheese frosting.",
        price_kes: 2800,
        category: CakeCategory::General,
        image: "photo-1616541823729-00fe0aacd32c",
        rating: 4.6,
    },
    CakeSeed {
        id: "9",
        name: "Blueberry Lemon Zest",
        description: "Fresh lemon sponge with blueberry compote filling. Light and refreshing.",
        price_kes: 3000,
        category: CakeCategory::General,
        image: "photo-1488477304112-4944851de03d",
        rating: 4.7,
    },
];

const IMAGE_HOST: &str = "https://images.unsplash.com/";
const IMAGE_PARAMS: &str = "?q=80&w=800&auto=format&fit=crop";

/// Image used for custom cakes in the basket.
pub const CUSTOM_CAKE_IMAGE: &str =
    "https://images.unsplash.com/photo-1563729784474-d77dbb933a9e?q=80&w=800&auto=format&fit=crop";

pub(crate) fn cakes() -> Vec<CatalogItem> {
    CAKE_SEEDS
        .iter()
        .map(|seed| {
            CatalogItem::new(seed.id, seed.name, Money::kes(seed.price_kes), seed.category)
                .with_description(seed.description)
                .with_image(format!("{}{}{}", IMAGE_HOST, seed.image, IMAGE_PARAMS))
                .with_rating(seed.rating)
        })
        .collect()
}

pub(crate) fn reviews() -> Vec<Review> {
    [
        (
            "r1",
            "Wanjiku M.",
            5,
            "The graduation cake was the highlight of our party! Taste was amazing.",
            "2023-11-15",
        ),
        (
            "r2",
            "Otieno J.",
            4,
            "Great delivery speed within Mbita. The Black Forest is authentic.",
            "2023-12-02",
        ),
        (
            "r3",
            "Sarah K.",
            5,
            "Ordered a wedding cake last minute and they delivered perfection. Asante sana!",
            "2024-01-10",
        ),
    ]
    .into_iter()
    .map(|(id, name, rating, comment, date)| Review {
        id: ReviewId::new(id),
        customer_name: name.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    })
    .collect()
}
