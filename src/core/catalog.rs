//! # Catalog
//!
//! Hard-coded sample data standing in for a backend. Everything here is
//! immutable; screens copy what they need into their own state at
//! construction time.

use crate::core::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutrition {
    pub calories: u32,
    /// Grams.
    pub protein: u32,
    /// Grams.
    pub carbs: u32,
    /// Grams.
    pub fat: u32,
}

/// A menu item as shown on the home screen and the food detail screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub image: &'static str,
    pub category: &'static str,
    pub available: bool,
    pub ingredients: &'static [&'static str],
    pub nutrition: Nutrition,
    pub preparation_time: &'static str,
    /// Short label for home cards, e.g. "20-25 min".
    pub delivery_time: &'static str,
    pub rating: f32,
    pub reviews: u32,
}

/// Home screen "Special Offers" card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color: Rgb,
    pub icon: &'static str,
}

/// Explore screen banner card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Promotion {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Restaurant {
    pub id: &'static str,
    pub name: &'static str,
    pub cuisine: &'static str,
    pub rating: f32,
    pub delivery_time: Option<&'static str>,
    pub image: &'static str,
}

/// Initial cart content. Quantities are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub quantity: u32,
    pub image: &'static str,
    pub description: &'static str,
}

const IMG_PIZZA: &str = "https://images.pexels.com/photos/1437267/pexels-photo-1437267.jpeg";
const IMG_BURGER: &str = "https://images.pexels.com/photos/1639562/pexels-photo-1639562.jpeg";
const IMG_SUSHI: &str = "https://images.pexels.com/photos/357756/pexels-photo-357756.jpeg";
const IMG_CAKE: &str = "https://images.pexels.com/photos/533325/pexels-photo-533325.jpeg";
const IMG_LEMONADE: &str = "https://images.pexels.com/photos/96974/pexels-photo-96974.jpeg";
const IMG_FRIES: &str = "https://images.pexels.com/photos/1582166/pexels-photo-1582166.jpeg";

pub static FOODS: &[FoodItem] = &[
    FoodItem {
        id: "1",
        name: "Margherita Pizza",
        description: "Classic delight with fresh tomatoes, mozzarella cheese, and aromatic basil. \
            Our signature pizza features a crispy thin crust and authentic Italian flavors.",
        price: 8.99,
        image: IMG_PIZZA,
        category: "Pizza",
        available: true,
        ingredients: &["Fresh tomatoes", "Mozzarella cheese", "Basil", "Olive oil", "Pizza dough"],
        nutrition: Nutrition { calories: 285, protein: 12, carbs: 35, fat: 11 },
        preparation_time: "20-25 minutes",
        delivery_time: "20-25 min",
        rating: 4.8,
        reviews: 124,
    },
    FoodItem {
        id: "2",
        name: "Veggie Burger",
        description: "Loaded with fresh vegetables, melted cheese, and our special sauce. \
            A healthy and delicious alternative to traditional burgers.",
        price: 6.49,
        image: IMG_BURGER,
        category: "Burgers",
        available: true,
        ingredients: &["Veggie patty", "Lettuce", "Tomato", "Cheese", "Special sauce", "Bun"],
        nutrition: Nutrition { calories: 320, protein: 15, carbs: 28, fat: 18 },
        preparation_time: "15-20 minutes",
        delivery_time: "15-20 min",
        rating: 4.6,
        reviews: 89,
    },
    FoodItem {
        id: "3",
        name: "Sushi Platter",
        description: "Assorted sushi rolls with fresh fish, avocado, and cucumber. \
            Served with wasabi, ginger, and soy sauce.",
        price: 12.99,
        image: IMG_SUSHI,
        category: "Sushi",
        available: false,
        ingredients: &["Fresh salmon", "Tuna", "Avocado", "Cucumber", "Rice", "Nori"],
        nutrition: Nutrition { calories: 180, protein: 22, carbs: 15, fat: 6 },
        preparation_time: "10-15 minutes",
        delivery_time: "10-15 min",
        rating: 4.9,
        reviews: 156,
    },
    FoodItem {
        id: "4",
        name: "Chocolate Cake",
        description: "Rich and creamy chocolate cake with chocolate ganache frosting. \
            Perfect for dessert lovers.",
        price: 4.99,
        image: IMG_CAKE,
        category: "Desserts",
        available: true,
        ingredients: &["Chocolate", "Flour", "Eggs", "Sugar", "Butter", "Cream"],
        nutrition: Nutrition { calories: 420, protein: 6, carbs: 45, fat: 24 },
        preparation_time: "5-10 minutes",
        delivery_time: "5-10 min",
        rating: 4.7,
        reviews: 67,
    },
    FoodItem {
        id: "5",
        name: "Lemonade",
        description: "Freshly squeezed lemonade with a hint of mint. \
            Refreshing and perfect for hot days.",
        price: 2.99,
        image: IMG_LEMONADE,
        category: "Drinks",
        available: true,
        ingredients: &["Fresh lemons", "Sugar", "Water", "Mint leaves"],
        nutrition: Nutrition { calories: 120, protein: 0, carbs: 30, fat: 0 },
        preparation_time: "2-3 minutes",
        delivery_time: "2-3 min",
        rating: 4.5,
        reviews: 43,
    },
];

pub static OFFERS: &[Offer] = &[
    Offer {
        id: "1",
        title: "50% OFF",
        subtitle: "On First Order",
        color: Rgb(0xFF, 0x6B, 0x6B),
        icon: "🎁",
    },
    Offer {
        id: "2",
        title: "Free Delivery",
        subtitle: "Orders above $20",
        color: Rgb(0x4E, 0xCD, 0xC4),
        icon: "🚲",
    },
    Offer {
        id: "3",
        title: "Buy 1 Get 1",
        subtitle: "On Selected Items",
        color: Rgb(0x45, 0xB7, 0xD1),
        icon: "🍴",
    },
];

pub static HOME_RESTAURANTS: &[Restaurant] = &[
    Restaurant {
        id: "1",
        name: "Pizza Palace",
        cuisine: "Italian",
        rating: 4.8,
        delivery_time: Some("20-30 min"),
        image: IMG_PIZZA,
    },
    Restaurant {
        id: "2",
        name: "Burger House",
        cuisine: "American",
        rating: 4.6,
        delivery_time: Some("15-25 min"),
        image: IMG_BURGER,
    },
    Restaurant {
        id: "3",
        name: "Sushi Master",
        cuisine: "Japanese",
        rating: 4.9,
        delivery_time: Some("25-35 min"),
        image: IMG_SUSHI,
    },
];

pub static PROMOTIONS: &[Promotion] = &[
    Promotion {
        id: "1",
        title: "50% OFF on Sushi",
        description: "Enjoy half price on all sushi platters!",
        image: IMG_SUSHI,
    },
    Promotion {
        id: "2",
        title: "Free Dessert",
        description: "Get a free dessert with every pizza order!",
        image: IMG_CAKE,
    },
    Promotion {
        id: "3",
        title: "Buy 1 Get 1 Burger",
        description: "Double the delight on all burgers!",
        image: IMG_BURGER,
    },
];

pub static EXPLORE_RESTAURANTS: &[Restaurant] = &[
    Restaurant {
        id: "1",
        name: "Pizza Palace",
        cuisine: "Italian",
        rating: 4.7,
        delivery_time: None,
        image: IMG_PIZZA,
    },
    Restaurant {
        id: "2",
        name: "Sushi World",
        cuisine: "Japanese",
        rating: 4.9,
        delivery_time: None,
        image: IMG_SUSHI,
    },
    Restaurant {
        id: "3",
        name: "Burger Hub",
        cuisine: "American",
        rating: 4.5,
        delivery_time: None,
        image: IMG_BURGER,
    },
];

pub static CART_SEED: &[CartSeed] = &[
    CartSeed {
        id: "1",
        name: "Margherita Pizza",
        price: 8.99,
        quantity: 1,
        image: IMG_PIZZA,
        description: "Classic delight with fresh tomatoes and mozzarella",
    },
    CartSeed {
        id: "2",
        name: "Veggie Burger",
        price: 6.49,
        quantity: 2,
        image: IMG_BURGER,
        description: "Loaded with fresh vegetables and special sauce",
    },
    CartSeed {
        id: "3",
        name: "French Fries",
        price: 3.99,
        quantity: 1,
        image: IMG_FRIES,
        description: "Crispy golden fries with sea salt",
    },
];

/// Look up a catalog record by its route identifier.
pub fn find_food(id: &str) -> Option<&'static FoodItem> {
    FOODS.iter().find(|food| food.id == id)
}
