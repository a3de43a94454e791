//! Built-in product data.
//!
//! Stands in for a product database. Order matters: listings preserve it.

use crate::catalog::Product;
use crate::money::Money;

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    price_cents: i64,
    image: &'static str,
    category: &'static str,
    brand: &'static str,
    rating: f32,
    description: &'static str,
}

const SEED: &[SeedProduct] = &[
    SeedProduct {
        id: "running-shoes-001",
        name: "Performance Running Shoes",
        price_cents: 12000,
        image: "https://m.media-amazon.com/images/I/61rWcMP4s9L._SY695_.jpg",
        category: "Footwear",
        brand: "AeroRun",
        rating: 4.5,
        description: "Lightweight and breathable running shoes designed for optimal performance and comfort on long runs.",
    },
    SeedProduct {
        id: "wireless-headphones-001",
        name: "Premium Wireless Headphones",
        price_cents: 19999,
        image: "https://m.media-amazon.com/images/I/61MGzdlzIJL._SL1500_.jpg",
        category: "Electronics",
        brand: "SoundWave",
        rating: 4.8,
        description: "Immersive sound experience with active noise cancellation and a comfortable over-ear design. Long-lasting battery.",
    },
    SeedProduct {
        id: "backpack-001",
        name: "Urban Commuter Backpack",
        price_cents: 7550,
        image: "https://m.media-amazon.com/images/I/71maWXZscfL._SL1500_.jpg",
        category: "Bags",
        brand: "UrbanPack",
        rating: 4.2,
        description: "Durable and stylish backpack with multiple compartments, perfect for daily commutes and light travel.",
    },
    SeedProduct {
        id: "smartwatch-001",
        name: "Fitness Tracker Smartwatch",
        price_cents: 24900,
        image: "https://m.media-amazon.com/images/I/61rmkmqD5VL._SL1500_.jpg",
        category: "Electronics",
        brand: "FitTech",
        rating: 4.6,
        description: "Monitor your health and fitness with advanced sensors, GPS, and smart notifications. Water-resistant design.",
    },
    SeedProduct {
        id: "sunglasses-001",
        name: "Classic Aviator Sunglasses",
        price_cents: 5500,
        image: "https://m.media-amazon.com/images/I/51wwVl2r-WL._SX679_.jpg",
        category: "Accessories",
        brand: "Sunnies",
        rating: 4.0,
        description: "Timeless aviator style sunglasses with UV protection, suitable for all face shapes.",
    },
    SeedProduct {
        id: "digital-camera-001",
        name: "Compact Digital Camera",
        price_cents: 32999,
        image: "https://m.media-amazon.com/images/I/71KO7VHuWuL._SL1500_.jpg",
        category: "Electronics",
        brand: "PixelPro",
        rating: 4.3,
        description: "Capture stunning photos and videos with this easy-to-use compact digital camera, featuring optical zoom.",
    },
    SeedProduct {
        id: "smartphone-001",
        name: "Flagship Android Smartphone",
        price_cents: 89900,
        image: "https://m.media-amazon.com/images/I/61EoCnDyoQL._SL1500_.jpg",
        category: "Electronics",
        brand: "ConnectU",
        rating: 4.7,
        description: "Powerful smartphone with a vibrant display, advanced camera system, and long-lasting battery life.",
    },
    SeedProduct {
        id: "tshirt-001",
        name: "Organic Cotton T-Shirt",
        price_cents: 2999,
        image: "https://m.media-amazon.com/images/I/51KB+4kAeXL.jpg",
        category: "Apparel",
        brand: "EcoWear",
        rating: 4.1,
        description: "Soft and comfortable t-shirt made from 100% organic cotton, perfect for everyday wear.",
    },
    SeedProduct {
        id: "running-shoes-002",
        name: "Trail Running Shoes",
        price_cents: 13500,
        image: "https://m.media-amazon.com/images/I/91UZxIVQktL._SX695_.jpg",
        category: "Footwear",
        brand: "TerraTrek",
        rating: 4.4,
        description: "Rugged trail running shoes with enhanced grip and support for off-road adventures.",
    },
    SeedProduct {
        id: "wireless-headphones-002",
        name: "Sport Wireless Earbuds",
        price_cents: 8999,
        image: "https://m.media-amazon.com/images/I/71QdB7hDCAL._SL1500_.jpg",
        category: "Electronics",
        brand: "SoundWave",
        rating: 4.0,
        description: "Sweat-resistant wireless earbuds with secure fit, ideal for workouts and active lifestyles.",
    },
    SeedProduct {
        id: "backpack-002",
        name: "Hiking Daypack",
        price_cents: 9900,
        image: "https://m.media-amazon.com/images/I/31eJTTlRPuL._SY300_SX300_QL70_FMwebp_.jpg",
        category: "Bags",
        brand: "TerraTrek",
        rating: 4.7,
        description: "Lightweight and comfortable daypack with hydration compatibility, perfect for day hikes.",
    },
];

/// Build the seed product list in catalog order.
pub(crate) fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|s| {
            Product::new(
                s.id,
                s.name,
                Money::usd(s.price_cents),
                s.image,
                s.category,
                s.brand,
                s.rating,
                s.description,
            )
        })
        .collect()
}
