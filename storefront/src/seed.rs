//! Built-in default content.
//!
//! The default catalog populates the store on first run (or after the
//! persisted catalog document turns out to be unreadable). Journal articles
//! are always served from here; they are not admin-editable and never
//! persisted.

use crate::types::{Article, Category, Product};

fn product(
    id: &str,
    name: &str,
    tagline: &str,
    description: &str,
    price: f64,
    category: Category,
    image_url: &str,
    features: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        long_description: description.to_string(),
        price,
        category,
        image_url: image_url.to_string(),
        features: features.iter().map(|f| (*f).to_string()).collect(),
    }
}

/// The catalog shipped with the storefront.
#[must_use]
pub fn default_catalog() -> Vec<Product> {
    vec![
        product(
            "p1",
            "Drift Headphones",
            "Quiet, everywhere.",
            "Over-ear headphones with adaptive noise cancellation and a forty-hour battery.",
            249.0,
            Category::Audio,
            "https://images.example.com/products/drift-headphones.jpg",
            &[
                "Adaptive noise cancellation",
                "40-hour battery",
                "USB-C fast charge",
            ],
        ),
        product(
            "p2",
            "Ambit Speaker",
            "Room-filling, shelf-sized.",
            "A compact speaker tuned for small rooms, with a linen grille in three tones.",
            129.0,
            Category::Audio,
            "https://images.example.com/products/ambit-speaker.jpg",
            &["360° sound", "Linen grille", "Pairs in stereo"],
        ),
        product(
            "p3",
            "Meridian Watch",
            "Time, undistracted.",
            "A minimal hybrid watch: analog face, week-long battery, quiet notifications.",
            199.0,
            Category::Wearable,
            "https://images.example.com/products/meridian-watch.jpg",
            &["7-day battery", "Sapphire glass", "Swappable straps"],
        ),
        product(
            "p4",
            "Ledge Stand",
            "Your phone, at eye level.",
            "A machined aluminum stand with a weighted base and hidden cable channel.",
            59.0,
            Category::Mobile,
            "https://images.example.com/products/ledge-stand.jpg",
            &["Machined aluminum", "Cable channel", "Non-slip base"],
        ),
        product(
            "p5",
            "Halo Lamp",
            "Light that follows the day.",
            "A dimmable ring lamp that shifts from cool daylight to warm evening tones.",
            89.0,
            Category::Home,
            "https://images.example.com/products/halo-lamp.jpg",
            &["2700K-5000K range", "Touch dimmer", "Memory setting"],
        ),
    ]
}

fn article(id: &str, title: &str, excerpt: &str, content: &str, date: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        image_url: format!("https://images.example.com/journal/{id}.jpg"),
        date: date.to_string(),
    }
}

/// The journal shipped with the storefront.
#[must_use]
pub fn default_articles() -> Vec<Article> {
    vec![
        article(
            "a1",
            "Designing for Quiet",
            "Why our products avoid lights, chimes, and badges.",
            "Most devices compete for attention. Ours are built to give it back: \
             no status LEDs, no startup sounds, notifications only when asked for. \
             This piece walks through the decisions behind that restraint.",
            "03/14/2025",
        ),
        article(
            "a2",
            "Materials We Keep Coming Back To",
            "Aluminum, linen, and glass — and why they age well.",
            "Trends pass; materials remain. We look at the three finishes that \
             anchor the catalog and how each one wears over years of daily use.",
            "04/02/2025",
        ),
        article(
            "a3",
            "A Week Without Charging",
            "What a seven-day battery changes about wearing a watch.",
            "Battery anxiety shapes habits more than we admit. We measured what \
             happens when the charger moves from the nightstand to a drawer.",
            "05/21/2025",
        ),
    ]
}
