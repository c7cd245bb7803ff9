//! The built-in Lumora questionnaire and product lineup.
//!
//! `data/lumora.json` at the workspace root carries the same content and
//! must stay in sync with this module (see the loader integration test).

use crate::types::*;

fn option(text: &str, value: &str, score: ScoreVector) -> QuizOption {
    QuizOption::new(text, value, score)
}

fn question(id: &str, prompt: &str, options: Vec<QuizOption>) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options,
    }
}

fn product(name: &str, tagline: &str, price: u32, description: &str, features: [&str; 4]) -> Product {
    Product {
        name: name.to_string(),
        tagline: tagline.to_string(),
        price,
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

// Score vectors below read (core, natural, travel, max).

fn lumora_questions() -> Vec<Question> {
    vec![
        question(
            "sleep-priority",
            "What's your biggest sleep challenge?",
            vec![
                option("I get too hot while sleeping", "temperature", ScoreVector::new(2, 2, 1, 3)),
                option("Noise keeps me awake", "noise", ScoreVector::new(1, 1, 3, 3)),
                option("I wake up groggy", "wakeup", ScoreVector::new(1, 2, 1, 3)),
                option("Light pollution", "light", ScoreVector::new(3, 2, 2, 2)),
            ],
        ),
        question(
            "lifestyle",
            "Which describes your lifestyle best?",
            vec![
                option("Frequent traveler", "traveler", ScoreVector::new(2, 1, 4, 2)),
                option("Eco-conscious wellness enthusiast", "wellness", ScoreVector::new(1, 4, 1, 2)),
                option("Tech-savvy optimizer", "tech", ScoreVector::new(1, 1, 2, 4)),
                option("Simple and practical", "simple", ScoreVector::new(4, 2, 2, 1)),
            ],
        ),
        question(
            "budget",
            "What's your investment range?",
            vec![
                option("Under $100 - Essential quality", "budget", ScoreVector::new(4, 1, 1, 0)),
                option("$100-150 - Good value", "mid", ScoreVector::new(2, 3, 3, 1)),
                option("$150-200 - Premium features", "premium", ScoreVector::new(1, 2, 2, 2)),
                option("$200+ - Best of everything", "luxury", ScoreVector::new(0, 1, 1, 4)),
            ],
        ),
        question(
            "features",
            "Which feature excites you most?",
            vec![
                option("Portable design for travel", "portable", ScoreVector::new(2, 1, 4, 2)),
                option("Natural, organic materials", "organic", ScoreVector::new(2, 4, 1, 2)),
                option("Smart wake-up technology", "smart", ScoreVector::new(1, 1, 2, 4)),
                option("Simple, effective design", "simple", ScoreVector::new(4, 2, 2, 1)),
            ],
        ),
    ]
}

fn lumora_products() -> ProductCatalog {
    ProductCatalog {
        core: product(
            "Lumora Essence",
            "Better Sleep for Everyone",
            89,
            "Perfect for those who want quality sleep essentials without complexity. Features premium light-blocking materials and comfortable design.",
            [
                "Premium light-blocking",
                "Soft, breathable materials",
                "Adjustable strap",
                "Essential comfort",
            ],
        ),
        natural: product(
            "Lumora Pure",
            "Nature Meets Rest",
            129,
            "Ideal for eco-conscious sleepers who value sustainability. Made with organic materials and includes aromatherapy benefits.",
            [
                "Organic cotton exterior",
                "Biodegradable packaging",
                "Aromatherapy infusion",
                "Eco-friendly design",
            ],
        ),
        travel: product(
            "Lumora Voyage",
            "Rest, Anywhere",
            159,
            "Designed for frequent travelers who need quality sleep on the go. Compact, portable, and optimized for various environments.",
            [
                "Ultra-compact design",
                "Noise-dampening technology",
                "Portable charging case",
                "Travel-optimized",
            ],
        ),
        max: product(
            "Lumora Max",
            "Luxury Without Limits",
            299,
            "The ultimate sleep experience with cutting-edge technology. Features smart controls, premium materials, and personalized settings.",
            [
                "Smart temperature control",
                "Bone-conduction audio",
                "Sunrise wake light",
                "App connectivity",
            ],
        ),
    }
}

impl Catalog {
    /// The four-question Lumora sleep-mask quiz
    pub fn lumora() -> Self {
        Self {
            questions: lumora_questions(),
            products: lumora_products(),
        }
    }
}
