use crate::product::PizzaItem;

fn item(
    id: u64,
    title: &str,
    description: &str,
    category: &str,
    price: u32,
    image: &str,
) -> PizzaItem {
    PizzaItem {
        id,
        title: title.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        ready_in_minutes: 0,
        instructions: String::new(),
    }
}

/// Hand-authored menu served whenever the recipe source is unusable.
pub fn fallback_catalog() -> Vec<PizzaItem> {
    vec![
        item(
            1,
            "Margherita Classico",
            "Fresh basil, mozzarella, and ripe tomatoes on a crisp crust.",
            "Classic",
            85000,
            "https://images.unsplash.com/photo-1548365328-9f5475c5b1fc?auto=format&fit=crop&w=800&q=80",
        ),
        item(
            2,
            "Pepperoni Burst",
            "Loaded with premium pepperoni, mozzarella, and oregano.",
            "Meat Lover",
            95000,
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?auto=format&fit=crop&w=800&q=80",
        ),
        item(
            3,
            "Truffle Funghi",
            "Portobello mushrooms, white sauce, and a drizzle of truffle oil.",
            "Premium",
            120000,
            "https://images.unsplash.com/photo-1601924582971-d77c5c9f77a3?auto=format&fit=crop&w=800&q=80",
        ),
        item(
            4,
            "Veggie Garden",
            "Bell peppers, olives, sweet corn, and cherry tomatoes.",
            "Vegetarian",
            88000,
            "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?auto=format&fit=crop&w=800&q=80",
        ),
        item(
            5,
            "Spicy Calabrese",
            "Spicy calabrese salami, chili flakes, and roasted garlic.",
            "Spicy",
            99000,
            "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?auto=format&fit=crop&w=800&q=80&sat=-20",
        ),
        item(
            6,
            "Four Cheese Melt",
            "Mozzarella, gorgonzola, parmesan, and provolone blend.",
            "Cheese",
            105000,
            "https://images.unsplash.com/photo-1604382354936-07c5d9983bd3?auto=format&fit=crop&w=800&q=80",
        ),
        item(
            7,
            "BBQ Smokehouse",
            "Smoky BBQ chicken, red onions, and fresh cilantro.",
            "Meat Lover",
            112000,
            "https://images.unsplash.com/photo-1513104890138-7c749659a591?auto=format&fit=crop&w=800&q=80&sat=-30",
        ),
        item(
            8,
            "Pesto Primavera",
            "Basil pesto base, zucchini, cherry tomatoes, and ricotta.",
            "Vegetarian",
            98000,
            "https://images.unsplash.com/photo-1548365328-9f5475c5b1fc?auto=format&fit=crop&w=800&q=80&sat=-25",
        ),
    ]
}
