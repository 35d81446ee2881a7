use crate::models::GroceryItem;

/// The shopping list offered on the food-order form.
pub fn default_catalog() -> Vec<GroceryItem> {
    let items: [(&str, &str, u32); 16] = [
        ("Whole grain bread", "Bakery", 249),
        ("Oat flakes 1kg", "Breakfast", 189),
        ("Greek yogurt 500g", "Dairy", 229),
        ("Milk 1L", "Dairy", 119),
        ("Eggs (10)", "Dairy", 299),
        ("Chicken breast 1kg", "Meat & Fish", 899),
        ("Salmon fillet 400g", "Meat & Fish", 649),
        ("Minced beef 500g", "Meat & Fish", 549),
        ("Basmati rice 1kg", "Pantry", 279),
        ("Whole wheat pasta 500g", "Pantry", 149),
        ("Bananas 1kg", "Fruit & Veg", 169),
        ("Apples 1kg", "Fruit & Veg", 229),
        ("Broccoli", "Fruit & Veg", 139),
        ("Sweet potatoes 1kg", "Fruit & Veg", 249),
        ("Peanut butter", "Pantry", 329),
        ("Mineral water 6x1.5L", "Drinks", 399),
    ];

    items
        .iter()
        .enumerate()
        .map(|(i, (name, category, price_cents))| GroceryItem {
            id: i as u32 + 1,
            name: name.to_string(),
            category: category.to_string(),
            price_cents: *price_cents,
        })
        .collect()
}
