use payloads::{Category, CategoryId, Product, ProductId, User, UserId};

/// Fallback when an id has no match in the reference collection. Reference
/// lists are read-only caches fetched by sibling hooks; nothing enforces
/// referential integrity client-side, so misses are expected during
/// loading and after deletions.
pub const UNKNOWN: &str = "Unknown";

/// Resolve a user id to "First Last" against a cache of users.
pub fn user_display_name(id: &UserId, users: &[User]) -> String {
    users
        .iter()
        .find(|user| &user.id == id)
        .map(User::display_name)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn product_name(id: &ProductId, products: &[Product]) -> String {
    products
        .iter()
        .find(|product| &product.id == id)
        .map(|product| product.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn category_name(id: &CategoryId, categories: &[Category]) -> String {
    categories
        .iter()
        .find(|category| &category.id == id)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// First `max_words` whitespace-separated words of `text`, with "..."
/// appended when anything was cut; shorter text passes through unchanged.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    let mut truncated = words[..max_words].join(" ");
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![User {
            id: UserId("u1".to_string()),
            first_name: "Alice".to_string(),
            last_name: "Martin".to_string(),
            email: "alice@example.com".to_string(),
        }]
    }

    #[test]
    fn test_user_display_name_formats_first_and_last() {
        let name = user_display_name(&UserId("u1".to_string()), &users());
        assert_eq!(name, "Alice Martin");
    }

    #[test]
    fn test_lookups_fall_back_to_unknown() {
        assert_eq!(
            user_display_name(&UserId("ghost".to_string()), &users()),
            "Unknown"
        );
        assert_eq!(
            product_name(&ProductId("ghost".to_string()), &[]),
            "Unknown"
        );
        assert_eq!(
            category_name(&CategoryId("ghost".to_string()), &[]),
            "Unknown"
        );
    }

    #[test]
    fn test_truncate_words_cuts_and_marks() {
        assert_eq!(
            truncate_words("one two three four five", 3),
            "one two three..."
        );
    }

    #[test]
    fn test_truncate_words_leaves_short_text_unchanged() {
        assert_eq!(truncate_words("short text", 10), "short text");
        assert_eq!(truncate_words("", 3), "");
    }
}
