//! Task categories and the color palette

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
}

impl Category {
    /// Build a category from user input: the name is capitalized and the
    /// color resolved with [`pick_color`].
    pub fn new(name: &str, color: &str) -> Result<Self, String> {
        let name = capitalize(name.trim());
        if name.is_empty() {
            return Err("Category name must not be empty".to_string());
        }
        Ok(Category {
            name,
            color: pick_color(color)?,
        })
    }
}

/// Colors offered when creating a category.
pub const PALETTE: [&str; 10] = [
    "#0223CF", "#CB02CF", "#FFA800", "#9327FF", "#02CF2F", "#EE00D6", "#0190E0", "#FF5C00",
    "#4E963D", "#32DAFF",
];

/// Built-in categories
pub fn seed_categories() -> Vec<Category> {
    [
        ("sales", "#FC71FF"),
        ("backoffice", "#1FD7C1"),
        ("marketing", "#0038FF"),
        ("design", "#FF7A00"),
        ("media", "#FF0000"),
    ]
    .into_iter()
    .map(|(name, color)| Category {
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// Upper-case the first character, keep the rest as typed.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn hex_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{6})$").unwrap())
}

fn rgb_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
    })
}

/// Accept `#rrggbb` or CSS `rgb(r, g, b)` and return `#RRGGBB`.
pub fn normalize_color(input: &str) -> Result<String, String> {
    let input = input.trim();

    if let Some(caps) = hex_regex().captures(input) {
        return Ok(format!("#{}", caps[1].to_uppercase()));
    }

    if let Some(caps) = rgb_regex().captures(input) {
        let mut hex = String::from("#");
        for i in 1..=3 {
            let channel: u8 = caps[i]
                .parse()
                .map_err(|_| format!("Invalid color: '{}' (channel out of range)", input))?;
            hex.push_str(&format!("{:02X}", channel));
        }
        return Ok(hex);
    }

    Err(format!("Invalid color: '{}'", input))
}

/// Resolve a color choice: a palette number, or anything
/// [`normalize_color`] accepts.
pub fn pick_color(input: &str) -> Result<String, String> {
    match input.trim().parse::<usize>() {
        Ok(n) => PALETTE.get(n).map(|c| c.to_string()).ok_or_else(|| {
            format!(
                "Invalid color: palette has no entry {} (0-{})",
                n,
                PALETTE.len() - 1
            )
        }),
        Err(_) => normalize_color(input),
    }
}

/// Label color of the category a task is tagged with.
///
/// Tasks store category names as typed while categories may be capitalized,
/// so names are compared without case.
pub fn color_for_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a str> {
    categories
        .iter()
        .find(|c| c.name.to_lowercase() == name.to_lowercase())
        .map(|c| c.color.as_str())
}
