use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Shawarma,
    Rolls,
    Platters,
    Combos,
    Momos,
    FriesAndSides,
    Beverages,
}

impl Category {
    /// Tab order on the menu page.
    pub const ALL: [Category; 7] = [
        Category::Shawarma,
        Category::Rolls,
        Category::Platters,
        Category::Combos,
        Category::Momos,
        Category::FriesAndSides,
        Category::Beverages,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Shawarma => "Shawarma",
            Self::Rolls => "Rolls",
            Self::Platters => "Platters",
            Self::Combos => "Combos",
            Self::Momos => "Momos",
            Self::FriesAndSides => "Fries & Sides",
            Self::Beverages => "Beverages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| SiteError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// in rupees
    pub price: u32,
    pub original_price: Option<u32>,
    pub veg: bool,
    pub popular: bool,
    /// zero when the item has no rating yet
    pub rating: f32,
    /// path to image
    pub image: &'static str,
}

impl MenuItem {
    pub const fn new(
        id: u32,
        category: Category,
        name: &'static str,
        description: &'static str,
        price: u32,
        image: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            price,
            original_price: None,
            veg: false,
            popular: false,
            rating: 0.0,
            image,
        }
    }

    pub const fn veg(mut self) -> Self {
        self.veg = true;
        self
    }

    pub const fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    pub const fn rated(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub const fn was(mut self, original_price: u32) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Amount saved against the struck-through price, if the item is discounted.
    pub fn discount(&self) -> Option<u32> {
        self.original_price
            .filter(|&original| original > self.price)
            .map(|original| original - self.price)
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Photo {
    pub url: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Outlet {
    pub id: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub hours: &'static str,
    pub kind: &'static str,
    pub services: &'static [&'static str],
    pub embed_url: &'static str,
    pub map_url: &'static str,
    pub rating: f32,
    pub photos: &'static [Photo],
    pub photos_url: &'static str,
}

impl Outlet {
    /// "Two Brothers Shawarma – Gayatri Nagar" becomes "Gayatri Nagar".
    pub fn short_name(&self) -> &'static str {
        match self.name.split_once('–') {
            Some((_, area)) if !area.trim().is_empty() => area.trim(),
            _ => self.name,
        }
    }

    pub fn short_address(&self) -> String {
        self.address
            .split(',')
            .take(2)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn tel_href(&self) -> String {
        format!("tel:+91{}", self.phone)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: u32,
    pub author: &'static str,
    /// 1 to 5
    pub rating: u8,
    pub time_ago: &'static str,
    pub text: &'static str,
    pub price_range: Option<&'static str>,
}

impl Review {
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Links {
    pub swiggy: &'static str,
    pub zomato: &'static str,
    pub whatsapp: &'static str,
    pub phone: &'static str,
    pub instagram: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub stage: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Founder {
    pub name: &'static str,
    pub title: &'static str,
    pub portrait: Photo,
    pub bio: &'static [&'static str],
    pub quote: &'static str,
    pub expertise: &'static [Highlight],
    pub journey: &'static [Milestone],
    pub vision: &'static [Highlight],
    pub phone: &'static str,
    pub email: &'static str,
}
