//! Static content of the site. Everything here is fixed at build time and
//! read-only at runtime.

use crate::data::{
    Category::{self, *},
    Founder, Highlight, Links, MenuItem, Milestone, Outlet, Photo, Review,
};

pub const BRAND: &str = "Two Brothers Shawarma";
pub const CITY: &str = "Nagpur";
/// Overall Google rating shown in the headline, independent of the sampled reviews.
pub const GOOGLE_RATING: f32 = 4.1;
pub const PRICE_FOR_TWO: u32 = 300;
pub const VIDEO: &str = "/gallery/showcase-video.mp4";

pub static LINKS: Links = Links {
    swiggy: "https://www.swiggy.com/city/nagpur/two-brothers-shawarma-gayatri-nagar",
    zomato: "https://www.zomato.com/nagpur/two-brothers-shawarma-gayatri-nagar",
    whatsapp: "https://wa.me/918668851656",
    phone: "tel:+918668851656",
    instagram: "https://www.instagram.com/two_brothers_shawarma/?hl=en",
};

const fn dish(
    id: u32,
    category: Category,
    name: &'static str,
    description: &'static str,
    price: u32,
    image: &'static str,
) -> MenuItem {
    MenuItem::new(id, category, name, description, price, image)
}

pub static MENU_ITEMS: [MenuItem; 54] = [
    // shawarma
    dish(1, Shawarma, "Classic Chicken Shawarma", "Juicy grilled chicken, garlic toum, pickles and fries rolled in soft pita.", 119, "/menu/classic-chicken-shawarma.jpeg").rated(4.3),
    dish(2, Shawarma, "Crispy Chicken Shawarma", "Golden-fried chicken strips, garlic sauce, pickled veggies, wrapped tight.", 149, "https://images.pexels.com/photos/29306505/pexels-photo-29306505.jpeg?auto=compress&cs=tinysrgb&w=800").rated(4.5).was(169).popular(),
    dish(3, Shawarma, "Open Chicken Shawarma", "Served open-style with double filling, drizzled in house special sauce.", 189, "https://images.pexels.com/photos/18330008/pexels-photo-18330008.jpeg?auto=compress&cs=tinysrgb&w=800").rated(4.4).popular(),
    dish(4, Shawarma, "Double Cheese Chicken", "Melted mozzarella and cheddar over juicy grilled chicken. Pure indulgence.", 209, "https://images.pexels.com/photos/29285458/pexels-photo-29285458.jpeg?auto=compress&cs=tinysrgb&w=800").rated(4.6).was(239).popular(),
    dish(5, Shawarma, "Maharaja Paneer Shawarma", "Marinated paneer, mint chutney and crunchy onions. Veg perfection.", 169, "https://images.pexels.com/photos/29173105/pexels-photo-29173105.jpeg?auto=compress&cs=tinysrgb&w=800").rated(4.4).veg().popular(),
    dish(6, Shawarma, "Peri Peri Chicken Shawarma", "Fiery peri peri chicken with lettuce, tomato and creamy garlic.", 139, "/menu/peri-peri-chicken-shawarma.jpeg").rated(4.2),
    dish(7, Shawarma, "Tandoori Chicken Shawarma", "Smoky tandoori-marinated chicken with onion rings and mint mayo.", 139, "/menu/tandoori-chicken-shawarma.jpeg").rated(4.2),
    dish(8, Shawarma, "Schezwan Chicken Shawarma", "Indo-Chinese twist with spicy schezwan sauce and crunchy cabbage.", 139, "/menu/schezwan-chicken-shawarma.jpeg"),
    dish(9, Shawarma, "Cheese Burst Chicken Shawarma", "Chicken shawarma loaded with a molten cheese sauce.", 179, "/menu/cheese-burst-chicken-shawarma.jpeg").rated(4.3),
    dish(10, Shawarma, "Lebanese Chicken Shawarma", "Authentic Lebanese style with toum, pickled turnip and fries.", 159, "/menu/lebanese-chicken-shawarma.jpeg").rated(4.5),
    dish(11, Shawarma, "Paneer Tikka Shawarma", "Chargrilled paneer tikka, onions and green chutney in pita.", 149, "/menu/paneer-tikka-shawarma.jpeg").rated(4.1).veg(),
    dish(12, Shawarma, "Veg Falafel Shawarma", "Crispy chickpea falafel, hummus, tahini and fresh salad.", 129, "/menu/veg-falafel-shawarma.jpeg").rated(4.0).veg(),
    dish(13, Shawarma, "Mushroom Shawarma", "Sauteed mushrooms with herbs, garlic sauce and lettuce.", 129, "/menu/mushroom-shawarma.jpeg").veg(),
    dish(14, Shawarma, "Jumbo Chicken Shawarma", "Twice the chicken, twice the sauce. For serious appetites.", 199, "/menu/jumbo-chicken-shawarma.jpeg").rated(4.4).was(229),
    // rolls
    dish(15, Rolls, "Rumali Maharaja Roll", "Soft rumali roti loaded with spiced chicken, tahini and fresh herbs.", 229, "https://images.pexels.com/photos/18177341/pexels-photo-18177341.jpeg?auto=compress&cs=tinysrgb&w=800").rated(4.5).popular(),
    dish(16, Rolls, "Chicken Kathi Roll", "Chicken tikka, onions and tangy sauces in a flaky paratha.", 129, "/menu/chicken-kathi-roll.jpeg").rated(4.2),
    dish(17, Rolls, "Egg Chicken Roll", "Egg-coated paratha wrapped around spiced chicken tikka.", 139, "/menu/egg-chicken-roll.jpeg").rated(4.1),
    dish(18, Rolls, "Paneer Kathi Roll", "Paneer tikka, capsicum and onions in a flaky paratha.", 119, "/menu/paneer-kathi-roll.jpeg").rated(4.0).veg(),
    dish(19, Rolls, "Veg Seekh Roll", "Spiced vegetable seekh with mint chutney and onions.", 109, "/menu/veg-seekh-roll.jpeg").veg(),
    dish(20, Rolls, "Chicken Seekh Roll", "Minced chicken seekh kebab, onions and a squeeze of lemon.", 149, "/menu/chicken-seekh-roll.jpeg").rated(4.2),
    dish(21, Rolls, "Double Egg Roll", "Two eggs, onions and green chillies in a crisp paratha.", 89, "/menu/double-egg-roll.jpeg"),
    dish(22, Rolls, "Rumali Paneer Roll", "Rumali roti with paneer, tahini and pickled onions.", 189, "/menu/rumali-paneer-roll.jpeg").rated(4.1).veg(),
    // platters
    dish(23, Platters, "Chicken Shawarma Platter", "Sliced shawarma chicken, fries, hummus, pita and salad.", 249, "/menu/chicken-shawarma-platter.jpeg").rated(4.5),
    dish(24, Platters, "Arabic Platter", "Chicken shawarma, falafel, hummus, garlic toum and pickles.", 279, "/menu/arabic-platter.jpeg").rated(4.4).was(319),
    dish(25, Platters, "Falafel Platter", "Falafel, hummus, pita, tahini and fresh salad.", 219, "/menu/falafel-platter.jpeg").rated(4.1).veg(),
    dish(26, Platters, "Paneer Platter", "Grilled paneer, rice, hummus, pita and salad.", 239, "/menu/paneer-platter.jpeg").veg(),
    dish(27, Platters, "Grilled Chicken Platter", "Chargrilled chicken, rice, garlic sauce and pickled veggies.", 269, "/menu/grilled-chicken-platter.jpeg").rated(4.3),
    dish(28, Platters, "Mezze Platter", "Hummus, baba ganoush, falafel and warm pita.", 229, "/menu/mezze-platter.jpeg").rated(4.2).veg(),
    // combos
    dish(29, Combos, "Shawarma Fries Cola Combo", "Classic chicken shawarma with salted fries and a chilled cola.", 199, "/menu/shawarma-fries-cola-combo.jpeg").rated(4.3).was(229),
    dish(30, Combos, "Two Brothers Combo", "Two chicken shawarmas, peri peri fries and two drinks.", 349, "/menu/two-brothers-combo.jpeg").rated(4.5).was(399),
    dish(31, Combos, "Veg Combo", "Paneer shawarma, salted fries and a lemon mint cooler.", 219, "/menu/veg-combo.jpeg").rated(4.0).veg(),
    dish(32, Combos, "Momos Combo", "Steamed chicken momos, fried momos and a cold drink.", 229, "/menu/momos-combo.jpeg"),
    dish(33, Combos, "Family Feast", "Four shawarmas, a platter, large fries and four drinks.", 899, "/menu/family-feast.jpeg").rated(4.6).was(999),
    dish(34, Combos, "Student Saver", "Classic chicken shawarma with a cold drink.", 139, "/menu/student-saver.jpeg").rated(4.2),
    // momos
    dish(35, Momos, "Chicken Fried Momos", "Crispy fried momos with spicy schezwan dip. Snack-time favourite.", 129, "https://images.pexels.com/photos/28445587/pexels-photo-28445587.jpeg?auto=compress&cs=tinysrgb&w=800").rated(4.4).popular(),
    dish(36, Momos, "Chicken Steamed Momos", "Soft steamed dumplings with red chilli chutney.", 109, "/menu/chicken-steamed-momos.jpeg").rated(4.2),
    dish(37, Momos, "Veg Steamed Momos", "Cabbage, carrot and onion filling, steamed soft.", 89, "/menu/veg-steamed-momos.jpeg").rated(4.0).veg(),
    dish(38, Momos, "Veg Fried Momos", "Golden fried vegetable momos with schezwan dip.", 99, "/menu/veg-fried-momos.jpeg").rated(4.0).veg(),
    dish(39, Momos, "Paneer Momos", "Spiced paneer filling, steamed and served with chutney.", 119, "/menu/paneer-momos.jpeg").rated(4.1).veg(),
    dish(40, Momos, "Cheese Corn Momos", "Sweet corn and cheese in a soft steamed wrapper.", 129, "/menu/cheese-corn-momos.jpeg").veg(),
    dish(41, Momos, "Chicken Tandoori Momos", "Momos tossed in tandoori masala and finished on the grill.", 149, "/menu/chicken-tandoori-momos.jpeg").rated(4.3),
    dish(42, Momos, "Chicken Kurkure Momos", "Extra crunchy coated momos with a mayo dip.", 149, "/menu/chicken-kurkure-momos.jpeg").rated(4.2),
    // fries and sides
    dish(43, FriesAndSides, "Salted Fries", "Crispy golden fries with a pinch of sea salt.", 79, "/menu/salted-fries.jpeg").rated(4.0).veg(),
    dish(44, FriesAndSides, "Peri Peri Fries", "Fries tossed in house peri peri seasoning.", 99, "/menu/peri-peri-fries.jpeg").rated(4.2).veg(),
    dish(45, FriesAndSides, "Cheesy Fries", "Fries smothered in warm cheese sauce.", 129, "/menu/cheesy-fries.jpeg").rated(4.3).veg(),
    dish(46, FriesAndSides, "Chicken Loaded Fries", "Fries topped with shawarma chicken, garlic sauce and jalapenos.", 169, "/menu/chicken-loaded-fries.jpeg").rated(4.4),
    dish(47, FriesAndSides, "Hummus with Pita", "Creamy chickpea hummus, olive oil and warm pita.", 119, "/menu/hummus-with-pita.jpeg").rated(4.1).veg(),
    dish(48, FriesAndSides, "Garlic Toum Dip", "Whipped Lebanese garlic sauce, extra portion.", 29, "/menu/garlic-toum-dip.jpeg").veg(),
    dish(49, FriesAndSides, "Chicken Nuggets", "Crumb-fried chicken nuggets with a spicy mayo dip.", 119, "/menu/chicken-nuggets.jpeg").rated(4.0),
    dish(50, FriesAndSides, "Falafel Bites", "Six crispy falafel with tahini dip.", 99, "/menu/falafel-bites.jpeg").rated(4.0).veg(),
    // beverages
    dish(51, Beverages, "Lemon Mint Cooler", "Fresh lime, mint and soda over ice.", 69, "/menu/lemon-mint-cooler.jpeg").rated(4.1).veg(),
    dish(52, Beverages, "Cold Coffee", "Thick blended coffee with a scoop of ice cream.", 99, "/menu/cold-coffee.jpeg").rated(4.2).veg(),
    dish(53, Beverages, "Mango Shake", "Alphonso mango blended with chilled milk.", 99, "/menu/mango-shake.jpeg").veg(),
    dish(54, Beverages, "Soft Drink", "Chilled 250 ml can.", 40, "/menu/soft-drink.jpeg").veg(),
];

pub fn item(id: u32) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}

pub static HERO_IMAGES: [Photo; 5] = [
    Photo {
        url: "https://images.pexels.com/photos/12203625/pexels-photo-12203625.jpeg?auto=compress&cs=tinysrgb&w=1920",
        alt: "Traditional shawarma meat on vertical grill",
    },
    Photo {
        url: "https://images.pexels.com/photos/5779364/pexels-photo-5779364.jpeg?auto=compress&cs=tinysrgb&w=1920",
        alt: "Close-up of freshly sliced shawarma wrap",
    },
    Photo {
        url: "https://images.pexels.com/photos/5602502/pexels-photo-5602502.jpeg?auto=compress&cs=tinysrgb&w=1920",
        alt: "Chef preparing fresh doner kebab",
    },
    Photo {
        url: "https://images.pexels.com/photos/34434561/pexels-photo-34434561.jpeg?auto=compress&cs=tinysrgb&w=1920",
        alt: "Juicy doner rotating on vertical grill",
    },
    Photo {
        url: "https://images.pexels.com/photos/13160092/pexels-photo-13160092.jpeg?auto=compress&cs=tinysrgb&w=1920",
        alt: "Shawarma rotating on spit in restaurant",
    },
];

/// Signature dishes on the home page: (menu item id, tag).
pub static SIGNATURE_DISHES: [(u32, &str); 6] = [
    (2, "Bestseller"),
    (3, "Premium"),
    (4, "Cheesy"),
    (5, "Veg Special"),
    (15, "Royal"),
    (35, "Crispy"),
];

macro_rules! gallery {
    ($($n:literal),+ $(,)?) => {
        [$(Photo {
            url: concat!("/gallery/gallery-", $n, ".jpeg"),
            alt: concat!("Two Brothers Shawarma - Photo ", $n),
        }),+]
    };
}

pub static GALLERY: [Photo; 14] = gallery!(
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14",
);

pub static OUTLETS: [Outlet; 4] = [
    Outlet {
        id: 1,
        name: "Two Brothers Shawarma – Gayatri Nagar",
        address: "Plot 12, Gayatri Nagar Square, IT Park Road, Nagpur, Maharashtra 440022",
        phone: "8668851656",
        hours: "12:00 PM – 11:30 PM",
        kind: "Restaurant",
        services: &["Dine-in", "Takeaway", "Delivery"],
        embed_url: "https://www.google.com/maps?q=Two+Brothers+Shawarma+Gayatri+Nagar+Nagpur&output=embed",
        map_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Gayatri+Nagar+Nagpur",
        rating: 4.2,
        photos: &[
            Photo { url: "/outlets/gayatri-nagar-1.jpeg", alt: "Gayatri Nagar outlet counter" },
            Photo { url: "/outlets/gayatri-nagar-2.jpeg", alt: "Gayatri Nagar outlet seating" },
            Photo { url: "/outlets/gayatri-nagar-3.jpeg", alt: "Shawarma grill at Gayatri Nagar" },
        ],
        photos_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Gayatri+Nagar+Nagpur",
    },
    Outlet {
        id: 2,
        name: "Two Brothers Shawarma – Manish Nagar",
        address: "Shop 4, Somalwada Road, Manish Nagar, Nagpur, Maharashtra 440015",
        phone: "8668851656",
        hours: "12:00 PM – 11:00 PM",
        kind: "Takeaway",
        services: &["Takeaway", "Delivery"],
        embed_url: "https://www.google.com/maps?q=Two+Brothers+Shawarma+Manish+Nagar+Nagpur&output=embed",
        map_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Manish+Nagar+Nagpur",
        rating: 4.1,
        photos: &[
            Photo { url: "/outlets/manish-nagar-1.jpeg", alt: "Manish Nagar outlet front" },
            Photo { url: "/outlets/manish-nagar-2.jpeg", alt: "Fresh wraps at Manish Nagar" },
        ],
        photos_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Manish+Nagar+Nagpur",
    },
    Outlet {
        id: 3,
        name: "Two Brothers Shawarma – Dharampeth",
        address: "Near Trikoni Park, West High Court Road, Dharampeth, Nagpur, Maharashtra 440010",
        phone: "8668851656",
        hours: "1:00 PM – 12:00 AM",
        kind: "Restaurant",
        services: &["Dine-in", "Takeaway", "Delivery"],
        embed_url: "https://www.google.com/maps?q=Two+Brothers+Shawarma+Dharampeth+Nagpur&output=embed",
        map_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Dharampeth+Nagpur",
        rating: 4.3,
        photos: &[
            Photo { url: "/outlets/dharampeth-1.jpeg", alt: "Dharampeth outlet at night" },
            Photo { url: "/outlets/dharampeth-2.jpeg", alt: "Dharampeth outlet kitchen" },
            Photo { url: "/outlets/dharampeth-3.jpeg", alt: "Platters served at Dharampeth" },
            Photo { url: "/outlets/dharampeth-4.jpeg", alt: "Dharampeth outlet seating" },
        ],
        photos_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Dharampeth+Nagpur",
    },
    Outlet {
        id: 4,
        name: "Two Brothers Shawarma – Sadar",
        address: "Mount Road, Sadar, Nagpur, Maharashtra 440001",
        phone: "8668851656",
        hours: "12:00 PM – 11:00 PM",
        kind: "Takeaway",
        services: &["Takeaway", "Delivery"],
        embed_url: "https://www.google.com/maps?q=Two+Brothers+Shawarma+Sadar+Nagpur&output=embed",
        map_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Sadar+Nagpur",
        rating: 4.0,
        photos: &[],
        photos_url: "https://www.google.com/maps/search/?api=1&query=Two+Brothers+Shawarma+Sadar+Nagpur",
    },
];

pub fn outlet(id: u32) -> Option<&'static Outlet> {
    OUTLETS.iter().find(|outlet| outlet.id == id)
}

const fn review(
    id: u32,
    author: &'static str,
    rating: u8,
    time_ago: &'static str,
    text: &'static str,
    price_range: Option<&'static str>,
) -> Review {
    Review {
        id,
        author,
        rating,
        time_ago,
        text,
        price_range,
    }
}

pub static REVIEWS: [Review; 18] = [
    review(1, "Aditya Deshmukh", 5, "2 weeks ago", "Best shawarma in Nagpur, hands down. The crispy chicken one is loaded and the garlic sauce is addictive.", Some("₹200–400")),
    review(2, "Sneha Patil", 5, "a month ago", "Best in business.. must try", None),
    review(3, "Mohammed Irfan", 5, "3 weeks ago", "Proper Lebanese taste with toum and pickles. Staff is polite and the order was ready in ten minutes.", Some("₹200–400")),
    review(4, "Priya Wankhede", 5, "a month ago", "Best service Best taste Yummy!!", None),
    review(5, "Rohit Meshram", 5, "2 months ago", "Double cheese chicken is pure indulgence. Portions are generous for the price, will come back with friends.", Some("₹1–200")),
    review(6, "Ayesha Khan", 5, "a week ago", "The paneer shawarma is the best veg option I have had anywhere in the city. Fresh and not oily at all.", None),
    review(7, "Kunal Thakre", 4, "3 months ago", "Tasty rolls and quick service. Seating is a little limited during the evening rush.", Some("₹200–400")),
    review(8, "Vaishnavi Joshi", 5, "2 weeks ago", "Loved the fried momos with schezwan dip.", None),
    review(9, "Sameer Sheikh", 5, "4 months ago", "Been ordering every weekend for a year now and the quality has never dropped once. Consistency is unmatched.", None),
    review(10, "Nikhil Bawane", 5, "a month ago", "Great taste, fair prices.", Some("₹1–200")),
    review(11, "Fatima Ansari", 5, "5 months ago", "Family feast combo was enough for five of us. Everything arrived hot and well packed.", Some("₹600–800")),
    review(12, "Harshal Gawande", 3, "6 months ago", "Food is good but delivery took longer than promised on a rainy evening.", None),
    review(13, "Pooja Raut", 5, "a week ago", "Rumali Maharaja roll is a must try. Super soft and loaded.", None),
    review(14, "Arjun Nair", 5, "2 months ago", "Clean kitchen, friendly owner, great shawarma.", None),
    review(15, "Tanvi Kulkarni", 5, "3 weeks ago", "Best shawarma in Nagpur", None),
    review(16, "Imran Qureshi", 5, "4 months ago", "The open shawarma with house special sauce is something else. Worth every rupee.", Some("₹200–400")),
    review(17, "Shubham Ingle", 5, "a month ago", "Quick, tasty and affordable. Perfect late night food.", None),
    review(18, "Neha Chaudhari", 5, "5 days ago", "Peri peri fries and a classic shawarma is my go-to order.", None),
];

pub static FOUNDER: Founder = Founder {
    name: "Mr. Shameem Raza",
    title: "Owner, Two Brothers Shawarma",
    portrait: Photo {
        url: "/founder.jpg",
        alt: "Mr. Shameem Raza - Owner, Two Brothers Shawarma",
    },
    bio: &[
        "Mr. Shameem Raza, the owner of Two Brothers Shawarma, is a seasoned professional with over 18 years of experience in the culinary and hospitality industry.",
        "His expertise spans cooking, food & beverage management, menu innovation, catering, and pre-opening operations, making him a versatile leader in the field.",
        "He has worked across multiple countries and renowned five-star hotels like Jaypee, Park Plaza, Sarovar and Radisson before bringing that training home to Nagpur.",
    ],
    quote: "Every shawarma we make is a promise, a promise of freshness, flavor, and love. 18 years of culinary experience in every bite.",
    expertise: &[
        Highlight {
            title: "Culinary Mastery",
            text: "18+ years of hands-on experience in cooking and recipe innovation across international kitchens.",
        },
        Highlight {
            title: "Five-Star Hotels",
            text: "Worked with renowned brands: Jaypee, Park Plaza, Sarovar, Radisson and more.",
        },
        Highlight {
            title: "F&B Management",
            text: "Expert in food & beverage operations, menu innovation, catering, and hospitality management.",
        },
        Highlight {
            title: "Pre-Opening Specialist",
            text: "Spearheaded pre-opening operations for multiple hotels and restaurants, ensuring smooth launches.",
        },
    ],
    journey: &[
        Milestone {
            stage: "Education",
            title: "Air Force School & Hotel Management",
            text: "Completed schooling from Air Force School, Gwalior. Earned his degree in Hotel Management from Hyderabad.",
        },
        Milestone {
            stage: "Career",
            title: "International Culinary Journey",
            text: "Gained working experience across multiple countries and renowned five-star hotels: Jaypee, Park Plaza, Sarovar, Radisson and more.",
        },
        Milestone {
            stage: "Innovation",
            title: "Recipe Creation & Menu Design",
            text: "Created innovative recipes and menus, earning acclaim for culinary creativity across every establishment he worked with.",
        },
        Milestone {
            stage: "Legacy",
            title: "Two Brothers Shawarma",
            text: "Founded Two Brothers Shawarma in Nagpur, bringing 18 years of culinary expertise to create Nagpur's most loved shawarma brand with 4 outlets.",
        },
    ],
    vision: &[
        Highlight {
            title: "Our Mission",
            text: "To serve the freshest, most flavorful shawarma in Nagpur at prices everyone can afford.",
        },
        Highlight {
            title: "Our Values",
            text: "Quality ingredients, honest pricing, and a commitment to making every customer smile.",
        },
        Highlight {
            title: "Our Vision",
            text: "To become Maharashtra's most loved shawarma chain, one delicious wrap at a time.",
        },
    ],
    phone: "+91 8668851656",
    email: "chefraza6688@gmail.com",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = MENU_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), MENU_ITEMS.len());

        let outlets: HashSet<_> = OUTLETS.iter().map(|outlet| outlet.id).collect();
        assert_eq!(outlets.len(), OUTLETS.len());
    }

    #[test]
    fn signature_dishes_are_popular_items() {
        for (id, _) in SIGNATURE_DISHES {
            let item = item(id).expect("signature dish missing from the menu");
            assert!(item.popular, "{} is not flagged popular", item.name);
        }
    }

    #[test]
    fn review_ratings_are_stars() {
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn outlet_short_names() {
        let names: Vec<_> = OUTLETS.iter().map(Outlet::short_name).collect();
        assert_eq!(names, ["Gayatri Nagar", "Manish Nagar", "Dharampeth", "Sadar"]);
        assert_eq!(
            outlet(1).unwrap().short_address(),
            "Plot 12, Gayatri Nagar Square"
        );
        assert_eq!(outlet(1).unwrap().tel_href(), "tel:+918668851656");
    }

    #[test]
    fn gallery_paths_are_zero_padded() {
        assert_eq!(GALLERY[0].url, "/gallery/gallery-01.jpeg");
        assert_eq!(GALLERY[13].url, "/gallery/gallery-14.jpeg");
    }
}
