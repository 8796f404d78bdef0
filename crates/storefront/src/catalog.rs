//! The product catalog.
//!
//! Products are fixed in-process content, built once at startup and held
//! in [`crate::state::AppState`]. Each product carries the four display
//! fields the quick-view modal needs (image, title, scientific name,
//! price) plus a category tag for filtering.

/// Filter token that matches every category.
pub const ALL_CATEGORIES: &str = "todas";

/// Product category tags used by the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Interior,
    Exterior,
    Suculentas,
    Colgantes,
}

impl Category {
    /// Every category, in display order for the filter bar.
    pub const ALL: [Self; 4] = [
        Self::Interior,
        Self::Exterior,
        Self::Suculentas,
        Self::Colgantes,
    ];

    /// The token used in filter query strings and `data-category` tags.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
            Self::Suculentas => "suculentas",
            Self::Colgantes => "colgantes",
        }
    }

    /// Human-readable label for the filter button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interior => "Interior",
            Self::Exterior => "Exterior",
            Self::Suculentas => "Suculentas",
            Self::Colgantes => "Colgantes",
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone)]
pub struct Product {
    /// URL-safe identifier.
    pub handle: &'static str,
    pub title: &'static str,
    pub scientific_name: &'static str,
    /// Display price (e.g. `"$45.000"`).
    pub price: &'static str,
    pub image: &'static str,
    pub category: Category,
}

impl Product {
    /// Whether this product is visible under the given filter token.
    ///
    /// The distinguished [`ALL_CATEGORIES`] token matches everything;
    /// any other token matches by category equality, so an unknown
    /// token simply hides every entry.
    #[must_use]
    pub fn matches_filter(&self, token: &str) -> bool {
        token == ALL_CATEGORIES || self.category.token() == token
    }
}

/// The fixed set of catalog entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: vec![
                Product {
                    handle: "monstera-deliciosa",
                    title: "Monstera Deliciosa",
                    scientific_name: "Monstera deliciosa",
                    price: "$45.000",
                    image: "/static/images/products/monstera-deliciosa.jpg",
                    category: Category::Interior,
                },
                Product {
                    handle: "ficus-lyrata",
                    title: "Ficus Lyrata",
                    scientific_name: "Ficus lyrata",
                    price: "$60.000",
                    image: "/static/images/products/ficus-lyrata.jpg",
                    category: Category::Interior,
                },
                Product {
                    handle: "calathea-orbifolia",
                    title: "Calathea Orbifolia",
                    scientific_name: "Goeppertia orbifolia",
                    price: "$38.000",
                    image: "/static/images/products/calathea-orbifolia.jpg",
                    category: Category::Interior,
                },
                Product {
                    handle: "lavanda",
                    title: "Lavanda",
                    scientific_name: "Lavandula angustifolia",
                    price: "$18.000",
                    image: "/static/images/products/lavanda.jpg",
                    category: Category::Exterior,
                },
                Product {
                    handle: "romero",
                    title: "Romero",
                    scientific_name: "Salvia rosmarinus",
                    price: "$15.000",
                    image: "/static/images/products/romero.jpg",
                    category: Category::Exterior,
                },
                Product {
                    handle: "aloe-vera",
                    title: "Aloe Vera",
                    scientific_name: "Aloe barbadensis miller",
                    price: "$10.000",
                    image: "/static/images/products/aloe-vera.jpg",
                    category: Category::Suculentas,
                },
                Product {
                    handle: "echeveria",
                    title: "Echeveria",
                    scientific_name: "Echeveria elegans",
                    price: "$12.000",
                    image: "/static/images/products/echeveria.jpg",
                    category: Category::Suculentas,
                },
                Product {
                    handle: "potus",
                    title: "Potus",
                    scientific_name: "Epipremnum aureum",
                    price: "$20.000",
                    image: "/static/images/products/potus.jpg",
                    category: Category::Colgantes,
                },
                Product {
                    handle: "helecho-colgante",
                    title: "Helecho Colgante",
                    scientific_name: "Nephrolepis exaltata",
                    price: "$25.000",
                    image: "/static/images/products/helecho-colgante.jpg",
                    category: Category::Colgantes,
                },
            ],
        }
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Entries visible under the given filter token.
    #[must_use]
    pub fn filtered(&self, token: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_filter(token))
            .collect()
    }

    /// Look up a product by handle.
    #[must_use]
    pub fn find(&self, handle: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.handle == handle)
    }

    /// The landing-page selection (first few entries).
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().take(3).collect()
    }
}
