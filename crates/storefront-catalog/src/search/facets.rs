//! Filter panel sections with per-option counts.

use serde::{Deserialize, Serialize};

use crate::catalog::{FilterAttributes, Product, SpecialKind, SpecialOption};
use crate::search::{parse_size, FilterParams};

/// Section of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Special,
    Price,
    Size,
    Color,
    Brand,
}

impl SectionId {
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Special => "Особые",
            SectionId::Price => "Цена, руб.",
            SectionId::Size => "Размер",
            SectionId::Color => "Цвет",
            SectionId::Brand => "Бренд",
        }
    }

    /// Sections shown expanded by default.
    pub fn is_open(&self) -> bool {
        matches!(self, SectionId::Special | SectionId::Price)
    }
}

/// How an option is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Checkbox,
    Size,
}

/// A selectable filter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Products of the listing that carry this value.
    pub count: usize,
    /// Whether the active params select this value.
    pub selected: bool,
}

/// Bounds of the current prices in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Min and max current price; `None` for an empty listing.
    pub fn of<'a>(products: impl IntoIterator<Item = &'a Product>) -> Option<Self> {
        products.into_iter().map(Product::current_price).fold(None, |range, price| {
            Some(match range {
                None => PriceRange { min: price, max: price },
                Some(PriceRange { min, max }) => PriceRange {
                    min: min.min(price),
                    max: max.max(price),
                },
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSection {
    pub id: SectionId,
    pub title: String,
    pub is_open: bool,
    pub options: Vec<FilterOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

impl FilterSection {
    fn new(id: SectionId, options: Vec<FilterOption>) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            is_open: id.is_open(),
            options,
            price_range: None,
        }
    }

    /// Number of selected options.
    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|option| option.selected).count()
    }
}

fn option(id: impl Into<String>, label: impl Into<String>, kind: OptionKind, count: usize, selected: bool) -> FilterOption {
    FilterOption {
        id: id.into(),
        label: label.into(),
        kind,
        count,
        selected,
    }
}

fn count(products: &[&Product], predicate: impl Fn(&Product) -> bool) -> usize {
    products.iter().filter(|product| predicate(product)).count()
}

fn special_flag(special: &SpecialOption, product: &Product) -> bool {
    match (special.kind, special.id.as_str()) {
        (SpecialKind::Discount, _) => product.on_sale(),
        (SpecialKind::Badge, "is_new") => product.is_new(),
        (SpecialKind::Badge, "is_hit") => product.is_hit(),
        (SpecialKind::Badge, _) => false,
    }
}

fn special_selected(special: &SpecialOption, params: &FilterParams) -> bool {
    let flag = match (special.kind, special.id.as_str()) {
        (SpecialKind::Discount, _) => params.on_sale,
        (SpecialKind::Badge, "is_new") => params.is_new,
        (SpecialKind::Badge, "is_hit") => params.is_hit,
        (SpecialKind::Badge, _) => None,
    };
    flag == Some(true)
}

/// Build the filter panel for a listing.
///
/// Counts are taken over `products` (the listing before filtering) one
/// option at a time; the price range covers the same set.
pub fn filter_sections(attributes: &FilterAttributes, products: &[&Product], params: &FilterParams) -> Vec<FilterSection> {
    let specials = attributes
        .specials
        .iter()
        .map(|special| {
            option(
                &special.id,
                &special.name,
                OptionKind::Checkbox,
                count(products, |p| special_flag(special, p)),
                special_selected(special, params),
            )
        })
        .collect();

    let mut price = FilterSection::new(
        SectionId::Price,
        vec![option(
            "on_sale",
            "Только товары со скидкой",
            OptionKind::Checkbox,
            count(products, Product::on_sale),
            params.on_sale == Some(true),
        )],
    );
    price.price_range = PriceRange::of(products.iter().copied());

    let sizes = attributes
        .sizes
        .iter()
        .map(|size| {
            let id = size.to_string();
            let selected = params.sizes.iter().any(|s| parse_size(s) == Some(*size));
            option(id.clone(), id, OptionKind::Size, count(products, |p| p.has_size(*size)), selected)
        })
        .collect();

    let colors = attributes
        .colors
        .iter()
        .map(|color| {
            option(
                &color.id,
                &color.name,
                OptionKind::Checkbox,
                count(products, |p| p.color.contains(&color.id)),
                params.colors.contains(&color.id),
            )
        })
        .collect();

    let brands = attributes
        .brands
        .iter()
        .map(|brand| {
            option(
                &brand.id,
                &brand.name,
                OptionKind::Checkbox,
                count(products, |p| p.brand == brand.id),
                params.brands.contains(&brand.id),
            )
        })
        .collect();

    vec![
        FilterSection::new(SectionId::Special, specials),
        price,
        FilterSection::new(SectionId::Size, sizes),
        FilterSection::new(SectionId::Color, colors),
        FilterSection::new(SectionId::Brand, brands),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttributeOption, Badge, ColorSet, Discount};
    use crate::price::Price;

    fn attributes() -> FilterAttributes {
        FilterAttributes {
            sizes: vec![37, 40],
            colors: vec![AttributeOption {
                id: "black".to_string(),
                name: "Чёрный".to_string(),
            }],
            brands: vec![AttributeOption {
                id: "ARA".to_string(),
                name: "ARA".to_string(),
            }],
            specials: vec![
                SpecialOption {
                    id: "is_new".to_string(),
                    name: "Новинки".to_string(),
                    kind: SpecialKind::Badge,
                },
                SpecialOption {
                    id: "on_sale".to_string(),
                    name: "Со скидкой".to_string(),
                    kind: SpecialKind::Discount,
                },
            ],
        }
    }

    fn products() -> Vec<Product> {
        let mut boots = Product::new("1", "Ботинки", "/1/", Price::new("14 392 руб."));
        boots.brand = "ARA".to_string();
        boots.badges.is_new = Badge::new(true, "NEW");
        boots.color = ColorSet::one("black");
        boots.sizes = vec![37, 38];
        boots.is_discount = Discount { active: true, percent: 20 };

        let mut loafers = Product::new("2", "Лоферы", "/2/", Price::new("9 990 руб."));
        loafers.sizes = vec![37, 40];
        vec![boots, loafers]
    }

    #[test]
    fn test_sections_layout() {
        let list = products();
        let refs: Vec<&Product> = list.iter().collect();
        let sections = filter_sections(&attributes(), &refs, &FilterParams::new());

        let ids: Vec<_> = sections.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![SectionId::Special, SectionId::Price, SectionId::Size, SectionId::Color, SectionId::Brand]
        );
        assert!(sections[0].is_open);
        assert!(!sections[2].is_open);
        assert_eq!(sections[1].price_range, Some(PriceRange { min: 9990, max: 14392 }));
    }

    #[test]
    fn test_counts_and_selection() {
        let list = products();
        let refs: Vec<&Product> = list.iter().collect();
        let params = FilterParams::new().with_sizes(["40"]).with_new(true);
        let sections = filter_sections(&attributes(), &refs, &params);

        let specials = &sections[0].options;
        assert_eq!((specials[0].count, specials[0].selected), (1, true));
        assert_eq!((specials[1].count, specials[1].selected), (1, false));

        let sizes = &sections[2].options;
        assert_eq!(sizes[0].count, 2);
        assert!(sizes[1].selected);
        assert_eq!(sections[2].selected_count(), 1);

        assert_eq!(sections[3].options[0].count, 1);
        assert_eq!(sections[4].options[0].count, 1);
    }

    #[test]
    fn test_empty_listing_has_no_price_range() {
        let sections = filter_sections(&attributes(), &[], &FilterParams::new());
        assert!(sections[1].price_range.is_none());
        assert!(sections.iter().flat_map(|s| &s.options).all(|o| o.count == 0));
    }

    #[test]
    fn test_size_selection_follows_parsed_value() {
        let list = products();
        let refs: Vec<&Product> = list.iter().collect();
        let params = FilterParams::new().with_sizes(["40.0"]);
        let sections = filter_sections(&attributes(), &refs, &params);

        let sizes = &sections[2].options;
        assert!(!sizes[0].selected);
        assert!(sizes[1].selected);
    }
}
