use crate::error::CommerceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a non-negative monetary value with decimal precision.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for price calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // `Decimal` has an inherent `deserialize([u8; 16])` that shadows the
        // serde trait method, so the trait call must be fully qualified.
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Money::new(value).map_err(serde::de::Error::custom)
    }
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CommerceError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CommerceError::Validation(
                "Money must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Scales the amount by an item quantity.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Converts to the smallest currency unit (e.g. cents), rounding half-up.
    ///
    /// Payment processors expect amounts in minor units.
    pub fn minor_units(&self) -> i64 {
        use rust_decimal::prelude::ToPrimitive;
        use rust_decimal::RoundingStrategy;
        let scaled = self.0 * Decimal::from(100);
        scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(i64::MAX)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = CommerceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product category (e.g. "Books", "Coffee Mugs").
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ProductCategory {
    pub id: u64,
    pub category_name: String,
}

/// A catalog product.
///
/// `unit_price` is the price per unit; `units_in_stock` is decremented when
/// orders are placed. Inactive products cannot be purchased.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub id: u64,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub unit_price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
    pub active: bool,
    pub units_in_stock: u32,
    pub category_id: u64,
}

impl Product {
    /// Whether `quantity` units can currently be sold.
    pub fn can_fulfil(&self, quantity: u32) -> bool {
        self.active && self.units_in_stock >= quantity
    }
}

/// A zero-based page request. The size is clamped to `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

pub const MAX_PAGE_SIZE: usize = 100;

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 20)
    }
}

/// One page of results plus the metadata a client needs to paginate.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Slices a page out of a fully materialized, already-ordered result set.
    pub fn from_slice(all: Vec<T>, request: PageRequest) -> Self {
        let total_elements = all.len();
        let total_pages = total_elements.div_ceil(request.size());
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.size())
            .collect();
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
