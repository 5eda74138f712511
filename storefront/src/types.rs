//! Domain types for the storefront.
//!
//! The serialized shapes here are load-bearing: products and orders are the
//! two durable documents, stored as camelCase JSON arrays so documents
//! written by earlier sessions keep loading unchanged.

use serde::{Deserialize, Serialize};

/// Fixed product categorization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Headphones, speakers.
    Audio,
    /// Watches, bands.
    Wearable,
    /// Phone-adjacent accessories.
    Mobile,
    /// Everything for the house. Also the fallback for drafts that carry
    /// no category.
    #[default]
    Home,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Audio => "Audio",
            Self::Wearable => "Wearable",
            Self::Mobile => "Mobile",
            Self::Home => "Home",
        };
        write!(f, "{name}")
    }
}

/// A catalog entry.
///
/// `id` is assigned once and never changes; it is unique across the
/// catalog. Prices are currency-agnostic dollars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identity, unique across the catalog.
    pub id: String,
    /// Display name. Duplicates across products are permitted.
    pub name: String,
    /// One-line pitch shown in listings.
    pub tagline: String,
    /// Short description.
    pub description: String,
    /// Long-form copy for the detail page; defaults to `description` when
    /// the draft omitted it.
    #[serde(default)]
    pub long_description: String,
    /// Non-negative price in dollars.
    pub price: f64,
    /// Catalog category.
    pub category: Category,
    /// Image location for the presentation layer.
    pub image_url: String,
    /// Ordered feature bullets.
    pub features: Vec<String>,
}

impl Product {
    /// Build a catalog entry from an admin draft and a freshly minted id.
    ///
    /// Applies the draft defaults: price is coerced from the raw form
    /// string (`0` when unparseable or negative), category falls back to
    /// [`Category::Home`], and the long description falls back to the
    /// short one.
    #[must_use]
    pub fn from_draft(draft: ProductDraft, id: String) -> Self {
        let price = draft
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| *p >= 0.0)
            .unwrap_or(0.0);
        let long_description = draft
            .long_description
            .unwrap_or_else(|| draft.description.clone());
        Self {
            id,
            name: draft.name,
            tagline: draft.tagline,
            description: draft.description,
            long_description,
            price,
            category: draft.category.unwrap_or_default(),
            image_url: draft.image_url,
            features: draft.features,
        }
    }
}

/// Partial product description as entered in the admin form.
///
/// `price` stays a raw string here because it arrives from a text input;
/// coercion happens in [`Product::from_draft`].
#[derive(Clone, Debug, Default)]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// One-line pitch.
    pub tagline: String,
    /// Short description.
    pub description: String,
    /// Optional long-form copy.
    pub long_description: Option<String>,
    /// Raw price input, coerced to a non-negative number.
    pub price: String,
    /// Optional category; defaults to [`Category::Home`].
    pub category: Option<Category>,
    /// Image location.
    pub image_url: String,
    /// Feature bullets.
    pub features: Vec<String>,
}

/// Customer identity captured at checkout. Never stored outside the order
/// it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full display name, non-empty.
    pub name: String,
    /// Contact email, non-empty.
    pub email: String,
}

/// Raw checkout form fields.
#[derive(Clone, Debug, Default)]
pub struct CustomerInput {
    /// First name; required.
    pub first_name: String,
    /// Last name; optional.
    pub last_name: String,
    /// Email; required.
    pub email: String,
}

impl CustomerInput {
    /// Combined display name, trimmed when the last name is empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Order lifecycle. The checkout workflow only ever produces
/// [`OrderStatus::Completed`]; the other variants exist so the ledger can
/// carry a pending/cancelled lifecycle without a document migration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed but not finalized.
    Pending,
    /// Finalized by checkout.
    Completed,
    /// Cancelled after placement.
    Cancelled,
}

/// A placed order. Immutable after creation.
///
/// `items` are product snapshots copied by value at placement time, so
/// later catalog edits never retroactively change a placed order, and
/// `total` always equals the sum of the snapshot prices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Display token generated at placement. Shown to the customer; not
    /// required to be unguessable.
    pub id: String,
    /// Product snapshots, in cart order.
    pub items: Vec<Product>,
    /// Sum of item prices at placement time. Shipping is always zero.
    pub total: f64,
    /// Locale-style placement date, `MM/DD/YYYY`.
    pub date: String,
    /// Who placed the order.
    pub customer: Customer,
    /// Lifecycle status.
    pub status: OrderStatus,
}

/// A journal article. Articles are a fixed built-in set and are not
/// admin-editable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    /// Stable identity within the built-in set.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Teaser shown in the journal listing.
    pub excerpt: String,
    /// Full body copy.
    pub content: String,
    /// Hero image location.
    pub image_url: String,
    /// Display date.
    pub date: String,
}

/// The single render switch for the whole screen.
///
/// Exactly one variant is active at any time; every transition is a full
/// replacement, never a partial merge. Selecting a new product while
/// already viewing one replaces the previous selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum View {
    /// Landing screen; initial state and natural resting state.
    #[default]
    Home,
    /// Product detail, with the selected product.
    Product(Product),
    /// Journal article detail, with the selected article.
    Article(Article),
    /// Checkout form.
    Checkout,
    /// Admin dashboard.
    Dashboard,
}

impl View {
    /// Whether global navigation chrome (top and bottom bars) is shown.
    /// Checkout and the dashboard render without it.
    #[must_use]
    pub const fn chrome_visible(&self) -> bool {
        !matches!(self, Self::Checkout | Self::Dashboard)
    }
}

/// User-visible events emitted by the reducer and delivered to observers
/// after the state transition they accompany is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The cart drawer should open.
    CartOpened,
    /// An order was recorded; show the confirmation.
    OrderPlaced {
        /// Display token of the new order.
        order_id: String,
    },
    /// Checkout input was rejected; nothing was mutated.
    CheckoutRejected {
        /// Human-readable reason.
        reason: String,
    },
    /// Scroll the viewport; `None` means top of page.
    ScrollTo {
        /// Named anchor on the home screen.
        anchor: Option<String>,
    },
}

/// Every user action the presentation layer can raise into the core.
#[derive(Clone, Debug)]
pub enum Intent {
    /// Open the detail view for a catalog product.
    SelectProduct {
        /// Catalog id; unknown ids are a silent no-op.
        id: String,
    },
    /// Open the detail view for a journal article.
    SelectArticle {
        /// Article id; unknown ids are a silent no-op.
        id: String,
    },
    /// Return to the home screen.
    GoHome,
    /// Navigate to a named anchor on the home screen, going home first if
    /// needed. An empty anchor means top of page.
    GoToSection {
        /// Anchor element id.
        anchor: String,
    },
    /// Open the admin dashboard.
    GoDashboard,
    /// Add one unit of a product to the cart.
    AddToCart {
        /// Catalog id; unknown ids are a silent no-op.
        product_id: String,
    },
    /// Remove the cart line at a position; out-of-range is a silent no-op.
    RemoveFromCart {
        /// Zero-based line index.
        index: usize,
    },
    /// Open the cart drawer.
    OpenCart,
    /// Close the cart drawer.
    CloseCart,
    /// Start the checkout workflow.
    BeginCheckout,
    /// Submit the checkout form.
    SubmitOrder {
        /// Form fields as entered.
        customer: CustomerInput,
    },
    /// Admin: create a catalog entry from a draft.
    CreateProduct {
        /// Draft as entered in the admin form.
        draft: ProductDraft,
    },
    /// Admin: replace the catalog entry with a matching id.
    UpdateProduct {
        /// Full replacement entry.
        product: Product,
    },
    /// Admin: delete a catalog entry. Past orders keep their snapshots.
    DeleteProduct {
        /// Catalog id; unknown ids are a silent no-op.
        id: String,
    },
}
