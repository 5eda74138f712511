//! The storefront reducer: every intent, one pure function.
//!
//! All mutation rules live here as code: silent no-ops on lookup misses,
//! full-replacement navigation, snapshot-copied orders, and wholesale
//! document rewrites described as effects for the runtime to execute
//! after the commit.

use std::sync::Arc;

use vitrine_core::effect::{Effect, Effects};
use vitrine_core::environment::{Clock, IdGenerator, SystemClock, SystemIds};
use vitrine_core::reducer::Reducer;

use crate::persistence::{CATALOG_KEY, ORDERS_KEY, encode_catalog, encode_orders};
use crate::state::StorefrontState;
use crate::types::{Customer, CustomerInput, Intent, Notice, Order, OrderStatus, Product, View};

/// Injected dependencies for the storefront reducer.
#[derive(Clone)]
pub struct StorefrontEnvironment {
    /// Source of order placement timestamps.
    pub clock: Arc<dyn Clock>,
    /// Source of product ids and order display tokens.
    pub ids: Arc<dyn IdGenerator>,
}

impl StorefrontEnvironment {
    /// Create an environment from explicit dependencies.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Production environment: system clock, system id generator.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(SystemIds))
    }
}

/// Prefix for minted catalog ids, e.g. `p1735689600000`.
const PRODUCT_ID_PREFIX: &str = "p";

/// Reducer over [`StorefrontState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StorefrontReducer;

impl StorefrontReducer {
    fn persist_catalog(state: &StorefrontState) -> Effect<Intent, Notice> {
        Effect::Persist {
            key: CATALOG_KEY,
            document: encode_catalog(state.catalog.products()),
        }
    }

    fn persist_orders(state: &StorefrontState) -> Effect<Intent, Notice> {
        Effect::Persist {
            key: ORDERS_KEY,
            document: encode_orders(state.ledger.orders()),
        }
    }

    fn scroll_top() -> Effect<Intent, Notice> {
        Effect::Emit(Notice::ScrollTo { anchor: None })
    }

    fn validate_submission(state: &StorefrontState, input: &CustomerInput) -> Result<(), String> {
        if input.first_name.trim().is_empty() || input.email.trim().is_empty() {
            return Err("Please enter at least your name and email.".to_string());
        }
        if state.cart.is_empty() {
            return Err("Your cart is empty.".to_string());
        }
        Ok(())
    }

    fn submit_order(
        state: &mut StorefrontState,
        input: CustomerInput,
        env: &StorefrontEnvironment,
    ) -> Effects<Intent, Notice> {
        if let Err(reason) = Self::validate_submission(state, &input) {
            return Effect::just(Effect::Emit(Notice::CheckoutRejected { reason }));
        }

        let order = Order {
            id: env.ids.display_token(),
            items: state.cart.lines().to_vec(),
            total: state.cart.subtotal(),
            date: env.clock.now().format("%m/%d/%Y").to_string(),
            customer: Customer {
                name: input.full_name(),
                email: input.email,
            },
            status: OrderStatus::Completed,
        };
        let order_id = order.id.clone();

        state.ledger.record(order);
        state.cart.clear();
        state.cart_open = false;
        state.view = View::Home;

        let mut effects = Effect::none();
        effects.push(Self::persist_orders(state));
        effects.push(Effect::Emit(Notice::OrderPlaced { order_id }));
        effects
    }
}

impl Reducer for StorefrontReducer {
    type State = StorefrontState;
    type Action = Intent;
    type Event = Notice;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action, Self::Event> {
        match action {
            Intent::SelectProduct { id } => {
                let Some(product) = state.catalog.get(&id).cloned() else {
                    return Effect::none();
                };
                state.view = View::Product(product);
                Effect::just(Self::scroll_top())
            }

            Intent::SelectArticle { id } => {
                let Some(article) = state.article(&id).cloned() else {
                    return Effect::none();
                };
                state.view = View::Article(article);
                Effect::just(Self::scroll_top())
            }

            Intent::GoHome => {
                state.view = View::Home;
                Effect::none()
            }

            Intent::GoToSection { anchor } => {
                if matches!(state.view, View::Home) {
                    let target = if anchor.is_empty() { None } else { Some(anchor) };
                    Effect::just(Effect::Emit(Notice::ScrollTo { anchor: target }))
                } else {
                    // Go home first; scroll only once that transition is
                    // visible to observers.
                    state.view = View::Home;
                    Effect::just(Effect::defer(Intent::GoToSection { anchor }))
                }
            }

            Intent::GoDashboard => {
                state.view = View::Dashboard;
                Effect::just(Self::scroll_top())
            }

            Intent::AddToCart { product_id } => {
                let Some(product) = state.catalog.get(&product_id).cloned() else {
                    return Effect::none();
                };
                state.cart.add_line(product);
                state.cart_open = true;
                Effect::just(Effect::Emit(Notice::CartOpened))
            }

            Intent::RemoveFromCart { index } => {
                state.cart.remove_line(index);
                Effect::none()
            }

            Intent::OpenCart => {
                state.cart_open = true;
                Effect::none()
            }

            Intent::CloseCart => {
                state.cart_open = false;
                Effect::none()
            }

            Intent::BeginCheckout => {
                state.cart_open = false;
                state.view = View::Checkout;
                Effect::just(Self::scroll_top())
            }

            Intent::SubmitOrder { customer } => Self::submit_order(state, customer, env),

            Intent::CreateProduct { draft } => {
                let product = Product::from_draft(draft, env.ids.timestamp_id(PRODUCT_ID_PREFIX));
                state.catalog.add(product);
                Effect::just(Self::persist_catalog(state))
            }

            Intent::UpdateProduct { product } => {
                if state.catalog.update(product) {
                    Effect::just(Self::persist_catalog(state))
                } else {
                    Effect::none()
                }
            }

            Intent::DeleteProduct { id } => {
                if state.catalog.remove(&id) {
                    Effect::just(Self::persist_catalog(state))
                } else {
                    Effect::none()
                }
            }
        }
    }
}
