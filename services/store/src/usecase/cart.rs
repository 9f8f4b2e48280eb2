//! Cart reads and mutations. Totals are computed per read, never stored.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{CartRepository, ProductRepository};
use crate::domain::types::{Cart, CartItem, Product};
use crate::error::StoreServiceError;

/// A cart item joined with its product, priced.
pub struct PricedItem {
    pub item: CartItem,
    pub product: Product,
    /// Effective unit price: variant override when the item references one,
    /// product discount applied otherwise.
    pub unit_price_cents: i64,
}

pub struct CartView {
    pub cart: Cart,
    pub items: Vec<PricedItem>,
}

impl CartView {
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.item.quantity)).sum()
    }

    pub fn total_price_cents(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i.unit_price_cents * i64::from(i.item.quantity))
            .sum()
    }
}

async fn price_item<P: ProductRepository>(
    products: &P,
    item: CartItem,
) -> Result<PricedItem, StoreServiceError> {
    let product = products
        .find_by_id(item.product_id)
        .await?
        .ok_or(StoreServiceError::ProductNotFound)?;
    let unit_price_cents = match item.variant_id {
        Some(variant_id) => {
            let variant = products
                .find_variant(variant_id)
                .await?
                .ok_or(StoreServiceError::VariantNotFound)?;
            variant.effective_price_cents(&product)
        }
        None => product.discounted_price_cents(),
    };
    Ok(PricedItem {
        item,
        product,
        unit_price_cents,
    })
}

// ── GetCart ──────────────────────────────────────────────────────────────────

pub struct GetCartUseCase<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    pub carts: C,
    pub products: P,
}

impl<C, P> GetCartUseCase<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    pub async fn execute(&self, account_id: Uuid) -> Result<CartView, StoreServiceError> {
        let cart = self.carts.find_or_create(account_id).await?;
        let mut items = Vec::new();
        for item in self.carts.list_items(cart.id).await? {
            items.push(price_item(&self.products, item).await?);
        }
        Ok(CartView { cart, items })
    }
}

// ── AddCartItem ──────────────────────────────────────────────────────────────

pub struct AddCartItemInput {
    pub product_id: Uuid,
    pub variant_id: Option<Uuid>,
    pub quantity: i32,
}

pub struct AddCartItemUseCase<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    pub carts: C,
    pub products: P,
}

impl<C, P> AddCartItemUseCase<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    /// Adding a (product, variant) pair already in the cart bumps its
    /// quantity instead of inserting a second row.
    pub async fn execute(
        &self,
        account_id: Uuid,
        input: AddCartItemInput,
    ) -> Result<CartItem, StoreServiceError> {
        if input.quantity < 1 {
            return Err(StoreServiceError::InvalidQuantity);
        }

        let product = self
            .products
            .find_by_id(input.product_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or(StoreServiceError::ProductNotFound)?;

        if let Some(variant_id) = input.variant_id {
            let variant = self
                .products
                .find_variant(variant_id)
                .await?
                .ok_or(StoreServiceError::VariantNotFound)?;
            if variant.product_id != product.id {
                return Err(StoreServiceError::VariantNotFound);
            }
        }

        let cart = self.carts.find_or_create(account_id).await?;

        if let Some(existing) = self
            .carts
            .find_item(cart.id, input.product_id, input.variant_id)
            .await?
        {
            let quantity = existing.quantity + input.quantity;
            self.carts.set_item_quantity(existing.id, quantity).await?;
            return Ok(CartItem {
                quantity,
                ..existing
            });
        }

        let now = Utc::now();
        let item = CartItem {
            id: Uuid::new_v4(),
            cart_id: cart.id,
            product_id: input.product_id,
            variant_id: input.variant_id,
            quantity: input.quantity,
            created_at: now,
            updated_at: now,
        };
        self.carts.insert_item(&item).await?;
        Ok(item)
    }
}

// ── UpdateCartItem ───────────────────────────────────────────────────────────

pub struct UpdateCartItemUseCase<C: CartRepository> {
    pub carts: C,
}

impl<C: CartRepository> UpdateCartItemUseCase<C> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<(), StoreServiceError> {
        if quantity < 1 {
            return Err(StoreServiceError::InvalidQuantity);
        }
        let cart = self.carts.find_or_create(account_id).await?;
        // Scoping by cart id keeps one account from touching another's items.
        self.carts
            .find_item_by_id(cart.id, item_id)
            .await?
            .ok_or(StoreServiceError::CartItemNotFound)?;
        self.carts.set_item_quantity(item_id, quantity).await
    }
}

// ── RemoveCartItem ───────────────────────────────────────────────────────────

pub struct RemoveCartItemUseCase<C: CartRepository> {
    pub carts: C,
}

impl<C: CartRepository> RemoveCartItemUseCase<C> {
    pub async fn execute(
        &self,
        account_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), StoreServiceError> {
        let cart = self.carts.find_or_create(account_id).await?;
        self.carts
            .find_item_by_id(cart.id, item_id)
            .await?
            .ok_or(StoreServiceError::CartItemNotFound)?;
        self.carts.delete_item(item_id).await
    }
}
