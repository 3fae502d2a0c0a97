use crate::{
    model::sale_order::{OrderActionDto, SaleOrderDto},
    server::{
        data::{
            partner::PartnerRepository,
            sale_order::{SaleOrderRecord, SaleOrderRepository},
        },
        error::Error,
        odoo::{OdooClient, Session},
    },
};

pub struct SaleOrderService<'a> {
    partners: PartnerRepository<'a>,
    orders: SaleOrderRepository<'a>,
}

impl<'a> SaleOrderService<'a> {
    /// Creates a new instance of [`SaleOrderService`]
    pub fn new(odoo: &'a OdooClient, session: &'a Session) -> Self {
        Self {
            partners: PartnerRepository::new(odoo, session),
            orders: SaleOrderRepository::new(odoo, session),
        }
    }

    /// Sale orders of a customer, order lines expanded
    pub async fn orders_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<SaleOrderDto>, Error> {
        let orders = self.orders.find_by_partners(&[customer_id]).await?;

        self.expand_lines(orders).await
    }

    /// Sale orders of every customer named `name`, order lines expanded
    ///
    /// Returns [`Error::NotFound`] without reading orders when no customer has that name.
    pub async fn orders_by_customer_name(&self, name: &str) -> Result<Vec<SaleOrderDto>, Error> {
        let partner_ids = self.partners.find_ids_by_name(name).await?;
        if partner_ids.is_empty() {
            return Err(Error::NotFound(format!("No customer named '{}'", name)));
        }

        let orders = self.orders.find_by_partners(&partner_ids).await?;

        self.expand_lines(orders).await
    }

    /// Replaces each order's line ids by the lines themselves.
    async fn expand_lines(&self, orders: Vec<SaleOrderRecord>) -> Result<Vec<SaleOrderDto>, Error> {
        let mut expanded = Vec::with_capacity(orders.len());
        for order in orders {
            let lines = self.orders.get_lines(&order.order_line).await?;
            expanded.push(order.with_lines(lines));
        }

        Ok(expanded)
    }

    /// Confirms the quotation(s) named `name`
    ///
    /// # Arguments
    /// - `name` - Order reference; every order carrying it is confirmed
    ///
    /// # Returns
    /// - `Ok(OrderActionDto)` - Ids passed to `action_confirm`
    /// - `Err(Error::NotFound)` - No order has that reference, nothing was confirmed
    /// - `Err(Error::OdooError)` - Odoo refused the transition
    pub async fn confirm_quotation(&self, name: &str) -> Result<OrderActionDto, Error> {
        let ids = resolve_order_ids(&self.orders, name).await?;

        self.orders.confirm(&ids).await?;
        tracing::info!(order_name = %name, ?ids, "confirmed sale order");

        Ok(OrderActionDto {
            message: format!("Sale order {} confirmed", name),
            order_name: name.to_string(),
            ids,
        })
    }

    /// Cancels the order(s) named `name`
    ///
    /// # Returns
    /// - `Ok(OrderActionDto)` - Ids passed to `action_cancel`
    /// - `Err(Error::NotFound)` - No order has that reference, nothing was cancelled
    pub async fn cancel_quotation(&self, name: &str) -> Result<OrderActionDto, Error> {
        let ids = resolve_order_ids(&self.orders, name).await?;

        self.orders.cancel(&ids).await?;
        tracing::info!(order_name = %name, ?ids, "cancelled sale order");

        Ok(OrderActionDto {
            message: format!("Sale order {} cancelled", name),
            order_name: name.to_string(),
            ids,
        })
    }
}

/// Resolves an order reference to ids
///
/// # Returns
/// - `Ok(Vec<i64>)` - At least one matching order id
/// - `Err(Error::NotFound)` - No order has that reference
pub(super) async fn resolve_order_ids(
    orders: &SaleOrderRepository<'_>,
    name: &str,
) -> Result<Vec<i64>, Error> {
    let ids = orders.find_ids_by_name(name).await?;
    if ids.is_empty() {
        return Err(Error::NotFound(format!("Sale order '{}' not found", name)));
    }

    Ok(ids)
}
