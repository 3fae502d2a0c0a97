use chrono_tz::Tz;

use crate::{
    model::delivery::{Decision, DeliveryDateDto, DeliveryDecisionDto, DeliveryDecisionResultDto},
    server::{
        data::sale_order::SaleOrderRepository,
        error::Error,
        odoo::{OdooClient, Session},
        util::time::{client_to_utc, stored_to_local, utc_to_stored},
    },
};

pub struct DeliveryService<'a> {
    orders: SaleOrderRepository<'a>,
    timezone: Tz,
}

impl<'a> DeliveryService<'a> {
    /// Creates a new instance of [`DeliveryService`]
    ///
    /// # Arguments
    /// - `timezone` - Timezone delivery dates are shown and entered in
    pub fn new(odoo: &'a OdooClient, session: &'a Session, timezone: Tz) -> Self {
        Self {
            orders: SaleOrderRepository::new(odoo, session),
            timezone,
        }
    }

    /// Scheduled delivery date of a sale order in the display timezone
    ///
    /// An order without commitment date yields `scheduled_delivery_date: null`.
    ///
    /// # Returns
    /// - `Ok(DeliveryDateDto)` - Commitment date as RFC 3339 in the display timezone
    /// - `Err(Error::NotFound)` - No sale order has that id
    pub async fn delivery_date(&self, order_id: i64) -> Result<DeliveryDateDto, Error> {
        let order = self
            .orders
            .get_commitment(order_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Sale order {} not found", order_id)))?;

        let scheduled_delivery_date = order
            .commitment_date
            .as_deref()
            .map(|stored| stored_to_local(stored, self.timezone))
            .transpose()?
            .map(|local| local.to_rfc3339());

        Ok(DeliveryDateDto {
            order_id: order.id,
            order_name: order.name,
            scheduled_delivery_date,
        })
    }

    /// Applies a customer's answer to the proposed delivery date
    ///
    /// Accepting changes nothing in Odoo. Rejecting requires `new_date`, which is
    /// validated before any remote call and written as the order's commitment date.
    ///
    /// # Arguments
    /// - `order_id` - Odoo id of the sale order
    /// - `decision` - The customer's answer, with `new_date` in the display timezone
    ///
    /// # Returns
    /// - `Ok(DeliveryDecisionResultDto)` - `accepted`, or `rejected` with the new date
    /// - `Err(Error::Validation)` - `reject` without a usable `new_date`
    /// - `Err(Error::NotFound)` - The order does not exist, nothing was written
    pub async fn decide(
        &self,
        order_id: i64,
        decision: DeliveryDecisionDto,
    ) -> Result<DeliveryDecisionResultDto, Error> {
        match decision.decision {
            Decision::Accept => Ok(DeliveryDecisionResultDto {
                status: "accepted".to_string(),
                order_id,
                message: format!("Delivery date of sale order {} accepted", order_id),
                scheduled_delivery_date: None,
            }),
            Decision::Reject => {
                let new_date = decision.new_date.ok_or_else(|| {
                    Error::Validation(
                        "new_date is required when rejecting a delivery date".to_string(),
                    )
                })?;
                let commitment_date = client_to_utc(&new_date, self.timezone)?;

                if !self.orders.exists(order_id).await? {
                    return Err(Error::NotFound(format!("Sale order {} not found", order_id)));
                }

                self.orders
                    .set_commitment_date(order_id, utc_to_stored(commitment_date))
                    .await?;
                tracing::info!(order_id, %commitment_date, "rescheduled delivery");

                Ok(DeliveryDecisionResultDto {
                    status: "rejected".to_string(),
                    order_id,
                    message: format!("Delivery date of sale order {} rescheduled", order_id),
                    scheduled_delivery_date: Some(
                        commitment_date.with_timezone(&self.timezone).to_rfc3339(),
                    ),
                })
            }
        }
    }
}
