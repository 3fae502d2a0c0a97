use crate::{
    model::customer::{CustomerDto, CustomerOptionDto},
    server::{
        data::partner::PartnerRepository,
        error::Error,
        odoo::{Domain, OdooClient, Session},
    },
};

pub struct CustomerService<'a> {
    partners: PartnerRepository<'a>,
}

impl<'a> CustomerService<'a> {
    /// Creates a new instance of [`CustomerService`]
    ///
    /// # Arguments
    /// - `odoo` - Client used for every remote call
    /// - `session` - Authenticated XML-RPC session shared by the application
    pub fn new(odoo: &'a OdooClient, session: &'a Session) -> Self {
        Self {
            partners: PartnerRepository::new(odoo, session),
        }
    }

    /// Every partner that already is a customer, companies and individuals alike
    pub async fn list_customers(&self) -> Result<Vec<CustomerOptionDto>, Error> {
        let domain = Domain::new().filter("customer_rank", ">", 0);

        Ok(self.partners.find_options(domain).await?)
    }

    /// Customers that are companies
    pub async fn list_companies(&self) -> Result<Vec<CustomerOptionDto>, Error> {
        let domain = Domain::new()
            .filter("is_company", "=", true)
            .filter("customer_rank", ">", 0);

        Ok(self.partners.find_options(domain).await?)
    }

    /// Details of the partner `customer_id`
    ///
    /// # Returns
    /// - `Ok(CustomerDto)` - The partner exists
    /// - `Err(Error::NotFound)` - Odoo returned no record for that id
    /// - `Err(Error::OdooError)` - The remote call failed
    pub async fn get_customer(&self, customer_id: i64) -> Result<CustomerDto, Error> {
        self.partners
            .get(customer_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Customer {} not found", customer_id)))
    }
}
