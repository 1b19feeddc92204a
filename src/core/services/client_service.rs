use uuid::Uuid;

use crate::domain::bank::{Bank, NewClient};

use super::ServiceResult;

pub struct ClientService;

impl ClientService {
    /// Registers a client, enforcing tax-id uniqueness.
    pub fn register(bank: &mut Bank, new_client: NewClient) -> ServiceResult<Uuid> {
        let tax_id = new_client.tax_id.clone();
        match bank.create_client(new_client) {
            Ok(client) => {
                let id = client.id;
                tracing::info!(%tax_id, "client registered");
                Ok(id)
            }
            Err(err) => {
                tracing::warn!(%tax_id, %err, "client registration rejected");
                Err(err)
            }
        }
    }

    pub fn list(bank: &Bank) -> &[crate::domain::Client] {
        bank.clients()
    }
}
