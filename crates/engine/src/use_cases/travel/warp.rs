//! Paid transfer to a destination.

use std::sync::Arc;

use transit_domain::Destination;

use crate::infrastructure::ports::{TransferRequest, WalletPort, WorldPort};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WarpError {
    #[error("Cannot afford {destination}: costs {cost}g, balance is {balance}g")]
    InsufficientFunds {
        destination: String,
        cost: u32,
        balance: i64,
    },
}

/// Debit `cost` if the wallet covers it. Leaves the wallet untouched otherwise.
pub(crate) fn charge(wallet: &mut dyn WalletPort, cost: u32) -> bool {
    let balance = wallet.balance();
    let cost = i64::from(cost);
    if balance < cost {
        return false;
    }
    wallet.set_balance(balance - cost);
    true
}

pub struct WarpTransaction {
    world: Arc<dyn WorldPort>,
}

impl WarpTransaction {
    pub fn new(world: Arc<dyn WorldPort>) -> Self {
        Self { world }
    }

    /// Charge for `destination` and ask the host to move the player there.
    ///
    /// The wallet is borrowed exclusively for the whole check-and-debit, so
    /// nothing else can spend between the two. On failure nothing is debited
    /// and no transfer is requested.
    pub fn attempt(
        &self,
        destination: &Destination,
        wallet: &mut dyn WalletPort,
    ) -> Result<(), WarpError> {
        if !charge(wallet, destination.cost()) {
            let balance = wallet.balance();
            tracing::info!(
                stop_id = %destination.id(),
                cost = destination.cost(),
                balance,
                "Not enough money for warp"
            );
            return Err(WarpError::InsufficientFunds {
                destination: destination.display_name().to_string(),
                cost: destination.cost(),
                balance,
            });
        }

        self.world
            .request_transfer(TransferRequest::from(destination.target()));
        tracing::info!(
            stop_id = %destination.id(),
            location = %destination.location(),
            cost = destination.cost(),
            "Warp requested"
        );
        Ok(())
    }
}
