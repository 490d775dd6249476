use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// The pool's view of the staked token.
///
/// Transfers go through the generated `try_*` calls so a failing token
/// (insufficient balance, missing allowance) comes back as
/// `AssetTransferFailed` instead of trapping the whole invocation.
pub struct Asset<'a> {
    env: &'a Env,
    client: token::TokenClient<'a>,
}

impl<'a> Asset<'a> {
    pub fn new(env: &'a Env, address: &Address) -> Self {
        Self {
            env,
            client: token::TokenClient::new(env, address),
        }
    }

    /// Pull `amount` from `from` into the pool using the allowance `from`
    /// granted to the pool.
    pub fn pull(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        let pool = self.env.current_contract_address();
        match self.client.try_transfer_from(&pool, from, &pool, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::AssetTransferFailed),
        }
    }

    /// Push `amount` from the pool to `to`.
    pub fn push(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        let pool = self.env.current_contract_address();
        match self.client.try_transfer(&pool, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::AssetTransferFailed),
        }
    }

    /// Tokens currently held by the pool.
    pub fn pool_balance(&self) -> i128 {
        self.client.balance(&self.env.current_contract_address())
    }
}
