#![no_std]

mod balance;
mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};

use balance::*;
use storage_types::DataKey;
pub use storage_types::{TokenError, TokenMetadata, MAX_DECIMAL};

/// Fungible token exposing the SEP-41 entry points the donation ledger calls
/// through `token::Client`, plus admin minting and `total_supply`.
#[contract]
pub struct TokenContract;

fn read_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, TokenError::NotInitialized))
}

fn read_metadata(env: &Env) -> TokenMetadata {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .unwrap_or_else(|| panic_with_error!(env, TokenError::NotInitialized))
}

#[contractimpl]
impl TokenContract {
    pub fn initialize(env: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, TokenError::AlreadyInitialized);
        }
        if decimal > MAX_DECIMAL {
            panic_with_error!(&env, TokenError::DecimalTooLarge);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        extend_instance(&env);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        let admin = read_admin(&env);
        admin.require_auth();

        receive_balance(&env, &to, amount);
        adjust_total_supply(&env, amount);

        log!(&env, "minted", amount);
        events::emit_mint(&env, admin, to, amount);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = read_admin(&env);
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &new_admin);
        extend_instance(&env);

        events::emit_admin_changed(&env, admin, new_admin);
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        write_allowance(&env, &from, &spender, amount, expiration_ledger);

        events::emit_approve(
            &env,
            from,
            spender,
            events::ApproveEvent {
                amount,
                expiration_ledger,
            },
        );
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        spend_balance(&env, &from, amount);
        receive_balance(&env, &to, amount);

        events::emit_transfer(&env, from, to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);

        spend_allowance(&env, &from, &spender, amount);
        spend_balance(&env, &from, amount);
        receive_balance(&env, &to, amount);

        events::emit_transfer(&env, from, to, amount);
    }

    pub fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);

        spend_balance(&env, &from, amount);
        adjust_total_supply(&env, -amount);

        events::emit_burn(&env, from, amount);
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);

        spend_allowance(&env, &from, &spender, amount);
        spend_balance(&env, &from, amount);
        adjust_total_supply(&env, -amount);

        events::emit_burn(&env, from, amount);
    }

    pub fn decimals(env: Env) -> u32 {
        read_metadata(&env).decimal
    }

    pub fn name(env: Env) -> String {
        read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        read_metadata(&env).symbol
    }

    pub fn admin(env: Env) -> Address {
        read_admin(&env)
    }
}
