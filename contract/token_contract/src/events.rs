use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct ApproveEvent {
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub fn emit_mint(env: &Env, admin: Address, to: Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "mint"), admin, to), amount);
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "transfer"), from, to), amount);
}

pub fn emit_approve(env: &Env, from: Address, spender: Address, event: ApproveEvent) {
    env.events()
        .publish((Symbol::new(env, "approve"), from, spender), event);
}

pub fn emit_burn(env: &Env, from: Address, amount: i128) {
    env.events().publish((Symbol::new(env, "burn"), from), amount);
}

pub fn emit_admin_changed(env: &Env, admin: Address, new_admin: Address) {
    env.events()
        .publish((Symbol::new(env, "set_admin"), admin), new_admin);
}
