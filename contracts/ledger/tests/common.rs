#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use belugastake_ledger::{BelugaStaking, BelugaStakingClient};

// Test constants
pub const ONE_UNIT: i128 = 10_000_000; // 7 decimals
pub const DEFAULT_RESERVE: i128 = 10 * ONE_UNIT;
pub const T0: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;

pub struct Setup<'a> {
    pub client: BelugaStakingClient<'a>,
    pub admin: Address,
    pub token: Address,
}

/// Ledger seeded with the default tiers and a 10 unit reserve, clock at T0
pub fn setup_ledger(env: &Env) -> Setup<'_> {
    setup_ledger_with_reserve(env, DEFAULT_RESERVE)
}

pub fn setup_ledger_with_reserve(env: &Env, reserve: i128) -> Setup<'_> {
    env.ledger().set_timestamp(T0);

    let admin = Address::generate(env);
    let token = create_token(env, &admin);
    if reserve > 0 {
        mint_tokens(env, &token, &admin, reserve);
    }

    let ledger_id = env.register(BelugaStaking, ());
    let client = BelugaStakingClient::new(env, &ledger_id);
    client.initialize(&admin, &token, &reserve);

    Setup { client, admin, token }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, of: &Address) -> i128 {
    TokenClient::new(env, token).balance(of)
}

/// New address holding `amount` of the ledger token
pub fn funded_staker(env: &Env, token: &Address, amount: i128) -> Address {
    let staker = Address::generate(env);
    mint_tokens(env, token, &staker, amount);
    staker
}

pub fn advance_time(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}
