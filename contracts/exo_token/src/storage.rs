use soroban_sdk::{symbol_short, Address, BytesN, Env};
use crate::types::{ExoError, TokenMetadata};

// ============================================================================
// CONSTANTES
// ============================================================================

pub const TOKEN_NAME: &str = "EXO Token";
pub const TOKEN_SYMBOL: &str = "EXO";

/// 18 casas decimais: 1 EXO = 10^18 unidades
pub const DECIMALS: u32 = 18;

/// Uma unidade inteira de EXO em unidades base
pub const ONE_EXO: i128 = 1_000_000_000_000_000_000;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (admin, supply, metadata)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Faz bump do TTL de balance de um endereço
pub fn bump_balance(env: &Env, addr: &Address) {
    let key = (symbol_short!("balance"), addr);
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

// ============================================================================
// ADMIN
// ============================================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("admin"))
}

pub fn get_admin(env: &Env) -> Result<Address, ExoError> {
    env.storage()
        .instance()
        .get(&symbol_short!("admin"))
        .ok_or(ExoError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&symbol_short!("admin"), admin);
}

// ============================================================================
// TOTAL SUPPLY
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}

// ============================================================================
// BALANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
}

// ============================================================================
// ALLOWANCE
// ============================================================================

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = (symbol_short!("allow"), owner, spender);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = (symbol_short!("allow"), owner, spender);
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

// ============================================================================
// METADATA
// ============================================================================

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, ExoError> {
    env.storage()
        .instance()
        .get(&symbol_short!("metadata"))
        .ok_or(ExoError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&symbol_short!("metadata"), metadata);
}

// ============================================================================
// ROLES
// ============================================================================

/// Membros de role ficam em storage persistente, uma entrada por (role, conta).
/// Ausência da chave = não é membro.
pub fn is_role_member(env: &Env, role: &BytesN<32>, addr: &Address) -> bool {
    let key = (symbol_short!("role"), role.clone(), addr);
    env.storage().persistent().has(&key)
}

pub fn add_role_member(env: &Env, role: &BytesN<32>, addr: &Address) {
    let key = (symbol_short!("role"), role.clone(), addr);
    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(
        &key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

pub fn remove_role_member(env: &Env, role: &BytesN<32>, addr: &Address) {
    let key = (symbol_short!("role"), role.clone(), addr);
    env.storage().persistent().remove(&key);
}
