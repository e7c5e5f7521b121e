use soroban_sdk::{Address, Env};
use crate::storage;
use crate::types::ExoError;

// ============================================================================
// VALIDAÇÕES (CHECKS do padrão CEI)
// ============================================================================

/// Valida se o contrato já foi inicializado
pub fn require_initialized(env: &Env) -> Result<(), ExoError> {
    if !storage::has_admin(env) {
        return Err(ExoError::NotInitialized);
    }
    Ok(())
}

/// Valida se o caller é o admin
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ExoError> {
    let admin = storage::get_admin(env)?;
    if caller != &admin {
        return Err(ExoError::Unauthorized);
    }
    Ok(())
}

/// Valida se o amount é válido (>= 0).
/// Zero é aceito: bridge_mint(conta, 0) é uma chamada legítima.
pub fn require_non_negative_amount(amount: i128) -> Result<(), ExoError> {
    if amount < 0 {
        return Err(ExoError::InvalidAmount);
    }
    Ok(())
}

/// Valida se o balance é suficiente
pub fn require_sufficient_balance(env: &Env, addr: &Address, required: i128) -> Result<(), ExoError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(ExoError::InsufficientBalance);
    }
    Ok(())
}

/// Valida se a allowance cobre o gasto
pub fn require_sufficient_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    required: i128,
) -> Result<(), ExoError> {
    if storage::get_allowance(env, owner, spender) < required {
        return Err(ExoError::InsufficientAllowance);
    }
    Ok(())
}
