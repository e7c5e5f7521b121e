use crate::access;
use crate::events;
use crate::storage;
use crate::types::ExoError;
use crate::validation;
use soroban_sdk::{Address, BytesN, Env};

// ============================================================================
// ADMIN OPS - GESTÃO DE ROLES E TROCA DE ADMIN
// O admin é injetado no initialize; só ele concede ou revoga roles.
// ============================================================================

pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: &BytesN<32>,
    account: &Address,
) -> Result<(), ExoError> {
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_admin(env, caller)?;

    access::grant_role(env, role, account, caller);
    Ok(())
}

pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: &BytesN<32>,
    account: &Address,
) -> Result<(), ExoError> {
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_admin(env, caller)?;

    access::revoke_role(env, role, account, caller);
    Ok(())
}

/// A própria conta abre mão da role. Não exige admin.
pub fn renounce_role(env: &Env, caller: &Address, role: &BytesN<32>) -> Result<(), ExoError> {
    caller.require_auth();
    validation::require_initialized(env)?;

    access::revoke_role(env, role, caller, caller);
    Ok(())
}

/// Passa o controle de roles para outro endereço.
pub fn transfer_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), ExoError> {
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_admin(env, caller)?;

    storage::set_admin(env, new_admin);
    events::emit_admin_transferred(env, caller, new_admin);
    Ok(())
}
