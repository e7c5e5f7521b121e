use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};
use crate::access;
use crate::admin;
use crate::events;
use crate::storage;
use crate::types::{ExoError, TokenMetadata};
use crate::validation;

//
// CONTRATO PRINCIPAL - EXO TOKEN
//

#[contract]
pub struct ExoToken;

#[contractimpl]
impl ExoToken {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o contrato ExoToken.
    ///
    /// # Parâmetros
    /// - `admin`: Endereço que concede e revoga roles (incluindo BRIDGE_ROLE)
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    pub fn initialize(env: Env, admin: Address) -> Result<(), ExoError> {
        // CHECKS
        if storage::has_admin(&env) {
            return Err(ExoError::AlreadyInitialized);
        }

        // EFFECTS
        storage::set_admin(&env, &admin);
        storage::set_total_supply(&env, 0);
        storage::set_metadata(&env, &TokenMetadata {
            name: String::from_str(&env, storage::TOKEN_NAME),
            symbol: String::from_str(&env, storage::TOKEN_SYMBOL),
            decimals: storage::DECIMALS,
        });
        storage::bump_critical_storage(&env);

        Ok(())
    }

    //
    // LEITURA (metadata, saldos, supply)
    //

    /// Retorna o nome do token ("EXO Token").
    pub fn name(env: Env) -> Result<String, ExoError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.name)
    }

    /// Retorna o símbolo do token ("EXO").
    pub fn symbol(env: Env) -> Result<String, ExoError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.symbol)
    }

    /// Retorna o número de decimais (18).
    pub fn decimals(env: Env) -> Result<u32, ExoError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.decimals)
    }

    /// Retorna o balance de um endereço.
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::bump_balance(&env, &id);
        storage::get_balance(&env, &id)
    }

    /// Retorna o supply total.
    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &owner, &spender)
    }

    //
    // ACCESS CONTROL
    //

    /// Identificador fixo da role de bridge.
    pub fn bridge_role(env: Env) -> BytesN<32> {
        access::bridge_role(&env)
    }

    pub fn has_role(env: Env, role: BytesN<32>, account: Address) -> bool {
        access::has_role(&env, &role, &account)
    }

    /// Concede `role` a `account` (apenas admin). Idempotente.
    pub fn grant_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), ExoError> {
        admin::grant_role(&env, &caller, &role, &account)
    }

    /// Revoga `role` de `account` (apenas admin). Idempotente.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), ExoError> {
        admin::revoke_role(&env, &caller, &role, &account)
    }

    pub fn renounce_role(env: Env, caller: Address, role: BytesN<32>) -> Result<(), ExoError> {
        admin::renounce_role(&env, &caller, &role)
    }

    pub fn get_admin(env: Env) -> Result<Address, ExoError> {
        storage::bump_critical_storage(&env);
        storage::get_admin(&env)
    }

    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ExoError> {
        admin::transfer_admin(&env, &caller, &new_admin)
    }

    /// Mensagem de revert no formato AccessControl
    /// ("AccessControl: account <addr> is missing role 0x<role>").
    /// Erros de contrato são numéricos; clientes usam esta função para
    /// reconstruir o texto de um `MissingRole`.
    pub fn missing_role_message(env: Env, account: Address, role: BytesN<32>) -> String {
        access::missing_role_message(&env, &account, &role)
    }

    //
    // BRIDGE MINT / BURN - CEI PATTERN
    // Únicas entradas que alteram o supply total.
    //

    /// Cria tokens em `account` (apenas BRIDGE_ROLE).
    ///
    /// # Erros
    /// - `MissingRole`: caller sem BRIDGE_ROLE
    /// - `InvalidAmount`: amount negativo ou overflow
    pub fn bridge_mint(
        env: Env,
        caller: Address,
        account: Address,
        amount: i128,
    ) -> Result<(), ExoError> {
        // === CHECKS ===
        caller.require_auth();
        access::authorize(&env, &caller, &access::bridge_role(&env))?;
        storage::bump_critical_storage(&env);

        validation::require_non_negative_amount(amount)?;

        let new_balance = storage::get_balance(&env, &account)
            .checked_add(amount)
            .ok_or(ExoError::InvalidAmount)?;
        let new_supply = storage::get_total_supply(&env)
            .checked_add(amount)
            .ok_or(ExoError::InvalidAmount)?;

        // === EFFECTS ===
        storage::set_balance(&env, &account, new_balance);
        storage::set_total_supply(&env, new_supply);
        storage::bump_balance(&env, &account);

        // === INTERACTIONS ===
        events::emit_mint(&env, &account, amount);

        Ok(())
    }

    /// Destrói tokens de `account` (apenas BRIDGE_ROLE).
    ///
    /// # Erros
    /// - `MissingRole`: caller sem BRIDGE_ROLE
    /// - `InvalidAmount`: amount negativo
    /// - `InsufficientBalance`: amount maior que o balance
    pub fn bridge_burn(
        env: Env,
        caller: Address,
        account: Address,
        amount: i128,
    ) -> Result<(), ExoError> {
        // === CHECKS ===
        caller.require_auth();
        access::authorize(&env, &caller, &access::bridge_role(&env))?;
        storage::bump_critical_storage(&env);

        validation::require_non_negative_amount(amount)?;
        validation::require_sufficient_balance(&env, &account, amount)?;

        let new_balance = storage::get_balance(&env, &account)
            .checked_sub(amount)
            .ok_or(ExoError::InsufficientBalance)?;
        let new_supply = storage::get_total_supply(&env)
            .checked_sub(amount)
            .ok_or(ExoError::InvalidAmount)?;

        // === EFFECTS ===
        storage::set_balance(&env, &account, new_balance);
        storage::set_total_supply(&env, new_supply);

        // === INTERACTIONS ===
        events::emit_burn(&env, &account, amount);

        Ok(())
    }

    //
    // TRANSFERÊNCIAS E ALLOWANCE
    //

    /// Transfere tokens de `from` para `to`. Não altera o supply.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ExoError> {
        from.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_non_negative_amount(amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, &from, &to, amount);

        Ok(())
    }

    /// Define a allowance de `spender` sobre os tokens de `owner` (sobrescreve).
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), ExoError> {
        owner.require_auth();
        validation::require_non_negative_amount(amount)?;

        storage::set_allowance(&env, &owner, &spender, amount);
        events::emit_approval(&env, &owner, &spender, amount);

        Ok(())
    }

    /// Transfere tokens usando allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ExoError> {
        // === CHECKS ===
        spender.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_non_negative_amount(amount)?;
        validation::require_sufficient_allowance(&env, &from, &spender, amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        // === EFFECTS ===
        let remaining = storage::get_allowance(&env, &from, &spender) - amount;
        move_balance(&env, &from, &to, amount)?;
        storage::set_allowance(&env, &from, &spender, remaining);

        // === INTERACTIONS ===
        events::emit_transfer(&env, &from, &to, amount);

        Ok(())
    }
}

/// Debita `from` e credita `to`. Todas as contas checadas antes de escrever.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ExoError> {
    if from == to {
        return Ok(());
    }

    let new_from_balance = storage::get_balance(env, from)
        .checked_sub(amount)
        .ok_or(ExoError::InsufficientBalance)?;
    let new_to_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(ExoError::InvalidAmount)?;

    storage::set_balance(env, from, new_from_balance);
    storage::set_balance(env, to, new_to_balance);
    storage::bump_balance(env, to);

    Ok(())
}

//
// TESTES UNITÁRIOS
//
