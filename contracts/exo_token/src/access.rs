use soroban_sdk::{log, Address, BytesN, Env, String};
use crate::events;
use crate::storage;
use crate::types::ExoError;

// ============================================================================
// ACCESS CONTROL - ROLES
// ============================================================================

/// keccak256("BRIDGE_ROLE"), mesmo identificador do contrato EVM
pub const BRIDGE_ROLE: [u8; 32] = [
    0x52, 0xba, 0x82, 0x4b, 0xfa, 0xbc, 0x2b, 0xcf,
    0xcd, 0xf7, 0xf0, 0xed, 0xbb, 0x48, 0x6e, 0xbb,
    0x05, 0xe1, 0x83, 0x6c, 0x90, 0xe7, 0x80, 0x47,
    0xef, 0xeb, 0x94, 0x99, 0x90, 0xf7, 0x2e, 0x5f,
];

const MSG_PREFIX: &[u8] = b"AccessControl: account ";
const MSG_INFIX: &[u8] = b" is missing role 0x";
const HEX: &[u8; 16] = b"0123456789abcdef";

/// Strkeys de Address (G... / C...) têm 56 caracteres.
const STRKEY_LEN: usize = 56;
const MAX_MSG_LEN: usize = MSG_PREFIX.len() + STRKEY_LEN + MSG_INFIX.len() + 64;

pub fn bridge_role(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &BRIDGE_ROLE)
}

pub fn has_role(env: &Env, role: &BytesN<32>, account: &Address) -> bool {
    storage::is_role_member(env, role, account)
}

/// Guard chamado no topo de toda entrada protegida por role.
/// Em caso de falha registra a mensagem AccessControl no log de diagnóstico.
pub fn authorize(env: &Env, caller: &Address, role: &BytesN<32>) -> Result<(), ExoError> {
    if has_role(env, role, caller) {
        return Ok(());
    }
    let message = missing_role_message(env, caller, role);
    log!(env, "{}", message);
    Err(ExoError::MissingRole)
}

/// Concede a role. Retorna false se a conta já era membro (nenhum evento).
pub fn grant_role(env: &Env, role: &BytesN<32>, account: &Address, sender: &Address) -> bool {
    if has_role(env, role, account) {
        return false;
    }
    storage::add_role_member(env, role, account);
    events::emit_role_granted(env, role, account, sender);
    true
}

/// Revoga a role. Retorna false se a conta não era membro (nenhum evento).
pub fn revoke_role(env: &Env, role: &BytesN<32>, account: &Address, sender: &Address) -> bool {
    if !has_role(env, role, account) {
        return false;
    }
    storage::remove_role_member(env, role, account);
    events::emit_role_revoked(env, role, account, sender);
    true
}

/// "AccessControl: account <strkey> is missing role 0x<hex>"
pub fn missing_role_message(env: &Env, account: &Address, role: &BytesN<32>) -> String {
    let mut buf = [0u8; MAX_MSG_LEN];
    let mut len = 0;

    buf[..MSG_PREFIX.len()].copy_from_slice(MSG_PREFIX);
    len += MSG_PREFIX.len();

    let strkey = account.to_string();
    strkey.copy_into_slice(&mut buf[len..len + STRKEY_LEN]);
    len += STRKEY_LEN;

    buf[len..len + MSG_INFIX.len()].copy_from_slice(MSG_INFIX);
    len += MSG_INFIX.len();

    for byte in role.to_array() {
        buf[len] = HEX[(byte >> 4) as usize];
        buf[len + 1] = HEX[(byte & 0x0f) as usize];
        len += 2;
    }

    String::from_bytes(env, &buf[..len])
}
