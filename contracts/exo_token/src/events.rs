use soroban_sdk::{Address, BytesN, Env, symbol_short};

//
// EVENTOS DO TOKEN
//

// Movimento entre contas (transfer / transfer_from); supply inalterado
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from, to),
        amount,
    );
}

// Crédito feito pela bridge (BRIDGE_ROLE); topic carrega o destinatário
pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("mint"), to),
        amount,
    );
}

// Débito feito pela bridge (BRIDGE_ROLE); supply cai no mesmo valor
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("burn"), from),
        amount,
    );
}

// Allowance definida pelo owner (sobrescreve o valor anterior)
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), owner, spender),
        amount,
    );
}

// Role concedida (equivalente ao RoleGranted do AccessControl EVM)
pub fn emit_role_granted(env: &Env, role: &BytesN<32>, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_grnt"), role.clone(), account),
        sender.clone(),
    );
}

// Role revogada ou renunciada
pub fn emit_role_revoked(env: &Env, role: &BytesN<32>, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_rvk"), role.clone(), account),
        sender.clone(),
    );
}

// Troca de admin
pub fn emit_admin_transferred(env: &Env, previous: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("adm_xfer"), previous),
        new_admin.clone(),
    );
}

//
// TESTES
//
