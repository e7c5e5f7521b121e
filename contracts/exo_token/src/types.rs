use soroban_sdk::{contracterror, contracttype, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExoError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Caller não é o admin (grant/revoke/transfer_admin)
    Unauthorized = 3,

    // AccessControl: caller não possui a role exigida.
    // A mensagem completa sai de access::missing_role_message.
    MissingRole = 4,

    InsufficientBalance = 5,
    InvalidAmount = 6,
    InsufficientAllowance = 7,
}

// ============================================================================
// METADADOS DO TOKEN
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}
