#[test]
fn test_contract_constants_match_token() {
    use exo_token::storage;

    assert_eq!(storage::TOKEN_NAME, "EXO Token");
    assert_eq!(storage::TOKEN_SYMBOL, "EXO");
    assert_eq!(storage::DECIMALS, 18);
    assert_eq!(
        storage::ONE_EXO,
        10i128.pow(storage::DECIMALS),
        "ERRO: ONE_EXO não corresponde aos decimais"
    );
}
