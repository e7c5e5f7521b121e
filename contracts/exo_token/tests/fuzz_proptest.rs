#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use proptest::prelude::*;
use setup::TestEnv;

// Ações que o fuzzer pode escolher
#[derive(Debug, Clone)]
enum Action {
    Mint { amount: i128 },
    Burn { amount: i128 },
    Transfer { amount: i128 },
    RogueMint { amount: i128 },
}

fn action_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            (0..1_000_000i128).prop_map(|a| Action::Mint { amount: a }),
            (0..1_000_000i128).prop_map(|a| Action::Burn { amount: a }),
            (0..1_000_000i128).prop_map(|a| Action::Transfer { amount: a }),
            (0..1_000_000i128).prop_map(|a| Action::RogueMint { amount: a }),
        ],
        1..20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn fuzz_supply_equals_sum_of_balances(actions in action_strategy()) {
        let t = TestEnv::new();
        let user_a = t.new_user();
        let user_b = t.new_user();

        for action in actions {
            match action {
                Action::Mint { amount } => {
                    let before = t.client.balance(&user_a);
                    t.client.bridge_mint(&t.bridge, &user_a, &amount);
                    prop_assert_eq!(t.client.balance(&user_a), before + amount);
                },
                Action::Burn { amount } => {
                    let before = t.client.balance(&user_a);
                    let res = t.client.try_bridge_burn(&t.bridge, &user_a, &amount);
                    if amount <= before {
                        prop_assert!(res.is_ok());
                        prop_assert_eq!(t.client.balance(&user_a), before - amount);
                    } else {
                        prop_assert!(res.is_err());
                        prop_assert_eq!(t.client.balance(&user_a), before);
                    }
                },
                Action::Transfer { amount } => {
                    // Pode falhar por saldo; o invariante continua valendo
                    let _ = t.client.try_transfer(&user_a, &user_b, &amount);
                },
                Action::RogueMint { amount } => {
                    let supply = t.client.total_supply();
                    let res = t.client.try_bridge_mint(&user_b, &user_b, &amount);
                    prop_assert!(res.is_err());
                    prop_assert_eq!(t.client.total_supply(), supply);
                }
            }
        }

        // === INVARIANTE FINAL ===
        let supply = t.client.total_supply();
        let bal_a = t.client.balance(&user_a);
        let bal_b = t.client.balance(&user_b);

        prop_assert_eq!(supply, bal_a + bal_b, "Quebra de Invariante: Supply != Soma dos Saldos");
    }
}
