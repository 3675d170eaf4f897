use bookdeal::Ledger;

#[test]
fn test_shared_date_returns_all_hits_in_creation_order() -> anyhow::Result<()> {
    let mut ledger = Ledger::new();

    let jane = ledger.add_author("Jane Doe")?;
    let john = ledger.add_author("John Smith")?;
    let python = ledger.add_book("Python 101")?;
    let rust = ledger.add_book("Rust in Practice")?;

    let first = ledger.sign_contract(jane, python, "05/05/2020", 50)?;
    let between = ledger.sign_contract(jane, rust, "10/10/2021", 20)?;
    let second = ledger.sign_contract(john, rust, "05/05/2020", 35)?;

    let hits = ledger.contracts_by_date("05/05/2020");
    assert_eq!(hits, vec![first, second]);
    assert!(!hits.contains(&between));

    for id in hits {
        assert_eq!(ledger.contract(id).unwrap().date(), "05/05/2020");
    }

    Ok(())
}

#[test]
fn test_unused_date_returns_empty() -> anyhow::Result<()> {
    let mut ledger = Ledger::new();

    let jane = ledger.add_author("Jane Doe")?;
    let python = ledger.add_book("Python 101")?;
    ledger.sign_contract(jane, python, "05/05/2020", 50)?;

    assert!(ledger.contracts_by_date("06/05/2020").is_empty());
    assert!(ledger.contracts_by_date("").is_empty());

    Ok(())
}

#[test]
fn test_date_match_is_case_sensitive_and_exact() -> anyhow::Result<()> {
    let mut ledger = Ledger::new();

    let jane = ledger.add_author("Jane Doe")?;
    let python = ledger.add_book("Python 101")?;
    ledger.sign_contract(jane, python, "05/05/2020", 50)?;

    assert_eq!(ledger.contracts_by_date("05/05/2020").len(), 1);
    assert!(ledger.contracts_by_date(" 05/05/2020").is_empty());
    assert!(ledger.contracts_by_date("5/5/2020").is_empty());

    Ok(())
}
