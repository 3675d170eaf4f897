use bookdeal::Ledger;

#[test]
fn test_ledger_round_trips_through_json() -> anyhow::Result<()> {
    let mut ledger = Ledger::new();

    let jane = ledger.add_author("Jane Doe")?;
    let python = ledger.add_book("Python 101")?;
    ledger.sign_contract(jane, python, "01/01/2023", 50)?;

    let json = serde_json::to_string(&ledger)?;
    let restored: Ledger = serde_json::from_str(&json)?;

    assert_eq!(restored, ledger);
    assert_eq!(restored.total_royalties(jane)?, 50);
    assert_eq!(restored.books_of_author(jane)?, vec![python]);

    Ok(())
}
