/// Generate a stock file body with `num_records` data rows
///
/// Every `invalid_every`-th row carries a malformed value and every third
/// row is `DECREASED`, so the reducer exercises both rejection paths.
pub fn generate_stock_dataset(num_records: usize, invalid_every: usize) -> String {
    let mut csv = String::from("name,date,notes,value,change\n");

    for i in 0..num_records {
        let value = if invalid_every > 0 && i % invalid_every == 0 {
            "n/a".to_string()
        } else {
            format!("{}.{:02}", (i * 7919) % 10_000, i % 100)
        };
        let change = if i % 3 == 0 { "DECREASED" } else { "INCREASED" };
        csv.push_str(&format!(
            "SYM{},2020-{:02}-{:02},,{},{}\n",
            i % 5_000,
            (i % 12) + 1,
            (i % 28) + 1,
            value,
            change
        ));
    }

    csv
}
