
#[cfg(test)]
mod ledger_test {
    use mockall::mock;
    use robinhood_ledger::cache::{InstrumentDirectory, SeedMapping};
    use robinhood_ledger::core::{LedgerError, LedgerResult};
    use robinhood_ledger::ledger::{ledger_writer, write_ledger};
    use robinhood_ledger::model::{OrderHistory, Ticker};
    use robinhood_ledger::robinhood::InstrumentResolver;
    use crate::test_common::common::*;

    mock! {
        pub Resolver {}
        impl InstrumentResolver for Resolver {
            fn resolve(&self, identifier: &str) -> LedgerResult<Ticker>;
        }
    }

    fn directory(entries: &[(&str, &str)]) -> InstrumentDirectory {
        let seed: SeedMapping = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        InstrumentDirectory::initialize(seed)
    }

    fn history(json: &str) -> OrderHistory {
        serde_json::from_str(json).unwrap()
    }

    fn ticker(id: &str, symbol: &str) -> Ticker {
        Ticker {
            symbol: symbol.to_string(),
            id: id.to_string(),
        }
    }

    fn render(
        history: &OrderHistory,
        directory: &mut InstrumentDirectory,
        resolver: &MockResolver,
    ) -> (LedgerResult<usize>, String) {
        let mut writer = ledger_writer(vec![]);
        let result = write_ledger(history, directory, resolver, &mut writer);
        let bytes = match writer.into_inner() {
            Ok(bytes) => bytes,
            Err(_) => panic!("unable to recover ledger buffer"),
        };
        (result, String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn cached_fill_renders_row() {
        before_each();
        let mut directory = directory(&[("INSTR1", "AAPL")]);
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(0);

        let (result, output) = render(&history(SINGLE_FILL), &mut directory, &resolver);

        assert_eq!(result.unwrap(), 1);
        assert_eq!(
            output,
            "Date,Action,Quantity,Price,Symbol\n2023-01-01,buy,5,10.00,AAPL\n"
        );
    }

    #[test]
    fn one_lookup_per_missing_instrument() {
        before_each();
        let mut directory = directory(&[]);
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .withf(|identifier: &str| identifier == "INSTR1")
            .times(1)
            .returning(|_| Ok(ticker("INSTR1", "AAPL")));
        resolver
            .expect_resolve()
            .withf(|identifier: &str| identifier == "INSTR2")
            .times(1)
            .returning(|_| Ok(ticker("INSTR2", "TSLA")));

        let history = history(TWO_ORDERS);
        let (result, output) = render(&history, &mut directory, &resolver);

        assert_eq!(result.unwrap(), history.execution_count());
        assert_eq!(
            output,
            "Date,Action,Quantity,Price,Symbol\n\
             2023-01-01,buy,3,10.00,AAPL\n\
             2023-01-02,buy,2,10.00,AAPL\n\
             2023-02-01,sell,0.5,700.10,TSLA\n\
             2023-01-15,sell,0.5,699.00,TSLA\n\
             2023-03-01,sell,5,12.50,AAPL\n"
        );
        assert_eq!(directory.lookup("INSTR2"), Some("TSLA"));
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn mixed_hits_only_query_misses() {
        before_each();
        let mut directory = directory(&[("INSTR1", "AAPL")]);
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .withf(|identifier: &str| identifier == "INSTR2")
            .times(1)
            .returning(|_| Ok(ticker("INSTR2", "TSLA")));

        let (result, _) = render(&history(TWO_ORDERS), &mut directory, &resolver);
        assert_eq!(result.unwrap(), 5);
    }

    #[test]
    fn failure_keeps_rows_already_written() {
        before_each();
        let mut directory = directory(&[("INSTR1", "AAPL")]);
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(1).returning(|identifier| {
            Err(LedgerError::MalformedResponse {
                identifier: identifier.to_string(),
                source: serde_json::from_str::<Ticker>("<html>").unwrap_err(),
            })
        });

        let (result, output) = render(&history(TWO_ORDERS), &mut directory, &resolver);

        assert!(matches!(result, Err(LedgerError::MalformedResponse { .. })));
        assert_eq!(
            output,
            "Date,Action,Quantity,Price,Symbol\n\
             2023-01-01,buy,3,10.00,AAPL\n\
             2023-01-02,buy,2,10.00,AAPL\n"
        );
        assert_eq!(directory.lookup("INSTR2"), None);
    }

    #[test]
    fn empty_history_writes_header() {
        before_each();
        let mut directory = directory(&[]);
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(0);

        let (result, output) = render(
            &history(r#"{"next": null, "previous": null, "results": []}"#),
            &mut directory,
            &resolver,
        );

        assert_eq!(result.unwrap(), 0);
        assert_eq!(output, "Date,Action,Quantity,Price,Symbol\n");
    }

    #[test]
    fn answer_recorded_under_returned_identifier() {
        before_each();
        let mut directory = directory(&[]);
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .withf(|identifier: &str| identifier == "INSTR1")
            .times(1)
            .returning(|_| Ok(ticker("INSTR1-NEW", "AAPL")));
        resolver
            .expect_resolve()
            .withf(|identifier: &str| identifier == "INSTR2")
            .times(1)
            .returning(|_| Ok(ticker("INSTR2", "TSLA")));

        let history = history(TWO_ORDERS);
        let mut first_order = history.clone();
        first_order.results.truncate(1);
        let (result, output) = render(&first_order, &mut directory, &resolver);

        assert_eq!(result.unwrap(), 2);
        assert!(output.ends_with(
            "2023-01-01,buy,3,10.00,AAPL\n2023-01-02,buy,2,10.00,AAPL\n"
        ));
        assert_eq!(directory.lookup("INSTR1-NEW"), Some("AAPL"));
        assert_eq!(directory.lookup("INSTR1"), None);

        let second_order = OrderHistory {
            results: vec![history.results[1].clone()],
            ..Default::default()
        };
        let (result, _) = render(&second_order, &mut directory, &resolver);
        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    fn order_without_fills_is_not_resolved() {
        before_each();
        let mut directory = directory(&[]);
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(0);

        let (result, output) = render(
            &history(r#"{"results": [{"instrument_id": "INSTR9", "side": "buy", "executions": []}]}"#),
            &mut directory,
            &resolver,
        );

        assert_eq!(result.unwrap(), 0);
        assert_eq!(output, "Date,Action,Quantity,Price,Symbol\n");
    }

    #[test]
    fn unknown_side_passes_through() {
        before_each();
        let mut directory = directory(&[("INSTR1", "AAPL")]);
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(0);

        let (result, output) = render(
            &history(&SPARSE_FILL.replace("\"buy\"", "\"short\"")),
            &mut directory,
            &resolver,
        );

        assert_eq!(result.unwrap(), 1);
        assert!(output.ends_with("2023-01-01,short,5,10.00,AAPL\n"));
    }
}
