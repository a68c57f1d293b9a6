use crate::cache::InstrumentDirectory;
use crate::core::LedgerResult;
use crate::model::{LedgerRow, OrderHistory, LEDGER_HEADER};
use crate::robinhood::InstrumentResolver;
use std::io::Write;

pub fn ledger_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// Returns the symbol for `identifier`, asking `resolver` on a miss and
/// recording the answer so later fills hit the directory.
pub fn resolve_symbol<R: InstrumentResolver + ?Sized>(
    directory: &mut InstrumentDirectory,
    resolver: &R,
    identifier: &str,
) -> LedgerResult<String> {
    if let Some(symbol) = directory.lookup(identifier) {
        return Ok(symbol.to_string());
    }
    let ticker = resolver.resolve(identifier)?;
    if ticker.id != identifier {
        warn!(
            "requested {} but robinhood answered {} ({})",
            identifier, ticker.id, ticker.symbol
        );
    }
    directory.record(&ticker.id, &ticker.symbol);
    Ok(ticker.symbol)
}

/// Writes the header and one row per execution, in source order. The symbol
/// is resolved once per order with fills. Each row is flushed before the next
/// order is resolved, so an aborted run leaves every row produced so far on
/// disk. Returns the number of rows written.
pub fn write_ledger<W: Write, R: InstrumentResolver + ?Sized>(
    history: &OrderHistory,
    directory: &mut InstrumentDirectory,
    resolver: &R,
    writer: &mut csv::Writer<W>,
) -> LedgerResult<usize> {
    writer.write_record(&LEDGER_HEADER)?;
    writer.flush().map_err(csv::Error::from)?;

    let mut rows = 0;
    for order in history.results.iter() {
        if order.executions.is_empty() {
            continue;
        }
        // once per order; a remote answer under another id would miss again
        let symbol = resolve_symbol(directory, resolver, &order.instrument_id)?;
        for execution in order.executions.iter() {
            let row = LedgerRow::from_fill(order, execution, &symbol);
            debug!("{:?}", row);
            writer.serialize(&row)?;
            writer.flush().map_err(csv::Error::from)?;
            rows += 1;
        }
    }
    Ok(rows)
}
