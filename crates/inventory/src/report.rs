//! Plain-text stock report.

use std::io::{self, Write};

use crate::event::StockEventKind;
use crate::store::InventoryStore;

pub const REPORT_HEADER: &str = "Items Report";

impl InventoryStore {
    /// Header line, then `<name> -> <quantity>` per item in name order.
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (name, qty) in self.items() {
            writeln!(out, "{name} -> {qty}")?;
        }
        Ok(())
    }

    pub fn render_report(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_report(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the report to stdout. A closed pipe is ignored; other failures
    /// are recorded on the event sink.
    pub fn print_report(&self) {
        let stdout = io::stdout();
        self.report_to(&mut stdout.lock());
    }

    /// Write the report to `out` and flush it, recording any failure other
    /// than a closed pipe on the event sink.
    pub fn report_to(&self, out: &mut dyn Write) {
        let result = self.write_report(out).and_then(|()| out.flush());
        match result {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
            Err(err) => self.emit(StockEventKind::ReportFailed {
                reason: err.to_string(),
            }),
        }
    }
}
