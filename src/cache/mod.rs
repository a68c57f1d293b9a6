pub use instrument_directory::{DirectoryGuard, InstrumentDirectory, SeedMapping};

mod instrument_directory;
