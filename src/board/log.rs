//! Logging shim over the `log` crate.
//!
//! Records are only emitted when the `logging` feature is enabled; without it
//! the macro expands to nothing.

macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        ::log::$level!(target: "checkers_engine", $($arg)+);
    };
}

#[cfg(all(test, feature = "logging"))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::board::{Board, Coordinate, Move};

    struct CountingLogger;

    static RECORDS: AtomicUsize = AtomicUsize::new(0);
    static LOGGER: CountingLogger = CountingLogger;

    impl ::log::Log for CountingLogger {
        fn enabled(&self, metadata: &::log::Metadata) -> bool {
            metadata.target() == "checkers_engine"
        }

        fn log(&self, record: &::log::Record) {
            if self.enabled(record.metadata()) {
                RECORDS.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_engine_log_reaches_installed_logger() {
        // Another test may already have installed it.
        let _ = ::log::set_logger(&LOGGER);
        ::log::set_max_level(::log::LevelFilter::Trace);

        let before = RECORDS.load(Ordering::SeqCst);
        engine_log!(debug, "direct record {}", 1);
        assert!(RECORDS.load(Ordering::SeqCst) > before);

        let before = RECORDS.load(Ordering::SeqCst);
        let mut board = Board::new(false);
        let mv = Move::quiet(Coordinate::new(3, 3), Coordinate::new(4, 4));
        board.apply_move(mv).unwrap();
        let backwards = Move::quiet(Coordinate::new(4, 4), Coordinate::new(3, 3));
        assert!(board.apply_move(backwards).is_err());
        assert!(RECORDS.load(Ordering::SeqCst) >= before + 3);
    }
}
