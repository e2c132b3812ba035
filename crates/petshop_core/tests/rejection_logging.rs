use log::{LevelFilter, Log, Metadata, Record};
use petshop_core::{CustomerController, CustomerValidator, InMemoryCustomerRepository};
use std::sync::Mutex;

struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

// One test per binary: the logger is process-global.
#[test]
fn rejected_create_emits_a_single_event() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut controller =
        CustomerController::new(CustomerValidator::new(), InMemoryCustomerRepository::new());
    controller.create_customer("", "a@x", "1").unwrap_err();

    let lines = LOGGER.lines.lock().unwrap();
    let rejected: Vec<&String> = lines
        .iter()
        .filter(|line| line.contains("status=rejected"))
        .collect();
    assert_eq!(rejected.len(), 1, "log lines: {lines:?}");
    assert!(rejected[0].starts_with("WARN event=customer_create"));
    assert!(rejected[0].contains("field=name"));
}
