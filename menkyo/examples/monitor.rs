// Watch all readers and print one line per inserted card. Ctrl-C to quit.
//
// Run with: cargo run -p menkyo --example monitor --features pcsc

use menkyo::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let backend = PcscBackend::establish()?;
    let mut monitor = Monitor::new(backend, MonitorConfig::default())?;
    println!("watching {} reader(s)", monitor.readers().len());

    monitor.run(|outcome| {
        let id = outcome
            .snapshot
            .as_ref()
            .map(|s| format!("{} {}", s.card_type(), s.card_id()))
            .unwrap_or_else(|| "-".to_string());
        match &outcome.error {
            None => println!("[{}] {}", outcome.reader, id),
            Some(e) => println!("[{}] {} (error: {})", outcome.reader, id, e),
        }
    });
    Ok(())
}
