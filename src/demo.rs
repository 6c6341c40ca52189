use lazy_static::lazy_static;

use crate::queue::TicketQueue;
use crate::ticket::TicketRecord;

const ROSTER_YAML: &str = "
- number: 501
  passenger: Aisha
  destination: dubai
- number: 502
  passenger: Ahmed
  destination: london
- number: 503
  passenger: Hina
  destination: tronto
";

lazy_static! {
    pub static ref DEMO_ROSTER: Vec<TicketRecord> =
        serde_yaml::from_str(ROSTER_YAML).expect("built-in roster must parse");
}

/// Runs the fixed booking-counter scenario and prints the transcript
/// to stdout.
pub fn run() {
    let mut queue = TicketQueue::new();
    for record in DEMO_ROSTER.iter() {
        if let Err(e) = queue.enqueue(record.clone()) {
            log::error!("enqueue failed: {}", e);
        }
    }
    log::debug!("{} tickets enqueued", queue.len());

    println!("original queue:");
    queue.display();

    if let Some(next) = queue.peek() {
        log::debug!("next to serve: {}", next);
    }
    match queue.dequeue() {
        Ok(served) => log::info!("served ticket {}", served.number),
        Err(e) => log::error!("dequeue failed: {}", e),
    }

    println!("after one dequeue:");
    queue.display();
}
