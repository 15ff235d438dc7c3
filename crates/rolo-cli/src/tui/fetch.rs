//! Background fetch for the interactive view.
//!
//! The fetch runs on its own thread and reports back over a channel. Each
//! outcome carries the generation it was started for; the receiver drops
//! anything from a superseded generation so a slow response can never
//! clobber the state of a newer refresh.

use std::sync::mpsc::Sender;
use std::thread;

use rolo_source::RemoteSource;
use rolo_types::Contact;

pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<Contact>, rolo_source::Error>,
}

pub fn spawn(source: RemoteSource, generation: u64, tx: Sender<FetchOutcome>) {
    thread::spawn(move || {
        let result = source.fetch();
        // Receiver may already be gone (user quit); that's fine.
        let _ = tx.send(FetchOutcome { generation, result });
    });
}
