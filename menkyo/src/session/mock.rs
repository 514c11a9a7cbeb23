// menkyo-rs/menkyo/src/session/mock.rs

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::apdu::{ApduResponse, Command};
use crate::session::traits::{CardBackend, CardSession};
use crate::types::{Atr, Presence, ReaderStatus};
use crate::{Error, Result};

/// Status word returned for commands a mock card has no script for
/// (function not supported).
const UNSCRIPTED_REPLY: [u8; 2] = [0x6A, 0x81];

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking test thread must not hide the recorded transcript.
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Raw response bytes including SW1/SW2.
    Raw(Vec<u8>),
    /// The exchange fails at the transport level.
    TransportError(String),
}

/// A scripted card. Each command has a queue of replies; the last reply in
/// a queue is sticky so a card keeps answering the same way across attempts.
#[derive(Debug, Clone, Default)]
pub struct MockCard {
    atr: Vec<u8>,
    replies: HashMap<Vec<u8>, VecDeque<MockReply>>,
}

impl MockCard {
    pub fn new(atr: &[u8]) -> Self {
        Self {
            atr: atr.to_vec(),
            replies: HashMap::new(),
        }
    }

    pub fn atr(&self) -> &[u8] {
        &self.atr
    }

    /// Queue a raw reply (data + SW1 + SW2) for `command`.
    pub fn reply(self, command: Command, raw: &[u8]) -> Self {
        self.push(command, MockReply::Raw(raw.to_vec()))
    }

    /// Queue a transport failure for `command`.
    pub fn fail(self, command: Command) -> Self {
        self.push(
            command,
            MockReply::TransportError(format!("{} transmit failed", command.name())),
        )
    }

    pub fn push(mut self, command: Command, reply: MockReply) -> Self {
        self.replies
            .entry(command.bytes().to_vec())
            .or_default()
            .push_back(reply);
        self
    }

    fn respond(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        let reply = match self.replies.get_mut(apdu) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        match reply {
            Some(MockReply::Raw(raw)) => ApduResponse::from_raw(&raw),
            Some(MockReply::TransportError(msg)) => Err(Error::Transport(msg)),
            None => ApduResponse::from_raw(&UNSCRIPTED_REPLY),
        }
    }
}

#[derive(Debug, Default)]
struct LogInner {
    sent: Vec<Vec<u8>>,
    connects: usize,
    disconnects: usize,
    polls: usize,
}

/// Shared record of everything the mock binding saw. Clones observe the
/// same log, so tests keep one after handing the backend to a monitor.
#[derive(Debug, Clone, Default)]
pub struct MockLog {
    inner: Arc<Mutex<LogInner>>,
}

impl MockLog {
    /// Every APDU transmitted, in order, across all sessions.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        lock(&self.inner).sent.clone()
    }

    /// The transcript mapped back to catalog commands.
    pub fn sent_commands(&self) -> Vec<Option<Command>> {
        lock(&self.inner)
            .sent
            .iter()
            .map(|apdu| Command::from_bytes(apdu))
            .collect()
    }

    pub fn count(&self, command: Command) -> usize {
        lock(&self.inner)
            .sent
            .iter()
            .filter(|apdu| apdu.as_slice() == command.bytes())
            .count()
    }

    pub fn connects(&self) -> usize {
        lock(&self.inner).connects
    }

    pub fn disconnects(&self) -> usize {
        lock(&self.inner).disconnects
    }

    pub fn polls(&self) -> usize {
        lock(&self.inner).polls
    }

    pub fn clear(&self) {
        *lock(&self.inner) = LogInner::default();
    }
}

/// Scripted platform binding for unit and integration tests.
///
/// Presence polls are served from a queue; once it runs dry the last
/// answer repeats (a reader nobody touches keeps reporting the same state).
#[derive(Debug, Default)]
pub struct MockBackend {
    readers: Vec<String>,
    cards: HashMap<String, Arc<Mutex<MockCard>>>,
    presence: VecDeque<Result<Vec<ReaderStatus>>>,
    last_presence: Option<Vec<ReaderStatus>>,
    connect_failures: usize,
    list_failures: usize,
    log: MockLog,
}

impl MockBackend {
    pub fn new<I, S>(readers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            readers: readers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Put `card` into `reader`. Connects to a reader without a card fail.
    pub fn with_card(mut self, reader: &str, card: MockCard) -> Self {
        self.insert_card(reader, card);
        self
    }

    pub fn insert_card(&mut self, reader: &str, card: MockCard) {
        self.cards
            .insert(reader.to_string(), Arc::new(Mutex::new(card)));
    }

    pub fn remove_card(&mut self, reader: &str) {
        self.cards.remove(reader);
    }

    /// Replace the reader list returned by subsequent enumerations.
    pub fn set_readers<I, S>(&mut self, readers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.readers = readers.into_iter().map(Into::into).collect();
    }

    /// Queue the answer to one presence poll.
    pub fn push_presence(&mut self, statuses: Vec<ReaderStatus>) {
        self.presence.push_back(Ok(statuses));
    }

    /// Queue a failing presence poll.
    pub fn push_poll_error(&mut self, msg: &str) {
        self.presence
            .push_back(Err(Error::Transport(msg.to_string())));
    }

    /// Make the next `n` connects fail.
    pub fn set_connect_failures(&mut self, n: usize) {
        self.connect_failures = n;
    }

    /// Make the next `n` reader enumerations fail.
    pub fn set_list_failures(&mut self, n: usize) {
        self.list_failures = n;
    }

    pub fn log(&self) -> MockLog {
        self.log.clone()
    }
}

impl CardBackend for MockBackend {
    fn list_readers(&mut self) -> Result<Vec<String>> {
        if self.list_failures > 0 {
            self.list_failures -= 1;
            return Err(Error::Transport("reader enumeration failed".into()));
        }
        Ok(self.readers.clone())
    }

    fn connect(&mut self, reader: &str) -> Result<(Box<dyn CardSession>, Atr)> {
        if self.connect_failures > 0 {
            self.connect_failures -= 1;
            return Err(Error::Connect {
                reader: reader.to_string(),
                reason: "simulated connect failure".into(),
            });
        }
        if !self.readers.iter().any(|r| r == reader) {
            return Err(Error::ReaderNotFound(reader.to_string()));
        }
        let card = self.cards.get(reader).cloned().ok_or_else(|| Error::Connect {
            reader: reader.to_string(),
            reason: "no card in reader".into(),
        })?;
        lock(&self.log.inner).connects += 1;
        let atr = Atr::from_bytes(lock(&card).atr());
        let session = MockSession {
            card,
            log: self.log.clone(),
            connected: true,
        };
        Ok((Box::new(session), atr))
    }

    fn wait_for_presence_change(
        &mut self,
        readers: &[String],
        _timeout: Duration,
    ) -> Result<Vec<ReaderStatus>> {
        lock(&self.log.inner).polls += 1;
        match self.presence.pop_front() {
            Some(Ok(statuses)) => {
                self.last_presence = Some(statuses.clone());
                Ok(statuses)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last_presence.clone().unwrap_or_else(|| {
                readers
                    .iter()
                    .map(|r| ReaderStatus::new(r.clone(), Presence::Empty))
                    .collect()
            })),
        }
    }
}

/// Session handed out by [`MockBackend::connect`].
#[derive(Debug)]
pub struct MockSession {
    card: Arc<Mutex<MockCard>>,
    log: MockLog,
    connected: bool,
}

impl CardSession for MockSession {
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        if !self.connected {
            return Err(Error::Transport("session disconnected".into()));
        }
        lock(&self.log.inner).sent.push(apdu.to_vec());
        lock(&self.card).respond(apdu)
    }

    fn disconnect(&mut self) -> Result<()> {
        if self.connected {
            self.connected = false;
            lock(&self.log.inner).disconnects += 1;
        }
        Ok(())
    }
}
