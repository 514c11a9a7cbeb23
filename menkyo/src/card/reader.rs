// menkyo-rs/menkyo/src/card/reader.rs

use std::ops::{Deref, DerefMut};

use log::{debug, info, warn};

use crate::apdu::Command;
use crate::card::detect::detect;
use crate::card::identity::read_contactless_id;
use crate::card::license::{LicenseFields, extract};
use crate::card::snapshot::CardSnapshot;
use crate::session::{CardBackend, CardSession};
use crate::Result;

/// Owns a session for the duration of one read. On drop it ends the
/// transparent session and disconnects, whatever happened before.
struct SessionGuard {
    reader: String,
    session: Box<dyn CardSession>,
}

impl Deref for SessionGuard {
    type Target = dyn CardSession;

    fn deref(&self) -> &Self::Target {
        self.session.as_ref()
    }
}

impl DerefMut for SessionGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.session.as_mut()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        // 初期化に失敗していても終了コマンドは送る
        if let Err(e) = self.session.send(Command::EndTransparent) {
            debug!("{}: end of session failed: {}", self.reader, e);
        }
        if let Err(e) = self.session.disconnect() {
            debug!("{}: disconnect failed: {}", self.reader, e);
        }
    }
}

/// Perform one complete read of the card in `reader`.
///
/// Connects, opens the transparent session, detects the card type, pulls
/// the license fields when applicable and finally the contactless ID.
/// Only a failed connect or session start is an error; missing fields show
/// up as gaps in the snapshot (see [`CardSnapshot::is_complete`]).
pub fn read_once<B: CardBackend + ?Sized>(backend: &mut B, reader: &str) -> Result<CardSnapshot> {
    let (session, atr) = backend.connect(reader)?;
    let mut guard = SessionGuard {
        reader: reader.to_string(),
        session,
    };
    debug!("{}: connected, atr={}", reader, atr.to_hex());

    guard.send(Command::Start)?;
    guard.send(Command::StartTransparent)?;

    let card_type = detect(&mut *guard, &atr);

    let mut fields = LicenseFields::default();
    if card_type.is_license() {
        if let Err(e) = extract(&mut *guard, &mut fields) {
            warn!("{}: license read incomplete: {}", reader, e);
        }
    }

    let contactless_id = read_contactless_id(&mut *guard).unwrap_or_default();
    drop(guard);

    let snapshot = CardSnapshot::builder(reader, atr)
        .card_type(card_type)
        .license(fields)
        .contactless_id(contactless_id)
        .build();
    info!(
        "{}: read {} card, id={}",
        reader,
        snapshot.card_type(),
        snapshot.card_id()
    );
    Ok(snapshot)
}
