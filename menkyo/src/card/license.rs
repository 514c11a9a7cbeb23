// menkyo-rs/menkyo/src/card/license.rs
//! Driver's license field extraction.

use log::{debug, warn};

use crate::apdu::Command;
use crate::session::CardSession;
use crate::types::RemainingUseCount;
use crate::Result;

/// Fields read from the license chip. Either may be missing after a
/// partial read; the caller decides whether to retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseFields {
    pub remaining_use_count: Option<RemainingUseCount>,
    /// Raw expiry data file (17 bytes on a real card). Empty if unread.
    pub expiry_raw: Vec<u8>,
}

/// Read the remaining count and expiry file into `fields`.
///
/// Fields are written as soon as they are known, so a failure part way
/// through still leaves whatever was read before it.
///
/// Order matters: select MF, query remaining count, select the expiry EF,
/// read it. A transport failure selecting either file aborts; a failed
/// remaining-count query does not. The expiry is only stored when the
/// read returns 9000.
pub fn extract(session: &mut dyn CardSession, fields: &mut LicenseFields) -> Result<()> {
    session.send(Command::SelectMasterFile)?;

    // 残り回数は SW2 下位 4bit。SW1 は問わない
    match session.send(Command::QueryRemainingCount) {
        Ok(resp) => fields.remaining_use_count = Some(RemainingUseCount::from_sw2(resp.sw2())),
        Err(e) => warn!("remaining count query failed: {}", e),
    }

    session.send(Command::SelectExpiryFile)?;

    let expiry = session
        .send(Command::ReadExpiry)?
        .success_data(Command::ReadExpiry.name())?;
    debug!("expiry file: {} bytes", expiry.len());
    fields.expiry_raw = expiry;
    Ok(())
}
