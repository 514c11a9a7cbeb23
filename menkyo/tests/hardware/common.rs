#![cfg(feature = "pcsc")]

//! 共通: 実機テスト用ヘルパー
//!
//! PC/SC サービスやリーダーが無い環境 (CI 等) では `Ok(None)` を返す。

use menkyo::session::{CardBackend, PcscBackend};
use menkyo::{Error, Result};

/// Establish a context and return it with its readers.
///
/// - Ok(Some(..)) : サービスとリーダーが見つかった
/// - Ok(None) : サービスまたはリーダーが無い
/// - Err(e) : その他のエラー
pub fn open_backend() -> Result<Option<(PcscBackend, Vec<String>)>> {
    let mut backend = match PcscBackend::establish() {
        Ok(b) => b,
        Err(Error::Pcsc(pcsc::Error::NoService)) => return Ok(None),
        Err(e) => return Err(e),
    };
    let readers = backend.list_readers()?;
    if readers.is_empty() {
        return Ok(None);
    }
    Ok(Some((backend, readers)))
}
