// atsprobe/src/transport/pcsc.rs

#![cfg(feature = "pcsc")]

//! PC/SC transport backed by the `pcsc` crate.
//!
//! Escape control transfers go through `SCardControl`; the reserved
//! feature-request code is computed with the platform's SCARD_CTL_CODE
//! encoding, which differs between Windows and pcsc-lite.

use std::ffi::CString;

use log::debug;
use pcsc::{Context, Protocols, Scope, ShareMode, MAX_BUFFER_SIZE};

use crate::constants::FEATURE_REQUEST_FUNCTION;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Transport over a connected PC/SC card handle.
///
/// The card handle is a single-owner, serial resource; share one
/// `PcscTransport` across threads only with external synchronization.
pub struct PcscTransport {
    card: pcsc::Card,
    reader_name: String,
    feature_code: u32,
}

impl PcscTransport {
    /// Names of all currently attached readers.
    pub fn list_readers() -> Result<Vec<String>> {
        let ctx = Context::establish(Scope::User)?;
        let len = ctx.list_readers_len()?;
        let mut buf = vec![0u8; len];
        let names = ctx
            .list_readers(&mut buf)?
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        Ok(names)
    }

    /// Connect to a card in the first attached reader.
    pub fn open_first() -> Result<Self> {
        let ctx = Context::establish(Scope::User)?;
        let len = ctx.list_readers_len()?;
        let mut buf = vec![0u8; len];
        let first = ctx
            .list_readers(&mut buf)?
            .next()
            .ok_or(Error::ReaderNotFound)?
            .to_owned();
        Self::connect(&ctx, &first)
    }

    /// Connect to a card in the named reader.
    pub fn open_named(name: &str) -> Result<Self> {
        let ctx = Context::establish(Scope::User)?;
        let cname = CString::new(name).map_err(|e| Error::Transport(e.to_string()))?;
        Self::connect(&ctx, &cname)
    }

    fn connect(ctx: &Context, reader: &std::ffi::CStr) -> Result<Self> {
        let card = ctx.connect(reader, ShareMode::Shared, Protocols::ANY)?;
        let reader_name = reader.to_string_lossy().into_owned();
        // ctl_code applies the platform-specific SCARD_CTL_CODE encoding.
        let feature_code = pcsc::ctl_code(FEATURE_REQUEST_FUNCTION.into()) as u32;
        debug!(
            "connected to \"{}\", feature request code {:#010x}",
            reader_name, feature_code
        );
        Ok(Self {
            card,
            reader_name,
            feature_code,
        })
    }
}

impl Transport for PcscTransport {
    fn transmit_control(&mut self, code: u32, request: &[u8]) -> Result<Vec<u8>> {
        let mut buf = [0u8; MAX_BUFFER_SIZE];
        let resp = self.card.control(code.into(), request, &mut buf)?;
        debug!(
            "control {:#010x}: sent {} byte(s), received {}",
            code,
            request.len(),
            resp.len()
        );
        Ok(resp.to_vec())
    }

    fn feature_request_code(&self) -> u32 {
        self.feature_code
    }

    fn name(&self) -> &str {
        &self.reader_name
    }
}
