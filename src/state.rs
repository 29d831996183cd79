//! Persistence shell: stored state, the load/save port, and URL state.
//!
//! The layout core never touches any of this. A shell resolves the state
//! to edit from the highest-priority source that parses and validates
//! (URL, then store, then built-in defaults), edits it replace-on-write,
//! and saves it back through a [`StatePort`].

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use base64::Engine;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use crate::errors::{SourceContext, StateError, ValidationError};
use crate::log::{debug, warn};
use crate::model::{HardEasyPost, SignData, SignType, SmallWayfindingSign, WarningPost, WayfindingSign};

/// Query parameter that carries encoded state
pub const URL_STATE_PARAM: &str = "state";

/// base64url; encodes without padding, accepts either on decode
const URL_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// One slot per sign type. Slots missing from stored JSON are filled from
/// defaults on load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerType {
    pub wayfinding: WayfindingSign,
    pub warning: WarningPost,
    pub hardeasy: HardEasyPost,
    pub smallwayfinding: SmallWayfindingSign,
}

/// Everything the editor remembers between sessions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    #[serde(default)]
    pub active_type: SignType,
    #[serde(default)]
    pub per_type: PerType,
}

impl StoredState {
    /// The sign currently being edited
    pub fn active(&self) -> SignData {
        self.slot(self.active_type)
    }

    /// The last-edited value for a sign type
    pub fn slot(&self, sign_type: SignType) -> SignData {
        match sign_type.or_wayfinding() {
            SignType::Warning => self.per_type.warning.clone().into(),
            SignType::HardEasy => self.per_type.hardeasy.clone().into(),
            SignType::SmallWayfinding => self.per_type.smallwayfinding.clone().into(),
            SignType::Wayfinding | SignType::Unknown => self.per_type.wayfinding.clone().into(),
        }
    }

    /// Make another sign type active; every slot keeps its value.
    pub fn switch_active(self, sign_type: SignType) -> StoredState {
        StoredState {
            active_type: sign_type.or_wayfinding(),
            ..self
        }
    }

    /// Replace the slot for `sign`'s type and make that type active.
    pub fn update_active(self, sign: SignData) -> StoredState {
        let active_type = sign.sign_type();
        let mut per_type = self.per_type;
        match sign {
            SignData::Wayfinding(s) => per_type.wayfinding = s,
            SignData::Warning(s) => per_type.warning = s,
            SignData::HardEasy(s) => per_type.hardeasy = s,
            SignData::SmallWayfinding(s) => per_type.smallwayfinding = s,
        }
        StoredState { active_type, per_type }
    }

    /// Validate every slot, not just the active one
    pub fn validate(&self) -> Result<(), ValidationError> {
        SignType::KNOWN.iter().try_for_each(|t| self.slot(*t).validate())
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Parse and validate a single sign
pub fn parse_sign_json(text: &str, name: &str) -> Result<SignData, StateError> {
    let ctx = SourceContext::new(name, text);
    let sign: SignData = serde_json::from_str(text).map_err(|e| StateError::from_json(&e, &ctx))?;
    sign.validate()?;
    Ok(sign)
}

/// Parse and validate stored state
pub fn parse_state_json(text: &str, name: &str) -> Result<StoredState, StateError> {
    let ctx = SourceContext::new(name, text);
    let state: StoredState = serde_json::from_str(text).map_err(|e| StateError::from_json(&e, &ctx))?;
    state.validate()?;
    Ok(state)
}

pub fn state_to_json(state: &StoredState) -> Result<String, StateError> {
    serde_json::to_string_pretty(state).map_err(StateError::Serialise)
}

// ============================================================================
// URL state
// ============================================================================

pub fn encode_url_state(state: &StoredState) -> Result<String, StateError> {
    let json = serde_json::to_string(state).map_err(StateError::Serialise)?;
    Ok(URL_ENGINE.encode(json))
}

pub fn decode_url_state(encoded: &str) -> Result<StoredState, StateError> {
    let bytes = URL_ENGINE.decode(encoded.trim()).map_err(StateError::BadUrlEncoding)?;
    let json = String::from_utf8(bytes).map_err(StateError::NotUtf8)?;
    parse_state_json(&json, "<url>")
}

/// The percent-decoded `state` query value of `url`, if any.
///
/// Accepts an absolute URL or a bare query string (`state=...`).
pub fn state_from_url(url: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = match Url::parse(url) {
        Ok(parsed) => parsed.query_pairs().into_owned().collect(),
        Err(_) => {
            let query = url.split_once('?').map_or(url, |(_, q)| q);
            let query = query.split('#').next().unwrap_or(query);
            form_urlencoded::parse(query.as_bytes()).into_owned().collect()
        }
    };
    pairs
        .into_iter()
        .find(|(key, _)| key == URL_STATE_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// `base` with the encoded state as its only query parameter
pub fn share_url(base: &str, state: &StoredState) -> Result<String, StateError> {
    let mut url = Url::parse(base).map_err(|source| StateError::BadBaseUrl {
        url: base.to_string(),
        source,
    })?;
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(URL_STATE_PARAM, &encode_url_state(state)?);
    Ok(url.into())
}

// ============================================================================
// Storage port
// ============================================================================

/// Load/save port the shell persists through.
pub trait StatePort {
    /// Stored state, or `None` when absent or unreadable
    fn load(&self) -> Option<StoredState>;
    fn save(&self, state: &StoredState) -> Result<(), StateError>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Like [`StatePort::load`], but reports why a present file was rejected
    pub fn read(&self) -> Result<Option<StoredState>, StateError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StateError::Io {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };
        parse_state_json(&text, &self.path.display().to_string()).map(Some)
    }
}

impl StatePort for FileStore {
    fn load(&self) -> Option<StoredState> {
        match self.read() {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding stored state");
                None
            }
        }
    }

    fn save(&self, state: &StoredState) -> Result<(), StateError> {
        let io_err = |source| StateError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = state_to_json(state)?;
        std::fs::write(&self.path, json + "\n").map_err(io_err)?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// In-memory store for tests and embedders
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<StoredState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoredState) -> Self {
        MemoryStore {
            state: Mutex::new(Some(state)),
        }
    }
}

impl StatePort for MemoryStore {
    fn load(&self) -> Option<StoredState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, state: &StoredState) -> Result<(), StateError> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
        Ok(())
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Where resolved state came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSource {
    Url,
    Store,
    Defaults,
}

/// Pick the state to edit: URL, then store, then defaults.
///
/// A source that fails to decode, parse or validate is skipped; the
/// failure is logged and never returned.
pub fn resolve_state(url: Option<&str>, store: &dyn StatePort) -> (StoredState, StateSource) {
    if let Some(encoded) = url.and_then(state_from_url) {
        match decode_url_state(&encoded) {
            Ok(state) => {
                debug!("state resolved from url");
                return (state, StateSource::Url);
            }
            Err(err) => warn!(error = %err, "ignoring url state"),
        }
    }
    if let Some(state) = store.load() {
        match state.validate() {
            Ok(()) => {
                debug!("state resolved from store");
                return (state, StateSource::Store);
            }
            Err(err) => warn!(error = %err, "ignoring stored state"),
        }
    }
    (StoredState::default(), StateSource::Defaults)
}
