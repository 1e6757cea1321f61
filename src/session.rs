use std::fs;
use std::path::Path;

use bincode::{Decode, Encode};
use log::{info, warn};

use crate::config::RenderConfig;
use crate::encoder::{encode_text, ComplexNumber};
use crate::error::Result;

pub const DEFAULT_TEXT: &str = "Hello Fractal World!";

/// Front-end state kept between runs.
#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct Session {
    pub text: String,
    pub parameter: ComplexNumber,
    pub config: RenderConfig,
}

impl Session {
    pub fn new(config: RenderConfig) -> Self {
        Session::with_text(DEFAULT_TEXT, config)
    }

    pub fn with_text(text: &str, config: RenderConfig) -> Self {
        Session {
            text: text.to_string(),
            parameter: encode_text(text),
            config,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.reencode();
    }

    /// Recomputes the parameter from the current text.
    pub fn reencode(&mut self) -> ComplexNumber {
        self.parameter = encode_text(&self.text);
        self.parameter
    }

    pub fn save<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let cfg = bincode::config::standard();
        let encoded = bincode::encode_to_vec(self, cfg)?;
        fs::write(&filename, encoded)?;
        info!("saved session to {}", filename.as_ref().display());
        Ok(())
    }

    /// Startup state. A config file, when present, overrides the saved
    /// config; without one the saved config stays. A session file that
    /// exists but cannot be read is reported and replaced by a new session.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(session_file: P, config_file: Q) -> Result<Self> {
        let (session_file, config_file) = (session_file.as_ref(), config_file.as_ref());
        let config = if config_file.exists() {
            Some(RenderConfig::load(config_file)?)
        } else {
            None
        };

        match Session::load(session_file) {
            Ok(mut session) => {
                if let Some(config) = config {
                    session.config = config;
                }
                Ok(session)
            }
            Err(e) => {
                if session_file.exists() {
                    warn!("ignoring unreadable session {}: {}", session_file.display(), e);
                }
                Ok(Session::new(config.unwrap_or_default()))
            }
        }
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let data = fs::read(&filename)?;
        let cfg = bincode::config::standard();
        let (mut session, _len): (Session, usize) = bincode::decode_from_slice(&data, cfg)?;
        session.config.validate()?;
        // Stored parameter is advisory; the text is the source of truth.
        session.reencode();
        info!("loaded session from {}", filename.as_ref().display());
        Ok(session)
    }
}
