//! Simulation configuration and the shareable token format.
//!
//! A [`Config`] is a plain value carrier: it performs no range validation of
//! its own. Nonsensical values (negative dimensions and the like) pass
//! through `merge` and `from_token` untouched and are rejected at the point
//! of use, i.e. [`Engine::new`](crate::engine::Engine::new).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything needed to reproduce a simulation exactly.
///
/// The serialized field names and their order are a compatibility surface:
/// tokens are JSON in exactly this shape, base64-encoded, so any
/// implementation that agrees on the shape can decode them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Grid width in cells.
    pub num_cells_x: i32,
    /// Grid height in cells.
    pub num_cells_y: i32,
    /// Cell edge length in pixels. Only the rendering surface reads this.
    pub cell_size: i32,
    /// Treat the grid as a torus when looking up neighbours.
    pub wrap_around: bool,
    /// Seed for deterministic grid initialization.
    pub seed: f64,
}

impl Default for Config {
    /// 80x80 cells of 10px, no wrapping, and a freshly drawn seed.
    fn default() -> Config {
        Config {
            num_cells_x: 80,
            num_cells_y: 80,
            cell_size: 10,
            wrap_around: false,
            seed: rand::random(),
        }
    }
}

/// A partial set of [`Config`] fields, used to override a base config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    pub num_cells_x: Option<i32>,
    pub num_cells_y: Option<i32>,
    pub cell_size: Option<i32>,
    pub wrap_around: Option<bool>,
    pub seed: Option<f64>,
}

impl Config {
    /// Returns a new config where each field takes the patch's value if
    /// present, and this config's value otherwise. `self` is never mutated.
    pub fn merge(&self, patch: &ConfigPatch) -> Config {
        Config {
            num_cells_x: patch.num_cells_x.unwrap_or(self.num_cells_x),
            num_cells_y: patch.num_cells_y.unwrap_or(self.num_cells_y),
            cell_size: patch.cell_size.unwrap_or(self.cell_size),
            wrap_around: patch.wrap_around.unwrap_or(self.wrap_around),
            seed: patch.seed.unwrap_or(self.seed),
        }
    }

    /// Encodes this config as a transport-safe text token.
    ///
    /// The token is the canonical JSON serialization of the five fields,
    /// base64-encoded (standard alphabet, padded). [`Config::from_token`] is
    /// its exact inverse.
    pub fn to_token(&self) -> String {
        let json = serde_json::to_vec(self).expect("Config serializes to JSON infallibly");
        BASE64.encode(json)
    }

    /// Decodes a token produced by [`Config::to_token`].
    ///
    /// Fails if the token is not valid base64, or if the decoded payload is
    /// not exactly the five expected fields with the right JSON kinds. No
    /// range validation happens here; a structurally valid token with, say,
    /// a negative width decodes fine and fails engine construction instead.
    pub fn from_token(token: &str) -> Result<Config, DecodeError> {
        let json = BASE64.decode(token)?;
        let config = serde_json::from_slice(&json)?;
        Ok(config)
    }
}

/// A share token could not be turned back into a [`Config`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token is not valid base64 text.
    #[error("token is not valid base64: {0}")]
    Transport(#[from] base64::DecodeError),

    /// The token decoded, but its payload is not a valid config
    /// serialization (missing or extra fields, wrong value kinds).
    #[error("token payload is not a valid config: {0}")]
    Payload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_config() -> Config {
        Config {
            num_cells_x: 12,
            num_cells_y: 34,
            cell_size: 5,
            wrap_around: true,
            seed: 0.8444218515250481,
        }
    }

    #[test]
    fn test_default_dimensions() {
        let config = Config::default();
        assert_eq!(config.num_cells_x, 80);
        assert_eq!(config.num_cells_y, 80);
        assert_eq!(config.cell_size, 10);
        assert!(!config.wrap_around);
    }

    #[test]
    fn test_merge_overrides_present_fields_only() {
        let base = fixed_config();
        let patch = ConfigPatch {
            num_cells_y: Some(99),
            wrap_around: Some(false),
            ..ConfigPatch::default()
        };
        let merged = base.merge(&patch);
        assert_eq!(merged.num_cells_x, 12);
        assert_eq!(merged.num_cells_y, 99);
        assert_eq!(merged.cell_size, 5);
        assert!(!merged.wrap_around);
        assert_eq!(merged.seed, base.seed);
    }

    #[test]
    fn test_merge_never_mutates_base() {
        let base = fixed_config();
        let before = base.clone();
        let _ = base.merge(&ConfigPatch {
            num_cells_x: Some(1),
            num_cells_y: Some(1),
            cell_size: Some(1),
            wrap_around: Some(false),
            seed: Some(0.0),
        });
        assert_eq!(base, before);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = fixed_config();
        assert_eq!(base.merge(&ConfigPatch::default()), base);
    }

    #[test]
    fn test_token_round_trip() {
        let config = fixed_config();
        let decoded = Config::from_token(&config.to_token()).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_token_round_trip_default() {
        // Default configs carry an arbitrary random seed; it must survive
        // the trip bit-for-bit.
        let config = Config::default();
        let decoded = Config::from_token(&config.to_token()).unwrap();
        assert_eq!(decoded, config);
        assert_eq!(decoded.seed.to_bits(), config.seed.to_bits());
    }

    #[test]
    fn test_token_payload_shape() {
        let config = Config {
            seed: 0.5,
            ..fixed_config()
        };
        let json = BASE64.decode(config.to_token()).unwrap();
        let text = String::from_utf8(json).unwrap();
        assert_eq!(
            text,
            "{\"numCellsX\":12,\"numCellsY\":34,\"cellSize\":5,\
             \"wrapAround\":true,\"seed\":0.5}"
        );
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = Config::from_token("not base64!!!").unwrap_err();
        assert!(matches!(err, DecodeError::Transport(_)));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let token = BASE64.encode(r#"{"numCellsX":12}"#);
        let err = Config::from_token(&token).unwrap_err();
        assert!(matches!(err, DecodeError::Payload(_)));
    }

    #[test]
    fn test_decode_rejects_extra_fields() {
        let token = BASE64.encode(
            r#"{"numCellsX":12,"numCellsY":34,"cellSize":5,"wrapAround":true,"seed":0.5,"extra":1}"#,
        );
        let err = Config::from_token(&token).unwrap_err();
        assert!(matches!(err, DecodeError::Payload(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_value_kinds() {
        let token = BASE64.encode(
            r#"{"numCellsX":"eighty","numCellsY":34,"cellSize":5,"wrapAround":true,"seed":0.5}"#,
        );
        let err = Config::from_token(&token).unwrap_err();
        assert!(matches!(err, DecodeError::Payload(_)));
    }

    #[test]
    fn test_decode_accepts_nonsense_values() {
        // Structurally valid but semantically absurd payloads are a
        // downstream problem, not a decode error.
        let token = BASE64.encode(
            r#"{"numCellsX":-5,"numCellsY":0,"cellSize":-1,"wrapAround":false,"seed":0.5}"#,
        );
        let config = Config::from_token(&token).unwrap();
        assert_eq!(config.num_cells_x, -5);
        assert_eq!(config.num_cells_y, 0);
        assert_eq!(config.cell_size, -1);
    }
}
