//! Design-token build pipeline: a JSON document in, CSS/SCSS/TS/JSON
//! artifacts out.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    casing,
    color::identify_color_format,
    error::{TinctError, TinctResult},
    hex::Hex,
};

/// One design-token entry: a raw value string plus its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A token document, keyed by token name. Sorted for deterministic output.
pub type TokenMap = BTreeMap<String, Token>;

/// Reads a token document, validates its color entries against the hex
/// grammar, and emits `tokens.json`, `tokens.css`, `tokens.scss`,
/// `tokens.ts`, `tokens.d.ts`, and `designSystem.ts` into the output
/// directory (recreated on every build).
#[derive(Debug, Clone)]
pub struct TokenPipeline {
    input: PathBuf,
    out_dir: PathBuf,
}

impl TokenPipeline {
    pub fn new(input: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out_dir: out_dir.into(),
        }
    }

    pub fn build(&self) -> TinctResult<()> {
        let tokens = self.load()?;
        info!(
            "loaded {} design tokens from {}",
            tokens.len(),
            self.input.display()
        );

        if self.out_dir.exists() {
            fs::remove_dir_all(&self.out_dir)
                .map_err(|e| TinctError::io(&self.out_dir, e.to_string()))?;
        }
        fs::create_dir_all(&self.out_dir)
            .map_err(|e| TinctError::io(&self.out_dir, e.to_string()))?;

        let cleaned: TokenMap = tokens
            .iter()
            .map(|(key, token)| (casing::to_kebab_case(key), token.clone()))
            .collect();

        self.write_json(&cleaned)?;
        self.write_css(&cleaned)?;
        self.write_scss(&cleaned)?;
        self.write_ts(&cleaned)?;
        self.write_dts(&cleaned)?;
        self.write_design_system(&cleaned)?;
        info!("wrote token artifacts to {}", self.out_dir.display());
        Ok(())
    }

    /// Reads and decodes the input document, validating that every
    /// `"color"`-typed value parses as hex.
    pub fn load(&self) -> TinctResult<TokenMap> {
        let raw = fs::read_to_string(&self.input)
            .map_err(|e| TinctError::io(&self.input, e.to_string()))?;
        let tokens: TokenMap = serde_json::from_str(&raw)
            .map_err(|e| TinctError::tokens(&self.input, e.to_string()))?;

        for (name, token) in &tokens {
            if token.kind == "color" {
                Hex::parse(&token.value).map_err(|_| {
                    TinctError::tokens(
                        self.input.clone(),
                        format!(
                            "token {name:?} has type \"color\" but its value {:?} is not hex (looks like {:?})",
                            token.value,
                            identify_color_format(&token.value),
                        ),
                    )
                })?;
                debug!("validated color token {name}");
            }
        }
        Ok(tokens)
    }

    fn write_json(&self, tokens: &TokenMap) -> TinctResult<()> {
        let body = serde_json::to_string_pretty(tokens)
            .map_err(|e| TinctError::tokens(&self.input, e.to_string()))?;
        self.write_file("tokens.json", &body)
    }

    fn write_css(&self, tokens: &TokenMap) -> TinctResult<()> {
        let mut out = String::from(":root {\n");
        for (key, token) in tokens {
            out.push_str(&format!("--{}: {};\n", key, token.value));
        }
        out.push('}');
        self.write_file("tokens.css", &out)
    }

    fn write_scss(&self, tokens: &TokenMap) -> TinctResult<()> {
        let mut out = String::from(":root {\n");
        for (key, token) in tokens {
            out.push_str(&format!("${}: {};\n", key, token.value));
        }
        out.push('}');
        self.write_file("tokens.scss", &out)
    }

    fn write_ts(&self, tokens: &TokenMap) -> TinctResult<()> {
        let mut out = String::from("export const tokens = {\n");
        for (key, token) in tokens {
            out.push_str(&format!(
                "  {}: {{ value: '{}', type: '{}' }},\n",
                casing::to_camel_case(key),
                token.value,
                token.kind
            ));
        }
        out.push_str("};\n\nexport default tokens;");
        self.write_file("tokens.ts", &out)
    }

    fn write_dts(&self, tokens: &TokenMap) -> TinctResult<()> {
        let mut out = String::from(
            "export interface Token {\n  value: string;\n  type: string;\n}\n\nexport interface Tokens {\n",
        );
        for key in tokens.keys() {
            out.push_str(&format!("  {}: Token;\n", casing::to_camel_case(key)));
        }
        out.push_str("}\n\ndeclare const tokens: Tokens;\nexport default tokens;");
        self.write_file("tokens.d.ts", &out)
    }

    /// Emits a class with one static per token; `"color"` entries become
    /// `Color` values built from their hex string, everything else a plain
    /// string constant.
    fn write_design_system(&self, tokens: &TokenMap) -> TinctResult<()> {
        let mut out = String::from("import { Color, Hex, Hsl, Rgb } from './colors';\n\n");
        out.push_str("export class DesignSystem {\n");
        for (key, token) in tokens {
            let property = casing::to_pascal_case(key);
            if token.kind == "color" {
                out.push_str(&format!(
                    "  public static {} : Color = new Color(new Hex(\"{}\"));\n",
                    property, token.value
                ));
            } else {
                out.push_str(&format!(
                    "  public static {} : string = '{}';\n",
                    property, token.value
                ));
            }
        }
        out.push_str("}\n");
        self.write_file("designSystem.ts", &out)
    }

    fn write_file(&self, name: &str, contents: &str) -> TinctResult<()> {
        let path = self.out_dir.join(name);
        fs::write(&path, contents).map_err(|e| TinctError::io(&path, e.to_string()))?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Convenience wrapper for the common one-shot build.
pub fn build_tokens(input: impl AsRef<Path>, out_dir: impl AsRef<Path>) -> TinctResult<()> {
    TokenPipeline::new(input.as_ref(), out_dir.as_ref()).build()
}
