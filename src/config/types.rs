// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_WORD_STORE_URL: &str = "http://localhost:5000";
pub const DEFAULT_KNOWLEDGE_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_MAX_SUMMARY_WORDS: usize = 100;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// How concurrent responses are reconciled with the displayed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyMode {
    /// Only the response to the most recently issued request of each kind is applied
    #[default]
    Sequenced,
    /// Every response is applied in completion order, sharing one loading flag
    LastWriteWins,
}

/// Word store section
#[derive(Debug, Clone, Deserialize)]
pub struct WordStoreConfig {
    #[serde(default = "default_word_store_url")]
    pub base_url: String,
}

impl Default for WordStoreConfig {
    fn default() -> Self {
        WordStoreConfig {
            base_url: default_word_store_url(),
        }
    }
}

/// Enrichment (knowledge API) section
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_knowledge_api_url")]
    pub api_url: String,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        EnrichmentConfig {
            enabled: true,
            api_url: default_knowledge_api_url(),
            max_words: DEFAULT_MAX_SUMMARY_WORDS,
        }
    }
}

/// Network section
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Behavior section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub consistency: ConsistencyMode,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub word_store: WordStoreConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_word_store_url() -> String {
    DEFAULT_WORD_STORE_URL.to_string()
}

fn default_knowledge_api_url() -> String {
    DEFAULT_KNOWLEDGE_API_URL.to_string()
}

fn default_max_words() -> usize {
    DEFAULT_MAX_SUMMARY_WORDS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_true() -> bool {
    true
}
