//! Protocol network identifiers and their display aliases.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// CAIP2 chain ids for the networks the indexer stack deploys to.
    static ref CHAIN_ALIASES: HashMap<&'static str, &'static str> = {
        let mut aliases = HashMap::new();
        aliases.insert("eip155:1", "mainnet");
        aliases.insert("eip155:5", "goerli");
        aliases.insert("eip155:11155111", "sepolia");
        aliases.insert("eip155:100", "gnosis");
        aliases.insert("eip155:137", "matic");
        aliases.insert("eip155:250", "fantom");
        aliases.insert("eip155:10", "optimism");
        aliases.insert("eip155:42161", "arbitrum-one");
        aliases.insert("eip155:421613", "arbitrum-goerli");
        aliases.insert("eip155:421614", "arbitrum-sepolia");
        aliases.insert("eip155:43114", "avalanche");
        aliases.insert("eip155:42220", "celo");
        aliases
    };
}

/// Resolve a CAIP2-style chain id to a short human-readable alias.
///
/// Ids without a known alias pass through unchanged, so callers can feed the
/// result straight into display output.
pub fn resolve_chain_alias(id: &str) -> String {
    match CHAIN_ALIASES.get(id) {
        Some(alias) => (*alias).to_string(),
        None => id.to_string(),
    }
}
