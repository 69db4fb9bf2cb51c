//! External data providers

pub mod etherscan;

pub use etherscan::EtherscanClient;
