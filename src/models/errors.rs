use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog list [{list}] is empty")]
    EmptyList {
        list: &'static str
    },
    #[error("Catalog list [{list}] contains duplicate key [{key}]")]
    DuplicateKey {
        list: &'static str,
        key: String
    },
    #[error("Catalog list [{list}] has a negative amount for [{key}]")]
    NegativeAmount {
        list: &'static str,
        key: String
    }
}

impl CatalogError {
    pub fn empty_list(list: &'static str) -> Self {
        Self::EmptyList { list }
    }

    pub fn duplicate_key(list: &'static str, key: &str) -> Self {
        Self::DuplicateKey { list, key: key.to_string() }
    }

    pub fn negative_amount(list: &'static str, key: &str) -> Self {
        Self::NegativeAmount { list, key: key.to_string() }
    }
}
