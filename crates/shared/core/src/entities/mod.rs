mod transaction_kind;

pub use transaction_kind::{ParseTransactionKindError, TransactionKind};
