//! Token service views: token info, account relationships, and NFTs.

mod info;
mod nft;
mod relationship;

pub use info::{PauseStatus, SupplyType, TokenInfo, TokenType};
pub use nft::{Nft, NftTransfer, SerialNumber};
pub use relationship::{FreezeStatus, KycStatus, TokenRelationship};
